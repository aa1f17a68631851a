pub mod batch;
pub mod classifier;
pub mod engine;
pub mod report;

pub use crate::domain::model::{ClassificationReport, OutputFormat, UrlClassification};
pub use crate::domain::ports::{ConfigProvider, UrlClassifier};
pub use crate::utils::error::Result;
