pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalIo, toml_config::TomlConfig, RunConfig};
pub use crate::core::{
    batch::{classify, BatchClassifier},
    classifier::{is_baidu_search_url, matches_baidu_search, BaiduSearchClassifier},
    engine::CheckEngine,
};
pub use domain::model::{ClassificationReport, ClassificationSummary, OutputFormat, UrlClassification};
pub use domain::ports::{ConfigProvider, UrlClassifier};
pub use utils::error::{ClassifyError, Result};
