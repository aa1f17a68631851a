use crate::config::cli::LocalIo;
use crate::core::batch::BatchClassifier;
use crate::core::report::write_report;
use crate::core::{ClassificationReport, ConfigProvider, UrlClassifier};
use crate::utils::error::{ClassifyError, Result};

pub struct CheckEngine<C: UrlClassifier> {
    classifier: C,
    io: LocalIo,
}

impl<C: UrlClassifier + Clone> CheckEngine<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            io: LocalIo::new(),
        }
    }

    /// 讀取 → 分類 → 輸出報告
    pub fn run<P: ConfigProvider>(&self, config: &P) -> Result<ClassificationReport> {
        tracing::info!("🚀 Starting URL check with {}", self.classifier.name());

        let batch = BatchClassifier::new(self.classifier.clone())
            .with_only_matches(config.only_matches())
            .with_keep_blank(config.keep_blank());

        let report = if !config.urls().is_empty() {
            tracing::debug!("Checking {} URLs from arguments", config.urls().len());
            batch.classify_urls(config.urls())
        } else if let Some(path) = config.input_path() {
            tracing::debug!("Reading URLs from: {}", path);
            batch.classify_lines(self.io.reader(path)?)?
        } else {
            return Err(ClassifyError::MissingInputError);
        };

        let format = config.output_format();
        let writer = self.io.writer(config.output_path())?;
        write_report(&report, format, writer)?;

        if let Some(path) = config.output_path() {
            tracing::info!("📁 Report ({}) saved to: {}", format.as_str(), path);
        }

        Ok(report)
    }
}
