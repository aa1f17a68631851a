use crate::domain::model::{ClassificationReport, ClassificationSummary, UrlClassification};
use crate::domain::ports::UrlClassifier;
use crate::utils::error::Result;
use std::io::BufRead;
use url::Url;

/// 分類單一字串，附上命中片段與主機名稱。
///
/// 主機名稱只是附帶資訊，解析失敗時為 None，不影響分類結果。
pub fn classify<C: UrlClassifier + ?Sized>(
    classifier: &C,
    line: usize,
    url: &str,
) -> UrlClassification {
    let matched = classifier.find_match(url).map(str::to_string);
    let host = Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string));

    UrlClassification {
        line,
        url: url.to_string(),
        is_baidu_search: matched.is_some(),
        matched,
        host,
    }
}

pub struct BatchClassifier<C: UrlClassifier> {
    classifier: C,
    only_matches: bool,
    keep_blank: bool,
}

impl<C: UrlClassifier> BatchClassifier<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            only_matches: false,
            keep_blank: false,
        }
    }

    pub fn with_only_matches(mut self, only_matches: bool) -> Self {
        self.only_matches = only_matches;
        self
    }

    pub fn with_keep_blank(mut self, keep_blank: bool) -> Self {
        self.keep_blank = keep_blank;
        self
    }

    /// 逐行讀取並分類，行號從 1 開始。
    ///
    /// 非 UTF-8 的位元組以替代字元解碼，樣式是純 ASCII，不影響比對結果。
    pub fn classify_lines<R: BufRead>(&self, reader: R) -> Result<ClassificationReport> {
        let mut report = ClassificationReport::default();

        for (index, raw) in reader.split(b'\n').enumerate() {
            let raw = raw?;
            let line = String::from_utf8_lossy(&raw);
            self.push(&mut report, index + 1, line.trim());
        }

        self.finish(&report.summary);
        Ok(report)
    }

    pub fn classify_urls<S: AsRef<str>>(&self, urls: &[S]) -> ClassificationReport {
        let mut report = ClassificationReport::default();

        for (index, url) in urls.iter().enumerate() {
            self.push(&mut report, index + 1, url.as_ref().trim());
        }

        self.finish(&report.summary);
        report
    }

    fn push(&self, report: &mut ClassificationReport, line: usize, url: &str) {
        if url.is_empty() && !self.keep_blank {
            report.summary.skipped_blank += 1;
            return;
        }

        let record = classify(&self.classifier, line, url);
        report.summary.total += 1;

        if record.is_baidu_search {
            report.summary.matched += 1;
            tracing::debug!(
                "🔎 line {}: {} matched '{}'",
                line,
                self.classifier.name(),
                record.matched.as_deref().unwrap_or_default()
            );
        }

        if !self.only_matches || record.is_baidu_search {
            report.records.push(record);
        }
    }

    fn finish(&self, summary: &ClassificationSummary) {
        tracing::info!(
            "📊 Classified {} URLs with {}: {} matched, {} blank skipped",
            summary.total,
            self.classifier.name(),
            summary.matched,
            summary.skipped_blank
        );
    }
}
