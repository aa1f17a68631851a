use crate::domain::model::OutputFormat;

/// 判斷 URL 是否屬於某個搜尋服務
pub trait UrlClassifier: Send + Sync {
    fn name(&self) -> &str;
    fn is_match(&self, url: Option<&str>) -> bool;
    /// 回傳命中的片段，沒有命中時為 None
    fn find_match<'a>(&self, url: &'a str) -> Option<&'a str>;
}

pub trait ConfigProvider: Send + Sync {
    fn urls(&self) -> &[String];
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn only_matches(&self) -> bool;
    fn keep_blank(&self) -> bool;
}
