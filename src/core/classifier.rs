use crate::domain::ports::UrlClassifier;
use regex::Regex;
use std::sync::OnceLock;

const BAIDU_SEARCH_PATTERN: &str = r"(www|m)\.baidu\.com/(s|baidu)";

fn baidu_search_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // 常數樣式，單元測試涵蓋
    PATTERN.get_or_init(|| Regex::new(BAIDU_SEARCH_PATTERN).expect("baidu search pattern"))
}

/// 是否為百度搜尋結果頁的 URL。
///
/// 只做子字串比對：`www.baidu.com/` 或 `m.baidu.com/` 後面緊接 `s` 或 `baidu`。
/// 不檢查 scheme，也不錨定開頭或結尾，大小寫敏感。空值或空字串一律回傳 false。
pub fn is_baidu_search_url(url: Option<&str>) -> bool {
    match url {
        Some(url) if !url.is_empty() => baidu_search_regex().is_match(url),
        _ => false,
    }
}

pub fn matches_baidu_search(url: &str) -> bool {
    is_baidu_search_url(Some(url))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BaiduSearchClassifier;

impl BaiduSearchClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl UrlClassifier for BaiduSearchClassifier {
    fn name(&self) -> &str {
        "baidu-search"
    }

    fn is_match(&self, url: Option<&str>) -> bool {
        is_baidu_search_url(url)
    }

    fn find_match<'a>(&self, url: &'a str) -> Option<&'a str> {
        if url.is_empty() {
            return None;
        }
        baidu_search_regex().find(url).map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty() {
        assert!(!is_baidu_search_url(None));
        assert!(!is_baidu_search_url(Some("")));
    }

    #[test]
    fn test_known_urls() {
        assert!(is_baidu_search_url(Some("http://www.baidu.com/s?wd=test")));
        assert!(is_baidu_search_url(Some("http://m.baidu.com/baidu?query=abc")));
        assert!(!is_baidu_search_url(Some("http://www.baidu.com/other")));
        assert!(!is_baidu_search_url(Some("http://www.google.com/search?q=baidu")));
    }

    #[test]
    fn test_unanchored_substring() {
        assert!(matches_baidu_search("prefix-www.baidu.com/s-suffix"));
        assert!(matches_baidu_search(
            "https://example.com/redirect?to=m.baidu.com/s%3Fwd%3Drust"
        ));
        // 不限 scheme
        assert!(matches_baidu_search("https://www.baidu.com/s?wd=rust"));
        assert!(matches_baidu_search("www.baidu.com/baidu"));
    }

    #[test]
    fn test_literal_pattern_is_not_broadened() {
        assert!(!matches_baidu_search("http://baidu.com/s?wd=test"));
        assert!(!matches_baidu_search("http://news.baidu.com/ns?word=test"));
        assert!(!matches_baidu_search("http://WWW.BAIDU.COM/s?wd=test"));
        assert!(!matches_baidu_search("http://www.baidu.com/"));
        // 點號必須是字面值
        assert!(!matches_baidu_search("http://wwwxbaidu.com/s"));
        assert!(!matches_baidu_search("http://www.baiduxcom/s"));
    }

    #[test]
    fn test_path_prefix_only() {
        // `/s` 之後接什麼都可以
        assert!(matches_baidu_search("http://www.baidu.com/search/error.html"));
        assert!(matches_baidu_search("http://m.baidu.com/sf?pd=ala"));
        // 子網域前綴也會命中，例如 wwww. 或 xm.
        assert!(matches_baidu_search("http://xm.baidu.com/s"));
    }

    #[test]
    fn test_non_url_input_is_total() {
        assert!(!matches_baidu_search("   "));
        assert!(!matches_baidu_search("百度一下，你就知道"));
        assert!(matches_baidu_search("搜尋 www.baidu.com/s 結果"));
        assert!(!matches_baidu_search("\0\u{fffd}"));
    }

    #[test]
    fn test_idempotent() {
        let url = Some("http://m.baidu.com/s?word=rust");
        assert_eq!(is_baidu_search_url(url), is_baidu_search_url(url));
        assert!(is_baidu_search_url(url));
    }

    #[test]
    fn test_classifier_find_match() {
        let classifier = BaiduSearchClassifier::new();
        assert_eq!(classifier.name(), "baidu-search");
        assert_eq!(
            classifier.find_match("http://m.baidu.com/baidu?query=abc"),
            Some("m.baidu.com/baidu")
        );
        assert_eq!(
            classifier.find_match("http://www.baidu.com/s?wd=test"),
            Some("www.baidu.com/s")
        );
        assert_eq!(classifier.find_match("http://www.baidu.com/other"), None);
        assert_eq!(classifier.find_match(""), None);
        assert!(!classifier.is_match(None));
    }

    #[test]
    fn test_concurrent_calls() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let url = if i % 2 == 0 {
                        "http://www.baidu.com/s?wd=x"
                    } else {
                        "http://example.com"
                    };
                    (i % 2 == 0, matches_baidu_search(url))
                })
            })
            .collect();
        for handle in handles {
            let (expected, actual) = handle.join().unwrap();
            assert_eq!(expected, actual);
        }
    }
}
