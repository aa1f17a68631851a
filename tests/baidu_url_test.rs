use search_url_check::{is_baidu_search_url, matches_baidu_search, BaiduSearchClassifier, UrlClassifier};

/// 文件列出的固定案例
#[test]
fn test_reference_cases() {
    let cases: [(Option<&str>, bool); 7] = [
        (None, false),
        (Some(""), false),
        (Some("http://www.baidu.com/s?wd=test"), true),
        (Some("http://m.baidu.com/baidu?query=abc"), true),
        (Some("http://www.baidu.com/other"), false),
        (Some("http://www.google.com/search?q=baidu"), false),
        (Some("prefix-www.baidu.com/s-suffix"), true),
    ];

    for (input, expected) in cases {
        assert_eq!(is_baidu_search_url(input), expected, "input: {:?}", input);
    }
}

#[test]
fn test_owned_string_input() {
    let url: Option<String> = Some("https://m.baidu.com/s?word=rust".to_string());
    assert!(is_baidu_search_url(url.as_deref()));

    let missing: Option<String> = None;
    assert!(!is_baidu_search_url(missing.as_deref()));
}

#[test]
fn test_trait_object_usage() {
    let classifier: Box<dyn UrlClassifier> = Box::new(BaiduSearchClassifier::new());
    assert!(classifier.is_match(Some("http://www.baidu.com/baidu?wd=x")));
    assert!(!classifier.is_match(Some("http://www.bing.com/search?q=x")));
    assert_eq!(
        classifier.find_match("see m.baidu.com/s?word=x"),
        Some("m.baidu.com/s")
    );
}

#[test]
fn test_long_garbage_input_terminates() {
    let noise = "www.baidu.co/".repeat(10_000);
    assert!(!matches_baidu_search(&noise));
    let with_hit = format!("{}www.baidu.com/s", noise);
    assert!(matches_baidu_search(&with_hit));
}
