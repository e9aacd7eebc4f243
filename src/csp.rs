//! Content-Policy Violation Scanning
//!
//! Pattern-based detection of content a strict CSP would reject: inline
//! script blocks, `javascript:` URLs, inline event-handler attributes, and
//! `data:` URLs. This is a heuristic scan, not a parse — obfuscated payloads
//! can evade it, and callers treating it as anything stronger than a
//! first-pass filter are holding it wrong.

use regex::Regex;
use std::sync::OnceLock;

static INLINE_SCRIPT_REGEX: OnceLock<Regex> = OnceLock::new();
static JS_URL_REGEX: OnceLock<Regex> = OnceLock::new();
static EVENT_ATTR_REGEX: OnceLock<Regex> = OnceLock::new();
static DATA_URL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Outcome of a content scan: at most one violation per category, in the
/// order the categories are checked.
#[derive(Debug, Clone)]
pub struct CspScanResult {
    pub is_valid: bool,
    pub violations: Vec<String>,
}

/// Scan content for policy-violating patterns.
pub fn scan_content(content: &str) -> CspScanResult {
    let inline_script = INLINE_SCRIPT_REGEX
        .get_or_init(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").unwrap());
    let js_url = JS_URL_REGEX.get_or_init(|| Regex::new(r"(?i)javascript:").unwrap());
    let event_attr = EVENT_ATTR_REGEX.get_or_init(|| Regex::new(r"(?i)\bon\w+\s*=").unwrap());
    let data_url = DATA_URL_REGEX.get_or_init(|| Regex::new(r"(?i)data:").unwrap());

    let mut violations = Vec::new();

    if inline_script.is_match(content) {
        violations.push("Inline script tag detected".to_string());
    }
    if js_url.is_match(content) {
        violations.push("javascript: URL detected".to_string());
    }
    if event_attr.is_match(content) {
        violations.push("Inline event handler detected".to_string());
    }
    if data_url.is_match(content) {
        violations.push("data: URL detected".to_string());
    }

    CspScanResult {
        is_valid: violations.is_empty(),
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_content_passes() {
        let result = scan_content("<p>hello</p>");
        assert!(result.is_valid);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_inline_event_handler_detected() {
        let result = scan_content("<div onclick='x()'>");
        assert!(!result.is_valid);
        assert_eq!(result.violations, vec!["Inline event handler detected"]);
    }

    #[test]
    fn test_inline_script_detected() {
        let result = scan_content("<script>alert(1)</script>");
        assert!(!result.is_valid);
        assert!(result.violations.contains(&"Inline script tag detected".to_string()));
    }

    #[test]
    fn test_javascript_url_detected() {
        let result = scan_content("<a href=\"javascript:void(0)\">x</a>");
        assert!(result.violations.contains(&"javascript: URL detected".to_string()));
    }

    #[test]
    fn test_data_url_detected() {
        let result = scan_content("<img src=\"data:image/png;base64,AAAA\">");
        assert!(result.violations.contains(&"data: URL detected".to_string()));
    }

    #[test]
    fn test_one_violation_per_category() {
        let result = scan_content(
            "<script>a()</script><script>b()</script>\
             <img onload=c() onerror=d()>",
        );
        assert_eq!(result.violations.len(), 2);
    }

    #[test]
    fn test_all_categories_in_order() {
        let result = scan_content(
            "<script>a()</script> javascript:b() <i onclick=c()> data:text/html",
        );
        assert_eq!(
            result.violations,
            vec![
                "Inline script tag detected",
                "javascript: URL detected",
                "Inline event handler detected",
                "data: URL detected",
            ]
        );
    }

    #[test]
    fn test_word_with_on_prefix_not_flagged() {
        let result = scan_content("the season=winter query");
        assert!(result.is_valid);
    }
}
