//! Untrusted Text Sanitization
//!
//! This module implements the scrubbing tier: total functions that remove
//! dangerous fragments from free-form input before it reaches rendering or
//! query layers. Every pass is re-applied until the output stabilizes so
//! that a removal cannot reassemble a blocked fragment
//! (e.g. `jav<script></script>ascript:` collapsing into `javascript:`).

use regex::Regex;
use std::sync::OnceLock;

static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static SCRIPT_BLOCK_REGEX: OnceLock<Regex> = OnceLock::new();
static SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();
static EVENT_HANDLER_REGEX: OnceLock<Regex> = OnceLock::new();
static CHAR_REFERENCE_REGEX: OnceLock<Regex> = OnceLock::new();
static QUOTE_META_REGEX: OnceLock<Regex> = OnceLock::new();
static SQL_COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
static SQL_KEYWORD_REGEX: OnceLock<Regex> = OnceLock::new();

/// Upper bound on strip passes before declaring the input stable.
/// Realistic inputs converge in one or two passes.
const MAX_STRIP_PASSES: usize = 5;

fn strip_to_fixed_point(input: &str, pass: impl Fn(&str) -> String) -> String {
    let mut current = input.to_string();
    for _ in 0..MAX_STRIP_PASSES {
        let next = pass(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Strip all markup tags, keeping only text content, and trim.
///
/// Pattern-based rather than a full parse: anything of the shape `<…>` is
/// removed, attributes included. Total — never fails.
pub fn sanitize_html(input: &str) -> String {
    let tag_re = TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap());

    let stripped = strip_to_fixed_point(input, |s| tag_re.replace_all(s, "").to_string());
    stripped.trim().to_string()
}

/// General text sanitizer for free-form input.
///
/// Removes `<script>…</script>` blocks and everything between, strips
/// `javascript:` / `data:` / `vbscript:` scheme prefixes anywhere in the
/// string, strips `onload=` / `onerror=` handler fragments, and strips HTML
/// character-reference sequences (`&…;`) used to smuggle content past naive
/// filters. Case-insensitive throughout. Trims the result. Pure and total.
pub fn sanitize_text(input: &str) -> String {
    let script_re = SCRIPT_BLOCK_REGEX
        .get_or_init(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").unwrap());
    let scheme_re =
        SCHEME_REGEX.get_or_init(|| Regex::new(r"(?i)(?:javascript|data|vbscript):").unwrap());
    let handler_re =
        EVENT_HANDLER_REGEX.get_or_init(|| Regex::new(r"(?i)\bon(?:load|error)\s*=").unwrap());
    let charref_re = CHAR_REFERENCE_REGEX.get_or_init(|| Regex::new(r"&#?\w+;").unwrap());

    let stripped = strip_to_fixed_point(input, |s| {
        let pass = script_re.replace_all(s, "");
        let pass = scheme_re.replace_all(&pass, "");
        let pass = handler_re.replace_all(&pass, "");
        charref_re.replace_all(&pass, "").to_string()
    });
    stripped.trim().to_string()
}

/// Scrub a query parameter of SQL metacharacters, comment sequences, and
/// whole-word SQL keywords, then run the general text sanitizer.
///
/// Defense in depth only. This is NOT a substitute for parameterized
/// queries; callers own injection safety at the query layer.
pub fn sanitize_query_param(param: &str) -> String {
    let quote_re = QUOTE_META_REGEX.get_or_init(|| Regex::new(r#"['";\\]"#).unwrap());
    let comment_re = SQL_COMMENT_REGEX.get_or_init(|| Regex::new(r"--|/\*|\*/").unwrap());
    let keyword_re = SQL_KEYWORD_REGEX.get_or_init(|| {
        Regex::new(r"(?i)\b(?:DROP|DELETE|UPDATE|INSERT|CREATE|ALTER|EXEC|UNION|SELECT)\b")
            .unwrap()
    });

    let scrubbed = strip_to_fixed_point(param, |s| {
        let pass = quote_re.replace_all(s, "");
        let pass = comment_re.replace_all(&pass, "");
        keyword_re.replace_all(&pass, "").to_string()
    });
    sanitize_text(&scrubbed)
}
