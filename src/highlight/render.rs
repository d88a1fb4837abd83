//! Pattern-to-markup rendering
//!
//! Turns the plain value into the markup shown by the highlight surface.
//! The value's `&`, `<` and `>` are escaped before any rule runs, so text
//! typed by the user is never read back as markup; the markup reader decodes
//! the three entities again.
//!
//! Rules apply one after another over the progressively rewritten string.
//! A later rule can therefore match text inside markup inserted by an
//! earlier one (e.g. the `color` in `style="color:red"`), producing nested or
//! malformed spans. This is deliberate and kept as-is. Rules see the escaped
//! text, so a pattern for `<` has to be written against `&lt;`, and a pattern
//! matching inside an entity (e.g. `amp`) splits it.

use super::rules::HighlightRuleSet;
use crate::error::Result;

/// Line break marker emitted for every `\n`
pub const LINE_BREAK: &str = "<br>";

/// Filler appended after a trailing line break so the last blank line keeps
/// its height
pub const TRAILING_FILLER: &str = "&nbsp;";

/// Entities produced by [`escape`], as (entity, character) pairs
pub const ENTITIES: [(&str, &str); 3] = [("&amp;", "&"), ("&lt;", "<"), ("&gt;", ">")];

/// Render `value` into highlight markup using the serialized rule set
///
/// `highlight` is the raw attribute. Absent, empty, unparseable, or holding an
/// uncompilable pattern, it yields the plain rendering.
pub fn render_markup(value: &str, highlight: Option<&str>) -> String {
    let source = match highlight {
        Some(source) if !source.is_empty() => source,
        _ => return render_plain(value),
    };

    match try_render(value, source) {
        Ok(markup) => markup,
        Err(e) => {
            log::debug!("highlight rules ignored for this pass: {}", e);
            render_plain(value)
        }
    }
}

/// Render with an already parsed rule set
///
/// Only this path pads a trailing line break with [`TRAILING_FILLER`].
pub fn render_with_rules(value: &str, rules: &HighlightRuleSet) -> Result<String> {
    let mut html = escape(value);
    for rule in rules.compile()? {
        html = rule.apply(&html);
    }
    let mut out = break_lines(&html);
    if out.ends_with(LINE_BREAK) {
        out.push_str(TRAILING_FILLER);
    }
    Ok(out)
}

/// Render with no highlighting at all
pub fn render_plain(value: &str) -> String {
    break_lines(&escape(value))
}

fn try_render(value: &str, source: &str) -> Result<String> {
    let rules = HighlightRuleSet::parse(source)?;
    render_with_rules(value, &rules)
}

fn break_lines(html: &str) -> String {
    html.replace('\n', LINE_BREAK)
}

/// Escape the characters that would otherwise read back as markup
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_breaks() {
        assert_eq!(render_markup("hello\nworld", None), "hello<br>world");
        assert_eq!(render_markup("hello\nworld", Some("")), "hello<br>world");
    }

    #[test]
    fn test_single_rule() {
        let rules = r#"[{"pattern":"bar","style":"color:red"}]"#;
        assert_eq!(
            render_markup("foo bar", Some(rules)),
            r#"foo <span style="color:red">bar</span>"#
        );
    }

    #[test]
    fn test_only_rule_pass_pads_trailing_newline() {
        assert_eq!(render_markup("a\n", None), "a<br>");
        assert_eq!(render_markup("a\n", Some("{bad")), "a<br>");
        let rules = r#"[{"pattern":"a","style":"color:red"}]"#;
        assert_eq!(
            render_markup("a\n", Some(rules)),
            r#"<span style="color:red">a</span><br>&nbsp;"#
        );
        assert_eq!(render_markup("a\nb", None), "a<br>b");
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let text = "one\ntwo\n";
        let plain = render_markup(text, None);
        assert_eq!(render_markup(text, Some("{not json")), plain);
        assert_eq!(render_markup(text, Some(r#"{"pattern":"o"}"#)), plain);
        assert_eq!(
            render_markup(text, Some(r#"[{"pattern":"(","style":"color:red"}]"#)),
            plain
        );
    }

    #[test]
    fn test_bad_pattern_discards_earlier_rules_too() {
        let rules = r#"[{"pattern":"one","style":"color:red"},{"pattern":"[","style":"x"}]"#;
        assert_eq!(render_markup("one", Some(rules)), "one");
    }

    #[test]
    fn test_skipped_rules() {
        let rules = r#"[{"pattern":"","style":"color:red"},{"pattern":"foo","style":""}]"#;
        assert_eq!(render_markup("foo", Some(rules)), "foo");
        assert_eq!(render_markup("foo", Some("[]")), "foo");
    }

    #[test]
    fn test_sequential_rules_match_earlier_markup() {
        let rules = r#"[{"pattern":"bar","style":"color:red"},{"pattern":"red","style":"x"}]"#;
        assert_eq!(
            render_markup("bar", Some(rules)),
            r#"<span style="color:<span style="x">red</span>">bar</span>"#
        );
    }

    #[test]
    fn test_rules_see_raw_newlines() {
        let rules = r#"[{"pattern":"a\nb","style":"s"}]"#;
        assert_eq!(
            render_markup("a\nb", Some(rules)),
            r#"<span style="s">a<br>b</span>"#
        );
    }

    #[test]
    fn test_idempotent() {
        let rules = r#"[{"pattern":"\\w+","style":"font-weight:bold"}]"#;
        let first = render_markup("x y\nz", Some(rules));
        assert_eq!(render_markup("x y\nz", Some(rules)), first);
    }

    #[test]
    fn test_value_is_escaped() {
        assert_eq!(render_markup("x<br>y", None), "x&lt;br&gt;y");
        assert_eq!(render_markup("a & b", None), "a &amp; b");
        let rules = r#"[{"pattern":"&lt;","style":"color:red"}]"#;
        assert_eq!(
            render_markup("1<2", Some(rules)),
            r#"1<span style="color:red">&lt;</span>2"#
        );
    }
}
