use proptest::prelude::*;
use pretty_textarea::highlight::{markup, render_markup};
use pretty_textarea::{CaretMotion, HostStyle, PrettyTextarea, ScrollOffset};

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("".to_string()),
        // Text that looks like the markup the renderer emits
        r#"[a-z<>&/"= \n]{0,40}"#,
        prop::collection::vec(
            prop_oneof![
                Just("<br>"),
                Just("&nbsp;"),
                Just("&amp;"),
                Just("&lt;"),
                Just("<span style=\"color:red\">"),
                Just("</span>"),
                Just("\n"),
                Just("x"),
            ],
            0..12,
        )
        .prop_map(|parts| parts.concat()),
        "[a-zA-Z0-9 .!?,;:\\-_]{0,50}",
        "[a-zA-Z0-9 .!?,;:\\-_\n]{0,200}",
        r"[a-z ]{0,20}\n\n[a-z ]{0,20}\n",
        "[\u{0020}-\u{007E}\u{00A0}-\u{00FF}\u{4E00}-\u{9FFF}\n]{0,100}",
    ]
}

#[derive(Debug, Clone)]
enum Scroll {
    To(f32, f32),
    By(f32, f32),
    Type(String),
    Caret(CaretMotion),
}

fn scroll_strategy() -> impl Strategy<Value = Scroll> {
    prop_oneof![
        (-50.0f32..500.0, -50.0f32..500.0).prop_map(|(t, l)| Scroll::To(t, l)),
        (-40.0f32..40.0, -40.0f32..40.0).prop_map(|(t, l)| Scroll::By(t, l)),
        "[a-z\n]{1,5}".prop_map(Scroll::Type),
        prop_oneof![
            Just(CaretMotion::Up),
            Just(CaretMotion::Down),
            Just(CaretMotion::TextStart),
            Just(CaretMotion::TextEnd),
            Just(CaretMotion::LineEnd),
        ]
        .prop_map(Scroll::Caret),
    ]
}

fn attached(attrs: &[(&str, &str)]) -> PrettyTextarea {
    let mut textarea = PrettyTextarea::new();
    for (name, value) in attrs {
        textarea.set_attribute(name, value);
    }
    textarea.connected(HostStyle::default());
    textarea
}

proptest! {
    #[test]
    fn prop_plain_markup_strips_to_value(text in text_strategy()) {
        let html = render_markup(&text, None);
        prop_assert!(!html.contains('\n'));
        prop_assert_eq!(markup::strip(&html), text);
    }

    #[test]
    fn prop_highlighted_markup_strips_to_value(text in text_strategy()) {
        let rules = r#"[{"pattern":"[0-9]+","style":"color:red"},{"pattern":"[A-Z]","style":"font-weight:bold"}]"#;
        let textarea = attached(&[("highlight", rules), ("value", text.as_str())]);
        prop_assert!(textarea.is_in_sync());
        prop_assert_eq!(textarea.highlight().rendered_text(), text);
    }

    #[test]
    fn prop_rendering_is_deterministic(text in text_strategy()) {
        let rules = r#"[{"pattern":"a+","style":"color:blue"}]"#;
        prop_assert_eq!(render_markup(&text, Some(rules)), render_markup(&text, Some(rules)));
    }

    #[test]
    fn prop_malformed_rules_render_plain(
        text in text_strategy(),
        rules in prop_oneof![
            Just("not json".to_string()),
            Just(r#"{"pattern":"a"}"#.to_string()),
            Just(r#"[{"pattern":"(","style":"color:red"}]"#.to_string()),
            Just(r#"[null]"#.to_string()),
            Just(r#"[{"pattern":1,"style":"color:red"}]"#.to_string()),
        ],
    ) {
        prop_assert_eq!(render_markup(&text, Some(&rules)), render_markup(&text, None));
    }

    #[test]
    fn prop_highlight_scroll_mirrors_input(
        text in text_strategy(),
        steps in prop::collection::vec(scroll_strategy(), 0..20),
    ) {
        let mut textarea = attached(&[("value", text.as_str()), ("rows", "3"), ("cols", "10")]);
        for step in steps {
            match step {
                Scroll::To(top, left) => textarea.scroll_input(ScrollOffset::new(top, left)),
                Scroll::By(top, left) => textarea.scroll_input_by(top, left),
                Scroll::Type(s) => {
                    textarea.type_text(&s);
                }
                Scroll::Caret(motion) => textarea.move_caret(motion, false),
            }
            prop_assert_eq!(textarea.highlight().scroll(), textarea.input().scroll());
            prop_assert!(textarea.is_in_sync());
        }
    }

    #[test]
    fn prop_typing_respects_maxlength(
        limit in 0usize..20,
        chunks in prop::collection::vec("[a-z\n]{0,8}", 0..10),
    ) {
        let limit_text = limit.to_string();
        let mut textarea = attached(&[("maxlength", limit_text.as_str())]);
        for chunk in &chunks {
            textarea.type_text(chunk);
            prop_assert!(textarea.value().chars().count() <= limit);
        }
        let wanted: usize = chunks.iter().map(|c| c.chars().count()).sum();
        prop_assert_eq!(textarea.value().chars().count(), wanted.min(limit));
    }
}

#[test]
fn test_documented_renderings() {
    assert_eq!(render_markup("hello\nworld", None), "hello<br>world");
    assert_eq!(render_markup("line\n", None), "line<br>");
    assert_eq!(
        render_markup("line\n", Some(r#"[{"pattern":"i","style":"color:red"}]"#)),
        r#"l<span style="color:red">i</span>ne<br>&nbsp;"#
    );
    assert_eq!(render_markup("a<b>&c", None), "a&lt;b&gt;&amp;c");
    assert_eq!(render_markup("", None), "");
    assert_eq!(
        render_markup(
            "foo bar",
            Some(r#"[{"pattern":"bar","style":"color:red"}]"#)
        ),
        r#"foo <span style="color:red">bar</span>"#
    );
    assert_eq!(
        render_markup("abc", Some(r#"[{"pattern":"(","style":"x"}]"#)),
        "abc"
    );
}
