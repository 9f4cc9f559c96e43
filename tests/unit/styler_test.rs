//! Unit tests for the color-pair resolver/cache

use colorpair::{cformat, StyleError, Styler, ATTRIBUTES, FOREGROUNDS, NORMAL};

#[test]
fn known_names_always_resolve_and_render() {
    let styler = Styler::new();
    for (fg, _) in FOREGROUNDS {
        assert!(styler.colored(fg, format_args!("x")).is_ok());

        let with_bg = format!("{fg}-black");
        assert!(styler.colored(&with_bg, format_args!("x")).is_ok());
    }
    for (attr, _) in ATTRIBUTES {
        let pair = format!("white-black-{attr}");
        assert!(
            styler.colored(&pair, format_args!("x")).is_ok(),
            "failed to render {pair}"
        );
    }
    assert!(styler
        .colored("hiwhite-hiblack-bold-underline-faint", format_args!("x"))
        .is_ok());
}

#[test]
fn normal_renders_the_plain_formatted_string() {
    let styler = Styler::new();
    let out = styler
        .colored(NORMAL, format_args!("hello {}", 42))
        .unwrap();
    assert_eq!(out, "hello 42");

    let out = styler
        .colored("normal-normal", format_args!("plain"))
        .unwrap();
    assert_eq!(out, "plain");
}

#[test]
fn resolve_is_idempotent() {
    let styler = Styler::new();
    let first = styler.resolve("yellow-blue").unwrap();
    let second = styler.resolve("yellow-blue").unwrap();
    assert_eq!(first, second);

    let a = styler.colored("yellow-blue", format_args!("t")).unwrap();
    let b = styler.colored("yellow-blue", format_args!("t")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unknown_foreground_names_the_token() {
    let styler = Styler::new();
    let err = styler.colored("purple", format_args!("x")).unwrap_err();
    assert_eq!(err, StyleError::UnknownColor("purple".to_string()));
    assert_eq!(err.to_string(), "color `purple` is not recognized");
}

#[test]
fn unknown_background_names_the_token() {
    let styler = Styler::new();
    assert_eq!(
        styler.resolve("red-purple"),
        Err(StyleError::UnknownColor("purple".to_string()))
    );
}

#[test]
fn unknown_attribute_aborts_before_rendering() {
    let styler = Styler::new();
    let err = styler
        .colored("red-black-sparkle", format_args!("x"))
        .unwrap_err();
    assert_eq!(err, StyleError::UnknownAttribute("sparkle".to_string()));
    assert_eq!(err.to_string(), "attribute `sparkle` is not recognized");
}

#[test]
fn attributes_do_not_leak_across_calls() {
    // Both identifiers resolve to the same cached fg-bg entry, so a leak
    // would show up as bold bleeding into the second rendering.
    let styler = Styler::new();
    let bold = styler
        .colored("red-black-bold", format_args!("a"))
        .unwrap();
    let plain = styler.colored("red-black", format_args!("b")).unwrap();

    let fresh = Styler::new();
    let expected = fresh.colored("red-black", format_args!("b")).unwrap();
    assert_eq!(plain, expected);

    let fresh_bold = fresh.colored("red-black-bold", format_args!("a")).unwrap();
    assert_eq!(bold, fresh_bold);
}

#[test]
fn attribute_changes_the_rendered_output() {
    let styler = Styler::new();
    let plain = styler.colored("red-normal", format_args!("x")).unwrap();
    let bold = styler
        .colored("red-normal-bold", format_args!("x"))
        .unwrap();
    assert_ne!(plain, bold);
}

#[test]
fn styled_output_frames_the_text_with_escapes() {
    let styler = Styler::new();
    let out = styler.colored("red", format_args!("payload")).unwrap();
    assert!(out.starts_with("\u{1b}["));
    assert!(out.contains("payload"));
    assert!(out.len() > "payload".len());
}

#[test]
fn attributes_apply_without_colors() {
    let styler = Styler::new();
    let out = styler
        .colored("normal-normal-bold", format_args!("x"))
        .unwrap();
    assert!(out.contains('x'));
    assert_ne!(out, "x");
}

#[test]
fn shared_styler_resolves_concurrently() {
    let styler = Styler::new();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let out = styler
                    .colored("cyan-black-bold", format_args!("t"))
                    .unwrap();
                assert!(out.contains('t'));
            });
        }
    });
    assert_eq!(styler.cached_pairs(), 1);
}

#[test]
fn cformat_macro_forwards_format_arguments() {
    let styler = Styler::plain();
    let out = cformat!(styler, "green", "{} plus {}", 1, "two").unwrap();
    assert_eq!(out, "1 plus two");
}
