//! Integration tests for CSS rule emission.

use std::sync::{Arc, Mutex};

use mingled_web::{MemorySink, WebRuntime};

fn runtime() -> WebRuntime {
    WebRuntime::new(Arc::new(Mutex::new(MemorySink::new())))
}

#[test]
fn emits_one_rule_per_token_in_input_order() {
    let mut rt = runtime();
    let css = rt.generate_css("p:12 bg:gray-10");
    let rules: Vec<&str> = css.lines().collect();
    assert_eq!(
        rules,
        vec![
            ".p\\:12 { padding: 0.75rem }",
            ".bg\\:gray-10 { background-color: #F5F5F5 }",
        ]
    );
}

#[test]
fn pseudo_class_suffix_lands_on_the_selector() {
    let mut rt = runtime();
    let css = rt.generate_css("bg:blue:hover");
    assert_eq!(
        css,
        ".bg\\:blue\\:hover:hover { background-color: #1289F8 }"
    );
}

#[test]
fn media_variant_wraps_the_rule() {
    let mut rt = runtime();
    let css = rt.generate_css("w:100@md");
    assert_eq!(
        css,
        "@media (min-width: 768px) { .w\\:100\\@md { width: 100px } }"
    );
}

#[test]
fn importance_marks_declarations() {
    let mut rt = runtime();
    let css = rt.generate_css("bg:blue!");
    assert_eq!(
        css,
        ".bg\\:blue\\! { background-color: #1289F8 !important }"
    );
}

#[test]
fn nested_fragments_emit_their_own_rule() {
    let mut rt = runtime();
    let css = rt.generate_css("scroll:hide");
    let rules: Vec<&str> = css.lines().collect();
    assert_eq!(
        rules,
        vec![
            ".scroll\\:hide { -ms-overflow-style: none; scrollbar-width: none }",
            ".scroll\\:hide::-webkit-scrollbar { display: none }",
        ]
    );
}

#[test]
fn tokens_without_styles_emit_nothing() {
    let mut rt = runtime();
    let css = rt.generate_css("mystery:42 p:4");
    assert_eq!(css, ".p\\:4 { padding: 0.25rem }");

    assert_eq!(rt.generate_css("mystery:42"), "");
}

#[test]
fn declarations_keep_insertion_order() {
    let mut rt = runtime();
    let css = rt.generate_css("flex:center");
    assert_eq!(
        css,
        ".flex\\:center { display: flex; flex-direction: row; justify-content: center; align-items: center }"
    );
}

#[test]
fn multiple_variants_compose_in_emission() {
    let mut rt = runtime();
    let css = rt.generate_css("bg:blue@md!:hover");
    assert_eq!(
        css,
        "@media (min-width: 768px) { .bg\\:blue\\@md\\!\\:hover:hover { background-color: #1289F8 !important } }"
    );
}

#[test]
fn palette_update_changes_emitted_color() {
    let mut rt = runtime();
    let before = rt.generate_css("bg:brand");
    assert_eq!(before, ".bg\\:brand { background-color: brand }");

    rt.set_colors([("brand", "#ABCDEF")], false);
    let after = rt.generate_css("bg:brand");
    assert_eq!(after, ".bg\\:brand { background-color: #ABCDEF }");
}

#[test]
fn color_opacity_suffix_emits_color_mix() {
    let mut rt = runtime();
    let css = rt.generate_css("bg:blue/50");
    assert_eq!(
        css,
        ".bg\\:blue\\/50 { background-color: color-mix(in srgb, #1289F8 50%, transparent) }"
    );
}
