// Host-side checks that the page shell and manifest agree with the crate.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

const INDEX_HTML: &str = include_str!("../index.html");
const MANIFEST: &str = include_str!("../Cargo.toml");

#[test]
fn page_has_every_element_the_scene_looks_up() {
    for id in [CANVAS_ID, STAGE_ID, LOADING_ID] {
        assert!(INDEX_HTML.contains(&format!("id=\"{}\"", id)), "missing #{}", id);
    }
}

#[test]
fn page_styles_the_hover_class() {
    assert!(INDEX_HTML.contains(&format!(".{}", HOVER_CLASS)));
}

#[test]
fn footer_credits_music_and_animation() {
    let start = INDEX_HTML.find("<footer").unwrap();
    let footer = &INDEX_HTML[start..INDEX_HTML.find("</footer>").unwrap()];
    assert!(footer.contains("Mykola Sosin"));
    assert!(footer.contains("Pixabay"));
    assert!(footer.contains("ReactBits"));
    assert!(footer.contains("Keen-Tar00"));
}

#[test]
fn hover_uses_non_bubbling_events() {
    assert_eq!(HOVER_ENTER_EVENT, "pointerenter");
    assert_eq!(HOVER_LEAVE_EVENT, "pointerleave");
}

#[test]
fn manifest_declares_no_unused_web_bindings() {
    assert!(!MANIFEST.contains("js-sys"));
    assert!(!MANIFEST.contains("serde-serialize"));
    for feature in ["\"MouseEvent\"", "\"PointerEvent\"", "\"EventListenerOptions\""] {
        assert!(!MANIFEST.contains(feature), "{} is enabled", feature);
    }
}
