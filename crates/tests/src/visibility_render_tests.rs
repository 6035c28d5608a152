use dioxus::prelude::*;
use kit_types::{KitConfig, TransitionProfile};
use kit_ui::components::AnimatedVisibility;

use crate::common::{render, KitHarness};

fn visible_default() -> Element {
    rsx! {
        KitHarness {
            AnimatedVisibility { visible: true, "Shown" }
        }
    }
}

#[test]
fn test_visible_on_mount_plays_enter_animation() {
    let html = render(visible_default);
    assert!(html.contains("Shown"));
    assert!(html.contains("data-state=\"entering\""));
    assert!(html.contains("data-transition=\"slideFade\""));
}

fn visible_no_initial() -> Element {
    rsx! {
        KitHarness {
            AnimatedVisibility {
                visible: true,
                no_initial: true,
                profile: TransitionProfile::ScaleFade,
                "Shown"
            }
        }
    }
}

#[test]
fn test_no_initial_skips_enter_animation() {
    let html = render(visible_no_initial);
    assert!(html.contains("data-state=\"visible\""));
    assert!(html.contains("data-transition=\"scaleFade\""));
}

fn hidden_on_mount() -> Element {
    rsx! {
        KitHarness {
            AnimatedVisibility { visible: false, "Secret" }
        }
    }
}

#[test]
fn test_hidden_on_mount_renders_nothing() {
    let html = render(hidden_on_mount);
    assert!(!html.contains("Secret"));
    assert!(!html.contains("animated-visibility"));
}

fn config_disables_initial() -> Element {
    let config = KitConfig::from_toml_str(
        r#"
        [transitions]
        profile = "scaleFade"
        animate_initial = false
        "#,
    )
    .unwrap();

    rsx! {
        KitHarness { config,
            AnimatedVisibility { visible: true, "Shown" }
        }
    }
}

#[test]
fn test_configured_defaults_apply() {
    let html = render(config_disables_initial);
    assert!(html.contains("data-state=\"visible\""));
    assert!(html.contains("data-transition=\"scaleFade\""));
}
