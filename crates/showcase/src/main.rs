use dioxus::prelude::*;
use kit_types::{IdAllocator, KitConfig, Orientation, TransitionProfile};
use kit_ui::components::{
    decoration, labeled_tab_list, tab, tab_list, tab_panel, AnimatedVisibility, Notice,
    NoticeKind, RichLabel, Tabs,
};
use kit_ui::use_kit_provider;

/// Kit defaults bundled with the binary so every platform reads the same file.
const KIT_CONFIG: &str = include_str!("../kit.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> KitConfig {
    KitConfig::from_toml_str(KIT_CONFIG).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "kit.toml could not be parsed, using defaults");
        KitConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    use_kit_provider(config, IdAllocator::random());

    rsx! {
        main { class: "showcase",
            h1 { "Component kit" }
            section {
                h2 { "Horizontal tabs" }
                HorizontalDemo {}
            }
            section {
                h2 { "Vertical tabs" }
                VerticalDemo {}
            }
            section {
                h2 { "Misconfigured tabs" }
                BrokenDemo {}
            }
            section {
                h2 { "Animated visibility" }
                VisibilityDemo {}
            }
        }
    }
}

#[component]
fn HorizontalDemo() -> Element {
    let mut last = use_signal(|| 0usize);

    rsx! {
        Tabs {
            on_change: move |slot: usize| last.set(slot),
            items: vec![
                tab_list([
                    tab(false, rsx! { "General" }),
                    tab(false, rsx! { "Layout" }),
                    tab(true, rsx! { "Advanced" }),
                ]),
                decoration(rsx! { hr {} }),
                tab_panel(rsx! { p { "General settings." } }),
                tab_panel(rsx! { p { "Layout settings." } }),
                tab_panel(rsx! { p { "Advanced settings." } }),
            ],
        }
        p { "Last selected slot: {last}" }
    }
}

#[component]
fn VerticalDemo() -> Element {
    rsx! {
        Tabs {
            orientation: Orientation::Vertical,
            default_index: 1usize,
            items: vec![
                labeled_tab_list(
                    "Blocks",
                    [
                        tab(false, rsx! { RichLabel { label: "Heading".to_string(), subtitle: "h1 to h6".to_string() } }),
                        tab(false, rsx! { RichLabel { label: "Paragraph".to_string() } }),
                    ],
                ),
                tab_panel(rsx! { p { "Heading options." } }),
                tab_panel(rsx! { p { "Paragraph options." } }),
            ],
        }
    }
}

#[component]
fn BrokenDemo() -> Element {
    rsx! {
        Tabs {
            items: vec![
                tab_list([tab(false, rsx! { "One" }), tab(false, rsx! { "Two" })]),
                tab_panel(rsx! { "First" }),
                tab_panel(rsx! { "Second" }),
                tab_panel(rsx! { "Orphan" }),
            ],
        }
    }
}

#[component]
fn VisibilityDemo() -> Element {
    let mut visible = use_signal(|| true);

    rsx! {
        button { onclick: move |_| visible.toggle(), "Toggle" }
        AnimatedVisibility { visible, profile: TransitionProfile::ScaleFade,
            Notice {
                kind: NoticeKind::Info,
                label: "Now you see me".to_string(),
                subtitle: "Exit waits for the animation to finish.".to_string(),
            }
        }
    }
}
