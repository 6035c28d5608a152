use dioxus::prelude::*;
use kit_types::{KitConfig, Orientation};
use kit_ui::components::{decoration, labeled_tab_list, tab, tab_list, tab_panel, Tabs};
use pretty_assertions::assert_eq;

use crate::common::{count, render, slot_ids_in_order, KitHarness};

fn three_pairs() -> Element {
    rsx! {
        KitHarness {
            Tabs {
                items: vec![
                    tab_list([
                        tab(false, rsx! { "Alpha" }),
                        tab(false, rsx! { "Beta" }),
                        tab(false, rsx! { "Gamma" }),
                    ]),
                    tab_panel(rsx! { "Alpha body" }),
                    tab_panel(rsx! { "Beta body" }),
                    tab_panel(rsx! { "Gamma body" }),
                ],
            }
        }
    }
}

#[test]
fn test_tabs_render_one_trigger_per_slot() {
    let html = render(three_pairs);
    assert_eq!(count(&html, "tab-trigger-label"), 3);
    for id in ["tab-t1-1", "tab-t1-2", "tab-t1-3"] {
        assert!(html.contains(&format!("data-slot-id=\"{id}\"")), "{id} in {html}");
    }
    assert!(html.contains("Alpha"));
    assert!(html.contains("Gamma"));
    assert!(html.contains("tab-list"));
    assert!(!html.contains("notice"));
}

#[test]
fn test_tabs_trigger_and_panel_share_slot_id() {
    let html = render(three_pairs);
    let ids = slot_ids_in_order(&html);
    let (triggers, panels) = ids.split_at(3);
    assert_eq!(triggers, ["tab-t1-1", "tab-t1-2", "tab-t1-3"]);
    // The selected panel is always rendered.
    assert_eq!(panels.first(), Some(&"tab-t1-1"), "{html}");
    assert!(panels.len() <= 3);

    for (id, body) in [
        ("tab-t1-1", "Alpha body"),
        ("tab-t1-2", "Beta body"),
        ("tab-t1-3", "Gamma body"),
    ] {
        let Some(at) = html.find(body) else {
            assert_ne!(id, "tab-t1-1", "selected panel missing from {html}");
            continue;
        };
        let owner = slot_ids_in_order(&html[..at]).last().copied();
        assert_eq!(owner, Some(id), "{body} should sit inside panel {id}");
    }
}

#[test]
fn test_tabs_horizontal_layout_by_default() {
    let html = render(three_pairs);
    assert!(html.contains("data-layout=\"stacked\""));
    assert_eq!(count(&html, "data-axis=\"width\""), 3);
    assert_eq!(count(&html, "data-anchor=\"bottom\""), 3);
    assert_eq!(count(&html, "data-axis=\"height\""), 0);
}

fn mismatched() -> Element {
    rsx! {
        KitHarness {
            Tabs {
                items: vec![
                    tab_list([tab(false, rsx! { "One" }), tab(false, rsx! { "Two" })]),
                    tab_panel(rsx! { "First" }),
                    tab_panel(rsx! { "Second" }),
                    tab_panel(rsx! { "Third" }),
                ],
            }
        }
    }
}

#[test]
fn test_tabs_mismatch_renders_diagnostic() {
    let html = render(mismatched);
    assert!(html.contains("Number of tabs (2) and tab panels (3) should be the same."));
    assert!(html.contains("Component is not configured correctly."));
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("data-kind=\"error\""));
}

#[test]
fn test_tabs_mismatch_renders_no_tab_tree() {
    let html = render(mismatched);
    assert!(!html.contains("tab-trigger"));
    assert!(!html.contains("tab-list"));
    assert!(!html.contains("data-slot-id"));
    assert!(!html.contains("First"));
}

fn panels_without_list() -> Element {
    rsx! {
        KitHarness {
            Tabs { items: vec![tab_panel(rsx! { "Lonely" })] }
        }
    }
}

#[test]
fn test_tabs_panels_without_list_are_a_mismatch() {
    let html = render(panels_without_list);
    assert!(html.contains("Number of tabs (0) and tab panels (1)"));
}

fn stray_trigger() -> Element {
    rsx! {
        KitHarness {
            Tabs {
                items: vec![
                    tab(false, rsx! { "Stray" }),
                    tab_panel(rsx! { "Body" }),
                ],
            }
        }
    }
}

#[test]
fn test_tabs_trigger_outside_list_is_not_counted() {
    let html = render(stray_trigger);
    assert!(html.contains("Number of tabs (0) and tab panels (1)"));
}

fn empty_group() -> Element {
    rsx! {
        KitHarness {
            Tabs { items: vec![tab_list([])] }
        }
    }
}

#[test]
fn test_tabs_empty_group_renders_empty_container() {
    let html = render(empty_group);
    assert!(html.contains("data-layout=\"stacked\""));
    assert!(!html.contains("tab-list"));
    assert!(!html.contains("data-slot-id"));
    assert!(!html.contains("notice"));
}

fn vertical_pairs() -> Element {
    rsx! {
        KitHarness {
            Tabs {
                orientation: Orientation::Vertical,
                items: vec![
                    tab_list([tab(false, rsx! { "Left" }), tab(false, rsx! { "Right" })]),
                    tab_panel(rsx! { "Left body" }),
                    tab_panel(rsx! { "Right body" }),
                ],
            }
        }
    }
}

#[test]
fn test_tabs_vertical_uses_rail_and_leading_indicators() {
    let html = render(vertical_pairs);
    assert!(html.contains("data-layout=\"rail\""));
    assert!(html.contains("--tabs-rail-width: 15rem;"));
    assert_eq!(count(&html, "data-axis=\"height\""), 2);
    assert_eq!(count(&html, "data-anchor=\"leading\""), 2);
    assert_eq!(count(&html, "data-axis=\"width\""), 0);
    assert!(html.contains("scaleY("));
}

#[test]
fn test_tabs_rerender_keeps_ids_and_orientation() {
    let mut dom = VirtualDom::new(vertical_pairs);
    dom.rebuild_in_place();
    let first = dioxus_ssr::render(&dom);
    assert!(first.contains("data-slot-id=\"tab-t1-1\""));

    for _ in 0..3 {
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();
        assert_eq!(dioxus_ssr::render(&dom), first);
    }
}

#[test]
fn test_tabs_vertical_triggers_inherit_orientation() {
    let html = render(vertical_pairs);
    assert_eq!(count(&html, "tab-trigger-label"), 2);
    assert!(count(&html, "data-orientation=\"vertical\"") >= 2);
    assert!(!html.contains("data-orientation=\"horizontal\""));
}

fn with_decorations() -> Element {
    rsx! {
        KitHarness {
            Tabs {
                items: vec![
                    decoration(rsx! { "DECORATION" }),
                    tab_list([tab(false, rsx! { "Only" })]),
                    decoration(rsx! { "ORNAMENT" }),
                    tab_panel(rsx! { "Only body" }),
                ],
            }
        }
    }
}

#[test]
fn test_tabs_drop_unrecognized_children() {
    let html = render(with_decorations);
    assert!(!html.contains("DECORATION"));
    assert!(!html.contains("ORNAMENT"));
    assert!(html.contains("data-slot-id=\"tab-t1-1\""));
}

fn default_label() -> Element {
    rsx! {
        KitHarness {
            Tabs {
                items: vec![tab_list([tab(false, rsx! { "A" })]), tab_panel(rsx! { "a" })],
            }
        }
    }
}

fn custom_label() -> Element {
    rsx! {
        KitHarness {
            Tabs {
                items: vec![
                    labeled_tab_list("Chapters", [tab(false, rsx! { "A" })]),
                    tab_panel(rsx! { "a" }),
                ],
            }
        }
    }
}

#[test]
fn test_tabs_list_label_defaults_to_config() {
    assert!(render(default_label).contains("aria-label=\"tabs\""));
    assert!(render(custom_label).contains("aria-label=\"Chapters\""));
}

fn two_groups() -> Element {
    rsx! {
        KitHarness {
            Tabs {
                items: vec![tab_list([tab(false, rsx! { "A" })]), tab_panel(rsx! { "a" })],
            }
            Tabs {
                items: vec![tab_list([tab(false, rsx! { "B" })]), tab_panel(rsx! { "b" })],
            }
        }
    }
}

#[test]
fn test_tabs_sibling_groups_get_distinct_ids() {
    let html = render(two_groups);
    assert!(html.contains("data-slot-id=\"tab-t1-1\""));
    assert!(html.contains("data-slot-id=\"tab-t2-1\""));
}

fn configured_vertical() -> Element {
    let config = KitConfig::from_toml_str(
        r#"
        [tabs]
        list_label = "Sections"
        rail_width = "12rem"
        default_orientation = "vertical"
        "#,
    )
    .unwrap();

    rsx! {
        KitHarness { config,
            Tabs {
                items: vec![tab_list([tab(false, rsx! { "A" })]), tab_panel(rsx! { "a" })],
            }
        }
    }
}

#[test]
fn test_tabs_follow_configured_defaults() {
    let html = render(configured_vertical);
    assert!(html.contains("data-layout=\"rail\""));
    assert!(html.contains("--tabs-rail-width: 12rem;"));
    assert!(html.contains("aria-label=\"Sections\""));
}

fn unchecked_rail_width() -> Element {
    let mut config = KitConfig::default();
    config.tabs.rail_width = "1rem; color: red".to_string();
    config.tabs.default_orientation = Orientation::Vertical;

    rsx! {
        KitHarness { config,
            Tabs {
                items: vec![tab_list([tab(false, rsx! { "A" })]), tab_panel(rsx! { "a" })],
            }
        }
    }
}

#[test]
fn test_tabs_ignore_rail_width_that_is_not_a_length() {
    let html = render(unchecked_rail_width);
    assert!(html.contains("--tabs-rail-width: 15rem;"));
    assert!(!html.contains("color: red"));
}
