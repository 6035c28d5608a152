use dioxus::prelude::*;
use dioxus_primitives::tabs as prim;
use kit_types::{bind, classify, IndicatorExtent, LayoutMode, Orientation, TabNode};

use crate::components::{Notice, NoticeKind};
use crate::context::{use_id_allocator, use_kit_config};

/// A child of [`Tabs`], tagged with its role.
pub type TabChild = TabNode<Element>;

/// Container for the group's triggers.
pub fn tab_list(items: impl IntoIterator<Item = TabChild>) -> TabChild {
    TabNode::list(items)
}

/// Trigger list with its own accessible name.
pub fn labeled_tab_list(label: impl Into<String>, items: impl IntoIterator<Item = TabChild>) -> TabChild {
    TabNode::labeled_list(label, items)
}

/// A selectable tab header. Must be placed inside a [`tab_list`].
pub fn tab(disabled: bool, content: Element) -> TabChild {
    TabNode::trigger(disabled, content)
}

/// Content for the trigger declared at the same position.
pub fn tab_panel(content: Element) -> TabChild {
    TabNode::panel(content)
}

/// Anything else passed to a tab group. Never rendered.
pub fn decoration(content: Element) -> TabChild {
    TabNode::other(content)
}

#[derive(Props, Clone, PartialEq)]
pub struct TabsProps {
    /// Children in declaration order. The i-th trigger is paired with the
    /// i-th panel.
    pub items: Vec<TabChild>,
    /// Fixed for the lifetime of the component. Falls back to the
    /// configured default.
    #[props(default)]
    pub orientation: Option<Orientation>,
    /// Slot selected on mount. Disabled or out-of-range slots fall back to the
    /// first enabled trigger.
    #[props(default)]
    pub default_index: Option<usize>,
    /// Called with the slot index of the newly selected trigger.
    #[props(default)]
    pub on_change: Option<EventHandler<usize>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// Tabbed disclosure built on the accessible tabs primitive.
///
/// Triggers and panels are correlated by position. When their counts differ
/// nothing is paired and an error [`Notice`] is rendered instead.
#[component]
pub fn Tabs(props: TabsProps) -> Element {
    let config = use_kit_config();
    let ids = use_id_allocator();
    let group = use_hook(|| ids.allocate());
    let orientation = use_hook(|| props.orientation.unwrap_or(config.tabs.default_orientation));
    let mut selected = use_signal(|| None::<String>);

    let classified = classify(props.items.clone());
    if classified.dropped > 0 {
        tracing::debug!(
            group = %group,
            dropped = classified.dropped,
            "Ignored tab group children without a usable role"
        );
    }

    let bound = match bind(&group, orientation, classified) {
        Ok(bound) => bound,
        Err(err) => {
            tracing::warn!(group = %group, error = %err, "Tab group skipped render");
            return rsx! {
                Notice {
                    kind: NoticeKind::Error,
                    label: err.title().to_string(),
                    subtitle: err.detail(),
                    align_icon_to_title: true,
                }
            };
        }
    };

    let slot_ids: Vec<String> = bound.triggers.iter().map(|t| t.id.to_string()).collect();
    let initial = bound
        .initial_selection(props.default_index)
        .map(|slot| slot_ids[slot].clone())
        .unwrap_or_default();
    let current = selected
        .read()
        .clone()
        .filter(|id| slot_ids.contains(id))
        .unwrap_or_else(|| initial.clone());

    let on_change = props.on_change;
    let handle_change = move |value: String| {
        if let Some(slot) = slot_ids.iter().position(|id| *id == value) {
            if let Some(handler) = &on_change {
                handler.call(slot);
            }
        }
        selected.set(Some(value));
    };

    let layout = orientation.layout();
    let base = vec![
        Attribute::new("class", "tabs", None, false),
        Attribute::new("data-orientation", orientation.as_str(), None, false),
        Attribute::new("data-layout", layout.as_str(), None, false),
        Attribute::new(
            "style",
            format!("--tabs-rail-width: {};", config.tabs.rail_width_css()),
            None,
            false,
        ),
    ];
    let root_attributes = dioxus_primitives::merge_attributes(vec![base, props.attributes.clone()]);

    let list_label = bound
        .list_label
        .clone()
        .unwrap_or_else(|| config.tabs.list_label.clone());
    let list_attributes = vec![
        Attribute::new("class", "tab-list", None, false),
        Attribute::new("data-orientation", orientation.as_str(), None, false),
        Attribute::new("aria-label", list_label, None, false),
    ];

    let has_triggers = !bound.is_empty();
    let triggers = bound.triggers.into_iter().map(|trigger| {
        let id = trigger.id.to_string();
        let trigger_orientation = trigger.orientation();
        let geometry = trigger_orientation.indicator();
        let extent = IndicatorExtent::resolve(id == current, trigger.disabled);
        let transform = geometry.transform(extent);

        rsx! {
            prim::TabTrigger {
                key: "{id}",
                value: id.clone(),
                index: trigger.slot,
                disabled: trigger.disabled,
                class: "tab-trigger".to_string(),
                span {
                    class: "tab-trigger-label",
                    "data-slot-id": "{id}",
                    "data-orientation": trigger_orientation.as_str(),
                    {trigger.content}
                }
                span {
                    class: "tab-indicator",
                    "aria-hidden": "true",
                    "data-axis": geometry.axis.as_str(),
                    "data-anchor": geometry.anchor.as_str(),
                    "data-extent": extent.as_str(),
                    style: "transform: {transform};",
                }
            }
        }
    });

    let panel_class = match layout {
        LayoutMode::Stacked => "tab-panel",
        LayoutMode::Rail => "tab-panel tab-panel-rail",
    };
    let panels = bound.panels.into_iter().map(|panel| {
        let id = panel.id.to_string();

        rsx! {
            prim::TabContent {
                key: "{id}",
                value: id.clone(),
                index: panel.slot,
                class: panel_class.to_string(),
                div {
                    class: "tab-panel-body",
                    "data-slot-id": "{id}",
                    {panel.content}
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Tabs {
            default_value: initial,
            horizontal: !orientation.is_vertical(),
            on_value_change: handle_change,
            attributes: root_attributes,
            if has_triggers {
                prim::TabList { attributes: list_attributes, {triggers} }
            }
            {panels}
        }
    }
}
