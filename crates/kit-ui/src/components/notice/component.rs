use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCircleExclamation, FaCircleInfo, FaTriangleExclamation,
};
use dioxus_free_icons::Icon;

use crate::components::RichLabel;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NoticeKind {
    #[default]
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
        }
    }

    fn role(&self) -> &'static str {
        match self {
            NoticeKind::Error => "alert",
            NoticeKind::Info | NoticeKind::Warning => "status",
        }
    }

    fn icon(&self) -> Element {
        match self {
            NoticeKind::Info => rsx! { Icon { width: 16, height: 16, icon: FaCircleInfo } },
            NoticeKind::Warning => {
                rsx! { Icon { width: 16, height: 16, icon: FaTriangleExclamation } }
            }
            NoticeKind::Error => {
                rsx! { Icon { width: 16, height: 16, icon: FaCircleExclamation } }
            }
        }
    }
}

/// A banner with an icon, a title and an optional subtitle.
///
/// Components that refuse to render malformed input show one of these in
/// their place.
#[component]
pub fn Notice(
    #[props(default)] kind: NoticeKind,
    label: String,
    subtitle: Option<String>,
    /// Pin the icon to the first line instead of centering it.
    #[props(default = false)]
    align_icon_to_title: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "notice", None, false),
        Attribute::new("data-kind", kind.class(), None, false),
        Attribute::new("role", kind.role(), None, false),
        Attribute::new(
            "data-icon-align",
            if align_icon_to_title { "title" } else { "center" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            RichLabel {
                icon: kind.icon(),
                label: label,
                subtitle: subtitle,
                no_color: true,
            }
        }
    }
}
