use dioxus::prelude::*;

/// An optional icon next to a label and a muted subtitle.
///
/// Used as trigger content, inside notices, and anywhere a control needs a
/// descriptive caption.
#[component]
pub fn RichLabel(
    /// Icon rendered before the text.
    icon: Option<Element>,
    label: Option<String>,
    subtitle: Option<String>,
    /// Grow to fill the available space.
    #[props(default = false)]
    full_width: bool,
    /// Render only the parts, without the wrapping layout element.
    #[props(default = false)]
    contents_only: bool,
    /// Render nothing.
    #[props(default = false)]
    hide: bool,
    /// Inherit text color from the parent; dim with opacity instead.
    #[props(default = false)]
    no_color: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    if hide {
        return rsx! {};
    }

    let color = if no_color { "inherit" } else { "themed" };

    if contents_only {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            if let Some(icon) = icon {
                span { class: "rich-label-icon", "data-color": color, {icon} }
            }
            if let Some(label) = label {
                span { class: "rich-label-text", "data-color": color, "{label}" }
            }
            if let Some(subtitle) = subtitle {
                span { class: "rich-label-subtitle", "data-color": color, "{subtitle}" }
            }
        };
    }

    let base = vec![
        Attribute::new("class", "rich-label", None, false),
        Attribute::new("data-color", color, None, false),
        Attribute::new("data-full-width", full_width.to_string(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_text = label.is_some() || subtitle.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            if let Some(icon) = icon {
                span { class: "rich-label-icon", {icon} }
            }
            if has_text {
                div { class: "rich-label-copy",
                    if let Some(label) = label {
                        span { class: "rich-label-text", "{label}" }
                    }
                    if let Some(subtitle) = subtitle {
                        span { class: "rich-label-subtitle", "{subtitle}" }
                    }
                }
            }
        }
    }
}
