use dioxus::prelude::*;
use kit_types::{Presence, TransitionProfile};

use crate::context::use_kit_config;

/// Mounts its children with an enter animation and keeps them mounted until
/// the exit animation has finished.
///
/// Flipping `visible` back on during an exit cancels the exit.
#[component]
pub fn AnimatedVisibility(
    visible: ReadSignal<bool>,
    /// Animation to play. Falls back to the configured profile.
    profile: Option<TransitionProfile>,
    /// Skip the enter animation when the element is visible on first render.
    #[props(default = false)]
    no_initial: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let config = use_kit_config();
    let profile = profile.unwrap_or(config.transitions.profile);
    let mut presence = use_signal(|| {
        Presence::new(
            *visible.peek(),
            config.transitions.animate_initial && !no_initial,
        )
    });

    use_effect(move || {
        let wanted = *visible.read();
        let mut next = *presence.peek();
        if next.request(wanted) {
            tracing::trace!(phase = next.phase().as_str(), "Visibility requested");
            presence.set(next);
        }
    });

    let state = presence();
    let base = vec![
        Attribute::new("class", "animated-visibility", None, false),
        Attribute::new("data-transition", profile.as_str(), None, false),
        Attribute::new("data-state", state.phase().as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if state.is_mounted() {
            div {
                onanimationend: move |evt: Event<AnimationData>| {
                    let mut next = *presence.peek();
                    if next.animation_ended(profile, &evt.data().animation_name()) {
                        // Handled here; an enclosing host must not see it as its own.
                        evt.stop_propagation();
                        tracing::trace!(phase = next.phase().as_str(), "Transition finished");
                        presence.set(next);
                    }
                },
                ..merged,
                {children}
            }
        }
    }
}
