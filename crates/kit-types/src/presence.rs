use serde::{Deserialize, Serialize};

/// Named enter/exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitionProfile {
    /// Fade while sliding a few pixels vertically.
    #[default]
    SlideFade,
    /// Fade while scaling from 90%.
    ScaleFade,
}

impl TransitionProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionProfile::SlideFade => "slideFade",
            TransitionProfile::ScaleFade => "scaleFade",
        }
    }

    /// Keyframes name the stylesheet runs for `phase`, if any.
    pub fn keyframes(&self, phase: Phase) -> Option<&'static str> {
        match (self, phase) {
            (TransitionProfile::SlideFade, Phase::Entering) => Some("kit-slide-fade-in"),
            (TransitionProfile::SlideFade, Phase::Exiting) => Some("kit-slide-fade-out"),
            (TransitionProfile::ScaleFade, Phase::Entering) => Some("kit-scale-fade-in"),
            (TransitionProfile::ScaleFade, Phase::Exiting) => Some("kit-scale-fade-out"),
            (_, Phase::Hidden | Phase::Visible) => None,
        }
    }
}

/// Where an animated element is in its mount/unmount cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Entering,
    Visible,
    Exiting,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Hidden => "hidden",
            Phase::Entering => "entering",
            Phase::Visible => "visible",
            Phase::Exiting => "exiting",
        }
    }
}

/// Mount state for an element with enter and exit animations.
///
/// The element stays mounted while its exit animation runs. A show request
/// during an exit abandons the exit, so the latest request always wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presence {
    phase: Phase,
}

impl Presence {
    pub fn new(visible: bool, animate_initial: bool) -> Self {
        let phase = match (visible, animate_initial) {
            (false, _) => Phase::Hidden,
            (true, true) => Phase::Entering,
            (true, false) => Phase::Visible,
        };
        Self { phase }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Apply a visibility request. Returns whether the phase changed.
    pub fn request(&mut self, visible: bool) -> bool {
        let next = match (self.phase, visible) {
            (Phase::Hidden | Phase::Exiting, true) => Phase::Entering,
            (Phase::Visible | Phase::Entering, false) => Phase::Exiting,
            (phase, _) => phase,
        };
        self.transition(next)
    }

    /// The running animation completed. Returns whether the phase changed.
    pub fn animation_finished(&mut self) -> bool {
        let next = match self.phase {
            Phase::Entering => Phase::Visible,
            Phase::Exiting => Phase::Hidden,
            phase => phase,
        };
        self.transition(next)
    }

    /// An `animationend` event arrived with `name`. Only the keyframes this
    /// element runs for its current phase complete it; animations bubbling up
    /// from descendants are ignored.
    pub fn animation_ended(&mut self, profile: TransitionProfile, name: &str) -> bool {
        match profile.keyframes(self.phase) {
            Some(expected) if expected == name => self.animation_finished(),
            _ => false,
        }
    }

    fn transition(&mut self, next: Phase) -> bool {
        let changed = self.phase != next;
        self.phase = next;
        changed
    }
}
