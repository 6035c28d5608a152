use serde::{Deserialize, Serialize};

use crate::error::KitError;
use crate::layout::Orientation;
use crate::presence::TransitionProfile;

/// Kit-wide defaults, loaded from a TOML document.
///
/// Every field has a default so a missing or partial file still yields a
/// usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct KitConfig {
    #[serde(default)]
    pub tabs: TabsSettings,
    #[serde(default)]
    pub transitions: TransitionSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabsSettings {
    /// Accessible name for trigger lists that don't set their own.
    #[serde(default = "default_list_label")]
    pub list_label: String,
    /// Width of the trigger column in vertical groups.
    #[serde(default = "default_rail_width")]
    pub rail_width: String,
    #[serde(default)]
    pub default_orientation: Orientation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitionSettings {
    #[serde(default)]
    pub profile: TransitionProfile,
    /// Play the enter animation for elements that are visible on first render.
    #[serde(default = "default_true")]
    pub animate_initial: bool,
}

fn default_list_label() -> String {
    "tabs".to_string()
}

fn default_rail_width() -> String {
    "15rem".to_string()
}

const CSS_LENGTH_UNITS: &[&str] = &[
    "px", "rem", "em", "ch", "ex", "vw", "vh", "vmin", "vmax", "%", "pt", "cm", "mm", "in",
];

/// Accepts a single unsigned CSS length such as `15rem`, `240px` or `20%`.
pub fn is_css_length(value: &str) -> bool {
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let digits = number.chars().filter(char::is_ascii_digit).count();
    let dots = number.matches('.').count();
    if digits == 0 || dots > 1 {
        return false;
    }
    if unit.is_empty() {
        // Unitless lengths are only valid for zero.
        return number.chars().all(|c| c == '0' || c == '.');
    }
    CSS_LENGTH_UNITS.contains(&unit)
}

fn default_true() -> bool {
    true
}

impl Default for TabsSettings {
    fn default() -> Self {
        Self {
            list_label: default_list_label(),
            rail_width: default_rail_width(),
            default_orientation: Orientation::default(),
        }
    }
}

impl TabsSettings {
    /// Rail width safe to place in an inline style. Falls back to the
    /// default when the value was set programmatically to something that
    /// isn't a plain length.
    pub fn rail_width_css(&self) -> &str {
        if is_css_length(&self.rail_width) {
            &self.rail_width
        } else {
            "15rem"
        }
    }
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            profile: TransitionProfile::default(),
            animate_initial: true,
        }
    }
}

impl KitConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, KitError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), KitError> {
        if !is_css_length(&self.tabs.rail_width) {
            return Err(KitError::invalid_config(format!(
                "tabs.rail_width must be a CSS length, got {:?}",
                self.tabs.rail_width
            )));
        }
        Ok(())
    }
}
