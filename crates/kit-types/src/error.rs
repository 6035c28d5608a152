use std::fmt;

/// Headline shown when a tab group refuses to render.
pub const MISCONFIGURED_TITLE: &str =
    "Component is not configured correctly. Skipping render to prevent errors.";

/// Errors raised by the kit.
///
/// A structural mismatch is never thrown at the caller of a component; the
/// renderer turns it into a visible diagnostic instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KitError {
    /// Trigger and panel counts differ, so no pairing is attempted.
    StructureMismatch { triggers: usize, panels: usize },
    /// A configuration document could not be parsed.
    InvalidConfig(String),
}

impl KitError {
    pub fn structure_mismatch(triggers: usize, panels: usize) -> Self {
        KitError::StructureMismatch { triggers, panels }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        KitError::InvalidConfig(message.into())
    }

    /// Short headline for a diagnostic banner.
    pub fn title(&self) -> &'static str {
        match self {
            KitError::StructureMismatch { .. } => MISCONFIGURED_TITLE,
            KitError::InvalidConfig(_) => "Configuration could not be loaded.",
        }
    }

    /// Human-readable detail line for a diagnostic banner.
    pub fn detail(&self) -> String {
        match self {
            KitError::StructureMismatch { triggers, panels } => format!(
                "Number of tabs ({triggers}) and tab panels ({panels}) should be the same. \
                 Tabs should be within a tab list."
            ),
            KitError::InvalidConfig(message) => message.clone(),
        }
    }
}

impl fmt::Display for KitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KitError::StructureMismatch { .. } => write!(f, "StructureMismatch: {}", self.detail()),
            KitError::InvalidConfig(message) => write!(f, "InvalidConfig: {message}"),
        }
    }
}

impl std::error::Error for KitError {}

impl From<toml::de::Error> for KitError {
    fn from(error: toml::de::Error) -> Self {
        KitError::InvalidConfig(error.to_string())
    }
}
