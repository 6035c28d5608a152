use serde::{Deserialize, Serialize};

/// Layout axis of a tab group, fixed when the group is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    pub fn layout(&self) -> LayoutMode {
        match self {
            Orientation::Horizontal => LayoutMode::Stacked,
            Orientation::Vertical => LayoutMode::Rail,
        }
    }

    pub fn indicator(&self) -> IndicatorGeometry {
        match self {
            Orientation::Horizontal => IndicatorGeometry {
                axis: IndicatorAxis::Width,
                anchor: IndicatorAnchor::Bottom,
            },
            Orientation::Vertical => IndicatorGeometry {
                axis: IndicatorAxis::Height,
                anchor: IndicatorAnchor::Leading,
            },
        }
    }
}

/// How triggers and panels are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Row of triggers above the stacked panels.
    Stacked,
    /// Two columns: a fixed-width trigger rail beside the panel region.
    Rail,
}

impl LayoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Stacked => "stacked",
            LayoutMode::Rail => "rail",
        }
    }
}

/// Dimension along which the selection indicator scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorAxis {
    Width,
    Height,
}

/// Edge of the trigger the indicator is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorAnchor {
    Bottom,
    Leading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorGeometry {
    pub axis: IndicatorAxis,
    pub anchor: IndicatorAnchor,
}

impl IndicatorAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorAxis::Width => "width",
            IndicatorAxis::Height => "height",
        }
    }
}

impl IndicatorAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorAnchor::Bottom => "bottom",
            IndicatorAnchor::Leading => "leading",
        }
    }
}

impl IndicatorGeometry {
    /// CSS transform for the indicator at `extent`.
    pub fn transform(&self, extent: IndicatorExtent) -> String {
        let function = match self.axis {
            IndicatorAxis::Width => "scaleX",
            IndicatorAxis::Height => "scaleY",
        };
        format!("{function}({})", extent.scale())
    }
}

/// Size of a trigger's indicator, derived from the primitive's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorExtent {
    Resting,
    Selected,
    Hidden,
}

impl IndicatorExtent {
    pub fn resolve(selected: bool, disabled: bool) -> Self {
        match (selected, disabled) {
            (_, true) => IndicatorExtent::Hidden,
            (true, false) => IndicatorExtent::Selected,
            (false, false) => IndicatorExtent::Resting,
        }
    }

    pub fn scale(&self) -> f32 {
        match self {
            IndicatorExtent::Resting => 0.75,
            IndicatorExtent::Selected => 1.0,
            IndicatorExtent::Hidden => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorExtent::Resting => "resting",
            IndicatorExtent::Selected => "selected",
            IndicatorExtent::Hidden => "hidden",
        }
    }
}
