// Leaf presenters
pub mod rich_label;
pub mod notice;

// Transition host
pub mod animated_visibility;

// Tab composition (renders Notice on malformed input)
pub mod tabs;

// Re-exports for convenience
pub use animated_visibility::*;
pub use notice::*;
pub use rich_label::*;
pub use tabs::*;
