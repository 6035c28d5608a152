pub mod components;
pub mod context;

pub use context::*;
pub use kit_types;
