//! Framework-free building blocks for the component kit.
//!
//! The tab composition engine lives here: node roles, group/slot identifiers,
//! the child classifier, the structural validator and the reference binder.
//! Everything is generic over the opaque content type `C` so the UI crate can
//! plug in its own element type.

pub mod bind;
pub mod classify;
pub mod config;
pub mod error;
pub mod ids;
pub mod layout;
pub mod node;
pub mod presence;
pub mod validate;

pub use bind::*;
pub use classify::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use layout::*;
pub use node::*;
pub use presence::*;
pub use validate::*;
