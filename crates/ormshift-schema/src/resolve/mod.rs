//! Batch passes that must run once, over the complete entity list, before
//! any rendering.

pub mod inverse;
pub mod key;

pub use inverse::resolve_inverses;
pub use key::{promote_primary_key, promote_primary_keys};
