mod context;
mod entity;
mod model;
mod navigation;
mod procedure;
mod property;

pub use context::*;
pub use entity::*;
pub use model::*;
pub use navigation::*;
pub use procedure::*;
pub use property::*;

// Treat empty or whitespace-only optional text as absent.
pub(crate) fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

// Exact identity text; only empty or whitespace-only counts as absent.
pub(crate) fn identity(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}
