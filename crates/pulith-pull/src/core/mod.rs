//! Pure transformations applied while constructing [`crate::PullOptions`].

pub mod build;
pub mod modifier;

pub use build::build;
pub use modifier::{FnModifier, Modifier, PullOption, from_fn};
