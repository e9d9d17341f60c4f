//! Option surface for pulling a named, versioned package into a local workdir.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern, minus effects:
//! - [`data`] - The finalized configuration and its ordered sets
//! - [`core`] - Modifiers and the fail-fast fold that applies them
//!
//! There is no transfer, cache or checksum logic here. A pull executor
//! builds a [`PullOptions`] once and reads it through accessors.
//!
//! # Example
//!
//! ```
//! use pulith_pull::{PullOption, PullOptions};
//!
//! let options = PullOptions::new([
//!     PullOption::architectures(["x86_64", "x86_64", "arm64"]),
//!     PullOption::version("1.0.0"),
//!     PullOption::version("2.0.0"),
//! ])
//! .unwrap();
//!
//! assert_eq!(options.architectures().as_slice(), ["x86_64", "arm64"]);
//! assert_eq!(options.version(), "2.0.0");
//! options.on_progress(0.5); // no callback registered: no-op
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod data;
mod error;

pub use self::builder::PullOptionsBuilder;
pub use self::config::PullConfig;
pub use self::core::{Modifier, PullOption, build};
pub use self::data::{OrderedSet, ProgressFn, PullOptions};
pub use self::error::{Error, Result};
