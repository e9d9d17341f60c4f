//! Chained construction of [`PullOptions`].

use std::fmt;
use std::path::PathBuf;

use crate::core::{Modifier, PullOption, build};
use crate::data::PullOptions;
use crate::error::Result;

/// Records modifiers in call order and applies them on [`build`](Self::build).
///
/// # Examples
///
/// ```
/// use pulith_pull::PullOptionsBuilder;
///
/// let options = PullOptionsBuilder::new()
///     .architecture("x86_64")
///     .platform("")
///     .platform("linux")
///     .version("1.0.0")
///     .progress(|p| println!("{:.0}%", p * 100.0))
///     .build()
///     .unwrap();
///
/// assert_eq!(options.platforms().as_slice(), ["linux"]);
/// options.on_progress(0.5);
/// ```
#[derive(Default)]
pub struct PullOptionsBuilder {
    modifiers: Vec<Box<dyn Modifier + Send + Sync>>,
}

impl PullOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append any modifier, including caller-authored validating ones.
    #[must_use]
    pub fn with<M>(mut self, modifier: M) -> Self
    where
        M: Modifier + Send + Sync + 'static,
    {
        self.modifiers.push(Box::new(modifier));
        self
    }

    #[must_use]
    pub fn architecture(self, arch: impl Into<String>) -> Self {
        self.with(PullOption::architecture(arch))
    }

    #[must_use]
    pub fn architectures<I, S>(self, archs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(PullOption::architectures(archs))
    }

    #[must_use]
    pub fn platform(self, plat: impl Into<String>) -> Self {
        self.with(PullOption::platform(plat))
    }

    #[must_use]
    pub fn platforms<I, S>(self, plats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(PullOption::platforms(plats))
    }

    #[must_use]
    pub fn progress<F>(self, callback: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.with(PullOption::progress_func(callback))
    }

    #[must_use]
    pub fn clear_progress(self) -> Self {
        self.with(PullOption::clear_progress_func())
    }

    #[must_use]
    pub fn workdir(self, workdir: impl Into<PathBuf>) -> Self {
        self.with(PullOption::workdir(workdir))
    }

    #[must_use]
    pub fn checksum(self, calc: bool) -> Self {
        self.with(PullOption::checksum(calc))
    }

    #[must_use]
    pub fn cache(self, cache: bool) -> Self {
        self.with(PullOption::cache(cache))
    }

    #[must_use]
    pub fn version(self, version: impl Into<String>) -> Self {
        self.with(PullOption::version(version))
    }

    /// Number of modifiers recorded so far.
    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn build(self) -> Result<PullOptions> {
        build(self.modifiers)
    }
}

impl fmt::Debug for PullOptionsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.modifiers.iter().map(|m| m.name()).collect();
        f.debug_struct("PullOptionsBuilder").field("modifiers", &names).finish()
    }
}

impl PullOptions {
    pub fn builder() -> PullOptionsBuilder {
        PullOptionsBuilder::new()
    }
}
