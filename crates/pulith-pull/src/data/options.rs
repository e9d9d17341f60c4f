use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::set::OrderedSet;

/// Progress sink receiving the fraction of the pull completed so far.
///
/// Executors are expected to report non-decreasing values in `[0.0, 1.0]`;
/// the value is forwarded as given.
pub type ProgressFn = Arc<dyn Fn(f64) + Send + Sync>;

/// Finalized configuration for a single pull.
///
/// Built through [`PullOptions::new`], [`crate::PullOptionsBuilder`] or
/// [`crate::PullConfig`]. Once returned it exposes read-only accessors only.
///
/// # Examples
///
/// ```
/// use pulith_pull::PullOptions;
///
/// let options = PullOptions::default();
/// assert!(options.architectures().is_empty());
/// assert_eq!(options.version(), "");
/// assert!(!options.calculate_checksum());
/// assert!(!options.use_cache());
/// assert_eq!(options.workdir().as_os_str(), "");
/// ```
#[derive(Clone, Default)]
pub struct PullOptions {
    pub(crate) architectures:      OrderedSet,
    pub(crate) platforms:          OrderedSet,
    pub(crate) version:            String,
    pub(crate) calculate_checksum: bool,
    pub(crate) use_cache:          bool,
    pub(crate) workdir:            PathBuf,
    pub(crate) on_progress:        Option<ProgressFn>,
}

impl fmt::Debug for PullOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PullOptions")
            .field("architectures", &self.architectures.as_slice())
            .field("platforms", &self.platforms.as_slice())
            .field("version", &self.version)
            .field("calculate_checksum", &self.calculate_checksum)
            .field("use_cache", &self.use_cache)
            .field("workdir", &self.workdir)
            .field("on_progress", &self.on_progress.as_ref().map(|_| "{ ... }"))
            .finish()
    }
}

impl PullOptions {
    /// Requested architectures, in first-seen order.
    pub fn architectures(&self) -> &OrderedSet {
        &self.architectures
    }

    /// Requested platforms, in first-seen order.
    pub fn platforms(&self) -> &OrderedSet {
        &self.platforms
    }

    /// Version to pull. Empty means unspecified.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether the executor should compute and compare the package checksum.
    pub fn calculate_checksum(&self) -> bool {
        self.calculate_checksum
    }

    /// Whether the executor should serve the pull from a local cache when possible.
    pub fn use_cache(&self) -> bool {
        self.use_cache
    }

    /// Directory the package resources are placed in.
    ///
    /// Empty means unspecified; the caller is expected to supply a default.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn has_progress(&self) -> bool {
        self.on_progress.is_some()
    }

    /// Report progress to the registered callback, if any.
    ///
    /// Safe to call unconditionally: without a callback this does nothing.
    pub fn on_progress(&self, progress: f64) {
        if let Some(callback) = &self.on_progress {
            callback(progress);
        }
    }
}
