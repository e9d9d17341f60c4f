use std::fmt;
use std::path::PathBuf;

use crate::data::{ProgressFn, PullOptions};
use crate::error::Result;

/// A single step transforming an accumulating [`PullOptions`].
///
/// Implemented by [`PullOption`] for the built-in fields and by [`FnModifier`]
/// for caller-authored steps, so validation can be added without touching
/// this crate.
pub trait Modifier {
    fn apply(&self, options: PullOptions) -> Result<PullOptions>;

    /// Short label used in diagnostics.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<M: Modifier + ?Sized> Modifier for Box<M> {
    fn apply(&self, options: PullOptions) -> Result<PullOptions> {
        (**self).apply(options)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<M: Modifier + ?Sized> Modifier for &M {
    fn apply(&self, options: PullOptions) -> Result<PullOptions> {
        (**self).apply(options)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Modifier backed by a pure function. See [`from_fn`].
#[derive(Clone)]
pub struct FnModifier<F> {
    name: &'static str,
    f:    F,
}

/// Create a modifier from a function taking and returning the options by value.
///
/// # Examples
///
/// ```
/// use pulith_pull::{Error, PullOptions, core::from_fn};
///
/// let require_version = from_fn("require_version", |options: PullOptions| {
///     if options.version().is_empty() {
///         return Err(Error::invalid("version", "must be set"));
///     }
///     Ok(options)
/// });
///
/// let err = pulith_pull::build([require_version]).unwrap_err();
/// assert!(err.is_config_error());
/// ```
pub fn from_fn<F>(name: &'static str, f: F) -> FnModifier<F>
where
    F: Fn(PullOptions) -> Result<PullOptions>,
{
    FnModifier { name, f }
}

impl<F> Modifier for FnModifier<F>
where
    F: Fn(PullOptions) -> Result<PullOptions>,
{
    fn apply(&self, options: PullOptions) -> Result<PullOptions> {
        (self.f)(options)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl<F> fmt::Debug for FnModifier<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnModifier").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Built-in modifiers, one per configurable field.
///
/// Set-valued variants accumulate; every other variant replaces the field,
/// so the last one applied wins.
#[derive(Clone)]
pub enum PullOption {
    /// Append architectures, skipping duplicates and empty strings.
    Architectures(Vec<String>),
    /// Append platforms, skipping duplicates and empty strings.
    Platforms(Vec<String>),
    /// Replace the progress callback. `None` clears it.
    ProgressFunc(Option<ProgressFn>),
    /// Replace the working directory. Existence is not checked.
    Workdir(PathBuf),
    /// Replace the checksum flag.
    Checksum(bool),
    /// Replace the cache flag.
    Cache(bool),
    /// Replace the version. Not parsed.
    Version(String),
}

impl PullOption {
    pub fn architectures<I, S>(archs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Architectures(archs.into_iter().map(Into::into).collect())
    }

    pub fn architecture(arch: impl Into<String>) -> Self {
        Self::Architectures(vec![arch.into()])
    }

    pub fn platforms<I, S>(plats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Platforms(plats.into_iter().map(Into::into).collect())
    }

    pub fn platform(plat: impl Into<String>) -> Self {
        Self::Platforms(vec![plat.into()])
    }

    pub fn progress_func<F>(callback: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        Self::ProgressFunc(Some(std::sync::Arc::new(callback)))
    }

    pub fn clear_progress_func() -> Self {
        Self::ProgressFunc(None)
    }

    pub fn workdir(workdir: impl Into<PathBuf>) -> Self {
        Self::Workdir(workdir.into())
    }

    pub fn checksum(calc: bool) -> Self {
        Self::Checksum(calc)
    }

    pub fn cache(cache: bool) -> Self {
        Self::Cache(cache)
    }

    pub fn version(version: impl Into<String>) -> Self {
        Self::Version(version.into())
    }
}

impl Modifier for PullOption {
    fn apply(&self, mut options: PullOptions) -> Result<PullOptions> {
        match self {
            Self::Architectures(archs) => {
                options.architectures.extend(archs.iter().map(String::as_str));
            }
            Self::Platforms(plats) => {
                options.platforms.extend(plats.iter().map(String::as_str));
            }
            Self::ProgressFunc(callback) => options.on_progress = callback.clone(),
            Self::Workdir(workdir) => options.workdir = workdir.clone(),
            Self::Checksum(calc) => options.calculate_checksum = *calc,
            Self::Cache(cache) => options.use_cache = *cache,
            Self::Version(version) => options.version = version.clone(),
        }
        Ok(options)
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Architectures(_) => "architectures",
            Self::Platforms(_) => "platforms",
            Self::ProgressFunc(_) => "progress_func",
            Self::Workdir(_) => "workdir",
            Self::Checksum(_) => "checksum",
            Self::Cache(_) => "cache",
            Self::Version(_) => "version",
        }
    }
}

impl fmt::Debug for PullOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Architectures(archs) => f.debug_tuple("Architectures").field(archs).finish(),
            Self::Platforms(plats) => f.debug_tuple("Platforms").field(plats).finish(),
            Self::ProgressFunc(callback) => f
                .debug_tuple("ProgressFunc")
                .field(&callback.as_ref().map(|_| "{ ... }"))
                .finish(),
            Self::Workdir(workdir) => f.debug_tuple("Workdir").field(workdir).finish(),
            Self::Checksum(calc) => f.debug_tuple("Checksum").field(calc).finish(),
            Self::Cache(cache) => f.debug_tuple("Cache").field(cache).finish(),
            Self::Version(version) => f.debug_tuple("Version").field(version).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn architectures_dedup_within_one_modifier() {
        let options = PullOption::architectures(["x86_64", "", "x86_64", "arm64"])
            .apply(PullOptions::default())
            .unwrap();
        assert_eq!(options.architectures().as_slice(), ["x86_64", "arm64"]);
    }

    #[test]
    fn platforms_dedup_across_modifiers() {
        let options = PullOption::platform("linux").apply(PullOptions::default()).unwrap();
        let options = PullOption::platforms(["kvm", "linux"]).apply(options).unwrap();
        assert_eq!(options.platforms().as_slice(), ["linux", "kvm"]);
    }

    #[test]
    fn scalar_modifiers_replace() {
        let options = PullOptions::default();
        let options = PullOption::checksum(true).apply(options).unwrap();
        let options = PullOption::cache(true).apply(options).unwrap();
        let options = PullOption::workdir("/tmp/x").apply(options).unwrap();
        let options = PullOption::version("0.4.1").apply(options).unwrap();

        assert!(options.calculate_checksum());
        assert!(options.use_cache());
        assert_eq!(options.workdir(), std::path::Path::new("/tmp/x"));
        assert_eq!(options.version(), "0.4.1");

        let options = PullOption::checksum(false).apply(options).unwrap();
        assert!(!options.calculate_checksum());
    }

    #[test]
    fn clear_progress_func_removes_callback() {
        let counter = Arc::new(AtomicU64::new(0));
        let counter_clone = counter.clone();

        let options = PullOption::progress_func(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        })
        .apply(PullOptions::default())
        .unwrap();
        assert!(options.has_progress());

        let options = PullOption::clear_progress_func().apply(options).unwrap();
        assert!(!options.has_progress());
        options.on_progress(1.0);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn functions_are_modifiers() {
        let require_version = from_fn("require_version", |options: PullOptions| {
            if options.version().is_empty() {
                Err(crate::Error::invalid("version", "must be set"))
            } else {
                Ok(options)
            }
        });

        assert!(require_version.apply(PullOptions::default()).is_err());
        assert_eq!(require_version.name(), "require_version");

        let options = PullOption::version("1.0.0").apply(PullOptions::default()).unwrap();
        assert_eq!(require_version.apply(options).unwrap().version(), "1.0.0");
    }

    #[test]
    fn names_follow_variants() {
        assert_eq!(PullOption::workdir("a").name(), "workdir");
        assert_eq!(PullOption::clear_progress_func().name(), "progress_func");

        let boxed: Box<dyn Modifier> = Box::new(PullOption::cache(true));
        assert_eq!(boxed.name(), "cache");
    }

    #[test]
    fn debug_elides_callback() {
        let rendered = format!("{:?}", PullOption::progress_func(|_| {}));
        assert_eq!(rendered, "ProgressFunc(Some(\"{ ... }\"))");
    }
}
