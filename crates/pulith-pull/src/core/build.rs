use crate::data::PullOptions;
use crate::error::Result;

use super::modifier::Modifier;

/// Apply `modifiers` in order to a default [`PullOptions`].
///
/// The first modifier that fails aborts construction: its error is returned
/// unchanged and later modifiers are never applied.
///
/// # Examples
///
/// ```
/// use pulith_pull::{PullOption, build};
///
/// let options = build([
///     PullOption::cache(true),
///     PullOption::checksum(true),
///     PullOption::workdir("/tmp/x"),
/// ])
/// .unwrap();
///
/// assert!(options.use_cache());
/// assert!(options.calculate_checksum());
/// ```
pub fn build<I>(modifiers: I) -> Result<PullOptions>
where
    I: IntoIterator,
    I::Item: Modifier,
{
    let mut options = PullOptions::default();

    for (index, modifier) in modifiers.into_iter().enumerate() {
        options = match modifier.apply(options) {
            Ok(options) => options,
            Err(e) => {
                tracing::debug!(index, modifier = modifier.name(), error = %e, "pull option rejected");
                return Err(e);
            }
        };
        tracing::trace!(index, modifier = modifier.name(), "pull option applied");
    }

    Ok(options)
}

impl PullOptions {
    /// Build options from an ordered sequence of modifiers. See [`build`].
    pub fn new<I>(modifiers: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Modifier,
    {
        build(modifiers)
    }
}
