//! `ree` global configuration options.
//!
//! The global configuration is read with [`global_config`] and modified with [`global_config_mut`]:
//! ```rust
//! # use ree::config::{global_config, global_config_mut, RunEndWidthSelection};
//! global_config_mut().set_default_run_end_width(RunEndWidthSelection::Auto);
//! assert_eq!(global_config().default_run_end_width(), RunEndWidthSelection::Auto);
//! # global_config_mut().set_default_run_end_width(RunEndWidthSelection::default());
//! ```

use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::RunEndWidth;

/// The run end width used by [`ReeArray::encode_default`](crate::ReeArray::encode_default).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunEndWidthSelection {
    /// The narrowest width that can represent the logical length.
    Auto,
    /// A fixed width.
    Fixed(RunEndWidth),
}

impl Default for RunEndWidthSelection {
    fn default() -> Self {
        Self::Fixed(RunEndWidth::Int32)
    }
}

/// Global configuration options for the `ree` crate.
///
/// Retrieve the global [`Config`] with [`global_config`] and modify it with [`global_config_mut`].
///
/// ## Default Run End Width
/// > default: [`RunEndWidthSelection::Fixed`]`(`[`RunEndWidth::Int32`]`)`
///
/// The run end width used when encoding without an explicit width.
/// 32-bit run ends are the conventional choice of columnar formats.
///
/// ## Point Access Linear Scan Maximum Runs
/// > default: `16`
///
/// Point access ([`ReeArray::value_at`](crate::ReeArray::value_at)) scans the run ends linearly if there are at most this many runs, otherwise it uses a binary search.
///
/// ## Parallel Decode Run Threshold
/// > default: `16384`
///
/// [`ReeArray::decode_opt`](crate::ReeArray::decode_opt) expands runs in parallel if the array has at least this many runs and the [concurrent target](crate::ReeOptions::concurrent_target) is greater than one.
#[derive(Debug)]
pub struct Config {
    default_run_end_width: RunEndWidthSelection,
    point_access_linear_scan_max_runs: usize,
    parallel_decode_run_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_run_end_width: RunEndWidthSelection::default(),
            point_access_linear_scan_max_runs: 16,
            parallel_decode_run_threshold: 16384,
        }
    }
}

impl Config {
    /// Get the [default run end width](#default-run-end-width) configuration.
    #[must_use]
    pub fn default_run_end_width(&self) -> RunEndWidthSelection {
        self.default_run_end_width
    }

    /// Set the [default run end width](#default-run-end-width) configuration.
    pub fn set_default_run_end_width(&mut self, selection: RunEndWidthSelection) -> &mut Self {
        self.default_run_end_width = selection;
        self
    }

    /// Get the [point access linear scan maximum runs](#point-access-linear-scan-maximum-runs) configuration.
    #[must_use]
    pub fn point_access_linear_scan_max_runs(&self) -> usize {
        self.point_access_linear_scan_max_runs
    }

    /// Set the [point access linear scan maximum runs](#point-access-linear-scan-maximum-runs) configuration.
    pub fn set_point_access_linear_scan_max_runs(&mut self, max_runs: usize) -> &mut Self {
        self.point_access_linear_scan_max_runs = max_runs;
        self
    }

    /// Get the [parallel decode run threshold](#parallel-decode-run-threshold) configuration.
    #[must_use]
    pub fn parallel_decode_run_threshold(&self) -> usize {
        self.parallel_decode_run_threshold
    }

    /// Set the [parallel decode run threshold](#parallel-decode-run-threshold) configuration.
    pub fn set_parallel_decode_run_threshold(&mut self, threshold: usize) -> &mut Self {
        self.parallel_decode_run_threshold = threshold;
        self
    }
}

static CONFIG: OnceLock<RwLock<Config>> = OnceLock::new();

/// Returns a reference to the global `ree` configuration.
///
/// # Panics
/// This function panics if the underlying lock has been poisoned and might panic if the global config is already held by the current thread.
pub fn global_config() -> RwLockReadGuard<'static, Config> {
    CONFIG
        .get_or_init(|| RwLock::new(Config::default()))
        .read()
        .unwrap()
}

/// Returns a mutable reference to the global `ree` configuration.
///
/// # Panics
/// This function panics if the underlying lock has been poisoned and might panic if the global config is already held by the current thread.
pub fn global_config_mut() -> RwLockWriteGuard<'static, Config> {
    CONFIG
        .get_or_init(|| RwLock::new(Config::default()))
        .write()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = Config::default();
        assert_eq!(
            config.default_run_end_width(),
            RunEndWidthSelection::Fixed(RunEndWidth::Int32)
        );
        assert_eq!(config.point_access_linear_scan_max_runs(), 16);
        assert_eq!(config.parallel_decode_run_threshold(), 16384);
    }

    #[test]
    fn config_setters() {
        let mut config = Config::default();
        config
            .set_default_run_end_width(RunEndWidthSelection::Auto)
            .set_point_access_linear_scan_max_runs(0)
            .set_parallel_decode_run_threshold(1);
        assert_eq!(config.default_run_end_width(), RunEndWidthSelection::Auto);
        assert_eq!(config.point_access_linear_scan_max_runs(), 0);
        assert_eq!(config.parallel_decode_run_threshold(), 1);
    }
}
