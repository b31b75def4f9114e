use std::ops::Range;

use rayon::prelude::*;

use super::ReeArray;
use crate::ReeOptions;
use crate::config::global_config;
use crate::data_type::ValueBuffer;
use crate::error::ReeError;
use crate::run_end_buffer::to_position;

impl ReeArray {
    /// Decode the array into its logical sequence of values.
    ///
    /// See [`decode_opt`](Self::decode_opt).
    ///
    /// # Errors
    /// Returns a validation error if the array is untrusted and invalid.
    pub fn decode(&self) -> Result<ValueBuffer, ReeError> {
        self.decode_opt(&ReeOptions::default())
    }

    /// Explicit options version of [`decode`](Self::decode).
    ///
    /// Runs are expanded in parallel if the run count is at least the [parallel decode run threshold](crate::config::Config#parallel-decode-run-threshold) and the concurrent target of `options` is greater than one.
    ///
    /// # Errors
    /// Returns a validation error if the array is untrusted and invalid.
    pub fn decode_opt(&self, options: &ReeOptions) -> Result<ValueBuffer, ReeError> {
        self.ensure_valid()?;

        let threshold = global_config().parallel_decode_run_threshold();
        let concurrent_target = options.concurrent_target();
        if concurrent_target > 1 && self.run_count() >= threshold.max(1) {
            log::trace!(
                "Decoding {} runs in parallel with concurrent target {concurrent_target}",
                self.run_count()
            );
            self.expand_runs_parallel(concurrent_target)
        } else {
            Ok(self.values.repeat_each(self.run_lengths(0..self.run_count())))
        }
    }

    /// Return the logical length of each run in `runs`.
    fn run_lengths(&self, runs: Range<usize>) -> impl Iterator<Item = usize> {
        runs.map(|index| {
            to_position(self.run_ends.as_slice()[index]) - self.run_ends.start_of_run(index)
        })
    }

    /// Expand all runs, split into `concurrent_target` contiguous groups expanded in parallel.
    fn expand_runs_parallel(&self, concurrent_target: usize) -> Result<ValueBuffer, ReeError> {
        let run_count = self.run_count();
        let group_size = run_count.div_ceil(concurrent_target);
        let groups = run_count.div_ceil(group_size);
        let expanded = (0..groups)
            .into_par_iter()
            .map(|group| -> Result<ValueBuffer, ReeError> {
                let start = group * group_size;
                let end = (start + group_size).min(run_count);
                Ok(self
                    .values
                    .slice(start, end - start)?
                    .repeat_each(self.run_lengths(start..end)))
            })
            .collect::<Result<Vec<_>, ReeError>>()?;

        let mut logical = ValueBuffer::new_empty(self.logical_type());
        for group in expanded {
            logical.append(group)?;
        }
        Ok(logical)
    }
}
