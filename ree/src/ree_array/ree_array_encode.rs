use itertools::Itertools;

use super::ReeArray;
use crate::config::{RunEndWidthSelection, global_config};
use crate::data_type::ValueBuffer;
use crate::error::{ReeError, UnsupportedRunEndWidthError};
use crate::validate::validate_run_end_width;
use crate::{RunEndBuffer, RunEndWidth};

impl ReeArray {
    /// Run-end encode a logical sequence of values with run ends of `width`.
    ///
    /// Maximal runs of equal values are collapsed into a single run, so the run count is minimal.
    /// Nulls are equal to each other and to no value.
    /// Floating point values are compared by their bit pattern.
    ///
    /// # Errors
    /// Returns [`ReeError::UnsupportedRunEndWidth`] if `width` cannot represent the length of `logical`.
    pub fn encode(logical: &ValueBuffer, width: RunEndWidth) -> Result<Self, ReeError> {
        validate_run_end_width(width, logical.len() as u64)?;

        let mut run_ends = Vec::new();
        let mut values = Vec::new();
        let mut end: i64 = 0;
        for (value, run) in &logical.iter().chunk_by(|value| *value) {
            // The width check bounds `end` by `i64::MAX`
            #[allow(clippy::cast_possible_wrap)]
            let run_length = run.count() as i64;
            end += run_length;
            run_ends.push(end);
            values.push(value.cloned());
        }

        log::debug!(
            "Encoded {} {} values into {} runs with {} run ends",
            logical.len(),
            logical.logical_type(),
            run_ends.len(),
            width
        );

        Ok(Self {
            run_ends: RunEndBuffer::from_raw(width, run_ends),
            values: ValueBuffer::build(values, logical.logical_type())?,
            trusted: true,
        })
    }

    /// Run-end encode a logical sequence of values with the [default run end width](crate::config::Config#default-run-end-width).
    ///
    /// # Errors
    /// Returns [`ReeError::UnsupportedRunEndWidth`] if the run end width cannot represent the length of `logical`.
    pub fn encode_default(logical: &ValueBuffer) -> Result<Self, ReeError> {
        let logical_length = logical.len() as u64;
        let selection = global_config().default_run_end_width();
        let width = match selection {
            RunEndWidthSelection::Fixed(width) => width,
            RunEndWidthSelection::Auto => RunEndWidth::smallest_for(logical_length).ok_or_else(
                || UnsupportedRunEndWidthError::new(RunEndWidth::Int64, logical_length),
            )?,
        };
        Self::encode(logical, width)
    }
}
