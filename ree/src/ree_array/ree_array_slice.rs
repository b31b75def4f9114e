use super::ReeArray;
use crate::RunEndBuffer;
use crate::error::ReeError;

impl ReeArray {
    /// Return the logical window `offset..offset + length` as a new run-end encoded array.
    ///
    /// The run ends of the result are relative to `offset`, and the first and last runs are truncated to the window.
    /// The result has the run end width and logical type of `self`.
    /// A zero `length` produces an empty array.
    ///
    /// # Errors
    /// Returns [`ReeError::IndexOutOfRange`] if `offset + length` exceeds the logical length.
    /// Returns a validation error if the array is untrusted and invalid.
    pub fn slice(&self, offset: usize, length: usize) -> Result<Self, ReeError> {
        self.ensure_valid()?;
        let logical_length = self.logical_length();
        let end = offset
            .checked_add(length)
            .filter(|&end| end <= logical_length)
            .ok_or_else(|| ReeError::index_out_of_range(offset, length, logical_length))?;

        if length == 0 {
            return Ok(Self::new_empty(self.run_end_width(), self.logical_type()));
        }

        let out_of_range = || ReeError::index_out_of_range(offset, length, logical_length);
        let first = self.run_ends.run_index_of(offset).ok_or_else(out_of_range)?;
        let last = self.run_ends.run_index_of(end - 1).ok_or_else(out_of_range)?;

        // Both are bounded by the final run end
        #[allow(clippy::cast_possible_wrap)]
        let (offset_i64, end_i64) = (offset as i64, end as i64);
        let run_ends: Vec<i64> = self.run_ends.as_slice()[first..=last]
            .iter()
            .map(|&run_end| run_end.min(end_i64) - offset_i64)
            .collect();
        let values = self.values.slice(first, last - first + 1)?;

        log::debug!(
            "Sliced {offset}..{end} of {logical_length} values into runs {first}..={last}"
        );

        Ok(Self {
            run_ends: RunEndBuffer::from_raw(self.run_end_width(), run_ends),
            values,
            trusted: true,
        })
    }
}
