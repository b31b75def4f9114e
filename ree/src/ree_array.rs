//! Run-end encoded arrays.
//!
//! A [`ReeArray`] represents a logical sequence of `L` optionally null values as `m` runs.
//! Run `i` covers the logical positions `run_ends[i-1]..run_ends[i]` (with `run_ends[-1] = 0`) and holds the value `values[i]`.
//!
//! ```rust
//! # use ree::{ReeArray, RunEndWidth};
//! # use ree::data_type::ValueBuffer;
//! let logical = ValueBuffer::from_values([1i64, 1, 1, 1, 2, 2, 3, 3, 3, 3]);
//! let array = ReeArray::encode(&logical, RunEndWidth::Int32)?;
//! assert_eq!(array.run_ends().as_slice(), &[4, 6, 10]);
//! assert_eq!(array.values(), &ValueBuffer::from_values([1i64, 2, 3]));
//! assert_eq!(array.decode()?, logical);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod ree_array_decode;
mod ree_array_encode;
mod ree_array_slice;

use std::ops::Range;

use crate::config::global_config;
use crate::data_type::{LogicalType, Value, ValueBuffer};
use crate::error::ReeError;
use crate::run_end_buffer::to_position;
use crate::{RunEndBuffer, RunEndWidth, validate};

/// A run-end encoded array.
///
/// A [`ReeArray`] is immutable. Slicing and decoding produce new, independently owned buffers.
///
/// An array is either *trusted* or *untrusted*:
///  - arrays produced by [`encode`](Self::encode), [`try_new`](Self::try_new), or slicing a trusted array are trusted,
///  - arrays constructed with [`from_parts`](Self::from_parts) are untrusted.
///
/// Untrusted arrays are validated before they are decoded, sliced, or accessed by position.
/// [`validate`](Self::validate) can be called at any time and has no side effects.
#[derive(Clone, Debug)]
pub struct ReeArray {
    run_ends: RunEndBuffer,
    values: ValueBuffer,
    trusted: bool,
}

impl PartialEq for ReeArray {
    fn eq(&self, other: &Self) -> bool {
        self.run_ends == other.run_ends && self.values == other.values
    }
}

impl Eq for ReeArray {}

impl ReeArray {
    /// Create a new run-end encoded array from `run_ends` and `values`.
    ///
    /// # Errors
    /// Returns a [`ReeError`] if the parts fail [validation](crate::validate::validate_parts).
    pub fn try_new(run_ends: RunEndBuffer, values: ValueBuffer) -> Result<Self, ReeError> {
        validate::validate_parts(&run_ends, &values)?;
        Ok(Self {
            run_ends,
            values,
            trusted: true,
        })
    }

    /// Create a new run-end encoded array from `run_ends` and `values` without validation.
    ///
    /// This is intended for parts read from an untrusted external source.
    /// The array is validated when it is first decoded, sliced, or accessed by position.
    #[must_use]
    pub fn from_parts(run_ends: RunEndBuffer, values: ValueBuffer) -> Self {
        Self {
            run_ends,
            values,
            trusted: false,
        }
    }

    /// Create an empty run-end encoded array.
    #[must_use]
    pub fn new_empty(width: RunEndWidth, logical_type: LogicalType) -> Self {
        Self {
            run_ends: RunEndBuffer::new_empty(width),
            values: ValueBuffer::new_empty(logical_type),
            trusted: true,
        }
    }

    /// Validate the array.
    ///
    /// See [`validate_parts`](crate::validate::validate_parts) for the checks performed.
    ///
    /// # Errors
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ReeError> {
        validate::validate_parts(&self.run_ends, &self.values)
    }

    /// Validate the array if it is untrusted.
    fn ensure_valid(&self) -> Result<(), ReeError> {
        if self.trusted {
            return Ok(());
        }
        self.validate().inspect_err(|err| {
            log::warn!("Untrusted run-end encoded array failed validation: {err}");
        })
    }

    /// Returns true if the array was validated on construction or produced by the encoder.
    #[must_use]
    pub fn is_trusted(&self) -> bool {
        self.trusted
    }

    /// Return the logical length `L`, the number of logical values.
    #[must_use]
    pub fn logical_length(&self) -> usize {
        self.run_ends.total_logical_length()
    }

    /// Return the number of runs `m`.
    #[must_use]
    pub fn run_count(&self) -> usize {
        self.run_ends.len()
    }

    /// Return the run ends.
    #[must_use]
    pub fn run_ends(&self) -> &RunEndBuffer {
        &self.run_ends
    }

    /// Return the run values.
    #[must_use]
    pub fn values(&self) -> &ValueBuffer {
        &self.values
    }

    /// Return the logical type of the values.
    #[must_use]
    pub fn logical_type(&self) -> LogicalType {
        self.values.logical_type()
    }

    /// Return the run end width.
    #[must_use]
    pub fn run_end_width(&self) -> RunEndWidth {
        self.run_ends.width()
    }

    /// Consume the array and return its run ends and values.
    #[must_use]
    pub fn into_parts(self) -> (RunEndBuffer, ValueBuffer) {
        (self.run_ends, self.values)
    }

    /// Return the value at logical `position`, or [`None`] if the value is null.
    ///
    /// # Errors
    /// Returns [`ReeError::IndexOutOfRange`] if `position` is not less than the logical length.
    /// Returns a validation error if the array is untrusted and invalid.
    pub fn value_at(&self, position: usize) -> Result<Option<&Value>, ReeError> {
        self.ensure_valid()?;
        let logical_length = self.logical_length();
        if position >= logical_length {
            return Err(ReeError::index_out_of_range(position, 1, logical_length));
        }
        let run_index = if self.run_count() <= global_config().point_access_linear_scan_max_runs() {
            self.run_ends
                .as_slice()
                .iter()
                .position(|&end| to_position(end) > position)
        } else {
            self.run_ends.run_index_of(position)
        }
        .ok_or_else(|| ReeError::index_out_of_range(position, 1, logical_length))?;
        Ok(self.values.value_at(run_index).flatten())
    }

    /// Iterate over the runs as `(logical range, value)` pairs.
    ///
    /// The runs of an invalid untrusted array are unspecified.
    pub fn iter_runs(&self) -> impl Iterator<Item = (Range<usize>, Option<&Value>)> {
        let mut start = 0;
        std::iter::zip(self.run_ends.as_slice(), self.values.iter()).map(move |(&end, value)| {
            let end = to_position(end);
            let range = start..end.max(start);
            start = range.end;
            (range, value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::global_config_mut;
    use crate::error::InvalidRunEndsError;

    fn scenario_1() -> ReeArray {
        ReeArray::try_new(
            RunEndBuffer::build(RunEndWidth::Int32, 10, [4, 6, 10]).unwrap(),
            ValueBuffer::from_values([1i64, 2, 3]),
        )
        .unwrap()
    }

    #[test]
    fn ree_array_try_new() {
        let array = scenario_1();
        assert!(array.is_trusted());
        assert_eq!(array.logical_length(), 10);
        assert_eq!(array.run_count(), 3);
        assert_eq!(array.logical_type(), LogicalType::Int64);
        assert_eq!(array.run_end_width(), RunEndWidth::Int32);
        assert!(array.validate().is_ok());

        assert_eq!(
            ReeArray::try_new(
                RunEndBuffer::build(RunEndWidth::Int32, 10, [4, 6, 10]).unwrap(),
                ValueBuffer::from_values([1i64, 2]),
            ),
            Err(ReeError::LengthMismatch {
                run_ends: 3,
                values: 2
            })
        );
    }

    #[test]
    fn ree_array_from_parts_untrusted() {
        let array = ReeArray::from_parts(
            RunEndBuffer::from_raw(RunEndWidth::Int32, vec![5, 3, 10]),
            ValueBuffer::from_values([1i64, 2, 3]),
        );
        assert!(!array.is_trusted());
        let expected = Err(ReeError::InvalidRunEnds(
            InvalidRunEndsError::NotStrictlyIncreasing {
                index: 1,
                previous: 5,
                value: 3,
            },
        ));
        assert_eq!(array.validate(), expected);
        // Validation is idempotent
        assert_eq!(array.validate(), expected);
        assert_eq!(array.value_at(0).map(|_| ()), expected);

        // A valid untrusted array behaves like a trusted one
        let array = ReeArray::from_parts(
            RunEndBuffer::from_raw(RunEndWidth::Int32, vec![4, 6, 10]),
            ValueBuffer::from_values([1i64, 2, 3]),
        );
        assert!(array.validate().is_ok());
        assert_eq!(array, scenario_1());
        assert_eq!(array.value_at(5).unwrap(), Some(&Value::from(2i64)));
    }

    #[test]
    fn ree_array_value_at() {
        let array = scenario_1();
        let expected = [1i64, 1, 1, 1, 2, 2, 3, 3, 3, 3];
        for (position, expected) in expected.iter().enumerate() {
            assert_eq!(
                array.value_at(position).unwrap(),
                Some(&Value::from(*expected))
            );
        }
        assert_eq!(
            array.value_at(10),
            Err(ReeError::IndexOutOfRange {
                offset: 10,
                length: 1,
                logical_length: 10
            })
        );

        let with_null = ReeArray::try_new(
            RunEndBuffer::build(RunEndWidth::Int16, 3, [1, 3]).unwrap(),
            ValueBuffer::from_options([Some(1.0f64), None]),
        )
        .unwrap();
        assert_eq!(with_null.value_at(2).unwrap(), None);
    }

    #[test]
    #[serial_test::serial]
    fn ree_array_value_at_binary_search() {
        let linear_max = global_config().point_access_linear_scan_max_runs();
        global_config_mut().set_point_access_linear_scan_max_runs(0);
        let array = scenario_1();
        assert_eq!(array.value_at(0).unwrap(), Some(&Value::from(1i64)));
        assert_eq!(array.value_at(4).unwrap(), Some(&Value::from(2i64)));
        assert_eq!(array.value_at(9).unwrap(), Some(&Value::from(3i64)));
        assert!(array.value_at(10).is_err());
        global_config_mut().set_point_access_linear_scan_max_runs(linear_max);
    }

    #[test]
    fn ree_array_iter_runs() {
        let array = scenario_1();
        let runs: Vec<_> = array.iter_runs().collect();
        assert_eq!(
            runs,
            vec![
                (0..4, Some(&Value::from(1i64))),
                (4..6, Some(&Value::from(2i64))),
                (6..10, Some(&Value::from(3i64))),
            ]
        );
        let (run_ends, values) = array.into_parts();
        assert_eq!(run_ends.as_slice(), &[4, 6, 10]);
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn ree_array_non_minimal() {
        let array = ReeArray::try_new(
            RunEndBuffer::build(RunEndWidth::Int32, 4, [2, 4]).unwrap(),
            ValueBuffer::from_values([7i8, 7]),
        )
        .unwrap();
        assert_eq!(array.decode().unwrap(), ValueBuffer::from_values([7i8; 4]));
        assert_eq!(array.slice(1, 2).unwrap().run_ends().as_slice(), &[1, 2]);
        assert_eq!(array.value_at(3).unwrap(), Some(&Value::from(7i8)));
    }

    #[test]
    fn ree_array_untrusted_rejected() {
        let cases = [
            (
                RunEndBuffer::from_raw(RunEndWidth::Int16, vec![i64::MAX]),
                ValueBuffer::from_values([1u8]),
            ),
            (
                RunEndBuffer::from_raw(RunEndWidth::Int32, vec![-5]),
                ValueBuffer::from_values([1u8]),
            ),
            (
                RunEndBuffer::new_empty(RunEndWidth::Int32),
                ValueBuffer::from_values([1u8]),
            ),
        ];
        for (run_ends, values) in cases {
            let array = ReeArray::from_parts(run_ends, values);
            let expected = array.validate();
            assert!(expected.is_err());
            assert_eq!(array.decode().map(|_| ()), expected);
            assert_eq!(array.slice(0, 0).map(|_| ()), expected);
            assert_eq!(array.value_at(0).map(|_| ()), expected);
        }
    }

    #[test]
    fn ree_array_empty() {
        let array = ReeArray::new_empty(RunEndWidth::Int64, LogicalType::String);
        assert_eq!(array.logical_length(), 0);
        assert_eq!(array.run_count(), 0);
        assert!(array.validate().is_ok());
        assert!(array.value_at(0).is_err());
        assert_eq!(array.iter_runs().count(), 0);
    }
}
