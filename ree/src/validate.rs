//! The run-end encoding validator.
//!
//! Pure functions checking the structural invariants of run-end encoded data.
//! Each returns the first violated invariant it finds and never repairs the data.
//!
//! [`ReeArray::validate`](crate::ReeArray::validate) runs these checks, and decoding or slicing an array constructed from untrusted parts runs them first.

use crate::data_type::ValueBuffer;
use crate::error::{InvalidRunEndsError, ReeError, UnsupportedRunEndWidthError};
use crate::{RunEndBuffer, RunEndWidth};

/// Validate that the run ends are positive and strictly increasing, and that the final run end is representable by the buffer width.
///
/// # Errors
/// Returns [`ReeError::InvalidRunEnds`] or [`ReeError::UnsupportedRunEndWidth`] on the first violation.
pub fn validate_run_ends(run_ends: &RunEndBuffer) -> Result<(), ReeError> {
    let mut previous: Option<i64> = None;
    for (index, &value) in run_ends.as_slice().iter().enumerate() {
        if value <= 0 {
            return Err(InvalidRunEndsError::NonPositive { index, value }.into());
        }
        if let Some(previous) = previous
            && value <= previous
        {
            return Err(InvalidRunEndsError::NotStrictlyIncreasing {
                index,
                previous,
                value,
            }
            .into());
        }
        previous = Some(value);
    }
    if let Some(last) = previous {
        // `last` is positive
        validate_run_end_width(run_ends.width(), last.unsigned_abs())?;
    }
    Ok(())
}

/// Validate that `width` can represent `logical_length` and that it is addressable on this platform.
///
/// # Errors
/// Returns [`UnsupportedRunEndWidthError`] if the logical length is not representable.
pub fn validate_run_end_width(
    width: RunEndWidth,
    logical_length: u64,
) -> Result<(), UnsupportedRunEndWidthError> {
    if width.can_represent(logical_length) && usize::try_from(logical_length).is_ok() {
        Ok(())
    } else {
        Err(UnsupportedRunEndWidthError::new(width, logical_length))
    }
}

/// Validate that the final run end of `run_ends` is `logical_length`.
///
/// # Errors
/// Returns [`InvalidRunEndsError::Empty`] if there are no run ends for a non-empty array, or [`InvalidRunEndsError::LengthMismatch`] if the final run end differs from `logical_length`.
pub fn validate_logical_length(
    run_ends: &RunEndBuffer,
    logical_length: usize,
) -> Result<(), InvalidRunEndsError> {
    match run_ends.as_slice().last() {
        None if logical_length == 0 => Ok(()),
        None => Err(InvalidRunEndsError::Empty { logical_length }),
        Some(&last) if i64::try_from(logical_length).is_ok_and(|length| length == last) => Ok(()),
        Some(&last) => Err(InvalidRunEndsError::LengthMismatch {
            last,
            logical_length,
        }),
    }
}

/// Validate that there is exactly one value per run.
///
/// # Errors
/// Returns [`ReeError::LengthMismatch`] if the run count and value count differ.
pub fn validate_run_counts(run_ends: &RunEndBuffer, values: &ValueBuffer) -> Result<(), ReeError> {
    if run_ends.len() == values.len() {
        Ok(())
    } else {
        Err(ReeError::LengthMismatch {
            run_ends: run_ends.len(),
            values: values.len(),
        })
    }
}

/// Validate run ends and values as the parts of a run-end encoded array.
///
/// The checks are, in order:
///  - the run count and value count are equal,
///  - the run ends are positive and strictly increasing, and
///  - the run end width can represent the logical length (the final run end).
///
/// # Errors
/// Returns the first violated invariant.
pub fn validate_parts(run_ends: &RunEndBuffer, values: &ValueBuffer) -> Result<(), ReeError> {
    validate_run_counts(run_ends, values)?;
    validate_run_ends(run_ends)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::LogicalType;

    #[test]
    fn validate_run_ends_order() {
        let run_ends = RunEndBuffer::from_raw(RunEndWidth::Int32, vec![5, 3, 10]);
        assert_eq!(
            validate_run_ends(&run_ends),
            Err(ReeError::InvalidRunEnds(
                InvalidRunEndsError::NotStrictlyIncreasing {
                    index: 1,
                    previous: 5,
                    value: 3
                }
            ))
        );

        // The first violation is reported
        let run_ends = RunEndBuffer::from_raw(RunEndWidth::Int32, vec![3, 3, -1]);
        assert_eq!(
            validate_run_ends(&run_ends),
            Err(ReeError::InvalidRunEnds(
                InvalidRunEndsError::NotStrictlyIncreasing {
                    index: 1,
                    previous: 3,
                    value: 3
                }
            ))
        );

        let run_ends = RunEndBuffer::from_raw(RunEndWidth::Int16, vec![1, 40_000]);
        assert_eq!(
            validate_run_ends(&run_ends),
            Err(ReeError::UnsupportedRunEndWidth(
                UnsupportedRunEndWidthError::new(RunEndWidth::Int16, 40_000)
            ))
        );

        assert!(validate_run_ends(&RunEndBuffer::new_empty(RunEndWidth::Int64)).is_ok());
    }

    #[test]
    fn validate_run_end_width_limits() {
        assert!(validate_run_end_width(RunEndWidth::Int16, 32_767).is_ok());
        assert!(validate_run_end_width(RunEndWidth::Int16, 32_768).is_err());
        assert!(validate_run_end_width(RunEndWidth::Int32, 32_768).is_ok());
        assert!(validate_run_end_width(RunEndWidth::Int64, u64::MAX).is_err());
    }

    #[test]
    fn validate_logical_length_cases() {
        let run_ends = RunEndBuffer::from_raw(RunEndWidth::Int32, vec![4, 6, 10]);
        assert!(validate_logical_length(&run_ends, 10).is_ok());
        assert_eq!(
            validate_logical_length(&run_ends, 11),
            Err(InvalidRunEndsError::LengthMismatch {
                last: 10,
                logical_length: 11
            })
        );
        let empty = RunEndBuffer::new_empty(RunEndWidth::Int32);
        assert!(validate_logical_length(&empty, 0).is_ok());
        assert_eq!(
            validate_logical_length(&empty, 1),
            Err(InvalidRunEndsError::Empty { logical_length: 1 })
        );
    }

    #[test]
    fn validate_parts_counts_first() {
        let run_ends = RunEndBuffer::from_raw(RunEndWidth::Int32, vec![5, 3]);
        let values = ValueBuffer::from_values([1i64]);
        assert_eq!(
            validate_parts(&run_ends, &values),
            Err(ReeError::LengthMismatch {
                run_ends: 2,
                values: 1
            })
        );
        let values = ValueBuffer::from_values([1i64, 2]);
        assert!(matches!(
            validate_parts(&run_ends, &values),
            Err(ReeError::InvalidRunEnds(_))
        ));
        let run_ends = RunEndBuffer::from_raw(RunEndWidth::Int32, vec![3, 5]);
        assert!(validate_parts(&run_ends, &values).is_ok());
        assert!(
            validate_parts(
                &RunEndBuffer::new_empty(RunEndWidth::Int32),
                &ValueBuffer::new_empty(LogicalType::Boolean)
            )
            .is_ok()
        );
    }
}
