//! Run end buffers.
//!
//! A [`RunEndBuffer`] holds the exclusive end offset of each run of a run-end encoded array.
//! In a valid buffer, the run ends are positive and strictly increasing, and the final run end is the logical length of the array.

mod run_end_width;

pub use run_end_width::RunEndWidth;

use crate::error::{InvalidBytesLengthError, ReeError, UnsupportedRunEndWidthError};
use crate::validate;

/// An ordered sequence of run ends with a fixed [`RunEndWidth`].
///
/// Run ends are held as `i64` regardless of their width.
/// The width is checked when the buffer is built or validated, and applied when it is serialised with [`to_le_bytes`](Self::to_le_bytes).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RunEndBuffer {
    width: RunEndWidth,
    ends: Vec<i64>,
}

impl RunEndBuffer {
    /// Create a new run end buffer for an array of `logical_length` elements.
    ///
    /// `transitions` are the 1-indexed positions at which the value changes (the exclusive run ends).
    ///
    /// # Errors
    /// Returns [`ReeError::InvalidRunEnds`] if
    ///  - `transitions` is empty but `logical_length` is not zero,
    ///  - a transition is not positive,
    ///  - the transitions are not strictly increasing, or
    ///  - the final transition is not `logical_length`.
    ///
    /// Returns [`ReeError::UnsupportedRunEndWidth`] if `width` cannot represent `logical_length`.
    pub fn build(
        width: RunEndWidth,
        logical_length: usize,
        transitions: impl Into<Vec<i64>>,
    ) -> Result<Self, ReeError> {
        let buffer = Self {
            width,
            ends: transitions.into(),
        };
        validate::validate_run_ends(&buffer)?;
        validate::validate_logical_length(&buffer, logical_length)?;
        validate::validate_run_end_width(width, logical_length as u64)?;
        Ok(buffer)
    }

    /// Create a new run end buffer without validating the run ends.
    ///
    /// This is intended for run ends read from an external source.
    /// Use [`validate::validate_run_ends`] or [`ReeArray::validate`](crate::ReeArray::validate) before trusting them.
    #[must_use]
    pub fn from_raw(width: RunEndWidth, ends: Vec<i64>) -> Self {
        Self { width, ends }
    }

    /// Create an empty run end buffer.
    #[must_use]
    pub fn new_empty(width: RunEndWidth) -> Self {
        Self {
            width,
            ends: Vec::new(),
        }
    }

    /// Create a new run end buffer from little-endian `bytes` of `width` sized integers.
    ///
    /// The run ends are not validated.
    ///
    /// # Errors
    /// Returns [`InvalidBytesLengthError`] if the length of `bytes` is not a multiple of the width size.
    pub fn from_le_bytes(width: RunEndWidth, bytes: &[u8]) -> Result<Self, InvalidBytesLengthError> {
        if !num::Integer::is_multiple_of(&bytes.len(), &width.size()) {
            return Err(InvalidBytesLengthError::new(bytes.len(), width));
        }
        let ends = match width {
            RunEndWidth::Int16 => bytemuck::allocation::pod_collect_to_vec::<u8, i16>(bytes)
                .into_iter()
                .map(|end| i64::from(i16::from_le(end)))
                .collect(),
            RunEndWidth::Int32 => bytemuck::allocation::pod_collect_to_vec::<u8, i32>(bytes)
                .into_iter()
                .map(|end| i64::from(i32::from_le(end)))
                .collect(),
            RunEndWidth::Int64 => bytemuck::allocation::pod_collect_to_vec::<u8, i64>(bytes)
                .into_iter()
                .map(i64::from_le)
                .collect(),
        };
        Ok(Self { width, ends })
    }

    /// Serialise the run ends as little-endian `width` sized integers.
    ///
    /// # Errors
    /// Returns [`UnsupportedRunEndWidthError`] if a run end is not representable by the width.
    pub fn to_le_bytes(&self) -> Result<Vec<u8>, UnsupportedRunEndWidthError> {
        let unsupported = |end: i64| {
            UnsupportedRunEndWidthError::new(self.width, u64::try_from(end).unwrap_or(u64::MAX))
        };
        Ok(match self.width {
            RunEndWidth::Int16 => {
                let ends = self
                    .ends
                    .iter()
                    .map(|&end| i16::try_from(end).map(i16::to_le).map_err(|_| unsupported(end)))
                    .collect::<Result<Vec<_>, _>>()?;
                bytemuck::cast_slice(ends.as_slice()).to_vec()
            }
            RunEndWidth::Int32 => {
                let ends = self
                    .ends
                    .iter()
                    .map(|&end| i32::try_from(end).map(i32::to_le).map_err(|_| unsupported(end)))
                    .collect::<Result<Vec<_>, _>>()?;
                bytemuck::cast_slice(ends.as_slice()).to_vec()
            }
            RunEndWidth::Int64 => {
                let ends: Vec<i64> = self.ends.iter().map(|end| end.to_le()).collect();
                bytemuck::cast_slice(ends.as_slice()).to_vec()
            }
        })
    }

    /// Return the run end width.
    #[must_use]
    pub const fn width(&self) -> RunEndWidth {
        self.width
    }

    /// Return the number of runs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Returns true if there are no runs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Return the exclusive end of run `index`, or [`None`] if `index` is out of bounds.
    #[must_use]
    pub fn end_of_run(&self, index: usize) -> Option<i64> {
        self.ends.get(index).copied()
    }

    /// Return the total logical length, the final run end.
    ///
    /// This is `0` if there are no runs.
    /// The result is unspecified (but does not panic) for a buffer that fails validation.
    #[must_use]
    pub fn total_logical_length(&self) -> usize {
        self.ends.last().map_or(0, |&end| to_position(end))
    }

    /// Return the run ends as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.ends
    }

    /// Return the index of the run containing logical `position`.
    ///
    /// Returns [`None`] if `position` is beyond the final run end.
    /// The run ends must be valid.
    #[must_use]
    pub fn run_index_of(&self, position: usize) -> Option<usize> {
        let position = i64::try_from(position).ok()?;
        let index = self.ends.partition_point(|&end| end <= position);
        (index < self.ends.len()).then_some(index)
    }

    /// Return the logical start of run `index`.
    pub(crate) fn start_of_run(&self, index: usize) -> usize {
        index
            .checked_sub(1)
            .map_or(0, |previous| to_position(self.ends[previous]))
    }
}

/// Convert a run end to a logical position.
///
/// Negative run ends (only present in invalid buffers) map to `0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_position(end: i64) -> usize {
    end.max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidRunEndsError;

    #[test]
    fn run_end_buffer_build() {
        let buffer = RunEndBuffer::build(RunEndWidth::Int32, 10, [4, 6, 10]).unwrap();
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.width(), RunEndWidth::Int32);
        assert_eq!(buffer.end_of_run(0), Some(4));
        assert_eq!(buffer.end_of_run(2), Some(10));
        assert_eq!(buffer.end_of_run(3), None);
        assert_eq!(buffer.total_logical_length(), 10);
        assert_eq!(buffer.as_slice(), &[4, 6, 10]);

        let empty = RunEndBuffer::build(RunEndWidth::Int16, 0, []).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.total_logical_length(), 0);
        assert_eq!(empty, RunEndBuffer::new_empty(RunEndWidth::Int16));
    }

    #[test]
    fn run_end_buffer_build_invalid() {
        assert_eq!(
            RunEndBuffer::build(RunEndWidth::Int32, 10, [5, 3, 10]),
            Err(ReeError::InvalidRunEnds(
                InvalidRunEndsError::NotStrictlyIncreasing {
                    index: 1,
                    previous: 5,
                    value: 3
                }
            ))
        );
        assert_eq!(
            RunEndBuffer::build(RunEndWidth::Int32, 10, [4, 4, 10]),
            Err(ReeError::InvalidRunEnds(
                InvalidRunEndsError::NotStrictlyIncreasing {
                    index: 1,
                    previous: 4,
                    value: 4
                }
            ))
        );
        assert_eq!(
            RunEndBuffer::build(RunEndWidth::Int32, 10, []),
            Err(ReeError::InvalidRunEnds(InvalidRunEndsError::Empty {
                logical_length: 10
            }))
        );
        assert_eq!(
            RunEndBuffer::build(RunEndWidth::Int32, 10, [0, 10]),
            Err(ReeError::InvalidRunEnds(InvalidRunEndsError::NonPositive {
                index: 0,
                value: 0
            }))
        );
        assert_eq!(
            RunEndBuffer::build(RunEndWidth::Int32, 10, [-2, 10]),
            Err(ReeError::InvalidRunEnds(InvalidRunEndsError::NonPositive {
                index: 0,
                value: -2
            }))
        );
        assert_eq!(
            RunEndBuffer::build(RunEndWidth::Int32, 10, [4, 6, 9]),
            Err(ReeError::InvalidRunEnds(
                InvalidRunEndsError::LengthMismatch {
                    last: 9,
                    logical_length: 10
                }
            ))
        );
        assert_eq!(
            RunEndBuffer::build(RunEndWidth::Int32, 0, [1]),
            Err(ReeError::InvalidRunEnds(
                InvalidRunEndsError::LengthMismatch {
                    last: 1,
                    logical_length: 0
                }
            ))
        );
        assert!(matches!(
            RunEndBuffer::build(RunEndWidth::Int16, 40_000, [40_000]),
            Err(ReeError::UnsupportedRunEndWidth(_))
        ));
    }

    #[test]
    fn run_end_buffer_run_index_of() {
        let buffer = RunEndBuffer::build(RunEndWidth::Int32, 10, [4, 6, 10]).unwrap();
        assert_eq!(buffer.run_index_of(0), Some(0));
        assert_eq!(buffer.run_index_of(3), Some(0));
        assert_eq!(buffer.run_index_of(4), Some(1));
        assert_eq!(buffer.run_index_of(5), Some(1));
        assert_eq!(buffer.run_index_of(6), Some(2));
        assert_eq!(buffer.run_index_of(9), Some(2));
        assert_eq!(buffer.run_index_of(10), None);
        assert_eq!(buffer.start_of_run(0), 0);
        assert_eq!(buffer.start_of_run(2), 6);
    }

    #[test]
    fn run_end_buffer_le_bytes() {
        let bytes: Vec<u8> = [4i16, 6, 10]
            .iter()
            .flat_map(|end| end.to_le_bytes())
            .collect();
        let buffer = RunEndBuffer::from_le_bytes(RunEndWidth::Int16, &bytes).unwrap();
        assert_eq!(buffer.as_slice(), &[4, 6, 10]);
        assert_eq!(buffer.to_le_bytes().unwrap(), bytes);

        let bytes: Vec<u8> = [5i32, 10].iter().flat_map(|end| end.to_le_bytes()).collect();
        let buffer = RunEndBuffer::from_le_bytes(RunEndWidth::Int32, &bytes).unwrap();
        assert_eq!(buffer.as_slice(), &[5, 10]);
        assert_eq!(buffer.to_le_bytes().unwrap(), bytes);

        let bytes: Vec<u8> = [10i64].iter().flat_map(|end| end.to_le_bytes()).collect();
        let buffer = RunEndBuffer::from_le_bytes(RunEndWidth::Int64, &bytes).unwrap();
        assert_eq!(buffer.as_slice(), &[10]);

        assert_eq!(
            RunEndBuffer::from_le_bytes(RunEndWidth::Int32, &[0, 0, 0, 1, 0]),
            Err(InvalidBytesLengthError::new(5, RunEndWidth::Int32))
        );

        // Unrepresentable run ends cannot be serialised
        let buffer = RunEndBuffer::from_raw(RunEndWidth::Int16, vec![70_000]);
        assert!(buffer.to_le_bytes().is_err());
    }
}
