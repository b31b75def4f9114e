//! Run-end encoded array errors.

use derive_more::derive::Display;
use thiserror::Error;

use crate::RunEndWidth;
use crate::data_type::ValueBufferError;

/// Run ends that violate the run-end encoding invariants.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum InvalidRunEndsError {
    /// There are no run ends but the logical length is non-zero.
    #[display("run ends are empty but the logical length is {logical_length}")]
    Empty {
        /// The expected logical length.
        logical_length: usize,
    },
    /// A run end is zero or negative.
    #[display("run end {value} at index {index} is not positive")]
    NonPositive {
        /// The index of the run end.
        index: usize,
        /// The run end.
        value: i64,
    },
    /// A run end does not exceed its predecessor.
    #[display("run end {value} at index {index} does not exceed the previous run end {previous}")]
    NotStrictlyIncreasing {
        /// The index of the run end.
        index: usize,
        /// The previous run end.
        previous: i64,
        /// The run end.
        value: i64,
    },
    /// The final run end is not the logical length.
    #[display("final run end {last} does not match the logical length {logical_length}")]
    LengthMismatch {
        /// The final run end.
        last: i64,
        /// The expected logical length.
        logical_length: usize,
    },
}

/// A run end width that cannot represent a logical length.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("run end width {width} cannot represent logical length {logical_length}")]
pub struct UnsupportedRunEndWidthError {
    width: RunEndWidth,
    logical_length: u64,
}

impl UnsupportedRunEndWidthError {
    /// Create a new [`UnsupportedRunEndWidthError`].
    #[must_use]
    pub fn new(width: RunEndWidth, logical_length: u64) -> Self {
        Self {
            width,
            logical_length,
        }
    }

    /// Return the run end width.
    #[must_use]
    pub fn width(&self) -> RunEndWidth {
        self.width
    }

    /// Return the logical length that could not be represented.
    #[must_use]
    pub fn logical_length(&self) -> u64 {
        self.logical_length
    }
}

/// An error indicating the length of run end bytes is not a multiple of the run end width.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("Invalid run end bytes len {len}, expected a multiple of {width} ({} bytes)", width.size())]
pub struct InvalidBytesLengthError {
    len: usize,
    width: RunEndWidth,
}

impl InvalidBytesLengthError {
    /// Create a new [`InvalidBytesLengthError`].
    #[must_use]
    pub fn new(len: usize, width: RunEndWidth) -> Self {
        Self { len, width }
    }
}

/// Run-end encoded array errors.
///
/// The codec never repairs data: every violated invariant is reported to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ReeError {
    /// Invalid run ends.
    #[error(transparent)]
    InvalidRunEnds(#[from] InvalidRunEndsError),
    /// The number of run ends and values differ.
    #[error("run end count {run_ends} does not match value count {values}")]
    LengthMismatch {
        /// The number of run ends.
        run_ends: usize,
        /// The number of values.
        values: usize,
    },
    /// A logical range or position is beyond the logical length.
    #[error("range {offset}..{offset}+{length} is out of range for logical length {logical_length}")]
    IndexOutOfRange {
        /// The start of the range.
        offset: usize,
        /// The length of the range.
        length: usize,
        /// The logical length of the array.
        logical_length: usize,
    },
    /// The run end width cannot represent the logical length.
    #[error(transparent)]
    UnsupportedRunEndWidth(#[from] UnsupportedRunEndWidthError),
    /// Run end bytes have an invalid length.
    #[error(transparent)]
    InvalidBytesLength(#[from] InvalidBytesLengthError),
    /// A value buffer error.
    #[error(transparent)]
    ValueBuffer(#[from] ValueBufferError),
    /// Metadata does not describe the array.
    #[error("metadata mismatch: {_0}")]
    MetadataMismatch(String),
}

impl ReeError {
    pub(crate) fn index_out_of_range(offset: usize, length: usize, logical_length: usize) -> Self {
        Self::IndexOutOfRange {
            offset,
            length,
            logical_length,
        }
    }
}
