//! Raw run-end encoded parts as stored by a binary container.
//!
//! A container stores the run ends of a run-end encoded column as a little-endian integer buffer alongside a child values array.
//! [`RawReeParts`] is that layout, and converting it to a [`ReeArray`] yields an untrusted array.

use crate::data_type::ValueBuffer;
use crate::error::ReeError;
use crate::{ReeArray, RunEndBuffer, RunEndWidth};

/// The parts of a run-end encoded array as read from, or written to, a binary container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawReeParts {
    /// The run end width.
    pub run_end_width: RunEndWidth,
    /// The run ends as little-endian integers of `run_end_width`.
    pub run_ends: Vec<u8>,
    /// The run values.
    pub values: ValueBuffer,
}

impl RawReeParts {
    /// Convert the parts into a validated, trusted run-end encoded array.
    ///
    /// # Errors
    /// Returns [`ReeError::InvalidBytesLength`] if the run end bytes are malformed, or the first violated invariant of the parts.
    pub fn into_validated(self) -> Result<ReeArray, ReeError> {
        let (run_ends, values) = ReeArray::try_from(self)?.into_parts();
        ReeArray::try_new(run_ends, values)
    }
}

impl TryFrom<RawReeParts> for ReeArray {
    type Error = ReeError;

    /// Convert the parts into an untrusted run-end encoded array.
    ///
    /// Only the byte layout of the run ends is checked.
    fn try_from(parts: RawReeParts) -> Result<Self, Self::Error> {
        let run_ends = RunEndBuffer::from_le_bytes(parts.run_end_width, &parts.run_ends)?;
        Ok(Self::from_parts(run_ends, parts.values))
    }
}

impl ReeArray {
    /// Return the parts of the array in their container layout.
    ///
    /// # Errors
    /// Returns [`ReeError::UnsupportedRunEndWidth`] if a run end is not representable by the run end width.
    /// This can only occur for an invalid untrusted array.
    pub fn to_raw_parts(&self) -> Result<RawReeParts, ReeError> {
        Ok(RawReeParts {
            run_end_width: self.run_end_width(),
            run_ends: self.run_ends().to_le_bytes()?,
            values: self.values().clone(),
        })
    }
}
