//! Run-end encoded column metadata.
//!
//! [`ReeMetadata`] describes a run-end encoded column without its data, and is serialised as JSON:
//! ```json
//! {
//!     "run_ends": "int32",
//!     "values": "int64",
//!     "logical_length": 10,
//!     "run_count": 3
//! }
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::data_type::LogicalType;
use crate::error::ReeError;
use crate::{ReeArray, RunEndWidth};

/// Run-end encoded column metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(deny_unknown_fields)]
#[display("{}", serde_json::to_string(self).unwrap_or_default())]
pub struct ReeMetadata {
    /// The run end width.
    #[serde(rename = "run_ends")]
    pub run_end_width: RunEndWidth,
    /// The logical type of the values.
    #[serde(rename = "values")]
    pub value_type: LogicalType,
    /// The logical length.
    pub logical_length: u64,
    /// The number of runs.
    pub run_count: u64,
}

impl ReeMetadata {
    /// Check that `array` is described by the metadata.
    ///
    /// # Errors
    /// Returns [`ReeError::MetadataMismatch`] describing the first field that differs.
    pub fn check(&self, array: &ReeArray) -> Result<(), ReeError> {
        let actual = array.metadata();
        let mismatch = |field: &str, expected: &dyn std::fmt::Display, actual: &dyn std::fmt::Display| {
            Err(ReeError::MetadataMismatch(format!(
                "{field} is {actual}, expected {expected}"
            )))
        };
        if self.run_end_width != actual.run_end_width {
            mismatch("run end width", &self.run_end_width, &actual.run_end_width)
        } else if self.value_type != actual.value_type {
            mismatch("value type", &self.value_type, &actual.value_type)
        } else if self.logical_length != actual.logical_length {
            mismatch("logical length", &self.logical_length, &actual.logical_length)
        } else if self.run_count != actual.run_count {
            mismatch("run count", &self.run_count, &actual.run_count)
        } else {
            Ok(())
        }
    }
}

impl ReeArray {
    /// Return the metadata describing the array.
    #[must_use]
    pub fn metadata(&self) -> ReeMetadata {
        ReeMetadata {
            run_end_width: self.run_end_width(),
            value_type: self.logical_type(),
            logical_length: self.logical_length() as u64,
            run_count: self.run_count() as u64,
        }
    }
}
