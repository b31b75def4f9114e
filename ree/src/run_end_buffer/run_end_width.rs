use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The signed integer width of the run ends of a run-end encoded array.
///
/// Chosen by the producer of an array and fixed for all of its run ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunEndWidth {
    /// 16-bit signed run ends.
    #[display("int16")]
    Int16,
    /// 32-bit signed run ends.
    #[display("int32")]
    Int32,
    /// 64-bit signed run ends.
    #[display("int64")]
    Int64,
}

impl RunEndWidth {
    /// All run end widths, narrowest first.
    pub const ALL: [Self; 3] = [Self::Int16, Self::Int32, Self::Int64];

    /// Returns the size in bytes of a run end.
    #[must_use]
    pub const fn size(&self) -> usize {
        match self {
            Self::Int16 => 2,
            Self::Int32 => 4,
            Self::Int64 => 8,
        }
    }

    /// Returns the largest representable run end.
    #[must_use]
    pub const fn max_value(&self) -> i64 {
        match self {
            Self::Int16 => i16::MAX as i64,
            Self::Int32 => i32::MAX as i64,
            Self::Int64 => i64::MAX,
        }
    }

    /// Returns true if a run end of `logical_length` is representable.
    #[must_use]
    pub fn can_represent(&self, logical_length: u64) -> bool {
        i64::try_from(logical_length).is_ok_and(|length| length <= self.max_value())
    }

    /// Returns the narrowest width that can represent `logical_length`.
    ///
    /// Returns [`None`] if no width can represent it.
    #[must_use]
    pub fn smallest_for(logical_length: u64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|width| width.can_represent(logical_length))
    }
}
