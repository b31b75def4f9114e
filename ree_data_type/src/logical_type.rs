use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The logical type of the values in a [`ValueBuffer`](crate::ValueBuffer).
///
/// The serialised name of each type matches its [`Display`] representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum LogicalType {
    /// `bool` Boolean.
    #[display("bool")]
    #[serde(rename = "bool")]
    Boolean,
    /// `int8` Integer in `[-2^7, 2^7-1]`.
    #[display("int8")]
    #[serde(rename = "int8")]
    Int8,
    /// `int16` Integer in `[-2^15, 2^15-1]`.
    #[display("int16")]
    #[serde(rename = "int16")]
    Int16,
    /// `int32` Integer in `[-2^31, 2^31-1]`.
    #[display("int32")]
    #[serde(rename = "int32")]
    Int32,
    /// `int64` Integer in `[-2^63, 2^63-1]`.
    #[display("int64")]
    #[serde(rename = "int64")]
    Int64,
    /// `uint8` Integer in `[0, 2^8-1]`.
    #[display("uint8")]
    #[serde(rename = "uint8")]
    UInt8,
    /// `uint16` Integer in `[0, 2^16-1]`.
    #[display("uint16")]
    #[serde(rename = "uint16")]
    UInt16,
    /// `uint32` Integer in `[0, 2^32-1]`.
    #[display("uint32")]
    #[serde(rename = "uint32")]
    UInt32,
    /// `uint64` Integer in `[0, 2^64-1]`.
    #[display("uint64")]
    #[serde(rename = "uint64")]
    UInt64,
    /// `float16` IEEE 754 half-precision floating point.
    #[display("float16")]
    #[serde(rename = "float16")]
    Float16,
    /// `float32` IEEE 754 single-precision floating point.
    #[display("float32")]
    #[serde(rename = "float32")]
    Float32,
    /// `float64` IEEE 754 double-precision floating point.
    #[display("float64")]
    #[serde(rename = "float64")]
    Float64,
    /// `string` UTF-8 encoded string.
    #[display("string")]
    #[serde(rename = "string")]
    String,
}

impl LogicalType {
    /// Returns the name of the logical type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt8 => "uint8",
            Self::UInt16 => "uint16",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Float16 => "float16",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
        }
    }

    /// Returns the size in bytes of a value of this type, or [`None`] if it is variable sized.
    #[must_use]
    pub const fn fixed_size(&self) -> Option<usize> {
        match self {
            Self::Boolean | Self::Int8 | Self::UInt8 => Some(1),
            Self::Int16 | Self::UInt16 | Self::Float16 => Some(2),
            Self::Int32 | Self::UInt32 | Self::Float32 => Some(4),
            Self::Int64 | Self::UInt64 | Self::Float64 => Some(8),
            Self::String => None,
        }
    }

    /// Returns true if this is a signed or unsigned integer type.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::UInt8
                | Self::UInt16
                | Self::UInt32
                | Self::UInt64
        )
    }

    /// Returns true if this is a floating point type.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float16 | Self::Float32 | Self::Float64)
    }
}
