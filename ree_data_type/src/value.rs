use std::hash::{Hash, Hasher};

use derive_more::From;
use half::f16;

use crate::LogicalType;

/// A single non-null value of one of the [`LogicalType`]s.
///
/// Null is represented outside of [`Value`] as [`None`] in an `Option<Value>`.
///
/// # Equality
/// Floating point values compare by their bit pattern, not numerically.
/// `-0.0` and `0.0` are different values, and two NaNs are equal if and only if their payloads are identical.
/// This keeps run merging lossless: decoding an encoded sequence reproduces every input bit.
#[derive(Clone, Debug, From)]
pub enum Value {
    /// A `bool` value.
    Boolean(bool),
    /// An `int8` value.
    Int8(i8),
    /// An `int16` value.
    Int16(i16),
    /// An `int32` value.
    Int32(i32),
    /// An `int64` value.
    Int64(i64),
    /// A `uint8` value.
    UInt8(u8),
    /// A `uint16` value.
    UInt16(u16),
    /// A `uint32` value.
    UInt32(u32),
    /// A `uint64` value.
    UInt64(u64),
    /// A `float16` value.
    Float16(f16),
    /// A `float32` value.
    Float32(f32),
    /// A `float64` value.
    Float64(f64),
    /// A `string` value.
    String(String),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl Value {
    /// Returns the logical type of the value.
    #[must_use]
    pub const fn logical_type(&self) -> LogicalType {
        match self {
            Self::Boolean(_) => LogicalType::Boolean,
            Self::Int8(_) => LogicalType::Int8,
            Self::Int16(_) => LogicalType::Int16,
            Self::Int32(_) => LogicalType::Int32,
            Self::Int64(_) => LogicalType::Int64,
            Self::UInt8(_) => LogicalType::UInt8,
            Self::UInt16(_) => LogicalType::UInt16,
            Self::UInt32(_) => LogicalType::UInt32,
            Self::UInt64(_) => LogicalType::UInt64,
            Self::Float16(_) => LogicalType::Float16,
            Self::Float32(_) => LogicalType::Float32,
            Self::Float64(_) => LogicalType::Float64,
            Self::String(_) => LogicalType::String,
        }
    }

    /// Returns the string if this is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(value) = self {
            Some(value)
        } else {
            None
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Int8(a), Self::Int8(b)) => a == b,
            (Self::Int16(a), Self::Int16(b)) => a == b,
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::UInt8(a), Self::UInt8(b)) => a == b,
            (Self::UInt16(a), Self::UInt16(b)) => a == b,
            (Self::UInt32(a), Self::UInt32(b)) => a == b,
            (Self::UInt64(a), Self::UInt64(b)) => a == b,
            (Self::Float16(a), Self::Float16(b)) => a.to_bits() == b.to_bits(),
            (Self::Float32(a), Self::Float32(b)) => a.to_bits() == b.to_bits(),
            (Self::Float64(a), Self::Float64(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Boolean(v) => v.hash(state),
            Self::Int8(v) => v.hash(state),
            Self::Int16(v) => v.hash(state),
            Self::Int32(v) => v.hash(state),
            Self::Int64(v) => v.hash(state),
            Self::UInt8(v) => v.hash(state),
            Self::UInt16(v) => v.hash(state),
            Self::UInt32(v) => v.hash(state),
            Self::UInt64(v) => v.hash(state),
            Self::Float16(v) => v.to_bits().hash(state),
            Self::Float32(v) => v.to_bits().hash(state),
            Self::Float64(v) => v.to_bits().hash(state),
            Self::String(v) => v.hash(state),
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Int8(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::UInt8(v) => write!(f, "{v}"),
            Self::UInt16(v) => write!(f, "{v}"),
            Self::UInt32(v) => write!(f, "{v}"),
            Self::UInt64(v) => write!(f, "{v}"),
            Self::Float16(v) => write!(f, "{v:?}"),
            Self::Float32(v) => write!(f, "{v:?}"),
            Self::Float64(v) => write!(f, "{v:?}"),
            Self::String(v) => write!(f, "{v:?}"),
        }
    }
}

/// A native Rust type that maps onto exactly one [`LogicalType`].
pub trait NativeValue: Into<Value> {
    /// The logical type of values of this native type.
    const LOGICAL_TYPE: LogicalType;
}

macro_rules! impl_native_value {
    ($variant:ident, $native:ident) => {
        impl NativeValue for $native {
            const LOGICAL_TYPE: LogicalType = LogicalType::$variant;
        }

        paste::paste! {
            impl Value {
                #[doc = concat!("Returns the value as a `", stringify!($native), "` if it is a [`Value::", stringify!($variant), "`].")]
                #[must_use]
                pub fn [<as_ $native>](&self) -> Option<$native> {
                    if let Self::$variant(value) = self {
                        Some(*value)
                    } else {
                        None
                    }
                }
            }
        }
    };
}

impl_native_value!(Boolean, bool);
impl_native_value!(Int8, i8);
impl_native_value!(Int16, i16);
impl_native_value!(Int32, i32);
impl_native_value!(Int64, i64);
impl_native_value!(UInt8, u8);
impl_native_value!(UInt16, u16);
impl_native_value!(UInt32, u32);
impl_native_value!(UInt64, u64);
impl_native_value!(Float16, f16);
impl_native_value!(Float32, f32);
impl_native_value!(Float64, f64);

impl NativeValue for String {
    const LOGICAL_TYPE: LogicalType = LogicalType::String;
}

impl NativeValue for &str {
    const LOGICAL_TYPE: LogicalType = LogicalType::String;
}
