use thiserror::Error;

use crate::{LogicalType, NativeValue, Value};

/// A [`ValueBuffer`] error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValueBufferError {
    /// A value does not have the logical type of the buffer.
    #[error("value {value} at index {index} is not compatible with logical type {logical_type}")]
    IncompatibleValue {
        /// The index of the value.
        index: usize,
        /// The offending value.
        value: Value,
        /// The logical type of the buffer.
        logical_type: LogicalType,
    },
    /// Two buffers have different logical types.
    #[error("value buffer of logical type {actual} cannot be appended to a value buffer of logical type {expected}")]
    LogicalTypeMismatch {
        /// The logical type of the buffer appended to.
        expected: LogicalType,
        /// The logical type of the appended buffer.
        actual: LogicalType,
    },
    /// A range extends beyond the end of the buffer.
    #[error("range {offset}..{offset}+{length} is out of bounds for a value buffer of length {len}")]
    OutOfBounds {
        /// The start of the range.
        offset: usize,
        /// The length of the range.
        length: usize,
        /// The length of the buffer.
        len: usize,
    },
}

/// An ordered sequence of optionally null values of a single [`LogicalType`].
///
/// In a run-end encoded array there is one entry per run.
/// A [`ValueBuffer`] also serves as the decoded (logical) form of a run-end encoded array.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ValueBuffer {
    logical_type: LogicalType,
    values: Vec<Option<Value>>,
}

impl ValueBuffer {
    /// Create a new value buffer of `logical_type`.
    ///
    /// # Errors
    /// Returns [`ValueBufferError::IncompatibleValue`] if a non-null value is not of `logical_type`.
    pub fn build(
        values: impl Into<Vec<Option<Value>>>,
        logical_type: LogicalType,
    ) -> Result<Self, ValueBufferError> {
        let values = values.into();
        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .filter_map(|(index, value)| value.as_ref().map(|value| (index, value)))
            .find(|(_, value)| value.logical_type() != logical_type)
        {
            return Err(ValueBufferError::IncompatibleValue {
                index,
                value: value.clone(),
                logical_type,
            });
        }
        Ok(Self {
            logical_type,
            values,
        })
    }

    /// Create an empty value buffer of `logical_type`.
    #[must_use]
    pub fn new_empty(logical_type: LogicalType) -> Self {
        Self {
            logical_type,
            values: Vec::new(),
        }
    }

    /// Create a value buffer from optionally null native values.
    ///
    /// The logical type is that of `T`.
    #[must_use]
    pub fn from_options<T: NativeValue>(values: impl IntoIterator<Item = Option<T>>) -> Self {
        Self {
            logical_type: T::LOGICAL_TYPE,
            values: values.into_iter().map(|value| value.map(Into::into)).collect(),
        }
    }

    /// Create a value buffer from non-null native values.
    ///
    /// The logical type is that of `T`.
    #[must_use]
    pub fn from_values<T: NativeValue>(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            logical_type: T::LOGICAL_TYPE,
            values: values.into_iter().map(|value| Some(value.into())).collect(),
        }
    }

    /// Return the logical type of the values.
    #[must_use]
    pub const fn logical_type(&self) -> LogicalType {
        self.logical_type
    }

    /// Return the number of values (including nulls).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the buffer holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of null values.
    #[must_use]
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_none()).count()
    }

    /// Return the value at `index`.
    ///
    /// The outer [`Option`] is [`None`] if `index` is out of bounds, the inner [`Option`] is [`None`] if the value is null.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<Option<&Value>> {
        self.values.get(index).map(Option::as_ref)
    }

    /// Iterate over the values.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Option<&Value>> + Clone {
        self.values.iter().map(Option::as_ref)
    }

    /// Return the values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<Value>] {
        &self.values
    }

    /// Return the values of the range `offset..offset + length` as a new buffer.
    ///
    /// # Errors
    /// Returns [`ValueBufferError::OutOfBounds`] if the range extends beyond the end of the buffer.
    pub fn slice(&self, offset: usize, length: usize) -> Result<Self, ValueBufferError> {
        let out_of_bounds = || ValueBufferError::OutOfBounds {
            offset,
            length,
            len: self.len(),
        };
        let end = offset.checked_add(length).ok_or_else(out_of_bounds)?;
        let values = self.values.get(offset..end).ok_or_else(out_of_bounds)?;
        Ok(Self {
            logical_type: self.logical_type,
            values: values.to_vec(),
        })
    }

    /// Return a new buffer with each value repeated by the corresponding entry of `counts`.
    ///
    /// Values beyond the end of `counts` are dropped.
    /// The logical type is preserved, so the values are not checked again.
    #[must_use]
    pub fn repeat_each(&self, counts: impl IntoIterator<Item = usize>) -> Self {
        Self {
            logical_type: self.logical_type,
            values: self
                .values
                .iter()
                .zip(counts)
                .flat_map(|(value, count)| std::iter::repeat_n(value.clone(), count))
                .collect(),
        }
    }

    /// Move the values of `other` to the end of the buffer.
    ///
    /// # Errors
    /// Returns [`ValueBufferError::LogicalTypeMismatch`] if `other` has a different logical type.
    pub fn append(&mut self, mut other: Self) -> Result<(), ValueBufferError> {
        if other.logical_type != self.logical_type {
            return Err(ValueBufferError::LogicalTypeMismatch {
                expected: self.logical_type,
                actual: other.logical_type,
            });
        }
        self.values.append(&mut other.values);
        Ok(())
    }

    /// Consume the buffer and return its values.
    #[must_use]
    pub fn into_values(self) -> Vec<Option<Value>> {
        self.values
    }
}

impl<T: NativeValue> From<Vec<Option<T>>> for ValueBuffer {
    fn from(values: Vec<Option<T>>) -> Self {
        Self::from_options(values)
    }
}

impl core::fmt::Display for ValueBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            match value {
                Some(value) => write!(f, "{value}")?,
                None => write!(f, "null")?,
            }
        }
        write!(f, "]")
    }
}
