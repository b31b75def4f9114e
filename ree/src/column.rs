//! The [`Column`] capability shared by run-end encoded and plain columns.
//!
//! A table layer can hold columns of either encoding behind `Box<dyn Column>` and access them positionally without knowing how they are stored.

use crate::ReeArray;
use crate::data_type::{LogicalType, Value, ValueBuffer};
use crate::error::ReeError;

/// A column of optionally null values of a single [`LogicalType`].
pub trait Column: Send + Sync {
    /// Return the number of logical values.
    fn len(&self) -> usize;

    /// Returns true if the column has no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the logical type of the values.
    fn logical_type(&self) -> LogicalType;

    /// Return the value at `index`, or [`None`] if the value is null.
    ///
    /// # Errors
    /// Returns [`ReeError::IndexOutOfRange`] if `index` is not less than [`len`](Column::len), or an error if the column is invalid.
    fn value_at(&self, index: usize) -> Result<Option<Value>, ReeError>;

    /// Return the logical values of the column.
    ///
    /// # Errors
    /// Returns an error if the column is invalid.
    fn to_value_buffer(&self) -> Result<ValueBuffer, ReeError>;

    /// Return the values `offset..offset + length` as a new column of the same encoding.
    ///
    /// # Errors
    /// Returns [`ReeError::IndexOutOfRange`] if the range extends beyond [`len`](Column::len), or an error if the column is invalid.
    fn slice(&self, offset: usize, length: usize) -> Result<Self, ReeError>
    where
        Self: Sized;
}

impl Column for ReeArray {
    fn len(&self) -> usize {
        self.logical_length()
    }

    fn logical_type(&self) -> LogicalType {
        ReeArray::logical_type(self)
    }

    fn value_at(&self, index: usize) -> Result<Option<Value>, ReeError> {
        Ok(ReeArray::value_at(self, index)?.cloned())
    }

    fn to_value_buffer(&self) -> Result<ValueBuffer, ReeError> {
        self.decode()
    }

    fn slice(&self, offset: usize, length: usize) -> Result<Self, ReeError> {
        ReeArray::slice(self, offset, length)
    }
}

impl Column for ValueBuffer {
    fn len(&self) -> usize {
        ValueBuffer::len(self)
    }

    fn logical_type(&self) -> LogicalType {
        ValueBuffer::logical_type(self)
    }

    fn value_at(&self, index: usize) -> Result<Option<Value>, ReeError> {
        ValueBuffer::value_at(self, index)
            .map(|value| value.cloned())
            .ok_or_else(|| ReeError::index_out_of_range(index, 1, ValueBuffer::len(self)))
    }

    fn to_value_buffer(&self) -> Result<ValueBuffer, ReeError> {
        Ok(self.clone())
    }

    fn slice(&self, offset: usize, length: usize) -> Result<Self, ReeError> {
        let len = ValueBuffer::len(self);
        ValueBuffer::slice(self, offset, length)
            .map_err(|_| ReeError::index_out_of_range(offset, length, len))
    }
}
