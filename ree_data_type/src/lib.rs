//! The logical type and value API for the [`ree`](https://docs.rs/ree/latest/ree/index.html) crate.
//!
//! A run-end encoded array stores one value per run.
//! This crate defines what those values are:
//!  - [`LogicalType`]: the closed set of logical types a value buffer can hold,
//!  - [`Value`]: a tagged value of one of those types, and
//!  - [`ValueBuffer`]: an ordered sequence of optionally null values of a single logical type.
//!
//! ## Licence
//! `ree_data_type` is licensed under either of
//!  - the Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> or
//!  - the MIT license <http://opensource.org/licenses/MIT>, at your option.
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.

mod logical_type;
mod value;
mod value_buffer;

pub use logical_type::LogicalType;
pub use value::{NativeValue, Value};
pub use value_buffer::{ValueBuffer, ValueBufferError};

pub use half::f16;
