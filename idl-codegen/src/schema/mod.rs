//! Member traversal.
//!
//! - [`flatten_fields`] - Leaf fields of a struct or resource, embedding inlined
//! - [`for_each_field`] - Visitor form of the same walk
//! - [`FlatField`] - A leaf field paired with its property options

mod fields;

pub use fields::{FlatField, flatten_fields, for_each_field};
