//! In-memory JSON tree
//!
//! A tree is a map from string keys to JSON values. Nested values are
//! addressed by key paths, read with [`get`] and written with [`set`] or
//! [`set_with_policy`].

pub mod access;
pub mod mutate;
pub mod path;
pub mod policy;
pub mod value;

pub use access::{get, get_ref};
pub use mutate::{set, set_with_policy};
pub use path::KeyPath;
pub use policy::MergePolicy;
pub use value::{type_name, Leaf, Tree};
