//! Block catalog types and lookup operations.
//!
//! This module models the blocks manifest document served by the workflows
//! endpoint. `model` mirrors the wire shape; `query` answers the two lookup
//! questions callers ask of it (block description, properties of a kind).
//! The client in `crate::client` owns fetching and replacement.

pub mod identity;
pub mod model;
pub mod query;

pub use identity::BlockId;
pub use model::{
    BlockEntry, BlockSchema, Catalog, KindTag, KindedAlternative, OutputDescriptor,
    PropertyAlternative, PropertyDescriptor, TypeAlternative, parse_catalog,
};
