//! Client library for remote workflow block catalogs.
//!
//! The crate fetches the blocks manifest (a JSON document listing every
//! available workflow block with its input schema and output kinds) and
//! answers two lookup questions against it: the human-readable description
//! of a block, and which of a block's input properties carry a given
//! semantic kind. `catalog` holds the wire types and query logic;
//! `client` owns retrieval and the replace-on-success catalog slot.

pub mod catalog;
pub mod client;

pub use catalog::{
    BlockEntry, BlockId, BlockSchema, Catalog, KindTag, KindedAlternative, OutputDescriptor,
    PropertyAlternative, PropertyDescriptor, TypeAlternative, parse_catalog,
};
pub use client::{
    CatalogClient, DEFAULT_MANIFEST_URL, FetchError, HttpTransport, Transport,
    manifest_url_from_env,
};
