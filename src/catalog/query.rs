//! Lookup operations over a parsed catalog.
//!
//! "Not found" outcomes are `None` or an empty vector, never an error;
//! callers decide whether absence matters. Property results come back in
//! ascending name order because the schema stores properties in a BTreeMap.

use crate::catalog::model::{BlockEntry, Catalog, PropertyAlternative, PropertyDescriptor};

impl Catalog {
    /// Resolve a block by its primary identifier.
    ///
    /// Exact, case-sensitive match; aliases are not consulted. If the
    /// document carries duplicate identifiers the first entry in document
    /// order wins.
    pub fn find_block(&self, identifier: &str) -> Option<&BlockEntry> {
        self.blocks
            .iter()
            .find(|block| block.manifest_type_identifier.as_str() == identifier)
    }
}

impl BlockEntry {
    /// Names of the input properties tagged with `kind`, in ascending order.
    pub fn input_properties_of_kind(&self, kind: &str) -> Vec<String> {
        self.block_schema
            .properties
            .iter()
            .filter(|(_, descriptor)| descriptor.has_kind(kind))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl PropertyDescriptor {
    /// True when the descriptor is tagged with `kind`, either directly or
    /// inside one of its `anyOf` alternatives. Bare type-reference
    /// alternatives carry no tags and never match.
    pub fn has_kind(&self, kind: &str) -> bool {
        if self.kind.iter().any(|tag| tag.name == kind) {
            return true;
        }
        self.any_of.iter().any(|alternative| match alternative {
            PropertyAlternative::Kinded(alt) => alt.kind.iter().any(|tag| tag.name == kind),
            PropertyAlternative::TypeOnly(_) => false,
        })
    }
}
