//! Element identifiers.
//!
//! An element's id is derived from its structural path in the IR (`root.0.column.0...`),
//! so the same tree always yields the same ids. The id is the first 8 hex characters of
//! the path's SHA-256 digest.

use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Length of an element identifier in hex characters.
pub const ID_LEN: usize = 8;

/// The 8-character id of `path`.
pub fn make_id(path: &str) -> String {
    let digest = Sha256::digest(path.as_bytes());
    digest
        .iter()
        .take(ID_LEN / 2)
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

/// Hands out ids for one export, never the same id twice.
///
/// On a collision the path is re-hashed as `path#1`, `path#2`, ... until a fresh id
/// comes up. Allocation order is the traversal order, so the result is still
/// deterministic.
#[derive(Debug, Default)]
pub struct IdAllocator {
    issued: HashSet<String>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, path: &str) -> String {
        let mut id = make_id(path);
        let mut attempt = 1;
        while !self.issued.insert(id.clone()) {
            id = make_id(&format!("{path}#{attempt}"));
            attempt += 1;
        }
        id
    }
}
