//! Object identifiers

use serde::{Serialize, Deserialize};
use std::fmt;

/// Lowest id handed out to a spawned object
///
/// Smaller positive numbers are free to be used as [`ProcessType`] ids, which
/// lets a single raw integer select either an object or a type.
pub const FIRST_OBJECT_ID: u64 = 65_536;

/// Object identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    id: u64,
}

impl ObjectId {
    /// Create an object id from its raw value
    pub const fn new(id: u64) -> Self {
        Self { id }
    }

    /// Get the raw object id
    pub const fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

/// Type id shared by every object spawned from the same process definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ProcessType(pub u64);
