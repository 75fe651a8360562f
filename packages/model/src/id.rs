use crc32fast::Hasher;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable section identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Derive a short seed from an arbitrary key (session id, document id) using CRC32
pub fn seed_for(key: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential section id generator.
///
/// Ids are `{seed}-{n}`. The counter only moves forward, so an id is never
/// issued twice by the same generator, even after the section it named was
/// deleted and the deletion undone.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u64,
}

impl IdGenerator {
    pub fn new(key: &str) -> Self {
        Self::from_seed(seed_for(key))
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> SectionId {
        self.count += 1;
        SectionId(format!("{}-{}", self.seed, self.count))
    }

    /// Move the counter past an id that came from outside (storage, templates)
    pub fn observe(&mut self, id: &SectionId) {
        let Some(suffix) = id
            .as_str()
            .strip_prefix(self.seed.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
        else {
            return;
        };

        if let Ok(n) = suffix.parse::<u64>() {
            self.count = self.count.max(n);
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new("folio")
    }
}
