//! Category → room-pool lookup.
//!
//! Room assignment is advisory labeling only: a pool of rooms is looked
//! up by subject code or club category and one room is drawn uniformly
//! at random. Rooms never participate in conflict detection and a lookup
//! always produces a value (unrecognized keys fall back to the default
//! pool), so room selection can never block scheduling.

use rand::prelude::IndexedRandom;
use rand::Rng;
use std::collections::HashMap;

/// Room pools keyed by subject code or club category.
///
/// Construct via [`RoomTable::class_defaults`] / [`RoomTable::club_defaults`]
/// and override per deployment with [`RoomTable::with_pool`].
#[derive(Debug, Clone)]
pub struct RoomTable {
    pools: HashMap<String, Vec<String>>,
    default_pool: Vec<String>,
}

impl RoomTable {
    /// Creates an empty table with the given fallback pool.
    pub fn new(default_pool: Vec<String>) -> Self {
        Self {
            pools: HashMap::new(),
            default_pool,
        }
    }

    /// Standard pools for class subjects, keyed by subject code.
    ///
    /// Unrecognized codes fall back to `P.801`.
    pub fn class_defaults() -> Self {
        Self::new(vec!["P.801".into()])
            .with_pool("MATH", ["P.101", "P.102"])
            .with_pool("LITERATURE", ["P.201", "P.202"])
            .with_pool("ENGLISH", ["P.301", "P.302"])
            .with_pool("PHYSICS", ["LAB.201", "LAB.202"])
            .with_pool("CHEMISTRY", ["LAB.301", "LAB.302"])
            .with_pool("BIOLOGY", ["LAB.401"])
            .with_pool("COMPUTER_SCIENCE", ["LAB.101", "LAB.102"])
            .with_pool("PHYSICAL_EDUCATION", ["GYM.A", "FIELD.1"])
    }

    /// Standard pools for clubs, keyed by category.
    pub fn club_defaults() -> Self {
        Self::new(vec!["P.901".into(), "P.902".into()])
            .with_pool("SPORTS", ["GYM.A", "GYM.B", "FIELD.1"])
            .with_pool("ARTS", ["ART.101", "ART.102"])
            .with_pool("MUSIC", ["MUS.101"])
            .with_pool("TECHNOLOGY", ["LAB.101", "LAB.102"])
            .with_pool("ACADEMIC", ["P.901", "P.902"])
            .with_pool("CULTURAL", ["HALL.A"])
    }

    /// Sets (or replaces) the pool for a key.
    pub fn with_pool<I, S>(mut self, key: impl Into<String>, rooms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pools
            .insert(key.into(), rooms.into_iter().map(Into::into).collect());
        self
    }

    /// Picks a room uniformly at random from the pool for `key`,
    /// falling back to the default pool for unrecognized keys.
    pub fn pick<R: Rng>(&self, key: &str, rng: &mut R) -> String {
        let pool = match self.pools.get(key) {
            Some(pool) if !pool.is_empty() => pool,
            _ => &self.default_pool,
        };
        pool.choose(rng)
            .cloned()
            .unwrap_or_else(|| "P.801".to_string())
    }

    /// The configured pool for a key, if any.
    pub fn pool(&self, key: &str) -> Option<&[String]> {
        self.pools.get(key).map(|p| p.as_slice())
    }
}
