//! Entity storage: the singleton player body and fixed-capacity pools
//!
//! Pools are structure-of-arrays: one array per attribute, a fixed
//! capacity chosen at startup, and an active flag per slot. Slots are
//! recycled, never grown. An inactive slot's position and
//! velocity are stale and must not be read until the slot is respawned.

use glam::Vec2;

use crate::Turns;

/// The singleton controllable body of a game (ship, bird, paddle, ball).
#[derive(Debug, Clone, Copy, Default)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in turns.
    pub angle: Turns,
}

impl Player {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
        }
    }
}

/// Fixed-capacity pool of one entity class, stored as parallel arrays.
///
/// Indexing past the capacity is a programming error and panics; there is
/// no dynamic growth.
#[derive(Debug, Clone)]
pub struct Pool {
    pub pos: Vec<Vec2>,
    pub vel: Vec<Vec2>,
    /// Heading in turns.
    pub angle: Vec<Turns>,
    /// Remaining lifetime in seconds; only meaningful for aged classes.
    pub age: Vec<f32>,
    pub active: Vec<bool>,
}

impl Pool {
    /// All slots start inactive with zeroed state.
    pub fn new(capacity: usize) -> Self {
        Self {
            pos: vec![Vec2::ZERO; capacity],
            vel: vec![Vec2::ZERO; capacity],
            angle: vec![0.0; capacity],
            age: vec![0.0; capacity],
            active: vec![false; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.active.len()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active[index]
    }

    pub fn deactivate(&mut self, index: usize) {
        self.active[index] = false;
    }

    /// Indices of the currently active slots, in ascending order.
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(i, &a)| if a { Some(i) } else { None })
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    /// Claim the slot with the minimum remaining age.
    ///
    /// This is the pool's only spawn policy: the oldest slot is recycled
    /// first, whether or not it is still active. If even the oldest slot has
    /// lifetime left, the spawn is refused - callers rate-limit with a
    /// [`SpawnTimer`](crate::sim::SpawnTimer) so refusal is the uncommon
    /// path, not an error.
    pub fn spawn(&mut self) -> Option<usize> {
        // ties go to the lowest index
        let mut best: Option<(usize, f32)> = None;
        for (i, &age) in self.age.iter().enumerate() {
            if best.is_none_or(|(_, b)| age < b) {
                best = Some((i, age));
            }
        }
        let (index, min_age) = best?;
        if min_age > 0.0 {
            return None;
        }
        self.active[index] = true;
        Some(index)
    }
}
