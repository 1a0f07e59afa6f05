//! Vertical stack layout
//!
//! Keeps an ordered list of keys and lays them out top to bottom with a
//! uniform gap, overridable after any element. Elements take their natural
//! height; hidden elements take no space and leave no gap.

use std::collections::HashMap;
use std::hash::Hash;

use super::DEFAULT_SPACING;

/// Position of one arranged element, relative to the stack origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<K> {
    pub key: K,
    pub y: u16,
    pub height: u16,
}

/// Ordered vertical arrangement
#[derive(Debug, Clone)]
pub struct StackLayout<K> {
    arranged: Vec<K>,
    spacing: u16,
    custom_spacing: HashMap<K, u16>,
}

impl<K: Copy + Eq + Hash> Default for StackLayout<K> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<K: Copy + Eq + Hash> StackLayout<K> {
    /// Create a stack with the given initial order
    pub fn new(arranged: Vec<K>) -> Self {
        Self {
            arranged,
            spacing: DEFAULT_SPACING,
            custom_spacing: HashMap::new(),
        }
    }

    /// Arranged keys in display order
    pub fn arranged(&self) -> &[K] {
        &self.arranged
    }

    pub fn spacing(&self) -> u16 {
        self.spacing
    }

    /// Set the default gap between elements
    pub fn set_spacing(&mut self, spacing: u16) {
        self.spacing = spacing;
    }

    /// Gap that follows `key` (custom override or the default)
    pub fn spacing_after(&self, key: &K) -> u16 {
        self.custom_spacing
            .get(key)
            .copied()
            .unwrap_or(self.spacing)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.arranged.iter().position(|k| k == key)
    }

    /// Add `key` at the end
    pub fn append(&mut self, key: K) {
        self.arranged.push(key);
    }

    /// Add `key` at the start
    pub fn prepend(&mut self, key: K) {
        self.arranged.insert(0, key);
    }

    /// Insert `key` right after `after`. Returns false if `after` is not arranged.
    pub fn insert_after(&mut self, key: K, after: &K) -> bool {
        match self.position(after) {
            Some(index) => {
                self.arranged.insert(index + 1, key);
                true
            }
            None => false,
        }
    }

    /// Insert `key` right before `before`.
    ///
    /// Returns false (and leaves the order unchanged) if `before` is not
    /// arranged or is the first element.
    pub fn insert_before(&mut self, key: K, before: &K) -> bool {
        match self.position(before) {
            Some(index) if index > 0 => {
                self.arranged.insert(index, key);
                true
            }
            _ => false,
        }
    }

    /// Override the gap that follows `after`. No-op if `after` is not arranged.
    pub fn set_spacing_after(&mut self, spacing: u16, after: &K) {
        if self.contains(after) {
            self.custom_spacing.insert(*after, spacing);
        }
    }

    /// Override the gap that precedes `before`. No-op on the first element.
    pub fn set_spacing_before(&mut self, spacing: u16, before: &K) {
        if let Some(index) = self.position(before).filter(|&i| i > 0) {
            let previous = self.arranged[index - 1];
            self.custom_spacing.insert(previous, spacing);
        }
    }

    /// Lay out the visible elements.
    ///
    /// `measure` returns the natural height of a key, or `None` when the
    /// element is hidden. Returns the slots and the total height.
    pub fn layout<F>(&self, mut measure: F) -> (Vec<Slot<K>>, u16)
    where
        F: FnMut(&K) -> Option<u16>,
    {
        let mut slots = Vec::with_capacity(self.arranged.len());
        let mut y: u16 = 0;
        let mut pending_gap: u16 = 0;

        for key in &self.arranged {
            let Some(height) = measure(key) else {
                continue;
            };
            y = y.saturating_add(pending_gap);
            slots.push(Slot {
                key: *key,
                y,
                height,
            });
            y = y.saturating_add(height);
            pending_gap = self.spacing_after(key);
        }

        (slots, y)
    }
}
