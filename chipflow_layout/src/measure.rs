// Copyright 2025 the Chipflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generationally keyed store for asynchronously reported item sizes.
//!
//! ## Overview
//!
//! The rendering host realizes chips on screen and only then knows their
//! sizes, so measurement always trails the tag model by up to one frame. This
//! store decouples the two: the model allocates an [`ItemKey`] per chip (plus
//! one for the text field), the render pass [`report`](Measurements::report)s
//! sizes against those keys, and the next layout pass
//! [`commit`](Measurements::commit)s the batch and reads sizes back in model
//! order.
//!
//! Keys are generational: once a chip is removed its key goes stale, and a
//! late report against it is dropped instead of landing on whichever chip now
//! occupies that slot. This replaces fragile position-indexed size arrays.

use alloc::vec::Vec;

use kurbo::Size;

bitflags::bitflags! {
    /// Batched measurement changes since the last [`Measurements::commit`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Dirty: u8 {
        /// At least one reported size changed.
        const SIZES = 0b0000_0001;
        /// Items were inserted or removed.
        const ITEMS = 0b0000_0010;
    }
}

/// Generational handle for a measured item.
///
/// Stable for the item's lifetime; stale once the item is removed. A stale
/// key never aliases a live item because the generation must match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemKey(u32, u32);

impl ItemKey {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Item keys are intentionally 32-bit; a chip row never approaches that."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Entry {
    generation: u32,
    // None until the first report arrives for this item.
    size: Option<Size>,
}

/// Store of reported sizes, keyed by [`ItemKey`].
#[derive(Clone, Debug, Default)]
pub struct Measurements {
    entries: Vec<Option<Entry>>,
    // Freed slots, paired with the generation they retired at so reuse
    // always bumps past any key still held for the removed item.
    free_list: Vec<(usize, u32)>,
    pending: Dirty,
}

impl Measurements {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// True if no items are live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocate a slot for a new item. No size is known until the host
    /// reports one.
    pub fn insert(&mut self) -> ItemKey {
        self.pending |= Dirty::ITEMS;
        if let Some((idx, retired)) = self.free_list.pop() {
            let generation = retired + 1;
            self.entries[idx] = Some(Entry {
                generation,
                size: None,
            });
            ItemKey::new(idx, generation)
        } else {
            let generation = 1_u32;
            self.entries.push(Some(Entry {
                generation,
                size: None,
            }));
            ItemKey::new(self.entries.len() - 1, generation)
        }
    }

    /// Record a measured size for `key`. Reports against stale keys are
    /// dropped; unchanged sizes do not mark the batch dirty.
    pub fn report(&mut self, key: ItemKey, size: Size) {
        let Some(entry) = self.entry_mut(key) else {
            return;
        };
        if entry.size != Some(size) {
            entry.size = Some(size);
            self.pending |= Dirty::SIZES;
        }
    }

    /// The last reported size for `key`, if the key is live and a report has
    /// arrived.
    pub fn get(&self, key: ItemKey) -> Option<Size> {
        self.entry(key).and_then(|e| e.size)
    }

    /// Whether `key` refers to a live item.
    pub fn is_alive(&self, key: ItemKey) -> bool {
        self.entry(key).is_some()
    }

    /// Remove an item. Removing a stale key is a no-op.
    pub fn remove(&mut self, key: ItemKey) {
        if self.entry(key).is_none() {
            return;
        }
        self.entries[key.idx()] = None;
        self.free_list.push((key.idx(), key.1));
        self.pending |= Dirty::ITEMS;
    }

    /// Take the batch of changes accumulated since the last commit.
    ///
    /// A non-empty result tells the host its previous layout is out of date.
    pub fn commit(&mut self) -> Dirty {
        core::mem::take(&mut self.pending)
    }

    /// Collect sizes for `keys` in order, skipping items that are stale or
    /// not yet measured.
    ///
    /// The skip is what keeps a layout pass safe when a tag was added or
    /// removed after the last render: the unmatched item simply sits out one
    /// frame.
    pub fn ordered_sizes(&self, keys: &[ItemKey]) -> Vec<Size> {
        keys.iter().filter_map(|&k| self.get(k)).collect()
    }

    fn entry(&self, key: ItemKey) -> Option<&Entry> {
        let entry = self.entries.get(key.idx())?.as_ref()?;
        (entry.generation == key.1).then_some(entry)
    }

    fn entry_mut(&mut self, key: ItemKey) -> Option<&mut Entry> {
        let entry = self.entries.get_mut(key.idx())?.as_mut()?;
        (entry.generation == key.1).then_some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_then_get_round_trips() {
        let mut m = Measurements::new();
        let k = m.insert();
        assert_eq!(m.get(k), None, "no size before the first report");
        m.report(k, Size::new(40.0, 20.0));
        assert_eq!(m.get(k), Some(Size::new(40.0, 20.0)));
    }

    #[test]
    fn commit_batches_and_drains() {
        let mut m = Measurements::new();
        let k = m.insert();
        m.report(k, Size::new(40.0, 20.0));
        let dirty = m.commit();
        assert!(dirty.contains(Dirty::ITEMS));
        assert!(dirty.contains(Dirty::SIZES));
        assert_eq!(m.commit(), Dirty::empty(), "commit drains the batch");
    }

    #[test]
    fn unchanged_report_is_not_dirty() {
        let mut m = Measurements::new();
        let k = m.insert();
        m.report(k, Size::new(40.0, 20.0));
        let _ = m.commit();
        m.report(k, Size::new(40.0, 20.0));
        assert_eq!(m.commit(), Dirty::empty());
    }

    #[test]
    fn stale_key_reports_are_dropped() {
        let mut m = Measurements::new();
        let old = m.insert();
        m.remove(old);
        // The freed slot is reused with a new generation.
        let new = m.insert();
        assert_eq!(new.idx(), old.idx());
        let _ = m.commit();

        m.report(old, Size::new(99.0, 99.0));
        assert_eq!(m.get(new), None, "stale report must not land on the new item");
        assert!(!m.is_alive(old));
        assert_eq!(m.commit(), Dirty::empty());
    }

    #[test]
    fn generation_survives_repeated_slot_reuse() {
        let mut m = Measurements::new();
        let first = m.insert();
        m.remove(first);
        let second = m.insert();
        m.remove(second);
        let third = m.insert();
        assert_eq!(third.idx(), first.idx(), "the same slot cycles through");

        // Keys retired in earlier cycles must stay dead.
        m.report(first, Size::new(7.0, 7.0));
        m.report(second, Size::new(5.0, 5.0));
        assert!(!m.is_alive(first));
        assert!(!m.is_alive(second));
        assert!(m.is_alive(third));
        assert_eq!(m.get(third), None, "no retired report lands on the live item");
    }

    #[test]
    fn remove_is_idempotent() {
        let mut m = Measurements::new();
        let k = m.insert();
        m.remove(k);
        let _ = m.commit();
        m.remove(k);
        assert_eq!(m.commit(), Dirty::empty());
        assert!(m.is_empty());
    }

    #[test]
    fn ordered_sizes_skips_unmeasured_items() {
        let mut m = Measurements::new();
        let a = m.insert();
        let b = m.insert();
        let c = m.insert();
        m.report(a, Size::new(10.0, 5.0));
        m.report(c, Size::new(30.0, 5.0));
        // b was added after the last render pass; it has no size yet.
        let sizes = m.ordered_sizes(&[a, b, c]);
        assert_eq!(sizes, [Size::new(10.0, 5.0), Size::new(30.0, 5.0)]);
    }
}
