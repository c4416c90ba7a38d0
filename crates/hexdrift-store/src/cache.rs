//! World-keyed cache of stamped cells, oldest first.
//!
//! Entries are kept in age order: new entries and renewed entries go to the
//! back, stamped "now", and stamps never change relative to one another
//! except through a uniform rebase. Expiration therefore only ever trims a
//! prefix.

use hexdrift_core::{Cell, HexCoord, Stamped, Timestamp};
use indexmap::IndexMap;

/// At most one stamped cell per world coordinate, ordered oldest first.
#[derive(Clone, Debug, Default)]
pub struct Cache {
    entries: IndexMap<HexCoord, Stamped<Cell>>,
}

impl Cache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `coord`.
    pub fn get(&self, coord: HexCoord) -> Option<&Stamped<Cell>> {
        self.entries.get(&coord)
    }

    /// Whether an entry exists at `coord`.
    pub fn contains(&self, coord: HexCoord) -> bool {
        self.entries.contains_key(&coord)
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Stamped<Cell>> {
        self.entries.values()
    }

    /// Append a newly stamped entry as the newest.
    ///
    /// An existing entry at the same coordinate is replaced.
    pub fn push(&mut self, entry: Stamped<Cell>) {
        let coord = entry.value.coord();
        self.entries.shift_remove(&coord);
        self.entries.insert(coord, entry);
    }

    /// Restamp the entry at `coord`, apply `update` to its cell, and move it
    /// to the newest position. Returns the updated cell.
    pub fn renew(
        &mut self,
        coord: HexCoord,
        stamp: Timestamp,
        update: impl FnOnce(&mut Cell),
    ) -> Option<Cell> {
        let (index, _, entry) = self.entries.get_full_mut(&coord)?;
        entry.stamp = stamp;
        update(&mut entry.value);
        let cell = entry.value;
        let last = self.entries.len() - 1;
        self.entries.move_index(index, last);
        Some(cell)
    }

    /// Apply `update` to the cell at `coord` in place, keeping its stamp
    /// and position. Returns the updated cell.
    pub fn update(&mut self, coord: HexCoord, update: impl FnOnce(&mut Cell)) -> Option<Cell> {
        let entry = self.entries.get_mut(&coord)?;
        update(&mut entry.value);
        Some(entry.value)
    }

    /// First entry matching `pred`, oldest first.
    pub fn find(&self, mut pred: impl FnMut(&Stamped<Cell>) -> bool) -> Option<&Stamped<Cell>> {
        self.entries.values().find(|e| pred(e))
    }

    /// Settle the oldest entries while `expired` holds. Each one is removed,
    /// unless `keep` accepts its cell, in which case it is restamped to
    /// `stamp` and moved to the newest end. Returns the number removed.
    ///
    /// `stamp` must be "now" so that the age order survives.
    pub fn evict_or_renew(
        &mut self,
        mut expired: impl FnMut(&Stamped<Cell>) -> bool,
        stamp: Timestamp,
        mut keep: impl FnMut(&Cell) -> bool,
    ) -> usize {
        let count = self.entries.values().take_while(|e| expired(e)).count();
        let mut kept = Vec::new();
        for (coord, entry) in self.entries.drain(..count) {
            if keep(&entry.value) {
                kept.push((coord, entry.restamped(stamp)));
            }
        }
        let evicted = count - kept.len();
        self.entries.extend(kept);
        evicted
    }

    /// Add `shift` to every stamp.
    pub fn restamp(&mut self, shift: Timestamp) {
        for entry in self.entries.values_mut() {
            entry.stamp += shift;
        }
    }

    /// Re-express every coordinate as `coord - shift`, preserving order.
    pub fn rekey(&mut self, shift: HexCoord) {
        self.entries = self
            .entries
            .drain(..)
            .map(|(coord, mut entry)| {
                entry.value = entry.value - shift;
                (coord - shift, entry)
            })
            .collect();
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(i: i32, k: i32) -> HexCoord {
        HexCoord::new(i, k)
    }

    fn stamps(cache: &Cache) -> Vec<Timestamp> {
        cache.iter().map(|e| e.stamp).collect()
    }

    #[test]
    fn push_replaces_and_moves_to_back() {
        let mut c = Cache::new();
        c.push(Stamped::new(9, Cell::empty(h(0, 0))));
        c.push(Stamped::new(8, Cell::empty(h(1, 0))));
        c.push(Stamped::new(7, Cell::content(h(0, 0), 2)));
        assert_eq!(c.len(), 2);
        assert_eq!(stamps(&c), vec![8, 7]);
        assert_eq!(c.get(h(0, 0)).unwrap().value, Cell::content(h(0, 0), 2));
    }

    #[test]
    fn renew_moves_entry_to_the_newest_end() {
        let mut c = Cache::new();
        for (n, stamp) in [(0, 9), (1, 8), (2, 7)] {
            c.push(Stamped::new(stamp, Cell::content(h(n, 0), 1)));
        }
        let head = c.renew(h(0, 0), 6, Cell::mark_agent).unwrap();
        assert!(head.is_agent_body());
        assert_eq!(stamps(&c), vec![8, 7, 6]);
        assert_eq!(c.renew(h(5, 5), 6, Cell::mark_agent), None);
    }

    #[test]
    fn update_keeps_stamp_and_position() {
        let mut c = Cache::new();
        c.push(Stamped::new(5, Cell::agent(h(0, 0))));
        c.push(Stamped::new(4, Cell::agent(h(1, 1))));
        c.update(h(0, 0), Cell::clear).unwrap();
        assert_eq!(stamps(&c), vec![5, 4]);
        assert_eq!(c.get(h(0, 0)).unwrap().value, Cell::empty(h(0, 0)));
    }

    #[test]
    fn eviction_trims_only_the_oldest_prefix() {
        let mut c = Cache::new();
        for (n, stamp) in [(0, 12), (1, 11), (2, 10), (3, 3)] {
            c.push(Stamped::new(stamp, Cell::empty(h(n, 0))));
        }
        assert_eq!(c.evict_or_renew(|e| e.stamp >= 10, 2, |_| false), 3);
        assert_eq!(stamps(&c), vec![3]);
        assert_eq!(c.evict_or_renew(|e| e.stamp >= 10, 2, |_| false), 0);
    }

    #[test]
    fn kept_entries_are_renewed_instead_of_evicted() {
        let mut c = Cache::new();
        for (n, stamp) in [(0, 12), (1, 11), (2, 10), (3, 3)] {
            c.push(Stamped::new(stamp, Cell::content(h(n, 0), 1)));
        }
        let evicted = c.evict_or_renew(|e| e.stamp >= 10, 2, |cell| cell.coord() == h(1, 0));
        assert_eq!(evicted, 2);
        assert_eq!(stamps(&c), vec![3, 2]);
        assert_eq!(c.get(h(1, 0)).unwrap().value, Cell::content(h(1, 0), 1));
        assert!(!c.contains(h(0, 0)));
        assert!(!c.contains(h(2, 0)));
    }

    #[test]
    fn rekey_shifts_keys_and_cells_together() {
        let mut c = Cache::new();
        c.push(Stamped::new(2, Cell::agent(h(4, 4))));
        c.push(Stamped::new(1, Cell::empty(h(5, 4))));
        c.rekey(h(4, 4));
        assert_eq!(c.get(h(0, 0)).unwrap().value, Cell::agent(h(0, 0)));
        assert_eq!(c.get(h(1, 0)).unwrap().value, Cell::empty(h(1, 0)));
        assert!(!c.contains(h(4, 4)));
        assert_eq!(stamps(&c), vec![2, 1]);
        c.restamp(10);
        assert_eq!(stamps(&c), vec![12, 11]);
    }

    #[test]
    fn find_scans_oldest_first() {
        let mut c = Cache::new();
        c.push(Stamped::new(3, Cell::agent(h(0, 0))));
        c.push(Stamped::new(3, Cell::agent(h(0, 1))));
        let hit = c.find(|e| e.stamp == 3 && e.value.is_agent_body()).unwrap();
        assert_eq!(hit.value.coord(), h(0, 0));
        assert!(c.find(|e| e.stamp == 4).is_none());
    }
}
