//! Ordered, id-indexed window collection.
//!
//! Tab order lives in a `Vec`; a reverse map gives O(1) id -> position
//! lookups. The two are kept consistent inside every mutating operation:
//! `delete` reindexes the suffix after the removed slot, `move_from`
//! reindexes only the inclusive sub-range it disturbed, so a reorder costs
//! proportional to the distance moved.

use std::collections::HashMap;

use crate::window::Window;

#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: Vec<Window>,
    /// id -> position. Always a bijection onto `0..len`.
    index: HashMap<String, usize>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn has(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.get(*self.index.get(id)?)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Window> {
        let i = *self.index.get(id)?;
        self.windows.get_mut(i)
    }

    pub fn get_at(&self, position: usize) -> Option<&Window> {
        self.windows.get(position)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn find(&self, mut filter: impl FnMut(&Window) -> bool) -> Option<&Window> {
        self.windows.iter().find(|w| filter(w))
    }

    pub fn find_mut(&mut self, mut filter: impl FnMut(&Window) -> bool) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| filter(w))
    }

    /// Insert at the end. First write wins: re-registering an existing id is
    /// a silent no-op.
    pub fn set(&mut self, window: Window) {
        if self.index.contains_key(&window.id) {
            return;
        }
        self.index.insert(window.id.clone(), self.windows.len());
        self.windows.push(window);
        debug_assert!(self.index_consistent());
    }

    /// Remove by id, reindexing every entry after the removed slot.
    pub fn delete(&mut self, id: &str) -> Option<Window> {
        let position = self.index.remove(id)?;
        let window = self.windows.remove(position);
        for p in position..self.windows.len() {
            self.index.insert(self.windows[p].id.clone(), p);
        }
        debug_assert!(self.index_consistent());
        Some(window)
    }

    /// Relocate the entry at `src` to `dst`, reindexing only the inclusive
    /// sub-range between them. Out-of-range indices are ignored.
    pub fn move_from(&mut self, src: usize, dst: usize) {
        if src == dst || src >= self.windows.len() || dst >= self.windows.len() {
            return;
        }
        let window = self.windows.remove(src);
        self.windows.insert(dst, window);
        let (lo, hi) = if src < dst { (src, dst) } else { (dst, src) };
        for p in lo..=hi {
            self.index.insert(self.windows[p].id.clone(), p);
        }
        debug_assert!(self.index_consistent());
    }

    /// Point-in-time copy of the ids in tab order.
    pub fn keys(&self) -> Vec<String> {
        self.windows.iter().map(|w| w.id.clone()).collect()
    }

    /// Point-in-time copies of the entries in tab order.
    pub fn values(&self) -> Vec<Window> {
        self.windows.to_vec()
    }

    /// Whether the reverse map agrees with the ordered sequence.
    pub fn index_consistent(&self) -> bool {
        self.index.len() == self.windows.len()
            && self
                .windows
                .iter()
                .enumerate()
                .all(|(p, w)| self.index.get(&w.id) == Some(&p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabhost_protocol::ContentRef;

    fn window(id: &str) -> Window {
        Window::new(id, ContentRef(0), id, false)
    }

    fn registry(ids: &[&str]) -> WindowRegistry {
        let mut reg = WindowRegistry::new();
        for id in ids {
            reg.set(window(id));
        }
        reg
    }

    #[test]
    fn set_preserves_insertion_order() {
        let reg = registry(&["a", "b", "c"]);
        assert_eq!(reg.keys(), ["a", "b", "c"]);
        assert_eq!(reg.index_of("b"), Some(1));
        assert_eq!(reg.get_at(1).unwrap().id, "b");
        assert!(reg.index_consistent());
    }

    #[test]
    fn set_is_first_write_wins() {
        let mut reg = registry(&["a", "b"]);
        let mut dup = window("a");
        dup.title = "replacement".into();
        reg.set(dup);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get("a").unwrap().title, "a");
    }

    #[test]
    fn delete_reindexes_suffix() {
        let mut reg = registry(&["a", "b", "c", "d"]);
        let removed = reg.delete("b").unwrap();
        assert_eq!(removed.id, "b");
        assert_eq!(reg.keys(), ["a", "c", "d"]);
        assert_eq!(reg.index_of("c"), Some(1));
        assert_eq!(reg.index_of("d"), Some(2));
        assert!(reg.index_consistent());
    }

    #[test]
    fn delete_missing_is_none() {
        let mut reg = registry(&["a"]);
        assert!(reg.delete("zz").is_none());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn move_forward_and_back_restores_order() {
        let mut reg = registry(&["a", "b", "c", "d", "e"]);
        reg.move_from(1, 3);
        assert_eq!(reg.keys(), ["a", "c", "d", "b", "e"]);
        assert!(reg.index_consistent());
        reg.move_from(3, 1);
        assert_eq!(reg.keys(), ["a", "b", "c", "d", "e"]);
        assert!(reg.index_consistent());
    }

    #[test]
    fn move_backward() {
        let mut reg = registry(&["a", "b", "c", "d"]);
        reg.move_from(3, 0);
        assert_eq!(reg.keys(), ["d", "a", "b", "c"]);
        assert!(reg.index_consistent());
    }

    #[test]
    fn move_out_of_range_is_ignored() {
        let mut reg = registry(&["a", "b"]);
        reg.move_from(0, 5);
        reg.move_from(5, 0);
        reg.move_from(1, 1);
        assert_eq!(reg.keys(), ["a", "b"]);
        assert!(reg.index_consistent());
    }

    #[test]
    fn positions_stay_a_permutation_under_mixed_mutation() {
        let mut reg = registry(&["a", "b", "c", "d", "e"]);
        reg.delete("c");
        reg.move_from(0, 2);
        reg.set(window("f"));
        reg.move_from(3, 1);
        reg.delete("a");
        assert!(reg.index_consistent());

        // index_of and get_at always agree
        for id in reg.keys() {
            let p = reg.index_of(&id).unwrap();
            assert_eq!(reg.get_at(p).unwrap().id, id);
        }
    }

    #[test]
    fn keys_are_point_in_time_copies() {
        let mut reg = registry(&["a", "b"]);
        let snapshot = reg.keys();
        reg.delete("a");
        assert_eq!(snapshot, ["a", "b"]);
        assert_eq!(reg.keys(), ["b"]);
    }

    #[test]
    fn find_by_content_ref() {
        let mut reg = WindowRegistry::new();
        reg.set(Window::new("a", ContentRef(10), "a", false));
        reg.set(Window::new("b", ContentRef(20), "b", false));
        let hit = reg.find(|w| w.content == ContentRef(20)).unwrap();
        assert_eq!(hit.id, "b");
        assert!(reg.find(|w| w.content == ContentRef(99)).is_none());
    }
}
