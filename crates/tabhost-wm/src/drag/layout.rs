//! Layout metrics sampled at drag start.
//!
//! The controller never queries live layout during a drag; it works from a
//! single snapshot plus the animation targets it set itself. Candidate
//! insertion indices come from comparing the pointer against sibling *target*
//! midpoints, so an in-flight sibling is judged by where it is heading.

/// One tab's place along the container axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabSlot {
    /// Leading edge offset.
    pub offset: f64,
    /// Size along the drag axis.
    pub extent: f64,
}

impl TabSlot {
    pub fn new(offset: f64, extent: f64) -> Self {
        Self { offset, extent }
    }
}

/// Container metrics plus every tab's slot, in positional order.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerLayout {
    /// Leading edge of the container's content area.
    pub origin: f64,
    /// Usable extent of the container.
    pub extent: f64,
    pub tabs: Vec<TabSlot>,
}

impl ContainerLayout {
    /// Build a layout of equally sized, adjacent tabs. Test and demo helper.
    pub fn uniform(origin: f64, tab_extent: f64, count: usize) -> Self {
        let tabs = (0..count)
            .map(|i| TabSlot::new(origin + tab_extent * i as f64, tab_extent))
            .collect();
        Self {
            origin,
            extent: tab_extent * count as f64,
            tabs,
        }
    }
}

/// Pick the insertion index for `pointer` among sibling midpoints.
///
/// `siblings` yields `(target_offset, extent)` pairs in positional order.
/// The first sibling whose target midpoint strictly exceeds the pointer wins
/// that index; a pointer exactly on a midpoint resolves to "after" that
/// sibling. If no midpoint exceeds the pointer, the index equals the sibling
/// count.
pub fn insertion_index(pointer: f64, siblings: impl Iterator<Item = (f64, f64)>) -> usize {
    let mut next = 0;
    for (i, (offset, extent)) in siblings.enumerate() {
        let midpoint = offset + extent / 2.0;
        if pointer < midpoint {
            break;
        }
        next = i + 1;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots() -> Vec<(f64, f64)> {
        // midpoints at 50, 150, 250
        vec![(0.0, 100.0), (100.0, 100.0), (200.0, 100.0)]
    }

    #[test]
    fn pointer_before_first_midpoint() {
        assert_eq!(insertion_index(10.0, slots().into_iter()), 0);
    }

    #[test]
    fn pointer_between_midpoints() {
        assert_eq!(insertion_index(60.0, slots().into_iter()), 1);
        assert_eq!(insertion_index(151.0, slots().into_iter()), 2);
    }

    #[test]
    fn pointer_past_all_midpoints() {
        assert_eq!(insertion_index(260.0, slots().into_iter()), 3);
    }

    #[test]
    fn pointer_exactly_on_midpoint_resolves_after() {
        // strict less-than: 50 is not < 50
        assert_eq!(insertion_index(50.0, slots().into_iter()), 1);
        assert_eq!(insertion_index(49.999, slots().into_iter()), 0);
    }

    #[test]
    fn no_siblings_yields_zero() {
        assert_eq!(insertion_index(123.0, std::iter::empty()), 0);
    }

    #[test]
    fn uniform_layout_is_adjacent() {
        let layout = ContainerLayout::uniform(10.0, 100.0, 3);
        assert_eq!(layout.tabs[0], TabSlot::new(10.0, 100.0));
        assert_eq!(layout.tabs[2], TabSlot::new(210.0, 100.0));
        assert_eq!(layout.extent, 300.0);
    }
}
