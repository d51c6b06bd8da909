//! Single-select disclosure groups
//!
//! A disclosure group tracks which member of a named group is "active":
//! the expanded FAQ panel, the hovered pricing card, the applied hero effect.
//! At most one key is active at any time; activating a key implicitly
//! deactivates the previous one.

/// Radio-style selection over keys of type `K`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisclosureGroup<K> {
    active: Option<K>,
}

impl<K: PartialEq> DisclosureGroup<K> {
    /// Create a group with nothing active
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Create a group with `key` initially active
    pub fn with_active(key: K) -> Self {
        Self { active: Some(key) }
    }

    /// Expand `key`, or collapse it if it is already the active one
    ///
    /// Returns the new active key.
    pub fn toggle(&mut self, key: K) -> Option<&K> {
        if self.active.as_ref() == Some(&key) {
            self.active = None;
        } else {
            self.active = Some(key);
        }
        self.active.as_ref()
    }

    /// Activate `key` without collapsing when it is already active
    pub fn select(&mut self, key: K) {
        self.active = Some(key);
    }

    /// Deactivate `key` if it is the active one
    ///
    /// Returns `true` when the group changed. Used for hover-end, where a
    /// late leave event from one card must not clear a newer hover.
    pub fn release(&mut self, key: &K) -> bool {
        if self.active.as_ref() == Some(key) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Collapse whatever is active
    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.active.as_ref() == Some(key)
    }

    pub fn active(&self) -> Option<&K> {
        self.active.as_ref()
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }
}

impl<K: PartialEq> Default for DisclosureGroup<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(group: &DisclosureGroup<u32>, keys: &[u32]) -> usize {
        keys.iter().filter(|k| group.is_active(k)).count()
    }

    #[test]
    fn test_initially_none_active() {
        let group: DisclosureGroup<&str> = DisclosureGroup::new();
        assert!(group.active().is_none());
        assert!(!group.has_active());
        assert!(!group.is_active(&"panel0"));
    }

    #[test]
    fn test_toggle_expands_key() {
        let mut group = DisclosureGroup::new();
        assert_eq!(group.toggle("panel1"), Some(&"panel1"));
        assert!(group.is_active(&"panel1"));
    }

    #[test]
    fn test_toggle_twice_collapses() {
        let mut group = DisclosureGroup::new();
        group.toggle("panel1");
        assert_eq!(group.toggle("panel1"), None);
        assert!(!group.has_active());
    }

    #[test]
    fn test_toggle_other_key_switches() {
        let mut group = DisclosureGroup::new();
        group.toggle("panel1");
        assert_eq!(group.toggle("panel3"), Some(&"panel3"));
        assert!(!group.is_active(&"panel1"));
        assert!(group.is_active(&"panel3"));
    }

    #[test]
    fn test_at_most_one_active_for_any_sequence() {
        let keys = [0u32, 1, 2, 3, 4, 5];
        let mut group = DisclosureGroup::new();
        // Deterministic pseudo-random walk over the keys
        let mut state = 17u32;
        for _ in 0..1_000 {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let key = keys[(state >> 16) as usize % keys.len()];
            match state % 4 {
                0 | 1 => {
                    group.toggle(key);
                }
                2 => group.select(key),
                _ => {
                    group.release(&key);
                }
            }
            assert!(active_count(&group, &keys) <= 1);
        }
    }

    #[test]
    fn test_with_active_starts_selected() {
        let group = DisclosureGroup::with_active("premium");
        assert!(group.is_active(&"premium"));
        assert!(!group.is_active(&"starter"));
    }

    #[test]
    fn test_select_never_collapses() {
        let mut group = DisclosureGroup::new();
        group.select(2);
        group.select(2);
        assert!(group.is_active(&2));
        group.select(4);
        assert_eq!(group.active(), Some(&4));
    }

    #[test]
    fn test_release_only_matching_key() {
        let mut group = DisclosureGroup::new();
        group.select(1);
        // Leave event from a card that is no longer hovered
        assert!(!group.release(&0));
        assert!(group.is_active(&1));
        assert!(group.release(&1));
        assert!(!group.has_active());
    }

    #[test]
    fn test_clear() {
        let mut group = DisclosureGroup::with_active(3);
        group.clear();
        assert_eq!(group, DisclosureGroup::default());
    }
}
