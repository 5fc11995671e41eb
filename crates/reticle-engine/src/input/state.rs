use super::types::Key;

/// Current and previous frame key snapshots.
#[derive(Debug, Default, Clone)]
pub struct KeyTable {
    curr: [bool; Key::COUNT],
    prev: [bool; Key::COUNT],
}

impl KeyTable {
    /// Shifts the current snapshot into "previous" and stores `next` as current.
    pub fn advance(&mut self, next: &[bool; Key::COUNT]) {
        self.prev = self.curr;
        self.curr = *next;
    }

    #[inline]
    pub fn is_down(&self, key: Key) -> bool {
        self.curr[key.index()]
    }

    /// Down this frame, up the previous one.
    #[inline]
    pub fn was_pressed(&self, key: Key) -> bool {
        self.curr[key.index()] && !self.prev[key.index()]
    }

    /// Up this frame, down the previous one.
    #[inline]
    pub fn was_released(&self, key: Key) -> bool {
        !self.curr[key.index()] && self.prev[key.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(select: bool) -> [bool; Key::COUNT] {
        let mut k = [false; Key::COUNT];
        k[Key::SELECT.index()] = select;
        k
    }

    #[test]
    fn press_is_an_edge_not_a_hold() {
        let mut t = KeyTable::default();
        t.advance(&keys(true));
        assert!(t.was_pressed(Key::SELECT));
        t.advance(&keys(true));
        assert!(t.is_down(Key::SELECT));
        assert!(!t.was_pressed(Key::SELECT));
    }

    #[test]
    fn release_edge() {
        let mut t = KeyTable::default();
        t.advance(&keys(true));
        t.advance(&keys(false));
        assert!(t.was_released(Key::SELECT));
        assert!(!t.is_down(Key::SELECT));
        t.advance(&keys(false));
        assert!(!t.was_released(Key::SELECT));
    }

    #[test]
    fn action_aliases_share_slots() {
        assert_eq!(Key::SELECT, Key::MouseLeft);
        assert_eq!(Key::GIZMO_SCALE.index(), Key::S.index());
    }
}
