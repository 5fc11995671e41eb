/// Last-in-first-out state container that is never empty.
///
/// The entry created by [`StateStack::new`] is the baseline; popping it is a
/// caller bug and panics.
#[derive(Debug, Clone)]
pub struct StateStack<T> {
    items: Vec<T>,
}

impl<T: Clone> StateStack<T> {
    pub fn new(baseline: T) -> Self {
        Self { items: vec![baseline] }
    }

    /// Duplicates the current top.
    #[inline]
    pub fn push_top(&mut self) {
        let top = self.get().clone();
        self.items.push(top);
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes the top, exposing the previous value.
    ///
    /// # Panics
    /// Panics if only the baseline entry is left.
    #[inline]
    pub fn pop(&mut self) -> T {
        assert!(self.items.len() > 1, "StateStack::pop would remove the baseline entry");
        match self.items.pop() {
            Some(v) => v,
            None => unreachable!(),
        }
    }

    /// Overwrites the top in place.
    #[inline]
    pub fn set(&mut self, value: T) {
        *self.top_mut() = value;
    }

    #[inline]
    pub fn get(&self) -> &T {
        match self.items.last() {
            Some(v) => v,
            None => unreachable!("StateStack is never empty"),
        }
    }

    #[inline]
    pub fn top_mut(&mut self) -> &mut T {
        match self.items.last_mut() {
            Some(v) => v,
            None => unreachable!("StateStack is never empty"),
        }
    }

    /// Number of entries, baseline included.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when only the baseline entry remains.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.items.len() == 1
    }

    /// Drops everything above the baseline. Returns how many entries were removed.
    pub fn truncate_to_baseline(&mut self) -> usize {
        let extra = self.items.len() - 1;
        self.items.truncate(1);
        extra
    }
}
