use glam::Mat4;

use crate::id::Id;
use crate::paint::Color;

use super::StateStack;

/// The six independent draw-state stacks owned by a context.
#[derive(Debug, Clone)]
pub struct DrawState {
    pub color: StateStack<Color>,
    pub alpha: StateStack<f32>,
    pub size: StateStack<f32>,
    pub sorting: StateStack<bool>,
    pub matrix: StateStack<Mat4>,
    pub id: StateStack<Id>,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            color: StateStack::new(Color::WHITE),
            alpha: StateStack::new(1.0),
            size: StateStack::new(1.0),
            sorting: StateStack::new(false),
            matrix: StateStack::new(Mat4::IDENTITY),
            id: StateStack::new(Id::INVALID),
        }
    }
}

impl DrawState {
    /// Pushes copies of color, alpha, size and sorting together.
    pub fn push_all(&mut self) {
        self.color.push_top();
        self.alpha.push_top();
        self.size.push_top();
        self.sorting.push_top();
    }

    /// Pops what [`push_all`](Self::push_all) pushed.
    pub fn pop_all(&mut self) {
        self.color.pop();
        self.alpha.pop();
        self.size.pop();
        self.sorting.pop();
    }

    /// Truncates every stack back to its baseline.
    ///
    /// Returns the names of the stacks that were unbalanced.
    pub fn restore_baseline(&mut self) -> Vec<&'static str> {
        let mut unbalanced = Vec::new();
        let mut check = |name: &'static str, extra: usize| {
            if extra > 0 {
                unbalanced.push(name);
            }
        };
        check("color", self.color.truncate_to_baseline());
        check("alpha", self.alpha.truncate_to_baseline());
        check("size", self.size.truncate_to_baseline());
        check("sorting", self.sorting.truncate_to_baseline());
        check("matrix", self.matrix.truncate_to_baseline());
        check("id", self.id.truncate_to_baseline());
        unbalanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_all_pop_all_roundtrip() {
        let mut ds = DrawState::default();
        ds.push_all();
        ds.color.set(Color::RED);
        ds.size.set(4.0);
        ds.pop_all();
        assert_eq!(*ds.color.get(), Color::WHITE);
        assert_eq!(*ds.size.get(), 1.0);
        assert!(ds.restore_baseline().is_empty());
    }

    #[test]
    fn restore_reports_unbalanced_stacks() {
        let mut ds = DrawState::default();
        ds.matrix.push_top();
        ds.id.push(Id::from_name("scope"));
        assert_eq!(ds.restore_baseline(), vec!["matrix", "id"]);
        assert_eq!(*ds.id.get(), Id::INVALID);
    }
}
