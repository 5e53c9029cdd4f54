//! Fixed-capacity ring buffer used as windowing state.

/// The last `size` items seen, in a rotating ring.
///
/// Tracks how many items have been added so far, so an under-filled window
/// can be told apart from a full one. `add` consumes and returns the window,
/// letting it thread through a state machine as a plain value; snapshots
/// copy the contents out so emitted windows never alias the live ring.
#[derive(Clone, Debug)]
pub struct Window<T> {
    size: usize,
    count: usize,
    index: usize,
    contents: Vec<Option<T>>,
}

impl<T: Clone> Window<T> {
    /// An empty window of capacity `size`.
    pub fn initialise(size: usize) -> Window<T> {
        Window {
            size,
            count: 0,
            index: 0,
            contents: (0..size).map(|_| None).collect(),
        }
    }

    /// Add an item, overwriting the oldest once the window is full.
    pub fn add(mut self, item: T) -> Window<T> {
        self.contents[self.index] = Some(item);
        self.index = (self.index + 1) % self.size;
        self.count = (self.count + 1).min(self.size);
        self
    }

    /// Whether `size` items have been seen yet.
    pub fn is_full(&self) -> bool {
        self.count >= self.size
    }

    /// The window contents, oldest first.
    pub fn snapshot(&self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.size);
        for i in (self.index..self.size).chain(0..self.index) {
            if let Some(item) = &self.contents[i] {
                items.push(item.clone());
            }
        }
        items
    }

    /// Apply `reducer` to a snapshot, or `None` while the window is not yet
    /// full.
    pub fn reduce<R>(&self, reducer: &mut impl FnMut(&[T]) -> R) -> Option<R> {
        if !self.is_full() {
            return None;
        }
        Some(reducer(&self.snapshot()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_is_none_until_full() {
        let window = Window::initialise(3).add(1).add(2);
        assert!(!window.is_full());
        assert_eq!(window.reduce(&mut |items: &[i32]| items.to_vec()), None);
    }

    #[test]
    fn reduce_sees_items_oldest_first() {
        let window = Window::initialise(3).add(1).add(2).add(3);
        assert_eq!(
            window.reduce(&mut |items: &[i32]| items.to_vec()),
            Some(vec![1, 2, 3])
        );
    }

    #[test]
    fn adding_past_capacity_evicts_the_oldest() {
        let window = Window::initialise(3).add(1).add(2).add(3).add(4);
        assert_eq!(window.snapshot(), vec![2, 3, 4]);
    }

    #[test]
    fn the_ring_keeps_rotating() {
        let window = Window::initialise(2).add(1).add(2).add(3).add(4).add(5);
        assert_eq!(window.snapshot(), vec![4, 5]);
    }

    #[test]
    fn size_one_window_holds_the_latest_item() {
        let window = Window::initialise(1).add(7).add(8);
        assert_eq!(window.snapshot(), vec![8]);
        assert!(window.is_full());
    }
}
