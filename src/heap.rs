/// An array-backed binary heap over `i64` with removal of arbitrary values.
///
/// The ordering mode is fixed at construction: a max-heap keeps every parent
/// `>=` its children, a min-heap keeps every parent `<=` its children. The
/// backing array is observable through [`Heap::output`], and its exact layout
/// depends on the order in which values were inserted.
///
/// Note: This implementation is not thread-safe. Wrap it in a lock when it has
/// to be shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heap {
    /// Dense backing array, index 0 is the root
    elements: Vec<i64>,
    /// Whether parents must be greater (true) or smaller (false) than their children
    is_max: bool,
}

impl Heap {
    /// Creates a heap and inserts every value of `initial` in order, one at a time
    #[must_use]
    pub fn new<I>(is_max: bool, initial: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let mut heap = Self { elements: Vec::new(), is_max };
        heap.extend(initial);
        heap
    }

    /// Creates a min-heap from `initial`
    #[must_use]
    pub fn min<I>(initial: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self::new(false, initial)
    }

    /// Creates a max-heap from `initial`
    #[must_use]
    pub fn max<I>(initial: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self::new(true, initial)
    }

    /// Appends `value` and sifts it up towards the root
    pub fn insert(&mut self, value: i64) {
        self.elements.push(value);
        self.sift_up(self.elements.len().saturating_sub(1));
    }

    /// Removes and returns the root, or `None` when the heap is empty
    pub fn poll(&mut self) -> Option<i64> {
        if self.elements.is_empty() {
            return None;
        }

        // Moves the last element into the root slot
        let root = self.elements.swap_remove(0);
        self.sift_down(0);
        Some(root)
    }

    /// Removes one occurrence of `value`, doing nothing if it is absent.
    ///
    /// When the last slot holds `value` it is simply truncated. Otherwise the
    /// first occurrence by index is replaced with the last element, which is
    /// then sifted up or down depending on how it compares to its new parent.
    pub fn remove(&mut self, value: i64) {
        let index = if self.elements.last() == Some(&value) {
            self.elements.len().saturating_sub(1)
        } else {
            match self.elements.iter().position(|&element| element == value) {
                Some(index) => index,
                None => return,
            }
        };

        self.elements.swap_remove(index);
        if index >= self.elements.len() {
            return;
        }

        if self.beats_parent(index) {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
    }

    /// The current backing array, in heap layout
    #[must_use]
    pub fn output(&self) -> &[i64] {
        &self.elements
    }

    /// Returns the root without removing it
    #[must_use]
    pub fn peek(&self) -> Option<i64> {
        self.elements.first().copied()
    }

    /// Returns the number of stored values
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the heap holds no values
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns true for a max-heap
    #[must_use]
    pub fn is_max(&self) -> bool {
        self.is_max
    }

    /// Drains the heap through [`Heap::poll`], yielding values in heap order
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<i64> {
        let mut sorted = Vec::with_capacity(self.elements.len());
        while let Some(value) = self.poll() {
            sorted.push(value);
        }
        sorted
    }

    /// Returns true if `parent` may sit above `child` in this heap's mode
    fn dominates(&self, parent: i64, child: i64) -> bool {
        if self.is_max { parent >= child } else { parent <= child }
    }

    /// Index of the parent of `index`, i.e. `(index + 1) / 2 - 1`
    fn parent_of(index: usize) -> usize {
        index.saturating_sub(1) / 2
    }

    /// Returns true if the value at `index` violates dominance with its parent
    fn beats_parent(&self, index: usize) -> bool {
        if index == 0 {
            return false;
        }
        match (self.elements.get(Self::parent_of(index)), self.elements.get(index)) {
            (Some(&parent), Some(&current)) => !self.dominates(parent, current),
            _ => false,
        }
    }

    /// Picks the child of `index` that should be promoted, if any child exists.
    /// On ties the left child wins.
    fn preferred_child(&self, index: usize) -> Option<usize> {
        let left = index.saturating_mul(2).saturating_add(1);
        let right = left.saturating_add(1);

        match (self.elements.get(left), self.elements.get(right)) {
            (Some(&left_value), Some(&right_value)) => {
                Some(if self.dominates(left_value, right_value) { left } else { right })
            }
            (Some(_), None) => Some(left),
            _ => None,
        }
    }

    /// Moves the value at `index` towards the root while it beats its parent
    fn sift_up(&mut self, mut index: usize) {
        while self.beats_parent(index) {
            let parent = Self::parent_of(index);
            self.elements.swap(parent, index);
            index = parent;
        }
    }

    /// Moves the value at `index` towards the leaves while a child beats it
    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.preferred_child(index) {
            if !self.beats_parent(child) {
                return;
            }
            self.elements.swap(index, child);
            index = child;
        }
    }
}

impl Extend<i64> for Heap {
    fn extend<T: IntoIterator<Item = i64>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}
