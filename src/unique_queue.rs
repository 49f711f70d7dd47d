//! A priority queue backed by a sorted [Vec] that refuses duplicate values.
//!
//! Entries are kept in ascending order of priority, so the most preferred value (the one with
//! the lowest priority) always sits at the front. Values with equal priority keep their
//! arrival order: a new value is placed after every entry whose priority is smaller than or
//! equal to its own. Insertion is a linear scan, which is fine for the handful of candidates
//! considered at a single decision point.
use core::fmt;
use num_traits::Float;

/// Number of slots allocated by [UniquePriorityQueue::new].
pub const INITIAL_CAPACITY: usize = 10;
/// Number of slots added whenever the backing storage is full.
pub const GROWTH_INCREMENT: usize = 5;

/// Errors reported by [UniquePriorityQueue] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueError {
    /// [peek](UniquePriorityQueue::peek) or [remove_min](UniquePriorityQueue::remove_min) was
    /// called on an empty queue.
    Empty,
    /// [update_priority](UniquePriorityQueue::update_priority) was called for a value that is
    /// not in the queue.
    NotFound,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "priority queue is empty"),
            QueueError::NotFound => write!(f, "item not found in priority queue"),
        }
    }
}

impl std::error::Error for QueueError {}

#[derive(Clone, Debug)]
struct Entry<T, P> {
    value: T,
    priority: P,
}

/// Sorted priority queue in which every value occurs at most once. Lower priorities are
/// closer to the front.
#[derive(Clone, Debug)]
pub struct UniquePriorityQueue<T, P = f64> {
    entries: Vec<Entry<T, P>>,
}

impl<T: PartialEq, P: Float> Default for UniquePriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, P: Float> UniquePriorityQueue<T, P> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        UniquePriorityQueue {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Adds `value` with the given priority unless an equal value is already queued, in which
    /// case the queue is left untouched. Returns whether the value was inserted.
    ///
    /// The value is placed in front of the first entry with a strictly greater priority, or at
    /// the end if there is none. Ties therefore resolve in arrival order.
    pub fn add(&mut self, value: T, priority: P) -> bool {
        debug_assert!(priority.is_finite(), "priorities must be finite");
        if self.contains(&value) {
            return false;
        }
        self.insert_sorted(Entry { value, priority });
        true
    }

    fn insert_sorted(&mut self, entry: Entry<T, P>) {
        if self.entries.len() == self.entries.capacity() {
            self.entries.reserve_exact(GROWTH_INCREMENT);
        }
        // Only occupied slots are compared; one past the last entry is always a valid spot.
        let index = self
            .entries
            .iter()
            .position(|e| e.priority > entry.priority)
            .unwrap_or(self.entries.len());
        self.entries.insert(index, entry);
    }

    pub fn contains(&self, value: &T) -> bool {
        self.entries.iter().any(|e| e.value == *value)
    }

    /// Returns the value with the lowest priority without removing it.
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.entries
            .first()
            .map(|e| &e.value)
            .ok_or(QueueError::Empty)
    }

    /// Removes and returns the value with the lowest priority.
    pub fn remove_min(&mut self) -> Result<T, QueueError> {
        if self.entries.is_empty() {
            return Err(QueueError::Empty);
        }
        Ok(self.entries.remove(0).value)
    }

    /// Moves `value` to the position matching `priority`. The value is re-inserted behind any
    /// entries that already hold the same priority.
    pub fn update_priority(&mut self, value: &T, priority: P) -> Result<(), QueueError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.value == *value)
            .ok_or(QueueError::NotFound)?;
        let mut entry = self.entries.remove(index);
        entry.priority = priority;
        self.insert_sorted(entry);
        Ok(())
    }

    /// The priority currently stored for `value`, if it is queued.
    pub fn priority_of(&self, value: &T) -> Option<P> {
        self.entries
            .iter()
            .find(|e| e.value == *value)
            .map(|e| e.priority)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the backing storage. Informational only.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Iterates over `(value, priority)` pairs from the front of the queue to the back.
    pub fn iter(&self) -> impl Iterator<Item = (&T, P)> + '_ {
        self.entries.iter().map(|e| (&e.value, e.priority))
    }
}

impl<T: fmt::Display, P: fmt::Debug> fmt::Display for UniquePriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "The queue is empty");
        }
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} [{:?}]", e.value, e.priority)?;
        }
        Ok(())
    }
}
