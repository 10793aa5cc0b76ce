use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Fixed-capacity FIFO of recently used keys with constant-time membership.
///
/// Game sessions push the key of every target they present and consult
/// [`RecentHistory::contains`] before presenting the next one, so the same
/// target is not repeated within the last `capacity` questions.
///
/// # Examples
///
/// ```
/// use lumo_engine::history::RecentHistory;
///
/// let mut recent = RecentHistory::new(2);
/// recent.push("red");
/// recent.push("blue");
/// recent.push("green"); // evicts "red"
/// assert!(!recent.contains(&"red"));
/// assert!(recent.contains(&"green"));
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct RecentHistory<T: Eq + Hash> {
    capacity: usize,
    order: VecDeque<T>,
    #[serde(skip)]
    counts: HashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> RecentHistory<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::new(),
            counts: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Records `item`, evicting the oldest entry once the buffer is full.
    /// A zero-capacity history records nothing.
    pub fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        while self.order.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => self.forget(&oldest),
                None => break,
            }
        }
        *self.counts.entry(item.clone()).or_insert(0) += 1;
        self.order.push_back(item);
    }

    pub fn contains(&self, item: &T) -> bool {
        self.counts.contains_key(item)
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.counts.clear();
    }

    fn forget(&mut self, item: &T) {
        if let Some(count) = self.counts.get_mut(item) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(item);
            }
        }
    }
}
