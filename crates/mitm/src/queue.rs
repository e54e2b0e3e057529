use std::collections::vec_deque;
use std::collections::VecDeque;

/// A first-in first-out queue.
///
/// # Examples
///
/// ```
/// use mitm::Queue;
///
/// let mut q = Queue::from([79, 98]);
/// q.enqueue(20);
/// assert_eq!(q.len(), 3);
///
/// assert_eq!(q.dequeue(), Some(79));
/// assert_eq!(q.snapshot(), [98, 20]);
/// assert_eq!(q.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Construct a new empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append a value at the tail of the queue.
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Remove the value at the head of the queue, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use mitm::Queue;
    ///
    /// let mut q = Queue::new();
    /// assert_eq!(q.dequeue(), None);
    ///
    /// q.enqueue(1);
    /// q.enqueue(2);
    /// assert_eq!(q.dequeue(), Some(1));
    /// assert_eq!(q.dequeue(), Some(2));
    /// assert_eq!(q.dequeue(), None);
    /// ```
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Number of values in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Test if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the values in the queue from head to tail.
    #[inline]
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Queue<T>
where
    T: Clone,
{
    /// Copy out the contents of the queue from head to tail without modifying
    /// it.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> Default for Queue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    #[inline]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    #[inline]
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
