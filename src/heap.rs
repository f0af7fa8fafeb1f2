use std::fmt;
use std::mem;
use std::slice;

use crate::error::HeapError;
use crate::index::{last_parent, left, parent, right};
use crate::ops::HeapOps;

/// A binary max-heap with a fixed capacity ceiling.
///
/// Elements live in a `Vec` laid out as a complete binary tree: the node at
/// index `i` has children at `2i + 1` and `2i + 2`. The vector only ever holds
/// live elements, so `values.len()` is the heap size and `capacity` bounds it.
pub struct Heap<T: Ord> {
    values: Vec<T>,
    capacity: usize,
}

impl<T: Ord> Heap<T> {
    /// Creates an empty heap that holds at most `capacity` elements.
    ///
    /// A capacity of zero gives a heap that is always both empty and full.
    pub fn new(capacity: usize) -> Self {
        Heap {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Like [`Heap::new`], but accepts any integer type and rejects values
    /// that are negative or do not fit in a `usize`.
    pub fn try_new<C>(capacity: C) -> Result<Self, HeapError<T>>
    where
        C: TryInto<usize> + fmt::Display + Copy,
    {
        match capacity.try_into() {
            Ok(capacity) => Ok(Heap::new(capacity)),
            Err(_) => Err(HeapError::InvalidArgument(format!(
                "capacity must be a non-negative size, got {}",
                capacity
            ))),
        }
    }

    /// Builds a heap in place from `values`. Capacity and size are both set
    /// to `values.len()`. Runs in O(n).
    pub fn build(values: Vec<T>) -> Self {
        let capacity = values.len();
        let mut heap = Heap { values, capacity };
        if let Some(last) = last_parent(heap.len()) {
            for i in (0..=last).rev() {
                heap.sift_down(i);
            }
        }
        heap
    }

    pub fn top(&self) -> Result<&T, HeapError<T>> {
        self.values.first().ok_or(HeapError::EmptyContainer)
    }

    /// Removes and returns the greatest element.
    pub fn extract_top(&mut self) -> Result<T, HeapError<T>> {
        if self.values.is_empty() {
            return Err(HeapError::EmptyContainer);
        }
        // The last leaf fills the vacated root.
        let top = self.values.swap_remove(0);
        if !self.values.is_empty() {
            self.sift_down(0);
        }
        Ok(top)
    }

    /// Inserts `value`, failing without any change if the heap is full. The
    /// rejected value is returned inside the error.
    pub fn insert(&mut self, value: T) -> Result<(), HeapError<T>> {
        if self.is_full() {
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
                value,
            });
        }
        self.values.push(value);
        self.sift_up(self.values.len() - 1);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// The last element takes its place and is sifted whichever way it has
    /// to go, so no sentinel value is needed and `T` may hold its own maximum.
    pub fn remove(&mut self, index: usize) -> Result<T, HeapError<T>> {
        self.check_index(index)?;
        let removed = self.values.swap_remove(index);
        if index < self.values.len() {
            self.resift(index);
        }
        Ok(removed)
    }

    /// Replaces the element at `index` with `value`, restores the heap
    /// property and returns the old element.
    pub fn change_priority(&mut self, index: usize, value: T) -> Result<T, HeapError<T>> {
        self.check_index(index)?;
        let old = mem::replace(&mut self.values[index], value);
        if self.values[index] > old {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        Ok(old)
    }

    /// Index of the first live element equal to `value`.
    ///
    /// This is a linear scan, O(n); the heap keeps no position index.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Live elements in array (level) order.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Consumes the heap, returning its elements greatest first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(value) = self.extract_top() {
            sorted.push(value);
        }
        sorted
    }

    fn check_index(&self, index: usize) -> Result<(), HeapError<T>> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(HeapError::IndexOutOfRange {
                index,
                size: self.values.len(),
            })
        }
    }

    fn resift(&mut self, index: usize) {
        if index > 0 && self.values[index] > self.values[parent(index)] {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.values[parent] < self.values[index] {
                self.values.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.values.len();
        loop {
            let left_idx = left(index);
            let right_idx = right(index);
            if left_idx >= len {
                break;
            }

            let mut greater_idx = left_idx;
            if right_idx < len && self.values[left_idx] < self.values[right_idx] {
                greater_idx = right_idx;
            }

            if self.values[index] < self.values[greater_idx] {
                self.values.swap(index, greater_idx);
                index = greater_idx;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> HeapOps<T> for Heap<T> {
    fn insert(&mut self, value: T) -> Result<(), HeapError<T>> {
        Heap::insert(self, value)
    }

    fn top(&self) -> Result<&T, HeapError<T>> {
        Heap::top(self)
    }

    fn extract_top(&mut self) -> Result<T, HeapError<T>> {
        Heap::extract_top(self)
    }

    fn len(&self) -> usize {
        Heap::len(self)
    }
}

impl<T: Ord> From<Vec<T>> for Heap<T> {
    fn from(values: Vec<T>) -> Self {
        Heap::build(values)
    }
}

impl<T: Ord> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Heap::build(iter.into_iter().collect())
    }
}

impl<'a, T: Ord> IntoIterator for &'a Heap<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Space separated live elements in array order. The tree shape is implied
/// by the index mapping and not drawn.
impl<T: fmt::Display + Ord> fmt::Display for Heap<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.values.iter();
        if let Some(first) = iter.next() {
            write!(fmt, "{}", first)?;
            for value in iter {
                write!(fmt, " {}", value)?;
            }
        }
        Ok(())
    }
}

impl<T: fmt::Debug + Ord> fmt::Debug for Heap<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Heap")
            .field("capacity", &self.capacity)
            .field("len", &self.values.len())
            .field("elements", &self.values)
            .finish()
    }
}
