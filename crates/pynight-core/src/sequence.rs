//! A list-backed wrapper that speaks the container protocol
//!
//! [`SequenceWrapper`] overloads `[]` and `+`. Checked access goes through
//! [`SequenceLike`]; `Index`/`IndexMut` keep the native panicking bounds
//! check of the underlying `Vec`.

use crate::error::{DemoError, DemoResult};
use std::fmt;
use std::ops::{Add, Index, IndexMut};

/// Capability: a sized, indexable, writable sequence
pub trait SequenceLike<T> {
    /// Number of elements
    fn len(&self) -> usize;

    /// Whether there are no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checked indexed read
    ///
    /// # Errors
    /// [`DemoError::IndexOutOfRange`] when `index >= len()`.
    fn get(&self, index: usize) -> DemoResult<&T>;

    /// Checked indexed write, in place
    ///
    /// # Errors
    /// [`DemoError::IndexOutOfRange`] when `index >= len()`.
    fn set(&mut self, index: usize, value: T) -> DemoResult<()>;
}

/// Ordered values supplied at construction
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SequenceWrapper<T> {
    items: Vec<T>,
}

impl<T> SequenceWrapper<T> {
    /// Wrap `items`
    #[inline]
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Borrowing iterator
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Underlying elements
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Give back the owned storage
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> SequenceLike<T> for SequenceWrapper<T> {
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> DemoResult<&T> {
        self.items
            .get(index)
            .ok_or_else(|| DemoError::out_of_range(index, self.items.len()))
    }

    fn set(&mut self, index: usize, value: T) -> DemoResult<()> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| DemoError::out_of_range(index, len))?;
        *slot = value;
        Ok(())
    }
}

impl<T> From<Vec<T>> for SequenceWrapper<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for SequenceWrapper<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a SequenceWrapper<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Index<usize> for SequenceWrapper<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for SequenceWrapper<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

/// Concatenation yields a plain `Vec`, not another wrapper
impl<T: Clone> Add for &SequenceWrapper<T> {
    type Output = Vec<T>;

    fn add(self, other: Self) -> Vec<T> {
        self.items.iter().chain(&other.items).cloned().collect()
    }
}

impl<T: fmt::Display> fmt::Display for SequenceWrapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_get_set() {
        let mut seq = SequenceWrapper::new(vec![1, 2, 3]);
        assert_eq!(seq.len(), 3);
        assert_eq!(*seq.get(1).unwrap(), 2);

        seq.set(0, 9).unwrap();
        assert_eq!(*seq.get(0).unwrap(), 9);
    }

    #[test]
    fn checked_access_out_of_range() {
        let mut seq = SequenceWrapper::new(vec!['a']);
        assert!(matches!(
            seq.get(1),
            Err(DemoError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(seq.set(5, 'z').is_err());
        assert_eq!(seq.as_slice(), &['a']);
    }

    #[test]
    fn index_operators() {
        let mut seq: SequenceWrapper<_> = (1..=3).collect();
        seq[2] = 30;
        assert_eq!(seq[2], 30);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_panics_natively() {
        let seq = SequenceWrapper::new(vec![1, 2, 3]);
        let _value = seq[3];
    }

    // `+` returns a Vec rather than a SequenceWrapper; kept as-is.
    #[test]
    fn add_returns_plain_vec() {
        let a = SequenceWrapper::new(vec![1, 2]);
        let b = SequenceWrapper::from(vec![3]);
        let joined: Vec<i32> = &a + &b;
        assert_eq!(joined, vec![1, 2, 3]);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn display_like_a_list() {
        let seq = SequenceWrapper::new(vec![1, 2, 3]);
        assert_eq!(seq.to_string(), "[1, 2, 3]");
        assert_eq!(SequenceWrapper::<u8>::default().to_string(), "[]");
    }

    #[test]
    fn empty_wrapper() {
        let seq = SequenceWrapper::<i32>::new(Vec::new());
        assert!(seq.is_empty());
        assert_eq!(seq.iter().count(), 0);
    }
}
