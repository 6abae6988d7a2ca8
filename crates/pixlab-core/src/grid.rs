//! Fixed-rank 3-D array container
//!
//! `Array3` is an owned rank-3 grid with row-major layout: the last index
//! varies fastest, so iterating `(i, j, k)` in lexicographic order walks
//! the backing slice front to back.

use std::ops::{Index, IndexMut};

/// Owned rank-3 array with extents fixed at construction
#[derive(Debug, Clone, PartialEq)]
pub struct Array3<T> {
    extents: (usize, usize, usize),
    data: Vec<T>,
}

impl<T: Clone + Default> Array3<T> {
    /// Allocate a `d0 x d1 x d2` array filled with `T::default()`
    pub fn new(d0: usize, d1: usize, d2: usize) -> Self {
        Self {
            extents: (d0, d1, d2),
            data: vec![T::default(); d0 * d1 * d2],
        }
    }
}

impl<T> Array3<T> {
    /// Build an array by evaluating `f` at every index in lexicographic order
    pub fn from_fn<F>(d0: usize, d1: usize, d2: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(d0 * d1 * d2);
        for i in 0..d0 {
            for j in 0..d1 {
                for k in 0..d2 {
                    data.push(f(i, j, k));
                }
            }
        }
        Self {
            extents: (d0, d1, d2),
            data,
        }
    }

    /// Extents as `(d0, d1, d2)`
    pub fn extents(&self) -> (usize, usize, usize) {
        self.extents
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Backing storage in row-major order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn offset(&self, i: usize, j: usize, k: usize) -> Option<usize> {
        let (d0, d1, d2) = self.extents;
        if i < d0 && j < d1 && k < d2 {
            Some((i * d1 + j) * d2 + k)
        } else {
            None
        }
    }

    /// Checked element access
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<&T> {
        self.offset(i, j, k).map(|off| &self.data[off])
    }

    /// Checked mutable element access
    pub fn get_mut(&mut self, i: usize, j: usize, k: usize) -> Option<&mut T> {
        self.offset(i, j, k).map(move |off| &mut self.data[off])
    }
}

impl<T> Index<(usize, usize, usize)> for Array3<T> {
    type Output = T;

    fn index(&self, (i, j, k): (usize, usize, usize)) -> &T {
        self.get(i, j, k).unwrap_or_else(|| {
            panic!(
                "Array3 index ({}, {}, {}) out of bounds {:?}",
                i, j, k, self.extents
            )
        })
    }
}

impl<T> IndexMut<(usize, usize, usize)> for Array3<T> {
    fn index_mut(&mut self, (i, j, k): (usize, usize, usize)) -> &mut T {
        let extents = self.extents;
        self.get_mut(i, j, k).unwrap_or_else(|| {
            panic!(
                "Array3 index ({}, {}, {}) out of bounds {:?}",
                i, j, k, extents
            )
        })
    }
}
