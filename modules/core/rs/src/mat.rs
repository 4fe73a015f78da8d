use std::ops::{Index, IndexMut};

use derive_getters::Dissolve;
use eyre::{eyre, Result};
use num::Zero;

/// Mat is a dense row-major matrix.
/// It's not represented as a Vec of Vecs for a couple of reasons:
/// - Prohibit ragged shapes at construction time
/// - Keep the backing storage flat so that scans are tight loops over a single Vec
#[derive(Clone, PartialEq, Eq, Debug, Dissolve)]
pub struct Mat<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Mat<T> {
    /// Build a matrix filled with copies of the given value.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Build a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self::filled(rows, cols, T::zero())
    }

    /// Build a matrix from nested rows. All rows must be of equal length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |x| x.len());
        if rows.iter().any(|x| x.len() != ncols) {
            return Err(eyre!("Ragged rows are not a valid matrix"));
        }

        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            data.extend(row);
        }
        Ok(Self {
            rows: nrows,
            cols: ncols,
            data,
        })
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(&self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Iterate over all values in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Coordinates of the maximum value, or None for an empty matrix. Ties are
    /// resolved towards the first occurrence in row-major order, which keeps
    /// the result deterministic.
    pub fn argmax(&self) -> Option<(usize, usize)>
    where
        T: PartialOrd,
    {
        if self.is_empty() {
            return None;
        }

        let mut best = 0;
        for (ind, value) in self.data.iter().enumerate() {
            if *value > self.data[best] {
                best = ind;
            }
        }
        Some((best / self.cols, best % self.cols))
    }
}

impl<T> Index<(usize, usize)> for Mat<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Mat<T> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Mat<T> {
    type Error = eyre::Report;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}
