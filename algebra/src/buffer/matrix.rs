//! A small collection of equal-length aligned buffers, addressed as a
//! matrix of `n` rows of `row_len` elements: the "n streams of size L"
//! shape the butterfly kernels consume.

use bytemuck::Zeroable;

use super::AlignedBuffer;
use crate::error::AlgebraError;

/// `n` aligned rows of identical length. Both dimensions are fixed at
/// construction; the matrix owns its rows.
pub struct BufferMatrix<T> {
    rows: Vec<AlignedBuffer<T>>,
    row_len: usize,
}

impl<T: Zeroable + Copy> BufferMatrix<T> {
    /// Allocates `n` zeroed rows of `row_len` elements each.
    pub fn new(n: usize, row_len: usize) -> Self {
        let rows = (0..n).map(|_| AlignedBuffer::new(row_len)).collect();
        BufferMatrix { rows, row_len }
    }

    /// Builds a matrix from pre-allocated rows.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidArgument`] when the rows differ in length.
    pub fn from_rows(rows: Vec<AlignedBuffer<T>>) -> Result<Self, AlgebraError> {
        let row_len = rows.first().map_or(0, AlignedBuffer::size);
        if let Some(bad) = rows.iter().find(|r| r.size() != row_len) {
            return Err(AlgebraError::InvalidArgument(format!(
                "matrix rows must have equal length: {} != {}",
                bad.size(),
                row_len
            )));
        }
        Ok(BufferMatrix { rows, row_len })
    }

    /// Number of rows.
    #[inline]
    pub fn n(&self) -> usize {
        self.rows.len()
    }

    /// Length of every row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    /// The `i`-th row.
    #[inline]
    pub fn get(&self, i: usize) -> &AlignedBuffer<T> {
        &self.rows[i]
    }

    /// The `i`-th row, mutably.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> &mut AlignedBuffer<T> {
        &mut self.rows[i]
    }

    /// Overwrites row `i` from a slice of matching length.
    pub fn copy(&mut self, i: usize, src: &[T]) {
        assert_eq!(src.len(), self.row_len, "row length mismatch");
        self.rows[i].as_mut_slice().copy_from_slice(src);
    }

    /// Fills row `i` with a constant.
    #[inline]
    pub fn fill(&mut self, i: usize, value: T) {
        self.rows[i].fill(value);
    }

    /// Two distinct rows, both mutably. The butterfly kernels pair rows
    /// this way without bounds checks on the hot path.
    ///
    /// # Panics
    ///
    /// Panics when `i == j` or either index is out of range.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut AlignedBuffer<T>, &mut AlignedBuffer<T>) {
        assert_ne!(i, j, "butterfly rows must be distinct");
        if i < j {
            let (head, tail) = self.rows.split_at_mut(j);
            (&mut head[i], &mut tail[0])
        } else {
            let (head, tail) = self.rows.split_at_mut(i);
            (&mut tail[0], &mut head[j])
        }
    }

    /// All rows.
    #[inline]
    pub fn rows(&self) -> &[AlignedBuffer<T>] {
        &self.rows
    }

    /// All rows, mutably.
    #[inline]
    pub fn rows_mut(&mut self) -> &mut [AlignedBuffer<T>] {
        &mut self.rows
    }
}
