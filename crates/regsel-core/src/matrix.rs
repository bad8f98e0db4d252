use crate::dtype::Float;
use crate::error::{MatrixError, MatrixResult};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense 2-D matrix, the numeric workhorse of regsel.
///
/// Stores data in a flat contiguous `Vec<T>` with row-major (C-order) layout.
/// Rows are samples and columns are variables everywhere in the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Float")]
pub struct Matrix<T: Float> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

// ─── Construction ───────────────────────────────────────────────────────────

impl<T: Float> Matrix<T> {
    /// Create a matrix from row-major data and its shape.
    pub fn new(data: Vec<T>, rows: usize, cols: usize) -> MatrixResult<Self> {
        if data.len() != rows * cols {
            return Err(MatrixError::ShapeMismatch {
                expected: (rows, cols),
                got: (data.len(), 1),
            });
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Create a matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![T::ZERO; rows * cols],
            rows,
            cols,
        }
    }

    /// Identity matrix of size n×n.
    pub fn eye(n: usize) -> Self {
        let mut m = Matrix::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::ONE;
        }
        m
    }

    /// Create a matrix from a slice of rows.
    pub fn from_rows(rows: &[Vec<T>]) -> MatrixResult<Self> {
        if rows.is_empty() {
            return Ok(Matrix::zeros(0, 0));
        }
        let cols = rows[0].len();
        if rows.iter().any(|r| r.len() != cols) {
            return Err(MatrixError::InvalidOperation(
                "All rows must have the same number of columns".to_string(),
            ));
        }
        let flat: Vec<T> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Matrix::new(flat, rows.len(), cols)
    }

    /// Create a matrix from a slice of columns.
    pub fn from_columns(columns: &[Vec<T>]) -> MatrixResult<Self> {
        if columns.is_empty() {
            return Ok(Matrix::zeros(0, 0));
        }
        let rows = columns[0].len();
        if columns.iter().any(|c| c.len() != rows) {
            return Err(MatrixError::InvalidOperation(
                "All columns must have the same number of rows".to_string(),
            ));
        }
        let cols = columns.len();
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for column in columns {
                data.push(column[i]);
            }
        }
        Matrix::new(data, rows, cols)
    }

    // ─── Accessors ──────────────────────────────────────────────────────────

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    fn check_index(&self, i: usize, j: usize) -> MatrixResult<()> {
        if i >= self.rows {
            return Err(MatrixError::IndexOutOfBounds {
                index: i,
                axis: 0,
                size: self.rows,
            });
        }
        if j >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                index: j,
                axis: 1,
                size: self.cols,
            });
        }
        Ok(())
    }

    pub fn get(&self, i: usize, j: usize) -> MatrixResult<T> {
        self.check_index(i, j)?;
        Ok(self.data[i * self.cols + j])
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) -> MatrixResult<()> {
        self.check_index(i, j)?;
        self.data[i * self.cols + j] = value;
        Ok(())
    }

    /// Borrow row `i`.
    pub fn row(&self, i: usize) -> MatrixResult<&[T]> {
        if i >= self.rows {
            return Err(MatrixError::IndexOutOfBounds {
                index: i,
                axis: 0,
                size: self.rows,
            });
        }
        let start = i * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Copy out column `j`.
    pub fn col(&self, j: usize) -> MatrixResult<Vec<T>> {
        if j >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                index: j,
                axis: 1,
                size: self.cols,
            });
        }
        Ok((0..self.rows).map(|i| self.data[i * self.cols + j]).collect())
    }

    // ─── Selection ──────────────────────────────────────────────────────────

    /// Gather rows in the order given by `indices`.
    pub fn select_rows(&self, indices: &[usize]) -> MatrixResult<Matrix<T>> {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &i in indices {
            data.extend_from_slice(self.row(i)?);
        }
        Matrix::new(data, indices.len(), self.cols)
    }

    /// Gather columns in the order given by `indices`.
    pub fn select_columns(&self, indices: &[usize]) -> MatrixResult<Matrix<T>> {
        if let Some(&bad) = indices.iter().find(|&&j| j >= self.cols) {
            return Err(MatrixError::IndexOutOfBounds {
                index: bad,
                axis: 1,
                size: self.cols,
            });
        }
        let mut data = Vec::with_capacity(self.rows * indices.len());
        for i in 0..self.rows {
            let base = i * self.cols;
            for &j in indices {
                data.push(self.data[base + j]);
            }
        }
        Matrix::new(data, self.rows, indices.len())
    }

    /// Prepend a column of ones (intercept / bias column).
    pub fn with_leading_ones(&self) -> Matrix<T> {
        let cols = self.cols + 1;
        let mut data = Vec::with_capacity(self.rows * cols);
        for i in 0..self.rows {
            data.push(T::ONE);
            data.extend_from_slice(&self.data[i * self.cols..(i + 1) * self.cols]);
        }
        Matrix {
            data,
            rows: self.rows,
            cols,
        }
    }

    // ─── Arithmetic ─────────────────────────────────────────────────────────

    /// Transpose.
    pub fn t(&self) -> Matrix<T> {
        let mut data = vec![T::ZERO; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix product `self · other`.
    pub fn matmul(&self, other: &Matrix<T>) -> MatrixResult<Matrix<T>> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch(format!(
                "matmul: inner dimensions must match, got {} and {}",
                self.cols, other.rows
            )));
        }
        let (m, k, n) = (self.rows, self.cols, other.cols);
        let mut data = vec![T::ZERO; m * n];
        for i in 0..m {
            for p in 0..k {
                let a = self.data[i * k + p];
                for j in 0..n {
                    data[i * n + j] += a * other.data[p * n + j];
                }
            }
        }
        Matrix::new(data, m, n)
    }

    /// Matrix-vector product `self · v`.
    pub fn matvec(&self, v: &[T]) -> MatrixResult<Vec<T>> {
        if v.len() != self.cols {
            return Err(MatrixError::DimensionMismatch(format!(
                "matvec: matrix has {} columns but vector has {} elements",
                self.cols,
                v.len()
            )));
        }
        if self.cols == 0 {
            return Ok(vec![T::ZERO; self.rows]);
        }
        Ok(self
            .data
            .chunks(self.cols)
            .map(|row| row.iter().zip(v).map(|(&a, &b)| a * b).sum())
            .collect())
    }

    /// Mean of every column.
    pub fn column_means(&self) -> MatrixResult<Vec<T>> {
        if self.rows == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        let mut sums = vec![T::ZERO; self.cols];
        for i in 0..self.rows {
            for (j, s) in sums.iter_mut().enumerate() {
                *s += self.data[i * self.cols + j];
            }
        }
        let n = T::from_usize(self.rows);
        Ok(sums.into_iter().map(|s| s / n).collect())
    }

    /// Subtract `row_vec` from every row.
    pub fn sub_row(&self, row_vec: &[T]) -> MatrixResult<Matrix<T>> {
        if row_vec.len() != self.cols {
            return Err(MatrixError::DimensionMismatch(format!(
                "sub_row: matrix has {} columns but vector has {} elements",
                self.cols,
                row_vec.len()
            )));
        }
        let mut out = self.clone();
        for i in 0..self.rows {
            for (j, &r) in row_vec.iter().enumerate() {
                out.data[i * self.cols + j] -= r;
            }
        }
        Ok(out)
    }
}

// ─── Display ────────────────────────────────────────────────────────────────

impl<T: Float> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "matrix([")?;
        for i in 0..self.rows.min(8) {
            write!(f, "  [")?;
            for j in 0..self.cols.min(8) {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.4}", self.data[i * self.cols + j])?;
            }
            if self.cols > 8 {
                write!(f, ", ...")?;
            }
            writeln!(f, "],")?;
        }
        if self.rows > 8 {
            writeln!(f, "  ...")?;
        }
        write!(f, "], shape=({}, {}))", self.rows, self.cols)
    }
}
