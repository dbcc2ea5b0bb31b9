use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::config::FormatConfig;
use crate::error::{LinAlgError, Result, Shape};
use crate::math::vector::{dot, Vector};

/// A dense `rows x cols` matrix of `f64` values stored in row-major order.
///
/// Both dimensions are at least 1 and fixed for the lifetime of the matrix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix", into = "RawMatrix")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Unvalidated serialized form of a [`Matrix`].
#[derive(Serialize, Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Allocate a zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = check_shape(rows, cols)?;
        Ok(Self {
            data: vec![0.0; len],
            rows,
            cols,
        })
    }

    /// Build a matrix from row-major `data`, which must hold exactly
    /// `rows * cols` values.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        let len = check_shape(rows, cols)?;
        if data.len() != len {
            return Err(LinAlgError::DimensionMismatch {
                op: "build a matrix from",
                lhs: Shape::Matrix(rows, cols),
                rhs: Shape::Vector(data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Stack vectors of equal dimension as the rows of a new matrix.
    pub fn from_rows(rows: &[Vector]) -> Result<Self> {
        let first = rows
            .first()
            .ok_or(LinAlgError::InvalidDimension(Shape::Matrix(0, 0)))?;
        let cols = first.dimension();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.dimension() != cols {
                return Err(LinAlgError::DimensionMismatch {
                    op: "stack",
                    lhs: Shape::Vector(cols),
                    rhs: Shape::Vector(row.dimension()),
                });
            }
            data.extend_from_slice(row.as_slice());
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Square matrix with ones on the diagonal and zeros elsewhere.
    pub fn identity(dim: usize) -> Result<Self> {
        let mut identity = Self::new(dim, dim)?;
        for diag in 0..dim {
            let offset = identity.offset(diag, diag);
            identity.data[offset] = 1.0;
        }
        Ok(identity)
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_index(row, col)?;
        Ok(self.data[self.offset(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_index(row, col)?;
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(())
    }

    /// Copy of row `row` as a vector of dimension `num_cols()`.
    pub fn row(&self, row: usize) -> Result<Vector> {
        if row >= self.rows {
            return Err(LinAlgError::IndexOutOfBounds {
                index: Shape::Vector(row),
                bounds: Shape::Vector(self.rows),
            });
        }
        Vector::from_vec(self.row_slice(row).to_vec())
    }

    /// Copy of column `col` as a vector of dimension `num_rows()`.
    pub fn column(&self, col: usize) -> Result<Vector> {
        if col >= self.cols {
            return Err(LinAlgError::IndexOutOfBounds {
                index: Shape::Vector(col),
                bounds: Shape::Vector(self.cols),
            });
        }
        Vector::from_vec((0..self.rows).map(|row| self[(row, col)]).collect())
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0.0; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[self.offset(i, j)];
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Standard matrix product `m1 * m2`.
    pub fn multiply(m1: &Matrix, m2: &Matrix) -> Result<Matrix> {
        if m1.cols != m2.rows {
            return Err(LinAlgError::DimensionMismatch {
                op: "multiply",
                lhs: Shape::Matrix(m1.rows, m1.cols),
                rhs: Shape::Matrix(m2.rows, m2.cols),
            });
        }
        log::debug!(
            "multiplying ({}, {}) by ({}, {})",
            m1.rows,
            m1.cols,
            m2.rows,
            m2.cols
        );

        let mut product = vec![0.0; m1.rows * m2.cols];
        for i in 0..m1.rows {
            let lhs = m1.row_slice(i);
            for j in 0..m2.cols {
                product[i * m2.cols + j] = lhs
                    .iter()
                    .enumerate()
                    .map(|(k, a)| a * m2.data[m2.offset(k, j)])
                    .sum();
            }
        }
        Ok(Matrix {
            data: product,
            rows: m1.rows,
            cols: m2.cols,
        })
    }

    /// Product of `m` with `v` treated as a column vector.
    pub fn multiply_vector(m: &Matrix, v: &Vector) -> Result<Vector> {
        if m.cols != v.dimension() {
            return Err(LinAlgError::DimensionMismatch {
                op: "multiply",
                lhs: Shape::Matrix(m.rows, m.cols),
                rhs: Shape::Vector(v.dimension()),
            });
        }
        log::debug!(
            "multiplying ({}, {}) by vector of dimension {}",
            m.rows,
            m.cols,
            v.dimension()
        );

        let product = (0..m.rows)
            .map(|i| dot(m.row_slice(i), v.as_slice()))
            .collect();
        Vector::from_vec(product)
    }

    /// Render one bracketed row per line using the given scalar layout.
    pub fn render(&self, config: &FormatConfig) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_with(&mut out, config);
        out
    }

    fn write_with<W: fmt::Write>(&self, out: &mut W, config: &FormatConfig) -> fmt::Result {
        for row in 0..self.rows {
            out.write_char('[')?;
            for &value in self.row_slice(row) {
                config.write_value(out, value)?;
            }
            out.write_str(" ]\n")?;
        }
        Ok(())
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(LinAlgError::IndexOutOfBounds {
                index: Shape::Matrix(row, col),
                bounds: Shape::Matrix(self.rows, self.cols),
            });
        }
        Ok(())
    }
}

/// Validate a requested shape and return the number of elements it holds.
fn check_shape(rows: usize, cols: usize) -> Result<usize> {
    match rows.checked_mul(cols) {
        Some(len) if len > 0 => Ok(len),
        _ => Err(LinAlgError::InvalidDimension(Shape::Matrix(rows, cols))),
    }
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = LinAlgError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Matrix::from_shape_vec((raw.rows, raw.cols), raw.data)
    }
}

impl From<Matrix> for RawMatrix {
    fn from(m: Matrix) -> Self {
        RawMatrix {
            rows: m.rows,
            cols: m.cols,
            data: m.data,
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        &self.data[self.offset(index.0, index.1)]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &FormatConfig::default())
    }
}
