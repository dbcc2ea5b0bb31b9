use std::fmt;
use std::ops::Index;
use std::slice::Iter;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::FormatConfig;
use crate::error::{LinAlgError, Result, Shape};

/// A dense, fixed-length vector of `f64` values.
///
/// The dimension is always at least 1 and only changes through
/// [`Vector::resize`]. Element access is bounds-checked and reports
/// [`LinAlgError::IndexOutOfBounds`] instead of panicking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Allocate a zero-filled vector of dimension `dim`.
    pub fn new(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(LinAlgError::InvalidDimension(Shape::Vector(dim)));
        }
        Ok(Self {
            data: vec![0.0; dim],
        })
    }

    pub fn from_vec(data: Vec<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(LinAlgError::InvalidDimension(Shape::Vector(0)));
        }
        Ok(Self { data })
    }

    /// Parse a literal such as `"[ -1.2 2.0 3.1 ]"`.
    ///
    /// Tokens are separated by whitespace; the first must be `[` and the last
    /// `]`, and every token in between must parse as an `f64`.
    pub fn parse(literal: &str) -> Result<Self> {
        let tokens: Vec<&str> = literal.split_whitespace().collect();
        let (first, last) = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) if tokens.len() >= 2 => (*first, *last),
            _ => return Err(malformed(literal, None)),
        };
        if first != "[" || last != "]" {
            return Err(malformed(literal, None));
        }

        let values = tokens[1..tokens.len() - 1]
            .iter()
            .map(|&token| {
                token
                    .parse::<f64>()
                    .map_err(|_| malformed(literal, Some(token)))
            })
            .collect::<Result<Vec<f64>>>()?;

        log::trace!("parsed vector literal of dimension {}", values.len());
        Self::from_vec(values)
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.data[index])
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        self.check_index(index)?;
        self.data[index] = value;
        Ok(())
    }

    /// Change the dimension of this vector.
    ///
    /// Growing appends zeros; shrinking discards the trailing values.
    pub fn resize(&mut self, new_dim: usize) -> Result<()> {
        if new_dim == 0 {
            return Err(LinAlgError::InvalidDimension(Shape::Vector(new_dim)));
        }
        if new_dim != self.data.len() {
            log::debug!("resizing vector from {} to {}", self.data.len(), new_dim);
            self.data.resize(new_dim, 0.0);
            self.data.shrink_to_fit();
        }
        Ok(())
    }

    pub fn scalar_add_in_place(&mut self, d: f64) {
        self.data.iter_mut().for_each(|v| *v += d);
    }

    pub fn scalar_add(&self, d: f64) -> Vector {
        let mut result = self.clone();
        result.scalar_add_in_place(d);
        result
    }

    pub fn scalar_mult_in_place(&mut self, d: f64) {
        self.data.iter_mut().for_each(|v| *v *= d);
    }

    pub fn scalar_mult(&self, d: f64) -> Vector {
        let mut result = self.clone();
        result.scalar_mult_in_place(d);
        result
    }

    pub fn elementwise_add_in_place(&mut self, other: &Vector) -> Result<()> {
        self.check_same_dimension("elementwise add", other)?;
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += b;
        }
        Ok(())
    }

    pub fn elementwise_add(&self, other: &Vector) -> Result<Vector> {
        let mut result = self.clone();
        result.elementwise_add_in_place(other)?;
        Ok(result)
    }

    pub fn elementwise_mult_in_place(&mut self, other: &Vector) -> Result<()> {
        self.check_same_dimension("elementwise multiply", other)?;
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a *= b;
        }
        Ok(())
    }

    pub fn elementwise_mult(&self, other: &Vector) -> Result<Vector> {
        let mut result = self.clone();
        result.elementwise_mult_in_place(other)?;
        Ok(result)
    }

    /// Sum of the pairwise products of `v1` and `v2`.
    pub fn inner_product(v1: &Vector, v2: &Vector) -> Result<f64> {
        v1.check_same_dimension("take the inner product of", v2)?;
        Ok(dot(&v1.data, &v2.data))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Render as `[ v1 v2 ... ]` using the given scalar layout.
    pub fn render(&self, config: &FormatConfig) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_with(&mut out, config);
        out
    }

    fn write_with<W: fmt::Write>(&self, out: &mut W, config: &FormatConfig) -> fmt::Result {
        out.write_char('[')?;
        for &value in self.data.iter() {
            config.write_value(out, value)?;
        }
        out.write_str(" ]")
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.data.len() {
            return Err(LinAlgError::IndexOutOfBounds {
                index: Shape::Vector(index),
                bounds: Shape::Vector(self.data.len()),
            });
        }
        Ok(())
    }

    fn check_same_dimension(&self, op: &'static str, other: &Vector) -> Result<()> {
        if self.data.len() != other.data.len() {
            return Err(LinAlgError::DimensionMismatch {
                op,
                lhs: Shape::Vector(self.data.len()),
                rhs: Shape::Vector(other.data.len()),
            });
        }
        Ok(())
    }
}

pub(crate) fn dot(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

fn malformed(literal: &str, token: Option<&str>) -> LinAlgError {
    LinAlgError::MalformedLiteral {
        literal: literal.to_string(),
        token: token.map(str::to_string),
    }
}

impl FromStr for Vector {
    type Err = LinAlgError;

    fn from_str(s: &str) -> Result<Self> {
        Vector::parse(s)
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = LinAlgError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        Vector::from_vec(value)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &FormatConfig::default())
    }
}
