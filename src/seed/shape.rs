//! Spaced seed shapes
//!
//! A shape is written as a string of `1` (sampled) and `0` (skipped)
//! positions, e.g. `111101011`. Its length is the window it spans, its weight
//! the number of sampled positions. A shape without `0` is contiguous.

use std::fmt;
use std::ops::Index;

use super::reduction::INVALID;
use crate::error::{Result, SeedError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    code: String,
    positions: Vec<usize>,
    length: usize,
}

impl Shape {
    /// Parse a `0`/`1` shape code. The code has to start and end with `1`.
    pub fn from_code(code: &str) -> Result<Self> {
        let bytes = code.as_bytes();
        if bytes.is_empty() {
            return Err(SeedError::InvalidShape("empty shape".to_string()));
        }
        if let Some(c) = bytes.iter().find(|&&c| c != b'0' && c != b'1') {
            return Err(SeedError::InvalidShape(format!(
                "{}: unexpected character '{}'",
                code, *c as char
            )));
        }
        if bytes[0] != b'1' || bytes[bytes.len() - 1] != b'1' {
            return Err(SeedError::InvalidShape(format!(
                "{}: must start and end with a sampled position",
                code
            )));
        }
        let positions = bytes
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == b'1')
            .map(|(i, _)| i)
            .collect();
        Ok(Self {
            code: code.to_string(),
            positions,
            length: bytes.len(),
        })
    }

    /// Gapless shape of the given length
    pub fn contiguous(length: usize) -> Result<Self> {
        Self::from_code(&"1".repeat(length))
    }

    /// Window span
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of sampled positions
    #[inline]
    pub fn weight(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.weight() == self.length
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Bit mask selecting the sampled letters of a window packed with `bits`
    /// bits per letter, most recent letter in the lowest bits.
    pub fn long_mask(&self, bits: u32) -> u64 {
        let letter_mask = (1u64 << bits) - 1;
        self.positions.iter().fold(0u64, |mask, &p| {
            mask | (letter_mask << ((self.length - 1 - p) as u32 * bits))
        })
    }

    /// Pack the sampled letters of a reduced window into a key.
    ///
    /// `window` starts at the seed offset and must cover the shape. Returns
    /// `None` if any sampled letter is masked.
    #[inline]
    pub fn key(&self, window: &[u8], bits: u32) -> Option<u64> {
        let mut key = 0u64;
        for &p in &self.positions {
            let l = window[p];
            if l == INVALID {
                return None;
            }
            key = (key << bits) | l as u64;
        }
        Some(key)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Ordered set of shapes used for one search
#[derive(Debug, Clone, Default)]
pub struct ShapeTable {
    shapes: Vec<Shape>,
}

/// Spaced shapes used when nothing else is configured
const DEFAULT_SHAPES: &[&str] = &[
    "111101011",
    "11010110111",
    "1110010111",
    "11101100101",
];

impl ShapeTable {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Self> {
        let shapes = codes
            .iter()
            .map(|c| Shape::from_code(c.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { shapes })
    }

    pub fn spaced_default() -> Result<Self> {
        Self::from_codes(DEFAULT_SHAPES)
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.shapes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }
}

impl Index<usize> for ShapeTable {
    type Output = Shape;

    fn index(&self, i: usize) -> &Shape {
        &self.shapes[i]
    }
}
