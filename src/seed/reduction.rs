//! Alphabet reduction
//!
//! Seeds are built over a reduced alphabet in which similar amino acids share
//! one code. Every code fits into `bit_size()` bits; letters outside of all
//! groups (ambiguity codes, `X`, stop, the delimiter) reduce to [`INVALID`] and
//! never take part in a seed.

use crate::error::{Result, SeedError};
use crate::sequence::alphabet::{self, AMINO_ACIDS};

/// Reduced code of a letter that must not be part of a seed
pub const INVALID: u8 = 0xFF;

/// Number of unambiguous amino acids at the front of the alphabet
const STANDARD_LETTERS: u8 = 20;

const DEFAULT_GROUPS: &str = "KREDQN C G H M F Y ILV W P STA";

#[derive(Debug, Clone)]
pub struct Reduction {
    map: [u8; 256],
    groups: Vec<String>,
    bits: u32,
}

impl Reduction {
    /// Build a reduction from whitespace separated residue groups, e.g.
    /// `"KR ED ILV"`. Amino acids not listed reduce to [`INVALID`].
    pub fn from_groups(spec: &str) -> Result<Self> {
        let mut map = [INVALID; 256];
        let mut groups = Vec::new();
        for (code, group) in spec.split_whitespace().enumerate() {
            for &residue in group.as_bytes() {
                let letter = alphabet::encode(residue.to_ascii_uppercase());
                if letter >= STANDARD_LETTERS {
                    return Err(SeedError::InvalidReduction(format!(
                        "'{}' is not a standard amino acid",
                        residue as char
                    )));
                }
                if map[letter as usize] != INVALID {
                    return Err(SeedError::InvalidReduction(format!(
                        "'{}' appears in more than one group",
                        residue as char
                    )));
                }
                map[letter as usize] = code as u8;
            }
            groups.push(group.to_ascii_uppercase());
        }
        if groups.is_empty() {
            return Err(SeedError::InvalidReduction("no groups".to_string()));
        }
        if groups.len() > u8::MAX as usize {
            return Err(SeedError::InvalidReduction(format!("{} groups", groups.len())));
        }
        let bits = bits_for(groups.len());
        Ok(Self { map, groups, bits })
    }

    /// 11-group reduction, 4 bits per letter
    pub fn diamond_default() -> Result<Self> {
        Self::from_groups(DEFAULT_GROUPS)
    }

    /// No reduction: every standard amino acid is its own group (5 bits).
    pub fn identity() -> Self {
        let mut map = [INVALID; 256];
        let mut groups = Vec::with_capacity(STANDARD_LETTERS as usize);
        for letter in 0..STANDARD_LETTERS {
            map[letter as usize] = letter;
            groups.push((AMINO_ACIDS[letter as usize] as char).to_string());
        }
        Self {
            map,
            groups,
            bits: bits_for(STANDARD_LETTERS as usize),
        }
    }

    /// Number of groups
    pub fn size(&self) -> usize {
        self.groups.len()
    }

    /// Bits needed to store one reduced letter
    #[inline]
    pub fn bit_size(&self) -> u32 {
        self.bits
    }

    #[inline]
    pub fn reduce(&self, letter: u8) -> u8 {
        self.map[letter as usize]
    }

    /// Reduce `seq` into `buf`, reusing its allocation.
    pub fn reduce_seq(&self, seq: &[u8], buf: &mut Vec<u8>) {
        buf.clear();
        buf.extend(seq.iter().map(|&l| self.map[l as usize]));
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}

impl std::fmt::Display for Reduction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.groups.join(" "))
    }
}

fn bits_for(groups: usize) -> u32 {
    if groups <= 2 {
        return 1;
    }
    usize::BITS - (groups - 1).leading_zeros()
}
