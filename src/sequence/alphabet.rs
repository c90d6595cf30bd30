//! Amino acid letter encoding
//!
//! Letters are stored as small integers in NCBI order `ARNDCQEGHILKMFPSTWYVBJZX*`.
//! Anything that is not a known residue becomes the mask letter `X`.

/// Canonical letter order
pub const AMINO_ACIDS: &[u8] = b"ARNDCQEGHILKMFPSTWYVBJZX*";

/// Encoded `X`, also used for masked residues
pub const MASK_LETTER: u8 = 23;

/// Encoded stop codon `*`
pub const STOP_LETTER: u8 = 24;

/// Separator between sequences in a packed collection. Never a valid letter.
pub const DELIMITER: u8 = 0xFF;

static ASCII_TO_LETTER: [u8; 256] = {
    let mut table = [MASK_LETTER; 256];
    let mut i = 0;
    while i < AMINO_ACIDS.len() {
        let c = AMINO_ACIDS[i];
        table[c as usize] = i as u8;
        if c.is_ascii_uppercase() {
            table[(c + 32) as usize] = i as u8;
        }
        i += 1;
    }
    table
};

/// Encode one ASCII residue.
#[inline]
pub fn encode(residue: u8) -> u8 {
    ASCII_TO_LETTER[residue as usize]
}

/// Encode an ASCII protein sequence.
pub fn encode_seq(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(|&c| encode(c)).collect()
}

/// Decode one letter back to ASCII. The delimiter and unknown codes decode to `-`.
#[inline]
pub fn decode(letter: u8) -> u8 {
    AMINO_ACIDS.get(letter as usize).copied().unwrap_or(b'-')
}
