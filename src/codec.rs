//! String <-> fixed-width tensor conversions.
//!
//! Encoding right-pads with the vocabulary's pad symbol to the requested
//! width and maps characters to indices; decoding maps back and trims
//! trailing whitespace so space-padded sequences read as plain strings.
//! One explicit policy per direction: encoding an unknown character and
//! decoding an out-of-range index are both errors, never silent.

use rand::Rng;

use crate::error::{MolForgeError, Result};
use crate::sampling;
use crate::vocab::Vocabulary;

/// Encode a string as a fixed-width vector of vocabulary indices.
///
/// The string is right-padded with the pad symbol to exactly `width`
/// characters. Strings longer than `width` are rejected; callers filter by
/// length before encoding.
pub fn encode_indices(s: &str, vocab: &Vocabulary, width: usize) -> Result<Vec<usize>> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > width {
        return Err(MolForgeError::SequenceLengthExceeded {
            max: width,
            actual: chars.len(),
        });
    }
    let pad = vocab.pad_symbol();
    let pad_index = vocab
        .pad_index()
        .ok_or(MolForgeError::UnknownSymbol { symbol: pad })?;

    let mut indices = Vec::with_capacity(width);
    for c in chars {
        let i = vocab
            .index_of(c)
            .ok_or(MolForgeError::UnknownSymbol { symbol: c })?;
        indices.push(i);
    }
    indices.resize(width, pad_index);
    Ok(indices)
}

/// Encode a string as a `width x |vocab|` one-hot matrix.
pub fn encode_one_hot(s: &str, vocab: &Vocabulary, width: usize) -> Result<Vec<Vec<f32>>> {
    let indices = encode_indices(s, vocab, width)?;
    Ok(indices
        .into_iter()
        .map(|i| one_hot_row(i, vocab.len()))
        .collect())
}

/// A one-hot row of length `n` with position `index` active.
///
/// An out-of-range index yields the all-zero "no symbol" row rather than
/// panicking; [`active_index`] reports that row as `None`.
pub fn one_hot_row(index: usize, n: usize) -> Vec<f32> {
    let mut row = vec![0.0; n];
    if index < n {
        row[index] = 1.0;
    }
    row
}

/// Position of the unique `1.0` entry in a one-hot row, or `None` for the
/// all-zero row.
pub fn active_index(row: &[f32]) -> Option<usize> {
    row.iter().position(|&v| v == 1.0)
}

/// Decode a vector of vocabulary indices back to a string.
///
/// Trailing whitespace is trimmed, which strips the padding of sequences
/// encoded against a space-padded charset. Out-of-range indices are an
/// error, never clamped.
pub fn decode_indices(indices: &[usize], vocab: &Vocabulary) -> Result<String> {
    let mut s = String::with_capacity(indices.len());
    for &i in indices {
        let c = vocab.symbol_at(i).ok_or(MolForgeError::IndexOutOfRange {
            index: i,
            vocab_size: vocab.len(),
        })?;
        s.push(c);
    }
    Ok(s.trim_end().to_string())
}

/// Decode per-position weight rows by sampling instead of argmax.
///
/// Each row is treated as an unnormalized categorical distribution over the
/// vocabulary and one symbol is drawn per row through the caller's `rng`,
/// producing diverse outputs where argmax would always pick the mode. The
/// result is not trimmed; pad draws appear verbatim.
pub fn decode_stochastic<R: Rng>(
    rows: &[Vec<f32>],
    vocab: &Vocabulary,
    rng: &mut R,
) -> Result<String> {
    let mut s = String::with_capacity(rows.len());
    for row in rows {
        let i = sampling::sample_weighted(row, rng)?;
        let c = vocab.symbol_at(i).ok_or(MolForgeError::IndexOutOfRange {
            index: i,
            vocab_size: vocab.len(),
        })?;
        s.push(c);
    }
    Ok(s)
}
