//! Dataset loading: a pre-encoded named-tensor file read back verbatim, and
//! a raw-text path that encodes line-oriented SMILES into training records.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use safetensors::{Dtype, SafeTensors};

use crate::codec;
use crate::config::DataConfig;
use crate::error::{MolForgeError, Result};
use crate::tensor::Tensor;
use crate::vocab::{Vocabulary, START_SYMBOL};

/// Tensor name of the training split in a packed dataset file.
pub const TRAIN_TENSOR: &str = "data_train";
/// Tensor name of the test split in a packed dataset file.
pub const TEST_TENSOR: &str = "data_test";
/// Tensor name of the stored charset in a packed dataset file.
pub const CHARSET_TENSOR: &str = "charset";

/// Already-tensorized splits plus the charset they were encoded with.
///
/// Pure I/O passthrough: the tensors come back exactly as stored. The
/// charset must accompany the splits; without it the indices inside the
/// tensors are meaningless.
#[derive(Debug, Clone)]
pub struct PackedDataset {
    pub data_train: Option<Tensor>,
    pub data_test: Tensor,
    pub charset: Vec<char>,
}

/// Read a packed dataset from a safetensors file.
///
/// The file must contain `data_test` (F32) and `charset` (U8, one byte per
/// symbol); `data_train` is only required when `with_train` is set. The
/// file is read fully in one scoped open/read/close.
pub fn load_packed<P: AsRef<Path>>(path: P, with_train: bool) -> Result<PackedDataset> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;

    let st = SafeTensors::deserialize(&buffer)
        .map_err(|e| MolForgeError::InvalidDataset(format!("not a safetensors file: {}", e)))?;

    let data_test = f32_tensor(&st, TEST_TENSOR)?;
    let data_train = if with_train {
        Some(f32_tensor(&st, TRAIN_TENSOR)?)
    } else {
        None
    };
    let charset = charset_symbols(&st)?;

    log::debug!(
        "loaded packed dataset: test shape {:?}, {} symbols{}",
        data_test.shape(),
        charset.len(),
        if data_train.is_some() { ", with train split" } else { "" },
    );

    Ok(PackedDataset { data_train, data_test, charset })
}

fn f32_tensor(st: &SafeTensors, name: &str) -> Result<Tensor> {
    let view = st
        .tensor(name)
        .map_err(|e| MolForgeError::InvalidDataset(format!("missing tensor {:?}: {}", name, e)))?;
    if view.dtype() != Dtype::F32 {
        return Err(MolForgeError::InvalidDataset(format!(
            "tensor {:?} has dtype {:?}, expected F32",
            name,
            view.dtype()
        )));
    }
    let data: Vec<f32> = view
        .data()
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    Tensor::from_vec(data, view.shape().to_vec())
}

fn charset_symbols(st: &SafeTensors) -> Result<Vec<char>> {
    let view = st.tensor(CHARSET_TENSOR).map_err(|e| {
        MolForgeError::InvalidDataset(format!("missing tensor {:?}: {}", CHARSET_TENSOR, e))
    })?;
    if view.dtype() != Dtype::U8 {
        return Err(MolForgeError::InvalidDataset(format!(
            "tensor {:?} has dtype {:?}, expected U8",
            CHARSET_TENSOR,
            view.dtype()
        )));
    }
    Ok(view.data().iter().map(|&b| b as char).collect())
}

/// Records encoded from raw text, with drop accounting.
///
/// For each kept line: `inputs[i]` is the start-prefixed, end-padded index
/// sequence, `outputs[i]` the plain end-padded one, and `lengths[i]` the
/// number of meaningful positions (string length plus the start symbol).
/// Lines that did not fit the width or contained a character outside the
/// vocabulary are not silently lost; they are counted per reason.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDataset {
    pub inputs: Vec<Vec<usize>>,
    pub outputs: Vec<Vec<usize>>,
    pub lengths: Vec<usize>,
    pub dropped_too_long: usize,
    pub dropped_unknown: usize,
}

impl RawDataset {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Total lines that were dropped instead of encoded.
    pub fn dropped(&self) -> usize {
        self.dropped_too_long + self.dropped_unknown
    }
}

/// Encode raw lines into training records against an extracted vocabulary.
///
/// A line survives the length filter when it fits in `max_seq_len` with
/// room for the start and end symbols. Both the start-prefixed and the
/// plain form must encode cleanly; a lookup failure in either drops the
/// record and bumps `dropped_unknown`.
pub fn encode_records<S: AsRef<str>>(
    lines: &[S],
    max_seq_len: usize,
    vocab: &Vocabulary,
) -> RawDataset {
    let mut ds = RawDataset::default();

    for line in lines {
        let s = line.as_ref();
        let n = s.chars().count();
        if n >= max_seq_len.saturating_sub(2) {
            ds.dropped_too_long += 1;
            continue;
        }

        let prefixed = format!("{}{}", START_SYMBOL, s);
        let input = match codec::encode_indices(&prefixed, vocab, max_seq_len) {
            Ok(v) => v,
            Err(_) => {
                ds.dropped_unknown += 1;
                continue;
            }
        };
        let output = match codec::encode_indices(s, vocab, max_seq_len) {
            Ok(v) => v,
            Err(_) => {
                ds.dropped_unknown += 1;
                continue;
            }
        };

        ds.inputs.push(input);
        ds.outputs.push(output);
        ds.lengths.push(n + 1);
    }

    log::info!(
        "encoded {} records ({} dropped: {} too long, {} unknown symbol)",
        ds.len(),
        ds.dropped(),
        ds.dropped_too_long,
        ds.dropped_unknown,
    );

    ds
}

/// [`encode_records`] over the lines of a file, width taken from `config`.
pub fn load_raw<P: AsRef<Path>>(
    path: P,
    config: &DataConfig,
    vocab: &Vocabulary,
) -> Result<RawDataset> {
    let content = std::fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().collect();
    Ok(encode_records(&lines, config.max_seq_len, vocab))
}
