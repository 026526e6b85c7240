use molforge::dataset::{self, CHARSET_TENSOR, TEST_TENSOR, TRAIN_TENSOR};
use molforge::{DataConfig, Vocabulary};

use safetensors::tensor::{Dtype, TensorView};
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

fn f32_bytes(data: &[f32]) -> Vec<u8> {
    data.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Write a packed dataset fixture: a train split, a test split and the
/// charset the splits were encoded with.
fn write_fixture(path: &std::path::Path) {
    // charset ['a', 'b', ' ', 'X']; one-hot width 4.
    let charset = b"ab X";

    // data_test: 1 sequence of 2 positions -> ['a', 'b']
    let test_data = f32_bytes(&[
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0,
    ]);
    // data_train: 2 sequences of 2 positions -> ['b', ' '], ['a', 'a']
    let train_data = f32_bytes(&[
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        1.0, 0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, 0.0,
    ]);

    let test_view = TensorView::new(Dtype::F32, vec![1, 2, 4], &test_data).expect("test view");
    let train_view = TensorView::new(Dtype::F32, vec![2, 2, 4], &train_data).expect("train view");
    let charset_view = TensorView::new(Dtype::U8, vec![4], charset).expect("charset view");

    let tensors = HashMap::from([
        (TEST_TENSOR.to_string(), test_view),
        (TRAIN_TENSOR.to_string(), train_view),
        (CHARSET_TENSOR.to_string(), charset_view),
    ]);
    let tensor_list: Vec<(&str, &TensorView)> =
        tensors.iter().map(|(k, v)| (k.as_str(), v)).collect();
    let serialized = safetensors::serialize(tensor_list, &None).expect("serialize fixture");

    let mut file = File::create(path).unwrap();
    file.write_all(&serialized).unwrap();
}

#[test]
fn test_load_packed_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dataset.safetensors");
    write_fixture(&path);

    let ds = dataset::load_packed(&path, true).expect("load packed");

    assert_eq!(ds.data_test.shape(), &[1, 2, 4]);
    let train = ds.data_train.expect("train split requested");
    assert_eq!(train.shape(), &[2, 2, 4]);
    assert_eq!(ds.charset, vec!['a', 'b', ' ', 'X']);

    // The stored one-hot values come back verbatim.
    assert_eq!(ds.data_test.as_slice()[0], 1.0);
    assert_eq!(ds.data_test.as_slice()[5], 1.0);
}

#[test]
fn test_load_packed_without_train_split() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dataset.safetensors");
    write_fixture(&path);

    let ds = dataset::load_packed(&path, false).expect("load packed");
    assert!(ds.data_train.is_none());
    assert_eq!(ds.data_test.num_rows(), 1);
}

#[test]
fn test_stored_charset_decodes_stored_tensors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dataset.safetensors");
    write_fixture(&path);

    let ds = dataset::load_packed(&path, false).expect("load packed");
    let vocab = Vocabulary::from_symbols(ds.charset).expect("charset vocabulary");

    // Argmax each test row back to indices and decode through the charset.
    let row_width = vocab.len();
    let indices: Vec<usize> = ds
        .data_test
        .as_slice()
        .chunks(row_width)
        .map(|row| molforge::codec::active_index(row).expect("one-hot row"))
        .collect();
    assert_eq!(molforge::codec::decode_indices(&indices, &vocab).unwrap(), "ab");
}

#[test]
fn test_load_packed_rejects_missing_tensor() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.safetensors");

    // Only a charset, no splits.
    let charset = b"ab";
    let view = TensorView::new(Dtype::U8, vec![2], charset).expect("view");
    let serialized =
        safetensors::serialize(vec![(CHARSET_TENSOR, &view)], &None).expect("serialize");
    std::fs::write(&path, serialized).unwrap();

    assert!(dataset::load_packed(&path, false).is_err());
}

#[test]
fn test_load_packed_rejects_garbage_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garbage.safetensors");
    std::fs::write(&path, b"not a safetensors file").unwrap();

    assert!(dataset::load_packed(&path, false).is_err());
}

#[test]
fn test_load_raw_drops_out_of_vocabulary_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("smiles.txt");
    std::fs::write(&path, "ab\naq\nba\n").unwrap();

    let vocab = Vocabulary::extract(&["ab", "ba", "aa"], 6).unwrap();
    let config = DataConfig { max_seq_len: 6, ..DataConfig::default() };
    let ds = dataset::load_raw(&path, &config, &vocab).expect("load raw");

    // Three lines in, one contains 'q' which the vocabulary never saw.
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.dropped_unknown, 1);
    assert_eq!(ds.dropped_too_long, 0);
}

#[test]
fn test_extract_from_file_matches_in_memory_extract() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corpus.txt");
    std::fs::write(&path, "ab 0.5\nba 0.1\naa 0.9\n").unwrap();

    let from_file = Vocabulary::extract_from_file(&path, 5).unwrap();
    let in_memory = Vocabulary::extract(&["ab", "ba", "aa"], 5).unwrap();
    assert_eq!(from_file.symbols(), in_memory.symbols());
}
