//! Latent-space exploration: encode two molecules, walk the straight line
//! between their latent vectors, and decode each point back to a string.

use crate::codec;
use crate::error::{MolForgeError, Result};
use crate::model::Autoencoder;
use crate::sampling;
use crate::vocab::Vocabulary;

/// Encode one string through the model as a single-example batch.
pub fn encode_to_latent<M: Autoencoder + ?Sized>(
    s: &str,
    model: &M,
    vocab: &Vocabulary,
    width: usize,
) -> Result<Vec<f32>> {
    let one_hot = codec::encode_one_hot(s, vocab, width)?;
    let mut latents = model.encode(&[one_hot])?;
    if latents.len() != 1 {
        return Err(MolForgeError::Model(format!(
            "encoder returned {} latents for a batch of 1",
            latents.len()
        )));
    }
    Ok(latents.remove(0))
}

/// Decode one latent vector back to a string: run the model decoder,
/// take the argmax symbol at each position, map through the vocabulary.
pub fn decode_latent<M: Autoencoder + ?Sized>(
    latent: &[f32],
    model: &M,
    vocab: &Vocabulary,
) -> Result<String> {
    let mut decoded = model.decode(&[latent.to_vec()])?;
    if decoded.len() != 1 {
        return Err(MolForgeError::Model(format!(
            "decoder returned {} outputs for a batch of 1",
            decoded.len()
        )));
    }
    let rows = decoded.remove(0);
    let indices: Vec<usize> = rows.iter().map(|row| sampling::argmax(row)).collect();
    codec::decode_indices(&indices, vocab)
}

/// Walk `steps` evenly spaced points from `source` toward `dest` in latent
/// space, decoding each point.
///
/// The walk starts at the source latent itself; the destination sits one
/// increment past the final emitted point and is never decoded. Exactly
/// `steps` strings come back.
pub fn interpolate<M: Autoencoder + ?Sized>(
    source: &str,
    dest: &str,
    steps: usize,
    vocab: &Vocabulary,
    model: &M,
    width: usize,
) -> Result<Vec<String>> {
    if steps == 0 {
        return Err(MolForgeError::InvalidConfig(
            "interpolation steps must be > 0".into(),
        ));
    }

    let source_latent = encode_to_latent(source, model, vocab, width)?;
    let dest_latent = encode_to_latent(dest, model, vocab, width)?;
    if source_latent.len() != dest_latent.len() {
        return Err(MolForgeError::Model(format!(
            "latent dimension mismatch: source {}, dest {}",
            source_latent.len(),
            dest_latent.len()
        )));
    }

    let step: Vec<f32> = source_latent
        .iter()
        .zip(&dest_latent)
        .map(|(s, d)| (d - s) / steps as f32)
        .collect();

    let mut results = Vec::with_capacity(steps);
    for i in 0..steps {
        let point: Vec<f32> = source_latent
            .iter()
            .zip(&step)
            .map(|(s, d)| s + d * i as f32)
            .collect();
        results.push(decode_latent(&point, model, vocab)?);
    }
    Ok(results)
}
