use rand::Rng;

use crate::error::{MolForgeError, Result};

/// Return the index of the maximum value in the row.
pub(crate) fn argmax(row: &[f32]) -> usize {
    let mut best = 0;
    let mut max_val = f32::NEG_INFINITY;
    for (i, &v) in row.iter().enumerate() {
        if v > max_val {
            max_val = v;
            best = i;
        }
    }
    best
}

/// Draw one index from an unnormalized weight row.
///
/// Weights are normalized by their sum, then the draw walks the cumulative
/// distribution with a single uniform sample from `rng`. A row whose sum is
/// zero, negative or non-finite cannot be normalized and is rejected.
pub(crate) fn sample_weighted<R: Rng>(weights: &[f32], rng: &mut R) -> Result<usize> {
    let sum: f32 = weights.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return Err(MolForgeError::DegenerateDistribution { sum });
    }
    let probs: Vec<f32> = weights.iter().map(|&w| w / sum).collect();

    let r: f32 = rng.gen();
    let mut cumsum = 0.0;
    for (i, &p) in probs.iter().enumerate() {
        cumsum += p;
        if r < cumsum {
            return Ok(i);
        }
    }
    Ok(probs.len() - 1)
}
