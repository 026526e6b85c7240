//! Reconstruction accuracy over index tensors and canonical-identifier
//! uniqueness over decoded molecules.

use std::collections::BTreeMap;

use crate::error::{MolForgeError, Result};
use crate::model::Canonicalizer;

/// The two accuracy figures over a batch of compared sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyReport {
    /// Fraction of rows whose entire valid prefix matches.
    pub exact_match: f64,
    /// Fraction of all compared positions that match individually.
    pub per_token: f64,
}

/// Compare predicted and target index rows over their valid prefixes.
///
/// Row `i` is compared over its first `lengths[i]` positions only; padding
/// beyond the valid length never counts for or against. Empty batches and
/// zero total compared positions are errors rather than a division by
/// zero, and a valid length running past either row is a shape error.
pub fn sequence_accuracy(
    predicted: &[Vec<usize>],
    target: &[Vec<usize>],
    lengths: &[usize],
) -> Result<AccuracyReport> {
    if predicted.len() != target.len() || predicted.len() != lengths.len() {
        return Err(MolForgeError::RowCountMismatch {
            predicted: predicted.len(),
            target: target.len(),
            lengths: lengths.len(),
        });
    }
    if predicted.is_empty() {
        return Err(MolForgeError::EmptyBatch("no rows to compare".into()));
    }

    let mut exact_rows = 0usize;
    let mut matched_positions = 0usize;
    let mut total_positions = 0usize;

    for ((pred, tgt), &len) in predicted.iter().zip(target).zip(lengths) {
        if len > pred.len() || len > tgt.len() {
            return Err(MolForgeError::ShapeMismatch {
                expected: vec![len],
                actual: vec![pred.len().min(tgt.len())],
            });
        }
        let mut row_matches = true;
        for j in 0..len {
            if pred[j] == tgt[j] {
                matched_positions += 1;
            } else {
                row_matches = false;
            }
            total_positions += 1;
        }
        if row_matches {
            exact_rows += 1;
        }
    }

    if total_positions == 0 {
        return Err(MolForgeError::EmptyBatch("zero compared positions".into()));
    }

    Ok(AccuracyReport {
        exact_match: exact_rows as f64 / predicted.len() as f64,
        per_token: matched_positions as f64 / total_positions as f64,
    })
}

/// De-duplicate molecules by canonical identifier.
///
/// Each molecule is canonicalized through `chem`; the first occurrence per
/// identifier is kept. The result is ordered by identifier, not by input
/// position. Uniqueness here is sort-based, so callers needing input order
/// must re-sort themselves.
pub fn unique_by_canonical<C, S>(molecules: &[S], chem: &C) -> Result<Vec<(String, String)>>
where
    C: Canonicalizer + ?Sized,
    S: AsRef<str>,
{
    let mut first_seen: BTreeMap<String, String> = BTreeMap::new();
    for m in molecules {
        let identifier = chem.canonicalize(m.as_ref())?;
        first_seen
            .entry(identifier)
            .or_insert_with(|| m.as_ref().to_string());
    }
    Ok(first_seen
        .into_iter()
        .map(|(identifier, molecule)| (molecule, identifier))
        .collect())
}
