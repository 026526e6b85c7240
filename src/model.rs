//! Seams to the external collaborators: the trained autoencoder and the
//! cheminformatics library. This crate only marshals data across these
//! traits; it never looks inside a latent vector or a molecule.

use crate::error::Result;

/// A single one-hot encoded sequence: `seq_len` rows of `|vocab|` floats.
pub type OneHotSequence = Vec<Vec<f32>>;

/// An opaque latent embedding produced by the encoder.
pub type LatentVector = Vec<f32>;

/// Per-position symbol distributions produced by the decoder:
/// `seq_len` rows of `|vocab|` weights.
pub type SymbolDistributions = Vec<Vec<f32>>;

/// The trained sequence autoencoder. Synchronous and single-threaded from
/// this crate's perspective.
pub trait Autoencoder {
    /// Map a batch of one-hot sequences to latent vectors, one per input.
    fn encode(&self, batch: &[OneHotSequence]) -> Result<Vec<LatentVector>>;

    /// Map a batch of latent vectors back to per-position symbol
    /// distributions, one set per input.
    fn decode(&self, latents: &[LatentVector]) -> Result<Vec<SymbolDistributions>>;
}

/// The external cheminformatics library, reduced to canonical-form and
/// canonical-identifier computation.
pub trait Canonicalizer {
    /// Normalized structural form of a molecule (e.g. an InChI string).
    fn to_canonical(&self, molecule: &str) -> Result<String>;

    /// Fixed-length identifier derived from a canonical form (e.g. an
    /// InChIKey).
    fn canonical_to_identifier(&self, canonical: &str) -> Result<String>;

    /// Molecule straight to identifier; the composition of the two steps.
    fn canonicalize(&self, molecule: &str) -> Result<String> {
        let canonical = self.to_canonical(molecule)?;
        self.canonical_to_identifier(&canonical)
    }
}
