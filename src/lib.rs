//! Data marshalling for a molecular autoencoder: SMILES strings to and from
//! fixed-width index / one-hot tensors, corpus vocabulary extraction,
//! dataset loading, latent-space interpolation and reconstruction metrics.
//! The trained model and the chemistry live behind the traits in [`model`].

pub mod codec;
pub mod config;
pub mod dataset;
pub mod error;
pub mod interpolate;
pub mod metrics;
pub mod model;
mod sampling;
pub mod tensor;
pub mod vocab;

pub use config::DataConfig;
pub use error::{MolForgeError, Result};
pub use model::{Autoencoder, Canonicalizer};
pub use tensor::Tensor;
pub use vocab::Vocabulary;
