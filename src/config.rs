use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{MolForgeError, Result};

/// Data-pipeline configuration shared by the loaders and the latent explorer.
///
/// `max_seq_len` is the fixed tensor width every sequence is padded to;
/// strings must fit in `max_seq_len - 2` characters so the start and end
/// symbols have room. `latent_dim` is the embedding width of the external
/// autoencoder the tensors are destined for.
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    #[serde(default = "default_max_seq_len")]
    pub max_seq_len: usize,
    #[serde(default = "default_latent_dim")]
    pub latent_dim: usize,
    #[serde(default = "default_interpolation_steps")]
    pub interpolation_steps: usize,
}

fn default_max_seq_len() -> usize { 120 }
fn default_latent_dim() -> usize { 196 }
fn default_interpolation_steps() -> usize { 10 }

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            max_seq_len: default_max_seq_len(),
            latent_dim: default_latent_dim(),
            interpolation_steps: default_interpolation_steps(),
        }
    }
}

impl DataConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: DataConfig = serde_json::from_reader(reader)
            .map_err(|e| MolForgeError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_seq_len < 3 {
            return Err(MolForgeError::InvalidConfig(
                "max_seq_len must be at least 3 to leave room for the start and end symbols".into(),
            ));
        }
        if self.latent_dim == 0 {
            return Err(MolForgeError::InvalidConfig("latent_dim must be > 0".into()));
        }
        if self.interpolation_steps == 0 {
            return Err(MolForgeError::InvalidConfig("interpolation_steps must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DataConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_seq_len, 120);
        assert_eq!(config.latent_dim, 196);
    }

    #[test]
    fn test_validate_rejects_narrow_width() {
        let config = DataConfig { max_seq_len: 2, ..DataConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_steps() {
        let config = DataConfig { interpolation_steps: 0, ..DataConfig::default() };
        assert!(config.validate().is_err());
    }
}
