use crate::error::{MolForgeError, Result};

/// Minimal owned f32 tensor: a flat buffer plus a shape.
///
/// The pre-encoded dataset splits are carried through this type verbatim;
/// nothing here performs arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: Vec<f32>,
    shape: Vec<usize>,
}

impl Tensor {
    /// Build a tensor from a flat buffer, checking that the shape accounts
    /// for every element.
    pub fn from_vec(data: Vec<f32>, shape: Vec<usize>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(MolForgeError::ShapeMismatch {
                expected: shape,
                actual: vec![data.len()],
            });
        }
        Ok(Self { data, shape })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Number of elements along the first axis (0 for a rank-0 tensor).
    pub fn num_rows(&self) -> usize {
        self.shape.first().copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_checks_shape() {
        let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
        assert_eq!(t.shape(), &[2, 2]);
        assert_eq!(t.as_slice()[3], 4.0);
        assert_eq!(t.num_rows(), 2);
    }

    #[test]
    fn test_from_vec_rejects_bad_shape() {
        assert!(Tensor::from_vec(vec![1.0, 2.0, 3.0], vec![2, 2]).is_err());
    }
}
