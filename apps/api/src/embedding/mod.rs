//! Text embeddings.
//!
//! The `Embedder` trait is the seam between the analysis pipeline and the model.
//! Production uses `MiniLmEmbedder` (all-MiniLM-L6-v2 through fastembed, 384 dims);
//! tests inject a deterministic fake.
//!
//! Embeddings are persisted as little-endian f32 bytes. Decoding validates length
//! and rejects non-finite values, so a corrupt blob never reaches the scorer.

use thiserror::Error;

mod minilm;
pub use minilm::MiniLmEmbedder;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("failed to load embedding model: {0}")]
    ModelLoad(String),

    #[error("embedding inference failed: {0}")]
    Inference(String),

    #[error("invalid embedding bytes: {0}")]
    Decode(String),
}

/// Fixed-length embedding produced by an `Embedder`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingVector(Vec<f32>);

impl EmbeddingVector {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Serializes to little-endian f32 bytes, 4 bytes per component.
    ///
    /// `from_bytes` inverts this only for non-empty vectors of finite values,
    /// which every model output is. Empty or infinite vectors encode but do not decode.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(std::mem::size_of_val(self.0.as_slice()));
        for &value in &self.0 {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    /// Inverse of `to_bytes`. Fails on empty input, a length that is not a
    /// multiple of 4, or non-finite components.
    pub fn from_bytes(blob: &[u8]) -> Result<Self, EmbeddingError> {
        const WIDTH: usize = std::mem::size_of::<f32>();

        if blob.is_empty() {
            return Err(EmbeddingError::Decode("embedding blob is empty".to_string()));
        }
        if blob.len() % WIDTH != 0 {
            return Err(EmbeddingError::Decode(format!(
                "blob length {} is not a multiple of {WIDTH}",
                blob.len()
            )));
        }

        let mut values = Vec::with_capacity(blob.len() / WIDTH);
        for chunk in blob.chunks_exact(WIDTH) {
            let value = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            if !value.is_finite() {
                return Err(EmbeddingError::Decode(
                    "embedding contains non-finite values".to_string(),
                ));
            }
            values.push(value);
        }
        Ok(Self(values))
    }

    /// Decodes `blob` and checks it has the expected dimension.
    pub fn from_bytes_with_dimension(blob: &[u8], dimension: usize) -> Result<Self, EmbeddingError> {
        let vector = Self::from_bytes(blob)?;
        if vector.len() != dimension {
            return Err(EmbeddingError::Decode(format!(
                "expected {dimension} dimensions, found {}",
                vector.len()
            )));
        }
        Ok(vector)
    }
}

impl From<Vec<f32>> for EmbeddingVector {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}

/// A pretrained sentence-embedding model.
///
/// Implementations are loaded once and shared read-only (`Arc<dyn Embedder>`);
/// `encode` must be a pure function of its input for a fixed model version.
/// Calls are CPU-bound: async callers run them on the blocking pool.
pub trait Embedder: Send + Sync {
    fn encode(&self, text: &str) -> Result<EmbeddingVector, EmbeddingError>;

    /// Output dimensionality; every vector from `encode` has this length.
    fn dimension(&self) -> usize;

    fn model_name(&self) -> &str;
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Deterministic bag-of-words embedder for tests: each lowercase token
    /// bumps one bucket chosen by an FNV-1a hash.
    pub struct HashEmbedder {
        dimension: usize,
    }

    impl HashEmbedder {
        pub fn new(dimension: usize) -> Self {
            Self { dimension }
        }
    }

    impl Embedder for HashEmbedder {
        fn encode(&self, text: &str) -> Result<EmbeddingVector, EmbeddingError> {
            let mut values = vec![0.0_f32; self.dimension];
            for token in text
                .split(|c: char| !c.is_alphanumeric())
                .filter(|t| !t.is_empty())
            {
                let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
                for byte in token.to_lowercase().bytes() {
                    hash ^= u64::from(byte);
                    hash = hash.wrapping_mul(0x0100_0000_01b3);
                }
                values[(hash % self.dimension as u64) as usize] += 1.0;
            }
            Ok(EmbeddingVector::new(values))
        }

        fn dimension(&self) -> usize {
            self.dimension
        }

        fn model_name(&self) -> &str {
            "test-hash"
        }
    }
}
