use std::path::PathBuf;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::info;

use crate::embedding::{Embedder, EmbeddingError, EmbeddingVector};

const MODEL_NAME: &str = "sentence-transformers/all-MiniLM-L6-v2";
const DIMENSION: usize = 384;

/// all-MiniLM-L6-v2 sentence embedder via fastembed (ONNX runtime, CPU).
///
/// Produces 384-dimensional vectors. Inference is deterministic for a fixed
/// model download, which is what makes role-embedding caching safe.
pub struct MiniLmEmbedder {
    model: TextEmbedding,
}

impl MiniLmEmbedder {
    /// Loads the model, downloading it into `cache_dir` on first use (~90MB).
    pub fn new(cache_dir: Option<PathBuf>) -> Result<Self, EmbeddingError> {
        let mut opts =
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(true);
        if let Some(dir) = cache_dir {
            opts = opts.with_cache_dir(dir);
        }

        let model =
            TextEmbedding::try_new(opts).map_err(|e| EmbeddingError::ModelLoad(e.to_string()))?;
        info!("Embedding model loaded: {MODEL_NAME}");
        Ok(Self { model })
    }
}

impl Embedder for MiniLmEmbedder {
    fn encode(&self, text: &str) -> Result<EmbeddingVector, EmbeddingError> {
        let values = self
            .model
            .embed(vec![text], None)
            .map_err(|e| EmbeddingError::Inference(e.to_string()))?
            .into_iter()
            .next()
            .ok_or_else(|| EmbeddingError::Inference("model returned no embeddings".to_string()))?;

        if values.len() != DIMENSION {
            return Err(EmbeddingError::Inference(format!(
                "expected {DIMENSION} dimensions, model returned {}",
                values.len()
            )));
        }
        Ok(EmbeddingVector::new(values))
    }

    fn dimension(&self) -> usize {
        DIMENSION
    }

    fn model_name(&self) -> &str {
        MODEL_NAME
    }
}
