use crate::embedding::EmbeddingVector;

/// Cosine similarity in [-1.0, 1.0]. Zero vectors and mismatched lengths yield 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        tracing::warn!(
            a_len = a.len(),
            b_len = b.len(),
            "embedding dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum();
    let norm_a: f64 = a.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Match percentage between two embeddings: cosine × 100, clamped to [0, 100],
/// rounded to one decimal place.
pub fn match_score(a: &EmbeddingVector, b: &EmbeddingVector) -> f32 {
    let percent = (cosine_similarity(a.as_slice(), b.as_slice()) * 100.0).clamp(0.0, 100.0);
    ((percent * 10.0).round() / 10.0) as f32
}
