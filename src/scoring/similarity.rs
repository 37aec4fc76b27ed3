// Cosine similarity between term-weight vectors.

/// Cosine similarity of two equal-length vectors, clamped to [0, 1].
///
/// A zero vector on either side gives 0.0. With non-negative TF-IDF weights
/// the true value is already in range; the clamp only absorbs rounding
/// (self-similarity can come out as 1.0000000000000002).
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denominator = norm_a * norm_b;
    if denominator < f64::EPSILON {
        return 0.0;
    }

    (dot / denominator).clamp(0.0, 1.0)
}
