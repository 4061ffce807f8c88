use crate::normalize::TokenSet;

/// Jaccard index of two token sets: `|a ∩ b| / |a ∪ b|`.
///
/// Either set empty scores 0.0. No weighting by frequency or position.
pub fn similarity(a: &TokenSet, b: &TokenSet) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f32 / union as f32
}
