/// Entropy-style diversity score of one row of proportions: `Σ p·ln(1/p)`
/// over the nonzero entries.
///
/// A row concentrated in one category scores 0; a row spread evenly over `k`
/// categories scores `ln(k)`. Zero entries contribute nothing. The row need
/// not sum to 1. A NaN entry (an area with no observations) makes the score NaN.
pub fn entropy(row: impl IntoIterator<Item = f64>) -> f64 {
    let mut score = 0.0;
    for p in row {
        if p != 0.0 {
            score += p * (1.0 / p).ln();
        }
    }
    score
}
