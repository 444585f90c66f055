//! Fitness-proportionate (roulette-wheel) parent selection.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::error::TimetableError;

/// Draws `count` indices with replacement, each with probability
/// `fitness[i] / Σ fitness`.
///
/// # Errors
/// - [`TimetableError::ZeroFitnessSum`] if the scores are empty or their sum is zero or not finite.
/// - [`TimetableError::InvalidFitness`] if a score is negative or not finite.
pub fn roulette_select<R: Rng>(
    fitness: &[f64],
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>, TimetableError> {
    let total: f64 = fitness.iter().sum();
    if fitness.is_empty() || !total.is_finite() || total == 0.0 {
        return Err(TimetableError::ZeroFitnessSum);
    }
    let wheel: WeightedIndex<f64> = WeightedIndex::new(fitness.iter().copied())
        .map_err(|e| TimetableError::InvalidFitness(e.to_string()))?;
    Ok((0..count).map(|_| wheel.sample(rng)).collect())
}
