//! Probability distribution normalization.
//!
//! A distribution is either a map from outcome to weight or an ordered list
//! of weights. Normalizing divides every weight by the total so that the
//! values sum to one. Weights are expected to be non-negative with at least
//! one positive entry; anything else is reported as a [`DistributionError`].

use std::collections::HashMap;
use std::hash::Hash;

use num_traits::Float;

use crate::config::NormalizeConfig;
use crate::error::DistributionError;

/// A distribution in either of its two supported shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum Distribution<K, T>
where
    K: Eq + Hash,
{
    Map(HashMap<K, T>),
    Weights(Vec<T>),
}

impl<K, T> Distribution<K, T>
where
    K: Eq + Hash,
    T: Float,
{
    pub fn normalize(self) -> Result<Self, DistributionError> {
        self.normalize_with(&NormalizeConfig::default())
    }

    pub fn normalize_with(self, config: &NormalizeConfig) -> Result<Self, DistributionError> {
        match self {
            Distribution::Map(mut map) => {
                normalize_map_in_place_with(&mut map, config)?;
                Ok(Distribution::Map(map))
            }
            Distribution::Weights(weights) => {
                normalize_weights_with(&weights, config).map(Distribution::Weights)
            }
        }
    }

    /// Weights in storage order. Map order is unspecified.
    pub fn values(&self) -> Vec<T> {
        match self {
            Distribution::Map(map) => map.values().copied().collect(),
            Distribution::Weights(weights) => weights.clone(),
        }
    }

    pub fn total(&self) -> T {
        match self {
            Distribution::Map(map) => total(map.values().copied()),
            Distribution::Weights(weights) => total(weights.iter().copied()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Distribution::Map(map) => map.len(),
            Distribution::Weights(weights) => weights.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, T> From<HashMap<K, T>> for Distribution<K, T>
where
    K: Eq + Hash,
{
    fn from(value: HashMap<K, T>) -> Self {
        Distribution::Map(value)
    }
}

impl<K, T> From<Vec<T>> for Distribution<K, T>
where
    K: Eq + Hash,
{
    fn from(value: Vec<T>) -> Self {
        Distribution::Weights(value)
    }
}

/// Return a normalized copy of `dist`, leaving the input untouched.
///
/// An empty map has no positive weight and fails with
/// [`DistributionError::ZeroTotal`] rather than coming back empty.
pub fn normalize_map<K, T>(dist: &HashMap<K, T>) -> Result<HashMap<K, T>, DistributionError>
where
    K: Eq + Hash + Clone,
    T: Float,
{
    normalize_map_with(dist, &NormalizeConfig::default())
}

pub fn normalize_map_with<K, T>(
    dist: &HashMap<K, T>,
    config: &NormalizeConfig,
) -> Result<HashMap<K, T>, DistributionError>
where
    K: Eq + Hash + Clone,
    T: Float,
{
    let mut out = dist.clone();
    normalize_map_in_place_with(&mut out, config)?;
    Ok(out)
}

/// Normalize `dist` in place and hand the same map back.
///
/// The map is only written once every value has been checked, so on error
/// it is left exactly as it was passed in. An empty map fails with
/// [`DistributionError::ZeroTotal`].
pub fn normalize_map_in_place<K, T>(
    dist: &mut HashMap<K, T>,
) -> Result<&mut HashMap<K, T>, DistributionError>
where
    K: Eq + Hash,
    T: Float,
{
    normalize_map_in_place_with(dist, &NormalizeConfig::default())
}

pub fn normalize_map_in_place_with<'a, K, T>(
    dist: &'a mut HashMap<K, T>,
    config: &NormalizeConfig,
) -> Result<&'a mut HashMap<K, T>, DistributionError>
where
    K: Eq + Hash,
    T: Float,
{
    let total = checked_total(dist.values().copied())?;
    check_range(dist.values().copied(), total, config)
        .map_err(|_| DistributionError::OutOfRange { index: None })?;
    for value in dist.values_mut() {
        *value = *value / total;
    }
    Ok(dist)
}

/// Return a new list with each weight divided by the total, in the same order.
///
/// An empty list fails with [`DistributionError::ZeroTotal`]; at least one
/// weight must be positive.
pub fn normalize_weights<T: Float>(dist: &[T]) -> Result<Vec<T>, DistributionError> {
    normalize_weights_with(dist, &NormalizeConfig::default())
}

pub fn normalize_weights_with<T: Float>(
    dist: &[T],
    config: &NormalizeConfig,
) -> Result<Vec<T>, DistributionError> {
    let total = checked_total(dist.iter().copied())?;
    check_range(dist.iter().copied(), total, config)
        .map_err(|index| DistributionError::OutOfRange { index: Some(index) })?;
    Ok(dist.iter().map(|&w| w / total).collect())
}

fn total<T: Float, I: Iterator<Item = T>>(values: I) -> T {
    values.fold(T::zero(), |acc, v| acc + v)
}

fn checked_total<T: Float, I: Iterator<Item = T>>(values: I) -> Result<T, DistributionError> {
    let total = total(values);
    log::trace!("Normalizing distribution with total weight {:?}", total.to_f64());
    if total.is_zero() {
        log::debug!("Rejecting distribution: weights sum to zero");
        return Err(DistributionError::ZeroTotal);
    }
    if !total.is_finite() {
        log::debug!("Rejecting distribution: total weight is not finite");
        return Err(DistributionError::NonFiniteTotal);
    }
    Ok(total)
}

/// Fails with the position of the first weight that is negative or whose
/// normalized value falls outside [0, 1] beyond the configured tolerance.
fn check_range<T: Float, I: Iterator<Item = T>>(
    values: I,
    total: T,
    config: &NormalizeConfig,
) -> Result<(), usize> {
    let tol = T::from(config.tolerance).unwrap_or_else(T::zero);
    let lower = T::zero() - tol;
    let upper = T::one() + tol;
    for (index, value) in values.enumerate() {
        let p = value / total;
        // NaN fails both comparisons
        if value < T::zero() || !(p >= lower && p <= upper) {
            log::debug!(
                "Rejecting distribution: probability {:?} at position {} outside [0, 1]",
                p.to_f64(),
                index
            );
            return Err(index);
        }
    }
    Ok(())
}
