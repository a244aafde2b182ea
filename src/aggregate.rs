//! Degree-conditioned averages of per-node statistics.
use crate::incidence::Hypergraph;

use std::collections::BTreeMap;

use num_traits::{Float, FromPrimitive};
use tracing::trace;

/// Arithmetic mean of `values` within each class.
///
/// Every class in `classes` appears in the result, even when no value falls into it; such a
/// class reads zero. Values whose class is not listed add a new class.
pub fn class_mean<F, C, I>(classes: C, values: I) -> BTreeMap<usize, F>
where
    F: Float + FromPrimitive,
    C: IntoIterator<Item = usize>,
    I: IntoIterator<Item = (usize, F)>,
{
    let mut acc: BTreeMap<usize, (F, usize)> =
        classes.into_iter().map(|k| (k, (F::zero(), 0))).collect();

    for (k, x) in values {
        let (sum, count) = acc.entry(k).or_insert((F::zero(), 0));
        *sum = *sum + x;
        *count += 1;
    }

    acc.into_iter()
        .map(|(k, (sum, count))| {
            let mean = match F::from_usize(count) {
                Some(n) if count > 0 => sum / n,
                _ => F::zero(),
            };
            (k, mean)
        })
        .collect()
}

impl<V> Hypergraph<V> {
    /// Mean redundancy coefficient of the nodes of each observed degree.
    ///
    /// Degrees and coefficients are both read from `&self`, so they describe the same state.
    pub fn degree_dependent_node_redundancy_coefficient(&self) -> BTreeMap<usize, f64> {
        let degrees = self.degrees();
        let rc = self.redundancy_coefficients();
        trace!(nodes = degrees.len(), "aggregating redundancy by degree");

        class_mean(self.observed_degrees(), degrees.into_iter().zip(rc))
    }
}
