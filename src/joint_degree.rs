//! Joint degree: how often nodes of degree `k1` and `k2` are members of the same hyperedge.
use crate::error::{HypergraphError, Result};
use crate::incidence::Hypergraph;

use std::collections::BTreeMap;

use tracing::trace;

/// A square matrix of co-membership counts, indexed by observed degree values.
///
/// Rows and columns are exactly the degrees held by at least one node, in ascending order.
/// Every cell exists, so a pair of observed degrees that never meet in a hyperedge reads `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawJointDegree"))]
pub struct JointDegree {
    degrees: Vec<usize>,
    // row-major, degrees.len() * degrees.len()
    counts: Vec<usize>,
}

/// Unchecked wire form of a [`JointDegree`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawJointDegree {
    degrees: Vec<usize>,
    counts: Vec<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawJointDegree> for JointDegree {
    type Error = HypergraphError;

    fn try_from(raw: RawJointDegree) -> Result<Self> {
        JointDegree::from_parts(raw.degrees, raw.counts)
    }
}

impl JointDegree {
    /// Build a matrix from its degrees and row-major counts.
    ///
    /// `degrees` must be strictly ascending and `counts` must hold `degrees.len()²` cells.
    pub fn from_parts(degrees: Vec<usize>, counts: Vec<usize>) -> Result<Self> {
        if degrees.windows(2).any(|w| w[0] >= w[1]) {
            return Err(HypergraphError::InvalidJointDegree {
                reason: "degrees are not strictly ascending".to_string(),
            });
        }
        let cells = degrees.len().checked_mul(degrees.len());
        if cells != Some(counts.len()) {
            return Err(HypergraphError::InvalidJointDegree {
                reason: format!(
                    "{} degrees need {} cells, found {}",
                    degrees.len(),
                    degrees.len().saturating_mul(degrees.len()),
                    counts.len()
                ),
            });
        }
        Ok(JointDegree { degrees, counts })
    }

    fn zeros(degrees: Vec<usize>) -> Self {
        let n = degrees.len();
        JointDegree {
            degrees,
            counts: vec![0; n * n],
        }
    }

    /// Observed degree values, ascending.
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    fn position(&self, k: usize) -> Option<usize> {
        self.degrees.binary_search(&k).ok()
    }

    /// The count for `(k1, k2)`, or `None` if either degree is not observed.
    pub fn get(&self, k1: usize, k2: usize) -> Option<usize> {
        let i = self.position(k1)?;
        let j = self.position(k2)?;
        Some(self.counts[i * self.degrees.len() + j])
    }

    /// The row for degree `k1` as `(k2, count)` pairs.
    pub fn row(&self, k1: usize) -> Option<impl Iterator<Item = (usize, usize)> + '_> {
        let n = self.degrees.len();
        let i = self.position(k1)?;
        Some(
            self.degrees
                .iter()
                .copied()
                .zip(self.counts[i * n..(i + 1) * n].iter().copied()),
        )
    }

    /// Every cell as `(k1, k2, count)`, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let n = self.degrees.len();
        self.counts.iter().enumerate().map(move |(ix, &c)| {
            (self.degrees[ix / n], self.degrees[ix % n], c)
        })
    }

    /// Sum over all cells. Equals twice the number of member-position pairs in all hyperedges.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn to_nested(&self) -> BTreeMap<usize, BTreeMap<usize, usize>> {
        let mut nested: BTreeMap<usize, BTreeMap<usize, usize>> = BTreeMap::new();
        for (k1, k2, c) in self.iter() {
            nested.entry(k1).or_default().insert(k2, c);
        }
        nested
    }
}

impl<V> Hypergraph<V> {
    /// Count co-memberships of degree values within hyperedges.
    ///
    /// For each hyperedge and each pair of member positions `i < j`, with `k1` and `k2` the
    /// degrees of the two members, both `(k1, k2)` and `(k2, k1)` are incremented.
    /// A same-degree pair therefore adds 2 to its diagonal cell, while a mixed pair adds 1 to
    /// each of two cells.
    ///
    /// Cost is `O(Σ |e|²)` over all hyperedges.
    pub fn num_jnt_node_deg(&self) -> JointDegree {
        let degree = self.degrees();
        let observed: Vec<usize> = self.observed_degrees().into_iter().collect();
        trace!(
            hyperedges = self.num_hyperedges(),
            degrees = observed.len(),
            "computing joint degree"
        );

        // matrix position of each node's degree
        let slot: Vec<usize> = degree
            .iter()
            .map(|k| observed.partition_point(|x| x < k))
            .collect();

        let mut jnd = JointDegree::zeros(observed);
        let n = jnd.degrees.len();

        for e in self.edge_ids() {
            let members = self.members(e);
            for (i, u) in members.iter().enumerate() {
                let a = slot[u.0];
                for v in &members[i + 1..] {
                    let b = slot[v.0];
                    jnd.counts[a * n + b] += 1;
                    jnd.counts[b * n + a] += 1;
                }
            }
        }

        jnd
    }
}
