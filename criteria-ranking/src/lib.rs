pub mod num;

use std::cmp::Reverse;
use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use ordered_float::NotNan;

pub use crate::num::{Normalized, Weight};

/// Widest criterion catalog the engine accepts. Rows are kept in
/// fixed-capacity storage sized by this bound.
pub const MAX_CRITERIA: usize = 8;

/// An ordinal score on the fixed 1-4 scale (1 = worst, 4 = best).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);

    pub fn new(value: u8) -> Option<Self> {
        (1..=4).contains(&value).then_some(Self(value))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

impl std::fmt::Debug for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One axis of comparison: a name and a total scoring function over the
/// alternative type. Cost-vs-benefit direction is the scoring function's
/// concern; by the time a value reaches the engine, higher is better.
pub struct Criterion<A> {
    pub name: &'static str,
    pub score: fn(&A) -> Score,
}

/// An ordered, fixed set of criteria for ranking alternatives of type `A`.
pub struct Catalog<A: 'static> {
    criteria: &'static [Criterion<A>],
}

impl<A: 'static> Catalog<A> {
    pub const fn new(criteria: &'static [Criterion<A>]) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &'static [Criterion<A>] {
        self.criteria
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl<A: 'static> Clone for Catalog<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static> Copy for Catalog<A> {}

/// Criterion-name to weight mapping. Weights are supplied by the caller
/// and are not required to sum to 1.0; rankings produced under configs
/// with different sums are not comparable to each other.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Weights(BTreeMap<String, Weight>);

impl Weights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, criterion: impl Into<String>, weight: Weight) {
        self.0.insert(criterion.into(), weight);
    }

    pub fn get(&self, criterion: &str) -> Option<Weight> {
        self.0.get(criterion).copied()
    }

    pub fn criteria(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn sum(&self) -> f64 {
        self.0.values().map(Weight::as_f64).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RankingError {
    /// A catalog criterion has no configured weight.
    #[error("no weight configured for criterion {0:?}")]
    MissingWeight(String),
    /// A weight is configured for a criterion the catalog does not define.
    #[error("weight configured for unknown criterion {0:?}")]
    UnknownCriterion(String),
}

/// One entry of a ranking: a borrowed alternative and its total score.
#[derive(Debug)]
pub struct Ranked<'a, A> {
    pub alternative: &'a A,
    pub total: NotNan<f64>,
}

impl<A> Clone for Ranked<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Ranked<'_, A> {}

type ScoreRow = ArrayVec<Score, MAX_CRITERIA>;

/// Rank `alternatives` against `catalog` under `weights`, best first.
///
/// Each alternative is scored per criterion, each criterion column is
/// rescaled by its maximum over the batch, and the weighted column values
/// are summed into the total. Normalization is relative to the batch:
/// adding or removing alternatives changes the other entries' normalized
/// values, though never the 1-4 scores they are derived from.
///
/// Equal totals keep their input order. An empty batch yields an empty
/// ranking. The weight config must cover exactly the catalog's criteria;
/// anything missing or extra is a [`RankingError`].
///
/// Panics if the catalog is wider than [`MAX_CRITERIA`].
pub fn rank<'a, A>(
    catalog: &Catalog<A>,
    alternatives: &'a [A],
    weights: &Weights,
) -> Result<Vec<Ranked<'a, A>>, RankingError> {
    assert!(catalog.len() <= MAX_CRITERIA);

    let weights = resolve_weights(catalog, weights)?;
    if alternatives.is_empty() {
        return Ok(Vec::new());
    }
    tracing::debug!(
        alternatives = alternatives.len(),
        criteria = catalog.len(),
        "ranking batch"
    );

    let scored = score_table(catalog, alternatives);
    let maxima = column_maxima(&scored);
    let normalized = normalize(&scored, &maxima);

    let mut entries: Vec<Ranked<'a, A>> = alternatives
        .iter()
        .zip(&normalized)
        .map(|(alternative, row)| Ranked {
            alternative,
            total: total_score(row, &weights),
        })
        .collect();
    let mut order = permutation::sort_by_key(&entries, |entry| Reverse(entry.total));
    order.apply_slice_in_place(&mut entries);
    Ok(entries)
}

/// Resolve the weight config into catalog order, rejecting mismatches in
/// either direction.
fn resolve_weights<A: 'static>(
    catalog: &Catalog<A>,
    weights: &Weights,
) -> Result<ArrayVec<Weight, MAX_CRITERIA>, RankingError> {
    for name in weights.criteria() {
        if !catalog.criteria().iter().any(|c| c.name == name) {
            return Err(RankingError::UnknownCriterion(name.to_owned()));
        }
    }
    catalog
        .criteria()
        .iter()
        .map(|criterion| {
            weights
                .get(criterion.name)
                .ok_or_else(|| RankingError::MissingWeight(criterion.name.to_owned()))
        })
        .collect()
}

fn score_table<A: 'static>(catalog: &Catalog<A>, alternatives: &[A]) -> Vec<ScoreRow> {
    alternatives
        .iter()
        .map(|alternative| {
            catalog
                .criteria()
                .iter()
                .map(|criterion| (criterion.score)(alternative))
                .collect()
        })
        .collect()
}

// Callers rule out the empty batch before computing maxima.
fn column_maxima(table: &[ScoreRow]) -> ScoreRow {
    let mut maxima = table[0].clone();
    for row in &table[1..] {
        for (max, score) in maxima.iter_mut().zip(row) {
            *max = (*max).max(*score);
        }
    }
    maxima
}

fn normalize(table: &[ScoreRow], maxima: &ScoreRow) -> Vec<ArrayVec<Normalized, MAX_CRITERIA>> {
    table
        .iter()
        .map(|row| {
            row.iter()
                .zip(maxima)
                // Scores are at least 1 and at most the column maximum, so
                // the ratio lands in (0, 1].
                .map(|(score, max)| Normalized::new(score.as_f64() / max.as_f64()).unwrap())
                .collect()
        })
        .collect()
}

fn total_score(row: &ArrayVec<Normalized, MAX_CRITERIA>, weights: &[Weight]) -> NotNan<f64> {
    let total = row
        .iter()
        .zip(weights)
        .map(|(value, weight)| value.as_f64() * weight.as_f64())
        .sum();
    NotNan::new(total).unwrap()
}
