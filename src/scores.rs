//! Synthetic expert score generation.
//!
//! Simulates a panel of experts, each producing an integer rating drawn
//! uniformly from an inclusive range. The range comes from
//! [`ScoreOptions`], whose two fields default independently:
//!
//! | Field | When absent |
//! |---|---|
//! | `min_score` | drawn once per call from [`DEFAULT_MIN_SCORE_RANGE`] (`5..=8`) |
//! | `max_score` | [`DEFAULT_MAX_SCORE`] (`10`) |
//!
//! The randomized minimum is resolved once per call and then shared by
//! every score in that call, so one call's scores all share a floor.
//!
//! Bounds are not validated by [`expert_scores`] / [`expert_scores_with`];
//! an inverted range panics inside `rand`. Use [`try_expert_scores_with`]
//! for a checked variant.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::NumkitError;
use crate::random::{random_integer, IntegerSource};

/// Range the default minimum score is drawn from.
pub const DEFAULT_MIN_SCORE_RANGE: RangeInclusive<i64> = 5..=8;

/// Maximum score used when none is configured.
pub const DEFAULT_MAX_SCORE: i64 = 10;

/// Optional bounds for [`expert_scores`].
///
/// Deserializes from JSON objects with `minScore` / `maxScore` keys;
/// both keys may be omitted.
///
/// # Examples
/// ```
/// use u_numkit::scores::ScoreOptions;
/// let opts = ScoreOptions::from_json(r#"{"maxScore": 7}"#).unwrap();
/// assert_eq!(opts, ScoreOptions::default().with_max_score(7));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoreOptions {
    /// Inclusive lower bound; drawn from [`DEFAULT_MIN_SCORE_RANGE`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<i64>,
    /// Inclusive upper bound; [`DEFAULT_MAX_SCORE`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<i64>,
}

impl ScoreOptions {
    /// Options with both bounds set.
    pub fn new(min_score: i64, max_score: i64) -> Self {
        Self {
            min_score: Some(min_score),
            max_score: Some(max_score),
        }
    }

    /// Sets the lower bound, keeping `max_score` as is.
    pub fn with_min_score(mut self, min_score: i64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    /// Sets the upper bound, keeping `min_score` as is.
    pub fn with_max_score(mut self, max_score: i64) -> Self {
        self.max_score = Some(max_score);
        self
    }

    /// Parses options from a JSON object.
    ///
    /// # Errors
    /// [`NumkitError::InvalidOptions`] on malformed JSON, non-integer
    /// bounds, or unknown keys.
    pub fn from_json(json: &str) -> Result<Self, NumkitError> {
        let options = serde_json::from_str(json)?;
        Ok(options)
    }

    /// Resolves defaults into a concrete range.
    ///
    /// Consults `source` only when `min_score` is absent.
    pub fn resolve<S: IntegerSource + ?Sized>(&self, source: &mut S) -> ScoreRange {
        let min = match self.min_score {
            Some(min) => min,
            None => random_integer(
                source,
                *DEFAULT_MIN_SCORE_RANGE.start(),
                *DEFAULT_MIN_SCORE_RANGE.end(),
            ),
        };
        let max = self.max_score.unwrap_or(DEFAULT_MAX_SCORE);
        ScoreRange { min, max }
    }
}

/// Inclusive score bounds after defaults have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRange {
    /// Lowest score that can be drawn.
    pub min: i64,
    /// Highest score that can be drawn.
    pub max: i64,
}

impl ScoreRange {
    /// Returns true if `score` lies in `[min, max]`.
    pub fn contains(&self, score: i64) -> bool {
        self.min <= score && score <= self.max
    }

    /// Returns true if `min > max`.
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    fn draw<S: IntegerSource + ?Sized>(&self, count: usize, source: &mut S) -> Vec<i64> {
        (0..count)
            .map(|_| random_integer(source, self.min, self.max))
            .collect()
    }
}

/// Generates `count` expert scores using the thread-local RNG.
///
/// # Panics
/// If the resolved minimum exceeds the resolved maximum and `count > 0`.
///
/// # Examples
/// ```
/// use u_numkit::scores::{expert_scores, ScoreOptions};
/// let scores = expert_scores(100, &ScoreOptions::new(6, 6));
/// assert!(scores.iter().all(|&s| s == 6));
///
/// let defaulted = expert_scores(20, &ScoreOptions::default());
/// assert!(defaulted.iter().all(|&s| (5..=10).contains(&s)));
/// ```
pub fn expert_scores(count: usize, options: &ScoreOptions) -> Vec<i64> {
    expert_scores_with(count, options, &mut rand::rng())
}

/// Generates `count` expert scores drawing from `source`.
///
/// The range is resolved once (see [`ScoreOptions::resolve`]), then each
/// score is drawn independently from it.
///
/// # Panics
/// With a [`rand::Rng`] source, if the resolved range is inverted and
/// `count > 0`.
///
/// # Examples
/// ```
/// use u_numkit::random::create_rng;
/// use u_numkit::scores::{expert_scores_with, ScoreOptions};
/// let mut rng = create_rng(42);
/// let scores = expert_scores_with(50, &ScoreOptions::new(3, 9), &mut rng);
/// assert_eq!(scores.len(), 50);
/// assert!(scores.iter().all(|&s| (3..=9).contains(&s)));
/// ```
pub fn expert_scores_with<S: IntegerSource + ?Sized>(
    count: usize,
    options: &ScoreOptions,
    source: &mut S,
) -> Vec<i64> {
    let range = options.resolve(source);
    debug!(count, min = range.min, max = range.max, "generating expert scores");
    range.draw(count, source)
}

/// Checked variant of [`expert_scores_with`].
///
/// # Errors
/// [`NumkitError::InvertedRange`] if the resolved minimum exceeds the
/// resolved maximum, regardless of `count`.
pub fn try_expert_scores_with<S: IntegerSource + ?Sized>(
    count: usize,
    options: &ScoreOptions,
    source: &mut S,
) -> Result<Vec<i64>, NumkitError> {
    let range = options.resolve(source);
    if range.is_inverted() {
        return Err(NumkitError::InvertedRange {
            min: range.min,
            max: range.max,
        });
    }
    debug!(count, min = range.min, max = range.max, "generating expert scores");
    Ok(range.draw(count, source))
}

// ============================================================================
// Tests
// ============================================================================
