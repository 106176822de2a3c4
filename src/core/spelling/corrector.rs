//! Token Correction
//!
//! Decides, per query token, between pass-through and replacement:
//!
//! 1. Known tokens are accepted unchanged without scanning.
//! 2. Unknown tokens are scored against every vocabulary entry; candidates
//!    must score strictly above the threshold (74 by default).
//! 3. The winner is the candidate with the highest corpus frequency, then the
//!    highest contextual score (if a [`ContextualScorer`] is attached), then
//!    the highest similarity, then the lexically smallest token.
//! 4. Without a candidate the token is kept and reported as unresolved.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::Serialize;

use super::config::CorrectionConfig;
use super::similarity::SimilarityScorer;
use super::vocabulary::Vocabulary;

/// How a token was handled
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorrectionKind {
    /// Token is in the vocabulary
    Known,
    /// Token was replaced by a vocabulary candidate
    Replaced { score: u8, frequency: u64 },
    /// No candidate cleared the threshold; token kept as-is
    Unresolved,
}

/// Result of correcting a single token
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CorrectedToken {
    /// Token as it appeared in the query (lowercased)
    pub original: String,
    /// Token to emit in the corrected query
    pub corrected: String,
    pub kind: CorrectionKind,
}

impl CorrectedToken {
    pub fn is_replaced(&self) -> bool {
        matches!(self.kind, CorrectionKind::Replaced { .. })
    }

    pub fn is_unresolved(&self) -> bool {
        self.kind == CorrectionKind::Unresolved
    }
}

/// Tokens around the one being corrected.
///
/// `preceding` holds already-corrected tokens, `following` the raw tokens
/// still to be processed.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenContext<'a> {
    pub preceding: &'a [String],
    pub following: &'a [String],
}

/// Optional secondary ranking signal, e.g. a masked language model.
///
/// Consulted only for candidates that already cleared the similarity
/// threshold, and only to order candidates of equal frequency. Higher is
/// better.
pub trait ContextualScorer: Send + Sync {
    fn score(&self, context: &TokenContext<'_>, candidate: &str) -> f32;
}

/// A vocabulary entry that cleared the threshold
#[derive(Clone, Copy, Debug)]
struct Candidate<'v> {
    token: &'v str,
    frequency: u64,
    score: u8,
    contextual: f32,
}

/// Total order: best candidate sorts first.
fn rank(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.frequency
        .cmp(&a.frequency)
        .then_with(|| b.contextual.total_cmp(&a.contextual))
        .then_with(|| b.score.cmp(&a.score))
        .then_with(|| a.token.cmp(b.token))
}

/// Threshold-based token corrector over a [`Vocabulary`].
pub struct TokenCorrector {
    scorer: Box<dyn SimilarityScorer>,
    contextual: Option<Box<dyn ContextualScorer>>,
    threshold: u8,
    parallel: bool,
    scan_budget: Option<usize>,
}

impl TokenCorrector {
    pub fn new(config: &CorrectionConfig) -> Self {
        Self {
            scorer: Box::new(config.algorithm),
            contextual: None,
            threshold: config.threshold,
            parallel: config.parallel,
            scan_budget: config.scan_budget,
        }
    }

    /// Replace the similarity scorer.
    pub fn with_scorer(mut self, scorer: Box<dyn SimilarityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Attach a contextual re-ranking signal.
    pub fn with_contextual_scorer(mut self, scorer: Box<dyn ContextualScorer>) -> Self {
        self.contextual = Some(scorer);
        self
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn has_contextual_scorer(&self) -> bool {
        self.contextual.is_some()
    }

    /// Correct a token without surrounding context.
    ///
    /// Returns `None` for an empty token.
    pub fn correct(&self, token: &str, vocabulary: &Vocabulary) -> Option<CorrectedToken> {
        self.correct_in_context(token, &TokenContext::default(), vocabulary)
    }

    /// Correct a token, passing its neighbours to the contextual scorer.
    pub fn correct_in_context(
        &self,
        token: &str,
        context: &TokenContext<'_>,
        vocabulary: &Vocabulary,
    ) -> Option<CorrectedToken> {
        if token.is_empty() {
            return None;
        }

        if vocabulary.contains(token) {
            return Some(CorrectedToken {
                original: token.to_string(),
                corrected: token.to_string(),
                kind: CorrectionKind::Known,
            });
        }

        let corrected = match self.best_candidate(token, context, vocabulary) {
            Some(best) => {
                log::trace!(
                    "Corrected '{}' -> '{}' (score {}, frequency {})",
                    token,
                    best.token,
                    best.score,
                    best.frequency
                );
                CorrectedToken {
                    original: token.to_string(),
                    corrected: best.token.to_string(),
                    kind: CorrectionKind::Replaced {
                        score: best.score,
                        frequency: best.frequency,
                    },
                }
            }
            None => {
                log::trace!("No candidate above {} for '{}'", self.threshold, token);
                CorrectedToken {
                    original: token.to_string(),
                    corrected: token.to_string(),
                    kind: CorrectionKind::Unresolved,
                }
            }
        };

        Some(corrected)
    }

    fn best_candidate<'v>(
        &self,
        token: &str,
        context: &TokenContext<'_>,
        vocabulary: &'v Vocabulary,
    ) -> Option<Candidate<'v>> {
        let budget = self.scan_budget.unwrap_or(usize::MAX);

        if self.parallel {
            let entries: Vec<(&'v str, u64)> = vocabulary.iter().take(budget).collect();
            entries
                .par_iter()
                .filter_map(|&(candidate, frequency)| {
                    self.evaluate(token, context, candidate, frequency)
                })
                .min_by(rank)
        } else {
            vocabulary
                .iter()
                .take(budget)
                .filter_map(|(candidate, frequency)| {
                    self.evaluate(token, context, candidate, frequency)
                })
                .min_by(rank)
        }
    }

    fn evaluate<'v>(
        &self,
        token: &str,
        context: &TokenContext<'_>,
        candidate: &'v str,
        frequency: u64,
    ) -> Option<Candidate<'v>> {
        let score = self.scorer.score(token, candidate);
        if score <= self.threshold {
            return None;
        }

        let contextual = self
            .contextual
            .as_ref()
            .map(|scorer| scorer.score(context, candidate))
            .unwrap_or(0.0);

        Some(Candidate {
            token: candidate,
            frequency,
            score,
            contextual,
        })
    }
}

impl Default for TokenCorrector {
    fn default() -> Self {
        Self::new(&CorrectionConfig::default())
    }
}

impl std::fmt::Debug for TokenCorrector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCorrector")
            .field("threshold", &self.threshold)
            .field("parallel", &self.parallel)
            .field("scan_budget", &self.scan_budget)
            .field("contextual", &self.contextual.is_some())
            .finish()
    }
}
