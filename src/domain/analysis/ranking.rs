//! Rank derivation from score vectors.

use serde::{Deserialize, Serialize};

/// Default absolute tolerance under which two scores count as tied.
pub const DEFAULT_TIE_TOLERANCE: f64 = 1e-12;

/// How tied scores are ranked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TiePolicy {
    /// Tied alternatives share the best rank of their group and the next
    /// rank skips accordingly (1, 2, 2, 4).
    #[default]
    Competition,
    /// Ties are broken by input order; ranks are always a
    /// permutation of `1..=n`.
    Ordinal,
}

/// Rank settings shared by the baseline and every sweep entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingRules {
    pub tie_policy: TiePolicy,
    pub tie_tolerance: f64,
}

impl Default for RankingRules {
    fn default() -> Self {
        Self {
            tie_policy: TiePolicy::default(),
            tie_tolerance: DEFAULT_TIE_TOLERANCE,
        }
    }
}

/// Result of ranking one score vector (higher score is better).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    /// Alternative indices, best first. Tied alternatives keep input order.
    pub order: Vec<usize>,
    /// 1-based rank per alternative, in alternative order.
    pub ranks: Vec<usize>,
}

impl Ranking {
    /// Ranks `scores` in descending order under the given rules.
    pub fn from_scores(scores: &[f64], rules: RankingRules) -> Self {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));

        let mut ranks = vec![0; scores.len()];
        let mut start = 0;
        while start < order.len() {
            // Every member of a tie group lies within tolerance of its best score.
            let mut end = start + 1;
            while end < order.len()
                && is_tie(scores[order[end]], scores[order[start]], rules.tie_tolerance)
            {
                end += 1;
            }
            order[start..end].sort_unstable();

            for position in start..end {
                ranks[order[position]] = match rules.tie_policy {
                    TiePolicy::Competition => start + 1,
                    TiePolicy::Ordinal => position + 1,
                };
            }
            start = end;
        }

        Self { order, ranks }
    }

    /// Element-wise comparison of rank vectors.
    pub fn same_ranks(&self, other: &Ranking) -> bool {
        self.ranks.len() == other.ranks.len()
            && self.ranks.iter().zip(&other.ranks).all(|(a, b)| a == b)
    }

    /// True when every rank in `1..=n` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.ranks.len()];
        for &rank in &self.ranks {
            match rank.checked_sub(1).and_then(|index| seen.get_mut(index)) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    /// Alternative index holding rank 1 (first in `order`).
    pub fn leader(&self) -> Option<usize> {
        self.order.first().copied()
    }
}

fn is_tie(a: f64, b: f64, tolerance: f64) -> bool {
    a == b || (a - b).abs() <= tolerance
}
