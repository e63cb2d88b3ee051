//! Combinators that build evaluators out of evaluators.
//!
//! [`First`] and [`Chain`] are deliberately different algebras. `First` gives
//! every member the ORIGINAL outcome and lets the first member with an
//! opinion win. `Chain` threads each member's result into the next, so
//! effects stack. `chain(a, b)` where `a` downgrades `Different` to
//! `Similar` exposes that `Similar` to `b`; under `first` only `a`'s direct
//! verdict on the original can win.

use std::sync::Arc;

use crate::comparison::{Comparison, ComparisonType};
use crate::evaluator::Evaluator;
use crate::outcome::Outcome;

/// The first member whose verdict differs from the original outcome wins.
///
/// Every member is consulted with the same original outcome, in order, and
/// evaluation short-circuits at the first differing result. If no member has
/// an opinion the original outcome stands. Order matters: placing a
/// narrowly-scoped override before the default table lets it preempt the
/// table for the comparisons it cares about.
///
/// With no members this behaves as [`Accept`](crate::Accept).
#[derive(Clone)]
pub struct First {
    evaluators: Vec<Arc<dyn Evaluator>>,
}

impl First {
    /// Build from an ordered sequence of evaluators.
    pub fn new(evaluators: impl IntoIterator<Item = Arc<dyn Evaluator>>) -> Self {
        First {
            evaluators: evaluators.into_iter().collect(),
        }
    }
}

impl Evaluator for First {
    fn evaluate(&self, comparison: &Comparison, outcome: Outcome) -> Outcome {
        for evaluator in &self.evaluators {
            let evaluated = evaluator.evaluate(comparison, outcome);
            if evaluated != outcome {
                return evaluated;
            }
        }
        outcome
    }
}

/// Threads the outcome through every member in order.
///
/// Each member sees the previous member's result, so downgrades and upgrades
/// compose. With no members this behaves as [`Accept`](crate::Accept).
#[derive(Clone)]
pub struct Chain {
    evaluators: Vec<Arc<dyn Evaluator>>,
}

impl Chain {
    /// Build from an ordered sequence of evaluators.
    pub fn new(evaluators: impl IntoIterator<Item = Arc<dyn Evaluator>>) -> Self {
        Chain {
            evaluators: evaluators.into_iter().collect(),
        }
    }
}

impl Evaluator for Chain {
    fn evaluate(&self, comparison: &Comparison, outcome: Outcome) -> Outcome {
        let mut result = outcome;
        for evaluator in &self.evaluators {
            result = evaluator.evaluate(comparison, result);
        }
        result
    }
}

/// Combine evaluators so that the first one changing the outcome wins.
///
/// ```
/// use std::sync::Arc;
/// use treecmp::{first, default_evaluator, Comparison, ComparisonType, Detail, Evaluator, Outcome};
///
/// // Treat text differences as significant before the default table runs.
/// let keep_text = |comparison: &Comparison, outcome: Outcome| {
///     if comparison.kind() == ComparisonType::TextValue {
///         Outcome::Different
///     } else {
///         outcome
///     }
/// };
/// let policy = first([Arc::new(keep_text) as Arc<dyn Evaluator>, default_evaluator()]);
///
/// let prefix = Comparison::new(
///     ComparisonType::NamespacePrefix,
///     Detail::new("a"),
///     Detail::new("b"),
/// );
/// assert_eq!(policy.evaluate(&prefix, Outcome::Different), Outcome::Similar);
/// ```
pub fn first(evaluators: impl IntoIterator<Item = Arc<dyn Evaluator>>) -> First {
    First::new(evaluators)
}

/// Combine evaluators so that each one's result feeds the next.
pub fn chain(evaluators: impl IntoIterator<Item = Arc<dyn Evaluator>>) -> Chain {
    Chain::new(evaluators)
}

/// Rewrites the verdict for a chosen set of comparison kinds.
///
/// Acts whenever the incoming outcome is not [`Outcome::Equal`] and the
/// comparison's kind is listed; everything else passes through. Use the
/// [`downgrade_differences_to_equal`], [`downgrade_differences_to_similar`],
/// and [`upgrade_differences_to_different`] constructors for the common
/// directions.
#[derive(Debug, Clone)]
pub struct RecordDifferencesAs {
    recorded: Outcome,
    kinds: Vec<ComparisonType>,
}

impl RecordDifferencesAs {
    /// Record any non-equal verdict for the listed kinds as `recorded`.
    pub fn new(recorded: Outcome, kinds: impl IntoIterator<Item = ComparisonType>) -> Self {
        RecordDifferencesAs {
            recorded,
            kinds: kinds.into_iter().collect(),
        }
    }
}

impl Evaluator for RecordDifferencesAs {
    fn evaluate(&self, comparison: &Comparison, outcome: Outcome) -> Outcome {
        if outcome != Outcome::Equal && self.kinds.contains(&comparison.kind()) {
            self.recorded
        } else {
            outcome
        }
    }
}

/// Ignore differences of the listed kinds entirely.
pub fn downgrade_differences_to_equal(
    kinds: impl IntoIterator<Item = ComparisonType>,
) -> RecordDifferencesAs {
    RecordDifferencesAs::new(Outcome::Equal, kinds)
}

/// Report differences of the listed kinds at reduced severity.
pub fn downgrade_differences_to_similar(
    kinds: impl IntoIterator<Item = ComparisonType>,
) -> RecordDifferencesAs {
    RecordDifferencesAs::new(Outcome::Similar, kinds)
}

/// Treat differences of the listed kinds as real even when another rule
/// softened them.
pub fn upgrade_differences_to_different(
    kinds: impl IntoIterator<Item = ComparisonType>,
) -> RecordDifferencesAs {
    RecordDifferencesAs::new(Outcome::Different, kinds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::Detail;

    fn any_comparison() -> Comparison {
        Comparison::new(
            ComparisonType::TextValue,
            Detail::at("/a[1]", "x"),
            Detail::at("/a[1]", "y"),
        )
    }

    #[test]
    fn record_as_only_touches_listed_kinds() {
        let policy = downgrade_differences_to_equal([ComparisonType::NamespaceUri]);
        assert_eq!(
            policy.evaluate(&any_comparison(), Outcome::Different),
            Outcome::Different
        );

        let listed = Comparison::new(
            ComparisonType::NamespaceUri,
            Detail::new("urn:a"),
            Detail::new("urn:b"),
        );
        assert_eq!(policy.evaluate(&listed, Outcome::Different), Outcome::Equal);
        assert_eq!(policy.evaluate(&listed, Outcome::Similar), Outcome::Equal);
        assert_eq!(policy.evaluate(&listed, Outcome::Equal), Outcome::Equal);
    }

    #[test]
    fn upgrade_restores_severity_inside_a_chain() {
        let policy = chain([
            crate::default_evaluator(),
            Arc::new(upgrade_differences_to_different([
                ComparisonType::NamespacePrefix,
            ])) as Arc<dyn Evaluator>,
        ]);
        let prefix = Comparison::new(
            ComparisonType::NamespacePrefix,
            Detail::new("a"),
            Detail::new("b"),
        );
        // The default table downgrades to SIMILAR, the upgrade puts it back.
        assert_eq!(policy.evaluate(&prefix, Outcome::Different), Outcome::Different);
    }
}
