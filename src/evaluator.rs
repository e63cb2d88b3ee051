//! The evaluator contract and the built-in evaluators.
//!
//! An [`Evaluator`] turns the raw verdict the traversal engine computed for a
//! [`Comparison`] into the verdict the caller wants reported. It must be a
//! total, deterministic, side-effect-free function of its two inputs: same
//! inputs, same output, no hidden state, no I/O. Comparison kinds an
//! evaluator does not recognize pass through unchanged.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::comparison::{Comparison, ComparisonType, NodeKind};
use crate::outcome::Outcome;

/// Revises the severity verdict for a single discovered difference.
///
/// Implementations may leave, upgrade, or downgrade the incoming outcome.
/// Any `Fn(&Comparison, Outcome) -> Outcome` closure qualifies through the
/// blanket impl, so ad-hoc policies need no named type:
///
/// ```
/// use treecmp::{Comparison, ComparisonType, Detail, Evaluator, Outcome};
///
/// let ignore_text = |comparison: &Comparison, outcome: Outcome| {
///     if comparison.kind() == ComparisonType::TextValue {
///         Outcome::Equal
///     } else {
///         outcome
///     }
/// };
///
/// let comparison = Comparison::new(
///     ComparisonType::TextValue,
///     Detail::new("a"),
///     Detail::new("b"),
/// );
/// assert_eq!(ignore_text.evaluate(&comparison, Outcome::Different), Outcome::Equal);
/// ```
pub trait Evaluator: Send + Sync {
    /// Revise `outcome` for `comparison`. Must be pure and total.
    fn evaluate(&self, comparison: &Comparison, outcome: Outcome) -> Outcome;
}

impl<F> Evaluator for F
where
    F: Fn(&Comparison, Outcome) -> Outcome + Send + Sync,
{
    fn evaluate(&self, comparison: &Comparison, outcome: Outcome) -> Outcome {
        self(comparison, outcome)
    }
}

/// Echoes the incoming outcome untouched.
///
/// The neutral element of composition, and the policy for callers who trust
/// the engine's raw verdict as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accept;

impl Evaluator for Accept {
    fn evaluate(&self, _comparison: &Comparison, outcome: Outcome) -> Outcome {
        outcome
    }
}

/// The standard rule table deciding which differences make two documents
/// really different and which still leave them similar.
///
/// Only acts on an incoming [`Outcome::Different`]; everything else passes
/// through, so this evaluator only ever downgrades a verdict:
///
/// - `NodeType` where one side is a text node and the other a CDATA section
///   (either direction) becomes `Similar` — the two are interchangeable
///   content encodings, not a structural difference.
/// - Doctype presence and system id, schema locations, namespace prefixes,
///   explicitly-specified-vs-defaulted attribute values, sibling ordering,
///   and the declared encoding are cosmetic by default and become `Similar`.
/// - Every other kind stays `Different`.
///
/// Callers override or extend the table by composing around it with
/// [`first`](crate::first) / [`chain`](crate::chain) rather than editing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEvaluator;

impl Evaluator for DefaultEvaluator {
    fn evaluate(&self, comparison: &Comparison, outcome: Outcome) -> Outcome {
        if outcome != Outcome::Different {
            return outcome;
        }
        match comparison.kind() {
            ComparisonType::NodeType => {
                let control = comparison.control().value.as_node_kind();
                let test = comparison.test().value.as_node_kind();
                match (control, test) {
                    (Some(c), Some(t)) if text_and_cdata(c, t) => Outcome::Similar,
                    _ => outcome,
                }
            }
            ComparisonType::HasDoctypeDeclaration
            | ComparisonType::DoctypeSystemId
            | ComparisonType::SchemaLocation
            | ComparisonType::NoNamespaceSchemaLocation
            | ComparisonType::NamespacePrefix
            | ComparisonType::AttrValueExplicitlySpecified
            | ComparisonType::ChildNodelistSequence
            | ComparisonType::XmlEncoding => Outcome::Similar,
            _ => outcome,
        }
    }
}

fn text_and_cdata(a: NodeKind, b: NodeKind) -> bool {
    matches!(
        (a, b),
        (NodeKind::Text, NodeKind::CdataSection) | (NodeKind::CdataSection, NodeKind::Text)
    )
}

static ACCEPT: Lazy<Arc<dyn Evaluator>> = Lazy::new(|| Arc::new(Accept));
static DEFAULT: Lazy<Arc<dyn Evaluator>> = Lazy::new(|| Arc::new(DefaultEvaluator));

/// Shared handle to the process-wide [`Accept`] instance.
///
/// Initialized once, immutable thereafter; safe to use from any number of
/// concurrent comparison runs.
pub fn accept() -> Arc<dyn Evaluator> {
    Arc::clone(&ACCEPT)
}

/// Shared handle to the process-wide [`DefaultEvaluator`] instance.
///
/// Initialized once, immutable thereafter; safe to use from any number of
/// concurrent comparison runs.
pub fn default_evaluator() -> Arc<dyn Evaluator> {
    Arc::clone(&DEFAULT)
}
