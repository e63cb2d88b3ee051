//! Difference evaluation core for tree-structured document comparison.
//!
//! A traversal engine walking a control document and a test document emits a
//! [`Comparison`] for every structural mismatch it finds, together with a raw
//! [`Outcome`]. This crate owns what happens next: a caller-selected
//! [`Evaluator`] turns that raw verdict into the verdict that gets reported,
//! and the [`ElementQualifier`] contract tells the engine which elements in
//! two sibling lists are counterparts in the first place. Walking the trees,
//! loading documents, and rendering results all live outside this crate.
//!
//! ## Core Types
//!
//! - [`Outcome`] - severity verdict (`Equal`, `Similar`, `Different`)
//! - [`Comparison`] / [`Detail`] / [`Value`] - one point of difference
//! - [`Evaluator`] - pure `(Comparison, Outcome) -> Outcome` policy
//! - [`First`] / [`Chain`] - composition with distinct algebras
//! - [`ElementQualifier`] - element-pairing contract for sibling lists
//!
//! ## Example
//!
//! ```
//! use treecmp::{default_evaluator, Comparison, ComparisonType, Detail, Evaluator, Outcome};
//!
//! // Sibling order changed; the default table reports it at reduced severity.
//! let comparison = Comparison::new(
//!     ComparisonType::ChildNodelistSequence,
//!     Detail::at("/r[1]/a[1]", 0i64),
//!     Detail::at("/r[1]/a[2]", 1i64),
//! );
//! let verdict = default_evaluator().evaluate(&comparison, Outcome::Different);
//! assert_eq!(verdict, Outcome::Similar);
//! ```
//!
//! ## Purity contract
//!
//! Every evaluator and qualifier must be a total, deterministic,
//! side-effect-free function of its inputs. The crate does not police this;
//! a stateful implementation degrades [`First`]/[`Chain`] composition into
//! order- and timing-dependence rather than crashing. The built-ins are
//! stateless and a single shared instance is safe across any number of
//! concurrent comparison runs.

mod comparison;
mod compose;
mod evaluator;
mod outcome;
mod qualify;

pub use comparison::{
    Comparison, ComparisonType, Detail, NodeKind, UnknownComparisonType, Value,
};
pub use compose::{
    chain, downgrade_differences_to_equal, downgrade_differences_to_similar, first,
    upgrade_differences_to_different, Chain, First, RecordDifferencesAs,
};
pub use evaluator::{accept, default_evaluator, Accept, DefaultEvaluator, Evaluator};
pub use outcome::Outcome;
pub use qualify::{ByName, ElementQualifier, NamedElement, QualifyAll, QualifyNone};

#[cfg(test)]
mod tests {
    mod composition;
    mod default_policy;
}
