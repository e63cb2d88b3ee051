//! The element-pairing contract consumed by node-list reconciliation.
//!
//! Before the traversal engine can emit ordering or sequence comparisons for
//! two sibling lists, it has to decide which test-tree element corresponds to
//! which control-tree element. An [`ElementQualifier`] answers that question
//! for one candidate pair. Pairing heuristics beyond the trivial ones (by
//! identity attribute, by content similarity, ...) belong to callers and to
//! the engine's own defaults, not to this crate.

/// Decides whether two elements from the control and test sibling lists may
/// be treated as corresponding counterparts.
///
/// Must be pure and total: a boolean for any pair of elements, no side
/// effects, no hidden state. Returning `false` for elements with different
/// tag names is a policy choice, not an error. Generic over the engine's
/// element representation; any `Fn(&E, &E) -> bool` closure qualifies.
pub trait ElementQualifier<E: ?Sized>: Send + Sync {
    /// `true` if `control` and `test` are comparable counterparts.
    fn qualify_for_comparison(&self, control: &E, test: &E) -> bool;
}

impl<E: ?Sized, F> ElementQualifier<E> for F
where
    F: Fn(&E, &E) -> bool + Send + Sync,
{
    fn qualify_for_comparison(&self, control: &E, test: &E) -> bool {
        self(control, test)
    }
}

/// Pairs every element with every candidate, leaving reconciliation to
/// positional order.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifyAll;

impl<E: ?Sized> ElementQualifier<E> for QualifyAll {
    fn qualify_for_comparison(&self, _control: &E, _test: &E) -> bool {
        true
    }
}

/// Pairs nothing; every control/test pair is non-comparable.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifyNone;

impl<E: ?Sized> ElementQualifier<E> for QualifyNone {
    fn qualify_for_comparison(&self, _control: &E, _test: &E) -> bool {
        false
    }
}

/// An element exposing the name [`ByName`] pairs on.
pub trait NamedElement {
    /// The element's qualified name.
    fn name(&self) -> &str;
}

/// Pairs elements that share a name, the usual default pairing policy.
///
/// ```
/// use treecmp::{ByName, ElementQualifier, NamedElement};
///
/// struct Tag(&'static str);
/// impl NamedElement for Tag {
///     fn name(&self) -> &str {
///         self.0
///     }
/// }
///
/// assert!(ByName.qualify_for_comparison(&Tag("order"), &Tag("order")));
/// assert!(!ByName.qualify_for_comparison(&Tag("order"), &Tag("invoice")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ByName;

impl<E: NamedElement> ElementQualifier<E> for ByName {
    fn qualify_for_comparison(&self, control: &E, test: &E) -> bool {
        control.name() == test.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Elem {
        name: &'static str,
    }

    impl NamedElement for Elem {
        fn name(&self) -> &str {
            self.name
        }
    }

    fn pairs() -> (Elem, Elem, Elem) {
        (
            Elem { name: "item" },
            Elem { name: "item" },
            Elem { name: "total" },
        )
    }

    #[test]
    fn trivial_policies_are_total() {
        let (control, matching, other) = pairs();
        assert!(QualifyAll.qualify_for_comparison(&control, &matching));
        assert!(QualifyAll.qualify_for_comparison(&control, &other));
        assert!(!QualifyNone.qualify_for_comparison(&control, &matching));
        assert!(!QualifyNone.qualify_for_comparison(&control, &other));
    }

    #[test]
    fn closures_satisfy_the_contract() {
        let (control, matching, other) = pairs();
        let same_name = |a: &Elem, b: &Elem| a.name == b.name;
        assert!(same_name.qualify_for_comparison(&control, &matching));
        assert!(!same_name.qualify_for_comparison(&control, &other));
    }

    #[test]
    fn by_name_pairs_on_the_exposed_name() {
        let (control, matching, other) = pairs();
        assert!(ByName.qualify_for_comparison(&control, &matching));
        assert!(!ByName.qualify_for_comparison(&control, &other));
    }

    #[test]
    fn qualifiers_are_share_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QualifyAll>();
        assert_send_sync::<QualifyNone>();
        assert_send_sync::<ByName>();
    }
}
