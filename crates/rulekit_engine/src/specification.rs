//! Specifications: single-purpose predicates over an object.
//!
//! A specification either accepts an object or rejects it with exactly one
//! [`ValidationFailure`]. Any `Fn(&T) -> Verdict` closure is a
//! specification, so most callers never implement the trait by hand.

use rulekit_foundation::ValidationFailure;

/// Outcome of verifying one object against one specification.
pub type Verdict = std::result::Result<(), ValidationFailure>;

/// A reusable predicate over `T`.
///
/// Implementations must not depend on the rule tree they are placed in; the
/// same specification may sit in many trees and check many objects.
pub trait Specification<T: ?Sized>: Send + Sync {
    /// Checks the object, returning the reason it was rejected if it was.
    ///
    /// # Errors
    /// Returns a [`ValidationFailure`] carrying one message when the object
    /// does not satisfy this specification.
    fn verify(&self, object: &T) -> Verdict;

    /// Short name used in traces and explanations.
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl<T: ?Sized, F> Specification<T> for F
where
    F: Fn(&T) -> Verdict + Send + Sync,
{
    fn verify(&self, object: &T) -> Verdict {
        self(object)
    }
}

/// A specification with an explicit display name.
#[derive(Clone, Debug)]
pub struct Named<S> {
    name: String,
    spec: S,
}

impl<S> Named<S> {
    /// Returns the wrapped specification.
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.spec
    }
}

impl<T: ?Sized, S: Specification<T>> Specification<T> for Named<S> {
    fn verify(&self, object: &T) -> Verdict {
        self.spec.verify(object)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Gives a specification a name for traces and explanations.
///
/// Closures otherwise report a generic `{{closure}}` name.
#[must_use]
pub fn named<S>(name: impl Into<String>, spec: S) -> Named<S> {
    Named {
        name: name.into(),
        spec,
    }
}

/// Accepts when `condition` holds, otherwise fails with `message`.
///
/// # Errors
/// Returns a [`ValidationFailure`] with `message` when `condition` is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> Verdict {
    if condition {
        Ok(())
    } else {
        Err(ValidationFailure::new(message))
    }
}

/// Strips module paths and generic arguments from a type name.
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
