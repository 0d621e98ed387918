//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** of their own - they are defined entirely by
//! their attribute values. Two identity records holding the same five fields are the
//! same record, no matter where or when they were built.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value carrying the changed field and copies of everything else.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: values are handed to consumers by value
/// - **PartialEq**: values are compared by their attribute values
/// - **Debug**: values show up in logs and test failures
/// - **Send + Sync**: values are shared across threads and tasks without locking
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Avatar {
///     url: String,
/// }
///
/// impl ValueObject for Avatar {}
///
/// let a = Avatar { url: "https://x/y.png".to_string() };
/// let b = Avatar { url: "https://x/y.png".to_string() };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Send + Sync {}
