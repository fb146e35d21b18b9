//! Condition algebra for rule applicability
//!
//! A [`Condition`] is an immutable predicate over a single element. Leaf
//! predicates are wrapped closures; `&`, `|` and `!` compose them. Evaluation
//! is pure and total: a missing property means "does not match", never an
//! error.

use crate::element::Element;
use std::fmt;
use std::sync::Arc;

type Predicate = Arc<dyn Fn(&dyn Element) -> bool + Send + Sync>;

/// Composable predicate selecting which elements a rule applies to.
#[derive(Clone)]
pub enum Condition {
    /// Matches every element.
    True,
    /// Matches no element.
    False,
    /// Leaf predicate testing one property, pattern, or attribute.
    Property { description: String, predicate: Predicate },
    Not(Box<Condition>),
    And(Vec<Condition>),
    Or(Vec<Condition>),
}

impl Condition {
    /// Create a leaf condition from a predicate closure. The description is
    /// recorded on rule metadata for reporting.
    pub fn new<F>(description: &str, predicate: F) -> Self
    where
        F: Fn(&dyn Element) -> bool + Send + Sync + 'static,
    {
        Condition::Property {
            description: description.to_string(),
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the condition against an element.
    ///
    /// AND short-circuits on the first non-match, OR on the first match.
    pub fn matches(&self, element: &dyn Element) -> bool {
        match self {
            Condition::True => true,
            Condition::False => false,
            Condition::Property { predicate, .. } => predicate(element),
            Condition::Not(inner) => !inner.matches(element),
            Condition::And(parts) => parts.iter().all(|c| c.matches(element)),
            Condition::Or(parts) => parts.iter().any(|c| c.matches(element)),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, parts: &[Condition], op: &str) -> fmt::Result {
            write!(f, "(")?;
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    write!(f, " {} ", op)?;
                }
                write!(f, "{}", part)?;
            }
            write!(f, ")")
        }

        match self {
            Condition::True => write!(f, "true"),
            Condition::False => write!(f, "false"),
            Condition::Property { description, .. } => write!(f, "{}", description),
            Condition::Not(inner) => write!(f, "not {}", inner),
            Condition::And(parts) => join(f, parts, "and"),
            Condition::Or(parts) => join(f, parts, "or"),
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Condition({})", self)
    }
}

// AND/OR composition flattens nested combinators of the same kind, so long
// chains build one wide node instead of a deep tree. Composition stays
// associative either way; flattening just keeps evaluation iterative.
impl std::ops::BitAnd for Condition {
    type Output = Condition;

    fn bitand(self, rhs: Condition) -> Condition {
        let mut parts = match self {
            Condition::And(parts) => parts,
            other => vec![other],
        };
        match rhs {
            Condition::And(rhs_parts) => parts.extend(rhs_parts),
            other => parts.push(other),
        }
        Condition::And(parts)
    }
}

impl std::ops::BitOr for Condition {
    type Output = Condition;

    fn bitor(self, rhs: Condition) -> Condition {
        let mut parts = match self {
            Condition::Or(parts) => parts,
            other => vec![other],
        };
        match rhs {
            Condition::Or(rhs_parts) => parts.extend(rhs_parts),
            other => parts.push(other),
        }
        Condition::Or(parts)
    }
}

impl std::ops::Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        match self {
            Condition::True => Condition::False,
            Condition::False => Condition::True,
            Condition::Not(inner) => *inner,
            other => Condition::Not(Box::new(other)),
        }
    }
}
