// src/ui/measure.rs
//! Axis constraints and the per-view sizing rules built on them
//!
//! A parent hands each child one [`AxisConstraint`] per axis on every layout
//! pass. Leaf views turn a constraint into a concrete pixel size with one of
//! the resolve helpers below; containers aggregate the results.

/// Layout directive for a single axis (width or height).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisConstraint {
    /// The parent has decided the size; the child must use it.
    Exact(u32),
    /// The child may be as large as it wants up to this size ("wrap content").
    AtMost(u32),
    /// The parent imposes nothing.
    Unspecified,
}

impl AxisConstraint {
    /// Size carried by the constraint, if any.
    pub fn size(&self) -> Option<u32> {
        match *self {
            AxisConstraint::Exact(size) | AxisConstraint::AtMost(size) => Some(size),
            AxisConstraint::Unspecified => None,
        }
    }

    pub fn is_at_most(&self) -> bool {
        matches!(self, AxisConstraint::AtMost(_))
    }
}

/// Use the constrained size whenever one is given, otherwise `default`.
///
/// `AtMost` is treated as "take everything offered".
pub fn resolve_or_default(default: u32, constraint: AxisConstraint) -> u32 {
    match constraint {
        AxisConstraint::Exact(size) | AxisConstraint::AtMost(size) => size,
        AxisConstraint::Unspecified => default,
    }
}

/// Honour `Exact`, cap `AtMost` at `default`, and fall back to `default`.
pub fn resolve_capped(default: u32, constraint: AxisConstraint) -> u32 {
    match constraint {
        AxisConstraint::Exact(size) => size,
        AxisConstraint::AtMost(size) => size.min(default),
        AxisConstraint::Unspecified => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_or_default() {
        assert_eq!(resolve_or_default(100, AxisConstraint::Unspecified), 100);
        assert_eq!(resolve_or_default(100, AxisConstraint::AtMost(40)), 40);
        assert_eq!(resolve_or_default(100, AxisConstraint::AtMost(400)), 400);
        assert_eq!(resolve_or_default(100, AxisConstraint::Exact(250)), 250);
    }

    #[test]
    fn test_resolve_capped() {
        assert_eq!(resolve_capped(800, AxisConstraint::Unspecified), 800);
        assert_eq!(resolve_capped(800, AxisConstraint::AtMost(320)), 320);
        assert_eq!(resolve_capped(800, AxisConstraint::AtMost(1200)), 800);
        assert_eq!(resolve_capped(800, AxisConstraint::Exact(1200)), 1200);
    }

    #[test]
    fn test_constraint_size() {
        assert_eq!(AxisConstraint::Exact(5).size(), Some(5));
        assert_eq!(AxisConstraint::AtMost(7).size(), Some(7));
        assert_eq!(AxisConstraint::Unspecified.size(), None);
        assert!(AxisConstraint::AtMost(7).is_at_most());
        assert!(!AxisConstraint::Exact(7).is_at_most());
    }
}
