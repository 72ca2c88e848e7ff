//! The four ways of handing the addition to [`transform`].

use addend_common::{bind_second, transform, Adder};
use std::fmt;
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Approach {
    /// Named callable carrying the addend as a field.
    Functor,
    /// Closure capturing the addend by value.
    Closure,
    /// Same closure, written out a second time.
    ClosureCopy,
    /// Binary `+` with its right operand bound.
    BoundPlus,
}

impl Approach {
    /// All approaches in the order they are demonstrated.
    pub const ALL: [Approach; 4] = [
        Approach::Functor,
        Approach::Closure,
        Approach::ClosureCopy,
        Approach::BoundPlus,
    ];

    pub fn number(self) -> usize {
        match self {
            Approach::Functor => 1,
            Approach::Closure => 2,
            Approach::ClosureCopy => 3,
            Approach::BoundPlus => 4,
        }
    }

    /// Heading printed before the approach's output, e.g. `approach 1:`.
    pub fn label(self) -> String {
        format!("approach {}:", self.number())
    }

    pub fn description(self) -> &'static str {
        match self {
            Approach::Functor => "named callable",
            Approach::Closure => "closure capturing by value",
            Approach::ClosureCopy => "closure capturing by value, again",
            Approach::BoundPlus => "bound binary operator",
        }
    }

    /// Add `addend` to every element of `seq` using this approach's provider.
    pub fn apply(self, seq: &mut [i32], addend: i32) {
        match self {
            Approach::Functor => transform(seq, Adder::new(addend)),
            Approach::Closure => transform(seq, move |x: i32| x + addend),
            Approach::ClosureCopy => transform(seq, move |x: i32| x + addend),
            Approach::BoundPlus => transform(seq, bind_second(<i32 as Add>::add, addend)),
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_follows_order() {
        for (i, approach) in Approach::ALL.iter().enumerate() {
            assert_eq!(approach.number(), i + 1);
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(Approach::Functor.label(), "approach 1:");
        assert_eq!(Approach::BoundPlus.to_string(), "approach 4:");
    }

    #[test]
    fn test_all_approaches_agree() {
        for approach in Approach::ALL {
            let mut v = vec![1, 2, 3, 4, 5];
            approach.apply(&mut v, 10);
            assert_eq!(v, [11, 12, 13, 14, 15], "{}", approach.description());
        }
    }

    #[test]
    fn test_zero_addend_is_identity() {
        for approach in Approach::ALL {
            let mut v = vec![0];
            approach.apply(&mut v, 0);
            assert_eq!(v, [0]);
        }
    }
}
