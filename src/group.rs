//! # Permutation Groups
//!
//! Saturation of a set of generators into the full group it spans, together
//! with the group-level utilities built on top of it: membership, set
//! equality, conjugation of a whole group, and the bracketed listing used for
//! console output.
//!
//! A [`PermutationGroup`] is an insertion-ordered, duplicate-free collection
//! of [`Permutation`]s keyed on their mappings. The only constructors run the
//! closure scan, so a value of this type is always an actual group.

use std::fmt;

use ahash::RandomState;
use indexmap::IndexSet;
use itertools::Itertools;
use thiserror::Error;

use crate::notation::{self, NotationError};
use crate::permutation::{Permutation, PermutationError};

type MemberSet = IndexSet<Permutation, RandomState>;

/// Errors arising from generating or transforming permutation groups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// A group cannot be generated from an empty generator list.
    #[error("empty generator list")]
    EmptyGenerators,
    /// A generator or conjugator over the wrong ground set, or cycles that do
    /// not describe a permutation.
    #[error(transparent)]
    Permutation(#[from] PermutationError),
    /// A generator string that failed to parse.
    #[error(transparent)]
    Notation(#[from] NotationError),
    /// The closure outgrew the ambient symmetric group. Unreachable unless
    /// member identity is broken; guards the fixpoint scan against running
    /// forever.
    #[error("closure exceeded the {bound} elements of the ambient symmetric group")]
    ClosureOverflow { bound: usize },
}

/// A finite permutation group over `{1..n}`.
///
/// Members are stored in discovery order: the generators first, then each
/// product in the order the closure scan found it. Equality between groups is
/// set equality and ignores that order.
///
/// # Examples
///
/// ```
/// use twite::group::PermutationGroup;
///
/// let d5 = PermutationGroup::generate_from_notation(&[
///     "(1 2 3 4 5)",
///     "(1)(2 5)(3 4)",
/// ])
/// .unwrap();
///
/// assert_eq!(d5.order(), 10);
/// assert!(d5.is_closed());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PermutationGroup {
    degree: usize,
    members: MemberSet,
}

impl PermutationGroup {
    /// Generates the group spanned by `generators`: the smallest set that
    /// contains them and is closed under composition.
    ///
    /// The scan is a brute-force worklist: every member is composed with
    /// every generator and unseen products are appended, until no product is
    /// new. Since members are keyed on their mappings and a ground set of
    /// size `n` admits only `n!` of them, the scan terminates on every input.
    pub fn generate(generators: &[Permutation]) -> Result<Self, GroupError> {
        let degree = if let Some(first) = generators.first() {
            first.degree()
        } else {
            return Err(GroupError::EmptyGenerators);
        };
        for generator in generators {
            if generator.degree() != degree {
                return Err(PermutationError::DegreeMismatch(degree, generator.degree()).into());
            }
        }

        let bound = symmetric_group_order(degree);
        let mut members = MemberSet::default();
        for generator in generators {
            members.insert(generator.clone());
        }
        let mut next = 0;
        while next < members.len() {
            for generator in generators {
                let product = members[next].compose_unchecked(generator);
                if members.insert(product) && members.len() > bound {
                    return Err(GroupError::ClosureOverflow { bound });
                }
            }
            next += 1;
        }
        Ok(PermutationGroup { degree, members })
    }

    /// Generates a group from generators written in cycle notation.
    ///
    /// Valid notation names every point of its ground set exactly once, so
    /// each string fixes its own degree; the strings must agree on it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use twite::group::PermutationGroup;
    /// let c6 = PermutationGroup::generate_from_notation(&["(123456)"]).unwrap();
    /// assert_eq!(c6.order(), 6);
    /// ```
    pub fn generate_from_notation(generators: &[&str]) -> Result<Self, GroupError> {
        let parsed: Vec<Permutation> = generators
            .iter()
            .map(|text| notation::parse(text))
            .collect::<Result<_, NotationError>>()?;
        Self::generate(&parsed)
    }

    /// The size `n` of the ground set `{1..n}` the members act on.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The number of members, i.e. the order of the group.
    pub fn order(&self) -> usize {
        self.members.len()
    }

    /// Iterates over the members in discovery order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, Permutation> {
        self.members.iter()
    }

    /// The member at `position` in discovery order.
    pub fn get(&self, position: usize) -> Option<&Permutation> {
        self.members.get_index(position)
    }

    /// Membership test, keyed on the mapping.
    pub fn contains(&self, perm: &Permutation) -> bool {
        self.members.contains(perm)
    }

    /// Checks that every ordered pairwise product lands back in the set.
    ///
    /// True for every value of this type; exposed so that the property can be
    /// asserted independently of how the group was produced.
    pub fn is_closed(&self) -> bool {
        self.iter()
            .cartesian_product(self.iter())
            .all(|(a, b)| self.members.contains(&a.compose_unchecked(b)))
    }

    /// Conjugates every member by `p`, returning the group `p G p⁻¹` with
    /// discovery order carried over.
    pub fn conjugate(&self, p: &Permutation) -> Result<PermutationGroup, GroupError> {
        if p.degree() != self.degree {
            return Err(PermutationError::DegreeMismatch(self.degree, p.degree()).into());
        }
        let inverse = p.inverse();
        let mut members = MemberSet::default();
        for g in self.iter() {
            members.insert(p.compose_unchecked(&g.compose_unchecked(&inverse)));
        }
        Ok(PermutationGroup {
            degree: self.degree,
            members,
        })
    }
}

/// Set equality: the same degree and the same members, regardless of the
/// order in which the two closures discovered them.
impl PartialEq for PermutationGroup {
    fn eq(&self, other: &Self) -> bool {
        self.degree == other.degree && self.members == other.members
    }
}

impl Eq for PermutationGroup {}

impl<'a> IntoIterator for &'a PermutationGroup {
    type Item = &'a Permutation;
    type IntoIter = indexmap::set::Iter<'a, Permutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl fmt::Display for PermutationGroup {
    /// Writes the bracketed listing: the order on the first line, then one
    /// member per line in discovery order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[ group of order: {}", self.order())?;
        for member in self.iter() {
            writeln!(f, "{member}")?;
        }
        write!(f, "]")
    }
}

/// The order of the symmetric group on `degree` points, saturating at
/// `usize::MAX` once the factorial overflows.
fn symmetric_group_order(degree: usize) -> usize {
    (2..=degree)
        .try_fold(1usize, |acc, k| acc.checked_mul(k))
        .unwrap_or(usize::MAX)
}
