//! # Permutations
//!
//! This module provides a [`Permutation`] struct and associated functionality
//! for representing and working with permutations of the ground set `{1..n}`.
//!
//! ## Key Features:
//!
//! - **Representation**: a `Permutation` is stored by its direct mapping
//!   together with its inverse mapping, so evaluation and inversion are both
//!   cheap. Points are 1-based at the API surface.
//! - **Construction**:
//!   - Identity permutation: [`Permutation::identity`].
//!   - From the list of images of `1, 2, ..., n`: [`Permutation::from_images`].
//!   - From disjoint cycles: [`Permutation::from_cycles`].
//!   - From cycle-notation text: `"(1 2 3)".parse()` (the grammar lives in
//!     [`crate::notation`]).
//! - **Basic Operations**:
//!   - Evaluation: `p.apply(x)`.
//!   - Composition: `p.compose(&q)` (applies `q` first, then `p`).
//!   - Inverse: `p.inverse()`.
//!   - Power: `p.pow(k)`, negative exponents being powers of the inverse.
//!   - Sign: `p.sign()` (+1 for even, -1 for odd).
//!   - Check for identity: `p.is_identity()`.
//! - **Cycle Utilities**:
//!   - Canonical cycle decomposition: `p.cycles()`.
//!   - Element order and the cyclic subgroup spanned by the element:
//!     `p.order()`, `p.cyclic_subgroup()`.
//! - **Conjugation**: `g.conjugated_by(&p)` computes `p ∘ g ∘ p⁻¹`.
//!
//! Rendering is canonical: [`std::fmt::Display`] emits exactly one string per
//! mapping, and that string parses back to an equal permutation.

use std::fmt;

use thiserror::Error;

/// Errors arising from permutation construction and element operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    /// Two permutations over different ground sets were combined.
    #[error("degree mismatch: cannot combine permutations of {{1..{0}}} and {{1..{1}}}")]
    DegreeMismatch(usize, usize),
    /// A permutation was evaluated at a point outside its ground set.
    #[error("point {point} is outside the ground set {{1..{degree}}}")]
    PointOutOfDomain { point: usize, degree: usize },
    /// An image list that does not describe a bijection of `{1..n}`.
    #[error("image list is not a bijection of {{1..{degree}}}")]
    NotABijection { degree: usize },
    /// Cycles that repeat a point or fail to cover `{1..n}` exactly.
    #[error("cycles do not partition the ground set {{1..{degree}}}")]
    NotAPartition { degree: usize },
}

/// A permutation of the ground set `{1..n}`, stored as a bijective mapping.
///
/// Two permutations are equal exactly when their mappings agree, independent
/// of how they were written down; hashing follows the same rule, so
/// permutations can key hash sets and maps directly.
///
/// # Examples
///
/// ```
/// use twite::permutation::Permutation;
///
/// // The rotation sending 1 -> 2, 2 -> 3, 3 -> 1
/// let p = Permutation::from_images(&[2, 3, 1]).unwrap();
///
/// assert_eq!(p.apply(1).unwrap(), 2);
/// assert_eq!(p.to_string(), "(1 2 3)");
/// assert_eq!(p.order(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<usize>", try_from = "Vec<usize>")
)]
pub struct Permutation {
    map: Vec<usize>,
    inv: Vec<usize>,
}

impl Permutation {
    // --------------------------------------------------------------------------------------------
    // Constructors and Accessors
    // --------------------------------------------------------------------------------------------

    /// Creates the identity permutation on `{1..n}`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use twite::permutation::Permutation;
    /// let p = Permutation::identity(4);
    /// assert_eq!(p.apply(3).unwrap(), 3);
    /// assert!(p.is_identity());
    /// ```
    pub fn identity(degree: usize) -> Self {
        Permutation {
            map: (0..degree).collect(),
            inv: (0..degree).collect(),
        }
    }

    /// Creates a permutation from the list of images of `1, 2, ..., n`:
    /// `images[i]` is the image of the point `i + 1`.
    ///
    /// The list must name every point of `{1..n}` exactly once, where `n` is
    /// its length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use twite::permutation::Permutation;
    /// let p = Permutation::from_images(&[3, 1, 2]).unwrap();
    /// assert_eq!(p.apply(1).unwrap(), 3);
    ///
    /// assert!(Permutation::from_images(&[1, 1, 3]).is_err());
    /// ```
    pub fn from_images(images: &[usize]) -> Result<Self, PermutationError> {
        let degree = images.len();
        let mut seen = vec![false; degree];
        let mut map = Vec::with_capacity(degree);
        for &image in images {
            if image == 0 || image > degree || std::mem::replace(&mut seen[image - 1], true) {
                return Err(PermutationError::NotABijection { degree });
            }
            map.push(image - 1);
        }
        Ok(Self::from_index_map(map))
    }

    /// Creates a permutation from disjoint cycles over 1-based points.
    ///
    /// The cycles must cover every point of `{1..n}` exactly once, where `n`
    /// is the total number of points named; fixed points are written as
    /// singleton cycles. This is the validated core behind the cycle-notation
    /// parser in [`crate::notation`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use twite::permutation::Permutation;
    /// let p = Permutation::from_cycles(&[vec![1, 2, 3], vec![4, 5]]).unwrap();
    /// assert_eq!(p, Permutation::from_images(&[2, 3, 1, 5, 4]).unwrap());
    ///
    /// // Point 2 appears twice, so the cycles are not disjoint.
    /// assert!(Permutation::from_cycles(&[vec![1, 2], vec![2, 3]]).is_err());
    /// ```
    pub fn from_cycles(cycles: &[Vec<usize>]) -> Result<Self, PermutationError> {
        let degree = cycles.iter().map(Vec::len).sum();
        let mut seen = vec![false; degree];
        for &point in cycles.iter().flatten() {
            if point == 0 || point > degree || std::mem::replace(&mut seen[point - 1], true) {
                return Err(PermutationError::NotAPartition { degree });
            }
        }
        let mut map = vec![0; degree];
        for cycle in cycles {
            for (i, &point) in cycle.iter().enumerate() {
                let next = cycle[(i + 1) % cycle.len()];
                map[point - 1] = next - 1;
            }
        }
        Ok(Self::from_index_map(map))
    }

    /// Builds a permutation from a 0-based index mapping already known to be
    /// a bijection of `0..n`.
    fn from_index_map(map: Vec<usize>) -> Self {
        let mut inv = vec![0; map.len()];
        for (i, &j) in map.iter().enumerate() {
            inv[j] = i;
        }
        Permutation { map, inv }
    }

    /// The size `n` of the ground set `{1..n}`.
    pub fn degree(&self) -> usize {
        self.map.len()
    }

    /// The images of `1, 2, ..., n` in point order, inverse to
    /// [`from_images`](Self::from_images).
    pub fn images(&self) -> Vec<usize> {
        self.map.iter().map(|&i| i + 1).collect()
    }

    /// Returns true if the permutation fixes every point.
    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(i, &image)| i == image)
    }

    // --------------------------------------------------------------------------------------------
    // Basic Operations
    // --------------------------------------------------------------------------------------------

    /// The image of `point` under this permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use twite::permutation::Permutation;
    /// let p: Permutation = "(1 2)(3)".parse().unwrap();
    /// assert_eq!(p.apply(1).unwrap(), 2);
    /// assert!(p.apply(4).is_err());
    /// ```
    pub fn apply(&self, point: usize) -> Result<usize, PermutationError> {
        if point == 0 || point > self.degree() {
            return Err(PermutationError::PointOutOfDomain {
                point,
                degree: self.degree(),
            });
        }
        Ok(self.map[point - 1] + 1)
    }

    /// Composes two permutations of the same ground set: the result applies
    /// `other` first and `self` second, `(self ∘ other)(x) = self(other(x))`.
    ///
    /// Composition is associative but not commutative. Every product in this
    /// crate (powers, closure, conjugation, tables) follows this convention.
    ///
    /// # Examples
    ///
    /// ```
    /// # use twite::permutation::Permutation;
    /// let a: Permutation = "(1 2 3)".parse().unwrap();
    /// let b: Permutation = "(1 2)(3)".parse().unwrap();
    /// assert_eq!(a.compose(&b).unwrap().to_string(), "(1 3)(2)");
    /// assert_eq!(b.compose(&a).unwrap().to_string(), "(1)(2 3)");
    /// ```
    pub fn compose(&self, other: &Self) -> Result<Self, PermutationError> {
        if self.degree() != other.degree() {
            return Err(PermutationError::DegreeMismatch(
                self.degree(),
                other.degree(),
            ));
        }
        Ok(self.compose_unchecked(other))
    }

    /// Composition without the degree check, for callers that already know
    /// both operands share a ground set.
    pub(crate) fn compose_unchecked(&self, other: &Self) -> Self {
        let map = other.map.iter().map(|&i| self.map[i]).collect();
        Self::from_index_map(map)
    }

    /// The inverse permutation, mapping `p(x)` back to `x` for every point.
    ///
    /// The inverse mapping is carried alongside the direct one, so this only
    /// swaps the two.
    ///
    /// # Examples
    ///
    /// ```
    /// # use twite::permutation::Permutation;
    /// let p: Permutation = "(1 2 3)".parse().unwrap();
    /// assert_eq!(p.inverse().to_string(), "(1 3 2)");
    /// assert!(p.compose(&p.inverse()).unwrap().is_identity());
    /// ```
    pub fn inverse(&self) -> Self {
        Permutation {
            map: self.inv.clone(),
            inv: self.map.clone(),
        }
    }

    /// The `exp`-th power under composition. `pow(0)` is the identity and
    /// negative exponents are powers of the inverse.
    ///
    /// # Examples
    ///
    /// ```
    /// # use twite::permutation::Permutation;
    /// let p: Permutation = "(1 2 3 4 5)".parse().unwrap();
    /// assert_eq!(p.pow(2).to_string(), "(1 3 5 2 4)");
    /// assert!(p.pow(5).is_identity());
    /// assert_eq!(p.pow(-1), p.inverse());
    /// ```
    pub fn pow(&self, exp: i64) -> Self {
        let mut base = if exp < 0 { self.inverse() } else { self.clone() };
        let mut exp = exp.unsigned_abs();
        let mut result = Self::identity(self.degree());
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.compose_unchecked(&base);
            }
            base = base.compose_unchecked(&base);
            exp >>= 1;
        }
        result
    }

    /// The order of the element: the smallest `k >= 1` with `self^k` the
    /// identity. Always finite, since it divides `n!`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use twite::permutation::Permutation;
    /// let p: Permutation = "(1 2 3 4 5)".parse().unwrap();
    /// assert_eq!(p.order(), 5);
    /// ```
    pub fn order(&self) -> usize {
        let mut power = self.clone();
        let mut order = 1;
        while !power.is_identity() {
            power = power.compose_unchecked(self);
            order += 1;
        }
        order
    }

    /// The cyclic subgroup generated by this element: the powers `self^1,
    /// self^2, ...` up to and including the identity, in that order. Its
    /// length equals [`order`](Self::order).
    ///
    /// # Examples
    ///
    /// ```
    /// # use twite::permutation::Permutation;
    /// let p: Permutation = "(1 2)(3)".parse().unwrap();
    /// let powers = p.cyclic_subgroup();
    /// assert_eq!(powers.len(), 2);
    /// assert!(powers[1].is_identity());
    /// ```
    pub fn cyclic_subgroup(&self) -> Vec<Permutation> {
        let mut powers = Vec::new();
        let mut current = self.clone();
        while !current.is_identity() {
            powers.push(current.clone());
            current = current.compose_unchecked(self);
        }
        powers.push(current);
        powers
    }

    // --------------------------------------------------------------------------------------------
    // Cycle Utilities
    // --------------------------------------------------------------------------------------------

    /// The canonical disjoint-cycle decomposition over 1-based points.
    ///
    /// The first cycle starts at point 1, every later cycle starts at the
    /// smallest point not yet visited, and fixed points appear as singleton
    /// cycles. The [`std::fmt::Display`] string is built from exactly this
    /// decomposition, which makes it canonical for a given mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// # use twite::permutation::Permutation;
    /// let p = Permutation::from_images(&[1, 4, 5, 2, 3]).unwrap();
    /// assert_eq!(p.cycles(), vec![vec![1], vec![2, 4], vec![3, 5]]);
    /// ```
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.map.len()];
        let mut cycles = Vec::new();
        for start in 0..self.map.len() {
            if visited[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut point = start;
            while !visited[point] {
                visited[point] = true;
                cycle.push(point + 1);
                point = self.map[point];
            }
            cycles.push(cycle);
        }
        cycles
    }

    /// The sign of the permutation: `+1` if it is a product of an even number
    /// of transpositions, `-1` otherwise.
    pub fn sign(&self) -> i8 {
        let mut sign = 1;
        for cycle in self.cycles() {
            if cycle.len() % 2 == 0 {
                sign = -sign;
            }
        }
        sign
    }

    /// The conjugate `p ∘ self ∘ p⁻¹` of this permutation by `p`.
    ///
    /// Conjugation relabels points: the cycles of the result are the cycles
    /// of `self` with every point replaced by its image under `p`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use twite::permutation::Permutation;
    /// let g: Permutation = "(1 2)(3)".parse().unwrap();
    /// let p: Permutation = "(1 2 3)".parse().unwrap();
    /// assert_eq!(g.conjugated_by(&p).unwrap().to_string(), "(1)(2 3)");
    /// ```
    pub fn conjugated_by(&self, p: &Permutation) -> Result<Permutation, PermutationError> {
        if self.degree() != p.degree() {
            return Err(PermutationError::DegreeMismatch(self.degree(), p.degree()));
        }
        Ok(p.compose_unchecked(&self.compose_unchecked(&p.inverse())))
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(perm: Permutation) -> Self {
        perm.images()
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = PermutationError;

    fn try_from(images: Vec<usize>) -> Result<Self, Self::Error> {
        Self::from_images(&images)
    }
}

impl fmt::Display for Permutation {
    /// Writes the canonical disjoint-cycle notation, e.g. `(1 2 3 4 5)` or
    /// `(1)(2 5)(3 4)`. Fixed points are written as singleton cycles, so the
    /// string always names the whole ground set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.map.is_empty() {
            return f.write_str("()");
        }
        for cycle in self.cycles() {
            f.write_str("(")?;
            for (i, point) in cycle.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{point}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn perm(images: &[usize]) -> Permutation {
        Permutation::from_images(images).unwrap()
    }

    #[test]
    fn test_identity() {
        let id = Permutation::identity(4);
        assert!(id.is_identity());
        assert_eq!(id.degree(), 4);
        for point in 1..=4 {
            assert_eq!(id.apply(point).unwrap(), point);
        }
        assert_eq!(id.order(), 1);
        assert_eq!(id.sign(), 1);
    }

    #[test]
    fn test_apply() {
        let p = perm(&[2, 3, 1]);
        assert_eq!(p.apply(1).unwrap(), 2);
        assert_eq!(p.apply(2).unwrap(), 3);
        assert_eq!(p.apply(3).unwrap(), 1);
        assert_eq!(
            p.apply(0),
            Err(PermutationError::PointOutOfDomain {
                point: 0,
                degree: 3
            })
        );
        assert_eq!(
            p.apply(4),
            Err(PermutationError::PointOutOfDomain {
                point: 4,
                degree: 3
            })
        );
    }

    #[test]
    fn test_from_images_rejects_non_bijections() {
        assert_eq!(
            Permutation::from_images(&[1, 1, 3]),
            Err(PermutationError::NotABijection { degree: 3 })
        );
        assert_eq!(
            Permutation::from_images(&[1, 2, 4]),
            Err(PermutationError::NotABijection { degree: 3 })
        );
        assert_eq!(
            Permutation::from_images(&[0, 1, 2]),
            Err(PermutationError::NotABijection { degree: 3 })
        );
    }

    #[test]
    fn test_from_cycles() {
        let p = Permutation::from_cycles(&[vec![1, 2, 3], vec![4, 5]]).unwrap();
        assert_eq!(p, perm(&[2, 3, 1, 5, 4]));
        assert_eq!(
            Permutation::from_cycles(&[vec![1, 2], vec![2, 3]]),
            Err(PermutationError::NotAPartition { degree: 4 })
        );
        assert_eq!(
            Permutation::from_cycles(&[vec![1, 3]]),
            Err(PermutationError::NotAPartition { degree: 2 })
        );
    }

    #[test]
    fn test_compose_applies_right_operand_first() {
        let a = perm(&[2, 3, 1]); // (1 2 3)
        let b = perm(&[2, 1, 3]); // (1 2)(3)
        assert_eq!(a.compose(&b).unwrap(), perm(&[3, 2, 1]));
        assert_eq!(b.compose(&a).unwrap(), perm(&[1, 3, 2]));
    }

    #[test]
    fn test_compose_degree_mismatch() {
        let p = perm(&[2, 1]);
        let q = perm(&[2, 3, 1]);
        assert_eq!(p.compose(&q), Err(PermutationError::DegreeMismatch(2, 3)));
    }

    #[test]
    fn test_inverse() {
        let p = perm(&[3, 1, 4, 2, 5]);
        let inv = p.inverse();
        assert!(p.compose(&inv).unwrap().is_identity());
        assert!(inv.compose(&p).unwrap().is_identity());
        assert_eq!(inv.apply(3).unwrap(), 1);
    }

    #[test]
    fn test_pow() {
        let p = perm(&[2, 3, 4, 5, 1]); // (1 2 3 4 5)
        assert!(p.pow(0).is_identity());
        assert_eq!(p.pow(1), p);
        assert_eq!(p.pow(2), p.compose(&p).unwrap());
        assert_eq!(p.pow(-1), p.inverse());
        assert!(p.pow(5).is_identity());
        assert_eq!(p.pow(7), p.pow(2));
        assert_eq!(p.pow(-3), p.inverse().pow(3));
    }

    #[test]
    fn test_order() {
        assert_eq!(perm(&[2, 3, 4, 5, 1]).order(), 5);
        assert_eq!(perm(&[1, 5, 4, 3, 2]).order(), 2);
        // lcm of a 3-cycle and a 2-cycle
        assert_eq!(perm(&[2, 3, 1, 5, 4]).order(), 6);
    }

    #[test]
    fn test_cyclic_subgroup() {
        let p = perm(&[2, 3, 4, 1]); // (1 2 3 4)
        let powers = p.cyclic_subgroup();
        assert_eq!(powers.len(), 4);
        assert_eq!(powers[0], p);
        assert_eq!(powers[1], p.pow(2));
        assert_eq!(powers[2], p.pow(3));
        assert!(powers[3].is_identity());
        assert_eq!(Permutation::identity(3).cyclic_subgroup().len(), 1);
    }

    #[test]
    fn test_cycles_start_at_smallest_unvisited_point() {
        let p = perm(&[1, 4, 5, 2, 3]);
        assert_eq!(p.cycles(), vec![vec![1], vec![2, 4], vec![3, 5]]);
    }

    #[test]
    fn test_sign() {
        assert_eq!(perm(&[2, 1, 3]).sign(), -1);
        assert_eq!(perm(&[2, 3, 1]).sign(), 1);
        assert_eq!(perm(&[2, 3, 4, 1]).sign(), -1);
        assert_eq!(Permutation::identity(5).sign(), 1);
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(perm(&[2, 3, 4, 5, 1]).to_string(), "(1 2 3 4 5)");
        assert_eq!(perm(&[1, 5, 4, 3, 2]).to_string(), "(1)(2 5)(3 4)");
        assert_eq!(Permutation::identity(3).to_string(), "(1)(2)(3)");
        let p = perm(&[10, 2, 3, 4, 5, 6, 7, 8, 9, 1]);
        assert_eq!(p.to_string(), "(1 10)(2)(3)(4)(5)(6)(7)(8)(9)");
    }

    #[test]
    fn test_conjugation_relabels_points() {
        let g = perm(&[2, 1, 3]); // (1 2)(3)
        let p = perm(&[2, 3, 1]); // (1 2 3)
        assert_eq!(g.conjugated_by(&p).unwrap(), perm(&[1, 3, 2]));
        assert_eq!(
            g.conjugated_by(&perm(&[2, 1])),
            Err(PermutationError::DegreeMismatch(3, 2))
        );
    }

    #[test]
    fn test_image_list_conversions() {
        let p = perm(&[3, 1, 2]);
        assert_eq!(p.images(), vec![3, 1, 2]);
        assert_eq!(Vec::from(p.clone()), vec![3, 1, 2]);
        assert_eq!(Permutation::try_from(vec![3, 1, 2]).unwrap(), p);
    }

    fn arbitrary_perm(max_degree: usize) -> impl Strategy<Value = Permutation> {
        (1..=max_degree).prop_flat_map(|n| {
            Just((1..=n).collect::<Vec<usize>>())
                .prop_shuffle()
                .prop_map(|images| Permutation::from_images(&images).unwrap())
        })
    }

    fn arbitrary_perm_triple(
        max_degree: usize,
    ) -> impl Strategy<Value = (Permutation, Permutation, Permutation)> {
        (1..=max_degree).prop_flat_map(|n| {
            let single = Just((1..=n).collect::<Vec<usize>>())
                .prop_shuffle()
                .prop_map(|images| Permutation::from_images(&images).unwrap());
            (single.clone(), single.clone(), single)
        })
    }

    proptest! {
        #[test]
        fn prop_inverse_composes_to_identity(p in arbitrary_perm(12)) {
            prop_assert!(p.compose(&p.inverse()).unwrap().is_identity());
            prop_assert!(p.inverse().compose(&p).unwrap().is_identity());
        }

        #[test]
        fn prop_identity_is_neutral(p in arbitrary_perm(12)) {
            let id = Permutation::identity(p.degree());
            prop_assert_eq!(p.compose(&id).unwrap(), p.clone());
            prop_assert_eq!(id.compose(&p).unwrap(), p);
        }

        #[test]
        fn prop_composition_is_associative((a, b, c) in arbitrary_perm_triple(8)) {
            let left = a.compose(&b).unwrap().compose(&c).unwrap();
            let right = a.compose(&b.compose(&c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_pow_matches_repeated_composition(p in arbitrary_perm(8), k in 0i64..6) {
            let mut expected = Permutation::identity(p.degree());
            for _ in 0..k {
                expected = expected.compose(&p).unwrap();
            }
            prop_assert_eq!(p.pow(k), expected);
        }

        #[test]
        fn prop_order_is_minimal(p in arbitrary_perm(8)) {
            let order = p.order();
            prop_assert!(p.pow(order as i64).is_identity());
            for k in 1..order {
                prop_assert!(!p.pow(k as i64).is_identity());
            }
        }

        #[test]
        fn prop_sign_is_multiplicative((a, b, _) in arbitrary_perm_triple(8)) {
            prop_assert_eq!(a.compose(&b).unwrap().sign(), a.sign() * b.sign());
        }
    }
}
