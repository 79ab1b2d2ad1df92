//! # Twite
//!
//! Twite is a Rust library dedicated to permutations of a finite ground set
//! `{1..n}` and the small groups they generate. Its primary focus is on
//! providing tools for composing and inverting permutations, reading and
//! writing disjoint-cycle notation, and saturating a handful of generators
//! into the full group they span.
//!
//! This library is useful for scenarios where you need to enumerate a small
//! concrete group (cyclic, dihedral, ...) from its generators, compare or
//! conjugate such groups, or render their multiplication tables.

pub mod group;
pub mod notation;
pub mod permutation;
pub mod table;
