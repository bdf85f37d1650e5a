//! Edge-weight, degree, and strength statistics.
//!
//! # Overview
//!
//! Every function here is total: an edgeless or empty graph yields `0` or
//! the [`Ranked::empty`](crate::ranked::Ranked::empty) sentinel instead of
//! an error.
//!
//! # Tie-breaks
//!
//! The extremal functions do not all break ties the same way:
//!
//! | Family | Comparison | Tie goes to |
//! |--------|------------|-------------|
//! | [`weight`] (`max/min_edge_weight`) | strict `>` / `<` | first edge |
//! | [`degree`] (plain and weighted) | strict `>` / `<` | first node |
//! | [`strength`] | `>=` / `<=` | last node |
//!
//! The strength family is the odd one out. This is a known inconsistency;
//! both policies are pinned by tests.

pub mod degree;
pub mod strength;
pub mod weight;
