//! iejoin - A strict, deterministic inequality-join execution core
//!
//! Evaluates joins and self-joins defined by inequality predicates
//! (`t1.X op1 t2.Xr AND t1.Y op2 t2.Yr`, op in {<, <=, >, >=}) in
//! O((m+n) log(m+n)) by sorting projected columns, building
//! permutation/offset arrays, and sweeping a candidate bit-vector.
//!
//! The caller supplies materialized tables and parsed predicates and
//! consumes the pair set in full; this crate does not parse SQL, read
//! files, or retain state across calls.

pub mod join;
pub mod observability;
pub mod predicate;
pub mod table;
