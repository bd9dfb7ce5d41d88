//! # Partition Lattice
//!
//! The partitions of a finite set, ordered by refinement, form a lattice. This crate enumerates
//! that lattice for small sets and provides the operations on it:
//!
//! - [refinement](crate::partition::refines): `P ≤ Q` iff every block of `P` lies inside a block
//!   of `Q`, so finer partitions are *lower*;
//! - [join](crate::partition::join): the coarsest partition refined by both inputs, computed with
//!   union-find over the ground set;
//! - [meet](crate::partition::meet): the finest partition refining both inputs;
//! - [cover edges](crate::order::cover_edges) for drawing a Hasse diagram;
//! - [generative effects](crate::monotone) of monotone maps which do not preserve joins.
//!
//! For example, on `{1, 2, 3, 4}`:
//!
//! ```text
//!            {{1, 2, 3, 4}}
//!             /          \
//!    {{1, 2}, {3, 4}}   {{1, 3}, {2, 4}}
//!             \          /
//!       {{1}, {2}, {3}, {4}}
//! ```
//!
//! Neither `{{1, 2}, {3, 4}}` nor `{{1, 3}, {2, 4}}` puts `1` and `4` together, but their join
//! does:
//!
//! ```rust
//! use partition_lattice::prelude::*;
//!
//! let ground = GroundSet::new(1..=4);
//! let p = Partition::new(&ground, vec![vec![1, 2], vec![3, 4]]).unwrap();
//! let q = Partition::new(&ground, vec![vec![1, 3], vec![2, 4]]).unwrap();
//!
//! let pq = join(&p, &q, &ground).unwrap();
//! assert_eq!(pq, Partition::indiscrete(&ground));
//! assert!(p <= pq && q <= pq);
//!
//! // Φ(P) = "1 and 4 share a block" is monotone, but Φ(P) ∨ Φ(Q) < Φ(P ∨ Q).
//! let effect = generative_effect(&SameBlock::new(1, 4), &p, &q, &ground).unwrap();
//! assert!(effect.is_generative());
//!
//! // The whole lattice has 15 elements; only the top lies above both p and q.
//! let lattice = PartitionLattice::new(ground);
//! assert_eq!(lattice.len(), 15);
//! assert_eq!(lattice.upper_bounds(&p, &q).len(), 1);
//! ```
//!
//! # Features
//!
//! - `log`: emit diagnostics through the [`log`](https://docs.rs/log) crate
//! - `serde`: `Serialize` for [`GroundSet`](crate::partition::GroundSet),
//!   [`Partition`](crate::partition::Partition) and [`CoverEdge`](crate::order::CoverEdge)
//! - `cli`: the `partition-lattice` command-line driver

mod log;

pub mod error;
pub mod lattice;
pub mod monotone;
pub mod order;
pub mod partition;
pub mod union_find;

pub mod prelude {
    //! The types and functions needed for most uses of the crate.
    pub use crate::error::PartitionError;
    pub use crate::lattice::{BoundCheck, PartitionLattice};
    pub use crate::monotone::{generative_effect, GenerativeEffect, MonotoneMap, SameBlock};
    pub use crate::order::{CoverEdge, JoinSemilattice};
    pub use crate::partition::{
        bell_number, enumerate_partitions, join, meet, refines, GroundSet, Partition,
    };
}
