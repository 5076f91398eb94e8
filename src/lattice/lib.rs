//! Periodic lattice indexing and symmetry plans.
//!
//! This crate provides the site bookkeeping for a finite periodic box:
//! a mixed-radix bijection between `(sublattice, coordinate)` tuples and
//! linear site identifiers, and permutation "plans" describing how the
//! sites move under translations and point-group operations.  The plans
//! are plain permutations and compose without ever touching geometry
//! again, which is what makes building a whole symmetry group from a
//! couple of generators cheap.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
#[macro_use] extern crate itertools;
#[cfg(test)] extern crate rand;

pub type FailResult<T> = Result<T, failure::Error>;

mod core;
mod oper;
mod algo;

//---------------------------
// public reexports; API

pub use crate::core::lattice::{Lattice, LatticeFamily, Boundary};
pub use crate::core::lattice::{BadBoundaryTagError, CoordinateRankError, SiteOutOfRangeError};

pub use crate::oper::perm::{Perm, Permute, InvalidPermutationError};
pub use crate::oper::plan::{OrbitalPlan, PlanShapeError};

pub use crate::algo::plans::{translation_plan, c4_rotation_plan};
pub use crate::algo::plans::UnsupportedGeometryError;
pub use crate::algo::group::generate_plan_group;
