/* ********************************************************************** **
**  This file is part of edlat.                                           **
**                                                                        **
**  edlat is free software: you can redistribute it and/or modify it      **
**  under the terms of EITHER the MIT license or the Apache 2.0 license,  **
**  at your option.                                                       **
** ********************************************************************** */

//! Facade over the workspace members.
//!
//! Everything lives in `edlat-lattice` and `edlat-sparse`; this crate
//! just gathers them under one roof and re-exports the handful of types
//! a typical exact-diagonalization driver touches.

pub use edlat_lattice as lattice;
pub use edlat_sparse as sparse;

pub use crate::lattice::{Lattice, LatticeFamily, Boundary};
pub use crate::lattice::{Perm, Permute, OrbitalPlan};
pub use crate::lattice::{translation_plan, c4_rotation_plan, generate_plan_group};
pub use crate::sparse::{LilMat, CsrMat, Element};
