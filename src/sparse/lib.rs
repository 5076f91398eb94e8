/* ********************************************************************** **
**  This file is part of edlat.                                           **
**                                                                        **
**  edlat is free software: you can redistribute it and/or modify it      **
**  under the terms of EITHER the MIT license or the Apache 2.0 license,  **
**  at your option.                                                       **
** ********************************************************************** */

//! Sparse matrix assembly for exact-diagonalization style workloads.
//!
//! Matrices are built in two phases.  A [`LilMat`] accumulates entries in
//! whatever order the model's terms produce them, summing duplicates as
//! they arrive.  Once assembly is finished it is compressed into a
//! [`CsrMat`], which supports the matrix-vector product that iterative
//! eigensolvers are built on, and can be handed to `sprs` wholesale.
//!
//! Both types optionally use symmetric storage, where only the upper
//! triangle (including the diagonal) is kept and the lower triangle is
//! implied by symmetry (or by conjugate symmetry, for complex scalars).

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
extern crate num_complex;
extern crate num_traits;
extern crate sprs;

pub type FailResult<T> = Result<T, ::failure::Error>;

/// Off-diagonal entries whose magnitude falls below this are dropped
/// during compression; they are numerical noise at double precision.
pub const SPARSE_TOLERANCE: f64 = 1e-14;

mod element;
mod lil;
mod csr;

pub use crate::element::Element;
pub use crate::lil::LilMat;
pub use crate::csr::CsrMat;
