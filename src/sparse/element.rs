/* ********************************************************************** **
**  This file is part of edlat.                                           **
**                                                                        **
**  edlat is free software: you can redistribute it and/or modify it      **
**  under the terms of EITHER the MIT license or the Apache 2.0 license,  **
**  at your option.                                                       **
** ********************************************************************** */

use ::num_complex::Complex64;
use ::num_traits::Zero;
use ::std::fmt::Debug;
use ::std::ops::{Add, AddAssign, Mul};

/// The scalars a sparse matrix can hold.
///
/// This is deliberately closed over `f64` and `Complex64`; lattice model
/// matrices are one or the other, and keeping the trait small keeps the
/// symmetric matrix-vector product honest (it needs `conj` to recover
/// the implicit lower triangle of a Hermitian matrix).
pub trait Element
    : Copy + Debug + PartialEq + Zero
    + Add<Output=Self> + AddAssign + Mul<Output=Self>
{
    fn conj(self) -> Self;
    fn magnitude(self) -> f64;
}

impl Element for f64 {
    fn conj(self) -> f64 { self }
    fn magnitude(self) -> f64 { self.abs() }
}

impl Element for Complex64 {
    fn conj(self) -> Complex64 { Complex64::conj(&self) }
    fn magnitude(self) -> f64 { self.norm() }
}
