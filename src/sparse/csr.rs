/* ********************************************************************** **
**  This file is part of edlat.                                           **
**                                                                        **
**  edlat is free software: you can redistribute it and/or modify it      **
**  under the terms of EITHER the MIT license or the Apache 2.0 license,  **
**  at your option.                                                       **
** ********************************************************************** */

use crate::{FailResult, SPARSE_TOLERANCE};
use crate::element::Element;
use crate::lil::LilMat;

/// A compressed sparse row matrix, frozen after assembly.
///
/// `row_ptr` has `dim + 1` entries; row `r` occupies the half-open range
/// `row_ptr[r]..row_ptr[r + 1]` of `col`/`val`, with columns strictly
/// increasing.  Diagonal positions survive compression even when they
/// are exactly zero, so every row is non-empty.
///
/// Under symmetric storage only the upper triangle is stored, but
/// [`mul_vec`] applies the full operator, reconstructing the lower
/// triangle from conjugates on the fly.  That is the behavior an
/// eigensolver wants out of a Hermitian matrix.
///
/// [`mul_vec`]: #method.mul_vec
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMat<T> {
    dim: usize,
    sym: bool,
    val: Vec<T>,
    col: Vec<usize>,
    row_ptr: Vec<usize>,
}

impl<T: Element> CsrMat<T> {
    /// Compress a finished assembly.
    ///
    /// Off-diagonal entries with magnitude below [`SPARSE_TOLERANCE`] are
    /// dropped; diagonal entries are kept unconditionally.
    ///
    /// [`SPARSE_TOLERANCE`]: constant.SPARSE_TOLERANCE.html
    pub fn from_lil(lil: LilMat<T>) -> CsrMat<T> {
        let LilMat { dim, sym, rows, .. } = lil;

        let mut val = vec![];
        let mut col = vec![];
        let mut row_ptr = Vec::with_capacity(dim + 1);
        row_ptr.push(0);
        for (r, row) in rows.into_iter().enumerate() {
            // BTreeMap iteration order gives the strictly increasing columns
            for (c, x) in row {
                if c != r && x.magnitude() < SPARSE_TOLERANCE {
                    continue;
                }
                col.push(c);
                val.push(x);
            }
            row_ptr.push(val.len());
        }
        debug!("compressed {}x{} matrix down to {} entries", dim, dim, val.len());

        let out = CsrMat { dim, sym, val, col, row_ptr };
        if cfg!(debug_assertions) {
            if let Err(e) = out.validate() {
                panic!("compression produced an invalid matrix: {}", e);
            }
        }
        out
    }

    pub fn dimension(&self) -> usize
    { self.dim }

    pub fn symmetric_storage(&self) -> bool
    { self.sym }

    /// The number of explicitly stored entries.
    pub fn num_stored(&self) -> usize
    { self.val.len() }

    /// The stored value at `(row, col)`, or zero.
    ///
    /// Symmetric storage is not unfolded here; asking for a
    /// lower-triangle position of a symmetric matrix returns zero.
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(row < self.dim && col < self.dim, "position out of range");
        let range = self.row_ptr[row]..self.row_ptr[row + 1];
        match self.col[range.clone()].binary_search(&col) {
            Ok(i) => self.val[range.start + i],
            Err(_) => T::zero(),
        }
    }

    /// Check the structural invariants.
    ///
    /// `from_lil` cannot produce a matrix that fails this, but it is run
    /// in debug builds anyway; the invariants are what `mul_vec` and
    /// `to_sprs` rely on, so a violation should be loud.
    pub fn validate(&self) -> FailResult<()> {
        ensure!(self.val.len() == self.col.len(), "mismatched val/col lengths");
        ensure!(self.row_ptr.len() == self.dim + 1, "bad row_ptr length");
        ensure!(self.row_ptr[0] == 0, "row_ptr must start at zero");
        ensure!(*self.row_ptr.last().unwrap() == self.val.len(), "row_ptr must end at nnz");
        ensure!(
            self.row_ptr.windows(2).all(|w| w[0] <= w[1]),
            "row_ptr must be monotonic",
        );
        for r in 0..self.dim {
            let cols = &self.col[self.row_ptr[r]..self.row_ptr[r + 1]];
            ensure!(
                cols.windows(2).all(|w| w[0] < w[1]),
                "columns in row {} are not strictly increasing", r,
            );
            ensure!(
                cols.iter().all(|&c| c < self.dim),
                "column out of range in row {}", r,
            );
            ensure!(
                cols.binary_search(&r).is_ok(),
                "row {} is missing its diagonal", r,
            );
            if self.sym {
                ensure!(
                    cols.iter().all(|&c| c >= r),
                    "row {} of a symmetric matrix stores the lower triangle", r,
                );
            }
        }
        Ok(())
    }

    /// The matrix-vector product `y = M x`.
    ///
    /// For symmetric storage this is the product with the *full* matrix:
    /// each stored off-diagonal entry `m` at `(r, c)` also contributes
    /// `conj(m) * x[r]` to `y[c]`.
    pub fn mul_vec(&self, x: &[T]) -> Vec<T> {
        assert_eq!(x.len(), self.dim, "vector length must match the matrix dimension");
        let mut y = vec![T::zero(); self.dim];
        for r in 0..self.dim {
            for i in self.row_ptr[r]..self.row_ptr[r + 1] {
                let c = self.col[i];
                let m = self.val[i];
                y[r] += m * x[c];
                if self.sym && c != r {
                    y[c] += m.conj() * x[r];
                }
            }
        }
        y
    }

    /// Relabel into an `sprs` matrix, cloning the three arrays.
    ///
    /// The stored entries transfer as-is: for symmetric storage the
    /// result is the upper triangle only, and it is up to the consumer
    /// to treat it as such (or to unfold it first).
    pub fn to_sprs(&self) -> ::sprs::CsMat<T> {
        ::sprs::CsMat::new(
            (self.dim, self.dim),
            self.row_ptr.clone(),
            self.col.clone(),
            self.val.clone(),
        )
    }
}
