/* ********************************************************************** **
**  This file is part of edlat.                                           **
**                                                                        **
**  edlat is free software: you can redistribute it and/or modify it      **
**  under the terms of EITHER the MIT license or the Apache 2.0 license,  **
**  at your option.                                                       **
** ********************************************************************** */

use crate::FailResult;
use crate::csr::CsrMat;
use crate::element::Element;

use ::std::collections::BTreeMap;
use ::std::collections::btree_map::Entry;

/// A square sparse matrix under assembly.
///
/// Rows are sorted maps, so entries may be added in any order and
/// repeated additions to the same position sum.  Every diagonal position
/// is present from the start, even while zero; eigensolvers expect the
/// diagonal to be addressable and keeping it unconditionally costs only
/// `O(dim)` storage.
///
/// With `symmetric` storage only the upper triangle is represented, and
/// adding a strictly-lower entry is an error (the caller decided the
/// matrix was symmetric; a lower-triangle write means they broke that
/// promise, not that we should mirror it for them).
#[derive(Debug, Clone)]
pub struct LilMat<T> {
    pub(crate) dim: usize,
    pub(crate) sym: bool,
    pub(crate) nnz: usize,
    pub(crate) rows: Vec<BTreeMap<usize, T>>,
}

impl<T: Element> LilMat<T> {
    pub fn new(dim: usize, symmetric: bool) -> LilMat<T> {
        let rows = (0..dim)
            .map(|r| {
                let mut row = BTreeMap::new();
                row.insert(r, T::zero());
                row
            })
            .collect();
        LilMat { dim, sym: symmetric, nnz: dim, rows }
    }

    pub fn dimension(&self) -> usize
    { self.dim }

    pub fn symmetric_storage(&self) -> bool
    { self.sym }

    /// The number of stored entries.
    ///
    /// This counts the always-present diagonal, so it starts at `dim` for
    /// a fresh matrix and never decreases; cancellation to zero does not
    /// remove an entry until compression.
    pub fn num_stored(&self) -> usize
    { self.nnz }

    /// Add `value` at `(row, col)`, summing with anything already there.
    pub fn add(&mut self, row: usize, col: usize, value: T) -> FailResult<()> {
        ensure!(
            row < self.dim && col < self.dim,
            "entry ({}, {}) is out of range for a {}x{} matrix",
            row, col, self.dim, self.dim,
        );
        if self.sym {
            ensure!(
                row <= col,
                "entry ({}, {}) lies in the lower triangle of a symmetric matrix",
                row, col,
            );
        }
        match self.rows[row].entry(col) {
            Entry::Occupied(mut e) => { *e.get_mut() += value; }
            Entry::Vacant(e) => {
                e.insert(value);
                self.nnz += 1;
            }
        }
        Ok(())
    }

    /// Release the assembly storage.
    ///
    /// `drop` would do; this exists so that the handoff point between
    /// assembly and the compressed matrix reads explicitly at call sites
    /// that keep both around.
    pub fn destroy(self) {}

    /// Compress into CSR form, dropping negligible off-diagonal entries.
    pub fn into_csr(self) -> CsrMat<T>
    { CsrMat::from_lil(self) }
}
