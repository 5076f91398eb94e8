use crate::FailResult;
use crate::core::lattice::{Lattice, CoordinateRankError, GEOM_TOLERANCE};
use crate::oper::perm::{Perm, perm_from_images};

#[derive(Debug, Fail)]
#[fail(display = "cannot derive the plan: {}", reason)]
pub struct UnsupportedGeometryError {
    pub reason: String,
}

fn unsupported(reason: String) -> ::failure::Error
{ UnsupportedGeometryError { reason }.into() }

/// The plan of a lattice translation by `disp` unit cells.
///
/// Any displacement is accepted, including components far outside the
/// lattice extents; the periodic wraparound is handled by the site
/// encoding.  The result is always a bijection on sites (a translation is
/// an isometry of the periodic box), which `Perm` construction verifies.
pub fn translation_plan(lattice: &Lattice, disp: &[i32]) -> FailResult<Perm> {
    if disp.len() != lattice.dim() {
        return Err(CoordinateRankError { len: disp.len(), dim: lattice.dim() }.into());
    }
    perm_from_images(lattice.total_sites(), |site| {
        let (coor, sub) = lattice.site2coor(site)?;
        let moved: Vec<i32> = izip!(&coor, disp).map(|(&x, &d)| x + d).collect();
        lattice.coor2site(&moved, sub)
    })
}

/// The plan of a fourfold rotation about the box origin.
///
/// `(x, y)` is sent to `(L - 1 - y, x)`, which is a quarter turn of the
/// periodic box whenever the box is square in both extent and metric.
/// Hence the preconditions: two dimensions, equal extents, orthogonal
/// primitive vectors.
///
/// Only single-sublattice cells are supported; the rotation of a plan's
/// sublattice assignment is a feature this library does not implement,
/// and asking for it is an error rather than a silently wrong plan.
pub fn c4_rotation_plan(lattice: &Lattice) -> FailResult<Perm> {
    if lattice.dim() != 2 {
        return Err(unsupported(format!(
            "fourfold rotation needs a two-dimensional lattice, not {}d", lattice.dim(),
        )));
    }
    let l = lattice.extents()[0];
    if lattice.extents()[1] != l {
        return Err(unsupported(format!(
            "fourfold rotation needs a square box, not {}x{}",
            lattice.extents()[0], lattice.extents()[1],
        )));
    }
    let dot: f64 = izip!(&lattice.real_vectors()[0], &lattice.real_vectors()[1])
        .map(|(x, y)| x * y)
        .sum();
    if dot.abs() >= GEOM_TOLERANCE {
        return Err(unsupported(
            "fourfold rotation needs orthogonal primitive vectors".to_string(),
        ));
    }
    if lattice.num_sub() != 1 {
        // TODO: rotating a multi-sublattice cell also permutes the basis
        //       sites; supporting that needs per-family basis geometry.
        return Err(unsupported(format!(
            "fourfold rotation of a {}-sublattice cell is not implemented", lattice.num_sub(),
        )));
    }

    perm_from_images(lattice.total_sites(), |site| {
        let (coor, sub) = lattice.site2coor(site)?;
        let rotated = [l as i32 - 1 - coor[1], coor[0]];
        lattice.coor2site(&rotated, sub)
    })
}
