use crate::FailResult;

use ::std::f64::consts::PI;

/// Absolute tolerance for geometric predicates on the primitive vectors
/// (orthogonality and the like).
pub(crate) const GEOM_TOLERANCE: f64 = 1e-14;

/// One of the bravais lattices this library knows how to index.
///
/// Each family fixes the dimensionality, the number of basis sites per
/// unit cell, and the primitive/reciprocal vectors.  Adding a family is
/// a matter of adding a variant here; nothing is open for extension at
/// runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LatticeFamily {
    Chain,
    Square,
    Triangular,
    Honeycomb,
    Cubic,
}

impl LatticeFamily {
    pub fn dim(&self) -> usize {
        match *self {
            LatticeFamily::Chain => 1,
            LatticeFamily::Square |
            LatticeFamily::Triangular |
            LatticeFamily::Honeycomb => 2,
            LatticeFamily::Cubic => 3,
        }
    }

    /// Number of basis sites per unit cell.
    pub fn num_sub(&self) -> usize {
        match *self {
            LatticeFamily::Honeycomb => 2,
            _ => 1,
        }
    }

    // Primitive vectors as rows, and their reciprocals (with the 2 PI factor,
    // following the physics convention: a[i] . b[j] == 2 PI delta_ij).
    fn vectors(&self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let tau = 2.0 * PI;
        let rt3 = 3f64.sqrt();
        match *self {
            LatticeFamily::Chain => (
                vec![vec![1.0]],
                vec![vec![tau]],
            ),
            LatticeFamily::Square => (
                vec![vec![1.0, 0.0], vec![0.0, 1.0]],
                vec![vec![tau, 0.0], vec![0.0, tau]],
            ),
            LatticeFamily::Triangular |
            LatticeFamily::Honeycomb => (
                vec![vec![1.0, 0.0], vec![0.5, 0.5 * rt3]],
                vec![vec![tau, -tau / rt3], vec![0.0, 2.0 * tau / rt3]],
            ),
            LatticeFamily::Cubic => (
                vec![
                    vec![1.0, 0.0, 0.0],
                    vec![0.0, 1.0, 0.0],
                    vec![0.0, 0.0, 1.0],
                ],
                vec![
                    vec![tau, 0.0, 0.0],
                    vec![0.0, tau, 0.0],
                    vec![0.0, 0.0, tau],
                ],
            ),
        }
    }
}

/// Boundary condition along one lattice direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Boundary {
    Periodic,
    Open,
}

impl Boundary {
    pub fn from_tag(tag: &str) -> FailResult<Boundary> {
        match tag {
            "pbc" | "PBC" => Ok(Boundary::Periodic),
            "obc" | "OBC" => Ok(Boundary::Open),
            _ => Err(BadBoundaryTagError { tag: tag.to_string() }.into()),
        }
    }
}

#[derive(Debug, Fail)]
#[fail(display = "unrecognized boundary tag {:?} (expected one of pbc/PBC/obc/OBC)", tag)]
pub struct BadBoundaryTagError {
    pub tag: String,
}

#[derive(Debug, Fail)]
#[fail(display = "coordinate has {} components but the lattice has dimension {}", len, dim)]
pub struct CoordinateRankError {
    pub len: usize,
    pub dim: usize,
}

#[derive(Debug, Fail)]
#[fail(display = "site index {} out of range for a lattice of {} sites", site, total)]
pub struct SiteOutOfRangeError {
    pub site: usize,
    pub total: usize,
}

/// A finite periodic box over one of the known lattice families.
///
/// Sites are identified by integers in `[0, total_sites())`, in bijection
/// with `(sublattice, coordinate)` tuples through a mixed-radix encoding
/// whose radices are `[num_sub, L[0], L[1], ...]` with the sublattice as
/// the fastest-varying digit.
///
/// Immutable once constructed; cloning is cheap enough to treat it as a
/// value type.
#[derive(Debug, Clone)]
pub struct Lattice {
    family: LatticeFamily,
    extents: Vec<u32>,
    boundaries: Vec<Boundary>,
    a: Vec<Vec<f64>>,
    b: Vec<Vec<f64>>,
    num_sites: usize,
}

impl Lattice {
    /// Construct a lattice from a family, per-dimension extents, and
    /// per-dimension boundary condition tags.
    pub fn new(family: LatticeFamily, extents: &[u32], boundary_tags: &[&str]) -> FailResult<Lattice> {
        let dim = family.dim();
        ensure!(
            extents.len() == dim,
            "got {} extents for a {}-dimensional lattice family", extents.len(), dim,
        );
        ensure!(
            boundary_tags.len() == dim,
            "got {} boundary tags for a {}-dimensional lattice family", boundary_tags.len(), dim,
        );
        ensure!(extents.iter().all(|&l| l > 0), "every lattice extent must be positive");

        let boundaries = boundary_tags.iter()
            .map(|tag| Boundary::from_tag(tag))
            .collect::<FailResult<Vec<_>>>()?;

        let (a, b) = family.vectors();
        let num_sites = family.num_sub() * extents.iter().map(|&l| l as usize).product::<usize>();

        trace!("new {:?} lattice, extents {:?}, {} sites", family, extents, num_sites);
        Ok(Lattice {
            family,
            extents: extents.to_vec(),
            boundaries,
            a, b,
            num_sites,
        })
    }

    pub fn family(&self) -> LatticeFamily
    { self.family }

    pub fn dim(&self) -> usize
    { self.family.dim() }

    /// Number of basis sites per unit cell.
    pub fn num_sub(&self) -> usize
    { self.family.num_sub() }

    pub fn extents(&self) -> &[u32]
    { &self.extents }

    pub fn boundaries(&self) -> &[Boundary]
    { &self.boundaries }

    pub fn total_sites(&self) -> usize
    { self.num_sites }

    /// Primitive vectors, one row per lattice direction.
    pub fn real_vectors(&self) -> &[Vec<f64>]
    { &self.a }

    /// Reciprocal vectors, one row per lattice direction. (includes the 2 PI)
    pub fn reciprocal_vectors(&self) -> &[Vec<f64>]
    { &self.b }

    /// Encode a `(sublattice, coordinate)` pair into a site identifier.
    ///
    /// The sublattice index and every coordinate component are first
    /// reduced into their canonical ranges; out-of-range inputs (negative
    /// included) wrap around, so callers may apply displacements freely
    /// without reducing anything themselves.
    ///
    /// Fails if the coordinate length does not match the lattice dimension.
    pub fn coor2site(&self, coor: &[i32], sub: i32) -> FailResult<usize> {
        if coor.len() != self.dim() {
            return Err(CoordinateRankError { len: coor.len(), dim: self.dim() }.into());
        }

        // Reduction by repeated addition/subtraction rather than `%`, whose
        // sign convention on negative operands is a perennial source of bugs.
        let num_sub = self.num_sub() as i32;
        let mut sub = sub;
        while sub < 0 { sub += num_sub; }
        while sub >= num_sub { sub -= num_sub; }

        let mut site = sub as usize;
        let mut stride = self.num_sub();
        for (&x, &l) in izip!(coor, &self.extents) {
            let l = l as i32;
            let mut x = x;
            while x < 0 { x += l; }
            while x >= l { x -= l; }
            site += stride * x as usize;
            stride *= l as usize;
        }
        Ok(site)
    }

    /// Decode a site identifier into its `(coordinate, sublattice)` pair.
    ///
    /// Fails if the site is not in `[0, total_sites())`.
    pub fn site2coor(&self, site: usize) -> FailResult<(Vec<i32>, i32)> {
        if site >= self.num_sites {
            return Err(SiteOutOfRangeError { site, total: self.num_sites }.into());
        }

        let sub = (site % self.num_sub()) as i32;
        let mut rest = site / self.num_sub();
        let mut coor = Vec::with_capacity(self.dim());
        for &l in &self.extents {
            coor.push((rest % l as usize) as i32);
            rest /= l as usize;
        }
        debug_assert_eq!(rest, 0);
        Ok((coor, sub))
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn site_round_trips() {
        let lattices = vec![
            Lattice::new(LatticeFamily::Chain, &[7], &["pbc"]).unwrap(),
            Lattice::new(LatticeFamily::Square, &[3, 5], &["pbc", "obc"]).unwrap(),
            Lattice::new(LatticeFamily::Triangular, &[4, 2], &["pbc", "pbc"]).unwrap(),
            Lattice::new(LatticeFamily::Honeycomb, &[3, 3], &["PBC", "PBC"]).unwrap(),
            Lattice::new(LatticeFamily::Cubic, &[2, 3, 4], &["pbc", "pbc", "pbc"]).unwrap(),
        ];
        for lattice in lattices {
            for site in 0..lattice.total_sites() {
                let (coor, sub) = lattice.site2coor(site).unwrap();
                assert_eq!(lattice.coor2site(&coor, sub).unwrap(), site);
            }
        }
    }

    #[test]
    fn coordinate_round_trips_canonically() {
        let lattice = Lattice::new(LatticeFamily::Honeycomb, &[4, 3], &["pbc", "pbc"]).unwrap();
        for sub in -3..6 {
            for x in -9..9 {
                for y in -9..9 {
                    let site = lattice.coor2site(&[x, y], sub).unwrap();
                    let (coor, sub2) = lattice.site2coor(site).unwrap();
                    assert_eq!(coor, vec![x.rem_euclid(4), y.rem_euclid(3)]);
                    assert_eq!(sub2, sub.rem_euclid(2));
                }
            }
        }
    }

    #[test]
    fn digit_order() {
        // one sublattice: the first coordinate component is the fastest digit
        let lattice = Lattice::new(LatticeFamily::Triangular, &[4, 2], &["pbc", "pbc"]).unwrap();
        assert_eq!(lattice.total_sites(), 8);
        assert_eq!(lattice.coor2site(&[0, 0], 0).unwrap(), 0);
        assert_eq!(lattice.coor2site(&[1, 0], 0).unwrap(), 1);
        assert_eq!(lattice.coor2site(&[0, 1], 0).unwrap(), 4);

        // two sublattices: the sublattice index is faster still
        let lattice = Lattice::new(LatticeFamily::Honeycomb, &[3, 3], &["pbc", "pbc"]).unwrap();
        assert_eq!(lattice.coor2site(&[0, 0], 0).unwrap(), 0);
        assert_eq!(lattice.coor2site(&[0, 0], 1).unwrap(), 1);
        assert_eq!(lattice.coor2site(&[1, 0], 0).unwrap(), 2);
    }

    #[test]
    fn periodic_wraparound() {
        let lattice = Lattice::new(LatticeFamily::Triangular, &[4, 2], &["pbc", "pbc"]).unwrap();
        assert_eq!(
            lattice.coor2site(&[4, 0], 0).unwrap(),
            lattice.coor2site(&[0, 0], 0).unwrap(),
        );
        assert_eq!(
            lattice.coor2site(&[-1, 3], 0).unwrap(),
            lattice.coor2site(&[3, 1], 0).unwrap(),
        );
        // displacements far beyond one period
        assert_eq!(
            lattice.coor2site(&[401, -201], 0).unwrap(),
            lattice.coor2site(&[1, 1], 0).unwrap(),
        );
    }

    #[test]
    fn construction_errors() {
        assert!(Lattice::new(LatticeFamily::Square, &[4], &["pbc"]).is_err());
        assert!(Lattice::new(LatticeFamily::Square, &[4, 4], &["pbc"]).is_err());
        assert!(Lattice::new(LatticeFamily::Square, &[4, 0], &["pbc", "pbc"]).is_err());
        assert!(Lattice::new(LatticeFamily::Square, &[4, 4], &["pbc", "wat"]).is_err());
    }

    #[test]
    fn indexing_errors() {
        let lattice = Lattice::new(LatticeFamily::Square, &[3, 3], &["pbc", "pbc"]).unwrap();
        assert!(lattice.coor2site(&[0], 0).is_err());
        assert!(lattice.coor2site(&[0, 0, 0], 0).is_err());
        assert!(lattice.site2coor(9).is_err());
        assert!(lattice.site2coor(8).is_ok());
    }
}
