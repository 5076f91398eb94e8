use crate::FailResult;
use crate::oper::perm::Perm;

/// A symmetry plan generalized to lattices with several orbitals per site.
///
/// Entry `(orbital, site)` records the `(site, orbital)` pair that the
/// operation sends it to.  For a single orbital this carries exactly the
/// same information as a [`Perm`] over sites (see [`from_sites`] and
/// [`sites`]); with more orbitals it additionally tracks how the internal
/// degrees of freedom are shuffled, as needed by multi-band models.
///
/// [`Perm`]: struct.Perm.html
/// [`from_sites`]: #method.from_sites
/// [`sites`]: #method.sites
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbitalPlan {
    // table[orbital][site] -> (site, orbital)
    table: Vec<Vec<(usize, usize)>>,
}

#[derive(Debug, Fail)]
#[fail(display = "composed plans disagree in shape: {}x{} vs {}x{}",
       lhs_orbitals, lhs_sites, rhs_orbitals, rhs_sites)]
pub struct PlanShapeError {
    pub lhs_orbitals: usize,
    pub lhs_sites: usize,
    pub rhs_orbitals: usize,
    pub rhs_sites: usize,
}

impl OrbitalPlan {
    /// Lift a site permutation into a plan over `norb` orbitals, with every
    /// orbital carried along unchanged.
    pub fn from_sites(perm: &Perm, norb: usize) -> OrbitalPlan {
        let table = (0..norb)
            .map(|orb| {
                (0..perm.len())
                    .map(|site| (perm.permute_index(site), orb))
                    .collect()
            })
            .collect();
        OrbitalPlan { table }
    }

    pub fn num_orbitals(&self) -> usize
    { self.table.len() }

    pub fn num_sites(&self) -> usize
    { self.table.get(0).map(|row| row.len()).unwrap_or(0) }

    /// Where `(orbital, site)` is sent, as a `(site, orbital)` pair.
    pub fn lookup(&self, orbital: usize, site: usize) -> (usize, usize)
    { self.table[orbital][site] }

    /// Collapse back down to a site permutation.
    ///
    /// Fails unless there is exactly one orbital (with several orbitals the
    /// site image alone is not a faithful description of the operation).
    pub fn sites(&self) -> FailResult<Perm> {
        ensure!(
            self.num_orbitals() == 1,
            "cannot collapse a plan over {} orbitals to a site permutation", self.num_orbitals(),
        );
        let image = self.table[0].iter().map(|&(site, _)| site).collect();
        Ok(Perm::from_vec(image)?)
    }

    /// Flipped composition, matching `Perm::then`: apply `self` first, then
    /// `other`.
    ///
    /// Fails unless the two plans have identical shape.
    pub fn then(&self, other: &OrbitalPlan) -> FailResult<OrbitalPlan> {
        if self.num_orbitals() != other.num_orbitals()
            || self.num_sites() != other.num_sites()
        {
            return Err(PlanShapeError {
                lhs_orbitals: self.num_orbitals(),
                lhs_sites: self.num_sites(),
                rhs_orbitals: other.num_orbitals(),
                rhs_sites: other.num_sites(),
            }.into());
        }
        let table = self.table.iter()
            .map(|row| {
                row.iter()
                    .map(|&(site1, orb1)| other.table[orb1][site1])
                    .collect()
            })
            .collect();
        Ok(OrbitalPlan { table })
    }

    /// Conventional composition: apply `other` first, then `self`.
    pub fn of(&self, other: &OrbitalPlan) -> FailResult<OrbitalPlan>
    { other.then(self) }

    /// The inverse plan.
    ///
    /// The input must be a bijection on `(orbital, site)` pairs; this is the
    /// caller's responsibility and is only checked in debug builds.  For a
    /// non-bijective input the unset output slots are left at `(0, 0)`.
    #[must_use = "not an in-place operation"]
    pub fn inverted(&self) -> OrbitalPlan {
        debug_assert!(self.is_bijection());
        let norb = self.num_orbitals();
        let nsite = self.num_sites();
        let mut table = vec![vec![(0, 0); nsite]; norb];
        for orb in 0..norb {
            for site in 0..nsite {
                let (site1, orb1) = self.table[orb][site];
                table[orb1][site1] = (site, orb);
            }
        }
        OrbitalPlan { table }
    }

    fn is_bijection(&self) -> bool {
        let nsite = self.num_sites();
        let mut seen = vec![false; self.num_orbitals() * nsite];
        for row in &self.table {
            for &(site, orb) in row {
                let slot = match seen.get_mut(orb * nsite + site) {
                    Some(slot) => slot,
                    None => return false,
                };
                if *slot {
                    return false;
                }
                *slot = true;
            }
        }
        true
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn lift_and_collapse() {
        let perm = Perm::from_vec(vec![2, 0, 1, 3]).unwrap();
        let plan = OrbitalPlan::from_sites(&perm, 1);
        assert_eq!(plan.num_orbitals(), 1);
        assert_eq!(plan.num_sites(), 4);
        assert_eq!(plan.sites().unwrap(), perm);

        let plan = OrbitalPlan::from_sites(&perm, 3);
        assert_eq!(plan.lookup(2, 0), (2, 2));
        assert!(plan.sites().is_err());
    }

    #[test]
    fn composition_matches_site_composition() {
        let a = Perm::random(12);
        let b = Perm::random(12);
        let plan_a = OrbitalPlan::from_sites(&a, 1);
        let plan_b = OrbitalPlan::from_sites(&b, 1);

        let composed = plan_a.then(&plan_b).unwrap();
        assert_eq!(composed.sites().unwrap(), a.then(&b));
        assert_eq!(
            plan_b.of(&plan_a).unwrap().sites().unwrap(),
            b.of(&a),
        );
    }

    #[test]
    fn shape_mismatch() {
        let a = OrbitalPlan::from_sites(&Perm::eye(4), 1);
        let b = OrbitalPlan::from_sites(&Perm::eye(5), 1);
        let c = OrbitalPlan::from_sites(&Perm::eye(4), 2);
        assert!(a.then(&b).unwrap_err().downcast_ref::<PlanShapeError>().is_some());
        assert!(a.then(&c).unwrap_err().downcast_ref::<PlanShapeError>().is_some());
        assert!(a.then(&a).is_ok());
    }

    #[test]
    fn double_inversion() {
        for _ in 0..5 {
            let plan = OrbitalPlan::from_sites(&Perm::random(9), 2);
            assert_eq!(plan.inverted().inverted(), plan);
            assert_eq!(
                plan.then(&plan.inverted()).unwrap(),
                OrbitalPlan::from_sites(&Perm::eye(9), 2),
            );
        }
    }

    #[test]
    fn inversion_swaps_orbitals_back() {
        // a plan that genuinely mixes orbitals: swap the two orbitals while
        // shifting sites by one
        let shift = Perm::from_vec(vec![1, 2, 0]).unwrap();
        let table: Vec<Vec<_>> = (0..2)
            .map(|orb| {
                (0..3).map(|site| (shift.permute_index(site), 1 - orb)).collect()
            })
            .collect();
        let plan = OrbitalPlan { table };

        let inv = plan.inverted();
        for orb in 0..2 {
            for site in 0..3 {
                let (site1, orb1) = plan.lookup(orb, site);
                assert_eq!(inv.lookup(orb1, site1), (site, orb));
            }
        }
    }
}
