use crate::oper::perm::Perm;

/// Generates the finite group of plans spanned by a set of generators.
///
/// The generators may contain duplicates or redundant elements; the
/// identity need not be supplied.  The closure is taken under `then`
/// composition, so composite symmetry operations never go back through
/// the lattice geometry.
///
/// The order of the output is arbitrary but deterministic for a given
/// generator sequence.  Beware that the group of a large box can be big;
/// this is intended for the translation/point groups of finite lattices,
/// which top out at a few times the site count.
pub fn generate_plan_group(generators: &[Perm]) -> Vec<Perm> {
    use ::std::collections::{HashSet, VecDeque};
    assert!(generators.len() > 0, "empty groups do not exist!");

    let mut seen = HashSet::new();
    let mut out = vec![];

    let mut queue: VecDeque<_> = generators.iter().cloned().collect();
    queue.push_front(Perm::eye(generators[0].len()));

    while let Some(g) = queue.pop_front() {
        if seen.insert(g.clone()) {
            queue.extend(generators.iter().map(|h| g.then(h)));
            out.push(g);
        }
    }
    debug!("plan group closure: {} generators -> {} elements", generators.len(), out.len());
    out
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::algo::plans::{translation_plan, c4_rotation_plan};
    use crate::core::lattice::{Lattice, LatticeFamily};

    #[test]
    fn translation_group_order_is_the_cell_count() {
        let lattice = Lattice::new(LatticeFamily::Triangular, &[4, 2], &["pbc", "pbc"]).unwrap();
        let generators = vec![
            translation_plan(&lattice, &[1, 0]).unwrap(),
            translation_plan(&lattice, &[0, 1]).unwrap(),
        ];
        let group = generate_plan_group(&generators);
        assert_eq!(group.len(), 8);
        assert!(group.iter().any(|g| g.is_identity()));

        // closed under composition
        for a in &group {
            for b in &group {
                assert!(group.contains(&a.then(b)));
            }
        }
    }

    #[test]
    fn rotation_group_is_cyclic_of_order_four() {
        let lattice = Lattice::new(LatticeFamily::Square, &[3, 3], &["pbc", "pbc"]).unwrap();
        let c4 = c4_rotation_plan(&lattice).unwrap();
        let group = generate_plan_group(&[c4]);
        assert_eq!(group.len(), 4);
    }

    #[test]
    fn redundant_generators_change_nothing() {
        let lattice = Lattice::new(LatticeFamily::Chain, &[6], &["pbc"]).unwrap();
        let step = translation_plan(&lattice, &[1]).unwrap();
        let two = translation_plan(&lattice, &[2]).unwrap();
        let a = generate_plan_group(&[step.clone()]);
        let b = generate_plan_group(&[step, two]);
        assert_eq!(a.len(), 6);
        assert_eq!(b.len(), 6);
    }
}
