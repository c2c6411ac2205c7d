use fraction;
use itertools::Itertools;

use crate::occupation::{
    atomic_subshell_orbitals, diatomic_subshell_orbitals, occupy, spin_values,
    subshell_orbitals, total_angular_momentum_and_spin,
};
use crate::orbital::{OrbitalKind, Spin, SpinOrbital};

type F = fraction::Fraction;

fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        0
    } else {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }
}

#[test]
fn test_occupation_spin_values() {
    assert_eq!(
        spin_values().map(|spin| spin.projection()).collect_vec(),
        vec![F::new(1u64, 2u64), F::new_neg(1u64, 2u64)]
    );
}

#[test]
fn test_occupation_atomic_subshell_orbitals() {
    let p_orbs = [
        "2p_{1}a", "2p_{1}b", "2p_{0}a", "2p_{0}b", "2p_{-1}a", "2p_{-1}b",
    ];
    let p_l = atomic_subshell_orbitals(2, 1)
        .unwrap()
        .map(|orb| orb.to_string())
        .collect_vec();
    assert_eq!(p_l, p_orbs);

    for l in 0..5 {
        let orbs = atomic_subshell_orbitals(l + 1, l).unwrap();
        assert_eq!(orbs.clone().count(), (2 * (2 * l + 1)) as usize);
        // Restarting the enumeration reproduces the same sequence.
        assert_eq!(orbs.clone().collect_vec(), orbs.collect_vec());
    }

    assert!(atomic_subshell_orbitals(2, 2).is_err());
    assert!(atomic_subshell_orbitals(0, 0).is_err());
}

#[test]
fn test_occupation_diatomic_subshell_orbitals() {
    let pi_orbs = ["2π_{1}a", "2π_{1}b", "2π_{-1}a", "2π_{-1}b"];
    let pi_l = diatomic_subshell_orbitals(2, 1)
        .unwrap()
        .map(|orb| orb.to_string())
        .collect_vec();
    assert_eq!(pi_l, pi_orbs);

    assert_eq!(diatomic_subshell_orbitals(1, 0).unwrap().count(), 2);
    for l in 1..6 {
        assert_eq!(diatomic_subshell_orbitals(1, l).unwrap().count(), 4);
        assert!(diatomic_subshell_orbitals(1, l)
            .unwrap()
            .all(|orb| orb.ml().unsigned_abs() == l));
    }
    assert_eq!(
        subshell_orbitals(OrbitalKind::Diatomic, 3, 2)
            .unwrap()
            .collect_vec(),
        diatomic_subshell_orbitals(3, 2).unwrap().collect_vec()
    );
}

#[test]
fn test_occupation_occupy() {
    let occ1 = occupy(atomic_subshell_orbitals(1, 0).unwrap(), 0).collect_vec();
    assert_eq!(occ1, vec![Vec::<SpinOrbital>::new()]);
    let occ2 = occupy(atomic_subshell_orbitals(2, 1).unwrap(), 0).collect_vec();
    assert_eq!(occ2.len(), 1);
    assert!(occ2[0].is_empty());

    let occ3 = occupy(atomic_subshell_orbitals(1, 0).unwrap(), 1).collect_vec();
    assert_eq!(
        occ3[0][0],
        SpinOrbital::new(OrbitalKind::Atomic, 1, 0, 0, Spin::Alpha).unwrap()
    );
    assert_eq!(occ3.len(), 2);

    let occ4 = occupy(atomic_subshell_orbitals(1, 0).unwrap(), 2).collect_vec();
    assert_eq!(
        occ4[0][0],
        SpinOrbital::new(OrbitalKind::Atomic, 1, 0, 0, Spin::Alpha).unwrap()
    );
    assert_eq!(occ4.len(), 1);

    let occ5 = occupy(atomic_subshell_orbitals(2, 1).unwrap(), 2).collect_vec();
    assert_eq!(occ5.len(), 15);

    let occ6 = occupy(diatomic_subshell_orbitals(1, 0).unwrap(), 1).collect_vec();
    assert_eq!(
        occ6[0][0],
        SpinOrbital::new(OrbitalKind::Diatomic, 1, 0, 0, Spin::Alpha).unwrap()
    );
    assert_eq!(
        occ6[1][0],
        SpinOrbital::new(OrbitalKind::Diatomic, 1, 0, 0, Spin::Beta).unwrap()
    );
    assert_eq!(occ6.len(), 2);

    let occ7 = occupy(diatomic_subshell_orbitals(1, 1).unwrap(), 1).collect_vec();
    assert_eq!(
        occ7[0][0],
        SpinOrbital::new(OrbitalKind::Diatomic, 1, 1, 1, Spin::Alpha).unwrap()
    );
    assert_eq!(
        occ7[1][0],
        SpinOrbital::new(OrbitalKind::Diatomic, 1, 1, 1, Spin::Beta).unwrap()
    );
    assert_eq!(
        occ7[3][0],
        SpinOrbital::new(OrbitalKind::Diatomic, 1, 1, -1, Spin::Beta).unwrap()
    );
    assert_eq!(occ7.len(), 4);

    let occ8 = occupy(diatomic_subshell_orbitals(1, 3).unwrap(), 2).collect_vec();
    assert_eq!(
        occ8[4],
        vec![
            SpinOrbital::new(OrbitalKind::Diatomic, 1, 3, 3, Spin::Beta).unwrap(),
            SpinOrbital::new(OrbitalKind::Diatomic, 1, 3, -3, Spin::Beta).unwrap(),
        ]
    );
    assert_eq!(occ8.len(), 6);

    // More electrons than spin-orbitals.
    assert_eq!(occupy(atomic_subshell_orbitals(1, 0).unwrap(), 3).count(), 0);
}

#[test]
fn test_occupation_occupy_cardinality() {
    for l in 0..3 {
        let orbs = atomic_subshell_orbitals(l + 1, l).unwrap().collect_vec();
        for k in 0..=orbs.len() + 1 {
            assert_eq!(occupy(orbs.clone(), k).count(), binomial(orbs.len(), k));
        }
    }
}

#[test]
fn test_occupation_total_angular_momentum_and_spin() {
    let occ1 = occupy(atomic_subshell_orbitals(1, 0).unwrap(), 1).collect_vec();
    assert_eq!(
        total_angular_momentum_and_spin(&occ1[0]),
        (0, F::new(1u64, 2u64))
    );
    assert_eq!(
        total_angular_momentum_and_spin(&occ1[1]),
        (0, F::new_neg(1u64, 2u64))
    );

    let orbs1 = [
        SpinOrbital::from_symbols(OrbitalKind::Atomic, 3, "d", -2, "alpha").unwrap(),
        SpinOrbital::from_symbols(OrbitalKind::Atomic, 5, "g", -1, "beta").unwrap(),
    ];
    assert_eq!(
        total_angular_momentum_and_spin(&orbs1),
        (-3, F::new(0u64, 1u64))
    );

    let triplet = [
        SpinOrbital::new(OrbitalKind::Atomic, 2, 1, 1, Spin::Alpha).unwrap(),
        SpinOrbital::new(OrbitalKind::Atomic, 2, 1, 0, Spin::Alpha).unwrap(),
    ];
    assert_eq!(
        total_angular_momentum_and_spin(&triplet),
        (1, F::new(1u64, 1u64))
    );
    assert_eq!(total_angular_momentum_and_spin(&[]), (0, F::new(0u64, 1u64)));
}
