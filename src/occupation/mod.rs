//! Enumeration of subshell spin-orbitals and of their Pauli-allowed occupations.

use fraction;
use itertools::Itertools;

use crate::orbital::{OrbitalKind, OrbitalValidationError, Spin, SpinOrbital};

#[cfg(test)]
#[path = "occupation_tests.rs"]
mod occupation_tests;

type F = fraction::Fraction;

/// An unordered selection of distinct spin-orbitals, *i.e.* a microstate.
pub type Occupation = Vec<SpinOrbital>;

/// Iterates over the two spin states, $`+\frac{1}{2}`$ first.
pub fn spin_values() -> impl Iterator<Item = Spin> + Clone {
    [Spin::Alpha, Spin::Beta].into_iter()
}

/// Iterates over all spin-orbitals of a subshell.
///
/// Projections run from the highest to the lowest admissible value, and each projection is
/// paired with both spins in the order given by [`spin_values`]. The returned iterator is lazy
/// and can be cloned to restart the enumeration.
///
/// # Arguments
///
/// * `kind` - The kind of the orbitals.
/// * `n` - The shell.
/// * `l` - The orbital angular momentum.
///
/// # Errors
///
/// Errors if $`(n, l)`$ does not describe a valid subshell of this kind.
pub fn subshell_orbitals(
    kind: OrbitalKind,
    n: u32,
    l: u32,
) -> Result<impl Iterator<Item = SpinOrbital> + Clone, OrbitalValidationError> {
    let projections = if l <= kind.max_l() {
        kind.projections(l)
    } else {
        vec![0]
    };
    // Every spin-orbital of the subshell is valid iff the first one is.
    for spin in spin_values() {
        SpinOrbital::new(kind, n, l, projections[0], spin)?;
    }
    Ok(projections
        .into_iter()
        .cartesian_product(spin_values())
        .map(move |(ml, spin)| {
            SpinOrbital::new(kind, n, l, ml, spin).unwrap_or_else(|err| {
                panic!("Unable to construct a spin-orbital of a validated subshell: {err}")
            })
        }))
}

/// Iterates over all spin-orbitals of an atomic subshell, $`m_l`$ running from $`+l`$ to
/// $`-l`$. See [`subshell_orbitals`].
pub fn atomic_subshell_orbitals(
    n: u32,
    l: u32,
) -> Result<impl Iterator<Item = SpinOrbital> + Clone, OrbitalValidationError> {
    subshell_orbitals(OrbitalKind::Atomic, n, l)
}

/// Iterates over all spin-orbitals of a diatomic subshell: $`m_l = 0`$ for $`\lambda = 0`$,
/// otherwise $`m_l = +\lambda`$ then $`m_l = -\lambda`$. See [`subshell_orbitals`].
pub fn diatomic_subshell_orbitals(
    n: u32,
    l: u32,
) -> Result<impl Iterator<Item = SpinOrbital> + Clone, OrbitalValidationError> {
    subshell_orbitals(OrbitalKind::Diatomic, n, l)
}

/// Iterates over all ways of placing `k` electrons into distinct orbitals.
///
/// Combinations are produced in the canonical order induced by the input sequence. Choosing
/// zero orbitals yields exactly one empty occupation, and choosing more orbitals than available
/// yields nothing.
///
/// # Arguments
///
/// * `orbitals` - The orbitals to choose from.
/// * `k` - The number of electrons.
pub fn occupy<I>(orbitals: I, k: usize) -> impl Iterator<Item = Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    orbitals.into_iter().combinations(k)
}

/// Sums the projected angular momenta and twice the spin projections of an occupation.
///
/// Working with $`2M_S`$ keeps the arithmetic in the integers.
pub(crate) fn projection_sums(occupation: &[SpinOrbital]) -> (i32, i32) {
    occupation.iter().fold((0, 0), |(ml_tot, twice_ms_tot), orb| {
        (ml_tot + orb.ml(), twice_ms_tot + orb.spin().twice_projection())
    })
}

/// Converts twice a spin projection into an exact fraction.
pub(crate) fn half_integer(twice: i32) -> F {
    if twice >= 0 {
        F::new(u64::from(twice.unsigned_abs()), 2u64)
    } else {
        F::new_neg(u64::from(twice.unsigned_abs()), 2u64)
    }
}

/// Computes the total projected angular momentum $`M_L`$ and the total spin projection $`M_S`$
/// of an occupation.
///
/// The orbitals are not checked for being distinct.
///
/// # Returns
///
/// The tuple $`(M_L, M_S)`$.
pub fn total_angular_momentum_and_spin(occupation: &[SpinOrbital]) -> (i32, F) {
    let (ml_tot, twice_ms_tot) = projection_sums(occupation);
    (ml_tot, half_integer(twice_ms_tot))
}
