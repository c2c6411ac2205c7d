//! Term tables of subshell configurations.

use std::fmt;

use anyhow::{self, ensure, Context};
use itertools::Itertools;
use log;
use serde::{Deserialize, Serialize};

use crate::occupation::{occupy, projection_sums, subshell_orbitals};
use crate::orbital::{OrbitalKind, OrbitalValidationError, SpinOrbital};
use crate::term::{TermTable, TermTableCompatibilityError};

#[cfg(test)]
#[path = "subshell_terms_tests.rs"]
mod subshell_terms_tests;

// ==================
// Struct definitions
// ==================

/// A subshell $`(n, l)`$ holding a number of electrons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubshellOccupation {
    /// The shell.
    pub n: u32,

    /// The orbital angular momentum.
    pub l: u32,

    /// The number of electrons.
    pub electrons: u32,
}

impl SubshellOccupation {
    pub fn new(n: u32, l: u32, electrons: u32) -> Self {
        Self { n, l, electrons }
    }

    /// The subshell label without the electron count, *e.g.* `2p` or `3δ`.
    pub fn subshell_label(&self, kind: OrbitalKind) -> String {
        let symbol = kind
            .angmom_symbols()
            .get(self.l as usize)
            .map(|symbol| symbol.to_string())
            .unwrap_or_else(|| format!("[{}]", self.l));
        format!("{}{}", self.n, symbol)
    }

    /// The occupation label, *e.g.* `2p^{2}`.
    pub fn label(&self, kind: OrbitalKind) -> String {
        format!("{}^{{{}}}", self.subshell_label(kind), self.electrons)
    }

    /// Checks that the subshell exists for `kind` and can hold the electrons.
    fn validate(&self, kind: OrbitalKind) -> Result<(), OrbitalValidationError> {
        subshell_orbitals(kind, self.n, self.l)?;
        let capacity = kind.subshell_capacity(self.l);
        if self.electrons > capacity {
            return Err(OrbitalValidationError(format!(
                "subshell {} holds at most {capacity} electrons, got: {}",
                self.subshell_label(kind),
                self.electrons
            )));
        }
        Ok(())
    }
}

impl From<(u32, u32, u32)> for SubshellOccupation {
    fn from((n, l, electrons): (u32, u32, u32)) -> Self {
        Self::new(n, l, electrons)
    }
}

impl fmt::Display for SubshellOccupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.n, self.l, self.electrons)
    }
}

// ======
// Sizing
// ======

/// The highest multiplicity attainable by `e` electrons in a subshell of angular momentum `l`.
///
/// Beyond half filling, holes rather than electrons determine the maximum spin.
pub fn subshell_max_mult(kind: OrbitalKind, l: u32, e: u32) -> u32 {
    let capacity = kind.subshell_capacity(l);
    if e <= capacity / 2 {
        e + 1
    } else {
        capacity.saturating_sub(e) + 1
    }
}

/// The highest total angular momentum attainable by `e` electrons in a subshell of angular
/// momentum `l`.
///
/// For atomic subshells, $`\lceil e/2 \rceil`$ electrons of one spin and
/// $`\lfloor e/2 \rfloor`$ of the other fill the highest projections
/// $`l, l-1, \ldots`$. For diatomic subshells, at most two electrons occupy $`+\lambda`$ and the
/// rest must occupy $`-\lambda`$.
pub fn subshell_max_am(kind: OrbitalKind, l: u32, e: u32) -> u32 {
    match kind {
        OrbitalKind::Atomic => {
            let top_sum = |count: u32| -> i64 {
                (0..i64::from(count)).map(|i| i64::from(l) - i).sum()
            };
            let total = top_sum((e + 1) / 2) + top_sum(e / 2);
            u32::try_from(total.max(0))
                .expect("Unable to convert the maximum angular momentum to `u32`.")
        }
        OrbitalKind::Diatomic => {
            let positive = e.min(2);
            l * (positive - e.saturating_sub(2).min(positive))
        }
    }
}

// ==========
// Tabulation
// ==========

/// Tallies the non-negative reference microstates into a table.
///
/// # Returns
///
/// The number of microstates tallied.
fn tally<'a, I>(table: &mut TermTable, microstates: I) -> usize
where
    I: Iterator<Item = Vec<&'a SpinOrbital>>,
{
    let mut tallied = 0;
    for microstate in microstates {
        let orbs = microstate.into_iter().cloned().collect_vec();
        let (ml_tot, twice_ms_tot) = projection_sums(&orbs);
        if ml_tot < 0 || twice_ms_tot < 0 {
            continue;
        }
        table.increment(twice_ms_tot.unsigned_abs() + 1, ml_tot.unsigned_abs());
        tallied += 1;
    }
    tallied
}

/// Tabulates the raw microstate counts of `e` electrons in subshell $`(n, l)`$.
///
/// # Arguments
///
/// * `kind` - The kind of the orbitals.
/// * `n` - The shell.
/// * `l` - The orbital angular momentum.
/// * `e` - The number of electrons.
///
/// # Errors
///
/// Errors with an [`OrbitalValidationError`] if the subshell does not exist or cannot hold `e`
/// electrons.
pub fn subshell_terms(
    kind: OrbitalKind,
    n: u32,
    l: u32,
    e: u32,
) -> Result<TermTable, anyhow::Error> {
    let subshell = SubshellOccupation::new(n, l, e);
    subshell
        .validate(kind)
        .with_context(|| format!("Unable to tabulate the terms of {kind} subshell {subshell}"))?;

    let orbs = subshell_orbitals(kind, n, l)?.collect_vec();
    let mut table = TermTable::new(
        kind,
        subshell_max_mult(kind, l, e),
        subshell_max_am(kind, l, e),
    )
    .with_configuration(vec![subshell]);
    let tallied = tally(&mut table, occupy(orbs.iter(), e as usize));
    log::debug!(
        "Tallied {tallied} reference microstate(s) for {kind} configuration {}.",
        subshell.label(kind)
    );
    Ok(table)
}

/// Tabulates the raw microstate counts of a configuration spanning several distinct subshells.
///
/// The microstates are the Cartesian products of the occupations of the individual subshells.
///
/// # Arguments
///
/// * `kind` - The kind of the orbitals.
/// * `subshells` - The occupied subshells.
///
/// # Errors
///
/// Errors with an [`OrbitalValidationError`] if any subshell is invalid, and with a
/// [`TermTableCompatibilityError`] if the same subshell appears more than once.
pub fn multiple_subshell_terms(
    kind: OrbitalKind,
    subshells: &[SubshellOccupation],
) -> Result<TermTable, anyhow::Error> {
    ensure!(
        !subshells.is_empty(),
        "At least one subshell is required to tabulate terms."
    );
    for subshell in subshells.iter() {
        subshell.validate(kind).with_context(|| {
            format!("Unable to tabulate the terms of {kind} subshell {subshell}")
        })?;
    }
    if !subshells.iter().map(|sub| (sub.n, sub.l)).all_unique() {
        return Err(TermTableCompatibilityError(format!(
            "subshells must be distinct, got: {}",
            subshells.iter().map(|sub| sub.to_string()).join(", ")
        ))
        .into());
    }

    let max_mult = 1 + subshells
        .iter()
        .map(|sub| subshell_max_mult(kind, sub.l, sub.electrons) - 1)
        .sum::<u32>();
    let max_am = subshells
        .iter()
        .map(|sub| subshell_max_am(kind, sub.l, sub.electrons))
        .sum::<u32>();

    let occupations = subshells
        .iter()
        .map(|sub| -> Result<Vec<Vec<SpinOrbital>>, OrbitalValidationError> {
            let orbs = subshell_orbitals(kind, sub.n, sub.l)?;
            Ok(occupy(orbs, sub.electrons as usize).collect_vec())
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut table = TermTable::new(kind, max_mult, max_am).with_configuration(subshells.to_vec());
    let microstates = occupations
        .iter()
        .map(|occs| occs.iter())
        .multi_cartesian_product()
        .map(|parts| parts.into_iter().flatten().collect_vec());
    let tallied = tally(&mut table, microstates);
    log::debug!(
        "Tallied {tallied} reference microstate(s) for {kind} configuration {}.",
        subshells.iter().map(|sub| sub.label(kind)).join(" ")
    );
    Ok(table)
}

// ========
// Families
// ========

/// Iterates over the raw term tables of all subshells with angular momentum below `max_am`.
///
/// For each $`l`$, the lowest shell $`n = l + 1`$ is used, since term symbols do not depend on
/// the shell. Only electron counts up to half filling are generated: a subshell with $`e`$
/// electrons has the same terms as one with $`e`$ holes. The iterator is lazy and can be cloned
/// to restart the enumeration.
///
/// # Errors
///
/// Errors if some $`l < `$ `max_am` has no symbol in the alphabet of `kind`.
pub fn all_term_tables(
    kind: OrbitalKind,
    max_am: u32,
) -> Result<impl Iterator<Item = TermTable> + Clone, OrbitalValidationError> {
    if max_am > kind.max_l() + 1 {
        return Err(OrbitalValidationError(format!(
            "{kind} orbital symbols are only available up to l = {}, got: max_am = {max_am}",
            kind.max_l()
        )));
    }
    Ok((0..max_am).flat_map(move |l| {
        (1..=kind.subshell_capacity(l) / 2).map(move |e| {
            subshell_terms(kind, l + 1, l, e).unwrap_or_else(|err| {
                panic!("Unable to tabulate the terms of a validated subshell: {err}")
            })
        })
    }))
}

/// Iterates over the raw term tables of all atomic subshells with angular momentum below
/// `max_am`. See [`all_term_tables`].
pub fn all_atomic_term_tables(
    max_am: u32,
) -> Result<impl Iterator<Item = TermTable> + Clone, OrbitalValidationError> {
    all_term_tables(OrbitalKind::Atomic, max_am)
}
