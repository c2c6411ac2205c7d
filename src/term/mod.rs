//! Term symbols and term tables.
//!
//! A [`TermTable`] tallies microstates, or terms once cleaned, by multiplicity $`2S+1`$ (rows)
//! and total angular momentum $`L`$ (columns). Only the non-negative reference projections
//! $`M_S \ge 0`$ and $`M_L \ge 0`$ of each microstate are tallied, so that a term
//! $`^{2S+1}L`$ deposits one count in every cell $`(2S'+1, L')`$ with $`S' \le S`$ and
//! $`L' \le L`$. [`TermTable::cleaned`] strips these lower manifestations off again.

use std::cmp::Reverse;
use std::error::Error;
use std::fmt;

use itertools::Itertools;
use log;
use ndarray::{s, Array2};
use serde::{Deserialize, Serialize};

use crate::occupation::projection_sums;
use crate::orbital::{OrbitalKind, SpinOrbital};

pub mod subshell_terms;
pub mod term_format;

pub use subshell_terms::{
    all_atomic_term_tables, all_term_tables, multiple_subshell_terms, subshell_terms,
    SubshellOccupation,
};
pub use term_format::TermTableStyle;


// ======
// Errors
// ======

/// Error raised when term tables are combined in a way that has no physical meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermTableCompatibilityError(pub String);

impl fmt::Display for TermTableCompatibilityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Term table compatibility error: {}", self.0)
    }
}

impl Error for TermTableCompatibilityError {}

// ==========
// TermSymbol
// ==========

/// A term symbol $`^{2S+1}L`$ of a given orbital kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermSymbol {
    kind: OrbitalKind,
    mult: u32,
    am: u32,
}

impl TermSymbol {
    /// Constructs a term symbol. The sign of `am` is discarded.
    pub fn new(kind: OrbitalKind, mult: u32, am: i32) -> Self {
        Self {
            kind,
            mult,
            am: am.unsigned_abs(),
        }
    }

    pub fn kind(&self) -> OrbitalKind {
        self.kind
    }

    /// The spin multiplicity $`2S+1`$.
    pub fn mult(&self) -> u32 {
        self.mult
    }

    /// The total angular momentum $`L`$ (or $`\Lambda`$ for diatomics).
    pub fn am(&self) -> u32 {
        self.am
    }

    /// The letter of the total angular momentum. Angular momenta beyond the alphabet are written
    /// numerically in brackets.
    pub fn letter(&self) -> String {
        self.kind
            .term_symbols()
            .get(self.am as usize)
            .map(|letter| letter.to_string())
            .unwrap_or_else(|| format!("[{}]", self.am))
    }

    /// The LaTeX form, *e.g.* `$^3$P`.
    pub fn latex(&self) -> String {
        format!("$^{}${}", self.mult, self.letter())
    }
}

impl fmt::Display for TermSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.mult, self.letter())
    }
}

/// Finds the term symbol $`(2|M_S|+1, |M_L|)`$ of a single microstate.
///
/// The orbitals are not checked for being distinct or of the same kind; the kind of the first
/// orbital is used, atomic if there is none.
pub fn find_term_symbol(occupation: &[SpinOrbital]) -> TermSymbol {
    let kind = occupation
        .first()
        .map(|orb| orb.kind())
        .unwrap_or_default();
    let (ml_tot, twice_ms_tot) = projection_sums(occupation);
    TermSymbol::new(kind, twice_ms_tot.unsigned_abs() + 1, ml_tot)
}

// =========
// TermTable
// =========

/// A table of counts indexed by multiplicity and total angular momentum.
///
/// Row $`i`$ holds multiplicity $`m_{\mathrm{min}} + 2i`$, where $`m_{\mathrm{min}}`$ is $`1`$
/// if [`Self::max_mult`] is odd and $`2`$ otherwise; column $`j`$ holds angular momentum $`j`$.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TermTable {
    /// The orbital kind of the configuration tabulated.
    kind: OrbitalKind,

    /// The highest multiplicity representable.
    max_mult: u32,

    /// The highest angular momentum representable.
    max_am: u32,

    /// The counts, one row per multiplicity and one column per angular momentum.
    table: Array2<i64>,

    /// Boolean indicating if the counts are terms rather than raw microstate tallies.
    clean: bool,

    /// The subshells this table was built from. Empty for tables assembled by hand.
    configuration: Vec<SubshellOccupation>,
}

impl TermTable {
    /// Constructs an empty raw table.
    ///
    /// # Panics
    ///
    /// Panics if `max_mult` is zero.
    pub fn new(kind: OrbitalKind, max_mult: u32, max_am: u32) -> Self {
        assert!(max_mult >= 1, "The maximum multiplicity must be at least 1.");
        let height = ((max_mult + 1) / 2) as usize;
        let width = (max_am + 1) as usize;
        Self {
            kind,
            max_mult,
            max_am,
            table: Array2::zeros((height, width)),
            clean: false,
            configuration: vec![],
        }
    }

    /// Attaches the subshells this table was built from.
    pub(crate) fn with_configuration(mut self, configuration: Vec<SubshellOccupation>) -> Self {
        self.configuration = configuration;
        self
    }

    pub fn kind(&self) -> OrbitalKind {
        self.kind
    }

    pub fn max_mult(&self) -> u32 {
        self.max_mult
    }

    pub fn max_am(&self) -> u32 {
        self.max_am
    }

    /// The lowest multiplicity representable, of the same parity as [`Self::max_mult`].
    pub fn min_mult(&self) -> u32 {
        (self.max_mult + 1) % 2 + 1
    }

    /// The number of multiplicity rows.
    pub fn height(&self) -> usize {
        self.table.nrows()
    }

    /// The number of angular-momentum columns.
    pub fn width(&self) -> usize {
        self.table.ncols()
    }

    /// The raw count matrix, lowest multiplicity first.
    pub fn table(&self) -> &Array2<i64> {
        &self.table
    }

    /// Returns `true` if the counts are terms, *i.e.* the table has been cleaned or results from
    /// a product of clean tables.
    pub fn is_clean(&self) -> bool {
        self.clean
    }

    pub fn configuration(&self) -> &[SubshellOccupation] {
        &self.configuration
    }

    /// Iterates over the multiplicities represented, from the highest to the lowest.
    pub fn multiplicities(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.height()).rev().map(|i| self.mult_of_row(i))
    }

    fn row_of_mult(mult: u32) -> usize {
        ((mult.max(1) - 1) / 2) as usize
    }

    fn mult_of_row(&self, row: usize) -> u32 {
        self.min_mult() + 2 * u32::try_from(row).expect("Unable to convert a row index to `u32`.")
    }

    /// Returns the count at multiplicity `mult` and angular momentum `am`.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the table.
    pub fn get(&self, mult: u32, am: u32) -> i64 {
        self.table[(Self::row_of_mult(mult), am as usize)]
    }

    /// Sets the count at multiplicity `mult` and angular momentum `am`.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the table.
    pub fn set(&mut self, mult: u32, am: u32, val: i64) {
        self.table[(Self::row_of_mult(mult), am as usize)] = val;
    }

    /// Adds one to the count at multiplicity `mult` and angular momentum `am`.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the table.
    pub fn increment(&mut self, mult: u32, am: u32) {
        self.add(mult, am, 1);
    }

    fn add(&mut self, mult: u32, am: u32, val: i64) {
        self.table[(Self::row_of_mult(mult), am as usize)] += val;
    }

    /// Iterates over the nonzero cells as `(mult, am, count)`.
    fn nonzero_cells(&self) -> impl Iterator<Item = (u32, u32, i64)> + '_ {
        self.table
            .indexed_iter()
            .filter(|(_, count)| **count != 0)
            .map(|((i, j), &count)| {
                let am = u32::try_from(j).expect("Unable to convert a column index to `u32`.");
                (self.mult_of_row(i), am, count)
            })
    }

    /// Returns a new table in which the lower manifestations of every term have been removed.
    ///
    /// Cells are visited from the highest multiplicity and the highest angular momentum
    /// downwards. The count of each cell is subtracted from all cells of lower or equal
    /// multiplicity and angular momentum, the cell itself excluded. Diatomic projections are
    /// restricted to $`\pm\Lambda`$, so for diatomic tables only cells of the same angular
    /// momentum are affected.
    ///
    /// Cleaning a table that is already clean returns an unchanged copy.
    pub fn cleaned(&self) -> Self {
        let mut cleaned = self.clone();
        if self.clean {
            return cleaned;
        }

        let (height, width) = cleaned.table.dim();
        for i in (0..height).rev() {
            for j in (0..width).rev() {
                let count = cleaned.table[(i, j)];
                if count == 0 {
                    continue;
                }
                match self.kind {
                    OrbitalKind::Atomic => cleaned
                        .table
                        .slice_mut(s![..=i, ..=j])
                        .mapv_inplace(|x| x - count),
                    OrbitalKind::Diatomic => cleaned
                        .table
                        .slice_mut(s![..=i, j])
                        .mapv_inplace(|x| x - count),
                }
                cleaned.table[(i, j)] = count;
            }
        }
        cleaned.clean = true;

        if cleaned.table.iter().any(|&count| count < 0) {
            log::warn!(
                "Negative term counts after cleaning a {} term table; the raw table was not a complete microstate tally.",
                self.kind
            );
        }
        cleaned
    }

    /// Couples the terms of this table with those of another table of distinct subshells.
    ///
    /// For each pair of terms $`(m_1, L_1)`$ and $`(m_2, L_2)`$ with counts $`c_1`$ and
    /// $`c_2`$, the product $`c_1 c_2`$ is added to the coupled terms with multiplicities
    /// $`m_1 + m_2 - 1`$ and $`|m_1 - m_2| + 1`$ and angular momenta $`L_1 + L_2`$ and
    /// $`|L_1 - L_2|`$. The difference multiplicity is skipped when either multiplicity is
    /// $`1`$, and the difference angular momentum is skipped when either angular momentum is
    /// $`0`$.
    ///
    /// # Errors
    ///
    /// Errors if the tables are of different orbital kinds, if either table is not clean, or if
    /// the tables were built from a common subshell.
    pub fn product(&self, other: &Self) -> Result<Self, TermTableCompatibilityError> {
        if self.kind != other.kind {
            return Err(TermTableCompatibilityError(format!(
                "cannot couple a {} term table with a {} term table",
                self.kind, other.kind
            )));
        }
        if !self.clean || !other.clean {
            return Err(TermTableCompatibilityError(
                "only cleaned term tables can be coupled".to_string(),
            ));
        }
        if let Some(shared) = self.configuration.iter().find(|sub| {
            other
                .configuration
                .iter()
                .any(|other_sub| sub.n == other_sub.n && sub.l == other_sub.l)
        }) {
            return Err(TermTableCompatibilityError(format!(
                "both term tables contain subshell {}",
                shared.subshell_label(self.kind)
            )));
        }

        let mut result = TermTable::new(
            self.kind,
            self.max_mult + other.max_mult - 1,
            self.max_am + other.max_am,
        );
        for ((mult1, am1, count1), (mult2, am2, count2)) in self
            .nonzero_cells()
            .cartesian_product(other.nonzero_cells().collect_vec())
        {
            let mut mults = vec![mult1 + mult2 - 1];
            if mult1 != 1 && mult2 != 1 {
                mults.push(mult1.abs_diff(mult2) + 1);
            }
            let mut ams = vec![am1 + am2];
            if am1 != 0 && am2 != 0 {
                ams.push(am1.abs_diff(am2));
            }
            for (&mult, &am) in mults.iter().cartesian_product(ams.iter()) {
                result.add(mult, am, count1 * count2);
            }
        }
        result.clean = true;
        result.configuration = self
            .configuration
            .iter()
            .chain(other.configuration.iter())
            .cloned()
            .collect();
        Ok(result)
    }

    /// Lists the nonzero cells as term symbols with their counts, from the highest multiplicity
    /// down, and within a multiplicity from the highest angular momentum down.
    pub fn terms(&self) -> Vec<(TermSymbol, i64)> {
        let mut terms = self
            .nonzero_cells()
            .map(|(mult, am, count)| {
                let am =
                    i32::try_from(am).expect("Unable to convert an angular momentum to `i32`.");
                (TermSymbol::new(self.kind, mult, am), count)
            })
            .collect_vec();
        terms.sort_by_key(|(term, _)| (Reverse(term.mult()), Reverse(term.am())));
        terms
    }
}

impl PartialEq for TermTable {
    /// Two tables are equal if they have the same kind, dimensions, cleanliness and counts,
    /// irrespective of the subshells they were built from.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.max_mult == other.max_mult
            && self.max_am == other.max_am
            && self.clean == other.clean
            && self.table == other.table
    }
}

impl Eq for TermTable {}

impl fmt::Display for TermTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(TermTableStyle::Plain))
    }
}
