//! Spin-orbitals of atoms and diatomic molecules.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use derive_builder::Builder;
use fraction;
use serde::{Deserialize, Serialize};

use crate::orbital::orbital_symbols::{
    ATOMIC_ANGMOM_INDICES, ATOMIC_ANGMOM_SYMBOLS, ATOMIC_TERM_SYMBOLS, DIATOMIC_ANGMOM_INDICES,
    DIATOMIC_ANGMOM_SYMBOLS, DIATOMIC_TERM_SYMBOLS,
};

pub mod orbital_symbols;


type F = fraction::Fraction;

// ======
// Errors
// ======

/// Error raised when a spin-orbital, or a subshell occupation, is constructed from invalid
/// quantum numbers or an unrecognised spin encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbitalValidationError(pub String);

impl fmt::Display for OrbitalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Orbital validation error: {}", self.0)
    }
}

impl Error for OrbitalValidationError {}

/// Error raised when an angular-momentum symbol is not part of the recognised alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AngularMomentumLookupError(pub String);

impl fmt::Display for AngularMomentumLookupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Angular momentum lookup error: {}", self.0)
    }
}

impl Error for AngularMomentumLookupError {}

/// Errors that can arise when a spin-orbital is constructed from textual labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrbitalError {
    Validation(OrbitalValidationError),
    Lookup(AngularMomentumLookupError),
}

impl fmt::Display for OrbitalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OrbitalError::Validation(err) => write!(f, "{err}"),
            OrbitalError::Lookup(err) => write!(f, "{err}"),
        }
    }
}

impl Error for OrbitalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            OrbitalError::Validation(err) => Some(err),
            OrbitalError::Lookup(err) => Some(err),
        }
    }
}

impl From<OrbitalValidationError> for OrbitalError {
    fn from(err: OrbitalValidationError) -> Self {
        OrbitalError::Validation(err)
    }
}

impl From<AngularMomentumLookupError> for OrbitalError {
    fn from(err: AngularMomentumLookupError) -> Self {
        OrbitalError::Lookup(err)
    }
}

// ===========
// OrbitalKind
// ===========

/// Enumerated type for the families of orbitals whose configurations can be classified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbitalKind {
    /// Atomic orbitals, for which all projections $`-l \le m_l \le l`$ are admitted.
    #[default]
    Atomic,

    /// Diatomic orbitals, for which only the extremal projections $`m_l = \pm\lambda`$ are
    /// admitted.
    Diatomic,
}

impl OrbitalKind {
    /// The lower-case alphabet labelling orbital angular momenta of this kind.
    pub fn angmom_symbols(&self) -> &'static [&'static str] {
        match self {
            OrbitalKind::Atomic => &ATOMIC_ANGMOM_SYMBOLS,
            OrbitalKind::Diatomic => &DIATOMIC_ANGMOM_SYMBOLS,
        }
    }

    /// The upper-case alphabet labelling term angular momenta of this kind.
    pub fn term_symbols(&self) -> &'static [&'static str] {
        match self {
            OrbitalKind::Atomic => &ATOMIC_TERM_SYMBOLS,
            OrbitalKind::Diatomic => &DIATOMIC_TERM_SYMBOLS,
        }
    }

    /// The largest orbital angular momentum that has a symbol in this kind's alphabet.
    pub fn max_l(&self) -> u32 {
        u32::try_from(self.angmom_symbols().len() - 1)
            .expect("Unable to convert the alphabet length to `u32`.")
    }

    /// Looks up the angular momentum denoted by an orbital symbol.
    ///
    /// Diatomic orbitals accept the Latin atomic symbols as aliases of the Greek ones.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The orbital symbol, *e.g.* `p` or `π`.
    ///
    /// # Errors
    ///
    /// Errors if `symbol` is not part of the recognised alphabet(s).
    pub fn angmom_from_symbol(&self, symbol: &str) -> Result<u32, AngularMomentumLookupError> {
        let l = match self {
            OrbitalKind::Atomic => ATOMIC_ANGMOM_INDICES.get(symbol),
            OrbitalKind::Diatomic => DIATOMIC_ANGMOM_INDICES
                .get(symbol)
                .or_else(|| ATOMIC_ANGMOM_INDICES.get(symbol)),
        };
        l.copied().ok_or_else(|| {
            AngularMomentumLookupError(format!(
                "invalid {self} orbital angular momentum symbol `{symbol}`"
            ))
        })
    }

    /// The number of spin-orbitals in a subshell of angular momentum `l`.
    pub fn subshell_capacity(&self, l: u32) -> u32 {
        match self {
            OrbitalKind::Atomic => 2 * (2 * l + 1),
            OrbitalKind::Diatomic => {
                if l == 0 {
                    2
                } else {
                    4
                }
            }
        }
    }

    /// The admissible projections of a subshell of angular momentum `l`, from the highest to the
    /// lowest.
    pub fn projections(&self, l: u32) -> Vec<i32> {
        let l = i32::try_from(l).expect("Unable to convert the angular momentum to `i32`.");
        match self {
            OrbitalKind::Atomic => (-l..=l).rev().collect(),
            OrbitalKind::Diatomic => {
                if l == 0 {
                    vec![0]
                } else {
                    vec![l, -l]
                }
            }
        }
    }
}

impl fmt::Display for OrbitalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrbitalKind::Atomic => write!(f, "atomic"),
            OrbitalKind::Diatomic => write!(f, "diatomic"),
        }
    }
}

impl FromStr for OrbitalKind {
    type Err = OrbitalValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "atomic" => Ok(OrbitalKind::Atomic),
            "diatomic" => Ok(OrbitalKind::Diatomic),
            _ => Err(OrbitalValidationError(format!("unknown orbital kind `{s}`"))),
        }
    }
}

// ====
// Spin
// ====

/// Enumerated type for the two spin states of an electron.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Spin {
    /// $`m_s = +\frac{1}{2}`$.
    Alpha,

    /// $`m_s = -\frac{1}{2}`$.
    Beta,
}

impl Spin {
    /// The spin projection as an exact fraction.
    pub fn projection(&self) -> F {
        match self {
            Spin::Alpha => F::new(1u64, 2u64),
            Spin::Beta => F::new_neg(1u64, 2u64),
        }
    }

    /// Twice the spin projection, *i.e.* $`\pm 1`$.
    pub fn twice_projection(&self) -> i32 {
        match self {
            Spin::Alpha => 1,
            Spin::Beta => -1,
        }
    }

    /// The single-letter label used in spin-orbital labels.
    pub fn label(&self) -> char {
        match self {
            Spin::Alpha => 'a',
            Spin::Beta => 'b',
        }
    }
}

impl FromStr for Spin {
    type Err = OrbitalValidationError;

    /// Parses `alpha`, `α`, `1`, `+1`, `1/2` or `+1/2` as [`Spin::Alpha`], and `beta`, `β`,
    /// `-1` or `-1/2` as [`Spin::Beta`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "alpha" | "α" | "1" | "+1" | "1/2" | "+1/2" => Ok(Spin::Alpha),
            "beta" | "β" | "-1" | "-1/2" => Ok(Spin::Beta),
            _ => Err(OrbitalValidationError(format!(
                "spin must be one of alpha/α/+1/+1/2 or beta/β/-1/-1/2, got: `{s}`"
            ))),
        }
    }
}

impl TryFrom<i32> for Spin {
    type Error = OrbitalValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Spin::Alpha),
            -1 => Ok(Spin::Beta),
            _ => Err(OrbitalValidationError(format!(
                "integer spin encodings must be +1 or -1, got: {value}"
            ))),
        }
    }
}

impl TryFrom<F> for Spin {
    type Error = OrbitalValidationError;

    fn try_from(value: F) -> Result<Self, Self::Error> {
        if value == F::new(1u64, 2u64) || value == F::new(1u64, 1u64) {
            Ok(Spin::Alpha)
        } else if value == F::new_neg(1u64, 2u64) || value == F::new_neg(1u64, 1u64) {
            Ok(Spin::Beta)
        } else {
            Err(OrbitalValidationError(format!(
                "fractional spin encodings must be ±1/2 or ±1, got: {value}"
            )))
        }
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spin::Alpha => write!(f, "α"),
            Spin::Beta => write!(f, "β"),
        }
    }
}

// ===========
// SpinOrbital
// ===========

/// An immutable single-particle state: a spatial orbital of a given kind combined with a spin.
#[derive(Builder, Clone, Debug, PartialEq, Eq, Hash)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct SpinOrbital {
    /// The kind of the spatial orbital.
    kind: OrbitalKind,

    /// The shell $`n`$.
    n: u32,

    /// The orbital angular momentum $`l`$.
    l: u32,

    /// The projected angular momentum $`m_l`$.
    ml: i32,

    /// The spin.
    spin: Spin,
}

impl SpinOrbitalBuilder {
    fn validate(&self) -> Result<(), String> {
        let kind = self.kind.ok_or("No orbital kind found.".to_string())?;
        let n = self.n.ok_or("No shell found.".to_string())?;
        let l = self.l.ok_or("No angular momentum found.".to_string())?;
        let ml = self.ml.ok_or("No projected angular momentum found.".to_string())?;
        if self.spin.is_none() {
            return Err("No spin found.".to_string());
        }

        if n < 1 {
            return Err(format!(
                "shells (n) must be integers greater than 0, got: {n}"
            ));
        }
        if l > kind.max_l() {
            return Err(format!(
                "no {kind} orbital symbol exists for angular momentum l = {l}"
            ));
        }
        if kind == OrbitalKind::Atomic && n <= l {
            return Err(format!(
                "atomic subshells require n - l >= 1, got: n = {n}, l = {l}"
            ));
        }
        if ml.unsigned_abs() > l {
            return Err(format!(
                "projected angular momentum must satisfy -l <= ml <= l, got: l = {l}, ml = {ml}"
            ));
        }
        if kind == OrbitalKind::Diatomic && ml.unsigned_abs() != l {
            return Err(format!(
                "diatomic orbitals may only have ml = ±l, got: l = {l}, ml = {ml}"
            ));
        }
        Ok(())
    }
}

impl SpinOrbital {
    /// Returns a builder to construct a new [`SpinOrbital`].
    fn builder() -> SpinOrbitalBuilder {
        SpinOrbitalBuilder::default()
    }

    /// Constructs a validated spin-orbital.
    ///
    /// # Arguments
    ///
    /// * `kind` - The kind of the spatial orbital.
    /// * `n` - The shell, at least $`1`$.
    /// * `l` - The orbital angular momentum. Atomic orbitals require $`n - l \ge 1`$.
    /// * `ml` - The projected angular momentum, with $`|m_l| \le l`$ for atomic orbitals and
    /// $`|m_l| = l`$ for diatomic orbitals.
    /// * `spin` - The spin.
    ///
    /// # Errors
    ///
    /// Errors if the quantum numbers are inconsistent.
    pub fn new(
        kind: OrbitalKind,
        n: u32,
        l: u32,
        ml: i32,
        spin: Spin,
    ) -> Result<Self, OrbitalValidationError> {
        Self::builder()
            .kind(kind)
            .n(n)
            .l(l)
            .ml(ml)
            .spin(spin)
            .build()
            .map_err(|err| OrbitalValidationError(err.to_string()))
    }

    /// Constructs a validated spin-orbital from an angular-momentum symbol and a spin label.
    ///
    /// # Arguments
    ///
    /// * `kind` - The kind of the spatial orbital.
    /// * `n` - The shell.
    /// * `l_symbol` - The angular-momentum symbol, *e.g.* `d`, `π`, or `p` as an alias of `π`.
    /// * `ml` - The projected angular momentum.
    /// * `spin` - A spin label understood by [`Spin::from_str`].
    ///
    /// # Errors
    ///
    /// Errors if the symbol is not recognised or if the quantum numbers are inconsistent.
    pub fn from_symbols(
        kind: OrbitalKind,
        n: u32,
        l_symbol: &str,
        ml: i32,
        spin: &str,
    ) -> Result<Self, OrbitalError> {
        let l = kind.angmom_from_symbol(l_symbol)?;
        let spin = Spin::from_str(spin)?;
        Ok(Self::new(kind, n, l, ml, spin)?)
    }

    pub fn kind(&self) -> OrbitalKind {
        self.kind
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn l(&self) -> u32 {
        self.l
    }

    pub fn ml(&self) -> i32 {
        self.ml
    }

    pub fn spin(&self) -> Spin {
        self.spin
    }

    /// The orbital symbol of this spin-orbital's angular momentum.
    pub fn symbol(&self) -> &'static str {
        self.kind.angmom_symbols()[self.l as usize]
    }

    /// The label of the spatial part, *e.g.* `2p_{-1}` or `1σ`. The projection is omitted for
    /// $`l = 0`$.
    pub fn spatial_label(&self) -> String {
        if self.l == 0 {
            format!("{}{}", self.n, self.symbol())
        } else {
            format!("{}{}_{{{}}}", self.n, self.symbol(), self.ml)
        }
    }

    /// The full label, *e.g.* `5g_{2}b`.
    pub fn label(&self) -> String {
        format!("{}{}", self.spatial_label(), self.spin.label())
    }
}

impl fmt::Display for SpinOrbital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
