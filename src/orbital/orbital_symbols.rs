//! Alphabets of angular-momentum symbols for atomic and diatomic orbitals and terms.

use phf::phf_map;

/// Lower-case labels of atomic orbital angular momenta, indexed by $`l`$.
pub static ATOMIC_ANGMOM_SYMBOLS: [&str; 21] = [
    "s", "p", "d", "f", "g", "h", "i", "k", "l", "m", "n", "o", "q", "r", "t", "u", "v", "w", "x",
    "y", "z",
];

/// Lower-case labels of diatomic orbital angular momenta, indexed by $`\lambda`$.
pub static DIATOMIC_ANGMOM_SYMBOLS: [&str; 20] = [
    "σ", "π", "δ", "φ", "γ", "η", "ι", "κ", "μ", "ν", "o", "q", "r", "t", "u", "v", "w", "x", "y",
    "z",
];

/// Upper-case labels of atomic term angular momenta, indexed by $`L`$.
pub static ATOMIC_TERM_SYMBOLS: [&str; 21] = [
    "S", "P", "D", "F", "G", "H", "I", "K", "L", "M", "N", "O", "Q", "R", "T", "U", "V", "W", "X",
    "Y", "Z",
];

/// Upper-case labels of diatomic term angular momenta, indexed by $`\Lambda`$.
pub static DIATOMIC_TERM_SYMBOLS: [&str; 20] = [
    "Σ", "Π", "Δ", "Φ", "Γ", "Η", "Ι", "Κ", "Μ", "Ν", "O", "Q", "R", "T", "U", "V", "W", "X", "Y",
    "Z",
];

/// Indices of atomic orbital angular-momentum labels.
pub static ATOMIC_ANGMOM_INDICES: phf::Map<&'static str, u32> = phf_map! {
    "s" => 0,
    "p" => 1,
    "d" => 2,
    "f" => 3,
    "g" => 4,
    "h" => 5,
    "i" => 6,
    "k" => 7,
    "l" => 8,
    "m" => 9,
    "n" => 10,
    "o" => 11,
    "q" => 12,
    "r" => 13,
    "t" => 14,
    "u" => 15,
    "v" => 16,
    "w" => 17,
    "x" => 18,
    "y" => 19,
    "z" => 20,
};

/// Indices of diatomic orbital angular-momentum labels.
///
/// The Latin tail of the alphabet is shifted by one place with respect to
/// [`ATOMIC_ANGMOM_INDICES`] since there is no Greek counterpart of `i`.
pub static DIATOMIC_ANGMOM_INDICES: phf::Map<&'static str, u32> = phf_map! {
    "σ" => 0,
    "π" => 1,
    "δ" => 2,
    "φ" => 3,
    "γ" => 4,
    "η" => 5,
    "ι" => 6,
    "κ" => 7,
    "μ" => 8,
    "ν" => 9,
    "o" => 10,
    "q" => 11,
    "r" => 12,
    "t" => 13,
    "u" => 14,
    "v" => 15,
    "w" => 16,
    "x" => 17,
    "y" => 18,
    "z" => 19,
};
