//! # termsym: term symbols of atomic and diatomic configurations
//!
//! `termsym` enumerates the microstates of electronic configurations built from atomic
//! ($`s, p, d, \ldots`$) or diatomic ($`\sigma, \pi, \delta, \ldots`$) subshells and reduces them
//! to the Russell–Saunders term symbols $`^{2S+1}L`$ (or $`^{2S+1}\Lambda`$) that they give rise
//! to. It provides:
//! - validated spin-orbitals and the Pauli-allowed occupations of a subshell,
//! - term tables tallying microstates by multiplicity and total angular momentum,
//! - the reduction of such tallies to terms, and the coupling of terms of distinct subshells,
//! - plain-text and LaTeX renderings of term tables, and
//! - a binary driven by a YAML input file.
//!
//! ## Examples and usage
//!
//! For most items (structs, enums, functions, and traits), their usages are illustrated in test
//! functions. The `termsym` binary writes a template input file with `termsym --template input`
//! and runs it with `termsym --config input.yml`.
//!
//! ## License
//!
//! GNU Lesser General Public License v3.0.

pub mod drivers;
pub mod interfaces;
pub mod io;
pub mod occupation;
pub mod orbital;
pub mod term;
