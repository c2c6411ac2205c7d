//! Driver for enumerating the term tables of all subshells up to a maximum angular momentum.

use std::fmt;

use anyhow::{self, format_err};
use derive_builder::Builder;
use itertools::Itertools;
use log;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::drivers::TermSymDriver;
use crate::io::format::{
    log_subtitle, log_title, nice_bool, termsym_output, write_subtitle, TermSymOutput,
};
use crate::io::write_termsym_yaml;
use crate::orbital::OrbitalKind;
use crate::term::{all_term_tables, TermTable, TermTableStyle};

#[cfg(test)]
#[path = "term_table_enumeration_tests.rs"]
mod term_table_enumeration_tests;

// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

const fn default_max_am() -> u32 {
    3
}

const fn default_true() -> bool {
    true
}

/// A structure containing control parameters for term table enumeration.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct TermTableEnumerationParams {
    /// The kind of the orbitals whose subshells are enumerated.
    #[builder(default = "OrbitalKind::Atomic")]
    #[serde(default)]
    pub kind: OrbitalKind,

    /// The number of angular momenta to enumerate: subshells with $`l < `$ `max_am` are
    /// considered.
    #[builder(default = "default_max_am()")]
    #[serde(default = "default_max_am")]
    pub max_am: u32,

    /// Boolean indicating if the enumerated tables are to be cleaned so that they list terms
    /// rather than raw microstate tallies.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub clean: bool,

    /// The rendering of the tables in the output.
    #[builder(default = "TermTableStyle::Plain")]
    #[serde(default)]
    pub table_style: TermTableStyle,

    /// Boolean indicating if the tables are to be cleaned in parallel.
    #[builder(default = "false")]
    #[serde(default)]
    pub parallel: bool,

    /// Optional name for saving the result as a YAML file. If `None`, the result will not be
    /// saved.
    #[builder(default = "None")]
    #[serde(default)]
    pub result_save_name: Option<String>,
}

impl TermTableEnumerationParamsBuilder {
    fn validate(&self) -> Result<(), String> {
        let kind = self.kind.unwrap_or(OrbitalKind::Atomic);
        let max_am = self.max_am.unwrap_or(default_max_am());
        if max_am > kind.max_l() + 1 {
            Err(format!(
                "{kind} subshells are only available up to l = {}, got: max_am = {max_am}",
                kind.max_l()
            ))
        } else {
            Ok(())
        }
    }
}

impl TermTableEnumerationParams {
    /// Returns a builder to construct a [`TermTableEnumerationParams`] structure.
    pub fn builder() -> TermTableEnumerationParamsBuilder {
        TermTableEnumerationParamsBuilder::default()
    }
}

impl Default for TermTableEnumerationParams {
    fn default() -> Self {
        Self::builder()
            .build()
            .expect("Unable to construct a default `TermTableEnumerationParams`.")
    }
}

impl fmt::Display for TermTableEnumerationParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbital kind: {}", self.kind)?;
        writeln!(
            f,
            "Angular momenta: {}",
            (0..self.max_am)
                .map(|l| self
                    .kind
                    .angmom_symbols()
                    .get(l as usize)
                    .copied()
                    .unwrap_or("?"))
                .join(", ")
        )?;
        writeln!(f, "Clean tables: {}", nice_bool(self.clean))?;
        writeln!(f, "Table style: {}", self.table_style)?;
        writeln!(f, "Parallel cleaning: {}", nice_bool(self.parallel))?;
        writeln!(f)?;
        Ok(())
    }
}

// ------
// Result
// ------

/// A structure to contain term table enumeration results.
#[derive(Clone, Builder, Debug, Serialize)]
pub struct TermTableEnumerationResult {
    /// The control parameters used to obtain this set of results.
    parameters: TermTableEnumerationParams,

    /// The term tables, one per subshell and electron count, in enumeration order.
    tables: Vec<TermTable>,
}

impl TermTableEnumerationResult {
    fn builder() -> TermTableEnumerationResultBuilder {
        TermTableEnumerationResultBuilder::default()
    }

    pub fn parameters(&self) -> &TermTableEnumerationParams {
        &self.parameters
    }

    pub fn tables(&self) -> &[TermTable] {
        &self.tables
    }
}

impl fmt::Display for TermTableEnumerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for table in self.tables.iter() {
            let label = table
                .configuration()
                .iter()
                .map(|subshell| subshell.label(table.kind()))
                .join(" ");
            write_subtitle(f, &format!("Configuration {label}"))?;
            writeln!(f, "{}", table.format(self.parameters.table_style))?;
            if table.is_clean() {
                writeln!(f, "Terms: {}", table.format_terms())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ------
// Driver
// ------

/// A driver for term table enumeration.
#[derive(Clone, Builder)]
pub struct TermTableEnumerationDriver<'a> {
    /// The control parameters for term table enumeration.
    parameters: &'a TermTableEnumerationParams,

    /// The result of the term table enumeration.
    #[builder(setter(skip), default = "None")]
    result: Option<TermTableEnumerationResult>,
}

impl<'a> TermTableEnumerationDriver<'a> {
    /// Returns a builder to construct a [`TermTableEnumerationDriver`] structure.
    pub fn builder() -> TermTableEnumerationDriverBuilder<'a> {
        TermTableEnumerationDriverBuilder::default()
    }

    /// Executes term table enumeration.
    fn enumerate_term_tables(&mut self) -> Result<(), anyhow::Error> {
        log_title("Term Table Enumeration");
        termsym_output!("");
        let params = self.parameters;
        params.log_output_display();

        let raw_tables = all_term_tables(params.kind, params.max_am)?.collect_vec();
        log::debug!("Enumerated {} raw term tables.", raw_tables.len());
        let tables = match (params.clean, params.parallel) {
            (true, true) => raw_tables.par_iter().map(TermTable::cleaned).collect(),
            (true, false) => raw_tables.iter().map(TermTable::cleaned).collect(),
            (false, _) => raw_tables,
        };

        let result = TermTableEnumerationResult::builder()
            .parameters(params.clone())
            .tables(tables)
            .build()?;

        log_subtitle(&format!(
            "{} term tables",
            if params.clean { "Cleaned" } else { "Raw" }
        ));
        termsym_output!("");
        result.log_output_display();
        if let Some(name) = params.result_save_name.as_ref() {
            write_termsym_yaml(name, &result)?;
            termsym_output!("Term table enumeration results saved as {name}.yml.");
            termsym_output!("");
        }

        self.result = Some(result);
        Ok(())
    }
}

impl TermSymDriver for TermTableEnumerationDriver<'_> {
    type Params = TermTableEnumerationParams;

    type Outcome = TermTableEnumerationResult;

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No term table enumeration results found."))
    }

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.enumerate_term_tables()
    }
}
