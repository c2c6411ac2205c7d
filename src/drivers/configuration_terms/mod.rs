//! Driver for the term analysis of a configuration of one or more distinct subshells.

use std::fmt;

use anyhow::{self, ensure, format_err, Context};
use derive_builder::Builder;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::drivers::TermSymDriver;
use crate::io::format::{
    log_subtitle, log_title, termsym_output, termsym_warn, write_subtitle, TermSymOutput,
};
use crate::io::write_termsym_yaml;
use crate::orbital::OrbitalKind;
use crate::term::{
    multiple_subshell_terms, subshell_terms, SubshellOccupation, TermTable, TermTableStyle,
};

#[cfg(test)]
#[path = "configuration_terms_tests.rs"]
mod configuration_terms_tests;

// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

/// An enumerated type for the ways the terms of a configuration can be obtained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigurationTermsMethod {
    /// Variant for tallying the microstates of the whole configuration, then cleaning.
    #[default]
    Enumeration,

    /// Variant for cleaning the table of each subshell, then coupling the tables pairwise with
    /// [`TermTable::product`]. The coupling only produces the stretched and the fully opposed
    /// combinations of multiplicities and angular momenta.
    Product,
}

impl fmt::Display for ConfigurationTermsMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationTermsMethod::Enumeration => write!(f, "microstate enumeration"),
            ConfigurationTermsMethod::Product => write!(f, "product of subshell terms"),
        }
    }
}

fn default_subshells() -> Vec<SubshellOccupation> {
    vec![SubshellOccupation::new(2, 1, 2)]
}

/// A structure containing control parameters for configuration term analysis.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct ConfigurationTermsParams {
    /// The kind of the orbitals making up the configuration.
    #[builder(default = "OrbitalKind::Atomic")]
    #[serde(default)]
    pub kind: OrbitalKind,

    /// The occupied subshells of the configuration. Closed subshells may be omitted as they only
    /// contribute a $`^1S`$ (or $`^1\Sigma`$) term.
    #[builder(default = "default_subshells()")]
    #[serde(default = "default_subshells")]
    pub subshells: Vec<SubshellOccupation>,

    /// The method used to obtain the terms.
    #[builder(default = "ConfigurationTermsMethod::Enumeration")]
    #[serde(default)]
    pub method: ConfigurationTermsMethod,

    /// The rendering of the tables in the output.
    #[builder(default = "TermTableStyle::Plain")]
    #[serde(default)]
    pub table_style: TermTableStyle,

    /// Optional name for saving the result as a YAML file. If `None`, the result will not be
    /// saved.
    #[builder(default = "None")]
    #[serde(default)]
    pub result_save_name: Option<String>,
}

impl ConfigurationTermsParams {
    /// Returns a builder to construct a [`ConfigurationTermsParams`] structure.
    pub fn builder() -> ConfigurationTermsParamsBuilder {
        ConfigurationTermsParamsBuilder::default()
    }

    /// The configuration label, *e.g.* `2p^{2}`.
    fn configuration_label(&self) -> String {
        self.subshells
            .iter()
            .map(|subshell| subshell.label(self.kind))
            .join(" ")
    }
}

impl Default for ConfigurationTermsParams {
    fn default() -> Self {
        Self::builder()
            .build()
            .expect("Unable to construct a default `ConfigurationTermsParams`.")
    }
}

impl fmt::Display for ConfigurationTermsParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbital kind: {}", self.kind)?;
        writeln!(f, "Configuration: {}", self.configuration_label())?;
        writeln!(f, "Method: {}", self.method)?;
        writeln!(f, "Table style: {}", self.table_style)?;
        writeln!(f)?;
        Ok(())
    }
}

// ------
// Result
// ------

/// A structure to contain configuration term analysis results.
#[derive(Clone, Builder, Debug, Serialize)]
pub struct ConfigurationTermsResult {
    /// The control parameters used to obtain this set of results.
    parameters: ConfigurationTermsParams,

    /// The raw microstate tally of the configuration. Only available with
    /// [`ConfigurationTermsMethod::Enumeration`].
    #[builder(default = "None")]
    raw_table: Option<TermTable>,

    /// The terms of the configuration.
    clean_table: TermTable,
}

impl ConfigurationTermsResult {
    fn builder() -> ConfigurationTermsResultBuilder {
        ConfigurationTermsResultBuilder::default()
    }

    pub fn parameters(&self) -> &ConfigurationTermsParams {
        &self.parameters
    }

    pub fn raw_table(&self) -> Option<&TermTable> {
        self.raw_table.as_ref()
    }

    pub fn clean_table(&self) -> &TermTable {
        &self.clean_table
    }
}

impl fmt::Display for ConfigurationTermsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.parameters.table_style;
        if let Some(raw_table) = self.raw_table.as_ref() {
            write_subtitle(f, "Microstate tally")?;
            writeln!(f, "{}", raw_table.format(style))?;
            writeln!(f)?;
        }
        write_subtitle(f, "Terms")?;
        writeln!(f, "{}", self.clean_table.format(style))?;
        writeln!(f, "Terms: {}", self.clean_table.format_terms())?;
        writeln!(f)?;
        Ok(())
    }
}

// ------
// Driver
// ------

/// A driver for configuration term analysis.
#[derive(Clone, Builder)]
pub struct ConfigurationTermsDriver<'a> {
    /// The control parameters for configuration term analysis.
    parameters: &'a ConfigurationTermsParams,

    /// The result of the configuration term analysis.
    #[builder(setter(skip), default = "None")]
    result: Option<ConfigurationTermsResult>,
}

impl<'a> ConfigurationTermsDriver<'a> {
    /// Returns a builder to construct a [`ConfigurationTermsDriver`] structure.
    pub fn builder() -> ConfigurationTermsDriverBuilder<'a> {
        ConfigurationTermsDriverBuilder::default()
    }

    /// Couples the cleaned tables of the individual subshells.
    fn couple_subshell_terms(params: &ConfigurationTermsParams) -> Result<TermTable, anyhow::Error> {
        if params
            .subshells
            .iter()
            .filter(|subshell| {
                let capacity = params.kind.subshell_capacity(subshell.l);
                subshell.l > 0 && subshell.electrons > 0 && subshell.electrons < capacity
            })
            .count()
            > 1
        {
            termsym_warn!(
                "Coupling several open subshells with nonzero angular momenta by product omits the intermediate terms."
            );
        }
        params
            .subshells
            .iter()
            .map(|subshell| {
                subshell_terms(params.kind, subshell.n, subshell.l, subshell.electrons)
                    .map(|table| table.cleaned())
            })
            .reduce(|acc, table| {
                let acc = acc?;
                let table = table?;
                acc.product(&table).with_context(|| {
                    format!(
                        "Unable to couple the terms of subshell {} with the preceding subshells",
                        table
                            .configuration()
                            .iter()
                            .map(|subshell| subshell.label(params.kind))
                            .join(" ")
                    )
                })
            })
            .ok_or_else(|| format_err!("No subshells found to couple."))?
    }

    /// Executes configuration term analysis.
    fn analyse_configuration_terms(&mut self) -> Result<(), anyhow::Error> {
        log_title("Configuration Term Analysis");
        termsym_output!("");
        let params = self.parameters;
        params.log_output_display();
        ensure!(
            !params.subshells.is_empty(),
            "At least one subshell is required for configuration term analysis."
        );

        let (raw_table, clean_table) = match params.method {
            ConfigurationTermsMethod::Enumeration => {
                let raw_table = multiple_subshell_terms(params.kind, &params.subshells)?;
                let clean_table = raw_table.cleaned();
                (Some(raw_table), clean_table)
            }
            ConfigurationTermsMethod::Product => (None, Self::couple_subshell_terms(params)?),
        };

        let result = ConfigurationTermsResult::builder()
            .parameters(params.clone())
            .raw_table(raw_table)
            .clean_table(clean_table)
            .build()?;

        log_subtitle(&format!("Terms of {}", params.configuration_label()));
        termsym_output!("");
        result.log_output_display();
        if let Some(name) = params.result_save_name.as_ref() {
            write_termsym_yaml(name, &result)?;
            termsym_output!("Configuration term analysis results saved as {name}.yml.");
            termsym_output!("");
        }

        self.result = Some(result);
        Ok(())
    }
}

impl TermSymDriver for ConfigurationTermsDriver<'_> {
    type Params = ConfigurationTermsParams;

    type Outcome = ConfigurationTermsResult;

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No configuration term analysis results found."))
    }

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.analyse_configuration_terms()
    }
}
