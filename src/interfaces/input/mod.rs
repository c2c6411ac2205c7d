//! The YAML input file of the `termsym` binary.

use anyhow::{self, Context};
use serde::{Deserialize, Serialize};

use crate::drivers::configuration_terms::{ConfigurationTermsDriver, ConfigurationTermsParams};
use crate::drivers::term_table_enumeration::{
    TermTableEnumerationDriver, TermTableEnumerationParams,
};
use crate::drivers::TermSymDriver;
use crate::io::format::{
    log_macsec_begin, log_macsec_end, termsym_error, termsym_output, termsym_warn,
};
use crate::interfaces::InputHandle;


/// A structure containing `termsym` input parameters which can be serialised into and
/// deserialised from a YAML input file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Input {
    /// Specification for term table enumeration. If `None`, no term table enumeration will be
    /// performed.
    ///
    /// # Default
    ///
    /// If not specified, this will be taken to be `None`.
    #[serde(default)]
    pub term_table_enumeration: Option<TermTableEnumerationParams>,

    /// Specification for configuration term analysis. If `None`, no configuration term analysis
    /// will be performed.
    ///
    /// # Default
    ///
    /// If not specified, this will be taken to be `None`.
    #[serde(default)]
    pub configuration_terms: Option<ConfigurationTermsParams>,
}

impl Default for Input {
    fn default() -> Self {
        Input {
            term_table_enumeration: Some(TermTableEnumerationParams::default()),
            configuration_terms: Some(ConfigurationTermsParams::default()),
        }
    }
}

impl InputHandle for Input {
    fn handle(&self) -> Result<(), anyhow::Error> {
        if self.term_table_enumeration.is_none() && self.configuration_terms.is_none() {
            termsym_warn!(
                "Neither term table enumeration nor configuration term analysis requested."
            );
            return Ok(());
        }

        if let Some(params) = self.term_table_enumeration.as_ref() {
            log_macsec_begin("Term table enumeration");
            termsym_output!("");
            let mut driver = TermTableEnumerationDriver::builder()
                .parameters(params)
                .build()
                .with_context(|| "Unable to construct a term table enumeration driver")?;
            driver.run().map_err(|err| {
                termsym_error!("Term table enumeration failed: {err:#}");
                err
            })?;
            log_macsec_end("Term table enumeration");
            termsym_output!("");
        }

        if let Some(params) = self.configuration_terms.as_ref() {
            log_macsec_begin("Configuration term analysis");
            termsym_output!("");
            let mut driver = ConfigurationTermsDriver::builder()
                .parameters(params)
                .build()
                .with_context(|| "Unable to construct a configuration term analysis driver")?;
            driver.run().map_err(|err| {
                termsym_error!("Configuration term analysis failed: {err:#}");
                err
            })?;
            log_macsec_end("Configuration term analysis");
            termsym_output!("");
        }

        Ok(())
    }
}
