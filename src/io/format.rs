//! Nice `termsym` output formatting.

use std::fmt;

use log;

const TERMSYM_BANNER_LENGTH: usize = 103;

/// Logs an error to the `termsym-output` logger.
macro_rules! termsym_error {
    ($fmt:expr $(, $($arg:tt)*)?) => {
        log::error!($fmt, $($($arg)*)?);
        log::error!(target: "termsym-output", $fmt, $($($arg)*)?);
    }
}

/// Logs a warning to the `termsym-output` logger.
macro_rules! termsym_warn {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::warn!(target: "termsym-output", $fmt, $($($arg)*)?); }
}

/// Logs a main output line to the `termsym-output` logger.
macro_rules! termsym_output {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::info!(target: "termsym-output", $fmt, $($($arg)*)?); }
}

pub(crate) use {termsym_error, termsym_output, termsym_warn};

/// Logs a nicely formatted section title to the `termsym-output` logger.
pub(crate) fn log_title(title: &str) {
    let length = title.chars().count().max(TERMSYM_BANNER_LENGTH - 6);
    let bar = "─".repeat(length);
    termsym_output!("┌──{bar}──┐");
    termsym_output!("│§ {title:^length$} §│");
    termsym_output!("└──{bar}──┘");
}

/// Writes a nicely formatted subtitle.
pub(crate) fn write_subtitle(f: &mut fmt::Formatter<'_>, subtitle: &str) -> fmt::Result {
    let length = subtitle.chars().count();
    let bar = "═".repeat(length);
    writeln!(f, "{subtitle}")?;
    writeln!(f, "{bar}")?;
    Ok(())
}

/// Logs a nicely formatted subtitle to the `termsym-output` logger.
pub(crate) fn log_subtitle(subtitle: &str) {
    let length = subtitle.chars().count();
    let bar = "═".repeat(length);
    termsym_output!("{}", subtitle);
    termsym_output!("{}", bar);
}

/// Logs a nicely formatted macro-section beginning to the `termsym-output` logger.
pub(crate) fn log_macsec_begin(sectitle: &str) {
    let width = TERMSYM_BANNER_LENGTH - 14;
    let sectitle_space = sectitle.to_string() + " ";
    termsym_output!("❬❬❬❬❬ [Begin] {sectitle_space:❬<width$}");
}

/// Logs a nicely formatted macro-section ending to the `termsym-output` logger.
pub(crate) fn log_macsec_end(sectitle: &str) {
    let width = TERMSYM_BANNER_LENGTH - 14;
    let sectitle_space = sectitle.to_string() + " ";
    termsym_output!("❭❭❭❭❭ [ End ] {sectitle_space:❭<width$}");
}

/// Turns a boolean into a string of `yes` or `no`.
pub(crate) fn nice_bool(b: bool) -> String {
    if b {
        "yes".to_string()
    } else {
        "no".to_string()
    }
}

/// A trait for logging `termsym` outputs nicely.
pub(crate) trait TermSymOutput: fmt::Debug + fmt::Display {
    /// Logs display output nicely.
    fn log_output_display(&self) {
        let lines = self.to_string();
        lines.lines().for_each(|line| {
            termsym_output!("{line}");
        })
    }
}

// Blanket implementation
impl<T> TermSymOutput for T where T: fmt::Debug + fmt::Display {}
