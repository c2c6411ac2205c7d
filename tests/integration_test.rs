use itertools::Itertools;
use ndarray::array;

use termsym::drivers::configuration_terms::{
    ConfigurationTermsDriver, ConfigurationTermsMethod, ConfigurationTermsParams,
};
use termsym::drivers::TermSymDriver;
use termsym::occupation::{occupy, subshell_orbitals};
use termsym::orbital::{OrbitalKind, SpinOrbital};
use termsym::term::{
    all_atomic_term_tables, find_term_symbol, subshell_terms, SubshellOccupation, TermSymbol,
    TermTableStyle,
};

#[test]
fn test_integration_microstates_to_terms() {
    // Tally the microstates of 2p2 by hand and compare with the tabulated terms.
    let orbs = subshell_orbitals(OrbitalKind::Atomic, 2, 1)
        .unwrap()
        .collect_vec();
    let symbols = occupy(orbs.iter().cloned(), 2)
        .map(|occ| find_term_symbol(&occ))
        .collect_vec();
    assert_eq!(symbols.len(), 15);
    assert_eq!(
        symbols
            .iter()
            .filter(|term| **term == TermSymbol::new(OrbitalKind::Atomic, 3, 1))
            .count(),
        4
    );

    let table = subshell_terms(OrbitalKind::Atomic, 2, 1, 2).unwrap();
    let counted = symbols
        .iter()
        .filter(|term| term.mult() == 3 && term.am() == 0)
        .count();
    assert_eq!(counted, 2);
    assert_eq!(table.get(3, 0), 1);
    assert_eq!(table.cleaned().format_terms(), "3P, 1D, 1S");
}

#[test]
fn test_integration_atomic_families() {
    let terms = all_atomic_term_tables(4)
        .unwrap()
        .map(|table| {
            let label = table.configuration()[0].label(OrbitalKind::Atomic);
            (label, table.cleaned().format_terms())
        })
        .collect_vec();
    assert_eq!(terms.len(), 16);
    assert_eq!(terms[0], ("1s^{1}".to_string(), "2S".to_string()));
    assert_eq!(terms[3], ("2p^{3}".to_string(), "4S, 2D, 2P".to_string()));
    assert_eq!(
        terms[5],
        ("3d^{2}".to_string(), "3F, 3P, 1G, 1D, 1S".to_string())
    );
    assert_eq!(terms[15].0, "4f^{7}");
    assert!(terms[15].1.starts_with("8S, 6I, 6H, 6G, 6F, 6D, 6P"));
}

#[test]
fn test_integration_orbital_symbols() {
    let orb = SpinOrbital::from_symbols(OrbitalKind::Diatomic, 2, "δ", -2, "beta").unwrap();
    assert_eq!(orb.to_string(), "2δ_{-2}b");
    assert!(SpinOrbital::from_symbols(OrbitalKind::Diatomic, 2, "δ", 1, "beta").is_err());
}

#[test]
fn test_integration_configuration_terms_latex() {
    let params = ConfigurationTermsParams::builder()
        .subshells(vec![SubshellOccupation::new(1, 0, 2)])
        .method(ConfigurationTermsMethod::Product)
        .table_style(TermTableStyle::LatexCrossed)
        .build()
        .unwrap();
    let mut driver = ConfigurationTermsDriver::builder()
        .parameters(&params)
        .build()
        .unwrap();
    driver.run().unwrap();
    let table = driver.result().unwrap().clean_table();
    assert_eq!(table.table(), &array![[1i64]]);
    assert_eq!(
        table.format(TermTableStyle::LatexCrossed),
        "\\begin{tabular}{ r | c } \nM\\L &          0 \\hl \n  1 &  \\O{$^1$S} \\\\ \n\\end{tabular}"
    );
}
