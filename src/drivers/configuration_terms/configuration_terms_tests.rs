use env_logger;
use ndarray::array;

use crate::drivers::configuration_terms::{
    ConfigurationTermsDriver, ConfigurationTermsMethod, ConfigurationTermsParams,
};
use crate::drivers::TermSymDriver;
use crate::orbital::OrbitalKind;
use crate::term::SubshellOccupation;

fn run_driver(params: &ConfigurationTermsParams) -> Result<ConfigurationTermsDriver, anyhow::Error> {
    let mut driver = ConfigurationTermsDriver::builder()
        .parameters(params)
        .build()?;
    driver.run()?;
    Ok(driver)
}

#[test]
fn test_drivers_configuration_terms_default() {
    let _ = env_logger::builder().is_test(true).try_init();
    let params = ConfigurationTermsParams::default();
    assert_eq!(params.subshells, vec![SubshellOccupation::new(2, 1, 2)]);
    assert_eq!(params.method, ConfigurationTermsMethod::Enumeration);

    let driver = run_driver(&params).unwrap();
    let result = driver.result().unwrap();
    assert_eq!(
        result.raw_table().unwrap().table(),
        &array![[3i64, 2, 1], [1, 1, 0]]
    );
    assert_eq!(
        result.clean_table().table(),
        &array![[1i64, 0, 1], [0, 1, 0]]
    );
    assert_eq!(result.clean_table().format_terms(), "3P, 1D, 1S");
}

#[test]
fn test_drivers_configuration_terms_diatomic() {
    let _ = env_logger::builder().is_test(true).try_init();
    let params = ConfigurationTermsParams::builder()
        .kind(OrbitalKind::Diatomic)
        .subshells(vec![
            SubshellOccupation::new(1, 0, 1),
            SubshellOccupation::new(2, 1, 2),
            SubshellOccupation::new(3, 2, 3),
        ])
        .build()
        .unwrap();
    let driver = run_driver(&params).unwrap();
    let result = driver.result().unwrap();
    assert_eq!(
        result.clean_table().table(),
        &array![[2i64, 0, 2, 0, 1], [2, 0, 3, 0, 1], [0, 0, 1, 0, 0]]
    );
    assert_eq!(result.clean_table().configuration(), &params.subshells[..]);
}

#[test]
fn test_drivers_configuration_terms_product() {
    let _ = env_logger::builder().is_test(true).try_init();
    for (kind, subshells) in [
        (
            OrbitalKind::Atomic,
            vec![
                SubshellOccupation::new(2, 0, 1),
                SubshellOccupation::new(3, 0, 1),
            ],
        ),
        (
            OrbitalKind::Diatomic,
            vec![
                SubshellOccupation::new(1, 0, 1),
                SubshellOccupation::new(2, 1, 1),
            ],
        ),
    ] {
        let product_params = ConfigurationTermsParams::builder()
            .kind(kind)
            .subshells(subshells.clone())
            .method(ConfigurationTermsMethod::Product)
            .build()
            .unwrap();
        let product_driver = run_driver(&product_params).unwrap();
        let product_result = product_driver.result().unwrap();
        assert!(product_result.raw_table().is_none());

        let enumeration_params = ConfigurationTermsParams::builder()
            .kind(kind)
            .subshells(subshells)
            .build()
            .unwrap();
        let enumeration_driver = run_driver(&enumeration_params).unwrap();
        assert_eq!(
            product_result.clean_table(),
            enumeration_driver.result().unwrap().clean_table()
        );
    }

    let sigma_pi = ConfigurationTermsParams::builder()
        .kind(OrbitalKind::Diatomic)
        .subshells(vec![
            SubshellOccupation::new(1, 0, 1),
            SubshellOccupation::new(2, 1, 1),
        ])
        .method(ConfigurationTermsMethod::Product)
        .build()
        .unwrap();
    let driver = run_driver(&sigma_pi).unwrap();
    assert_eq!(driver.result().unwrap().clean_table().format_terms(), "3Π, 1Π");
}

#[test]
fn test_drivers_configuration_terms_invalid() {
    let _ = env_logger::builder().is_test(true).try_init();
    for method in [
        ConfigurationTermsMethod::Enumeration,
        ConfigurationTermsMethod::Product,
    ] {
        let shared = ConfigurationTermsParams::builder()
            .subshells(vec![
                SubshellOccupation::new(2, 1, 1),
                SubshellOccupation::new(2, 1, 1),
            ])
            .method(method)
            .build()
            .unwrap();
        assert!(run_driver(&shared).is_err());

        let empty = ConfigurationTermsParams::builder()
            .subshells(vec![])
            .method(method)
            .build()
            .unwrap();
        assert!(run_driver(&empty).is_err());

        let overfull = ConfigurationTermsParams::builder()
            .subshells(vec![SubshellOccupation::new(3, 2, 11)])
            .method(method)
            .build()
            .unwrap();
        assert!(run_driver(&overfull).is_err());
    }
}
