use env_logger;
use ndarray::array;

use crate::drivers::term_table_enumeration::{
    TermTableEnumerationDriver, TermTableEnumerationParams,
};
use crate::drivers::TermSymDriver;
use crate::orbital::OrbitalKind;
use crate::term::{SubshellOccupation, TermTableStyle};

#[test]
fn test_drivers_term_table_enumeration_atomic() {
    let _ = env_logger::builder().is_test(true).try_init();
    let params = TermTableEnumerationParams::builder()
        .max_am(2)
        .build()
        .unwrap();
    let mut driver = TermTableEnumerationDriver::builder()
        .parameters(&params)
        .build()
        .unwrap();
    assert!(driver.result().is_err());
    driver.run().unwrap();

    let tables = driver.result().unwrap().tables();
    assert_eq!(tables.len(), 4);
    assert!(tables.iter().all(|table| table.is_clean()));
    assert_eq!(tables[2].configuration(), &[SubshellOccupation::new(2, 1, 2)]);
    assert_eq!(tables[2].table(), &array![[1i64, 0, 1], [0, 1, 0]]);
    assert_eq!(tables[3].format_terms(), "4S, 2D, 2P");
}

#[test]
fn test_drivers_term_table_enumeration_parallel() {
    let _ = env_logger::builder().is_test(true).try_init();
    let serial_params = TermTableEnumerationParams::builder()
        .kind(OrbitalKind::Diatomic)
        .max_am(4)
        .build()
        .unwrap();
    let mut serial_driver = TermTableEnumerationDriver::builder()
        .parameters(&serial_params)
        .build()
        .unwrap();
    serial_driver.run().unwrap();

    let parallel_params = TermTableEnumerationParams::builder()
        .kind(OrbitalKind::Diatomic)
        .max_am(4)
        .parallel(true)
        .table_style(TermTableStyle::LatexCrossed)
        .build()
        .unwrap();
    let mut parallel_driver = TermTableEnumerationDriver::builder()
        .parameters(&parallel_params)
        .build()
        .unwrap();
    parallel_driver.run().unwrap();

    assert_eq!(
        serial_driver.result().unwrap().tables(),
        parallel_driver.result().unwrap().tables()
    );
    assert_eq!(serial_driver.result().unwrap().tables().len(), 7);
}

#[test]
fn test_drivers_term_table_enumeration_raw() {
    let _ = env_logger::builder().is_test(true).try_init();
    let params = TermTableEnumerationParams::builder()
        .max_am(2)
        .clean(false)
        .build()
        .unwrap();
    let mut driver = TermTableEnumerationDriver::builder()
        .parameters(&params)
        .build()
        .unwrap();
    driver.run().unwrap();
    let tables = driver.result().unwrap().tables();
    assert!(tables.iter().all(|table| !table.is_clean()));
    assert_eq!(tables[2].table(), &array![[3i64, 2, 1], [1, 1, 0]]);
}

#[test]
fn test_drivers_term_table_enumeration_params() {
    let params = TermTableEnumerationParams::default();
    assert_eq!(params.kind, OrbitalKind::Atomic);
    assert_eq!(params.max_am, 3);
    assert!(params.clean);
    assert!(!params.parallel);
    assert!(params.result_save_name.is_none());

    assert!(TermTableEnumerationParams::builder()
        .max_am(22)
        .build()
        .is_err());
    assert!(TermTableEnumerationParams::builder()
        .kind(OrbitalKind::Diatomic)
        .max_am(21)
        .build()
        .is_err());
}
