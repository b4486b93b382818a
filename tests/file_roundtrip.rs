//! End-to-end flat-file tests: load a catalog and orders from disk, mutate
//! the session, and verify the rewritten orders file and both report files.

use canteen_pos::{Catalog, Config, OrderStore, Session};
use chrono::NaiveDate;
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = "food,Burger,20,meat,550.0 25.0 40.0 30.0\n\
                       food,Salad,15,vegan,120.0 5.0 10.0 2.0\n\
                       drink,Cola,8,true,250 500 1000\n\
                       drink,Beer,12,false,330 500\n";

const ORDERS: &str = "Burger Cola,2024-01-01\n\
                      Burger,2024-01-01\n\
                      Cola,2024-01-02\n";

fn write_fixture(dir: &TempDir) -> Config {
    let path = |name: &str| dir.path().join(name).to_string_lossy().into_owned();
    fs::write(dir.path().join("menu.txt"), CATALOG).unwrap();
    fs::write(dir.path().join("orders.txt"), ORDERS).unwrap();
    Config {
        catalog_file: path("menu.txt"),
        orders_file: path("orders.txt"),
        sales_report_file: path("sales_report.txt"),
        best_sellers_file: path("best_sellers.txt"),
        best_sellers_limit: 5,
    }
}

#[test]
fn orders_file_round_trips_unchanged() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir);

    let session = Session::load(&config).unwrap();
    session.save(&config).unwrap();

    assert_eq!(fs::read_to_string(&config.orders_file).unwrap(), ORDERS);
}

#[test]
fn reloaded_orders_equal_originals() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir);

    let catalog = Catalog::load(&config.catalog_file).unwrap();
    let store = OrderStore::load(&config.orders_file, &catalog).unwrap();
    let reparsed = OrderStore::parse(&store.serialize(), &catalog).unwrap();

    let before: Vec<_> = store.orders().collect();
    let after: Vec<_> = reparsed.orders().collect();
    assert_eq!(before, after);
}

#[test]
fn reports_are_written_on_save() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir);

    let session = Session::load(&config).unwrap();
    session.save(&config).unwrap();

    assert_eq!(
        fs::read_to_string(&config.sales_report_file).unwrap(),
        "Sales Report\n2024-01-01: 28RON\n2024-01-02: 8RON\n"
    );
    assert_eq!(
        fs::read_to_string(&config.best_sellers_file).unwrap(),
        "Best Sellers (Top 5)\nBurger: 2\nCola: 2\n"
    );
}

#[test]
fn reports_overwrite_previous_content() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir);
    fs::write(&config.sales_report_file, "stale content that is much longer than the new report\n")
        .unwrap();

    let session = Session::load(&config).unwrap();
    session.save(&config).unwrap();

    let report = fs::read_to_string(&config.sales_report_file).unwrap();
    assert!(report.starts_with("Sales Report\n"));
    assert!(!report.contains("stale"));
}

#[test]
fn session_mutations_survive_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir);

    let mut session = Session::load(&config).unwrap();
    let mut order = session.create_order(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    session.add_product_to_order(&mut order, 4).unwrap(); // Beer
    session.add_product_to_order(&mut order, 4).unwrap();
    session.commit_order(order);
    session.remove_order(1).unwrap(); // Burger Cola, 2024-01-01
    session.save(&config).unwrap();

    let reloaded = Session::load(&config).unwrap();
    assert_eq!(reloaded.orders().len(), 3);
    assert_eq!(
        fs::read_to_string(&config.orders_file).unwrap(),
        "Burger,2024-01-01\nCola,2024-01-02\nBeer Beer,2024-01-03\n"
    );
    let sales = reloaded.sales_by_date();
    assert_eq!(
        sales,
        vec![
            (NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 20),
            (NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 8),
            (NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(), 24),
        ]
    );
}

#[test]
fn unresolved_reference_tolerated_and_documented_lossy() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir);
    fs::write(&config.orders_file, "Burger Pizza,2024-01-01\n").unwrap();

    let session = Session::load(&config).unwrap();
    let order = session.orders().orders().next().unwrap();
    // The unknown name occupies a slot but carries no price.
    assert_eq!(order.items().len(), 2);
    assert_eq!(order.value(), 20);

    // Saving drops the empty slot; only resolved names are written back.
    session.save(&config).unwrap();
    assert_eq!(
        fs::read_to_string(&config.orders_file).unwrap(),
        "Burger,2024-01-01\n"
    );
}

#[test]
fn missing_catalog_file_propagates_io_error() {
    let dir = TempDir::new().unwrap();
    let mut config = write_fixture(&dir);
    config.catalog_file = dir.path().join("absent.txt").to_string_lossy().into_owned();

    assert!(matches!(
        Session::load(&config),
        Err(canteen_pos::PosError::Io(_))
    ));
}

#[test]
fn malformed_catalog_aborts_load() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir);
    fs::write(&config.catalog_file, "food,Soup,10,unknown,1 2 3 4\n").unwrap();

    assert!(matches!(
        Session::load(&config),
        Err(canteen_pos::PosError::CatalogParse { line: 1, .. })
    ));
}
