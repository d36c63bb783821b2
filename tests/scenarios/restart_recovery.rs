//! Counter recovery across service restarts

use rust_decimal::Decimal;

use flooring::config::Config;
use flooring::presentation::create_order_service_with_clock;
use flooring::infrastructure::FixedClock;
use flooring::{OrderDraft, OrderError, OrderNumber};

use std::sync::Arc;

use crate::common::*;

fn draft(name: &str, product: &str) -> OrderDraft {
    OrderDraft {
        delivery_date: date(11, 4, 2020),
        customer_name: name.to_string(),
        state_code: "CA".to_string(),
        product_type: product.to_string(),
        area: Decimal::new(249, 0),
    }
}

fn without_state_cache(env: &TestEnv) -> Config {
    let mut config = env.config();
    config.ledger.state_cache = false;
    config
}

fn create_three(env: &TestEnv, config: &Config) {
    let service = env.service_with(config, date(6, 1, 2020));
    for name in ["A", "B", "C"] {
        service.create_order(&draft(name, "Tile")).unwrap();
    }
}

#[test]
fn restart_continues_numbering_with_state_cache() {
    let env = TestEnv::new();
    create_three(&env, &env.config());
    assert!(env.path("Audit_Log.state.toml").exists());

    let service = env.service(date(6, 2, 2020));
    assert_eq!(service.next_order_number().unwrap(), OrderNumber::new(4));

    let order = service.create_order(&draft("D", "Wood")).unwrap();
    assert_eq!(order.order_number(), OrderNumber::new(4));
}

#[test]
fn restart_continues_numbering_without_state_cache() {
    let env = TestEnv::new();
    let config = without_state_cache(&env);
    create_three(&env, &config);
    assert!(!env.path("Audit_Log.state.toml").exists());

    let service = env.service_with(&config, date(6, 2, 2020));
    assert_eq!(service.next_order_number().unwrap(), OrderNumber::new(4));
}

#[test]
fn log_records_every_issued_number() {
    let env = TestEnv::new();
    create_three(&env, &env.config());

    let log = env.read("Audit_Log.txt");
    let snapshots: Vec<&str> = log
        .lines()
        .filter(|l| l.starts_with("CURRENT TOTAL ORDERS:::"))
        .collect();
    assert_eq!(
        snapshots,
        vec![
            "CURRENT TOTAL ORDERS:::0",
            "CURRENT TOTAL ORDERS:::1",
            "CURRENT TOTAL ORDERS:::2",
            "CURRENT TOTAL ORDERS:::3",
        ]
    );
    assert_eq!(log.matches("new order recorded today").count(), 3);
}

#[test]
fn stale_state_record_falls_back_to_log() {
    let env = TestEnv::new();
    create_three(&env, &env.config());
    env.write(
        "Audit_Log.state.toml",
        "version = 1\ncounter = 40\nlog_offset = 7\n",
    );

    let service = env.service(date(6, 2, 2020));
    assert_eq!(service.next_order_number().unwrap(), OrderNumber::new(4));
}

#[test]
fn garbage_state_record_falls_back_to_log() {
    let env = TestEnv::new();
    create_three(&env, &env.config());
    env.write("Audit_Log.state.toml", "not toml at all [[[");

    let service = env.service(date(6, 2, 2020));
    assert_eq!(service.next_order_number().unwrap(), OrderNumber::new(4));
}

#[test]
fn rejected_draft_does_not_consume_a_number() {
    let env = TestEnv::new();
    {
        let service = env.service(date(6, 1, 2020));
        service.create_order(&draft("A", "Tile")).unwrap();
        let err = service.create_order(&draft("B", "Marble")).unwrap_err();
        assert!(matches!(err, OrderError::InvalidOrder { .. }));
    }

    let service = env.service(date(6, 2, 2020));
    assert_eq!(service.next_order_number().unwrap(), OrderNumber::new(2));
}

#[test]
fn failed_insert_still_advances_recorded_counter() {
    let env = TestEnv::new();
    // a directory where the bucket file should be makes the insert fail
    std::fs::create_dir_all(env.path("Orders/Orders_11042020.txt")).unwrap();
    {
        let service = env.service(date(6, 1, 2020));
        let err = service.create_order(&draft("A", "Tile")).unwrap_err();
        assert!(matches!(err, OrderError::PersistenceFailure { .. }));
    }

    let service = env.service(date(6, 2, 2020));
    assert_eq!(service.next_order_number().unwrap(), OrderNumber::new(2));
}

#[test]
fn missing_audit_log_refuses_to_start() {
    let env = TestEnv::new();
    std::fs::remove_file(env.path("Audit_Log.txt")).unwrap();

    let err = create_order_service_with_clock(&env.config(), Arc::new(FixedClock(date(6, 1, 2020))))
        .err()
        .expect("service should not start without a ledger");

    assert!(matches!(err, OrderError::LedgerUnavailable { .. }));
}

#[test]
fn missing_reference_data_refuses_to_start() {
    let env = TestEnv::new();
    std::fs::remove_file(env.path("Data/Taxes.txt")).unwrap();

    let err = create_order_service_with_clock(&env.config(), Arc::new(FixedClock(date(6, 1, 2020))))
        .err()
        .expect("service should not start without tax rates");

    assert!(matches!(err, OrderError::ReferenceDataUnavailable { .. }));
}
