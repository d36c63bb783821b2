//! Create, edit and cancel against bucket files

use rust_decimal::Decimal;

use flooring::infrastructure::repositories::BUCKET_HEADER;
use flooring::{OrderDraft, OrderEdit, OrderError, OrderNumber};

use crate::common::*;

fn today() -> chrono::NaiveDate {
    date(6, 1, 2020)
}

fn draft(name: &str) -> OrderDraft {
    OrderDraft {
        delivery_date: date(11, 4, 2020),
        customer_name: name.to_string(),
        state_code: "CA".to_string(),
        product_type: "Tile".to_string(),
        area: Decimal::new(249, 0),
    }
}

fn bucket_rows(env: &TestEnv) -> Vec<String> {
    env.read("Orders/Orders_11042020.txt")
        .lines()
        .skip(1)
        .map(str::to_string)
        .collect()
}

#[test]
fn first_order_matches_fixture_row() {
    let env = TestEnv::new();
    let service = env.service(today());

    let order = service.create_order(&draft("Ada Lovelace")).unwrap();

    assert_eq!(order.order_number(), OrderNumber::new(1));
    assert_eq!(bucket_rows(&env), vec![ADA_ROW.to_string()]);
    assert_eq!(
        env.read("Orders/Orders_11042020.txt").lines().next(),
        Some(BUCKET_HEADER)
    );
}

#[test]
fn sequential_creates_get_strictly_increasing_numbers() {
    let env = TestEnv::new();
    let service = env.service(today());

    let numbers: Vec<u32> = (0..10)
        .map(|i| {
            service
                .create_order(&draft(&format!("Customer {}", i)))
                .unwrap()
                .order_number()
                .get()
        })
        .collect();

    assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
    assert_eq!(bucket_rows(&env).len(), 10);
}

#[test]
fn cancelled_order_stays_listed_but_not_current() {
    let env = TestEnv::new();
    let service = env.service(today());
    let order = service.create_order(&draft("Ada Lovelace")).unwrap();

    service.cancel_order(order.clone()).unwrap();

    let err = service
        .get_current_order(order.delivery_date(), order.order_number())
        .unwrap_err();
    assert!(matches!(err, OrderError::OrderAlreadyCancelled { .. }));

    let listed = service.list_orders(order.delivery_date()).unwrap();
    assert_eq!(listed.len(), 1);
    assert!(!listed[0].is_active());
    assert!(bucket_rows(&env)[0].ends_with(",false"));
    assert!(env.read("Audit_Log.txt").contains("ORDER NUMBER: 1, order cancelled."));
}

#[test]
fn editing_keeps_bucket_size() {
    let env = TestEnv::new();
    let service = env.service(today());
    for name in ["A", "B", "C"] {
        service.create_order(&draft(name)).unwrap();
    }

    let current = service
        .get_current_order(date(11, 4, 2020), OrderNumber::new(2))
        .unwrap();
    let edit = OrderEdit {
        customer_name: Some("Doctor Who".to_string()),
        state_code: Some("WA".to_string()),
        product_type: Some("Wood".to_string()),
        area: Some(Decimal::new(243, 0)),
    };
    let revised = service.revise_order(&current, &edit).unwrap();
    service.edit_order(&revised).unwrap();

    let rows = bucket_rows(&env);
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[1],
        "2,06-01-2020,11-04-2020,Doctor Who,WA,9.25,Wood,243.00,5.15,4.75,1251.45,1154.25,216.51,2622.21,true"
    );
    assert!(env.read("Audit_Log.txt").contains("ORDER NUMBER: 2, order update."));
}

#[test]
fn edit_with_unseen_number_adds_one_row() {
    let env = TestEnv::new();
    let service = env.service(today());
    service.create_order(&draft("A")).unwrap();

    // built for this bucket but never inserted
    let stray = service.preview_order(&draft("Stray")).unwrap();
    service.edit_order(&stray).unwrap();

    assert_eq!(bucket_rows(&env).len(), 2);
}

#[test]
fn missing_bucket_is_bucket_not_found() {
    let env = TestEnv::new();
    let service = env.service(today());

    let err = service.list_orders(date(12, 25, 2020)).unwrap_err();
    assert!(matches!(err, OrderError::BucketNotFound { .. }));
}

#[test]
fn stored_orders_keep_their_snapshot_after_catalog_changes() {
    let env = TestEnv::new();
    env.service(today())
        .create_order(&draft("Ada Lovelace"))
        .unwrap();

    env.write(
        "Data/Products.txt",
        "ProductType,CostPerSquareFoot,LaborCostPerSquareFoot\nTile,9.99,9.99\n",
    );
    env.write(
        "Data/Taxes.txt",
        "State,StateName,TaxRate\nCA,California,1.00\n",
    );
    let service = env.service(today());

    let stored = service
        .get_current_order(date(11, 4, 2020), OrderNumber::new(1))
        .unwrap();
    assert_eq!(stored.product().cost_per_square_foot.to_string(), "3.50");
    assert_eq!(stored.tax_rate().rate_percent.to_string(), "25.00");
    assert_eq!(stored.costs().total.to_string(), "2381.06");
}

#[test]
fn rows_are_rewritten_sorted_after_edit() {
    let env = TestEnv::new();
    env.write(
        "Orders/Orders_11042020.txt",
        &format!("{}\n{}\n{}\n", BUCKET_HEADER, DOCTOR_WHO_ROW, ADA_ROW),
    );
    let service = env.service(today());

    let ada = service
        .get_current_order(date(11, 4, 2020), OrderNumber::new(1))
        .unwrap();
    service.cancel_order(ada).unwrap();

    let rows = bucket_rows(&env);
    assert!(rows[0].starts_with("1,"));
    assert!(rows[1].starts_with("2,"));
}
