//! Property tests for the bucket file store.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;
use tempfile::tempdir;

use flooring::domain::entities::TaxCatalog;
use flooring::domain::ports::OrderRepository;
use flooring::infrastructure::FileOrderStore;
use flooring::{Order, OrderNumber, Product, TaxRate};

use crate::common::date;

fn taxes() -> Vec<TaxRate> {
    vec![
        TaxRate::new("TX", "Texas", Decimal::new(445, 2)),
        TaxRate::new("WA", "Washington", Decimal::new(925, 2)),
        TaxRate::new("KY", "Kentucky", Decimal::new(600, 2)),
        TaxRate::new("CA", "California", Decimal::new(2500, 2)),
    ]
}

fn products() -> Vec<Product> {
    vec![
        Product::new("Carpet", Decimal::new(225, 2), Decimal::new(210, 2)),
        Product::new("Laminate", Decimal::new(175, 2), Decimal::new(210, 2)),
        Product::new("Tile", Decimal::new(350, 2), Decimal::new(415, 2)),
        Product::new("Wood", Decimal::new(515, 2), Decimal::new(475, 2)),
    ]
}

fn customer_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z .'-]{0,30}").unwrap()
}

fn order_fields() -> impl Strategy<Value = (String, usize, usize, i64)> {
    (customer_name(), 0..4usize, 0..4usize, 10_000i64..10_000_000)
}

fn build_orders(fields: &[(String, usize, usize, i64)]) -> Vec<Order> {
    let taxes = taxes();
    let products = products();
    fields
        .iter()
        .enumerate()
        .map(|(i, (name, tax, product, area_cents))| {
            Order::new(
                OrderNumber::new(i as u32 + 1),
                date(6, 1, 2020),
                date(11, 4, 2020),
                name.clone(),
                taxes[*tax].clone(),
                products[*product].clone(),
                Decimal::new(*area_cents, 2),
            )
        })
        .collect()
}

fn store(dir: &std::path::Path) -> FileOrderStore {
    let catalog: TaxCatalog = taxes().into_iter().collect();
    FileOrderStore::new(
        dir.join("Orders"),
        dir.join("Backup/DataExport.txt"),
        Arc::new(catalog),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Orders read back from a bucket equal the orders inserted.
    #[test]
    fn property_inserted_orders_read_back_unchanged(
        fields in proptest::collection::vec(order_fields(), 1..12)
    ) {
        let dir = tempdir().unwrap();
        let store = store(dir.path());
        let orders = build_orders(&fields);

        for order in &orders {
            store.insert(order).unwrap();
        }

        prop_assert_eq!(store.list_by_date(date(11, 4, 2020)).unwrap(), orders);
    }

    /// PROPERTY: Updating an order that is already stored never changes the row count.
    #[test]
    fn property_update_keeps_bucket_size(
        fields in proptest::collection::vec(order_fields(), 1..12),
        pick in any::<prop::sample::Index>(),
        area_cents in 10_000i64..10_000_000,
    ) {
        let dir = tempdir().unwrap();
        let store = store(dir.path());
        let orders = build_orders(&fields);
        for order in &orders {
            store.insert(order).unwrap();
        }

        let mut edited = orders[pick.index(orders.len())].clone();
        edited.set_area(Decimal::new(area_cents, 2));
        edited.recalculate();
        store.update(&edited).unwrap();

        let stored = store.list_by_date(date(11, 4, 2020)).unwrap();
        prop_assert_eq!(stored.len(), orders.len());
        prop_assert!(stored.contains(&edited));
    }

    /// PROPERTY: Export holds exactly the active orders, in number order.
    #[test]
    fn property_export_is_active_subset(
        fields in proptest::collection::vec(order_fields(), 1..12),
        cancelled in proptest::collection::vec(any::<bool>(), 12),
    ) {
        let dir = tempdir().unwrap();
        let store = store(dir.path());
        let mut orders = build_orders(&fields);
        for (order, cancel) in orders.iter_mut().zip(&cancelled) {
            if *cancel {
                order.cancel();
            }
            store.insert(order).unwrap();
        }

        let exported: Vec<u32> = store
            .export_active()
            .unwrap()
            .iter()
            .map(|o| o.order_number().get())
            .collect();
        let expected: Vec<u32> = orders
            .iter()
            .filter(|o| o.is_active())
            .map(|o| o.order_number().get())
            .collect();
        prop_assert_eq!(exported, expected);
    }
}
