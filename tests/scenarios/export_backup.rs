//! Export of active orders across buckets into the backup file

use flooring::infrastructure::repositories::BUCKET_HEADER;
use flooring::{OrderError, OrderNumber};

use crate::common::*;

const GRACE_CANCELLED_ROW: &str =
    "3,06-01-2020,12-01-2020,Grace Hopper,TX,4.45,Carpet,100.00,2.25,2.10,225.00,210.00,17.40,452.40,false";

const ALAN_ROW: &str =
    "4,06-02-2020,12-01-2020,Alan Turing,KY,6.00,Laminate,150.00,1.75,2.10,262.50,315.00,34.65,612.15,true";

fn seeded() -> TestEnv {
    let env = TestEnv::new();
    env.write(
        "Orders/Orders_11042020.txt",
        &format!("{}\n{}\n{}\n", BUCKET_HEADER, ADA_ROW, DOCTOR_WHO_ROW),
    );
    env.write(
        "Orders/Orders_12012020.txt",
        &format!("{}\n{}\n{}\n", BUCKET_HEADER, GRACE_CANCELLED_ROW, ALAN_ROW),
    );
    env
}

#[test]
fn export_holds_exactly_the_active_orders() {
    let env = seeded();
    let service = env.service(date(6, 1, 2020));

    let exported = service.export_orders().unwrap();

    let numbers: Vec<u32> = exported.iter().map(|o| o.order_number().get()).collect();
    assert_eq!(numbers, vec![1, 2, 4]);

    insta::assert_snapshot!(env.read("Backup/DataExport.txt"), @r"
    OrderNumber,OrderCreationDate,CustomerName,State,TaxRate,ProductType,Area,CostPerSquareFoot,LaborCostPerSquareFoot,MaterialCost,LaborCost,Tax,Total,OrderDate
    1,06-01-2020,Ada Lovelace,CA,25.00,Tile,249.00,3.50,4.15,871.50,1033.35,476.21,2381.06,11-04-2020
    2,06-25-2020,Doctor Who,WA,9.25,Wood,243.00,5.15,4.75,1251.45,1154.25,216.51,2622.21,11-04-2020
    4,06-02-2020,Alan Turing,KY,6.00,Laminate,150.00,1.75,2.10,262.50,315.00,34.65,612.15,12-01-2020
    ");
}

#[test]
fn export_leaves_buckets_untouched() {
    let env = seeded();
    let before = env.read("Orders/Orders_12012020.txt");

    env.service(date(6, 1, 2020)).export_orders().unwrap();

    assert_eq!(env.read("Orders/Orders_12012020.txt"), before);
}

#[test]
fn export_replaces_previous_backup() {
    let env = seeded();
    let service = env.service(date(6, 1, 2020));
    service.export_orders().unwrap();

    let alan = service
        .get_current_order(date(12, 1, 2020), OrderNumber::new(4))
        .unwrap();
    service.cancel_order(alan).unwrap();
    service.export_orders().unwrap();

    let backup = env.read("Backup/DataExport.txt");
    assert_eq!(backup.lines().count(), 3);
    assert!(!backup.contains("Alan Turing"));
}

#[test]
fn export_with_only_cancelled_orders_writes_header() {
    let env = TestEnv::new();
    env.write(
        "Orders/Orders_12012020.txt",
        &format!("{}\n{}\n", BUCKET_HEADER, GRACE_CANCELLED_ROW),
    );

    let exported = env.service(date(6, 1, 2020)).export_orders().unwrap();

    assert!(exported.is_empty());
    assert_eq!(env.read("Backup/DataExport.txt").lines().count(), 1);
}

#[test]
fn export_without_buckets_is_bucket_not_found() {
    let env = TestEnv::new();

    let err = env.service(date(6, 1, 2020)).export_orders().unwrap_err();

    assert!(matches!(err, OrderError::BucketNotFound { date: None, .. }));
    assert!(!env.path("Backup/DataExport.txt").exists());
}

#[test]
fn corrupt_bucket_aborts_export() {
    let env = seeded();
    env.write(
        "Orders/Orders_01012021.txt",
        &format!("{}\nnot,a,row\n", BUCKET_HEADER),
    );

    let err = env.service(date(6, 1, 2020)).export_orders().unwrap_err();

    assert!(matches!(err, OrderError::CorruptRecord { line: 2, .. }));
    assert!(!env.path("Backup/DataExport.txt").exists());
}
