//! Fixture content shared across tests

pub const PRODUCTS: &str = "\
ProductType,CostPerSquareFoot,LaborCostPerSquareFoot
Carpet,2.25,2.10
Laminate,1.75,2.10
Tile,3.50,4.15
Wood,5.15,4.75
";

pub const TAXES: &str = "\
State,StateName,TaxRate
TX,Texas,4.45
WA,Washington,9.25
KY,Kentucky,6.00
CA,California,25.00
";

pub const ADA_ROW: &str =
    "1,06-01-2020,11-04-2020,Ada Lovelace,CA,25.00,Tile,249.00,3.50,4.15,871.50,1033.35,476.21,2381.06,true";

pub const DOCTOR_WHO_ROW: &str =
    "2,06-25-2020,11-04-2020,Doctor Who,WA,9.25,Wood,243.00,5.15,4.75,1251.45,1154.25,216.51,2622.21,true";

pub const AUDIT_LOG_SEED: &str = "CURRENT TOTAL ORDERS:::0\n";
