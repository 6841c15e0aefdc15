use super::{long_hydrology_csv, table, wide_production_csv};
use crate::app::models::ModuleHint;
use crate::app::services::normalizer::normalize;
use chrono::NaiveDate;

#[test]
fn test_long_conversion_with_leap_fold() {
    let t = table(long_hydrology_csv());
    let (records, stats) = normalize(&t, ModuleHint::Hydrology);

    // Feb 28 and Feb 29 share slot 59; Mar 1 lands on 60
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].day_of_year, 59);
    assert_eq!(records[1].day_of_year, 59);
    assert_eq!(records[2].day_of_year, 60);
    assert!(records.iter().all(|r| r.entity == "molino"));
    assert!(records.iter().all(|r| r.variable == "caudal_m3s"));

    assert_eq!(stats.rows_read, 4);
    assert_eq!(stats.records_built, 3);
    assert_eq!(stats.rows_dropped, 0);
    assert_eq!(stats.placeholder_rows, 1);
}

#[test]
fn test_long_rows_with_defects_dropped_not_fatal() {
    let t = table(
        "date,entity,value\n\
         2024-01-01,X,10\n\
         not-a-date,X,11\n\
         2024-01-03,,12\n\
         2024-01-04,X,twelve\n\
         2024-01-05,X,13\n",
    );
    let (records, stats) = normalize(&t, ModuleHint::Production);
    assert_eq!(records.len(), 2);
    assert_eq!(stats.rows_dropped, 3);
    assert_eq!(stats.errors.len(), 3);
    assert!(stats.drop_rate() > 0.5);
}

#[test]
fn test_long_missing_variable_uses_module_default() {
    let t = table("date,entity,value\n2024-01-01,X,10\n");
    let (records, _) = normalize(&t, ModuleHint::Production);
    assert_eq!(records[0].variable, "energy");
}

#[test]
fn test_locale_values_coerced() {
    let t = table("date,entity,value\n2024-01-01,X,\"1.234,56\"\n2024-01-02,X,1234.56\n");
    let (records, _) = normalize(&t, ModuleHint::Production);
    assert_eq!(records[0].value, 1234.56);
    assert_eq!(records[1].value, 1234.56);
}

#[test]
fn test_wide_conversion_fans_out_entities() {
    let t = table(wide_production_csv());
    let (records, stats) = normalize(&t, ModuleHint::Hydrology);

    let expected_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(records[0].entity, "Molino");
    assert_eq!(records[0].value, 5.0);
    assert_eq!(records[0].date, expected_date);
    assert_eq!(records[1].entity, "Mazar");
    assert_eq!(records[1].value, 7.0);
    assert!(records.iter().all(|r| r.variable == "flow"));

    // second row has an empty Mazar cell: one candidate dropped
    assert_eq!(records.len(), 3);
    assert_eq!(stats.records_built, 3);
    assert_eq!(stats.rows_dropped, 1);
}

#[test]
fn test_wide_placeholder_rows_excluded() {
    let t = table(
        "date,is_placeholder,Molino\n\
         2024-01-01,0,5\n\
         2024-01-02,1,0\n",
    );
    let (records, stats) = normalize(&t, ModuleHint::Production);
    assert_eq!(records.len(), 1);
    assert_eq!(stats.placeholder_rows, 1);
    assert_eq!(stats.rows_dropped, 0);
}

#[test]
fn test_unclassifiable_schema_drops_everything() {
    let t = table("alpha,beta\n1,2\n3,4\n");
    let (records, stats) = normalize(&t, ModuleHint::Production);
    assert!(records.is_empty());
    assert_eq!(stats.rows_read, 2);
    assert_eq!(stats.rows_dropped, 2);
}
