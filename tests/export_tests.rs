use predicates::str::contains;
use std::fs;

mod common;
use common::{init_workbook_with_sheet, ok, rts, setup_test_workbook, temp_out};

fn filled_sheet(wb: &str) {
    init_workbook_with_sheet(wb);
    ok(wb, &["item", "1", "add"]);
    ok(wb, &["item", "1", "set", "1", "job-name", "Maple Ridge"]);
    ok(wb, &["item", "1", "set", "1", "hours", "4"]);
    ok(wb, &["item", "1", "set", "1", "price", "20"]);
    ok(wb, &["grid", "1", "fri", "in", "8:00 AM"]);
    ok(wb, &["grid", "1", "fri", "out", "4:15 PM"]);
}

#[test]
fn test_export_json_summary() {
    let wb = setup_test_workbook("export_json");
    let out = temp_out("export_json", "json");
    filled_sheet(&wb);

    rts()
        .args(["--workbook", &wb, "export", "1", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    let json: serde_json::Value = serde_json::from_str(&content).expect("parse json");

    assert_eq!(json["employeeName"], "Jane Doe");
    assert_eq!(json["weekEnding"], "Oct 23, 2025");
    assert_eq!(json["weekEndingIso"], "2025-10-23");
    assert_eq!(json["status"], "Draft");
    assert_eq!(json["lineItems"][0]["jobName"], "Maple Ridge");
    assert_eq!(json["lineItems"][0]["totalDisplay"], "$80.00");
    assert_eq!(json["lineItems"][0]["price"], "20");
    assert_eq!(json["lineItems"][0]["priceDisplay"], "$20.00");
    assert_eq!(json["lineTotals"]["hoursDisplay"], "4 hrs");
    assert_eq!(json["lineTotals"]["amountDisplay"], "$80.00");

    let grid = &json["dailyGrid"];
    let days = grid["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["day"], "Friday");
    assert_eq!(days[0]["totalDisplay"], "8 hrs 15 min");
    assert_eq!(days[6]["day"], "Thursday");
    assert_eq!(days[6]["clockIn"], "--");
    assert_eq!(days[6]["totalDisplay"], "--");
    assert_eq!(grid["grandTotalDisplay"], "8 hrs 15 min");
    assert_eq!(grid["grandTotalDecimal"], "8.25");
    assert_eq!(grid["amountDisplay"], "$123.75");
}

#[test]
fn test_export_without_grid_omits_section() {
    let wb = setup_test_workbook("export_no_grid");
    let out = temp_out("export_no_grid", "json");
    init_workbook_with_sheet(&wb);

    ok(&wb, &["export", "1", "--file", &out]);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert!(json.get("dailyGrid").is_none());
    assert_eq!(json["lineTotals"]["hoursDisplay"], "0 hrs 0 min");
    assert_eq!(json["lineTotals"]["amountDisplay"], "$0.00");
}

#[test]
fn test_export_csv_sections() {
    let wb = setup_test_workbook("export_csv");
    let out = temp_out("export_csv", "csv");
    filled_sheet(&wb);

    rts()
        .args(["--workbook", &wb, "export", "1", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "Employee,Jane Doe");
    assert_eq!(lines[3], "Week Ending,\"Oct 23, 2025\"");
    assert!(content.contains("Job Name,Job #,Cost Code,Operation,Lot #s,Hrs.,Price,Total"));
    assert!(content.contains("Maple Ridge,,,,,4,20,$80.00"));
    assert!(content.contains("Total Price,$80.00"));
    assert!(content.contains("Day,In,B1 In,B1 Out,M In,M Out,B2 In,B2 Out,Out,Total"));
    assert!(content.contains("Friday,8:00 AM,--,--,--,--,--,--,4:15 PM,8 hrs 15 min"));
    assert!(content.contains("Thursday,--,--,--,--,--,--,--,--,--"));
    assert!(content.contains("Total Amount,$123.75"));
    assert!(content.contains("Foreman Signature Date,"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let wb = setup_test_workbook("export_overwrite");
    let out = temp_out("export_overwrite", "json");
    init_workbook_with_sheet(&wb);
    fs::write(&out, "keep me").unwrap();

    rts()
        .args(["--workbook", &wb, "export", "1", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rts()
        .args(["--workbook", &wb, "export", "1", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Jane Doe"));
}

#[test]
fn test_export_is_logged() {
    let wb = setup_test_workbook("export_logged");
    let out = temp_out("export_logged", "csv");
    init_workbook_with_sheet(&wb);

    ok(&wb, &["export", "1", "--format", "csv", "--file", &out]);

    rts()
        .args(["--workbook", &wb, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("export"));
}
