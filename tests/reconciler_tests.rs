use chrono::{NaiveDate, Weekday};
use rtimesheet::core::reconciler::{NewTimesheet, Reconciler};
use rtimesheet::errors::AppError;
use rtimesheet::models::day_record::GridCell;
use rtimesheet::models::line_item::LineField;
use rtimesheet::models::timesheet::{HeaderField, SignatureRole, Status};
use rtimesheet::models::weekly_grid::{DEFAULT_RATE, Week};
use rtimesheet::utils::formatting::{format_currency, format_duration};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fresh() -> Reconciler {
    let fields = NewTimesheet {
        employee_name: "Jane Doe".into(),
        employee_id: "E-042".into(),
        foreman_name: "Bob Smith".into(),
        week_ending: None,
    };
    // Monday 2025-10-20; the week ends on Thursday the 23rd
    Reconciler::create(1, fields, Week::default(), DEFAULT_RATE, date(2025, 10, 20)).unwrap()
}

#[test]
fn test_create_defaults() {
    let rec = fresh();
    let sheet = rec.timesheet();

    assert_eq!(sheet.id, 1);
    assert_eq!(sheet.status, Status::Draft);
    assert_eq!(sheet.week_ending, date(2025, 10, 23));
    assert!(sheet.line_items.is_empty());
    assert!(sheet.daily_time_grid.is_none());
    assert_eq!(sheet.rate_per_hour, 15.0);
    assert_eq!(sheet.signature_date, Some(date(2025, 10, 20)));
    assert_eq!(sheet.employee_signature_date, Some(date(2025, 10, 20)));
    assert!(sheet.foreman_signature.is_none());
    assert!(rec.grid_totals().is_none());
}

#[test]
fn test_week_ending_must_fall_on_week_end() {
    let fields = NewTimesheet {
        week_ending: Some(date(2025, 10, 22)),
        ..Default::default()
    };
    let err = Reconciler::create(1, fields, Week::default(), DEFAULT_RATE, date(2025, 10, 20))
        .err()
        .unwrap();
    assert!(matches!(err, AppError::InvalidWeekEnding { .. }));

    let mut rec = fresh();
    assert!(rec.set_field(HeaderField::WeekEnding, "2025-10-25").is_err());
    assert!(rec.set_field(HeaderField::WeekEnding, "next week").is_err());
    rec.set_field(HeaderField::WeekEnding, "2025-10-30").unwrap();
    assert_eq!(rec.timesheet().week_ending, date(2025, 10, 30));
}

#[test]
fn test_header_fields() {
    let mut rec = fresh();
    rec.set_field(HeaderField::EmployeeName, "John Roe").unwrap();
    rec.set_field(HeaderField::Notes, "rain delay").unwrap();
    rec.set_field(HeaderField::SignatureDate, "").unwrap();
    rec.set_field(HeaderField::EmployeeSignatureDate, "2025-10-24")
        .unwrap();

    let sheet = rec.timesheet();
    assert_eq!(sheet.employee_name, "John Roe");
    assert_eq!(sheet.notes, "rain delay");
    assert_eq!(sheet.signature_date, None);
    assert_eq!(sheet.employee_signature_date, Some(date(2025, 10, 24)));

    assert!(rec.set_field(HeaderField::SignatureDate, "24/10").is_err());
}

#[test]
fn test_mutations_stamp_last_edited() {
    let mut rec = fresh();
    let before = rec.timesheet().last_edited;
    rec.add_line_item();
    assert!(rec.timesheet().last_edited >= before);
}

#[test]
fn test_submit_once() {
    let mut rec = fresh();
    rec.submit().unwrap();
    assert_eq!(rec.timesheet().status, Status::Submitted);

    let err = rec.submit().unwrap_err();
    assert!(matches!(err, AppError::AlreadySubmitted(1)));
    assert_eq!(rec.timesheet().status, Status::Submitted);
}

#[test]
fn test_grid_created_on_first_touch_and_kept() {
    let mut rec = fresh();
    rec.set_grid_cell(Weekday::Fri, GridCell::In, "8:00 AM");
    rec.set_grid_cell(Weekday::Fri, GridCell::Out, "5:00 PM");
    rec.set_grid_cell(Weekday::Fri, GridCell::MealIn, "12:00 PM");
    rec.set_grid_cell(Weekday::Fri, GridCell::MealOut, "12:30 PM");

    let totals = rec.grid_totals().unwrap();
    assert_eq!(totals.days[0].hours, 8.5);
    assert_eq!(totals.grand_total, 8.5);
    assert_eq!(totals.amount, 8.5 * 15.0);

    for cell in GridCell::ALL {
        rec.clear_grid_cell(Weekday::Fri, cell);
    }
    let grid = rec.timesheet().daily_time_grid.as_ref().unwrap();
    assert_eq!(grid.days.len(), 7);
    assert_eq!(rec.grid_totals().unwrap().grand_total, 0.0);
}

#[test]
fn test_rate_changes_amount() {
    let mut rec = fresh();
    rec.set_rate("22.50");
    rec.set_grid_cell(Weekday::Mon, GridCell::In, "7:00 AM");
    rec.set_grid_cell(Weekday::Mon, GridCell::Out, "3:00 PM");

    let totals = rec.grid_totals().unwrap();
    assert_eq!(totals.rate, 22.5);
    assert_eq!(totals.amount, 180.0);

    rec.set_rate("lots");
    assert_eq!(rec.grid_totals().unwrap().amount, 0.0);
}

#[test]
fn test_line_items_and_grid_are_independent() {
    let mut rec = fresh();
    let id = rec.add_line_item();
    rec.update_line_item(id, LineField::Hours, "10").unwrap();
    rec.update_line_item(id, LineField::Price, "20").unwrap();
    rec.set_grid_cell(Weekday::Tue, GridCell::In, "8:00 AM");
    rec.set_grid_cell(Weekday::Tue, GridCell::Out, "12:00 PM");

    assert_eq!(rec.line_totals().hours, 10.0);
    assert_eq!(rec.line_totals().amount, 200.0);
    assert_eq!(rec.grid_totals().unwrap().grand_total, 4.0);

    rec.remove_line_item(id).unwrap();
    assert!(rec.remove_line_item(id).is_err());
    assert_eq!(rec.line_totals().amount, 0.0);
}

#[test]
fn test_sign_sets_image_and_date() {
    let mut rec = fresh();
    rec.sign(
        SignatureRole::Employee,
        "data:image/png;base64,AAAA".into(),
        date(2025, 10, 23),
    );
    let sheet = rec.timesheet();
    assert_eq!(
        sheet.employee_signature.as_deref(),
        Some("data:image/png;base64,AAAA")
    );
    assert_eq!(sheet.employee_signature_date, Some(date(2025, 10, 23)));
    assert!(sheet.foreman_signature.is_none());
}

#[test]
fn test_summary_uses_shared_formatters() {
    let mut rec = fresh();
    let id = rec.add_line_item();
    rec.update_line_item(id, LineField::Hours, "4").unwrap();
    rec.update_line_item(id, LineField::Price, "20").unwrap();
    rec.update_line_item(id, LineField::JobCode, "framing").unwrap();
    rec.set_grid_cell(Weekday::Wed, GridCell::In, "10:00 PM");
    rec.set_grid_cell(Weekday::Wed, GridCell::Out, "6:15 AM");

    let summary = rec.summary();
    let totals = rec.grid_totals().unwrap();
    let grid = summary.daily_grid.as_ref().unwrap();

    assert_eq!(summary.week_ending, "Oct 23, 2025");
    assert_eq!(summary.week_ending_iso, "2025-10-23");
    assert_eq!(summary.status, "Draft");
    assert_eq!(summary.line_items[0].job_code, "Framing");
    assert_eq!(summary.line_items[0].total_display, "$80.00");
    assert_eq!(summary.line_items[0].hours, "4");
    assert_eq!(summary.line_items[0].price_display, "$20.00");
    assert_eq!(summary.line_totals.hours_display, format_duration(4.0));
    assert_eq!(summary.line_totals.amount_display, "$80.00");

    assert_eq!(grid.days.len(), 7);
    assert_eq!(grid.days[0].day, "Friday");
    assert_eq!(grid.days[0].clock_in, "--");
    assert_eq!(grid.days[0].total_display, "--");
    assert_eq!(grid.days[5].day, "Wednesday");
    assert_eq!(grid.days[5].clock_in, "10:00 PM");
    assert_eq!(grid.days[5].total_display, "8 hrs 15 min");
    assert_eq!(grid.grand_total_display, format_duration(totals.grand_total));
    assert_eq!(grid.grand_total_decimal, "8.25");
    assert_eq!(grid.amount_display, format_currency(totals.amount));
    assert_eq!(grid.rate_display, "$15.00");
}

#[test]
fn test_open_round_trips_through_json() {
    let mut rec = fresh();
    rec.set_grid_cell(Weekday::Sat, GridCell::In, "6:00 AM");
    let json = serde_json::to_string(rec.timesheet()).unwrap();
    let back = Reconciler::open(serde_json::from_str(&json).unwrap());
    assert_eq!(back.timesheet(), rec.timesheet());
}

#[test]
fn test_fractional_item_hours_show_sixty_minutes() {
    let mut rec = fresh();
    let id = rec.add_line_item();
    rec.update_line_item(id, LineField::Hours, "7.995").unwrap();
    rec.update_line_item(id, LineField::Price, "abc").unwrap();

    let summary = rec.summary();
    assert_eq!(summary.line_totals.hours_display, "7 hrs 60 min");
    assert_eq!(summary.line_items[0].price, "abc");
    assert_eq!(summary.line_items[0].price_display, "$0.00");
}

#[test]
fn test_open_trusts_the_grid_rate() {
    let mut rec = fresh();
    rec.set_grid_cell(Weekday::Mon, GridCell::In, "8:00 AM");
    rec.set_grid_cell(Weekday::Mon, GridCell::Out, "4:00 PM");

    let mut sheet = rec.into_timesheet();
    sheet.rate_per_hour = 99.0;
    sheet.daily_time_grid.as_mut().unwrap().rate = 20.0;

    let rec = Reconciler::open(sheet);
    assert_eq!(rec.timesheet().rate_per_hour, 20.0);
    assert_eq!(rec.grid_totals().unwrap().amount, 160.0);
}

#[test]
fn test_open_without_grid_keeps_header_rate() {
    let mut sheet = fresh().into_timesheet();
    sheet.rate_per_hour = 18.0;
    assert_eq!(Reconciler::open(sheet).timesheet().rate_per_hour, 18.0);
}
