use chrono::NaiveDate;
use clockflow::core::report::parse_report;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{cf, init_db_with_org, setup_test_db, temp_input};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

fn t(h: u32, min: u32) -> chrono::NaiveTime {
    chrono::NaiveTime::from_hms_opt(h, min, 0).expect("valid time")
}

const FALLBACK: fn() -> NaiveDate = || d(2030, 6, 1);

#[test]
fn test_period_header_dates_every_record() {
    let text = "\
Período: 15/01/2024
Empregado: 100 Jane Doe
Localização: Plant 1
Marcações
08:00 12:00
Empregado: 200 John Roe
Marcações
09:00 18:00
";
    let parsed = parse_report(text, FALLBACK());

    assert_eq!(parsed.date_base, d(2024, 1, 15));
    assert_eq!(parsed.drafts.len(), 2);
    for draft in &parsed.drafts {
        assert_eq!(draft.date, d(2024, 1, 15));
    }
}

#[test]
fn test_missing_period_falls_back_silently() {
    let text = "\
Empregado: 100 Jane Doe
Marcações
08:00 12:00
";
    let parsed = parse_report(text, FALLBACK());
    assert_eq!(parsed.date_base, FALLBACK());
    assert_eq!(parsed.drafts[0].date, FALLBACK());
}

#[test]
fn test_malformed_period_falls_back_silently() {
    let text = "\
Período: 45/45/2024
Empregado: 100 Jane Doe
Marcações
08:00
";
    let parsed = parse_report(text, FALLBACK());
    assert_eq!(parsed.date_base, FALLBACK());
}

#[test]
fn test_suffixes_are_stripped() {
    let text = "\
Período: 15/01/2024
Empregado: 100 Jane Doe
Marcações
08:00R 12:00 13:00M 17:00
";
    let parsed = parse_report(text, FALLBACK());
    assert_eq!(parsed.drafts.len(), 1);

    let times = &parsed.drafts[0].times;
    assert_eq!(times[0], Some(t(8, 0)));
    assert_eq!(times[1], Some(t(12, 0)));
    assert_eq!(times[2], Some(t(13, 0)));
    assert_eq!(times[3], Some(t(17, 0)));
    for slot in &times[4..] {
        assert!(slot.is_none());
    }
}

#[test]
fn test_seven_tokens_leave_last_slot_null() {
    let text = "\
Período: 15/01/2024
Empregado: 100 Jane Doe
Marcações
06:00 08:00 10:00 12:00 14:00 16:00 18:00
";
    let parsed = parse_report(text, FALLBACK());
    let times = &parsed.drafts[0].times;

    assert_eq!(times.iter().filter(|t| t.is_some()).count(), 7);
    assert!(times[7].is_none());
}

#[test]
fn test_nine_tokens_truncate_to_eight() {
    let text = "\
Período: 15/01/2024
Empregado: 100 Jane Doe
Marcações
06:00 07:00 08:00 09:00 10:00 11:00 12:00 13:00 14:00
";
    let parsed = parse_report(text, FALLBACK());
    let times = &parsed.drafts[0].times;

    assert_eq!(times.iter().filter(|t| t.is_some()).count(), 8);
    // The ninth token (14:00) must not appear anywhere.
    assert!(!times.iter().flatten().any(|t| t.to_string().starts_with("14:")));
    assert_eq!(times[7], Some(t(13, 0)));
}

#[test]
fn test_employee_context_persists_until_overwritten() {
    let text = "\
Período: 15/01/2024
Empregado: 100 Jane Doe
Localização: Plant 1
Marcações
08:00 12:00
Marcações
13:00 17:00
Empregado: 200 John Roe
Marcações
09:00 18:00
";
    let parsed = parse_report(text, FALLBACK());
    assert_eq!(parsed.drafts.len(), 3);
    assert_eq!(parsed.drafts[0].matricula, "100");
    assert_eq!(parsed.drafts[1].matricula, "100");
    assert_eq!(parsed.drafts[1].location.as_deref(), Some("Plant 1"));
    assert_eq!(parsed.drafts[2].matricula, "200");
}

#[test]
fn test_marking_line_without_employee_is_skipped() {
    let text = "\
Período: 15/01/2024
Marcações
08:00 12:00
Empregado: 100 Jane Doe
Marcações
13:00 17:00
";
    let parsed = parse_report(text, FALLBACK());
    assert_eq!(parsed.drafts.len(), 1);
    assert_eq!(parsed.drafts[0].matricula, "100");
    assert_eq!(parsed.skipped_lines, vec![3]);
}

#[test]
fn test_empty_input_yields_no_drafts() {
    let parsed = parse_report("", FALLBACK());
    assert!(parsed.drafts.is_empty());
    assert!(parsed.skipped_lines.is_empty());
}

// ---------------------------------------------------------------------
// End-to-end via CLI
// ---------------------------------------------------------------------

#[test]
fn test_import_report_end_to_end() {
    let db_path = setup_test_db("import_e2e");
    init_db_with_org(&db_path);

    let report = temp_input(
        "import_e2e",
        "txt",
        "Período: 15/01/2024\n\
         Empregado: 100 Jane Doe\n\
         Localização: Plant 1\n\
         Marcações\n\
         08:00 12:00 13:00 17:00\n",
    );

    cf().args(["--db", &db_path, "--test", "import", "--report", &report])
        .assert()
        .success()
        .stdout(contains("Imported 1 punch record(s)"))
        .stdout(contains("2024-01-15"));

    // Display formatter adds the +3h offset: 08:00 shows as 11:00.
    cf().args(["--db", &db_path, "--test", "punch", "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("2024-01-15"))
        .stdout(contains("100"))
        .stdout(contains("Jane Doe"))
        .stdout(contains("11:00"))
        .stdout(contains("20:00"))
        .stdout(contains("1 record(s)."));
}

#[test]
fn test_import_empty_report_is_terminal_error() {
    let db_path = setup_test_db("import_empty");
    init_db_with_org(&db_path);

    let report = temp_input("import_empty", "txt", "no markers at all\n");

    cf().args(["--db", &db_path, "--test", "import", "--report", &report])
        .assert()
        .failure()
        .stderr(contains("No punch records found"));

    // The failure is also surfaced as a notification.
    cf().args(["--db", &db_path, "--test", "notify", "--print"])
        .assert()
        .success()
        .stdout(contains("No punch records found"));
}

#[test]
fn test_import_unknown_matricula_fails_with_row_error() {
    let db_path = setup_test_db("import_unknown_emp");
    init_db_with_org(&db_path);

    let report = temp_input(
        "import_unknown_emp",
        "txt",
        "Período: 15/01/2024\n\
         Empregado: 999 Ghost Worker\n\
         Marcações\n\
         08:00 12:00\n",
    );

    cf().args(["--db", &db_path, "--test", "import", "--report", &report])
        .assert()
        .failure()
        .stderr(contains("unknown employee matricula '999'"));

    // The whole batch aborted: nothing was inserted.
    cf().args(["--db", &db_path, "--test", "punch", "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("No punch records found."));
}

#[test]
fn test_import_unknown_cost_center_fails_with_row_error() {
    let db_path = setup_test_db("import_unknown_cc");
    init_db_with_org(&db_path);

    let report = temp_input(
        "import_unknown_cc",
        "txt",
        "Período: 15/01/2024\n\
         Empregado: 100 Jane Doe\n\
         Localização: Nonexistent Plant\n\
         Marcações\n\
         08:00 12:00\n",
    );

    cf().args(["--db", &db_path, "--test", "import", "--report", &report])
        .assert()
        .failure()
        .stderr(contains("unknown cost center 'Nonexistent Plant'"));
}

#[test]
fn test_import_batch_aborts_entirely_on_one_bad_row() {
    let db_path = setup_test_db("import_partial");
    init_db_with_org(&db_path);

    // First block resolves, second does not: nothing may be inserted.
    let report = temp_input(
        "import_partial",
        "txt",
        "Período: 15/01/2024\n\
         Empregado: 100 Jane Doe\n\
         Localização: Plant 1\n\
         Marcações\n\
         08:00 12:00\n\
         Empregado: 999 Ghost Worker\n\
         Marcações\n\
         09:00 18:00\n",
    );

    cf().args(["--db", &db_path, "--test", "import", "--report", &report])
        .assert()
        .failure();

    cf().args(["--db", &db_path, "--test", "punch", "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("No punch records found."));
}

#[test]
fn test_import_skipped_marking_line_warns_and_continues() {
    let db_path = setup_test_db("import_skipped");
    init_db_with_org(&db_path);

    let report = temp_input(
        "import_skipped",
        "txt",
        "Período: 15/01/2024\n\
         Marcações\n\
         07:00 11:00\n\
         Empregado: 100 Jane Doe\n\
         Localização: Plant 1\n\
         Marcações\n\
         08:00 12:00\n",
    );

    cf().args(["--db", &db_path, "--test", "import", "--report", &report])
        .assert()
        .success()
        .stdout(contains("Imported 1 punch record(s)"))
        .stdout(contains("1 marking line(s) skipped"));

    cf().args(["--db", &db_path, "--test", "notify", "--print"])
        .assert()
        .success()
        .stdout(contains("marking line before any 'Empregado:'"));
}

#[test]
fn test_import_csv_template_round_trip() {
    let db_path = setup_test_db("import_csv");
    init_db_with_org(&db_path);

    let template = common::temp_out("import_csv_template", "csv");

    cf().args(["--db", &db_path, "--test", "import", "--template", &template])
        .assert()
        .success()
        .stdout(contains("Template export completed"));

    let content = std::fs::read_to_string(&template).expect("read template");
    assert!(content.starts_with(
        "Matricula,Data,Entrada1,Saida1,Entrada2,Saida2,Entrada3,Saida3,Entrada4,Saida4"
    ));

    // The example row references matricula 100, which exists here, so the
    // template itself is importable as-is.
    cf().args(["--db", &db_path, "--test", "import", "--csv", &template])
        .assert()
        .success()
        .stdout(contains("Imported 1 punch record(s)"));

    cf().args(["--db", &db_path, "--test", "punch", "list", "--period", "2024-01"])
        .assert()
        .success()
        .stdout(contains("2024-01-15"))
        .stdout(contains("11:00"));
}

#[test]
fn test_import_csv_unknown_matricula_fails() {
    let db_path = setup_test_db("import_csv_unknown");
    init_db_with_org(&db_path);

    let csv = temp_input(
        "import_csv_unknown",
        "csv",
        "Matricula,Data,Entrada1,Saida1,Entrada2,Saida2,Entrada3,Saida3,Entrada4,Saida4\n\
         999,2024-01-15,08:00,12:00,,,,,,\n",
    );

    cf().args(["--db", &db_path, "--test", "import", "--csv", &csv])
        .assert()
        .failure()
        .stderr(contains("unknown employee matricula '999'").or(contains("999")));
}
