use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{cf, init_db_with_org, setup_test_db, temp_input};

#[test]
fn test_company_add_list_del() {
    let db_path = setup_test_db("company_crud");

    cf().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cf().args([
        "--db", &db_path, "--test", "company", "add", "--name", "Acme Industries", "--cnpj",
        "12.345.678/0001-90",
    ])
    .assert()
    .success()
    .stdout(contains("Company 'Acme Industries' created"));

    cf().args(["--db", &db_path, "--test", "company", "list"])
        .assert()
        .success()
        .stdout(contains("Acme Industries"))
        .stdout(contains("12.345.678/0001-90"));

    cf().args(["--db", &db_path, "--test", "company", "del", "--id", "1"])
        .assert()
        .success()
        .stdout(contains("Company 1 deleted."));

    cf().args(["--db", &db_path, "--test", "company", "list"])
        .assert()
        .success()
        .stdout(contains("No companies registered."));
}

#[test]
fn test_company_duplicate_name_is_validation_error() {
    let db_path = setup_test_db("company_dup");

    cf().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cf().args(["--db", &db_path, "--test", "company", "add", "--name", "Acme"])
        .assert()
        .success();

    cf().args(["--db", &db_path, "--test", "company", "add", "--name", "Acme"])
        .assert()
        .failure()
        .stderr(contains("Duplicate value: company 'Acme'"));
}

#[test]
fn test_company_update() {
    let db_path = setup_test_db("company_update");

    cf().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cf().args(["--db", &db_path, "--test", "company", "add", "--name", "Acme"])
        .assert()
        .success();

    cf().args([
        "--db", &db_path, "--test", "company", "set", "--id", "1", "--name", "Acme Corp",
    ])
    .assert()
    .success()
    .stdout(contains("Company 1 updated."));

    cf().args(["--db", &db_path, "--test", "company", "list"])
        .assert()
        .success()
        .stdout(contains("Acme Corp"))
        .stdout(contains("Acme\n").not());
}

#[test]
fn test_cost_center_requires_existing_company() {
    let db_path = setup_test_db("cc_missing_company");

    cf().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cf().args([
        "--db",
        &db_path,
        "--test",
        "cost-center",
        "add",
        "--company-id",
        "42",
        "--name",
        "Plant 1",
    ])
    .assert()
    .failure()
    .stderr(contains("company not found: 42"));
}

#[test]
fn test_cost_center_duplicate_within_company() {
    let db_path = setup_test_db("cc_dup");
    init_db_with_org(&db_path);

    // Same label again in company 1 → duplicate
    cf().args([
        "--db",
        &db_path,
        "--test",
        "cost-center",
        "add",
        "--company-id",
        "1",
        "--name",
        "Plant 1",
    ])
    .assert()
    .failure()
    .stderr(contains("Duplicate value: cost center 'Plant 1'"));
}

#[test]
fn test_shift_add_and_list_window() {
    let db_path = setup_test_db("shift_crud");
    init_db_with_org(&db_path);

    cf().args([
        "--db", &db_path, "--test", "shift", "add", "--name", "Day shift", "--company-id", "1",
        "--in", "08:00", "--out", "17:00",
    ])
    .assert()
    .success()
    .stdout(contains("Shift 'Day shift' created"));

    cf().args(["--db", &db_path, "--test", "shift", "list"])
        .assert()
        .success()
        .stdout(contains("Day shift"))
        .stdout(contains("08:00 - 17:00"));
}

#[test]
fn test_shift_rejects_bad_time() {
    let db_path = setup_test_db("shift_bad_time");
    init_db_with_org(&db_path);

    cf().args([
        "--db", &db_path, "--test", "shift", "add", "--name", "Broken", "--in", "25:99",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time format: 25:99"));
}

#[test]
fn test_employee_duplicate_matricula() {
    let db_path = setup_test_db("emp_dup");
    init_db_with_org(&db_path);

    cf().args([
        "--db",
        &db_path,
        "--test",
        "employee",
        "add",
        "--matricula",
        "100",
        "--name",
        "Someone Else",
        "--company-id",
        "1",
        "--cost-center-id",
        "1",
    ])
    .assert()
    .failure()
    .stderr(contains("Duplicate value: employee matricula '100'"));
}

#[test]
fn test_employee_cost_center_must_belong_to_company() {
    let db_path = setup_test_db("emp_cc_mismatch");
    init_db_with_org(&db_path);

    // Second company with its own cost center (id 2)
    cf().args(["--db", &db_path, "--test", "company", "add", "--name", "Other Co"])
        .assert()
        .success();
    cf().args([
        "--db",
        &db_path,
        "--test",
        "cost-center",
        "add",
        "--company-id",
        "2",
        "--name",
        "Plant 9",
    ])
    .assert()
    .success();

    cf().args([
        "--db",
        &db_path,
        "--test",
        "employee",
        "add",
        "--matricula",
        "300",
        "--name",
        "Misplaced",
        "--company-id",
        "1",
        "--cost-center-id",
        "2",
    ])
    .assert()
    .failure()
    .stderr(contains("belongs to company 2"));
}

#[test]
fn test_employee_list_cascading_filters() {
    let db_path = setup_test_db("emp_filters");
    init_db_with_org(&db_path);

    // Company B (id 2) with cost center Z (id 2) and one employee
    cf().args(["--db", &db_path, "--test", "company", "add", "--name", "Beta Ltd"])
        .assert()
        .success();
    cf().args([
        "--db",
        &db_path,
        "--test",
        "cost-center",
        "add",
        "--company-id",
        "2",
        "--name",
        "Warehouse",
    ])
    .assert()
    .success();
    cf().args([
        "--db",
        &db_path,
        "--test",
        "employee",
        "add",
        "--matricula",
        "200",
        "--name",
        "John Roe",
        "--company-id",
        "2",
        "--cost-center-id",
        "2",
    ])
    .assert()
    .success();

    // Filter by company 1 → only Jane
    cf().args(["--db", &db_path, "--test", "employee", "list", "--company", "1"])
        .assert()
        .success()
        .stdout(contains("Jane Doe"))
        .stdout(contains("John Roe").not());

    // No filter → both
    cf().args(["--db", &db_path, "--test", "employee", "list"])
        .assert()
        .success()
        .stdout(contains("Jane Doe"))
        .stdout(contains("John Roe"));

    // Cost center of the wrong company → precise error
    cf().args([
        "--db", &db_path, "--test", "employee", "list", "--company", "1", "--cost-center", "2",
    ])
    .assert()
    .failure()
    .stderr(contains("not available for this company"));
}

#[test]
fn test_employee_photo_upload_check_path() {
    let db_path = setup_test_db("emp_photo");
    init_db_with_org(&db_path);

    let photo = temp_input("emp_photo", "jpg", "not really a jpeg");

    cf().args([
        "--db", &db_path, "--test", "employee", "photo", "--matricula", "100", "--file", &photo,
    ])
    .assert()
    .success()
    .stdout(contains("Photo stored at"))
    .stdout(contains("100.jpg"));

    cf().args([
        "--db", &db_path, "--test", "employee", "photo", "--matricula", "100", "--check",
    ])
    .assert()
    .success()
    .stdout(contains("Photo stored for matricula 100"));

    cf().args([
        "--db", &db_path, "--test", "employee", "photo", "--matricula", "100", "--path",
    ])
    .assert()
    .success()
    .stdout(contains("100.jpg"));
}

#[test]
fn test_employee_photo_unknown_matricula() {
    let db_path = setup_test_db("emp_photo_unknown");
    init_db_with_org(&db_path);

    cf().args([
        "--db", &db_path, "--test", "employee", "photo", "--matricula", "404", "--check",
    ])
    .assert()
    .failure()
    .stderr(contains("employee not found: 404"));
}

#[test]
fn test_db_maintenance_commands() {
    let db_path = setup_test_db("db_maintenance");
    init_db_with_org(&db_path);

    cf().args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Database integrity: ok"));

    cf().args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("empresas"))
        .stdout(contains("batidas_ponto"));

    cf().args(["--db", &db_path, "--test", "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Database vacuumed."));
}

#[test]
fn test_param_set_and_list() {
    let db_path = setup_test_db("param_crud");

    cf().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    cf().args([
        "--db",
        &db_path,
        "--test",
        "param",
        "set",
        "punch.display_offset_hours",
        "0",
    ])
    .assert()
    .success();

    cf().args(["--db", &db_path, "--test", "param", "list"])
        .assert()
        .success()
        .stdout(contains("punch.display_offset_hours = 0"));
}

#[test]
fn test_backup_plain_copy() {
    let db_path = setup_test_db("backup_plain");
    init_db_with_org(&db_path);

    let dest = common::temp_out("backup_plain", "sqlite");

    cf().args(["--db", &db_path, "--test", "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&dest).exists());
}
