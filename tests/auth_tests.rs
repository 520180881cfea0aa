use predicates::str::contains;

mod common;
use common::{cf, setup_test_db};

fn add_user(db_path: &str) {
    cf().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    cf().args([
        "--db",
        db_path,
        "--test",
        "auth",
        "add-user",
        "--email",
        "admin@acme.test",
        "--password",
        "s3cret-pw",
        "--name",
        "Admin",
    ])
    .assert()
    .success()
    .stdout(contains("Account created for admin@acme.test"));
}

#[test]
fn test_login_whoami_logout_cycle() {
    let db_path = setup_test_db("auth_cycle");
    add_user(&db_path);

    cf().args(["--db", &db_path, "--test", "auth", "whoami"])
        .assert()
        .success()
        .stdout(contains("No active session."));

    cf().args([
        "--db", &db_path, "--test", "auth", "login", "--email", "admin@acme.test",
        "--password", "s3cret-pw",
    ])
    .assert()
    .success()
    .stdout(contains("Session opened for admin@acme.test"))
    .stdout(contains("Signed in as Admin (admin@acme.test)"));

    // The session survives across invocations.
    cf().args(["--db", &db_path, "--test", "auth", "whoami"])
        .assert()
        .success()
        .stdout(contains("Admin <admin@acme.test>"));

    cf().args(["--db", &db_path, "--test", "auth", "logout"])
        .assert()
        .success()
        .stdout(contains("Session closed"))
        .stdout(contains("Signed out."));

    cf().args(["--db", &db_path, "--test", "auth", "whoami"])
        .assert()
        .success()
        .stdout(contains("No active session."));
}

#[test]
fn test_login_wrong_password_rejected() {
    let db_path = setup_test_db("auth_wrong_pw");
    add_user(&db_path);

    cf().args([
        "--db", &db_path, "--test", "auth", "login", "--email", "admin@acme.test",
        "--password", "wrong",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid credentials"));
}

#[test]
fn test_login_unknown_email_rejected() {
    let db_path = setup_test_db("auth_unknown_email");
    add_user(&db_path);

    cf().args([
        "--db", &db_path, "--test", "auth", "login", "--email", "ghost@acme.test",
        "--password", "s3cret-pw",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid credentials"));
}

#[test]
fn test_logout_without_session_fails() {
    let db_path = setup_test_db("auth_no_session");
    add_user(&db_path);

    cf().args(["--db", &db_path, "--test", "auth", "logout"])
        .assert()
        .failure()
        .stderr(contains("No active session"));
}

#[test]
fn test_duplicate_user_rejected() {
    let db_path = setup_test_db("auth_dup_user");
    add_user(&db_path);

    cf().args([
        "--db",
        &db_path,
        "--test",
        "auth",
        "add-user",
        "--email",
        "admin@acme.test",
        "--password",
        "other",
        "--name",
        "Clone",
    ])
    .assert()
    .failure()
    .stderr(contains("Duplicate value: user 'admin@acme.test'"));
}

#[test]
fn test_failures_become_notifications() {
    let db_path = setup_test_db("auth_notify");
    add_user(&db_path);

    cf().args([
        "--db", &db_path, "--test", "auth", "login", "--email", "admin@acme.test",
        "--password", "wrong",
    ])
    .assert()
    .failure();

    cf().args(["--db", &db_path, "--test", "notify", "--unread"])
        .assert()
        .success()
        .stdout(contains("Invalid credentials"));

    cf().args(["--db", &db_path, "--test", "notify", "--mark-read"])
        .assert()
        .success();

    cf().args(["--db", &db_path, "--test", "notify", "--unread"])
        .assert()
        .success()
        .stdout(contains("No notifications."));
}
