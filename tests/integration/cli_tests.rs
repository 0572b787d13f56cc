use std::path::Path;

use clap::Parser;
use elidune_session::{
    cli::{self, Cli},
    AppError, FileStore, SessionGuard,
};

use crate::token_expiring_in;

/// Run a command line against the store at `store`, returning its output
fn run_cli(store: &Path, args: &[&str]) -> Result<String, AppError> {
    let cli = Cli::try_parse_from(
        ["elidune-session", "--store", store.to_str().unwrap()]
            .into_iter()
            .chain(args.iter().copied()),
    )
    .expect("Failed to parse command line");

    let path = cli.store.clone().unwrap();
    let mut guard = SessionGuard::new(FileStore::open(path)?);
    let mut out = Vec::new();
    cli::run(cli.command, &mut guard, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn write_login_body(dir: &Path, role: &str, offset: i64) -> String {
    let body = format!(
        r#"{{"success": true, "message": "Login successful", "userId": "5", "username": "dave", "role": "{}", "jwt": "{}"}}"#,
        role,
        token_expiring_in(role, offset)
    );
    let path = dir.join("login.json");
    std::fs::write(&path, body).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_login_guard_logout_flow() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("session.json");
    let body = write_login_body(dir.path(), "user", 3600);

    assert_eq!(run_cli(&store, &["login", &body]).unwrap(), "/dashboard.html\n");
    assert_eq!(run_cli(&store, &["guard", "--role", "user"]).unwrap(), "stay\n");
    assert_eq!(run_cli(&store, &["guard"]).unwrap(), "stay\n");
    assert_eq!(
        run_cli(&store, &["guard", "--role", "admin"]).unwrap(),
        "/dashboard.html\n"
    );
    assert_eq!(run_cli(&store, &["redirect"]).unwrap(), "/dashboard.html\n");
    assert_eq!(run_cli(&store, &["logout"]).unwrap(), "/login.html\n");
    assert_eq!(run_cli(&store, &["redirect"]).unwrap(), "stay\n");
    assert_eq!(run_cli(&store, &["guard"]).unwrap(), "/login.html\n");
}

#[test]
fn test_empty_role_flag_requires_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("session.json");
    let body = write_login_body(dir.path(), "user", 3600);

    run_cli(&store, &["login", &body]).unwrap();
    assert_eq!(run_cli(&store, &["guard", "--role", ""]).unwrap(), "stay\n");
}

#[test]
fn test_unknown_role_flag_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("session.json");

    assert!(matches!(
        run_cli(&store, &["guard", "--role", "librarian"]),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn test_expired_session_is_cleared_by_guard() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("session.json");
    let body = write_login_body(dir.path(), "admin", -10);

    assert_eq!(
        run_cli(&store, &["login", &body]).unwrap(),
        "/admin_dashboard.html\n"
    );
    assert_eq!(
        run_cli(&store, &["guard", "--role", "admin"]).unwrap(),
        "/login.html\n"
    );

    let status = run_cli(&store, &["status"]).unwrap();
    assert_eq!(status, "token valid:   false\nauthenticated: false\n");
}

#[test]
fn test_failed_login_body_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("session.json");
    let body = dir.path().join("failed.json");
    std::fs::write(
        &body,
        r#"{"success": false, "message": "Invalid username or password"}"#,
    )
    .unwrap();

    match run_cli(&store, &["login", body.to_str().unwrap()]) {
        Err(AppError::Authentication(msg)) => assert_eq!(msg, "Invalid username or password"),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!store.exists());
}

#[test]
fn test_status_of_signed_in_admin() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("session.json");
    let body = write_login_body(dir.path(), "admin", 3600);

    run_cli(&store, &["login", &body]).unwrap();
    let status = run_cli(&store, &["status"]).unwrap();

    assert_eq!(
        status,
        "token valid:   true\n\
         subject:       alice\n\
         token role:    admin\n\
         authenticated: true\n\
         role:          admin\n\
         user:          dave\n\
         user id:       5\n"
    );
}
