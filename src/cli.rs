//! Command-line shell around the session guard
//!
//! Each command performs the guard's navigation decision by writing the
//! target path (or `stay`) as a single line.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::{
    error::{AppError, AppResult},
    guard::SessionGuard,
    models::{LoginResponse, Role},
    navigation::Navigation,
    store::SessionStore,
};

#[derive(Parser, Debug)]
#[command(name = "elidune-session")]
#[command(about = "Elidune library session guard")]
#[command(version)]
pub struct Cli {
    /// Session store file (overrides configuration)
    #[arg(short, long)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current session state
    Status,
    /// Establish a session from a /api/login response body ("-" reads stdin)
    Login { response: PathBuf },
    /// Gate a page load, optionally for a single role (admin or user)
    Guard {
        #[arg(short, long)]
        role: Option<String>,
    },
    /// Leave the login page when already signed in
    Redirect,
    /// Clear the session
    Logout,
}

/// Run one command against `guard`, writing its outcome to `out`
pub fn run<S, W>(command: Command, guard: &mut SessionGuard<S>, out: &mut W) -> AppResult<()>
where
    S: SessionStore,
    W: Write,
{
    match command {
        Command::Status => write_status(guard, out)?,
        Command::Login { response } => {
            let body = read_body(&response)?;
            let response = LoginResponse::from_body(&body)?;
            perform(guard.establish_session(&response), out)?;
        }
        Command::Guard { role } => {
            let required = parse_required_role(role.as_deref())?;
            perform(guard.protect_route(required.as_ref()), out)?;
        }
        Command::Redirect => perform(guard.redirect_if_authenticated(), out)?,
        Command::Logout => perform(guard.logout(), out)?,
    }
    Ok(())
}

/// Empty means no role is required; only the roles the backend issues are accepted
fn parse_required_role(role: Option<&str>) -> AppResult<Option<Role>> {
    match role.map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => match Role::from(name) {
            Role::Other(other) => Err(AppError::Validation(format!(
                "Unknown role '{}', expected admin or user",
                other
            ))),
            known => Ok(Some(known)),
        },
    }
}

fn read_body(path: &Path) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        Ok(body)
    } else {
        std::fs::read_to_string(path)
    }
}

fn perform<W: Write>(navigation: Navigation, out: &mut W) -> std::io::Result<()> {
    match navigation {
        Navigation::Stay => writeln!(out, "stay"),
        Navigation::Redirect(route) => writeln!(out, "{}", route.path()),
    }
}

fn write_status<S: SessionStore, W: Write>(guard: &SessionGuard<S>, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "token valid:   {}", guard.is_token_valid())?;
    if let Some(claims) = guard.token_claims() {
        writeln!(out, "subject:       {}", claims.sub.as_deref().unwrap_or("-"))?;
        writeln!(out, "token role:    {}", claims.role.as_deref().unwrap_or("-"))?;
    }

    let Some(info) = guard.session_info() else {
        return writeln!(out, "authenticated: false");
    };

    writeln!(out, "authenticated: true")?;
    writeln!(out, "role:          {}", info.role)?;
    writeln!(out, "user:          {}", info.user_name.as_deref().unwrap_or("-"))?;
    match info.user_id {
        Some(id) => writeln!(out, "user id:       {}", id),
        None => writeln!(out, "user id:       -"),
    }
}
