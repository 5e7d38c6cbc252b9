//! Command dispatcher: runs one session-protocol step and reports it.

use std::io::Write;

use anyhow::Result;
use beyond_core::{
  Error,
  directory::CredentialDirectory,
  guard::{Access, guard_route},
  login::{LoginRequest, login},
  logout::logout,
  register::{RegistrationForm, register},
  route::{Navigation, NoticeLevel, Route},
  session::SessionStore,
};

// ─── Commands ─────────────────────────────────────────────────────────────────

/// One step of the protocol, as requested on the command line.
#[derive(Debug, Clone)]
pub enum Command {
  Login(LoginRequest),
  Register(RegistrationForm),
  Visit(String),
  Logout,
  Whoami,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Borrowed view of everything a command needs.
pub struct App<'a, S: ?Sized> {
  pub directory: &'a CredentialDirectory,
  pub session:   &'a S,
}

impl<'a, S> App<'a, S>
where
  S: SessionStore + ?Sized,
{
  pub fn new(directory: &'a CredentialDirectory, session: &'a S) -> Self {
    Self { directory, session }
  }

  /// Run `command`, writing the notice and redirect to `out`. Returns whether
  /// the step succeeded (login accepted, view rendered, ...).
  pub fn run(&self, command: Command, out: &mut impl Write) -> Result<bool> {
    match command {
      Command::Login(request) => {
        match login(self.directory, self.session, &request) {
          Ok(done) => {
            report(out, &done.navigation)?;
            Ok(true)
          }
          Err(err) => rejected(out, err),
        }
      }
      Command::Register(form) => match register(&form) {
        Ok(nav) => {
          report(out, &nav)?;
          Ok(true)
        }
        Err(err) => rejected(out, err),
      },
      Command::Logout => {
        report(out, &logout(self.session)?)?;
        Ok(true)
      }
      Command::Visit(path) => self.visit(&path, out),
      Command::Whoami => {
        match self.session.get() {
          Ok(Some(p)) => writeln!(
            out,
            "{} <{}> role={} logged_in={}",
            p.name, p.email, p.role, p.authenticated
          )?,
          Ok(None) => writeln!(out, "not logged in")?,
          Err(err @ Error::SessionCorrupt(_)) => {
            tracing::warn!(error = %err, "discarding unparsable session");
            writeln!(out, "not logged in")?;
          }
          Err(err) => return Err(err.into()),
        }
        Ok(true)
      }
    }
  }

  fn visit(&self, path: &str, out: &mut impl Write) -> Result<bool> {
    let Some(route) = Route::from_path(path) else {
      writeln!(out, "404: no view at {path}")?;
      return Ok(false);
    };
    match guard_route(self.session, route) {
      None => {
        writeln!(out, "view: {route}")?;
        Ok(true)
      }
      Some(Access::Granted(principal)) => {
        writeln!(out, "view: {route}")?;
        writeln!(out, "Welcome, {}", principal.name)?;
        Ok(true)
      }
      Some(Access::Denied { navigation, .. }) => {
        report(out, &navigation)?;
        Ok(false)
      }
    }
  }
}

fn report(out: &mut impl Write, nav: &Navigation) -> std::io::Result<()> {
  let tag = match nav.notice.level {
    NoticeLevel::Success => "ok",
    NoticeLevel::Error => "error",
  };
  writeln!(out, "[{tag}] {}", nav.notice)?;
  if let Some(to) = nav.redirect {
    writeln!(out, "redirect: {to}")?;
  }
  Ok(())
}

/// Report a user-recoverable rejection; propagate anything else.
fn rejected(out: &mut impl Write, err: Error) -> Result<bool> {
  match err {
    Error::Validation(_) | Error::Authentication => {
      report(out, &Navigation::stay(err.notice()))?;
      Ok(false)
    }
    other => Err(other.into()),
  }
}
