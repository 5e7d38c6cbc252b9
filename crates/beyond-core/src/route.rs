//! Views, redirect targets and user-facing notices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::Role;

// ─── Routes ──────────────────────────────────────────────────────────────────

/// The views the session protocol redirects between. Serialised as its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Route {
  Home,
  Login,
  Dashboard,
  StudentDashboard,
  CoachDashboard,
  AdminDashboard,
}

/// What a protected view demands of the stored principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
  /// Any authenticated principal.
  Authenticated,
  /// An authenticated principal holding exactly this role.
  Role(Role),
}

impl Route {
  pub const ALL: [Route; 6] = [
    Route::Home,
    Route::Login,
    Route::Dashboard,
    Route::StudentDashboard,
    Route::CoachDashboard,
    Route::AdminDashboard,
  ];

  pub fn path(self) -> &'static str {
    match self {
      Self::Home => "/",
      Self::Login => "/login",
      Self::Dashboard => "/dashboard",
      Self::StudentDashboard => "/student-dashboard",
      Self::CoachDashboard => "/coach-dashboard",
      Self::AdminDashboard => "/admin-dashboard",
    }
  }

  /// Look a route up by path. A single trailing slash is tolerated.
  pub fn from_path(path: &str) -> Option<Self> {
    let path = match path.strip_suffix('/') {
      Some("") | None => path,
      Some(trimmed) => trimmed,
    };
    Self::ALL.into_iter().find(|r| r.path() == path)
  }

  /// A role's own dashboard.
  pub fn dashboard_for(role: Role) -> Self {
    match role {
      Role::Student => Self::StudentDashboard,
      Role::Coach => Self::CoachDashboard,
      Role::Admin => Self::AdminDashboard,
    }
  }

  /// Post-login destination for a role claim; unknown claims fall back to the
  /// generic dashboard.
  pub fn after_login(role: Option<Role>) -> Self {
    role.map_or(Self::Dashboard, Self::dashboard_for)
  }

  /// `None` for public views.
  pub fn requirement(self) -> Option<Requirement> {
    match self {
      Self::Home | Self::Login => None,
      Self::Dashboard => Some(Requirement::Authenticated),
      Self::StudentDashboard => Some(Requirement::Role(Role::Student)),
      Self::CoachDashboard => Some(Requirement::Role(Role::Coach)),
      Self::AdminDashboard => Some(Requirement::Role(Role::Admin)),
    }
  }
}

impl From<Route> for String {
  fn from(route: Route) -> Self { route.path().to_string() }
}

impl TryFrom<String> for Route {
  type Error = String;

  fn try_from(path: String) -> Result<Self, Self::Error> {
    Self::from_path(&path).ok_or_else(|| format!("unknown route {path:?}"))
  }
}

impl std::fmt::Display for Route {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.path())
  }
}

// ─── Notices ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
  Success,
  Error,
}

/// A user-facing message emitted at the moment of the triggering event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
  pub level:      NoticeLevel,
  pub message:    String,
  pub emitted_at: DateTime<Utc>,
}

impl Notice {
  pub fn success(message: impl Into<String>) -> Self {
    Self::new(NoticeLevel::Success, message)
  }

  pub fn error(message: impl Into<String>) -> Self {
    Self::new(NoticeLevel::Error, message)
  }

  fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
    Self {
      level,
      message: message.into(),
      emitted_at: Utc::now(),
    }
  }
}

impl std::fmt::Display for Notice {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.message)
  }
}

// ─── Navigation ──────────────────────────────────────────────────────────────

/// The outcome of a flow: a notice to show and, optionally, where to go.
///
/// `redirect` is `None` when the user stays where they are (e.g. a rejected
/// login form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
  pub notice:   Notice,
  pub redirect: Option<Route>,
}

impl Navigation {
  pub fn redirect(notice: Notice, to: Route) -> Self {
    Self {
      notice,
      redirect: Some(to),
    }
  }

  pub fn stay(notice: Notice) -> Self {
    Self {
      notice,
      redirect: None,
    }
  }
}
