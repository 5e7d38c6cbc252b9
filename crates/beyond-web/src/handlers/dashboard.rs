//! Guarded dashboard views. The [`Viewer`] extractor has already run the
//! role guard by the time these bodies execute.

use axum::Json;
use beyond_core::{principal::Principal, route::Route};
use serde::Serialize;

use crate::view::{
  AdminDashboard, AnyDashboard, CoachDashboard, ProtectedView, StudentDashboard,
  Viewer,
};

#[derive(Debug, Serialize)]
pub struct DashboardBody {
  pub view:      Route,
  pub greeting:  String,
  pub principal: Principal,
}

fn render<V: ProtectedView>(viewer: Viewer<V>) -> Json<DashboardBody> {
  let name = match viewer.principal.name.as_str() {
    "" => "Chess Player",
    name => name,
  };
  Json(DashboardBody {
    view:      V::ROUTE,
    greeting:  format!("Welcome, {name}"),
    principal: viewer.principal,
  })
}

/// `GET /dashboard`
pub async fn any(viewer: Viewer<AnyDashboard>) -> Json<DashboardBody> {
  render(viewer)
}

/// `GET /student-dashboard`
pub async fn student(viewer: Viewer<StudentDashboard>) -> Json<DashboardBody> {
  render(viewer)
}

/// `GET /coach-dashboard`
pub async fn coach(viewer: Viewer<CoachDashboard>) -> Json<DashboardBody> {
  render(viewer)
}

/// `GET /admin-dashboard`
pub async fn admin(viewer: Viewer<AdminDashboard>) -> Json<DashboardBody> {
  render(viewer)
}
