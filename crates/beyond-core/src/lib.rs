//! Core types and the session/role-guard protocol for the BeyondTheBoard
//! academy shell.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`storage::SlotStorage`]; front ends (the axum
//! router, the CLI) call [`login::login`], [`guard::guard`] and
//! [`logout::logout`] and render the returned [`route::Navigation`].

pub mod directory;
pub mod error;
pub mod guard;
pub mod login;
pub mod logout;
pub mod principal;
pub mod register;
pub mod role;
pub mod route;
pub mod session;
pub mod storage;

pub use error::{Error, Result, ValidationError};
