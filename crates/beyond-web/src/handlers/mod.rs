//! Route handlers.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/login` | Body: `{"email","password","role"}` |
//! | `POST` | `/register` | Body: registration form |
//! | `POST` | `/logout` | Always redirects home |
//! | `GET`  | `/session` | Stored principal or `null` |
//! | `GET`  | `/dashboard`, `/{role}-dashboard` | Guarded views |

pub mod dashboard;
pub mod session;
