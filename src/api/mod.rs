//! Resource API Modules
//!
//! One function per REST operation, organized by domain. Each shapes a single
//! request on the shared `HttpClient` and passes its result through untouched.

mod auth;
mod misc;
mod task;
mod upload;

pub use auth::*;
pub use misc::*;
pub use task::*;
pub use upload::*;
