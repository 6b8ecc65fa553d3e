//! Authentication: credential validation, stateless session tokens, and the
//! login/registration HTTP surface.

pub mod handlers;
pub mod queries;
pub mod session;
pub mod validation;
