pub mod health_checks;
pub(crate) mod queries;
pub(crate) mod recommend;
pub(crate) mod session;

pub use health_checks::*;
