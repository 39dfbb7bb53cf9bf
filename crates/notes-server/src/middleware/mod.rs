//! Middleware applied around every route.

pub mod logging;
pub mod recovery;
pub mod request_id;
