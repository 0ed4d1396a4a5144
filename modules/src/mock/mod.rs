//! Implementations of mocks which are useful for testing the middleware without a running
//! transfer module or application.

pub mod handler;
pub mod transfer;
