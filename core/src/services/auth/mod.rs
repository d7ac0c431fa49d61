//! Authentication service: credential validation and login/refresh
//! orchestration.

mod service;


pub use service::AuthService;
