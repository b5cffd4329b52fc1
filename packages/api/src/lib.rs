//! # API crate: the employee service as seen from the console
//!
//! Every frontend (web, desktop) talks to the backend through this crate.
//! It owns the wire contract and nothing else: there is no business logic
//! client-side, the backend validates and stores.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`EmployeeBackend`] trait and its reqwest implementation [`EmployeeClient`] |
//! | [`config`] | Resolving [`ConsoleConfig`] from file, `.env` and environment |
//! | [`error`] | [`ApiError`], one enum for transport, status and configuration failures |
//! | [`models`] | [`Employee`], [`NewEmployee`], [`EmployeeUpdate`], [`PasswordChange`] |
//!
//! ## Endpoints
//!
//! - `GET /employee`, `GET /employee/{id}`: JSON bodies decoded
//! - `POST /employee/create`, `PUT /employee/update/{id}`, `DELETE /employee/delete/{id}`:
//!   status checked only

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{EmployeeBackend, EmployeeClient};
pub use config::load_config;
pub use error::{ApiError, ApiResult};
pub use models::{Employee, EmployeeUpdate, NewEmployee, PasswordChange};

pub use store::ConsoleConfig;
