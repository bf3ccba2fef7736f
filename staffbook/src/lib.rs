//! # staffbook
//!
//! Employee CRUD REST API (axum + `SeaORM`) built around [`mapping::Mapper`],
//! a cached, name-based field mapper between request DTOs, entities and
//! response DTOs.
//!
//! - [`mapping`]: the mapper and its `Mappable`/`MapValue` interfaces
//! - [`employees`]: entity, payloads, repository, service and routes
//! - [`errors`]: `ApiError` and the JSON error body
//! - [`validation`]: `Validatable` and field validators
//! - [`config`]: settings from the environment
//! - [`migration`]: schema for the `employee` table

extern crate self as staffbook;

pub mod config;
pub mod errors;
pub mod extract;
pub mod mapping;
pub mod migration;
pub mod validation;

#[cfg(feature = "derive")]
pub mod app;
#[cfg(feature = "derive")]
pub mod employees;

pub use errors::ApiError;
pub use mapping::{MapEnum, Mappable, Mapper};
#[cfg(feature = "derive")]
pub use staffbook_derive::{MapEnum, Mappable}; // Export the proc macros
