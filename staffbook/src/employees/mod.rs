//! The `employee` resource: table, payloads, persistence, use cases and routes.

pub mod dto;
pub mod entity;
pub mod repository;
pub mod routes;
pub mod service;

pub use dto::{EmployeeCreate, EmployeeOutput, EmployeePatch, EmployeeUpdate};
pub use repository::{EmployeeRepository, SeaOrmEmployeeRepository};
pub use routes::{AppState, DynEmployeeRepository};
pub use service::EmployeeService;
