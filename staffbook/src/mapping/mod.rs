//! # Field Mapping
//!
//! Copies values between independently defined structs (request DTOs, database
//! models, response DTOs) without hand-written per-pair code.
//!
//! Each struct describes its fields through [`Mappable`], normally derived:
//!
//! ```rust,ignore
//! use staffbook::{Mappable, mapping::Mapper};
//!
//! #[derive(Mappable)]
//! struct SignUp {
//!     name: Option<String>,
//!     age: Option<String>,
//! }
//!
//! #[derive(Mappable, Default)]
//! struct Account {
//!     #[mapper(read_only)]
//!     id: i32,
//!     name: String,
//!     age: Option<i32>,
//! }
//!
//! let mapper = Mapper::new();
//! let account: Account = mapper.create_and_map(&signup, &["id"]);
//! ```
//!
//! ## Plans
//!
//! The first mapping between two types builds a [`MappingPlan`]: every writable
//! destination field paired with the readable source field of the same name
//! (case-insensitive, Unicode-aware). Plans are cached in the [`Mapper`] and
//! shared by all later calls, from any thread.
//!
//! ## Values
//!
//! Fields are read and written as [`FieldValue`]s. When the source and
//! destination kinds differ the value goes through [`convert`]; values that
//! cannot be converted are skipped.

mod convert;
mod mapper;
mod plan;
mod traits;
mod value;

pub use convert::{ConversionError, convert};
pub use mapper::Mapper;
pub use plan::{FieldPair, MappingPlan, PlanCache};
pub use traits::{Field, Getter, MapEnum, MapValue, Mappable, Setter};
pub use value::{EnumInfo, EnumValue, FieldType, FieldValue, ValueKind};
