//! Code generation for the mapper derives.

pub(crate) mod map_enum;
pub(crate) mod mappable;
