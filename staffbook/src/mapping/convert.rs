//! Scalar coercion between field kinds.
//!
//! Rules, by target kind:
//! - **Integers**: from other integers, `bool` (1/0), floats (rounded half to even),
//!   enum discriminants, and trimmed text. Every result is range checked.
//! - **Floats**: from integers, `bool`, enum discriminants, and trimmed text.
//! - **`bool`**: from numbers (non-zero is `true`) and text `"true"`/`"false"` in any case.
//! - **Text**: from anything, using the value's `Display` form (enum members by
//!   name). Floats print in full positional notation, so `1e20` becomes
//!   `"100000000000000000000"` and `0.1_f32` becomes `"0.1"`.
//! - **UUID**: from text only.
//! - **Enums**: from text holding a member name (any case) or a declared discriminant,
//!   otherwise from any value convertible to the enum's integer representation.
//!   Numeric codes are range checked against that representation, so a
//!   `#[repr(u64)]` enum accepts every `u64` code.

use super::value::{EnumInfo, EnumValue, FieldValue, ValueKind};
use std::fmt;
use uuid::Uuid;

/// Why a value could not be converted. Only ever logged by the mapper.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Null has no conversion to any kind.
    Null,
    /// No rule converts between these kinds.
    Unsupported { from: ValueKind, to: ValueKind },
    /// Text did not parse as the target kind.
    Parse { text: String, to: ValueKind },
    /// The value does not fit in the target kind.
    OutOfRange { value: String, to: ValueKind },
    /// Neither a member name nor a declared discriminant of the enum.
    UnknownMember {
        value: String,
        enum_name: &'static str,
    },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null cannot be converted"),
            Self::Unsupported { from, to } => write!(f, "no conversion from {from} to {to}"),
            Self::Parse { text, to } => write!(f, "'{text}' is not a valid {to}"),
            Self::OutOfRange { value, to } => write!(f, "{value} is out of range for {to}"),
            Self::UnknownMember { value, enum_name } => {
                write!(f, "'{value}' is not a member of {enum_name}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// Converts `value` into a value of kind `target`.
///
/// # Errors
///
/// Returns a [`ConversionError`] when no rule applies, text fails to parse,
/// or the result does not fit the target kind.
pub fn convert(value: FieldValue, target: ValueKind) -> Result<FieldValue, ConversionError> {
    let Some(source) = value.kind() else {
        return Err(ConversionError::Null);
    };
    if source == target {
        return Ok(value);
    }

    match target {
        ValueKind::Enum(info) => to_enum(&value, info),
        ValueKind::Text => Ok(FieldValue::Text(value.to_string())),
        ValueKind::Bool => to_bool(&value).map(FieldValue::Bool),
        ValueKind::Uuid => match &value {
            FieldValue::Text(text) => Uuid::parse_str(text.trim())
                .map(FieldValue::Uuid)
                .map_err(|_| ConversionError::Parse {
                    text: text.clone(),
                    to: target,
                }),
            _ => Err(ConversionError::Unsupported {
                from: source,
                to: target,
            }),
        },
        ValueKind::F32 => {
            let float = to_float(&value, target)?;
            narrow_float(float)
        }
        ValueKind::F64 => to_float(&value, target).map(FieldValue::F64),
        _ => {
            let integer = to_integer(&value, target)?;
            narrow(integer, target)
        }
    }
}

fn to_integer(value: &FieldValue, target: ValueKind) -> Result<i128, ConversionError> {
    match value {
        FieldValue::Bool(v) => Ok(i128::from(*v)),
        FieldValue::I8(v) => Ok(i128::from(*v)),
        FieldValue::I16(v) => Ok(i128::from(*v)),
        FieldValue::I32(v) => Ok(i128::from(*v)),
        FieldValue::I64(v) => Ok(i128::from(*v)),
        FieldValue::U8(v) => Ok(i128::from(*v)),
        FieldValue::U16(v) => Ok(i128::from(*v)),
        FieldValue::U32(v) => Ok(i128::from(*v)),
        FieldValue::U64(v) => Ok(i128::from(*v)),
        FieldValue::F32(v) => float_to_integer(f64::from(*v), target),
        FieldValue::F64(v) => float_to_integer(*v, target),
        FieldValue::Enum(v) => Ok(v.discriminant),
        FieldValue::Text(text) => text
            .trim()
            .parse::<i128>()
            .map_err(|_| ConversionError::Parse {
                text: text.clone(),
                to: target,
            }),
        FieldValue::Null => Err(ConversionError::Null),
        FieldValue::Uuid(_) => Err(ConversionError::Unsupported {
            from: ValueKind::Uuid,
            to: target,
        }),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn float_to_integer(value: f64, target: ValueKind) -> Result<i128, ConversionError> {
    let rounded = value.round_ties_even();
    if !rounded.is_finite() || rounded < i128::MIN as f64 || rounded > i128::MAX as f64 {
        return Err(ConversionError::OutOfRange {
            value: value.to_string(),
            to: target,
        });
    }
    Ok(rounded as i128)
}

fn narrow(value: i128, target: ValueKind) -> Result<FieldValue, ConversionError> {
    let narrowed = match target {
        ValueKind::I8 => i8::try_from(value).map(FieldValue::I8),
        ValueKind::I16 => i16::try_from(value).map(FieldValue::I16),
        ValueKind::I32 => i32::try_from(value).map(FieldValue::I32),
        ValueKind::I64 => i64::try_from(value).map(FieldValue::I64),
        ValueKind::U8 => u8::try_from(value).map(FieldValue::U8),
        ValueKind::U16 => u16::try_from(value).map(FieldValue::U16),
        ValueKind::U32 => u32::try_from(value).map(FieldValue::U32),
        ValueKind::U64 => u64::try_from(value).map(FieldValue::U64),
        other => {
            return Err(ConversionError::Unsupported {
                from: ValueKind::I64,
                to: other,
            });
        }
    };
    narrowed.map_err(|_| ConversionError::OutOfRange {
        value: value.to_string(),
        to: target,
    })
}

#[allow(clippy::cast_precision_loss)]
fn to_float(value: &FieldValue, target: ValueKind) -> Result<f64, ConversionError> {
    match value {
        FieldValue::Bool(v) => Ok(if *v { 1.0 } else { 0.0 }),
        FieldValue::I8(v) => Ok(f64::from(*v)),
        FieldValue::I16(v) => Ok(f64::from(*v)),
        FieldValue::I32(v) => Ok(f64::from(*v)),
        FieldValue::I64(v) => Ok(*v as f64),
        FieldValue::U8(v) => Ok(f64::from(*v)),
        FieldValue::U16(v) => Ok(f64::from(*v)),
        FieldValue::U32(v) => Ok(f64::from(*v)),
        FieldValue::U64(v) => Ok(*v as f64),
        FieldValue::F32(v) => Ok(f64::from(*v)),
        FieldValue::F64(v) => Ok(*v),
        FieldValue::Enum(v) => Ok(v.discriminant as f64),
        FieldValue::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| ConversionError::Parse {
                text: text.clone(),
                to: target,
            }),
        FieldValue::Null => Err(ConversionError::Null),
        FieldValue::Uuid(_) => Err(ConversionError::Unsupported {
            from: ValueKind::Uuid,
            to: target,
        }),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn narrow_float(value: f64) -> Result<FieldValue, ConversionError> {
    if value.is_finite() && value.abs() > f64::from(f32::MAX) {
        return Err(ConversionError::OutOfRange {
            value: value.to_string(),
            to: ValueKind::F32,
        });
    }
    Ok(FieldValue::F32(value as f32))
}

fn to_bool(value: &FieldValue) -> Result<bool, ConversionError> {
    match value {
        FieldValue::Bool(v) => Ok(*v),
        FieldValue::F32(v) => Ok(*v != 0.0),
        FieldValue::F64(v) => Ok(*v != 0.0),
        FieldValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.eq_ignore_ascii_case("true") {
                Ok(true)
            } else if trimmed.eq_ignore_ascii_case("false") {
                Ok(false)
            } else {
                Err(ConversionError::Parse {
                    text: text.clone(),
                    to: ValueKind::Bool,
                })
            }
        }
        FieldValue::Uuid(_) => Err(ConversionError::Unsupported {
            from: ValueKind::Uuid,
            to: ValueKind::Bool,
        }),
        other => to_integer(other, ValueKind::Bool).map(|n| n != 0),
    }
}

fn to_enum(value: &FieldValue, info: &'static EnumInfo) -> Result<FieldValue, ConversionError> {
    let target = ValueKind::Enum(info);
    let unknown = |value: String| ConversionError::UnknownMember {
        value,
        enum_name: info.name,
    };

    let code = match value {
        FieldValue::Text(text) => {
            let trimmed = text.trim();
            match info.discriminant_of(trimmed) {
                Some(discriminant) => return Ok(member(info, discriminant)),
                None => trimmed
                    .parse::<i128>()
                    .map_err(|_| unknown(text.clone()))?,
            }
        }
        other => to_integer(other, target)?,
    };

    // Codes must fit the enum's representation before they are looked up.
    narrow(code, info.repr)?;
    if !info.is_defined(code) {
        return Err(unknown(code.to_string()));
    }
    Ok(member(info, code))
}

fn member(info: &'static EnumInfo, discriminant: i128) -> FieldValue {
    FieldValue::Enum(EnumValue { info, discriminant })
}
