use std::fmt;
use uuid::Uuid;

/// The scalar shape of a mappable field, with any `Option` wrapper removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Text,
    Uuid,
    Enum(&'static EnumInfo),
}

impl ValueKind {
    #[must_use]
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::I8 => f.write_str("i8"),
            Self::I16 => f.write_str("i16"),
            Self::I32 => f.write_str("i32"),
            Self::I64 => f.write_str("i64"),
            Self::U8 => f.write_str("u8"),
            Self::U16 => f.write_str("u16"),
            Self::U32 => f.write_str("u32"),
            Self::U64 => f.write_str("u64"),
            Self::F32 => f.write_str("f32"),
            Self::F64 => f.write_str("f64"),
            Self::Text => f.write_str("text"),
            Self::Uuid => f.write_str("uuid"),
            Self::Enum(info) => write!(f, "enum {}", info.name),
        }
    }
}

/// Declared type of a field: its underlying kind and whether it can hold null.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldType {
    pub kind: ValueKind,
    pub nullable: bool,
}

impl FieldType {
    #[must_use]
    pub const fn required(kind: ValueKind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    #[must_use]
    pub const fn nullable(kind: ValueKind) -> Self {
        Self {
            kind,
            nullable: true,
        }
    }
}

/// Static description of a fieldless enum, generated by `#[derive(MapEnum)]`.
#[derive(Debug, PartialEq)]
pub struct EnumInfo {
    /// Rust type name, used to tell enums apart.
    pub name: &'static str,
    /// Integer representation used for numeric codes.
    pub repr: ValueKind,
    /// Member names paired with their discriminants, in declaration order.
    ///
    /// Discriminants are widened through the representation, so every `u64`
    /// and `i64` code is carried exactly.
    pub variants: &'static [(&'static str, i128)],
}

impl EnumInfo {
    /// Finds a member by name, ignoring case.
    #[must_use]
    pub fn discriminant_of(&self, name: &str) -> Option<i128> {
        self.variants
            .iter()
            .find(|(variant, _)| names_match(variant, name))
            .map(|&(_, discriminant)| discriminant)
    }

    #[must_use]
    pub fn name_of(&self, discriminant: i128) -> Option<&'static str> {
        self.variants
            .iter()
            .find(|&&(_, value)| value == discriminant)
            .map(|&(name, _)| name)
    }

    #[must_use]
    pub fn is_defined(&self, discriminant: i128) -> bool {
        self.name_of(discriminant).is_some()
    }
}

/// Compares field and member names ignoring case, with Unicode lowercase folding.
pub(crate) fn names_match(left: &str, right: &str) -> bool {
    if left.is_ascii() && right.is_ascii() {
        return left.eq_ignore_ascii_case(right);
    }
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

/// An enum member carried as its descriptor plus discriminant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnumValue {
    pub info: &'static EnumInfo,
    pub discriminant: i128,
}

impl EnumValue {
    /// Member name, or `None` when the discriminant is not declared.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        self.info.name_of(self.discriminant)
    }
}

/// A dynamically typed field value read from, or written into, a mappable struct.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Text(String),
    Uuid(Uuid),
    Enum(EnumValue),
}

impl FieldValue {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Kind of the carried value; `None` for null.
    #[must_use]
    pub fn kind(&self) -> Option<ValueKind> {
        let kind = match self {
            Self::Null => return None,
            Self::Bool(_) => ValueKind::Bool,
            Self::I8(_) => ValueKind::I8,
            Self::I16(_) => ValueKind::I16,
            Self::I32(_) => ValueKind::I32,
            Self::I64(_) => ValueKind::I64,
            Self::U8(_) => ValueKind::U8,
            Self::U16(_) => ValueKind::U16,
            Self::U32(_) => ValueKind::U32,
            Self::U64(_) => ValueKind::U64,
            Self::F32(_) => ValueKind::F32,
            Self::F64(_) => ValueKind::F64,
            Self::Text(_) => ValueKind::Text,
            Self::Uuid(_) => ValueKind::Uuid,
            Self::Enum(value) => ValueKind::Enum(value.info),
        };
        Some(kind)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Uuid(v) => write!(f, "{v}"),
            Self::Enum(value) => match value.name() {
                Some(name) => f.write_str(name),
                None => write!(f, "{}", value.discriminant),
            },
        }
    }
}
