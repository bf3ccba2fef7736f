use super::value::{EnumInfo, FieldType, FieldValue, ValueKind};
use std::fmt;
use uuid::Uuid;

/// Reads a field out of an instance.
pub type Getter<T> = fn(&T) -> FieldValue;

/// Writes a field into an instance, returning `false` when the value has the wrong shape.
pub type Setter<T> = fn(&mut T, FieldValue) -> bool;

/// Named accessor pair for one field of `T`.
///
/// A field without a getter is not readable (it can never be a mapping source),
/// and a field without a setter is not writable.
pub struct Field<T> {
    pub name: &'static str,
    pub ty: FieldType,
    pub getter: Option<Getter<T>>,
    pub setter: Option<Setter<T>>,
}

impl<T> Field<T> {
    #[must_use]
    pub const fn new(
        name: &'static str,
        ty: FieldType,
        getter: Option<Getter<T>>,
        setter: Option<Setter<T>>,
    ) -> Self {
        Self {
            name,
            ty,
            getter,
            setter,
        }
    }

    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.getter.is_some()
    }

    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.setter.is_some()
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("readable", &self.is_readable())
            .field("writable", &self.is_writable())
            .finish()
    }
}

/// A struct whose fields the [`Mapper`](super::Mapper) can read and write by name.
///
/// Usually implemented with `#[derive(Mappable)]`.
pub trait Mappable: Sized + 'static {
    /// Accessors for every field the type exposes, in declaration order.
    fn fields() -> Vec<Field<Self>>;
}

/// A field type that converts to and from [`FieldValue`].
pub trait MapValue: Sized {
    fn field_type() -> FieldType;

    fn to_value(&self) -> FieldValue;

    /// Returns `None` when `value` does not fit this type.
    fn from_value(value: FieldValue) -> Option<Self>;
}

/// A fieldless enum with a static member table. Implemented by `#[derive(MapEnum)]`.
pub trait MapEnum {
    fn enum_info() -> &'static EnumInfo;
}

macro_rules! impl_map_value {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl MapValue for $ty {
                fn field_type() -> FieldType {
                    FieldType::required(ValueKind::$variant)
                }

                fn to_value(&self) -> FieldValue {
                    FieldValue::$variant(*self)
                }

                fn from_value(value: FieldValue) -> Option<Self> {
                    match value {
                        FieldValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_map_value! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Uuid => Uuid,
}

impl MapValue for String {
    fn field_type() -> FieldType {
        FieldType::required(ValueKind::Text)
    }

    fn to_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: MapValue> MapValue for Option<T> {
    fn field_type() -> FieldType {
        FieldType::nullable(T::field_type().kind)
    }

    fn to_value(&self) -> FieldValue {
        self.as_ref().map_or(FieldValue::Null, MapValue::to_value)
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_round_trips_null() {
        assert_eq!(None::<i32>.to_value(), FieldValue::Null);
        assert_eq!(Option::<i32>::from_value(FieldValue::Null), Some(None));
        assert_eq!(Option::<i32>::from_value(FieldValue::I32(7)), Some(Some(7)));
        assert_eq!(Option::<i32>::from_value(FieldValue::I64(7)), None);
    }

    #[test]
    fn test_required_types_reject_null() {
        assert_eq!(String::from_value(FieldValue::Null), None);
        assert_eq!(i32::from_value(FieldValue::Null), None);
        assert!(!String::field_type().nullable);
        assert!(Option::<String>::field_type().nullable);
        assert_eq!(Option::<String>::field_type().kind, ValueKind::Text);
    }
}
