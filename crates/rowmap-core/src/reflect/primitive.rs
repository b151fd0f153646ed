use crate::{stmt::Value, Error, Result};

/// A leaf value that maps to a single column.
pub trait Primitive: Sized + Send + Sync + 'static {
    /// Name used in conversion errors.
    const TYPE_NAME: &'static str;

    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> Result<Self>;
}

impl Primitive for bool {
    const TYPE_NAME: &'static str = "bool";

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            _ => Err(Error::type_conversion(value, Self::TYPE_NAME)),
        }
    }
}

impl Primitive for i32 {
    const TYPE_NAME: &'static str = "i32";

    fn to_value(&self) -> Value {
        Value::I32(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::I32(v) => Ok(v),
            Value::I64(v) => {
                i32::try_from(v).map_err(|_| Error::type_conversion(value, Self::TYPE_NAME))
            }
            _ => Err(Error::type_conversion(value, Self::TYPE_NAME)),
        }
    }
}

impl Primitive for i64 {
    const TYPE_NAME: &'static str = "i64";

    fn to_value(&self) -> Value {
        Value::I64(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value.as_i64() {
            Some(v) => Ok(v),
            None => Err(Error::type_conversion(value, Self::TYPE_NAME)),
        }
    }
}

impl Primitive for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I32(v) => Ok(v as f64),
            _ => Err(Error::type_conversion(value, Self::TYPE_NAME)),
        }
    }
}

impl Primitive for String {
    const TYPE_NAME: &'static str = "String";

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(Error::type_conversion(value, Self::TYPE_NAME)),
        }
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }
}
