//! Binding containers as storage parameters and scanning them back.
//!
//! Drivers exchange dynamically typed [`Value`]s. Binding passes the inner
//! value through untouched, and scanning accepts either the null marker or a
//! value whose runtime type is exactly `T`. Nothing is coerced: an `i32`
//! column never scans into an `Option<i64>`.

use std::any::{self, Any};
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::option::{Absent, Option, Present};

/// A value whose concrete type is only known at runtime, tagged with that
/// type's name for diagnostics.
pub struct DynValue {
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl DynValue {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// A storage-layer value: the null marker or a dynamically typed value.
#[derive(Default)]
pub enum Value {
    #[default]
    Null,
    Dyn(DynValue),
}

impl Value {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Value::Dyn(DynValue {
            type_name: any::type_name::<T>(),
            value: Box::new(value),
        })
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Runtime type of the carried value, `"null"` for the null marker.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Dyn(value) => value.type_name(),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> std::option::Option<&T> {
        match self {
            Value::Null => None,
            Value::Dyn(dyn_value) => dyn_value.value.downcast_ref::<T>(),
        }
    }

    /// Extracts a `T`, handing the value back untouched on a type mismatch.
    pub fn downcast<T: Any>(self) -> std::result::Result<T, Value> {
        match self {
            Value::Null => Err(Value::Null),
            Value::Dyn(DynValue { type_name, value }) => match value.downcast::<T>() {
                Ok(value) => Ok(*value),
                Err(value) => Err(Value::Dyn(DynValue { type_name, value })),
            },
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Dyn(value) => f.debug_tuple("Dyn").field(&value.type_name()).finish(),
        }
    }
}

/// Conversion into a value a driver can bind as a query parameter.
pub trait ToParameter {
    fn to_parameter(&self) -> Result<Value>;
}

/// Population from a value a driver returned.
pub trait Scan {
    fn scan(&mut self, value: Value) -> Result<()>;
}

impl<T: Clone + Any + Send + Sync> ToParameter for Option<T> {
    fn to_parameter(&self) -> Result<Value> {
        Ok(match self {
            Present(value) => Value::new(value.clone()),
            Absent => Value::Null,
        })
    }
}

impl<T: Any + Send + Sync> Scan for Option<T> {
    /// Null scans as absent and a value of exactly type `T` as present. Any
    /// other type is rejected and leaves the container absent.
    fn scan(&mut self, value: Value) -> Result<()> {
        if value.is_null() {
            *self = Absent;
            return Ok(());
        }

        match value.downcast::<T>() {
            Ok(value) => {
                trace!(ty = any::type_name::<T>(), "scanned present value");
                *self = Present(value);
                Ok(())
            }
            Err(value) => {
                let found = value.type_name();
                debug!(expected = any::type_name::<T>(), found, "rejecting scanned value");
                *self = Absent;
                Err(Error::TypeMismatch {
                    expected: any::type_name::<T>(),
                    found,
                })
            }
        }
    }
}
