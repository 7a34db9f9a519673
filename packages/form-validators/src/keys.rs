//! Primary-key coercion and comparison.
//!
//! Submitted key values often arrive as text (hidden form inputs) while the
//! stored value is typed, so both sides are coerced to the column's native
//! type before comparing.

use sea_orm::prelude::Uuid;
use sea_orm::{
    ColumnTrait, ColumnType, EntityTrait, IdenStatic, Iterable, ModelTrait, PrimaryKeyToColumn,
    Value,
};
use tracing::warn;

use crate::form::Form;

/// A key value in comparable native form.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyValue {
    Int(i128),
    Bool(bool),
    Text(String),
    /// Column types without a coercion rule compare by raw value.
    Raw(Value),
}

pub fn is_null(value: &Value) -> bool {
    *value == value.as_null()
}

/// Present means neither null nor blank text.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::String(Some(s)) => !s.trim().is_empty(),
        _ => !is_null(value),
    }
}

/// Coerce `value` to the native representation of `column_type`.
///
/// Returns `None` for null values and for values that cannot be converted.
pub fn coerce(value: &Value, column_type: &ColumnType) -> Option<KeyValue> {
    if is_null(value) {
        return None;
    }

    match column_type {
        ColumnType::TinyInteger
        | ColumnType::SmallInteger
        | ColumnType::Integer
        | ColumnType::BigInteger
        | ColumnType::TinyUnsigned
        | ColumnType::SmallUnsigned
        | ColumnType::Unsigned
        | ColumnType::BigUnsigned => as_int(value).map(KeyValue::Int),
        ColumnType::Boolean => as_bool(value).map(KeyValue::Bool),
        ColumnType::Char(_) | ColumnType::String(_) | ColumnType::Text => {
            as_text(value).map(KeyValue::Text)
        }
        ColumnType::Uuid => as_uuid(value).map(|u| KeyValue::Text(u.to_string())),
        _ => Some(KeyValue::Raw(value.clone())),
    }
}

fn as_int(value: &Value) -> Option<i128> {
    match value {
        Value::TinyInt(Some(v)) => Some(i128::from(*v)),
        Value::SmallInt(Some(v)) => Some(i128::from(*v)),
        Value::Int(Some(v)) => Some(i128::from(*v)),
        Value::BigInt(Some(v)) => Some(i128::from(*v)),
        Value::TinyUnsigned(Some(v)) => Some(i128::from(*v)),
        Value::SmallUnsigned(Some(v)) => Some(i128::from(*v)),
        Value::Unsigned(Some(v)) => Some(i128::from(*v)),
        Value::BigUnsigned(Some(v)) => Some(i128::from(*v)),
        Value::Bool(Some(b)) => Some(i128::from(*b)),
        Value::Double(Some(f)) if f.fract() == 0.0 => Some(*f as i128),
        Value::Float(Some(f)) if f.fract() == 0.0 => Some(*f as i128),
        Value::String(Some(s)) => s.trim().parse().ok(),
        Value::Char(Some(c)) => c.to_digit(10).map(i128::from),
        _ => None,
    }
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(Some(b)) => Some(*b),
        Value::String(Some(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "1" | "yes" | "on" => Some(true),
            "false" | "f" | "0" | "no" | "off" => Some(false),
            _ => None,
        },
        other => as_int(other).and_then(|n| match n {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        }),
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(Some(s)) => Some(s.as_str().to_owned()),
        Value::Char(Some(c)) => Some(c.to_string()),
        Value::Uuid(Some(u)) => Some(u.to_string()),
        other => as_int(other).map(|n| n.to_string()),
    }
}

fn as_uuid(value: &Value) -> Option<Uuid> {
    match value {
        Value::Uuid(Some(u)) => Some(**u),
        Value::String(Some(s)) => Uuid::parse_str(s.trim()).ok(),
        _ => None,
    }
}

/// Convert a non-null submitted `value` into a query value of `column_type`.
///
/// Uses the same rules as [`coerce`]. `None` means the value cannot be stored
/// in the column, including integers outside the column's range.
pub fn column_value(value: &Value, column_type: &ColumnType) -> Option<Value> {
    let converted = match column_type {
        ColumnType::TinyInteger => Value::from(i8::try_from(as_int(value)?).ok()?),
        ColumnType::SmallInteger => Value::from(i16::try_from(as_int(value)?).ok()?),
        ColumnType::Integer => Value::from(i32::try_from(as_int(value)?).ok()?),
        ColumnType::BigInteger => Value::from(i64::try_from(as_int(value)?).ok()?),
        ColumnType::TinyUnsigned => Value::from(u8::try_from(as_int(value)?).ok()?),
        ColumnType::SmallUnsigned => Value::from(u16::try_from(as_int(value)?).ok()?),
        ColumnType::Unsigned => Value::from(u32::try_from(as_int(value)?).ok()?),
        ColumnType::BigUnsigned => Value::from(u64::try_from(as_int(value)?).ok()?),
        ColumnType::Boolean => Value::from(as_bool(value)?),
        ColumnType::Char(_) | ColumnType::String(_) | ColumnType::Text => {
            Value::from(as_text(value)?)
        }
        ColumnType::Uuid => Value::from(as_uuid(value)?),
        _ => value.clone(),
    };
    Some(converted)
}

/// Primary-key columns of `E`, in declaration order.
pub fn primary_key_columns<E: EntityTrait>() -> Vec<E::Column> {
    E::PrimaryKey::iter().map(|pk| pk.into_column()).collect()
}

/// Whether two records of `E` share a primary key.
pub fn same_identity<E: EntityTrait>(a: &E::Model, b: &E::Model) -> bool {
    let columns = primary_key_columns::<E>();
    !columns.is_empty() && columns.into_iter().all(|column| a.get(column) == b.get(column))
}

/// Whether the form carries the full primary key of `found`.
///
/// Every primary-key column must be present on both sides and equal after
/// coercion; a single mismatching or missing column means "not an update".
pub fn submits_primary_key_of<E, F>(form: &F, found: &E::Model) -> bool
where
    E: EntityTrait,
    F: Form<E::Model> + ?Sized,
{
    let columns = primary_key_columns::<E>();
    if columns.is_empty() {
        return false;
    }

    columns.into_iter().all(|column| {
        let submitted = match form.data(column.as_str()) {
            Some(value) if is_present(&value) => value,
            _ => return false,
        };
        let stored = found.get(column);
        if !is_present(&stored) {
            return false;
        }

        let def = column.def();
        let column_type = def.get_column_type();
        match (coerce(&submitted, column_type), coerce(&stored, column_type)) {
            (Some(submitted), Some(stored)) => submitted == stored,
            _ => {
                warn!(
                    column = column.as_str(),
                    "primary key value could not be coerced; treating as a different record"
                );
                false
            }
        }
    })
}
