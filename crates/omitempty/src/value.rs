use std::collections::HashMap;

pub use crate::number::Number;

/// A structured value with named fields in declaration order.
///
/// Structurally this is a mapping, but it comes from a statically-typed
/// source (a Rust struct, a struct variant, or a [`Fields`] implementor).
/// Pruning always turns it into a [`Value::Object`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub name: Option<String>,
    pub fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
    Record(Record),
}

impl Value {
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a key in an object or a field in a record.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let entries = match self {
            Value::Object(entries) => entries,
            Value::Record(r) => &r.fields,
            _ => return None,
        };
        entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Number of keyed entries for objects and records, `None` otherwise.
    pub fn len_entries(&self) -> Option<usize> {
        match self {
            Value::Object(entries) => Some(entries.len()),
            Value::Record(r) => Some(r.fields.len()),
            _ => None,
        }
    }

    pub fn from_fields<F: Fields + ?Sized>(source: &F) -> Value {
        Value::Record(Record {
            name: source.record_name().map(str::to_string),
            fields: source.fields(),
        })
    }
}

/// Ordered object entries with unique keys.
///
/// Inserting a key already present replaces its value in place; lookups go
/// through a side index so building an n-key object stays linear.
#[derive(Debug, Default)]
pub(crate) struct Entries {
    entries: Vec<(String, Value)>,
    slots: HashMap<String, usize>,
}

impl Entries {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
            slots: HashMap::with_capacity(n),
        }
    }

    /// Returns true when `key` was already present and its value replaced.
    pub(crate) fn insert(&mut self, key: String, value: Value) -> bool {
        if let Some(&slot) = self.slots.get(&key) {
            self.entries[slot].1 = value;
            true
        } else {
            self.slots.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
            false
        }
    }

    pub(crate) fn into_vec(self) -> Vec<(String, Value)> {
        self.entries
    }
}

/// Explicit field enumeration for record-like types.
///
/// Types that do not go through serde can implement this to be pruned as a
/// [`Record`] via [`Value::from_fields`].
pub trait Fields {
    fn fields(&self) -> Vec<(String, Value)>;

    fn record_name(&self) -> Option<&str> {
        None
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Value::Number(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

macro_rules! from_number {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Number(Number::from(v))
            }
        }
    )*};
}

from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
