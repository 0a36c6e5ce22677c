//! Renderable records shared by the table and CSV renderers

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, SpaceError};

/// Header orders for curated shapes, checked in this order.
/// A record containing every key of an entry is rendered with exactly those columns.
const CURATED_ORDERS: &[&[&str]] = &[
    &["organization", "role", "is_default"],
    &["cloud_provider", "region", "zone"],
    &["version", "is_default"],
    &[
        "project",
        "name",
        "cloud_provider",
        "region",
        "kubernetes_version",
        "compute_quota",
        "memory_quota_gb",
        "status",
    ],
    &[
        "name",
        "cloud_provider",
        "region",
        "kubernetes_version",
        "compute_quota",
        "memory_quota_gb",
        "status",
    ],
];

/// Field name to value mapping for one row
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every serialized field of `value`, which must serialize to a JSON object
    pub fn reflect<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(Self(map.into_iter().collect())),
            other => Err(SpaceError::Config(format!(
                "unsupported data type for table/CSV formatting: {}",
                type_name(&other)
            ))),
        }
    }

    /// Column order: a curated order if the record carries all of its keys,
    /// otherwise every key alphabetically
    pub fn headers(&self) -> Vec<String> {
        CURATED_ORDERS
            .iter()
            .find(|order| order.iter().all(|key| self.0.contains_key(*key)))
            .map(|order| order.iter().map(|key| key.to_string()).collect())
            .unwrap_or_else(|| self.0.keys().cloned().collect())
    }

    /// Cell text for `key`; absent fields render empty
    pub fn cell(&self, key: &str) -> String {
        self.0.get(key).map(display_value).unwrap_or_default()
    }
}

impl From<serde_json::Map<String, Value>> for Record {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(map.into_iter().collect())
    }
}

/// Scalar-to-string conversion used for cells
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Conversion of one domain object into a row.
///
/// Types with a friendlier table shape override [`ToRecord::curated_record`];
/// everything else shows every serialized field.
pub trait ToRecord: Serialize {
    fn curated_record(&self) -> Option<Record> {
        None
    }

    fn to_record(&self) -> Result<Record> {
        match self.curated_record() {
            Some(record) => Ok(record),
            None => Record::reflect(self),
        }
    }
}

impl ToRecord for Record {
    fn curated_record(&self) -> Option<Record> {
        Some(self.clone())
    }
}

impl ToRecord for Value {}

/// Anything the formatter accepts: a single object, a list or an optional value
pub trait Renderable: Serialize {
    fn records(&self) -> Result<Vec<Record>>;
}

impl<T: ToRecord> Renderable for [T] {
    fn records(&self) -> Result<Vec<Record>> {
        self.iter().map(ToRecord::to_record).collect()
    }
}

impl<T: ToRecord> Renderable for Vec<T> {
    fn records(&self) -> Result<Vec<Record>> {
        self.as_slice().records()
    }
}

impl<T: ToRecord> Renderable for Option<T> {
    fn records(&self) -> Result<Vec<Record>> {
        self.iter().map(ToRecord::to_record).collect()
    }
}

impl Renderable for Value {
    fn records(&self) -> Result<Vec<Record>> {
        match self {
            Value::Array(items) => items.records(),
            other => Ok(vec![other.to_record()?]),
        }
    }
}

/// Implement [`Renderable`] for single domain objects
macro_rules! renderable_item {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::output::Renderable for $ty {
                fn records(&self) -> $crate::error::Result<Vec<$crate::output::Record>> {
                    Ok(vec![$crate::output::ToRecord::to_record(self)?])
                }
            }
        )+
    };
}
pub(crate) use renderable_item;

renderable_item!(Record);
