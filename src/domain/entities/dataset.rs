use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub i64);

impl From<i64> for RowId {
    fn from(value: i64) -> Self {
        RowId(value)
    }
}

impl From<RowId> for i64 {
    fn from(value: RowId) -> Self {
        value.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A typed cell value.
///
/// Values read from files are inferred with [`CellValue::infer`]; rows built
/// in code can use the `From` impls.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Infers a typed value from raw text.
    ///
    /// Integers with a leading zero (`"0050"`) stay text so codes keep their
    /// padding. Non-finite floats stay text as well.
    pub fn infer(raw: &str) -> CellValue {
        let trimmed = raw.trim();
        if trimmed.is_empty() || has_padding_zero(trimmed) {
            return CellValue::Text(raw.to_string());
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return CellValue::Integer(value);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => CellValue::Float(value),
            _ => CellValue::Text(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Integer(value) => Some(*value as f64),
            CellValue::Float(value) => Some(*value),
            CellValue::Text(_) => None,
        }
    }

    /// Native ordering: numbers numerically, text lexicographically, numbers
    /// before text when a column mixes both.
    pub fn native_cmp(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Integer(a), CellValue::Integer(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Text(_), _) => Ordering::Greater,
            (_, CellValue::Text(_)) => Ordering::Less,
            (a, b) => {
                let a = a.as_number().unwrap_or_default();
                let b = b.as_number().unwrap_or_default();
                a.total_cmp(&b)
            }
        }
    }
}

fn has_padding_zero(text: &str) -> bool {
    let digits = text.strip_prefix(&['-', '+'][..]).unwrap_or(text);
    digits.len() > 1 && digits.starts_with('0') && !digits.starts_with("0.")
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(value) => write!(f, "{value}"),
            CellValue::Float(value) => write!(f, "{value}"),
            CellValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// One record of a dataset. Never mutated once shared with a view.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: RowId,
    fields: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: CellValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

pub type SharedRow = Arc<Row>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub selector: String,
}

impl Column {
    pub fn new(name: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selector: selector.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub columns: Vec<Column>,
    pub rows: Vec<SharedRow>,
}

impl Dataset {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows: rows.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
