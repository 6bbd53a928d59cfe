//! TableRow trait, cell values, and Column descriptors.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use lintel_view::Node;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// The value a record yields for one field.
///
/// Carries the total order used when sorting a column and the text
/// coercion used when a column has no custom renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing field; displays as nothing and sorts first.
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Total order across cell values.
    ///
    /// Values of the same kind compare naturally (floats by total order,
    /// text lexicographically). A column is expected to be homogeneous;
    /// mixed kinds fall back to a fixed kind rank so sorting stays a
    /// total order regardless.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Empty, Empty) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (Text(a), Text(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Int(_) | CellValue::Float(_) => 2,
            CellValue::Text(_) => 3,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(x) => write!(f, "{x}"),
            CellValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u32> for CellValue {
    fn from(i: u32) -> Self {
        Self::Int(i as i64)
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Trait for records that can be displayed as rows in a Table.
///
/// A record exposes a stable identity and named-field access; the table
/// never looks at a record beyond the fields its columns name.
///
/// # Example
///
/// ```ignore
/// impl TableRow for User {
///     fn id(&self) -> String {
///         self.id.clone()
///     }
///
///     fn field(&self, name: &str) -> CellValue {
///         match name {
///             "name" => self.name.as_str().into(),
///             "email" => self.email.as_str().into(),
///             "age" => self.age.into(),
///             _ => CellValue::Empty,
///         }
///     }
/// }
/// ```
pub trait TableRow: Send + Sync + Clone + 'static {
    /// Unique identifier for this row.
    ///
    /// Selection is keyed by this identity, never by comparing record
    /// contents, so duplicate-valued records stay unambiguous.
    fn id(&self) -> String;

    /// The value of a named field, [`CellValue::Empty`] when unknown.
    fn field(&self, name: &str) -> CellValue;
}

/// Custom cell renderer: receives the selected field value and the full
/// record, and is fully responsible for its own presentation.
pub type CellRenderer<R> = Arc<dyn Fn(&CellValue, &R) -> Node + Send + Sync>;

/// Column configuration.
///
/// Columns define the structure of the table: an identifying key, the
/// header title, which record field the column shows and sorts by (the
/// key itself unless overridden), a fixed width, alignment, whether the
/// column is sortable, and an optional custom cell renderer.
///
/// # Example
///
/// ```ignore
/// let columns = vec![
///     Column::new("name", "Name", 18).sortable(),
///     Column::new("age", "Age", 5).align(Alignment::Right).sortable(),
///     Column::new("status", "Status", 10)
///         .render_with(|value, _user| status_badge(value)),
/// ];
/// ```
pub struct Column<R> {
    /// Identifying key
    pub key: String,
    /// Column header title
    pub title: String,
    /// Record field this column selects; defaults to `key`
    pub field: String,
    /// Column width in terminal columns (fixed)
    pub width: u16,
    /// Horizontal alignment
    pub align: Alignment,
    /// Whether this column is sortable
    pub sortable: bool,
    /// Optional custom cell renderer
    pub render: Option<CellRenderer<R>>,
}

impl<R> Column<R> {
    /// Create a new column with explicit width.
    ///
    /// The key doubles as the field selector until [`Column::field`]
    /// overrides it.
    pub fn new(key: impl Into<String>, title: impl Into<String>, width: u16) -> Self {
        let key = key.into();
        Self {
            field: key.clone(),
            key,
            title: title.into(),
            width,
            align: Alignment::Left,
            sortable: false,
            render: None,
        }
    }

    /// Select a different record field than the key.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.field = name.into();
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    ///
    /// Sortable columns show sort indicators in the header and respond
    /// to header clicks.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Attach a custom cell renderer.
    ///
    /// The table places the returned node in the cell without
    /// interpreting it.
    pub fn render_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&CellValue, &R) -> Node + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(f));
        self
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            field: self.field.clone(),
            width: self.width,
            align: self.align,
            sortable: self.sortable,
            render: self.render.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("field", &self.field)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("render", &self.render.is_some())
            .finish()
    }
}
