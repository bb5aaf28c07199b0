//! Column types and the loose options shape used by the migration DSL.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The closed set of abstract column types.
///
/// Each dialect maps these onto its own concrete SQL keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Variable-length character data (`VARCHAR`).
    String,
    /// Unbounded character data.
    Text,
    /// Integer, width selected by `limit`.
    Integer,
    /// Floating point number.
    Float,
    /// Fixed-precision decimal, sized by `precision`/`scale`.
    Decimal,
    /// Date and time of day.
    DateTime,
    /// Timestamp.
    Timestamp,
    /// Time of day.
    Time,
    /// Calendar date.
    Date,
    /// Variable-length binary data (`VARBINARY`).
    Binary,
    /// Boolean flag.
    Boolean,
}

impl ColumnType {
    /// All supported types, in declaration order.
    pub const ALL: [ColumnType; 11] = [
        ColumnType::String,
        ColumnType::Text,
        ColumnType::Integer,
        ColumnType::Float,
        ColumnType::Decimal,
        ColumnType::DateTime,
        ColumnType::Timestamp,
        ColumnType::Time,
        ColumnType::Date,
        ColumnType::Binary,
        ColumnType::Boolean,
    ];

    /// Parse a lowercase type keyword, `None` for anything unknown.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "text" => Some(Self::Text),
            "integer" => Some(Self::Integer),
            "float" => Some(Self::Float),
            "decimal" => Some(Self::Decimal),
            "datetime" => Some(Self::DateTime),
            "timestamp" => Some(Self::Timestamp),
            "time" => Some(Self::Time),
            "date" => Some(Self::Date),
            "binary" => Some(Self::Binary),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }

    /// The lowercase keyword for this type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::DateTime => "datetime",
            Self::Timestamp => "timestamp",
            Self::Time => "time",
            Self::Date => "date",
            Self::Binary => "binary",
            Self::Boolean => "boolean",
        }
    }

    /// Whether default values render as quoted string literals.
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::String | Self::Text)
    }
}

/// A fully resolved column definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Abstract type, mapped per dialect.
    #[serde(rename = "type")]
    pub ty: ColumnType,
    /// Width hint: character length for string/binary, byte width for integer.
    pub limit: Option<u32>,
    /// Total digits for decimal columns.
    pub precision: Option<u32>,
    /// Fractional digits for decimal columns; only honored with `precision`.
    pub scale: Option<u32>,
    /// Emit `NOT NULL`.
    pub not_null: bool,
    /// Emit `AUTO_INCREMENT` where the dialect supports it.
    pub auto_increment: bool,
    /// Default value, quoted for textual types.
    pub default: Option<Value>,
}

impl Column {
    /// A bare column of the given type with no attributes set.
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
            limit: None,
            precision: None,
            scale: None,
            not_null: false,
            auto_increment: false,
            default: None,
        }
    }
}

/// What became of a requested column definition.
///
/// The DSL drops column requests it cannot resolve (missing name, unknown
/// type keyword) without failing the migration; this value makes that
/// outcome observable to callers that care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnOutcome {
    /// The column was resolved and recorded.
    Added,
    /// The request was dropped: no name, or no recognized type.
    Skipped,
}

impl ColumnOutcome {
    /// True when the column was recorded.
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added)
    }
}

/// The loose, everything-optional column shape accepted by the DSL.
///
/// Merging follows the classic option-map rule: an override wins only
/// when it is set in the loose sense. Empty strings, zero numbers and
/// `false` count as absent, so `limit: 0` cannot clobber a real limit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnOptions {
    /// Column name.
    pub name: Option<String>,
    /// Type keyword, resolved against [`ColumnType`] names.
    #[serde(rename = "type")]
    pub ty: Option<String>,
    /// Width hint.
    pub limit: Option<u32>,
    /// Total digits for decimals.
    pub precision: Option<u32>,
    /// Fractional digits for decimals.
    pub scale: Option<u32>,
    /// Emit `NOT NULL`.
    pub not_null: Option<bool>,
    /// Emit `AUTO_INCREMENT`.
    pub auto_increment: Option<bool>,
    /// Default value.
    pub default: Option<Value>,
}

impl ColumnOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the type keyword.
    pub fn of_type(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Set the width hint.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the decimal precision.
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the decimal scale.
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Mark the column `NOT NULL`.
    pub fn not_null(mut self) -> Self {
        self.not_null = Some(true);
        self
    }

    /// Mark the column `AUTO_INCREMENT`.
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = Some(true);
        self
    }

    /// Set the default value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Merge `overrides` onto `self`, keeping each override only when it
    /// is set in the loose sense described on the type.
    pub fn merged_with(&self, overrides: &ColumnOptions) -> ColumnOptions {
        ColumnOptions {
            name: set_string(&overrides.name).or_else(|| self.name.clone()),
            ty: set_string(&overrides.ty).or_else(|| self.ty.clone()),
            limit: set_number(overrides.limit).or(self.limit),
            precision: set_number(overrides.precision).or(self.precision),
            scale: set_number(overrides.scale).or(self.scale),
            not_null: set_flag(overrides.not_null).or(self.not_null),
            auto_increment: set_flag(overrides.auto_increment).or(self.auto_increment),
            default: set_value(&overrides.default).or_else(|| self.default.clone()),
        }
    }

    /// Resolve into a canonical [`Column`].
    ///
    /// Returns `None` when the name is missing/empty or the type keyword
    /// is not one of the known names. Callers surface that as
    /// [`ColumnOutcome::Skipped`]; it is never an error.
    pub fn resolve(&self) -> Option<Column> {
        let name = set_string(&self.name)?;
        let ty = ColumnType::from_name(self.ty.as_deref()?)?;
        Some(Column {
            name,
            ty,
            limit: set_number(self.limit),
            precision: set_number(self.precision),
            scale: set_number(self.scale),
            not_null: set_flag(self.not_null).is_some(),
            auto_increment: set_flag(self.auto_increment).is_some(),
            default: set_value(&self.default),
        })
    }
}

/// `()` reads as "no options" in the typed column helpers.
impl From<()> for ColumnOptions {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

fn set_string(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_owned)
}

fn set_number(value: Option<u32>) -> Option<u32> {
    value.filter(|n| *n != 0)
}

fn set_flag(value: Option<bool>) -> Option<bool> {
    value.filter(|b| *b)
}

fn set_value(value: &Option<Value>) -> Option<Value> {
    value
        .as_ref()
        .filter(|v| match v {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64() != Some(0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        })
        .cloned()
}
