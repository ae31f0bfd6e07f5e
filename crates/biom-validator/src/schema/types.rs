//! Tagged types for the string-valued vocabulary fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Biological semantics of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableType {
    Otu,
    Pathway,
    Function,
    Ortholog,
    Gene,
    Metabolite,
    Taxon,
}

impl TableType {
    /// All recognized table types.
    pub const ALL: [TableType; 7] = [
        TableType::Otu,
        TableType::Pathway,
        TableType::Function,
        TableType::Ortholog,
        TableType::Gene,
        TableType::Metabolite,
        TableType::Taxon,
    ];

    /// Parse a table type, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "otu table" => Some(TableType::Otu),
            "pathway table" => Some(TableType::Pathway),
            "function table" => Some(TableType::Function),
            "ortholog table" => Some(TableType::Ortholog),
            "gene table" => Some(TableType::Gene),
            "metabolite table" => Some(TableType::Metabolite),
            "taxon table" => Some(TableType::Taxon),
            _ => None,
        }
    }

    /// Canonical spelling.
    pub fn label(&self) -> &'static str {
        match self {
            TableType::Otu => "OTU table",
            TableType::Pathway => "Pathway table",
            TableType::Function => "Function table",
            TableType::Ortholog => "Ortholog table",
            TableType::Gene => "Gene table",
            TableType::Metabolite => "Metabolite table",
            TableType::Taxon => "Taxon table",
        }
    }
}

/// Layout of the `data` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixType {
    /// `[row, col, value]` triples.
    Sparse,
    /// Full rectangular array of rows.
    Dense,
}

impl MatrixType {
    /// Parse a matrix type. Case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sparse" => Some(MatrixType::Sparse),
            "dense" => Some(MatrixType::Dense),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatrixType::Sparse => "sparse",
            MatrixType::Dense => "dense",
        }
    }
}

/// Declared type of every matrix value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Int,
    Float,
    Str,
}

impl ElementType {
    /// Parse an element type. Case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "int" => Some(ElementType::Int),
            "float" => Some(ElementType::Float),
            "str" => Some(ElementType::Str),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Int => "int",
            ElementType::Float => "float",
            ElementType::Str => "str",
        }
    }

    /// Returns true if the value's JSON kind matches this element type.
    ///
    /// Integers and floats are told apart by how the literal was written:
    /// `2` is an int, `2.0` is a float and matches only `Float`.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ElementType::Int => is_integer(value),
            ElementType::Float => matches!(value, Value::Number(n) if n.is_f64()),
            ElementType::Str => value.is_string(),
        }
    }
}

/// Returns true for JSON integer literals, signed or unsigned.
pub(crate) fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}

/// Declared matrix dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: u64,
    pub cols: u64,
}

impl Shape {
    /// Upper bound on the number of stored values.
    pub fn capacity(&self) -> u128 {
        self.rows as u128 * self.cols as u128
    }
}
