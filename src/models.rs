use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The four order categories the panel can visualize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Build,
    Purchase,
    Sales,
    Return,
}

impl OrderType {
    /// Presentation order for resolved option lists. Fixed by convention:
    /// build, purchase, sales, return.
    pub const ALL: [OrderType; 4] = [
        OrderType::Build,
        OrderType::Purchase,
        OrderType::Sales,
        OrderType::Return,
    ];

    /// Wire value used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Build => "build",
            OrderType::Purchase => "purchase",
            OrderType::Sales => "sales",
            OrderType::Return => "return",
        }
    }

    /// Human-readable label for selection widgets.
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Build => "Build Orders",
            OrderType::Purchase => "Purchase Orders",
            OrderType::Sales => "Sales Orders",
            OrderType::Return => "Return Orders",
        }
    }
}

/// A resolved order type offered to the user, value plus display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderTypeOption {
    pub value: OrderType,
    pub label: &'static str,
}

impl From<OrderType> for OrderTypeOption {
    fn from(value: OrderType) -> Self {
        Self {
            value,
            label: value.label(),
        }
    }
}

/// Temporal bucket size applied server-side before data reaches this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[default]
    #[serde(rename = "M")]
    Monthly,
    #[serde(rename = "Q")]
    Quarterly,
    #[serde(rename = "Y")]
    Yearly,
}

impl Period {
    /// Single-letter code expected by the history endpoint.
    pub fn code(&self) -> &'static str {
        match self {
            Period::Monthly => "M",
            Period::Quarterly => "Q",
            Period::Yearly => "Y",
        }
    }
}

/// File formats accepted by the history endpoint's `export` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Tsv,
    Xls,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Xls => "xls",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// One aggregated observation within a history record.
///
/// Dates arrive as ISO `YYYY-MM-DD` strings, so lexicographic order is
/// chronological order; the series builder relies on this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub quantity: f64,
}

/// Part identity as returned by the host.
///
/// Well-formed responses carry an object with a primary key and names, but
/// the host may also send an aggregate bucket as a bare literal (or omit
/// the part entirely). Accept both and let callers fall back gracefully.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PartIdent {
    Detail(PartDetail),
    Literal(Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartDetail {
    pub pk: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl PartIdent {
    /// Primary key, when the part arrived as a detail object.
    pub fn pk(&self) -> Option<i64> {
        match self {
            PartIdent::Detail(detail) => Some(detail.pk),
            PartIdent::Literal(_) => None,
        }
    }

    /// Display label: full name, then short name, then a stringified
    /// rendition of whatever the host sent.
    pub fn label(&self) -> String {
        match self {
            PartIdent::Detail(detail) => detail
                .full_name
                .clone()
                .or_else(|| detail.name.clone())
                .unwrap_or_else(|| detail.pk.to_string()),
            PartIdent::Literal(Value::String(s)) => s.clone(),
            PartIdent::Literal(v) => v.to_string(),
        }
    }
}

/// One per-part record from the history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub part: Option<PartIdent>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Descriptor for one plotted series. `name` doubles as the field key
/// under which quantities appear in [`ChartRow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub label: String,
    pub color: &'static str,
}

/// One chart row: a date plus the quantity for each series present on
/// that date. Serializes with the quantities flattened beside `date`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub date: String,
    #[serde(flatten)]
    pub quantities: BTreeMap<String, f64>,
}
