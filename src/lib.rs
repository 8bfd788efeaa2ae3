//! order-history
//!
//! The pure data pipeline behind an embeddable order-history panel for an
//! inventory-management host. The host supplies the context (current
//! user, screen and record), an authenticated HTTP endpoint, and a chart
//! widget; this crate supplies everything in between.
//!
//! ### Features
//! - Resolve which order types (build/purchase/sales/return) are valid
//!   for a given context, and keep the user's selection consistent
//! - Derive the query parameters shared by the history fetch and the
//!   export download URL
//! - Transform raw per-part history records into chart series plus
//!   date-sorted rows
//! - A small blocking client for the host's history endpoint that
//!   degrades every failure to an empty result
//!
//! ### Example
//! ```no_run
//! use order_history::{api::Client, query, resolver, series};
//! use order_history::context::{Context, PluginSettings, TargetModel, UserCapabilities};
//! use order_history::selection::Selection;
//!
//! let context = Context {
//!     model: TargetModel::Part,
//!     instance_id: Some(17),
//!     capabilities: UserCapabilities::all(),
//!     instance: Default::default(),
//! };
//! let mut selection = Selection::default();
//! let valid = resolver::resolve(&context, &PluginSettings::all_enabled());
//! selection.reconcile_order_type(&valid);
//!
//! let params = query::build(&selection, &context);
//! let client = Client::new("https://inventory.example.com");
//! let records = client.fetch_history(&params);
//! let (chart_series, chart_rows) = series::build(&records);
//! ```

pub mod api;
pub mod context;
pub mod models;
pub mod query;
pub mod resolver;
pub mod selection;
pub mod series;

pub use api::Client;
pub use context::{Context, InstanceFlags, PluginSettings, TargetModel, UserCapabilities};
pub use models::{
    ChartRow, ChartSeries, ExportFormat, HistoryEntry, HistoryRecord, OrderType, OrderTypeOption,
    Period,
};
pub use selection::{Selection, SelectionError};
