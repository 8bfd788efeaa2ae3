//! Build the query parameters shared by the fetch path and the export
//! URL, and encode them into URL query strings.

use crate::context::{Context, TargetModel};
use crate::models::ExportFormat;
use crate::selection::Selection;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Ordered query parameters for the history endpoint.
pub type QueryParams = Vec<(&'static str, String)>;

// Allow -, _, . unescaped in values (dates and numeric ids stay readable)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Derive the request parameters from the current selection and context.
///
/// Always contains `start_date`, `end_date` (as `YYYY-MM-DD`) and
/// `period` (`M`/`Q`/`Y`). `order_type` is present only when an order
/// type is selected. Exactly one of `part`, `company` or `supplier_part`
/// carries the instance id, chosen by the context model; for other
/// models (or without an instance id) no scoping key is emitted at all.
pub fn build(selection: &Selection, context: &Context) -> QueryParams {
    let mut params: QueryParams = vec![
        ("start_date", selection.start_date_param()),
        ("end_date", selection.end_date_param()),
        ("period", selection.period().code().to_string()),
    ];

    if let Some(order_type) = selection.order_type() {
        params.push(("order_type", order_type.as_str().to_string()));
    }

    if let Some(id) = context.instance_id {
        let scope_key = match context.model {
            TargetModel::Part => Some("part"),
            TargetModel::Company => Some("company"),
            TargetModel::SupplierPart => Some("supplier_part"),
            _ => None,
        };
        if let Some(key) = scope_key {
            params.push((key, id.to_string()));
        }
    }

    params
}

/// Encode parameters as a `key=value&key=value` query string, with
/// values percent-encoded.
pub fn encode(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                key,
                percent_encoding::utf8_percent_encode(value, SAFE)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the export download URL for the given endpoint: the `export`
/// format selector first, then the same parameters used for fetching.
/// Opening the URL is the host's concern.
pub fn export_url(endpoint: &str, format: ExportFormat, params: &QueryParams) -> String {
    let mut url = format!("{}?export={}", endpoint, format.as_str());
    let query = encode(params);
    if !query.is_empty() {
        url.push('&');
        url.push_str(&query);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_characters() {
        let params: QueryParams = vec![("order_type", "a b&c".to_string())];
        assert_eq!(encode(&params), "order_type=a%20b%26c");
    }

    #[test]
    fn export_url_places_format_first() {
        let params: QueryParams = vec![
            ("start_date", "2024-01-01".to_string()),
            ("part", "7".to_string()),
        ];
        assert_eq!(
            export_url("https://host/plugin/order_history/history/", ExportFormat::Xlsx, &params),
            "https://host/plugin/order_history/history/?export=xlsx&start_date=2024-01-01&part=7"
        );
        assert_eq!(
            export_url("history/", ExportFormat::Csv, &Vec::new()),
            "history/?export=csv"
        );
    }
}
