use chrono::NaiveDate;
use order_history::context::{Context, TargetModel};
use order_history::models::{ExportFormat, OrderType, Period};
use order_history::query;
use order_history::selection::Selection;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn selection() -> Selection {
    let mut sel =
        Selection::new(date("2024-01-01"), date("2024-12-31"), Period::Monthly).unwrap();
    sel.set_order_type(Some(OrderType::Purchase));
    sel
}

fn keys(params: &query::QueryParams) -> Vec<&'static str> {
    params.iter().map(|(k, _)| *k).collect()
}

fn value<'a>(params: &'a query::QueryParams, key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
}

#[test]
fn company_context_scopes_by_company_only() {
    let context = Context {
        model: TargetModel::Company,
        instance_id: Some(42),
        ..Default::default()
    };
    let params = query::build(&selection(), &context);

    assert_eq!(value(&params, "start_date"), Some("2024-01-01"));
    assert_eq!(value(&params, "end_date"), Some("2024-12-31"));
    assert_eq!(value(&params, "period"), Some("M"));
    assert_eq!(value(&params, "order_type"), Some("purchase"));
    assert_eq!(value(&params, "company"), Some("42"));
    // The other scoping keys must be absent, not merely empty.
    assert_eq!(value(&params, "part"), None);
    assert_eq!(value(&params, "supplier_part"), None);
}

#[test]
fn part_and_supplierpart_scoping() {
    let part = Context {
        model: TargetModel::Part,
        instance_id: Some(7),
        ..Default::default()
    };
    let params = query::build(&selection(), &part);
    assert_eq!(value(&params, "part"), Some("7"));
    assert_eq!(value(&params, "company"), None);

    let supplier_part = Context {
        model: TargetModel::SupplierPart,
        instance_id: Some(9),
        ..Default::default()
    };
    let params = query::build(&selection(), &supplier_part);
    assert_eq!(value(&params, "supplier_part"), Some("9"));
    assert_eq!(value(&params, "part"), None);
}

#[test]
fn unscoped_models_emit_no_id_key() {
    for model in [
        TargetModel::Purchasing,
        TargetModel::Sales,
        TargetModel::Manufacturing,
        TargetModel::Other,
    ] {
        let context = Context {
            model,
            instance_id: Some(42),
            ..Default::default()
        };
        let params = query::build(&selection(), &context);
        assert_eq!(
            keys(&params),
            vec!["start_date", "end_date", "period", "order_type"],
            "model {model:?}"
        );
    }
}

#[test]
fn missing_instance_id_emits_no_scope_key() {
    let context = Context {
        model: TargetModel::Part,
        instance_id: None,
        ..Default::default()
    };
    let params = query::build(&selection(), &context);
    assert_eq!(value(&params, "part"), None);
}

#[test]
fn order_type_omitted_when_nothing_selected() {
    let sel = Selection::new(date("2024-01-01"), date("2024-12-31"), Period::Yearly).unwrap();
    let params = query::build(&sel, &Context::default());
    assert_eq!(keys(&params), vec!["start_date", "end_date", "period"]);
    assert_eq!(value(&params, "period"), Some("Y"));
}

#[test]
fn export_url_reuses_fetch_parameters() {
    let context = Context {
        model: TargetModel::Part,
        instance_id: Some(7),
        ..Default::default()
    };
    let params = query::build(&selection(), &context);
    let url = query::export_url("https://host/history/", ExportFormat::Csv, &params);
    assert_eq!(
        url,
        "https://host/history/?export=csv&start_date=2024-01-01&end_date=2024-12-31&period=M&order_type=purchase&part=7"
    );
}
