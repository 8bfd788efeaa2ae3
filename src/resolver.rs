//! Determine which order types are valid for a given embedding context.
//!
//! An order type is offered when three independent conditions all hold:
//! the user may view that order category, the plugin setting for its
//! history is enabled, and the current model/record supports it. Absent
//! or unknown inputs evaluate to false; resolution never fails.

use crate::context::{Context, PluginSettings, TargetModel};
use crate::models::{OrderType, OrderTypeOption};

/// Resolve the ordered list of valid order types for the given context.
///
/// The output order is a fixed presentation convention: build, purchase,
/// sales, return (restricted to the supported subset).
pub fn resolve(context: &Context, settings: &PluginSettings) -> Vec<OrderTypeOption> {
    OrderType::ALL
        .into_iter()
        .filter(|order_type| supports(context, settings, *order_type))
        .map(OrderTypeOption::from)
        .collect()
}

/// Whether a single order type is valid for the given context.
pub fn supports(context: &Context, settings: &PluginSettings, order_type: OrderType) -> bool {
    context.capabilities.can_view(order_type)
        && settings.enabled(order_type)
        && model_supports(context, order_type)
}

fn model_supports(context: &Context, order_type: OrderType) -> bool {
    let flags = &context.instance;
    match order_type {
        OrderType::Purchase => match context.model {
            TargetModel::Part => flags.purchaseable,
            TargetModel::Company => flags.is_supplier,
            TargetModel::Purchasing | TargetModel::SupplierPart => true,
            _ => false,
        },
        // Return orders piggyback on sales applicability.
        OrderType::Sales | OrderType::Return => match context.model {
            TargetModel::Part => flags.salable,
            TargetModel::Company => flags.is_customer,
            TargetModel::Sales => true,
            _ => false,
        },
        OrderType::Build => match context.model {
            TargetModel::Part => flags.assembly,
            TargetModel::Manufacturing => true,
            _ => false,
        },
    }
}
