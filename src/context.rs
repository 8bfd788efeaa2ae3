//! The host-side embedding context, reduced to an explicit, typed snapshot.
//!
//! The host hands the panel a loosely-typed description of where it is
//! embedded (which screen, which record, which user). This module pins
//! that down: a closed model enumeration, plain boolean instance flags,
//! and a flat capability set instead of a callable permission object.

use crate::models::OrderType;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// The host screen/record type the panel is embedded on.
///
/// Unknown model names deserialize to [`TargetModel::Other`], for which
/// every support predicate evaluates to false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetModel {
    Part,
    Company,
    SupplierPart,
    Purchasing,
    Sales,
    Manufacturing,
    #[default]
    #[serde(other)]
    Other,
}

impl FromStr for TargetModel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "part" => TargetModel::Part,
            "company" => TargetModel::Company,
            "supplierpart" => TargetModel::SupplierPart,
            "purchasing" => TargetModel::Purchasing,
            "sales" => TargetModel::Sales,
            "manufacturing" => TargetModel::Manufacturing,
            _ => TargetModel::Other,
        })
    }
}

/// Boolean flags on the current record. Which flags are meaningful
/// depends on the model: `purchaseable`/`salable`/`assembly` for parts,
/// `is_supplier`/`is_customer` for companies. Absent flags are false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceFlags {
    #[serde(default)]
    pub purchaseable: bool,
    #[serde(default, alias = "is_salable")]
    pub salable: bool,
    #[serde(default)]
    pub is_supplier: bool,
    #[serde(default)]
    pub is_customer: bool,
    #[serde(default)]
    pub assembly: bool,
}

/// View permissions held by the current user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCapabilities {
    #[serde(default)]
    pub view_purchase_order: bool,
    #[serde(default)]
    pub view_sales_order: bool,
    #[serde(default)]
    pub view_return_order: bool,
    #[serde(default)]
    pub view_build_order: bool,
}

impl UserCapabilities {
    /// A capability set with every view permission granted.
    pub fn all() -> Self {
        Self {
            view_purchase_order: true,
            view_sales_order: true,
            view_return_order: true,
            view_build_order: true,
        }
    }

    pub fn can_view(&self, order_type: OrderType) -> bool {
        match order_type {
            OrderType::Purchase => self.view_purchase_order,
            OrderType::Sales => self.view_sales_order,
            OrderType::Return => self.view_return_order,
            OrderType::Build => self.view_build_order,
        }
    }
}

/// Per-order-type history toggles from the plugin's settings dictionary.
/// Field names match the host's settings keys; absent flags are false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSettings {
    #[serde(default, rename = "PURCHASE_ORDER_HISTORY")]
    pub purchase_order_history: bool,
    #[serde(default, rename = "SALES_ORDER_HISTORY")]
    pub sales_order_history: bool,
    #[serde(default, rename = "RETURN_ORDER_HISTORY")]
    pub return_order_history: bool,
    #[serde(default, rename = "BUILD_ORDER_HISTORY")]
    pub build_order_history: bool,
}

impl PluginSettings {
    /// Settings with every history toggle enabled (the host's defaults).
    pub fn all_enabled() -> Self {
        Self {
            purchase_order_history: true,
            sales_order_history: true,
            return_order_history: true,
            build_order_history: true,
        }
    }

    pub fn enabled(&self, order_type: OrderType) -> bool {
        match order_type {
            OrderType::Purchase => self.purchase_order_history,
            OrderType::Sales => self.sales_order_history,
            OrderType::Return => self.return_order_history,
            OrderType::Build => self.build_order_history,
        }
    }
}

/// Immutable snapshot of the embedding environment for one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default)]
    pub model: TargetModel,
    /// Primary key of the current record, when the panel is bound to one.
    #[serde(default)]
    pub instance_id: Option<i64>,
    #[serde(default)]
    pub capabilities: UserCapabilities,
    #[serde(default)]
    pub instance: InstanceFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_model_becomes_other() {
        let model: TargetModel = serde_json::from_str("\"stocktake\"").unwrap();
        assert_eq!(model, TargetModel::Other);
        assert_eq!("stocktake".parse::<TargetModel>().unwrap(), TargetModel::Other);
        assert_eq!("SupplierPart".parse::<TargetModel>().unwrap(), TargetModel::SupplierPart);
    }

    #[test]
    fn salable_alias_accepted() {
        let flags: InstanceFlags = serde_json::from_str(r#"{"is_salable": true}"#).unwrap();
        assert!(flags.salable);
    }

    #[test]
    fn settings_use_host_keys() {
        let settings: PluginSettings =
            serde_json::from_str(r#"{"PURCHASE_ORDER_HISTORY": true}"#).unwrap();
        assert!(settings.purchase_order_history);
        assert!(settings.enabled(OrderType::Purchase));
        assert!(!settings.enabled(OrderType::Sales));
    }
}
