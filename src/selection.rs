//! User-controlled selection state for the panel: date window, grouping
//! period, and the currently selected order type.

use crate::models::{OrderType, OrderTypeOption, Period};
use chrono::{Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Query-parameter date format (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("start date {start} must fall before end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

/// Selection state with the `start_date < end_date` invariant enforced:
/// updates that would violate it are rejected and leave the state
/// unchanged. The selected order type is maintained against the currently
/// valid option list via [`Selection::reconcile_order_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    start_date: NaiveDate,
    end_date: NaiveDate,
    period: Period,
    order_type: Option<OrderType>,
}

impl Default for Selection {
    /// Initial window: one year back to one month ahead, grouped monthly.
    fn default() -> Self {
        let today = Utc::now().date_naive();
        let start = today.checked_sub_months(Months::new(12)).unwrap_or(today);
        let end = today.checked_add_months(Months::new(1)).unwrap_or(today);
        Self {
            start_date: start,
            end_date: end,
            period: Period::default(),
            order_type: None,
        }
    }
}

impl Selection {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        period: Period,
    ) -> Result<Self, SelectionError> {
        if start_date >= end_date {
            return Err(SelectionError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
            period,
            order_type: None,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn order_type(&self) -> Option<OrderType> {
        self.order_type
    }

    /// Move the start of the window. Rejected if it would not precede the
    /// current end date.
    pub fn set_start_date(&mut self, date: NaiveDate) -> Result<(), SelectionError> {
        if date >= self.end_date {
            return Err(SelectionError::InvalidDateRange {
                start: date,
                end: self.end_date,
            });
        }
        self.start_date = date;
        Ok(())
    }

    /// Move the end of the window. Rejected if the current start date
    /// would not precede it.
    pub fn set_end_date(&mut self, date: NaiveDate) -> Result<(), SelectionError> {
        if date <= self.start_date {
            return Err(SelectionError::InvalidDateRange {
                start: self.start_date,
                end: date,
            });
        }
        self.end_date = date;
        Ok(())
    }

    pub fn set_period(&mut self, period: Period) {
        self.period = period;
    }

    pub fn set_order_type(&mut self, order_type: Option<OrderType>) {
        self.order_type = order_type;
    }

    /// Re-check the selected order type against the currently valid
    /// options. A selection that is no longer (or was never) valid resets
    /// to the first option, or to no selection when the list is empty.
    /// Returns the selection after reconciliation.
    pub fn reconcile_order_type(&mut self, valid: &[OrderTypeOption]) -> Option<OrderType> {
        let still_valid = self
            .order_type
            .is_some_and(|current| valid.iter().any(|option| option.value == current));
        if !still_valid {
            self.order_type = valid.first().map(|option| option.value);
        }
        self.order_type
    }

    pub fn start_date_param(&self) -> String {
        self.start_date.format(DATE_FORMAT).to_string()
    }

    pub fn end_date_param(&self) -> String {
        self.end_date.format(DATE_FORMAT).to_string()
    }
}
