//! Order draft editing
//!
//! The in-progress order being composed before submission. Row edits keep
//! every line's total consistent via the money module; input checking is
//! deliberately split in two: setters accept anything (totals degrade to
//! zero on garbage, mirroring the live form), while `validate` applies the
//! strict submission boundary.

use thiserror::Error;

use shared::models::{Category, Item, OrderCreate, OrderLine};

use crate::order_money::{self, MAX_PERCENT, MAX_PRICE, MAX_QUANTITY, OrderTotals};

/// Entity names (customer name etc.)
const MAX_NAME_LEN: usize = 200;
/// Short identifiers: phone numbers
const MAX_PHONE_LEN: usize = 100;

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("{0} must not be empty")]
    Required(&'static str),

    #[error("{0} is too long ({1} chars, max {2})")]
    TooLong(&'static str, usize, usize),

    #[error("line {0}: no item selected")]
    LineMissingItem(usize),

    #[error("line {0}: quantity must be between 1 and {max}, got {1}", max = MAX_QUANTITY)]
    LineQuantity(usize, i32),

    #[error("line {0}: unit price must be a finite amount between 0 and {max}, got {1}", max = MAX_PRICE)]
    LinePrice(usize, f64),

    #[error("{0} must be a finite percentage between 0 and {max}, got {1}", max = MAX_PERCENT)]
    Percent(&'static str, f64),

    #[error("the last line cannot be removed")]
    LastLine,

    #[error("no line at index {0}")]
    NoSuchLine(usize),
}

/// An unsubmitted order
///
/// Lines are only reachable through the editing methods so that
/// `total_price` stays consistent with `quantity * unit_price` at rest.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub order_number: Option<String>,
    pub customer_name: String,
    pub customer_phone: String,
    pub discount_percent: f64,
    pub tax_percent: f64,
    items: Vec<OrderLine>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderDraft {
    /// Fresh draft with a single blank line, as the order form opens
    pub fn new() -> Self {
        Self {
            order_number: None,
            customer_name: String::new(),
            customer_phone: String::new(),
            discount_percent: 0.0,
            tax_percent: 0.0,
            items: vec![OrderLine::blank()],
        }
    }

    pub fn items(&self) -> &[OrderLine] {
        &self.items
    }

    pub fn add_row(&mut self) {
        self.items.push(OrderLine::blank());
    }

    /// Remove a line; the draft always keeps at least one
    pub fn remove_row(&mut self, index: usize) -> Result<(), DraftError> {
        if index >= self.items.len() {
            return Err(DraftError::NoSuchLine(index));
        }
        if self.items.len() == 1 {
            return Err(DraftError::LastLine);
        }
        self.items.remove(index);
        Ok(())
    }

    /// Select a catalog item for a line, denormalizing name, category and
    /// unit price at selection time
    pub fn select_item(&mut self, index: usize, item: &Item) -> Result<(), DraftError> {
        let line = self.line_mut(index)?;
        line.item_id = item.id.clone();
        line.item_name = item.name.clone();
        line.category = item.category;
        line.unit_price = item.price;
        order_money::recalc_line(line);
        Ok(())
    }

    pub fn set_quantity(&mut self, index: usize, quantity: i32) -> Result<(), DraftError> {
        let line = self.line_mut(index)?;
        line.quantity = quantity;
        order_money::recalc_line(line);
        Ok(())
    }

    pub fn set_unit_price(&mut self, index: usize, unit_price: f64) -> Result<(), DraftError> {
        let line = self.line_mut(index)?;
        line.unit_price = unit_price;
        order_money::recalc_line(line);
        Ok(())
    }

    pub fn set_category(&mut self, index: usize, category: Option<Category>) -> Result<(), DraftError> {
        self.line_mut(index)?.category = category;
        Ok(())
    }

    /// Live totals for display; recomputed in full on every call
    pub fn totals(&self) -> OrderTotals {
        order_money::compute_totals(&self.items, self.discount_percent, self.tax_percent)
    }

    /// Strict submission boundary
    ///
    /// The calculator itself never rejects input; everything that must hold
    /// before the draft goes to the backend is checked here.
    pub fn validate(&self) -> Result<(), DraftError> {
        validate_required_text(&self.customer_name, "customer name", MAX_NAME_LEN)?;
        validate_required_text(&self.customer_phone, "customer phone", MAX_PHONE_LEN)?;
        validate_percent(self.discount_percent, "discount")?;
        validate_percent(self.tax_percent, "tax")?;

        for (index, line) in self.items.iter().enumerate() {
            if line.item_id.trim().is_empty() {
                return Err(DraftError::LineMissingItem(index));
            }
            if line.quantity < 1 || line.quantity > MAX_QUANTITY {
                return Err(DraftError::LineQuantity(index, line.quantity));
            }
            if !line.unit_price.is_finite()
                || line.unit_price < 0.0
                || line.unit_price > MAX_PRICE
            {
                return Err(DraftError::LinePrice(index, line.unit_price));
            }
        }
        Ok(())
    }

    /// Wire payload for POST /api/orders; line totals go out exactly as the
    /// calculator produced them
    pub fn to_payload(&self) -> OrderCreate {
        OrderCreate {
            order_number: self.order_number.clone(),
            customer_name: self.customer_name.clone(),
            customer_phone: self.customer_phone.clone(),
            discount: self.discount_percent,
            tax: self.tax_percent,
            items: self.items.clone(),
        }
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut OrderLine, DraftError> {
        self.items.get_mut(index).ok_or(DraftError::NoSuchLine(index))
    }
}

fn validate_required_text(value: &str, field: &'static str, max_len: usize) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        return Err(DraftError::Required(field));
    }
    if value.len() > max_len {
        return Err(DraftError::TooLong(field, value.len(), max_len));
    }
    Ok(())
}

fn validate_percent(value: f64, field: &'static str) -> Result<(), DraftError> {
    if !value.is_finite() || !(0.0..=MAX_PERCENT).contains(&value) {
        return Err(DraftError::Percent(field, value));
    }
    Ok(())
}
