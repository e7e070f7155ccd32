//! Plain-text invoice rendering
//!
//! Renders the backend's invoice for printing or export. Every monetary
//! figure comes from the invoice record itself — the backend is the system
//! of record after submission, so nothing here recomputes totals; fields
//! the record does not carry render as "N/A".

use chrono::DateTime;

use shared::models::{Invoice, OrderLine};

use super::text::{TextBuilder, pad_to_width};

/// Default render width (A5-ish slip on a character grid)
pub const DEFAULT_WIDTH: usize = 58;

/// Store identity printed in the invoice header
#[derive(Debug, Clone)]
pub struct StoreInfo {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub registration: Option<String>,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: "PEARL MEDICAL & OPTICAL".to_string(),
            address: "123 Health Street, Medical District".to_string(),
            phone: Some("+91-9876543210".to_string()),
            email: Some("contact@pearlstore.example".to_string()),
            registration: Some("Reg. No: MED12345 | License: DL-2024-001".to_string()),
        }
    }
}

pub struct InvoiceRenderer<'a> {
    invoice: &'a Invoice,
    store: &'a StoreInfo,
    width: usize,
}

impl<'a> InvoiceRenderer<'a> {
    pub fn new(invoice: &'a Invoice, store: &'a StoreInfo) -> Self {
        Self {
            invoice,
            store,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn render(&self) -> String {
        let mut b = TextBuilder::new(self.width);

        // ── Store header ──
        b.eq_sep();
        b.text_center(&self.store.name);
        b.text_center(&self.store.address);
        match (&self.store.phone, &self.store.email) {
            (Some(phone), Some(email)) => b.text_center(&format!("Tel: {} | {}", phone, email)),
            (Some(phone), None) => b.text_center(&format!("Tel: {}", phone)),
            (None, Some(email)) => b.text_center(email),
            (None, None) => {}
        }
        if let Some(registration) = &self.store.registration {
            b.text_center(registration);
        }
        b.eq_sep();

        // ── Invoice metadata ──
        b.line_lr(
            &format!("Invoice #: {}", text_or_na(self.invoice.invoice_number.as_deref())),
            &format!("Date: {}", format_date(self.invoice.date.as_deref())),
        );
        b.write_line(&format!(
            "Order #: {}",
            text_or_na(self.invoice.order_number.as_deref())
        ));
        b.blank_line();

        // ── Customer ──
        b.write_line("BILLED TO");
        b.write_line(text_or_na(self.invoice.customer_name.as_deref()));
        b.write_line(&format!(
            "Tel: {}",
            text_or_na(self.invoice.customer_phone.as_deref())
        ));
        b.dash_sep();

        // ── Items ──
        b.write_line(&format!(
            "{} {} {} {} {}",
            pad_to_width("#", 3, true),
            pad_to_width("ITEM", 24, false),
            pad_to_width("QTY", 4, true),
            pad_to_width("RATE", 10, true),
            pad_to_width("AMOUNT", 12, true),
        ));
        b.dash_sep();

        for (index, item) in self.invoice.items.iter().enumerate() {
            self.render_item(&mut b, index + 1, item);
        }
        if self.invoice.items.is_empty() {
            b.text_center("(no items)");
        }
        b.dash_sep();

        // ── Totals (server figures, as persisted) ──
        b.line_lr("Subtotal:", &amount_or_na(self.invoice.subtotal));
        b.line_lr(
            &format!("Discount ({}):", percent_or_na(self.invoice.discount)),
            &self
                .invoice
                .discount_amount
                .map(|v| format!("-{}", format_amount(v)))
                .unwrap_or_else(|| "N/A".to_string()),
        );
        b.line_lr(
            &format!("Tax ({}):", percent_or_na(self.invoice.tax)),
            &amount_or_na(self.invoice.total_amount),
        );
        b.line_lr("GRAND TOTAL:", &amount_or_na(self.invoice.payable_total()));
        b.eq_sep();

        // ── Footer ──
        b.text_center("Thank you for choosing our services!");
        b.text_center("For any queries, please contact us at the above details.");

        b.finalize()
    }

    fn render_item(&self, b: &mut TextBuilder, position: usize, item: &OrderLine) {
        b.write_line(&format!(
            "{} {} {} {} {}",
            pad_to_width(&position.to_string(), 3, true),
            pad_to_width(&item.item_name, 24, false),
            pad_to_width(&item.quantity.to_string(), 4, true),
            pad_to_width(&format_amount(item.unit_price), 10, true),
            pad_to_width(&format_amount(item.total_price), 12, true),
        ));
        if let Some(category) = item.category {
            b.write_line(&format!("    > {}", category));
        }
    }
}

/// Plain-text subject and body for sending an invoice by mail
pub fn email_body(invoice: &Invoice) -> (String, String) {
    let subject = format!(
        "Invoice #{}",
        text_or_na(invoice.invoice_number.as_deref())
    );

    let mut body = String::new();
    body.push_str(&format!(
        "Invoice Number: {}\n",
        text_or_na(invoice.invoice_number.as_deref())
    ));
    body.push_str(&format!(
        "Customer: {}\n",
        text_or_na(invoice.customer_name.as_deref())
    ));
    body.push_str(&format!(
        "Phone: {}\n",
        text_or_na(invoice.customer_phone.as_deref())
    ));
    body.push_str(&format!("Date: {}\n\nItems:\n", format_date(invoice.date.as_deref())));

    for (index, item) in invoice.items.iter().enumerate() {
        body.push_str(&format!(
            "{}. {} x{} @ {} = {}\n",
            index + 1,
            item.item_name,
            item.quantity,
            format_amount(item.unit_price),
            format_amount(item.total_price),
        ));
    }

    body.push_str(&format!(
        "\nTotal Amount: {}\n",
        amount_or_na(invoice.payable_total())
    ));

    (subject, body)
}

fn format_amount(value: f64) -> String {
    format!("Rs {:.2}", value)
}

fn amount_or_na(value: Option<f64>) -> String {
    value.map(format_amount).unwrap_or_else(|| "N/A".to_string())
}

fn percent_or_na(value: Option<f64>) -> String {
    value.map(|v| format!("{}%", v)).unwrap_or_else(|| "N/A".to_string())
}

fn text_or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "N/A",
    }
}

/// Format the backend's RFC 3339 timestamp for display; "N/A" when missing
/// or unparsable
fn format_date(raw: Option<&str>) -> String {
    raw.and_then(|value| DateTime::parse_from_rfc3339(value).ok())
        .map(|date| date.format("%d %b %Y, %I:%M %p").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
