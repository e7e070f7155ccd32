//! Walkthrough Example - a full session against a running backend
//!
//! Logs in, lists the catalog, composes an order with live totals, submits
//! it, then fetches and renders the latest invoice.
//!
//! Configure via environment (or a .env file):
//! - PEARL_BACKEND_URL (default http://localhost:4000)
//! - PEARL_EMAIL / PEARL_PASSWORD
//! - PEARL_DATA_DIR (session file location, default ".")
//!
//! Run: cargo run -p pearl-client --example walkthrough

use pearl_client::render::{InvoiceRenderer, StoreInfo, email_body};
use pearl_client::{ClientConfig, OrderDraft, PearlClient, SessionStore, listing, order_money};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("=== Pearl Walkthrough ===\n");

    let config = ClientConfig::from_env();
    let store = SessionStore::new(&config.data_dir);

    // === 1. Login (or resume a cached session) ===
    let mut client = match store.load()? {
        Some(session) => {
            println!("1. Resuming session for {}", session.user.email);
            PearlClient::with_session(&config, &session)?
        }
        None => {
            let email = std::env::var("PEARL_EMAIL").unwrap_or_else(|_| "admin@store.test".into());
            let password = std::env::var("PEARL_PASSWORD").unwrap_or_else(|_| "admin".into());

            println!("1. Logging in as {email}...");
            let mut client = PearlClient::new(&config)?;
            let session = client.login(&email, &password).await?;
            store.save(&session)?;
            client
        }
    };

    // === 2. Catalog ===
    println!("\n2. Fetching catalog...");
    let items = client.list_items().await?;
    println!("   {} items in stock", items.len());
    for item in items.iter().take(5) {
        println!(
            "   - {} [{}] Rs {:.2} (stock {})",
            item.name,
            item.category.map(|c| c.label()).unwrap_or("-"),
            item.price,
            item.stock
        );
    }

    // === 3. Compose an order ===
    println!("\n3. Composing an order...");
    let mut draft = OrderDraft::new();
    draft.customer_name = "Walkthrough Customer".to_string();
    draft.customer_phone = "9876543210".to_string();
    draft.discount_percent = 10.0;
    draft.tax_percent = 5.0;

    let Some(first) = items.first() else {
        anyhow::bail!("catalog is empty; add items before running the walkthrough");
    };
    draft.select_item(0, first)?;
    draft.set_quantity(0, 2)?;

    let totals = draft.totals();
    println!(
        "   subtotal Rs {:.2}, discount Rs {:.2}, tax Rs {:.2} => grand total Rs {:.2}",
        totals.subtotal, totals.discount_amount, totals.tax_amount, totals.grand_total
    );

    // === 4. Submit ===
    println!("\n4. Submitting...");
    draft.validate()?;
    client.create_order(&draft.to_payload()).await?;
    println!("   Order created.");

    // === 5. History & invoice ===
    println!("\n5. Fetching order history...");
    let orders = client.list_orders().await?;
    let page = listing::paginate(&orders, 1, 5);
    println!("   {} orders, showing page 1/{}", page.total, page.total_pages);
    for order in &page.data {
        println!(
            "   #{} {} ({}) Rs {:.2}",
            order.order_number.as_deref().unwrap_or("-"),
            order.customer_name,
            order.customer_phone,
            order.total_amount
        );
    }

    if let Some(latest) = orders.first() {
        println!("\n6. Rendering invoice for order {}...", latest.id);
        let invoice = client.fetch_invoice(&latest.id).await?;

        // The backend's figures are authoritative; report drift, keep both
        if let Some(server_total) = invoice.payable_total()
            && !order_money::money_eq(server_total, totals.grand_total)
        {
            println!(
                "   note: server total Rs {server_total:.2} differs from locally computed Rs {:.2}",
                totals.grand_total
            );
        }

        let store_info = StoreInfo::default();
        println!("{}", InvoiceRenderer::new(&invoice, &store_info).render());

        let (subject, body) = email_body(&invoice);
        println!("--- mail preview ---\n{subject}\n\n{body}");
    }

    Ok(())
}
