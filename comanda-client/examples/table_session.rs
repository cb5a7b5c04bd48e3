//! Interactive-free demo of a full table session
//!
//! Runs the seeded backend in-process and walks the workflow a real
//! deployment splits across devices: a customer scans table 2's link,
//! orders, and watches the status; staff log in and advance the order
//! through the kitchen pipeline.
//!
//! ```sh
//! cargo run -p comanda-client --example table_session
//! ```

use anyhow::Result;
use comanda_client::{
    CartManager, ClientConfig, CustomerOrderPoller, FileStorage, Session, StaffQueuePoller,
    TableResolver,
};
use comanda_client::storage::BlobStorage;
use comanda_server::LocalBackend;
use shared::client::Backend;
use shared::models::View;
use shared::order::OrderStatus;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    comanda_client::logger::init_logger(None);

    let config = ClientConfig::from_env();
    let local = Arc::new(LocalBackend::seeded());
    comanda_server::seed::seed_orders(&local.order_store())?;
    let backend: Arc<dyn Backend> = local.clone();
    let storage: Arc<dyn BlobStorage> = Arc::new(FileStorage::new(&config.data_dir));

    // --- customer side -------------------------------------------------
    let table = TableResolver::new(Arc::clone(&backend))
        .resolve("table-2-secret")
        .await?;
    tracing::info!(table = table.number, "Customer seated");

    let mut cart = CartManager::open(table.id.clone(), Arc::clone(&storage));
    cart.clear();
    for item in backend.list_menu_items(&Default::default()).await? {
        if item.availability && item.tags.contains(&"classic".to_string()) {
            cart.add(item);
        }
    }
    cart.set_note("item_4", "No pepper please");
    tracing::info!(total = cart.total(), lines = cart.items().len(), "Cart ready");

    let order = backend.create_order(&table.id, cart.to_order_inputs()).await?;
    cart.clear();
    tracing::info!(order_id = %order.id, total = order.total, "Order placed");

    let customer = CustomerOrderPoller::new(Arc::clone(&backend), Duration::from_millis(200));
    customer.track(order.id.clone());

    // --- staff side ----------------------------------------------------
    let mut session = Session::restore(Arc::clone(&backend), Arc::clone(&storage));
    session.login("staff@example.com", "password").await?;
    anyhow::ensure!(session.can_access(View::StaffDashboard));

    let staff = StaffQueuePoller::start(Arc::clone(&backend), Duration::from_millis(200));

    for status in [OrderStatus::Preparing, OrderStatus::Ready, OrderStatus::Served] {
        tokio::time::sleep(Duration::from_millis(500)).await;
        backend.set_order_status(&order.id, status).await?;
    }

    tokio::time::sleep(Duration::from_millis(500)).await;
    for status in [
        OrderStatus::Placed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Served,
    ] {
        tracing::info!(
            column = status.label(),
            orders = staff.column(status).len(),
            "Queue column"
        );
    }
    tracing::info!(
        status = %customer.orders()[0].status,
        "Customer sees final status"
    );

    customer.stop();
    staff.stop();
    session.logout();
    Ok(())
}
