//! End-to-end ordering workflow over the in-process backend
//!
//! Walks the whole loop with real timers on a short cadence: a customer
//! resolves their table, builds a cart, places the order; staff advance
//! it through the pipeline while both pollers reconcile their views.

use comanda_client::{CartManager, CustomerOrderPoller, MemoryStorage, StaffQueuePoller, TableResolver};
use comanda_client::storage::BlobStorage;
use comanda_server::LocalBackend;
use shared::client::Backend;
use shared::order::{OrderFilter, OrderItemInput, OrderStatus};
use std::sync::Arc;
use std::time::Duration;

const POLL: Duration = Duration::from_millis(30);
const SETTLE: Duration = Duration::from_millis(150);

fn seeded() -> (Arc<LocalBackend>, Arc<dyn Backend>) {
    let local = Arc::new(LocalBackend::seeded());
    let backend: Arc<dyn Backend> = local.clone();
    (local, backend)
}

#[tokio::test]
async fn customer_and_staff_views_converge() {
    let (local, backend) = seeded();

    // customer scans the table link
    let resolver = TableResolver::new(Arc::clone(&backend));
    let table = resolver.resolve("table-2-secret").await.unwrap();
    assert_eq!(table.number, 2);

    // builds a cart on that table
    let storage: Arc<dyn BlobStorage> = Arc::new(MemoryStorage::new());
    let mut cart = CartManager::open(table.id.clone(), storage);
    let menu = backend
        .list_menu_items(&Default::default())
        .await
        .unwrap();
    let pizza = menu.iter().find(|i| i.name == "Margherita Pizza").unwrap();
    let water = menu.iter().find(|i| i.name == "San Pellegrino").unwrap();
    cart.add(pizza.clone());
    cart.add(water.clone());
    cart.add(water.clone());
    assert_eq!(cart.total(), 23.00);

    // places the order; cart clears atomically on success
    let order = backend
        .create_order(&table.id, cart.to_order_inputs())
        .await
        .unwrap();
    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(order.total, 23.00);

    // first placed order starts the customer poller
    let customer = CustomerOrderPoller::new(Arc::clone(&backend), POLL);
    customer.track(order.id.clone());

    // staff dashboard mounts its queue poller
    let staff = StaffQueuePoller::start(Arc::clone(&backend), POLL);

    tokio::time::sleep(SETTLE).await;
    assert_eq!(customer.orders().len(), 1);
    assert_eq!(customer.orders()[0].status, OrderStatus::Placed);
    assert!(staff.snapshot().iter().any(|o| o.id == order.id));

    // kitchen advances the order; the customer view follows
    backend
        .set_order_status(&order.id, OrderStatus::Preparing)
        .await
        .unwrap();
    tokio::time::sleep(SETTLE).await;
    assert_eq!(customer.orders()[0].status, OrderStatus::Preparing);
    assert_eq!(staff.column(OrderStatus::Preparing).len(), 1);

    // an out-of-band order from another actor reaches the staff queue
    let store = local.order_store();
    store
        .create(
            "table_5",
            vec![OrderItemInput {
                menu_item_id: "item_8".into(),
                quantity: 1,
                note: String::new(),
            }],
        )
        .unwrap();
    tokio::time::sleep(SETTLE).await;
    assert_eq!(staff.snapshot().len(), 2);
    // the customer view only follows its own orders
    assert_eq!(customer.orders().len(), 1);

    // teardown cancels the timers; later changes are no longer applied
    customer.stop();
    staff.stop();
    tokio::time::sleep(SETTLE).await;
    backend
        .set_order_status(&order.id, OrderStatus::Ready)
        .await
        .unwrap();
    tokio::time::sleep(SETTLE).await;
    assert_eq!(customer.orders()[0].status, OrderStatus::Preparing);
}

#[tokio::test]
async fn staff_transition_failure_leaves_the_queue_consistent() {
    let (_, backend) = seeded();

    let order = backend
        .create_order(
            "table_1",
            vec![OrderItemInput {
                menu_item_id: "item_6".into(),
                quantity: 2,
                note: String::new(),
            }],
        )
        .await
        .unwrap();

    // an illegal jump is rejected and nothing moves
    let err = backend
        .set_order_status(&order.id, OrderStatus::Served)
        .await
        .unwrap_err();
    assert!(matches!(err, shared::ServiceError::InvalidTransition { .. }));

    let listed = backend.list_orders(&OrderFilter::default()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, OrderStatus::Placed);
}

#[tokio::test]
async fn seed_orders_populate_the_pipeline() {
    let (local, backend) = seeded();
    comanda_server::seed::seed_orders(&local.order_store()).unwrap();

    let staff = StaffQueuePoller::start(Arc::clone(&backend), POLL);
    tokio::time::sleep(SETTLE).await;

    assert_eq!(staff.snapshot().len(), 3);
    assert_eq!(staff.column(OrderStatus::Placed).len(), 1);
    assert_eq!(staff.column(OrderStatus::Preparing).len(), 1);
    assert_eq!(staff.column(OrderStatus::Ready).len(), 1);
}
