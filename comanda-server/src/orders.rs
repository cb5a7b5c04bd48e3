//! Order store
//!
//! Single logical store for all placed orders. `update_status` is the
//! only mutation path for an order's status and runs as an atomic
//! read-modify-write under the map's shard lock, so a concurrent staff
//! update always observes the latest status before the transition is
//! validated. Orders are never deleted; Served and Canceled orders are
//! retained for history.
//!
//! Every successful `create`/`update_status` is visible to subsequent
//! `list`/`get` calls from any holder of the store, which is how
//! out-of-band order arrival (another actor creating orders on a shared
//! handle) reaches the staff queue on its next poll.

use crate::catalog::MenuCatalog;
use crate::tables::TableDirectory;
use chrono::Utc;
use dashmap::DashMap;
use shared::money;
use shared::order::{Order, OrderFilter, OrderItem, OrderItemInput, OrderStatus};
use shared::{ServiceError, ServiceResult};
use std::sync::Arc;

/// In-memory order store
pub struct OrderStore {
    orders: DashMap<String, Order>,
    catalog: Arc<MenuCatalog>,
    tables: Arc<TableDirectory>,
}

impl OrderStore {
    pub fn new(catalog: Arc<MenuCatalog>, tables: Arc<TableDirectory>) -> Self {
        Self {
            orders: DashMap::new(),
            catalog,
            tables,
        }
    }

    /// Place a new order for a table
    ///
    /// Resolves every input line against current menu data and
    /// snapshots name and price into the order, so later menu edits
    /// never change what was recorded here. The order enters the
    /// pipeline as `Placed`. Nothing is appended if any line fails to
    /// resolve.
    pub fn create(&self, table_id: &str, items: Vec<OrderItemInput>) -> ServiceResult<Order> {
        if items.is_empty() {
            return Err(ServiceError::EmptyOrder);
        }
        let table = self
            .tables
            .get_by_id(table_id)
            .map_err(|_| ServiceError::TableNotFound(table_id.to_string()))?;

        let mut snapshots = Vec::with_capacity(items.len());
        for input in items {
            let menu_item = self.catalog.get_item(&input.menu_item_id)?;
            snapshots.push(OrderItem {
                menu_item_id: menu_item.id,
                name: menu_item.name,
                price: menu_item.price,
                quantity: input.quantity,
                note: input.note,
            });
        }

        let total = money::sum_lines(snapshots.iter().map(|item| (item.price, item.quantity)));
        let order = Order {
            id: uuid::Uuid::new_v4().to_string(),
            table_id: table.id,
            table_number: table.number,
            items: snapshots,
            status: OrderStatus::Placed,
            total,
            created_at: Utc::now(),
        };

        tracing::info!(
            order_id = %order.id,
            table = order.table_number,
            total = order.total,
            "Order placed"
        );
        self.orders.insert(order.id.clone(), order.clone());
        Ok(order)
    }

    /// List orders matching the filter
    ///
    /// No ordering guarantee; consumers sort by `created_at` themselves.
    pub fn list(&self, filter: &OrderFilter) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Fetch a single order by id
    pub fn get(&self, id: &str) -> Option<Order> {
        self.orders.get(id).map(|entry| entry.value().clone())
    }

    /// Advance (or correct) an order's status
    ///
    /// Fails with `OrderNotFound` for an unknown id and with
    /// `InvalidTransition` for any edge outside the status machine;
    /// on failure the stored order is unchanged.
    pub fn update_status(&self, id: &str, new_status: OrderStatus) -> ServiceResult<Order> {
        let mut entry = self
            .orders
            .get_mut(id)
            .ok_or_else(|| ServiceError::OrderNotFound(id.to_string()))?;
        OrderStatus::validate_transition(entry.status, new_status)?;

        let old_status = entry.status;
        entry.status = new_status;
        tracing::info!(
            order_id = %id,
            from = %old_status,
            to = %new_status,
            "Order status updated"
        );
        Ok(entry.clone())
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn store() -> OrderStore {
        OrderStore::new(
            Arc::new(MenuCatalog::new(seed::menu_items(), seed::categories())),
            Arc::new(TableDirectory::new(seed::tables())),
        )
    }

    fn pizza_and_water() -> Vec<OrderItemInput> {
        vec![
            OrderItemInput {
                menu_item_id: "item_3".into(), // Margherita Pizza, 15.00
                quantity: 1,
                note: "Extra basil".into(),
            },
            OrderItemInput {
                menu_item_id: "item_9".into(), // San Pellegrino, 4.00
                quantity: 2,
                note: String::new(),
            },
        ]
    }

    #[test]
    fn create_then_get_round_trips() {
        let store = store();
        let order = store.create("table_1", pizza_and_water()).unwrap();

        assert_eq!(order.status, OrderStatus::Placed);
        assert_eq!(order.table_number, 1);
        assert_eq!(order.total, 23.00);

        let fetched = store.get(&order.id).unwrap();
        assert_eq!(fetched.items, order.items);
        assert_eq!(fetched.total, order.total);
        assert_eq!(fetched.status, OrderStatus::Placed);
    }

    #[test]
    fn empty_order_is_rejected_and_not_appended() {
        let store = store();
        let err = store.create("table_1", vec![]).unwrap_err();
        assert_eq!(err, ServiceError::EmptyOrder);
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_table_is_rejected() {
        let store = store();
        let err = store.create("table_99", pizza_and_water()).unwrap_err();
        assert_eq!(err, ServiceError::TableNotFound("table_99".into()));
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_menu_item_rejects_the_whole_order() {
        let store = store();
        let items = vec![
            OrderItemInput {
                menu_item_id: "item_3".into(),
                quantity: 1,
                note: String::new(),
            },
            OrderItemInput {
                menu_item_id: "item_404".into(),
                quantity: 1,
                note: String::new(),
            },
        ];
        let err = store.create("table_1", items).unwrap_err();
        assert_eq!(err, ServiceError::ItemNotFound("item_404".into()));
        assert!(store.is_empty());
    }

    #[test]
    fn snapshot_price_survives_menu_drift() {
        // Catalog clone with the pizza priced differently must not
        // affect an already placed order.
        let store = store();
        let order = store.create("table_1", pizza_and_water()).unwrap();
        assert_eq!(order.items[0].price, 15.00);
        assert_eq!(order.items[0].name, "Margherita Pizza");
        // total came from the snapshots, not recomputed on read
        assert_eq!(store.get(&order.id).unwrap().total, 23.00);
    }

    #[test]
    fn full_pipeline_walk() {
        let store = store();
        let order = store.create("table_1", pizza_and_water()).unwrap();

        for expected in [
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Served,
        ] {
            let updated = store.update_status(&order.id, expected).unwrap();
            assert_eq!(updated.status, expected);
        }
        assert_eq!(store.get(&order.id).unwrap().status, OrderStatus::Served);
    }

    #[test]
    fn staff_correction_walks_backward() {
        let store = store();
        let order = store.create("table_1", pizza_and_water()).unwrap();
        store.update_status(&order.id, OrderStatus::Preparing).unwrap();
        store.update_status(&order.id, OrderStatus::Ready).unwrap();

        let corrected = store.update_status(&order.id, OrderStatus::Preparing).unwrap();
        assert_eq!(corrected.status, OrderStatus::Preparing);
    }

    #[test]
    fn illegal_jump_leaves_order_unchanged() {
        let store = store();
        let order = store.create("table_1", pizza_and_water()).unwrap();

        let err = store.update_status(&order.id, OrderStatus::Served).unwrap_err();
        assert_eq!(
            err,
            ServiceError::InvalidTransition {
                from: OrderStatus::Placed,
                to: OrderStatus::Served,
            }
        );
        assert_eq!(store.get(&order.id).unwrap().status, OrderStatus::Placed);
    }

    #[test]
    fn cancel_allowed_until_served() {
        let store = store();
        for target in [OrderStatus::Placed, OrderStatus::Preparing, OrderStatus::Ready] {
            let order = store.create("table_1", pizza_and_water()).unwrap();
            let mut current = OrderStatus::Placed;
            while current != target {
                current = current.next().unwrap();
                store.update_status(&order.id, current).unwrap();
            }
            let canceled = store.update_status(&order.id, OrderStatus::Canceled).unwrap();
            assert_eq!(canceled.status, OrderStatus::Canceled);
        }
    }

    #[test]
    fn served_and_canceled_refuse_cancel() {
        let store = store();

        let served = store.create("table_1", pizza_and_water()).unwrap();
        for status in [OrderStatus::Preparing, OrderStatus::Ready, OrderStatus::Served] {
            store.update_status(&served.id, status).unwrap();
        }
        assert!(store.update_status(&served.id, OrderStatus::Canceled).is_err());
        assert_eq!(store.get(&served.id).unwrap().status, OrderStatus::Served);

        let canceled = store.create("table_1", pizza_and_water()).unwrap();
        store.update_status(&canceled.id, OrderStatus::Canceled).unwrap();
        assert!(store.update_status(&canceled.id, OrderStatus::Placed).is_err());
        assert_eq!(store.get(&canceled.id).unwrap().status, OrderStatus::Canceled);
    }

    #[test]
    fn unknown_order_id_is_an_error() {
        let store = store();
        let err = store
            .update_status("order_missing", OrderStatus::Preparing)
            .unwrap_err();
        assert_eq!(err, ServiceError::OrderNotFound("order_missing".into()));
    }

    #[test]
    fn list_filters_by_status_and_table() {
        let store = store();
        let a = store.create("table_1", pizza_and_water()).unwrap();
        let b = store.create("table_2", pizza_and_water()).unwrap();
        store.update_status(&b.id, OrderStatus::Preparing).unwrap();

        let placed = store.list(&OrderFilter {
            status: Some(OrderStatus::Placed),
            table_id: None,
        });
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].id, a.id);

        let table_2 = store.list(&OrderFilter {
            status: None,
            table_id: Some("table_2".into()),
        });
        assert_eq!(table_2.len(), 1);
        assert_eq!(table_2[0].id, b.id);

        assert_eq!(store.list(&OrderFilter::default()).len(), 2);
    }

    #[test]
    fn external_append_is_visible_on_next_list() {
        // Another actor holding the same store handle appends an order;
        // it must show up on the next list call.
        let store = Arc::new(store());
        let other_actor = Arc::clone(&store);
        other_actor.create("table_4", pizza_and_water()).unwrap();

        assert_eq!(store.list(&OrderFilter::default()).len(), 1);
    }
}
