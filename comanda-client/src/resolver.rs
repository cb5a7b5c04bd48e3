//! Table resolver
//!
//! Gate for the customer-facing flow: the slug from the scanned link
//! either resolves to a real table or the whole ordering surface stays
//! blocked. There is deliberately no fallback table - a guessed slug
//! must not leak access to another table's queue.

use shared::ServiceResult;
use shared::client::Backend;
use shared::models::Table;
use std::sync::Arc;

/// Resolves QR slugs to tables
pub struct TableResolver {
    backend: Arc<dyn Backend>,
}

impl TableResolver {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Resolve the slug embedded in a customer link
    ///
    /// Exact, case-sensitive match. The error is meant to be surfaced
    /// as a blocking message; callers must not continue the ordering
    /// flow without a resolved table.
    pub async fn resolve(&self, slug: &str) -> ServiceResult<Table> {
        match self.backend.get_table_by_slug(slug).await {
            Ok(table) => {
                tracing::debug!(slug = %slug, table = table.number, "Table resolved");
                Ok(table)
            }
            Err(e) => {
                tracing::warn!(slug = %slug, error = %e, "Table resolution failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_server::LocalBackend;
    use shared::ServiceError;

    #[tokio::test]
    async fn valid_slug_resolves() {
        let resolver = TableResolver::new(Arc::new(LocalBackend::seeded()));
        let table = resolver.resolve("table-1-secret").await.unwrap();
        assert_eq!(table.number, 1);
        assert_eq!(table.id, "table_1");
    }

    #[tokio::test]
    async fn unknown_slug_blocks_the_flow() {
        let resolver = TableResolver::new(Arc::new(LocalBackend::seeded()));
        let err = resolver.resolve("table-7-guessed").await.unwrap_err();
        assert_eq!(err, ServiceError::InvalidTable("table-7-guessed".into()));
    }
}
