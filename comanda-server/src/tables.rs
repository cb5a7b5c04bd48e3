//! Table directory
//!
//! Backs the customer-facing table resolver. Slug comparison is exact
//! and case-sensitive; an unknown or guessed slug must fail rather than
//! fall back to a default table, so an invalid link can never leak
//! access to a real table's ordering queue.

use shared::ServiceError;
use shared::models::Table;

/// Read-only table directory
#[derive(Debug)]
pub struct TableDirectory {
    tables: Vec<Table>,
}

impl TableDirectory {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// Resolve a QR slug to its table
    pub fn get_by_slug(&self, slug: &str) -> Result<Table, ServiceError> {
        self.tables
            .iter()
            .find(|table| table.qr_slug == slug)
            .cloned()
            .ok_or_else(|| ServiceError::InvalidTable(slug.to_string()))
    }

    /// Look up a table by id
    pub fn get_by_id(&self, id: &str) -> Result<Table, ServiceError> {
        self.tables
            .iter()
            .find(|table| table.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::TableNotFound(id.to_string()))
    }

    pub fn list(&self) -> Vec<Table> {
        self.tables.clone()
    }
}
