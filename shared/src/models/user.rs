//! User and Role Models
//!
//! Roles form a closed set. View access is decided once at the
//! boundary via [`Role::accessible_views`] rather than scattered
//! per-surface checks; the staff view set is an explicit subset of the
//! admin one.

use serde::{Deserialize, Serialize};

/// Authenticated user identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// User role
///
/// Customer is implicit for unauthenticated table sessions; Staff and
/// Admin require authentication.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Staff,
    Admin,
}

/// Gated application surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Table-scoped menu and cart surface
    CustomerMenu,
    /// Kitchen order queue
    StaffDashboard,
    /// Menu catalog management
    AdminMenu,
    /// Table record management
    AdminTables,
}

const CUSTOMER_VIEWS: &[View] = &[View::CustomerMenu];
const STAFF_VIEWS: &[View] = &[View::StaffDashboard];
const ADMIN_VIEWS: &[View] = &[View::StaffDashboard, View::AdminMenu, View::AdminTables];

impl Role {
    /// The set of views this role may reach
    pub fn accessible_views(&self) -> &'static [View] {
        match self {
            Role::Customer => CUSTOMER_VIEWS,
            Role::Staff => STAFF_VIEWS,
            Role::Admin => ADMIN_VIEWS,
        }
    }

    pub fn can_access(&self, view: View) -> bool {
        self.accessible_views().contains(&view)
    }
}
