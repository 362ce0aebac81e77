//! Role to permission grants.
//!
//! Permissions are named `resource:action`. The grants are static; a role
//! never gains or loses a permission at runtime.

use std::fmt;

use crate::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    UsersCreate,
    UsersRead,
    UsersUpdate,
    UsersDelete,
    ServicesCreate,
    ServicesRead,
    ServicesUpdate,
    ServicesDelete,
    ReservationsCreate,
    ReservationsRead,
    ReservationsUpdate,
    ReservationsDelete,
}

const ADMIN_GRANTS: &[Permission] = &[
    Permission::UsersCreate,
    Permission::UsersRead,
    Permission::UsersUpdate,
    Permission::UsersDelete,
    Permission::ServicesRead,
    Permission::ReservationsRead,
    Permission::ReservationsUpdate,
];

const PROVIDER_GRANTS: &[Permission] = &[
    Permission::ServicesCreate,
    Permission::ServicesRead,
    Permission::ServicesUpdate,
    Permission::ServicesDelete,
    Permission::ReservationsRead,
    Permission::ReservationsUpdate,
];

const CUSTOMER_GRANTS: &[Permission] = &[
    Permission::ServicesRead,
    Permission::ReservationsCreate,
    Permission::ReservationsRead,
    Permission::ReservationsUpdate,
];

impl Permission {
    pub const ALL: [Permission; 12] = [
        Permission::UsersCreate,
        Permission::UsersRead,
        Permission::UsersUpdate,
        Permission::UsersDelete,
        Permission::ServicesCreate,
        Permission::ServicesRead,
        Permission::ServicesUpdate,
        Permission::ServicesDelete,
        Permission::ReservationsCreate,
        Permission::ReservationsRead,
        Permission::ReservationsUpdate,
        Permission::ReservationsDelete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::UsersCreate => "users:create",
            Permission::UsersRead => "users:read",
            Permission::UsersUpdate => "users:update",
            Permission::UsersDelete => "users:delete",
            Permission::ServicesCreate => "services:create",
            Permission::ServicesRead => "services:read",
            Permission::ServicesUpdate => "services:update",
            Permission::ServicesDelete => "services:delete",
            Permission::ReservationsCreate => "reservations:create",
            Permission::ReservationsRead => "reservations:read",
            Permission::ReservationsUpdate => "reservations:update",
            Permission::ReservationsDelete => "reservations:delete",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Role {
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Admin => ADMIN_GRANTS,
            Role::Provider => PROVIDER_GRANTS,
            Role::Customer => CUSTOMER_GRANTS,
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}
