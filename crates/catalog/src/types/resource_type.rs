//! The catalogue of known resource type keys.

use serde::Serialize;

/// A resource type known to the catalog UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceType {
    /// Key used to address the collection ("business-roles", "users", ...).
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

/// Every resource type the catalog lists, in display order.
pub const RESOURCE_TYPES: &[ResourceType] = &[
    ResourceType { key: "business-roles", label: "Business Roles" },
    ResourceType { key: "application-roles", label: "Application Roles" },
    ResourceType { key: "azure-licenses", label: "Azure Licenses" },
    ResourceType { key: "azure-admin-roles", label: "Azure Admin Roles" },
    ResourceType { key: "azure-rbac-roles", label: "Azure RBAC Roles" },
    ResourceType { key: "management-roles", label: "Management Roles" },
    ResourceType { key: "mailboxes", label: "Mailboxes" },
    ResourceType { key: "computers", label: "Computers" },
    ResourceType { key: "users", label: "Users" },
    ResourceType { key: "shared-folders", label: "Shared Folders" },
];

/// Looks up a known resource type by key.
pub fn resource_type(key: &str) -> Option<&'static ResourceType> {
    RESOURCE_TYPES.iter().find(|t| t.key == key)
}
