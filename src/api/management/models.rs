//
//  foxnose-sdk
//  api/management/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Management API models.
//!
//! Each model carries the fields the SDK relies on. Everything else the
//! server sends is kept in `extra`, so newer API fields survive a
//! read-modify-write round trip.
//!
//! # Identifiers
//!
//! Client methods take identifiers as [`KeyRef`], implemented for strings and
//! for the models themselves:
//!
//! ```rust,no_run
//! # use foxnose_sdk::ManagementClient;
//! # fn example(client: &ManagementClient) -> foxnose_sdk::Result<()> {
//! let folder = client.get_folder("folder-1").send()?;
//! let resources = client.list_resources(&folder).send()?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Anything that identifies a management object by key.
pub trait KeyRef {
    fn as_key(&self) -> &str;
}

impl KeyRef for str {
    fn as_key(&self) -> &str {
        self
    }
}

impl KeyRef for String {
    fn as_key(&self) -> &str {
        self
    }
}

impl<T: KeyRef + ?Sized> KeyRef for &T {
    fn as_key(&self) -> &str {
        (**self).as_key()
    }
}

macro_rules! key_ref {
    ($($model:ty => $field:ident),* $(,)?) => {
        $(
            impl KeyRef for $model {
                fn as_key(&self) -> &str {
                    &self.$field
                }
            }
        )*
    };
}

key_ref!(
    Organization => key,
    Project => key,
    Environment => key,
    Folder => key,
    Resource => key,
    Revision => key,
    Component => key,
    SchemaVersion => key,
    Role => key,
    ApiKey => key,
    Locale => code,
);

/// A user reference embedded in other objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub key: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// An organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique organization key.
    pub key: String,

    /// Display name.
    pub name: String,

    /// The organization owner.
    #[serde(default)]
    pub owner: Option<UserRef>,

    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,

    /// Whether the organization is blocked.
    #[serde(default)]
    pub is_blocked: bool,

    /// Billing and address fields, block details and anything newer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A hosting region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Region code such as `eu-central-1`.
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Limits attached to a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanLimits {
    #[serde(default)]
    pub projects: Option<u64>,
    #[serde(default)]
    pub environments: Option<u64>,
    #[serde(default)]
    pub folders: Option<u64>,
    #[serde(default)]
    pub resources: Option<u64>,
    #[serde(default)]
    pub users: Option<u64>,
    #[serde(default)]
    pub components: Option<u64>,
    #[serde(default)]
    pub api_keys_max_count: Option<u64>,
    #[serde(default)]
    pub roles_max_count: Option<u64>,
    #[serde(default)]
    pub locales_max_count: Option<u64>,

    /// Remaining limits (unit pricing, schema counts, inheritance depth).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One billing plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub limits: Option<PlanLimits>,

    /// Billing period bounds (`from`, `to`, `transferred`) and anything newer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The active plan of an organization and the one scheduled next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStatus {
    #[serde(default)]
    pub active_plan: Option<Plan>,
    #[serde(default)]
    pub next_plan: Option<Plan>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Storage consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageUsage {
    #[serde(default)]
    pub data_storage: f64,
    #[serde(default)]
    pub vector_storage: f64,
}

/// Resource consumption of an organization.
///
/// `units`, `usage` and `current_usage` change shape between plans and are
/// kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationUsage {
    #[serde(default)]
    pub units: Value,
    #[serde(default)]
    pub storage: Option<StorageUsage>,
    #[serde(default)]
    pub usage: Value,
    #[serde(default)]
    pub current_usage: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A project inside an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub environments: Vec<Environment>,
    #[serde(default)]
    pub gdpr: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An environment inside a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Unique environment key. Environment-scoped paths start with
    /// `/v1/<key>`.
    pub key: String,

    pub name: String,

    #[serde(default)]
    pub project: Option<String>,

    /// Host serving the Flux API for this environment.
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub is_enabled: bool,

    #[serde(default)]
    pub created_at: Option<String>,

    /// `none`, `org_owner` and so on. Absent on older payloads.
    #[serde(default)]
    pub protection_level: Option<String>,

    #[serde(default)]
    pub protection_reason: Option<String>,

    #[serde(default)]
    pub protected_by_user: Option<UserRef>,

    #[serde(default)]
    pub protected_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A folder in the content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub key: String,
    pub name: String,
    pub alias: String,

    /// `collection` or another folder type.
    #[serde(default)]
    pub folder_type: Option<String>,

    #[serde(default)]
    pub content_type: Option<String>,

    #[serde(default)]
    pub strict_reference: bool,

    #[serde(default)]
    pub created_at: Option<String>,

    /// Key of the parent folder, `None` at the root.
    #[serde(default)]
    pub parent: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A content resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub key: String,
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub vectors_size: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default)]
    pub resource_owner: Option<String>,
    #[serde(default)]
    pub current_revision: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A revision of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    pub key: String,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub schema_version: Option<String>,

    /// 1-based revision number.
    #[serde(default)]
    pub number: u64,

    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,

    /// `draft`, `published` and so on.
    #[serde(default)]
    pub status: Option<String>,

    /// Validation result, `None` until validated.
    #[serde(default)]
    pub is_valid: Option<bool>,

    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub unpublished_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A reusable component schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub current_version: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A version of a folder or component schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaVersion {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version_number: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,

    /// Set once the version is published.
    #[serde(default)]
    pub published_at: Option<String>,

    #[serde(default)]
    pub archived_at: Option<String>,

    /// The compiled JSON Schema of this version.
    #[serde(default)]
    pub json_schema: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A field in a schema tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,

    /// Dotted path of the field inside the schema, used to address it.
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub parent: Option<String>,

    #[serde(rename = "type", default)]
    pub field_type: Option<String>,

    #[serde(default)]
    pub meta: Option<Value>,
    #[serde(default)]
    pub json_schema: Option<Value>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub localizable: bool,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub vectorizable: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A role of the Management or Flux API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,

    /// Management roles only.
    #[serde(default)]
    pub full_access: Option<bool>,

    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Actions a role may perform on one content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolePermission {
    pub content_type: String,
    #[serde(default)]
    pub actions: Vec<String>,

    /// When `false`, the permission applies only to the listed objects.
    #[serde(default)]
    pub all_objects: bool,
}

/// One object a restricted permission applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionObject {
    pub content_type: String,
    pub object_key: String,
}

/// An API key of the Management or Flux API.
///
/// `secret_key` is only returned when the key is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub key: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub secret_key: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A content locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locale {
    /// Locale code such as `fr`. Locales are addressed by code.
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
