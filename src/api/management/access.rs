//
//  foxnose-sdk
//  api/management/access.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Roles, permissions, API keys and locales.
//!
//! The Management API and the Flux API each have their own roles and API
//! keys. Both sets share one layout under `/v1/<env>/permissions/<scope>/`
//! and are selected with [`ApiScope`].

use std::fmt;

use serde_json::Value;

use crate::api::common::{Listing, PathBuilder};
use crate::api::{ApiCall, Request};

use super::models::{ApiKey, KeyRef, Locale, PermissionObject, Role, RolePermission};
use super::ManagementClient;

/// Which API a role or API key grants access to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiScope {
    /// The administrative API this client talks to.
    Management,
    /// The read-side delivery API (see [`crate::FluxClient`]).
    Flux,
}

impl ApiScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Management => "management-api",
            Self::Flux => "flux-api",
        }
    }
}

impl fmt::Display for ApiScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ManagementClient {
    fn scope_path(&self, scope: ApiScope) -> PathBuilder {
        self.env().literal("permissions").literal(scope.as_str())
    }

    fn role_path(&self, scope: ApiScope, role: &impl KeyRef) -> PathBuilder {
        self.scope_path(scope).literal("roles").id(role.as_key())
    }

    fn api_key_path(&self, scope: ApiScope, key: &impl KeyRef) -> PathBuilder {
        self.scope_path(scope).literal("api-keys").id(key.as_key())
    }

    fn locale_path(&self, locale: &impl KeyRef) -> PathBuilder {
        self.env().literal("locales").id(locale.as_key())
    }

    // Roles

    pub fn list_roles(&self, scope: ApiScope) -> ApiCall<'_, Listing<Role>> {
        self.call(Request::get(self.scope_path(scope).literal("roles").build()))
    }

    pub fn create_role(&self, scope: ApiScope, payload: Value) -> ApiCall<'_, Role> {
        let path = self.scope_path(scope).literal("roles").build();
        self.call(Request::post(path).json(payload))
    }

    pub fn get_role(&self, scope: ApiScope, role: impl KeyRef) -> ApiCall<'_, Role> {
        self.call(Request::get(self.role_path(scope, &role).build()))
    }

    pub fn update_role(&self, scope: ApiScope, role: impl KeyRef, payload: Value) -> ApiCall<'_, Role> {
        self.call(Request::put(self.role_path(scope, &role).build()).json(payload))
    }

    pub fn delete_role(&self, scope: ApiScope, role: impl KeyRef) -> ApiCall<'_, ()> {
        self.discard(Request::delete(self.role_path(scope, &role).build()))
    }

    // Role permissions

    pub fn list_role_permissions(
        &self,
        scope: ApiScope,
        role: impl KeyRef,
    ) -> ApiCall<'_, Vec<RolePermission>> {
        let path = self.role_path(scope, &role).literal("permissions").build();
        self.call(Request::get(path))
    }

    /// Creates the permission for its content type or replaces the existing one.
    pub fn upsert_role_permission(
        &self,
        scope: ApiScope,
        role: impl KeyRef,
        permission: Value,
    ) -> ApiCall<'_, RolePermission> {
        let path = self.role_path(scope, &role).literal("permissions").build();
        self.call(Request::post(path).json(permission))
    }

    pub fn delete_role_permission(
        &self,
        scope: ApiScope,
        role: impl KeyRef,
        content_type: &str,
    ) -> ApiCall<'_, ()> {
        let path = self.role_path(scope, &role).literal("permissions").build();
        self.discard(Request::delete(path).query("content_type", content_type))
    }

    /// Replaces every permission of the role with `permissions`, a JSON array.
    pub fn replace_role_permissions(
        &self,
        scope: ApiScope,
        role: impl KeyRef,
        permissions: Value,
    ) -> ApiCall<'_, Vec<RolePermission>> {
        let path = self
            .role_path(scope, &role)
            .literal("permissions/batch")
            .build();
        self.call(Request::post(path).json(permissions))
    }

    pub fn list_permission_objects(
        &self,
        scope: ApiScope,
        role: impl KeyRef,
        content_type: &str,
    ) -> ApiCall<'_, Vec<PermissionObject>> {
        let path = self
            .role_path(scope, &role)
            .literal("permissions/objects")
            .build();
        self.call(Request::get(path).query("content_type", content_type))
    }

    pub fn add_permission_object(
        &self,
        scope: ApiScope,
        role: impl KeyRef,
        object: Value,
    ) -> ApiCall<'_, PermissionObject> {
        let path = self
            .role_path(scope, &role)
            .literal("permissions/objects")
            .build();
        self.call(Request::post(path).json(object))
    }

    /// The object to remove is identified by the request body.
    pub fn delete_permission_object(
        &self,
        scope: ApiScope,
        role: impl KeyRef,
        object: Value,
    ) -> ApiCall<'_, ()> {
        let path = self
            .role_path(scope, &role)
            .literal("permissions/objects")
            .build();
        self.discard(Request::delete(path).json(object))
    }

    // API keys

    pub fn list_api_keys(&self, scope: ApiScope) -> ApiCall<'_, Listing<ApiKey>> {
        self.call(Request::get(self.scope_path(scope).literal("api-keys").build()))
    }

    /// Creates a key. The secret is only present in this response.
    pub fn create_api_key(&self, scope: ApiScope, payload: Value) -> ApiCall<'_, ApiKey> {
        let path = self.scope_path(scope).literal("api-keys").build();
        self.call(Request::post(path).json(payload))
    }

    pub fn get_api_key(&self, scope: ApiScope, key: impl KeyRef) -> ApiCall<'_, ApiKey> {
        self.call(Request::get(self.api_key_path(scope, &key).build()))
    }

    pub fn update_api_key(&self, scope: ApiScope, key: impl KeyRef, payload: Value) -> ApiCall<'_, ApiKey> {
        self.call(Request::put(self.api_key_path(scope, &key).build()).json(payload))
    }

    pub fn delete_api_key(&self, scope: ApiScope, key: impl KeyRef) -> ApiCall<'_, ()> {
        self.discard(Request::delete(self.api_key_path(scope, &key).build()))
    }

    // Locales

    pub fn list_locales(&self) -> ApiCall<'_, Listing<Locale>> {
        self.call(Request::get(self.env().literal("locales").build()))
    }

    pub fn create_locale(&self, payload: Value) -> ApiCall<'_, Locale> {
        self.call(Request::post(self.env().literal("locales").build()).json(payload))
    }

    pub fn get_locale(&self, code: impl KeyRef) -> ApiCall<'_, Locale> {
        self.call(Request::get(self.locale_path(&code).build()))
    }

    pub fn update_locale(&self, code: impl KeyRef, payload: Value) -> ApiCall<'_, Locale> {
        self.call(Request::put(self.locale_path(&code).build()).json(payload))
    }

    pub fn delete_locale(&self, code: impl KeyRef) -> ApiCall<'_, ()> {
        self.discard(Request::delete(self.locale_path(&code).build()))
    }
}
