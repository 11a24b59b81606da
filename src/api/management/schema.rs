//
//  foxnose-sdk
//  api/management/schema.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Components, schema versions and schema fields.
//!
//! Folders and components both carry a versioned schema with the same
//! endpoint layout, `/{folders|components}/<key>/model/versions/`. The
//! version and field calls take a [`SchemaOwner`] naming which one.

use serde_json::Value;

use crate::api::common::{Listing, PathBuilder};
use crate::api::{ApiCall, Request};

use super::models::{Component, Field, Folder, KeyRef, SchemaVersion};
use super::ManagementClient;

/// The object a schema belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaOwner {
    Folder(String),
    Component(String),
}

impl SchemaOwner {
    pub fn folder(key: impl KeyRef) -> Self {
        Self::Folder(key.as_key().to_string())
    }

    pub fn component(key: impl KeyRef) -> Self {
        Self::Component(key.as_key().to_string())
    }

    fn collection(&self) -> &'static str {
        match self {
            Self::Folder(_) => "folders",
            Self::Component(_) => "components",
        }
    }

    fn key(&self) -> &str {
        match self {
            Self::Folder(key) | Self::Component(key) => key,
        }
    }
}

impl From<&Folder> for SchemaOwner {
    fn from(folder: &Folder) -> Self {
        Self::folder(folder)
    }
}

impl From<&Component> for SchemaOwner {
    fn from(component: &Component) -> Self {
        Self::component(component)
    }
}

impl ManagementClient {
    fn component_path(&self, component: &impl KeyRef) -> PathBuilder {
        self.env().literal("components").id(component.as_key())
    }

    fn versions_path(&self, owner: &SchemaOwner) -> PathBuilder {
        self.env()
            .literal(owner.collection())
            .id(owner.key())
            .literal("model/versions")
    }

    fn schema_tree_path(&self, owner: &SchemaOwner, version: &impl KeyRef) -> PathBuilder {
        self.versions_path(owner)
            .id(version.as_key())
            .literal("schema/tree")
    }

    // Components

    pub fn list_components(&self) -> ApiCall<'_, Listing<Component>> {
        self.call(Request::get(self.env().literal("components").build()))
    }

    pub fn create_component(&self, payload: Value) -> ApiCall<'_, Component> {
        self.call(Request::post(self.env().literal("components").build()).json(payload))
    }

    pub fn get_component(&self, component: impl KeyRef) -> ApiCall<'_, Component> {
        self.call(Request::get(self.component_path(&component).build()))
    }

    pub fn update_component(&self, component: impl KeyRef, payload: Value) -> ApiCall<'_, Component> {
        self.call(Request::put(self.component_path(&component).build()).json(payload))
    }

    pub fn delete_component(&self, component: impl KeyRef) -> ApiCall<'_, ()> {
        self.discard(Request::delete(self.component_path(&component).build()))
    }

    // Schema versions

    pub fn list_schema_versions(
        &self,
        owner: impl Into<SchemaOwner>,
    ) -> ApiCall<'_, Listing<SchemaVersion>> {
        self.call(Request::get(self.versions_path(&owner.into()).build()))
    }

    /// Creates a draft version, optionally copying the fields of an
    /// existing version.
    pub fn create_schema_version(
        &self,
        owner: impl Into<SchemaOwner>,
        payload: Value,
        copy_from: Option<&str>,
    ) -> ApiCall<'_, SchemaVersion> {
        let request = Request::post(self.versions_path(&owner.into()).build())
            .query_opt("copy_from", copy_from)
            .json(payload);
        self.call(request)
    }

    pub fn get_schema_version(
        &self,
        owner: impl Into<SchemaOwner>,
        version: impl KeyRef,
    ) -> ApiCall<'_, SchemaVersion> {
        let path = self.versions_path(&owner.into()).id(version.as_key()).build();
        self.call(Request::get(path))
    }

    pub fn update_schema_version(
        &self,
        owner: impl Into<SchemaOwner>,
        version: impl KeyRef,
        payload: Value,
    ) -> ApiCall<'_, SchemaVersion> {
        let path = self.versions_path(&owner.into()).id(version.as_key()).build();
        self.call(Request::put(path).json(payload))
    }

    pub fn delete_schema_version(
        &self,
        owner: impl Into<SchemaOwner>,
        version: impl KeyRef,
    ) -> ApiCall<'_, ()> {
        let path = self.versions_path(&owner.into()).id(version.as_key()).build();
        self.discard(Request::delete(path))
    }

    /// Publishes a version, making it the schema new revisions validate
    /// against.
    pub fn publish_schema_version(
        &self,
        owner: impl Into<SchemaOwner>,
        version: impl KeyRef,
    ) -> ApiCall<'_, SchemaVersion> {
        let path = self
            .versions_path(&owner.into())
            .id(version.as_key())
            .literal("publish")
            .build();
        self.call(Request::post(path))
    }

    // Schema fields

    pub fn list_schema_fields(
        &self,
        owner: impl Into<SchemaOwner>,
        version: impl KeyRef,
    ) -> ApiCall<'_, Listing<Field>> {
        self.call(Request::get(self.schema_tree_path(&owner.into(), &version).build()))
    }

    pub fn create_schema_field(
        &self,
        owner: impl Into<SchemaOwner>,
        version: impl KeyRef,
        payload: Value,
    ) -> ApiCall<'_, Field> {
        let path = self.schema_tree_path(&owner.into(), &version).build();
        self.call(Request::post(path).json(payload))
    }

    /// Fields are addressed by their dotted `path` inside the schema.
    pub fn get_schema_field(
        &self,
        owner: impl Into<SchemaOwner>,
        version: impl KeyRef,
        field_path: &str,
    ) -> ApiCall<'_, Field> {
        let path = self.schema_tree_path(&owner.into(), &version).literal("field").build();
        self.call(Request::get(path).query("path", field_path))
    }

    pub fn update_schema_field(
        &self,
        owner: impl Into<SchemaOwner>,
        version: impl KeyRef,
        field_path: &str,
        payload: Value,
    ) -> ApiCall<'_, Field> {
        let path = self.schema_tree_path(&owner.into(), &version).literal("field").build();
        self.call(Request::put(path).query("path", field_path).json(payload))
    }

    pub fn delete_schema_field(
        &self,
        owner: impl Into<SchemaOwner>,
        version: impl KeyRef,
        field_path: &str,
    ) -> ApiCall<'_, ()> {
        let path = self.schema_tree_path(&owner.into(), &version).literal("field").build();
        self.discard(Request::delete(path).query("path", field_path))
    }
}
