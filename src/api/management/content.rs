//
//  foxnose-sdk
//  api/management/content.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Folders, resources and revisions.
//!
//! Folders are addressed through the tree endpoint with a `key` or `path`
//! query parameter. Resources and revisions live under their folder.

use serde_json::Value;

use crate::api::common::{Listing, PathBuilder};
use crate::api::{ApiCall, Request};

use super::models::{Folder, KeyRef, Resource, Revision};
use super::ManagementClient;

impl ManagementClient {
    fn folder_tree_path(&self) -> PathBuilder {
        self.env().literal("folders/tree")
    }

    fn folder_item_path(&self) -> String {
        self.folder_tree_path().literal("folder").build()
    }

    fn resource_path(&self, folder: &impl KeyRef, resource: &impl KeyRef) -> PathBuilder {
        self.env()
            .literal("folders")
            .id(folder.as_key())
            .literal("resources")
            .id(resource.as_key())
    }

    fn revision_path(
        &self,
        folder: &impl KeyRef,
        resource: &impl KeyRef,
        revision: &impl KeyRef,
    ) -> PathBuilder {
        self.resource_path(folder, resource)
            .literal("revisions")
            .id(revision.as_key())
    }

    // Folders

    /// The whole folder tree.
    pub fn list_folders(&self) -> ApiCall<'_, Listing<Folder>> {
        self.call(Request::get(self.folder_tree_path().build()))
    }

    /// The folder tree below `key`. `mode` selects e.g. `children` only.
    pub fn list_folder_tree(
        &self,
        key: Option<&str>,
        mode: Option<&str>,
    ) -> ApiCall<'_, Listing<Folder>> {
        let request = Request::get(self.folder_tree_path().build())
            .query_opt("key", key)
            .query_opt("mode", mode);
        self.call(request)
    }

    pub fn get_folder(&self, folder: impl KeyRef) -> ApiCall<'_, Folder> {
        self.call(Request::get(self.folder_item_path()).query("key", folder.as_key()))
    }

    /// Looks a folder up by its alias path, such as `blog/posts`.
    pub fn get_folder_by_path(&self, path: &str) -> ApiCall<'_, Folder> {
        self.call(Request::get(self.folder_item_path()).query("path", path))
    }

    pub fn create_folder(&self, payload: Value) -> ApiCall<'_, Folder> {
        self.call(Request::post(self.folder_tree_path().build()).json(payload))
    }

    pub fn update_folder(&self, folder: impl KeyRef, payload: Value) -> ApiCall<'_, Folder> {
        let request = Request::put(self.folder_item_path())
            .query("key", folder.as_key())
            .json(payload);
        self.call(request)
    }

    pub fn delete_folder(&self, folder: impl KeyRef) -> ApiCall<'_, ()> {
        self.discard(Request::delete(self.folder_item_path()).query("key", folder.as_key()))
    }

    // Resources

    pub fn list_resources(&self, folder: impl KeyRef) -> ApiCall<'_, Listing<Resource>> {
        let path = self
            .env()
            .literal("folders")
            .id(folder.as_key())
            .literal("resources")
            .build();
        self.call(Request::get(path))
    }

    /// Creates a resource. `component` selects the component schema for
    /// folders that mix several.
    pub fn create_resource(
        &self,
        folder: impl KeyRef,
        payload: Value,
        component: Option<&str>,
    ) -> ApiCall<'_, Resource> {
        let path = self
            .env()
            .literal("folders")
            .id(folder.as_key())
            .literal("resources")
            .build();
        self.call(Request::post(path).query_opt("component", component).json(payload))
    }

    pub fn get_resource(&self, folder: impl KeyRef, resource: impl KeyRef) -> ApiCall<'_, Resource> {
        self.call(Request::get(self.resource_path(&folder, &resource).build()))
    }

    /// Updates a resource and returns it as stored.
    ///
    /// The update itself answers without a body, so the resource is fetched
    /// again once the update succeeds.
    pub fn update_resource(
        &self,
        folder: impl KeyRef,
        resource: impl KeyRef,
        payload: Value,
    ) -> ApiCall<'_, Resource> {
        let path = self.resource_path(&folder, &resource).build();
        self.call(Request::put(path.clone()).json(payload))
            .then_fetch(Request::get(path))
    }

    pub fn delete_resource(&self, folder: impl KeyRef, resource: impl KeyRef) -> ApiCall<'_, ()> {
        self.discard(Request::delete(self.resource_path(&folder, &resource).build()))
    }

    /// Content of the published revision.
    pub fn get_resource_data(&self, folder: impl KeyRef, resource: impl KeyRef) -> ApiCall<'_, Value> {
        let path = self.resource_path(&folder, &resource).literal("data").build();
        self.call(Request::get(path))
    }

    // Revisions

    pub fn list_revisions(
        &self,
        folder: impl KeyRef,
        resource: impl KeyRef,
    ) -> ApiCall<'_, Listing<Revision>> {
        let path = self
            .resource_path(&folder, &resource)
            .literal("revisions")
            .build();
        self.call(Request::get(path))
    }

    pub fn create_revision(
        &self,
        folder: impl KeyRef,
        resource: impl KeyRef,
        payload: Value,
    ) -> ApiCall<'_, Revision> {
        let path = self
            .resource_path(&folder, &resource)
            .literal("revisions")
            .build();
        self.call(Request::post(path).json(payload))
    }

    pub fn get_revision(
        &self,
        folder: impl KeyRef,
        resource: impl KeyRef,
        revision: impl KeyRef,
    ) -> ApiCall<'_, Revision> {
        self.call(Request::get(self.revision_path(&folder, &resource, &revision).build()))
    }

    pub fn update_revision(
        &self,
        folder: impl KeyRef,
        resource: impl KeyRef,
        revision: impl KeyRef,
        payload: Value,
    ) -> ApiCall<'_, Revision> {
        let path = self.revision_path(&folder, &resource, &revision).build();
        self.call(Request::put(path).json(payload))
    }

    pub fn delete_revision(
        &self,
        folder: impl KeyRef,
        resource: impl KeyRef,
        revision: impl KeyRef,
    ) -> ApiCall<'_, ()> {
        self.discard(Request::delete(self.revision_path(&folder, &resource, &revision).build()))
    }

    pub fn publish_revision(
        &self,
        folder: impl KeyRef,
        resource: impl KeyRef,
        revision: impl KeyRef,
    ) -> ApiCall<'_, Revision> {
        let path = self
            .revision_path(&folder, &resource, &revision)
            .literal("publish")
            .build();
        self.call(Request::post(path))
    }

    /// Validates revision content against its schema. The report is
    /// returned as sent by the server.
    pub fn validate_revision(
        &self,
        folder: impl KeyRef,
        resource: impl KeyRef,
        revision: impl KeyRef,
    ) -> ApiCall<'_, Value> {
        let path = self
            .revision_path(&folder, &resource, &revision)
            .literal("validate")
            .build();
        self.call(Request::post(path))
    }

    pub fn get_revision_data(
        &self,
        folder: impl KeyRef,
        resource: impl KeyRef,
        revision: impl KeyRef,
    ) -> ApiCall<'_, Value> {
        let path = self
            .revision_path(&folder, &resource, &revision)
            .literal("data")
            .build();
        self.call(Request::get(path))
    }
}
