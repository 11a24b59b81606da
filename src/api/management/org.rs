//
//  foxnose-sdk
//  api/management/org.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organizations, plans, projects and environments.
//!
//! These endpoints are not environment-scoped and live at the API root.

use serde_json::{json, Value};

use crate::api::common::{Listing, PathBuilder};
use crate::api::{ApiCall, Request};

use super::models::{
    Environment, KeyRef, Organization, OrganizationUsage, PlanStatus, Project, Region,
};
use super::ManagementClient;

impl ManagementClient {
    fn organization_path(&self, org: &impl KeyRef) -> PathBuilder {
        self.root().literal("organizations").id(org.as_key())
    }

    fn project_path(&self, org: &impl KeyRef, project: &impl KeyRef) -> PathBuilder {
        self.organization_path(org).literal("projects").id(project.as_key())
    }

    fn environment_path(
        &self,
        org: &impl KeyRef,
        project: &impl KeyRef,
        environment: &impl KeyRef,
    ) -> PathBuilder {
        self.project_path(org, project)
            .literal("environments")
            .id(environment.as_key())
    }

    pub fn list_organizations(&self) -> ApiCall<'_, Listing<Organization>> {
        self.call(Request::get(self.root().literal("organizations").build()))
    }

    pub fn get_organization(&self, org: impl KeyRef) -> ApiCall<'_, Organization> {
        self.call(Request::get(self.organization_path(&org).build()))
    }

    pub fn update_organization(&self, org: impl KeyRef, payload: Value) -> ApiCall<'_, Organization> {
        self.call(Request::put(self.organization_path(&org).build()).json(payload))
    }

    /// Regions a project can be hosted in.
    pub fn list_regions(&self) -> ApiCall<'_, Listing<Region>> {
        self.call(Request::get(self.root().literal("regions").build()))
    }

    pub fn get_organization_plan(&self, org: impl KeyRef) -> ApiCall<'_, PlanStatus> {
        self.call(Request::get(self.organization_path(&org).literal("plan").build()))
    }

    /// Schedules a plan change. The new plan shows up as `next_plan`.
    pub fn set_organization_plan(&self, org: impl KeyRef, plan_code: &str) -> ApiCall<'_, PlanStatus> {
        let path = self.organization_path(&org).literal("plan").id(plan_code).build();
        self.call(Request::post(path))
    }

    pub fn get_organization_usage(&self, org: impl KeyRef) -> ApiCall<'_, OrganizationUsage> {
        self.call(Request::get(self.organization_path(&org).literal("usage").build()))
    }

    /// The plan catalog.
    pub fn get_available_plans(&self) -> ApiCall<'_, PlanStatus> {
        self.call(Request::get(self.root().literal("plans").build()))
    }

    pub fn list_projects(&self, org: impl KeyRef) -> ApiCall<'_, Listing<Project>> {
        self.call(Request::get(self.organization_path(&org).literal("projects").build()))
    }

    pub fn get_project(&self, org: impl KeyRef, project: impl KeyRef) -> ApiCall<'_, Project> {
        self.call(Request::get(self.project_path(&org, &project).build()))
    }

    pub fn update_project(
        &self,
        org: impl KeyRef,
        project: impl KeyRef,
        payload: Value,
    ) -> ApiCall<'_, Project> {
        self.call(Request::put(self.project_path(&org, &project).build()).json(payload))
    }

    pub fn list_environments(
        &self,
        org: impl KeyRef,
        project: impl KeyRef,
    ) -> ApiCall<'_, Listing<Environment>> {
        let path = self.project_path(&org, &project).literal("environments").build();
        self.call(Request::get(path))
    }

    pub fn create_environment(
        &self,
        org: impl KeyRef,
        project: impl KeyRef,
        payload: Value,
    ) -> ApiCall<'_, Environment> {
        let path = self.project_path(&org, &project).literal("environments").build();
        self.call(Request::post(path).json(payload))
    }

    pub fn get_environment(
        &self,
        org: impl KeyRef,
        project: impl KeyRef,
        environment: impl KeyRef,
    ) -> ApiCall<'_, Environment> {
        self.call(Request::get(self.environment_path(&org, &project, &environment).build()))
    }

    /// Enables or disables an environment. The server may answer with the
    /// environment or with an empty body, so the raw value is returned.
    pub fn toggle_environment(
        &self,
        org: impl KeyRef,
        project: impl KeyRef,
        environment: impl KeyRef,
        is_enabled: bool,
    ) -> ApiCall<'_, Value> {
        let path = self
            .environment_path(&org, &project, &environment)
            .literal("toggle")
            .build();
        self.call(Request::post(path).json(json!({ "is_enabled": is_enabled })))
    }

    pub fn update_environment_protection(
        &self,
        org: impl KeyRef,
        project: impl KeyRef,
        environment: impl KeyRef,
        protection_level: &str,
        protection_reason: Option<&str>,
    ) -> ApiCall<'_, Environment> {
        let path = self
            .environment_path(&org, &project, &environment)
            .literal("protection")
            .build();

        let mut body = json!({ "protection_level": protection_level });
        if let Some(reason) = protection_reason {
            body["protection_reason"] = json!(reason);
        }
        self.call(Request::patch(path).json(body))
    }

    /// Removes protection and returns the updated environment.
    pub fn clear_environment_protection(
        &self,
        org: impl KeyRef,
        project: impl KeyRef,
        environment: impl KeyRef,
    ) -> ApiCall<'_, Environment> {
        let path = self
            .environment_path(&org, &project, &environment)
            .literal("protection")
            .build();
        self.call(Request::delete(path))
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use crate::api::sender::scripted::Step;
    use serde_json::json;

    fn organization() -> serde_json::Value {
        json!({
            "key": "org-1",
            "name": "Test Org",
            "owner": {"key": "owner-1", "email": "owner@example.com", "full_name": "Jane Doe"},
            "city": "Berlin",
            "created_at": "2024-01-10T00:00:00Z",
            "is_blocked": false
        })
    }

    fn environment() -> serde_json::Value {
        json!({
            "key": "env-1",
            "name": "Prod",
            "project": "project-1",
            "host": "prod.fxns.io",
            "is_enabled": true,
            "created_at": "2024-01-10T00:00:00Z"
        })
    }

    fn plan_status() -> serde_json::Value {
        json!({
            "active_plan": {"code": "standard", "name": "Standard", "price": 100.0,
                            "from": "2024-01-01T00:00:00Z",
                            "limits": {"roles_max_count": 5, "unit_cost": 0.05}},
            "next_plan": {"code": "pro", "name": "Pro", "limits": {"roles_max_count": 8}}
        })
    }

    #[test]
    fn test_organizations() {
        let (client, sender) = client(vec![
            Step::json(200, json!([organization()])),
            Step::json(200, organization()),
            Step::json(200, json!({"key": "org-1", "name": "Updated"})),
        ]);

        let orgs = client.list_organizations().send().unwrap();
        let owner = orgs.items()[0].owner.as_ref().unwrap();
        assert_eq!(owner.email.as_deref(), Some("owner@example.com"));
        assert_eq!(sent(&sender, 0).1, "/organizations/");

        let org = client.get_organization("org-1").send().unwrap();
        assert_eq!(org.extra["city"], "Berlin");

        let updated = client
            .update_organization(&org, json!({"name": "Updated"}))
            .send()
            .unwrap();
        assert_eq!(updated.name, "Updated");
        assert_eq!(sent(&sender, 2), ("PUT".into(), "/organizations/org-1/".into(), None));
        assert_eq!(sent_body(&sender, 2), json!({"name": "Updated"}));
    }

    #[tokio::test]
    async fn test_regions_plans_and_usage() {
        let (client, sender) = client(vec![
            Step::json(200, json!([{"location": "eu", "name": "Frankfurt", "code": "eu-central-1"}])),
            Step::json(200, plan_status()),
            Step::json(200, plan_status()),
            Step::json(200, plan_status()),
            Step::json(200, json!({
                "units": {"remained": "100"},
                "storage": {"data_storage": 123.4, "vector_storage": 56.7},
                "usage": {"projects": {"max": 10, "current": 2}},
                "current_usage": {"api_requests": 12345}
            })),
        ]);

        let regions = client.list_regions().send_async().await.unwrap();
        assert_eq!(regions.items()[0].code, "eu-central-1");
        assert_eq!(sent(&sender, 0).1, "/regions/");

        let plan = client.get_organization_plan("org-1").send_async().await.unwrap();
        assert_eq!(plan.active_plan.unwrap().code, "standard");
        assert_eq!(sent(&sender, 1).1, "/organizations/org-1/plan/");

        let updated = client.set_organization_plan("org-1", "pro").send_async().await.unwrap();
        assert_eq!(updated.next_plan.unwrap().code, "pro");
        assert_eq!(sent(&sender, 2), ("POST".into(), "/organizations/org-1/plan/pro/".into(), None));

        let catalog = client.get_available_plans().send_async().await.unwrap();
        let limits = catalog.active_plan.unwrap().limits.unwrap();
        assert_eq!(limits.roles_max_count, Some(5));
        assert_eq!(sent(&sender, 3).1, "/plans/");

        let usage = client.get_organization_usage("org-1").send_async().await.unwrap();
        assert_eq!(usage.storage.unwrap().data_storage, 123.4);
        assert_eq!(sent(&sender, 4).1, "/organizations/org-1/usage/");
    }

    #[tokio::test]
    async fn test_projects_and_environments() {
        let (client, sender) = client(vec![
            Step::json(200, json!({
                "count": 1, "next": null, "previous": null,
                "results": [{"key": "project-1", "name": "Main Project", "environments": [environment()]}]
            })),
            Step::json(200, json!([environment()])),
            Step::json(201, environment()),
            Step::json(200, environment()),
            Step::json(200, json!({"key": "project-1", "name": "Updated"})),
        ]);

        let projects = client.list_projects("org-1").send_async().await.unwrap();
        assert_eq!(projects.items()[0].environments[0].key, "env-1");
        assert_eq!(sent(&sender, 0).1, "/organizations/org-1/projects/");

        let envs = client.list_environments("org-1", "project-1").send_async().await.unwrap();
        assert_eq!(envs.items()[0].host.as_deref(), Some("prod.fxns.io"));

        let env = client
            .create_environment("org-1", "project-1", json!({"name": "Prod"}))
            .send_async()
            .await
            .unwrap();
        assert_eq!(env.key, "env-1");
        assert_eq!(
            sent(&sender, 2),
            ("POST".into(), "/organizations/org-1/projects/project-1/environments/".into(), None)
        );

        client
            .toggle_environment("org-1", "project-1", &env, false)
            .send_async()
            .await
            .unwrap();
        assert_eq!(
            sent(&sender, 3).1,
            "/organizations/org-1/projects/project-1/environments/env-1/toggle/"
        );
        assert_eq!(sent_body(&sender, 3), json!({"is_enabled": false}));

        let updated = client
            .update_project("org-1", "project-1", json!({"name": "Updated"}))
            .send_async()
            .await
            .unwrap();
        assert_eq!(updated.name, "Updated");
        assert_eq!(sent(&sender, 4).1, "/organizations/org-1/projects/project-1/");
    }

    #[test]
    fn test_environment_protection() {
        let mut protected = environment();
        protected["protection_level"] = json!("org_owner");
        protected["protection_reason"] = json!("Maintenance");
        protected["protected_by_user"] = json!({"key": "user-1"});
        let mut cleared = environment();
        cleared["protection_level"] = json!("none");

        let (client, sender) = client(vec![Step::json(200, protected), Step::json(200, cleared)]);

        let env = client
            .update_environment_protection("org-1", "project-1", "env-1", "org_owner", Some("Maintenance"))
            .send()
            .unwrap();
        assert_eq!(env.protection_level.as_deref(), Some("org_owner"));
        assert_eq!(env.protected_by_user.unwrap().key, "user-1");
        let (method, path, _) = sent(&sender, 0);
        assert_eq!(method, "PATCH");
        assert!(path.ends_with("/environments/env-1/protection/"));
        assert_eq!(
            sent_body(&sender, 0),
            json!({"protection_level": "org_owner", "protection_reason": "Maintenance"})
        );

        let env = client
            .clear_environment_protection("org-1", "project-1", "env-1")
            .send()
            .unwrap();
        assert_eq!(env.protection_level.as_deref(), Some("none"));
        assert_eq!(sent(&sender, 1).0, "DELETE");
    }
}
