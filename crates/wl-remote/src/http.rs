//! HTTP implementation of the remote service boundary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::warn;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use wl_core::{AssertionAction, CompilationAction, InvocationRequest, RelationAction, Target};

use crate::error::{RemoteError, RemoteResult};
use crate::traits::RemoteService;
use crate::types::{CompilationConfig, CompilationSummary, InvocationAction, WorkflowInvocation};

/// Remote service client over HTTP with optional bearer-token auth.
///
/// Credential acquisition is out of scope: the token is handed in already
/// minted (typically read from the environment by the caller).
pub struct HttpService {
    client: Client,
    base_url: String,
    parent: String,
    token: Option<String>,
}

impl HttpService {
    /// Create a new client for the repository at `parent`
    /// (`projects/{p}/locations/{l}/repositories/{r}`).
    pub fn new(
        base_url: impl Into<String>,
        parent: impl Into<String>,
        token: Option<String>,
    ) -> RemoteResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            parent: parent.into(),
            token,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/v1/{}", self.base_url, path);
        let mut req = self.client.request(method, url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> RemoteResult<T> {
        let response = req.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(RemoteError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl RemoteService for HttpService {
    async fn list_compilations(&self, page_size: u32) -> RemoteResult<Vec<CompilationSummary>> {
        let path = format!("{}/compilationResults", self.parent);
        let req = self.request(Method::GET, &path).query(&[
            ("pageSize", page_size.to_string()),
            ("orderBy", "create_time desc".to_string()),
        ]);
        let body: ListCompilationsResponse = self.send(req).await?;
        Ok(body.compilations)
    }

    async fn create_compilation(
        &self,
        git_ref: &str,
        config: &CompilationConfig,
    ) -> RemoteResult<CompilationSummary> {
        let path = format!("{}/compilationResults", self.parent);
        let req = self
            .request(Method::POST, &path)
            .json(&CreateCompilationRequest { git_ref, config });
        self.send(req).await
    }

    async fn query_compilation_actions(
        &self,
        compilation: &str,
        page_size: u32,
    ) -> RemoteResult<Vec<CompilationAction>> {
        let path = format!("{}/actions", compilation);
        let req = self
            .request(Method::GET, &path)
            .query(&[("pageSize", page_size.to_string())]);
        let body: QueryActionsResponse = self.send(req).await?;
        Ok(body
            .actions
            .into_iter()
            .filter_map(action_from_row)
            .collect())
    }

    async fn create_workflow_invocation(
        &self,
        request: &InvocationRequest,
    ) -> RemoteResult<WorkflowInvocation> {
        let path = format!("{}/workflowInvocations", self.parent);
        let req = self.request(Method::POST, &path).json(request);
        self.send(req).await
    }

    async fn get_workflow_invocation(&self, name: &str) -> RemoteResult<WorkflowInvocation> {
        let req = self.request(Method::GET, name);
        self.send(req).await
    }

    async fn list_workflow_invocations(
        &self,
        since: DateTime<Utc>,
    ) -> RemoteResult<Vec<WorkflowInvocation>> {
        let path = format!("{}/workflowInvocations", self.parent);
        let req = self
            .request(Method::GET, &path)
            .query(&[("since", since.to_rfc3339())]);
        let body: ListInvocationsResponse = self.send(req).await?;
        Ok(body.invocations)
    }

    async fn query_workflow_invocation_actions(
        &self,
        name: &str,
    ) -> RemoteResult<Vec<InvocationAction>> {
        let path = format!("{}/actions", name);
        let req = self.request(Method::GET, &path);
        let body: QueryInvocationActionsResponse = self.send(req).await?;
        Ok(body.actions)
    }
}

#[derive(Deserialize)]
struct ListCompilationsResponse {
    #[serde(default)]
    compilations: Vec<CompilationSummary>,
}

#[derive(Serialize)]
struct CreateCompilationRequest<'a> {
    git_ref: &'a str,
    config: &'a CompilationConfig,
}

#[derive(Deserialize)]
struct QueryActionsResponse {
    #[serde(default)]
    actions: Vec<ActionRow>,
}

#[derive(Deserialize)]
struct ListInvocationsResponse {
    #[serde(default)]
    invocations: Vec<WorkflowInvocation>,
}

#[derive(Deserialize)]
struct QueryInvocationActionsResponse {
    #[serde(default)]
    actions: Vec<InvocationAction>,
}

/// One action as the service delivers it: a target plus at most one of the
/// variant bodies.
#[derive(Debug, Deserialize)]
pub(crate) struct ActionRow {
    pub(crate) target: Target,
    #[serde(default)]
    pub(crate) relation: Option<RelationBody>,
    #[serde(default)]
    pub(crate) assertion: Option<AssertionBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RelationBody {
    pub(crate) select_query: String,
    #[serde(default)]
    pub(crate) tags: BTreeSet<String>,
    #[serde(default)]
    pub(crate) dependency_targets: Vec<Target>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssertionBody {
    pub(crate) parent_target: Target,
    #[serde(default)]
    pub(crate) dependency_targets: Vec<Target>,
}

/// Convert a wire row into the typed action enum.
///
/// Rows carrying both or neither variant body are ambiguous; they are
/// dropped with a warning so the rest of the batch stays usable.
pub(crate) fn action_from_row(row: ActionRow) -> Option<CompilationAction> {
    match (row.relation, row.assertion) {
        (Some(relation), None) => Some(CompilationAction::Relation(RelationAction {
            target: row.target,
            select_query: relation.select_query,
            tags: relation.tags,
            dependency_targets: relation.dependency_targets,
        })),
        (None, Some(assertion)) => Some(CompilationAction::Assertion(AssertionAction {
            target: row.target,
            parent: assertion.parent_target,
            dependency_targets: assertion.dependency_targets,
        })),
        (relation, _) => {
            let which = if relation.is_some() {
                "both relation and assertion bodies"
            } else {
                "neither a relation nor an assertion body"
            };
            warn!("skipping ambiguous action '{}': has {}", row.target, which);
            None
        }
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
