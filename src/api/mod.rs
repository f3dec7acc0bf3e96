//! Thin async wrappers over the learning-progress backend, one function per
//! endpoint. No retry, no caching; a failed request or a non-2xx status is an
//! error the caller surfaces.

use reqwest::Client;

use crate::core::{
    models::CompleteProblemRequest,
    Concept,
    ConceptGraph,
    DashboardError,
    Problem,
    StudyPlanDay,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { client: Client::new(), base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T, DashboardError> {
        let url = self.endpoint(path);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::BackendStatus { status: status.as_u16(), url });
        }

        Ok(response.json().await?)
    }

    pub async fn concepts(&self) -> Result<Vec<Concept>, DashboardError> {
        self.get_json("concepts").await
    }

    pub async fn problems(&self) -> Result<Vec<Problem>, DashboardError> {
        self.get_json("problems").await
    }

    pub async fn available_concepts(&self) -> Result<Vec<String>, DashboardError> {
        self.get_json("available-concepts").await
    }

    pub async fn recommended_concepts(
        &self,
        limit: usize,
    ) -> Result<Vec<String>, DashboardError> {
        self.get_json(&format!("recommended-concepts?limit={limit}")).await
    }

    pub async fn recommended_problems(
        &self,
        limit: usize,
    ) -> Result<Vec<Problem>, DashboardError> {
        self.get_json(&format!("recommended-problems?limit={limit}")).await
    }

    pub async fn learning_path(&self) -> Result<Vec<String>, DashboardError> {
        self.get_json("learning-path").await
    }

    pub async fn study_plan(&self, days: u32) -> Result<Vec<StudyPlanDay>, DashboardError> {
        self.get_json(&format!("study-plan?days={days}")).await
    }

    pub async fn concept_graph(&self) -> Result<ConceptGraph, DashboardError> {
        self.get_json("concept-graph").await
    }

    /// Marks a problem complete. The response body is ignored; the caller is
    /// expected to refetch the full snapshot afterwards.
    pub async fn complete_problem(&self, problem_id: &str) -> Result<(), DashboardError> {
        let url = self.endpoint("complete-problem");
        let body = CompleteProblemRequest { problem_id: problem_id.to_string() };

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::BackendStatus { status: status.as_u16(), url });
        }

        Ok(())
    }

    /// Connectivity probe for the status indicator. Hits the cheapest list
    /// endpoint the backend exposes rather than the full concept payload.
    pub async fn is_reachable(&self) -> bool {
        self.available_concepts().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let api = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(api.endpoint("concepts"), "http://localhost:5000/api/concepts");

        let api = ApiClient::new(DEFAULT_BASE_URL);
        assert_eq!(api.endpoint("study-plan?days=10"), "http://localhost:5000/api/study-plan?days=10");
    }
}
