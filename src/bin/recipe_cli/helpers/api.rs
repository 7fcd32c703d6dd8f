// ABOUTME: Minimal HTTP client for the recipe proxy's JSON API
// ABOUTME: Surfaces the server's {"error": ...} message as the command error

use anyhow::{anyhow, Context, Result};
use recipe_proxy::errors::ErrorResponse;
use recipe_proxy::models::{RecipeDetail, RecipeSummary};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

/// Correlates CLI requests with the server's request logs
const REQUEST_ID_HEADER: &str = "x-request-id";

fn request_id() -> String {
    format!("cli_{}", Uuid::new_v4().simple())
}

#[derive(Deserialize)]
struct RecipeList {
    results: Vec<RecipeSummary>,
}

/// Recipe proxy API client
pub struct ProxyApi {
    base_url: String,
    http_client: Client,
}

impl ProxyApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: Client::new(),
        }
    }

    pub async fn list_recipes(&self) -> Result<Vec<RecipeSummary>> {
        let response = self.get("/api/recipes").await?;
        let list: RecipeList = Self::decode(response).await?;
        Ok(list.results)
    }

    pub async fn get_recipe(&self, id: &str) -> Result<RecipeDetail> {
        let response = self.get(&format!("/api/recipe/{id}")).await?;
        Self::decode(response).await
    }

    pub async fn record_audit(&self, user_ip: &str, data: &Value) -> Result<()> {
        let response = self
            .http_client
            .post(format!("{}/api/supabase", self.base_url))
            .header(REQUEST_ID_HEADER, request_id())
            .json(&json!({ "user_Ip": user_ip, "data": data }))
            .send()
            .await
            .with_context(|| format!("Could not reach {}", self.base_url))?;
        let _: Value = Self::decode(response).await?;
        Ok(())
    }

    async fn get(&self, path: &str) -> Result<Response> {
        self.http_client
            .get(format!("{}{path}", self.base_url))
            .header(REQUEST_ID_HEADER, request_id())
            .send()
            .await
            .with_context(|| format!("Could not reach {}", self.base_url))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map_or_else(|_| format!("HTTP error {}", status.as_u16()), |e| e.error);
            return Err(anyhow!(message));
        }
        response.json().await.context("Unexpected response body")
    }
}
