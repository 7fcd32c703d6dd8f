// ABOUTME: In-memory fakes for the provider traits
// ABOUTME: Lets aggregator and route tests script per-ingredient delays and failures

#![allow(dead_code)]

use async_trait::async_trait;
use recipe_proxy::errors::{LookupError, LookupResult};
use recipe_proxy::external::{
    AuditEntry, AuditStore, NutritionFacts, NutritionLookup, RecipeInformation, RecipeProvider,
};
use recipe_proxy::models::{IngredientRef, RecipeSummary};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Build an ingredient the way the provider would return it
pub fn ingredient(amount: f64, unit: &str, name: &str) -> IngredientRef {
    IngredientRef {
        name: name.to_owned(),
        amount,
        unit: unit.to_owned(),
    }
}

/// Build a provider recipe payload
pub fn recipe(title: &str, ingredients: Vec<IngredientRef>) -> RecipeInformation {
    RecipeInformation {
        title: title.to_owned(),
        image: format!("https://img.example/{}.jpg", title.to_lowercase()),
        summary: format!("<b>{title}</b> summary"),
        extended_ingredients: ingredients,
    }
}

/// Recipe provider returning canned responses
pub struct FakeRecipeProvider {
    list: LookupResult<Vec<RecipeSummary>>,
    detail: LookupResult<RecipeInformation>,
    requested_ids: Mutex<Vec<String>>,
}

impl FakeRecipeProvider {
    pub fn with_recipe(detail: RecipeInformation) -> Self {
        Self {
            list: Ok(vec![]),
            detail: Ok(detail),
            requested_ids: Mutex::new(vec![]),
        }
    }

    pub fn failing(error: LookupError) -> Self {
        Self {
            list: Err(error.clone()),
            detail: Err(error),
            requested_ids: Mutex::new(vec![]),
        }
    }

    pub fn with_list(list: LookupResult<Vec<RecipeSummary>>) -> Self {
        Self {
            list,
            detail: Err(LookupError::upstream(Some(404), "not scripted")),
            requested_ids: Mutex::new(vec![]),
        }
    }

    pub fn requested_ids(&self) -> Vec<String> {
        self.requested_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeProvider for FakeRecipeProvider {
    async fn fetch_list(&self) -> LookupResult<Vec<RecipeSummary>> {
        self.list.clone()
    }

    async fn fetch_by_id(&self, id: &str) -> LookupResult<RecipeInformation> {
        self.requested_ids.lock().unwrap().push(id.to_owned());
        if id.trim().parse::<u64>().is_err() {
            return Err(LookupError::validation("Invalid or missing recipe ID"));
        }
        self.detail.clone()
    }
}

/// Scripted response for one ingredient description
#[derive(Clone)]
pub struct Scripted {
    pub delay: Duration,
    pub result: LookupResult<NutritionFacts>,
}

/// Nutrition lookup keyed by the exact description string
///
/// Unknown descriptions fail with an upstream error.
#[derive(Default)]
pub struct FakeNutrition {
    scripts: HashMap<String, Scripted>,
    calls: Mutex<Vec<String>>,
}

impl FakeNutrition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calories(mut self, description: &str, calories: f64) -> Self {
        self.scripts.insert(
            description.to_owned(),
            Scripted {
                delay: Duration::ZERO,
                result: Ok(NutritionFacts { calories }),
            },
        );
        self
    }

    pub fn delayed(mut self, description: &str, calories: f64, delay: Duration) -> Self {
        self.scripts.insert(
            description.to_owned(),
            Scripted {
                delay,
                result: Ok(NutritionFacts { calories }),
            },
        );
        self
    }

    pub fn failing(mut self, description: &str, error: LookupError, delay: Duration) -> Self {
        self.scripts.insert(
            description.to_owned(),
            Scripted {
                delay,
                result: Err(error),
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NutritionLookup for FakeNutrition {
    async fn lookup(&self, description: &str) -> LookupResult<NutritionFacts> {
        self.calls.lock().unwrap().push(description.to_owned());
        let scripted = self.scripts.get(description).cloned().unwrap_or(Scripted {
            delay: Duration::ZERO,
            result: Err(LookupError::upstream(Some(404), "API error: 404 - Not Found")),
        });
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        scripted.result
    }
}

/// Audit store recording every entry it receives
pub struct FakeAuditStore {
    entries: Mutex<Vec<AuditEntry>>,
    failure: Option<LookupError>,
}

impl FakeAuditStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(vec![]),
            failure: None,
        }
    }

    pub fn failing(error: LookupError) -> Self {
        Self {
            entries: Mutex::new(vec![]),
            failure: Some(error),
        }
    }

    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuditStore for FakeAuditStore {
    async fn record(&self, entry: &AuditEntry) -> LookupResult<Value> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.entries.lock().unwrap().push(entry.clone());
        Ok(json!([{ "id": 1, "user_ip": entry.user_ip, "user_data": entry.user_data }]))
    }
}

/// Shorthand for handing a fake to `ServerResources::with_clients`
pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
