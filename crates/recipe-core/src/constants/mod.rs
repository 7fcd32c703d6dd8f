// ABOUTME: Constants shared across the recipe proxy crates
// ABOUTME: Error messages, provider names, and default endpoint values

//! Constants module
//!
//! User-visible messages live here so that the leaf clients, the HTTP
//! boundary, and the tests all agree on the exact strings.

/// Messages returned to callers inside `{"error": ...}` bodies
pub mod messages {
    /// Nutrition provider credentials are absent
    pub const MISSING_CREDENTIALS: &str = "Missing credentials";
    /// Recipe provider URL or key are absent
    pub const SPOONACULAR_CONFIG_MISSING: &str = "Spoonacular URL or API key is missing";
    /// Audit store URL or key are absent
    pub const SUPABASE_CONFIG_MISSING: &str = "Supabase URL or API key is missing";
    /// Outbound call exceeded its timeout
    pub const REQUEST_TIMED_OUT: &str = "Request timed out";
    /// Outbound call could not connect
    pub const NO_INTERNET_CONNECTION: &str = "No internet connection";
    /// Nutrition payload lacked a `calories` field
    pub const INVALID_NUTRITION_FORMAT: &str = "Invalid API response format";
    /// Recipe id was missing or not numeric
    pub const INVALID_RECIPE_ID: &str = "Invalid or missing recipe ID";
    /// Recipe information payload lacked an ingredients field
    pub const INVALID_RECIPE_RESPONSE: &str = "Invalid response from Spoonacular API";
    /// Recipe list payload lacked a `results` array
    pub const INVALID_LIST_RESPONSE: &str = "Invalid or missing data in the response";
    /// Recipe list was empty
    pub const NO_RECIPES_FOUND: &str = "No recipes found";
    /// Provider rejected the API key
    pub const INVALID_API_KEY: &str = "Invalid or missing API key";
    /// Provider answered 429
    pub const RATE_LIMITED: &str = "Rate limit exceeded. Please try again later.";
    /// Ingredient description was blank
    pub const INVALID_INGREDIENT: &str = "Invalid ingredient name";
    /// Audit body carried no usable IP
    pub const INVALID_USER_IP: &str = "Invalid user IP. It must be a non-empty string.";
    /// IP lookup service answered without a usable `ip` field
    pub const INVALID_IP_RESPONSE: &str = "Invalid response from IP lookup service";
    /// Audit body carried no JSON object
    pub const INVALID_AUDIT_DATA: &str = "Invalid data. It must be a non-null object.";
    /// Audit insert succeeded
    pub const AUDIT_SAVED: &str = "Data saved successfully";
    /// Catch-all when a transport error has no message
    pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";
}

/// External service names used in logs and upstream error messages
pub mod service_names {
    /// Recipe provider
    pub const SPOONACULAR: &str = "Spoonacular API";
    /// Nutrition provider
    pub const EDAMAM: &str = "Edamam API";
    /// Audit store
    pub const SUPABASE: &str = "Supabase";
    /// Public IP discovery service
    pub const IP_LOOKUP: &str = "IP lookup";
    /// This service, for structured logging
    pub const RECIPE_PROXY: &str = "recipe-proxy";
}

/// Default values for configuration and provider queries
pub mod defaults {
    /// Per-call outbound timeout in milliseconds
    pub const UPSTREAM_TIMEOUT_MS: u64 = 5_000;
    /// Recipes requested per list call
    pub const RECIPE_LIST_NUMBER: u32 = 10;
    /// Offset of the list page
    pub const RECIPE_LIST_OFFSET: u32 = 0;
    /// Default HTTP port
    pub const SERVER_PORT: u16 = 4000;
    /// Default bind host
    pub const SERVER_HOST: &str = "0.0.0.0";
    /// Recipe list endpoint
    pub const SPOONACULAR_URL: &str = "https://api.spoonacular.com/recipes/complexSearch";
    /// Base for `/{id}/information`
    pub const SPOONACULAR_RECIPES_URL: &str = "https://api.spoonacular.com/recipes";
    /// Nutrition endpoint
    pub const EDAMAM_URL: &str = "https://api.edamam.com/api/nutrition-data";
    /// Audit table
    pub const SUPABASE_TABLE: &str = "ProjetoCompDist";
    /// Public IP discovery endpoint
    pub const IP_LOOKUP_URL: &str = "https://api64.ipify.org?format=json";
}
