// ABOUTME: Integration tests for the Supabase audit client and the public IP lookup client
// ABOUTME: Verifies PostgREST request shape, error relaying, and IP discovery fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_proxy::config::{IpLookupConfig, SupabaseConfig};
use recipe_proxy::errors::LookupError;
use recipe_proxy::external::{AuditEntry, AuditStore, IpLookupClient, SupabaseClient};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(2);

fn supabase(server: &MockServer) -> SupabaseClient {
    SupabaseClient::new(
        SupabaseConfig {
            url: Some(server.uri()),
            anon_key: Some("anon-key".to_owned()),
            table: "ProjetoCompDist".to_owned(),
        },
        TIMEOUT,
    )
}

fn entry() -> AuditEntry {
    AuditEntry {
        user_ip: "203.0.113.7".to_owned(),
        user_data: json!({ "recipeId": "716429" }),
    }
}

#[tokio::test]
async fn test_record_inserts_row() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/ProjetoCompDist"))
        .and(header("apikey", "anon-key"))
        .and(header("authorization", "Bearer anon-key"))
        .and(header("prefer", "return=representation"))
        .and(body_json(json!([
            { "user_ip": "203.0.113.7", "user_data": { "recipeId": "716429" } }
        ])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            { "id": 17, "user_ip": "203.0.113.7", "user_data": { "recipeId": "716429" } }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let saved = supabase(&server).record(&entry()).await.unwrap();
    assert_eq!(saved[0]["id"], 17);
}

#[tokio::test]
async fn test_record_relays_store_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "42P01",
            "message": "relation \"public.ProjetoCompDist\" does not exist"
        })))
        .mount(&server)
        .await;

    let error = supabase(&server).record(&entry()).await.unwrap_err();
    assert_eq!(error.status(), Some(404));
    assert_eq!(
        error.to_string(),
        "relation \"public.ProjetoCompDist\" does not exist"
    );
}

#[tokio::test]
async fn test_record_without_credentials() {
    let client = SupabaseClient::new(
        SupabaseConfig {
            url: None,
            anon_key: None,
            table: "ProjetoCompDist".to_owned(),
        },
        TIMEOUT,
    );

    let error = client.record(&entry()).await.unwrap_err();
    assert_eq!(error.to_string(), "Supabase URL or API key is missing");
}

#[tokio::test]
async fn test_ip_lookup_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": "198.51.100.4" })))
        .mount(&server)
        .await;

    let client = IpLookupClient::new(IpLookupConfig { url: server.uri() }, TIMEOUT);
    assert_eq!(client.lookup().await.as_deref(), Some("198.51.100.4"));
}

#[tokio::test]
async fn test_ip_lookup_failures_yield_none() {
    for response in [
        ResponseTemplate::new(500),
        ResponseTemplate::new(200).set_body_json(json!({ "ip": "" })),
        ResponseTemplate::new(200).set_body_string("not json"),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(response)
            .mount(&server)
            .await;

        let client = IpLookupClient::new(IpLookupConfig { url: server.uri() }, TIMEOUT);
        assert_eq!(client.lookup().await, None);
    }
}

#[tokio::test]
async fn test_ip_lookup_bad_payload_is_a_format_error() {
    for response in [
        ResponseTemplate::new(200).set_body_json(json!({ "ip": "  " })),
        ResponseTemplate::new(200).set_body_json(json!({ "address": "198.51.100.4" })),
        ResponseTemplate::new(200).set_body_string("not json"),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(response)
            .mount(&server)
            .await;

        let client = IpLookupClient::new(IpLookupConfig { url: server.uri() }, TIMEOUT);
        let error = client.fetch_ip().await.unwrap_err();
        assert!(matches!(error, LookupError::Format(_)), "{error:?}");
        assert_eq!(error.to_string(), "Invalid response from IP lookup service");
    }
}
