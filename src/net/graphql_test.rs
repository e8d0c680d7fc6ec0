use super::*;
use crate::net::operations::{CREATE_POST, LIKE_POST};
use crate::util::token_store::{MemoryTokenStore, TokenStore};

// =============================================================
// authorization_header
// =============================================================

#[test]
fn authorization_header_uses_bearer_scheme() {
    assert_eq!(authorization_header(Some("a.b.c")), "Bearer a.b.c");
}

#[test]
fn authorization_header_empty_without_token() {
    assert_eq!(authorization_header(None), "");
}

#[test]
fn authorization_header_empty_for_blank_token() {
    assert_eq!(authorization_header(Some("")), "");
}

// =============================================================
// GraphqlClient
// =============================================================

#[test]
fn client_reads_token_fresh_on_every_request() {
    let store = MemoryTokenStore::new();
    let client = GraphqlClient::new(ClientConfig::default(), Arc::new(store.clone()));
    assert_eq!(client.authorization(), "");

    store.set("first");
    assert_eq!(client.authorization(), "Bearer first");

    store.set("second");
    assert_eq!(client.authorization(), "Bearer second");

    store.clear();
    assert_eq!(client.authorization(), "");
}

#[test]
fn client_uses_configured_endpoint() {
    let config = ClientConfig::from_values(Some("https://api.example.com/graphql"), None);
    let client = GraphqlClient::new(config, Arc::new(MemoryTokenStore::new()));
    assert_eq!(client.endpoint(), "https://api.example.com/graphql");
}

#[test]
fn client_starts_with_empty_cache() {
    let client = GraphqlClient::new(ClientConfig::default(), Arc::new(MemoryTokenStore::new()));
    assert_eq!(client.cache().get_untracked(), NormalizedCache::new());
}

// =============================================================
// GraphqlRequest
// =============================================================

#[test]
fn request_body_carries_operation_and_variables() {
    let request = GraphqlRequest::new(&LIKE_POST, serde_json::json!({ "postId": "p-1" }));
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["operationName"], "likePost");
    assert_eq!(body["variables"], serde_json::json!({ "postId": "p-1" }));
    assert!(body["query"].as_str().unwrap().contains("likePost(postId: $postId)"));
}

#[test]
fn documents_select_typename_for_normalization() {
    assert!(CREATE_POST.document.contains("__typename"));
    assert!(LIKE_POST.document.contains("__typename"));
}

// =============================================================
// interpret_response
// =============================================================

#[test]
fn interpret_success_returns_data() {
    let data = interpret_response(200, r#"{"data":{"getPosts":[]}}"#).unwrap();
    assert_eq!(data, serde_json::json!({"getPosts": []}));
}

#[test]
fn interpret_graphql_errors_with_ok_status() {
    let body = r#"{"errors":[{"message":"Wrong credentials","extensions":{"exception":{"errors":{"password":"Wrong credentials"}}}}],"data":null}"#;
    let err = interpret_response(200, body).unwrap_err();
    let ClientError::GraphQl(errors) = &err else {
        panic!("expected GraphQL error, got {err:?}");
    };
    assert_eq!(errors[0].message, "Wrong credentials");
}

#[test]
fn interpret_graphql_errors_with_bad_request_status() {
    let body = r#"{"errors":[{"message":"Variable \"$body\" of required type \"String!\" was not provided."}]}"#;
    assert!(matches!(interpret_response(400, body), Err(ClientError::GraphQl(_))));
}

#[test]
fn interpret_non_graphql_error_status() {
    assert_eq!(interpret_response(502, "<html>Bad Gateway</html>"), Err(ClientError::Status(502)));
}

#[test]
fn interpret_missing_data_is_decode_error() {
    assert!(matches!(interpret_response(200, r#"{"data":null}"#), Err(ClientError::Decode(_))));
}

#[test]
fn interpret_garbage_body_is_decode_error() {
    assert!(matches!(interpret_response(200, "not json"), Err(ClientError::Decode(_))));
}
