use serde_json::json;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn post(id: &str, body: &str) -> Value {
    json!({
        "__typename": "Post",
        "id": id,
        "body": body,
        "username": "bob",
        "createdAt": "2024-01-01T00:00:00Z",
        "likes": [],
        "likeCount": 0,
        "comments": [],
        "commentCount": 0,
    })
}

fn cache_with_posts(posts: &[Value]) -> NormalizedCache {
    let mut cache = NormalizedCache::new();
    cache.write_query(&json!({ "getPosts": posts }));
    cache
}

fn listed_ids(cache: &NormalizedCache) -> Vec<String> {
    cache
        .read_root(POSTS_ROOT)
        .and_then(|v| v.as_array().cloned())
        .unwrap_or_default()
        .iter()
        .map(|p| p["id"].as_str().unwrap_or_default().to_owned())
        .collect()
}

// =============================================================
// entity_key
// =============================================================

#[test]
fn entity_key_combines_typename_and_id() {
    let value = post("1", "x");
    assert_eq!(entity_key(value.as_object().unwrap()).as_deref(), Some("Post:1"));
}

#[test]
fn entity_key_accepts_numeric_id() {
    let value = json!({"__typename": "Like", "id": 7});
    assert_eq!(entity_key(value.as_object().unwrap()).as_deref(), Some("Like:7"));
}

#[test]
fn entity_key_requires_typename() {
    let value = json!({"id": "1"});
    assert_eq!(entity_key(value.as_object().unwrap()), None);
}

// =============================================================
// write_query / read_root
// =============================================================

#[test]
fn write_query_normalizes_entities_and_reads_back() {
    let cache = cache_with_posts(&[post("a", "first"), post("b", "second")]);
    assert_eq!(cache.entity_count(), 2);
    assert_eq!(
        cache.raw_root(POSTS_ROOT),
        Some(&json!([{"__ref": "Post:a"}, {"__ref": "Post:b"}]))
    );
    assert_eq!(cache.read_root(POSTS_ROOT), Some(json!([post("a", "first"), post("b", "second")])));
}

#[test]
fn nested_entities_are_normalized() {
    let mut liked = post("a", "first");
    liked["likes"] = json!([{"__typename": "Like", "id": "l1", "username": "amy"}]);
    let cache = cache_with_posts(&[liked.clone()]);
    assert_eq!(cache.entity_count(), 2);
    assert_eq!(cache.entity("Like:l1"), Some(json!({"__typename": "Like", "id": "l1", "username": "amy"})));
    assert_eq!(cache.read_root(POSTS_ROOT), Some(json!([liked])));
}

#[test]
fn objects_without_identity_stay_inline() {
    let mut cache = NormalizedCache::new();
    cache.write_query(&json!({"stats": {"count": 3}}));
    assert_eq!(cache.entity_count(), 0);
    assert_eq!(cache.read_root("stats"), Some(json!({"count": 3})));
}

#[test]
fn read_missing_root_is_none() {
    assert_eq!(NormalizedCache::new().read_root(POSTS_ROOT), None);
}

// =============================================================
// merge_entities
// =============================================================

#[test]
fn like_result_patches_cached_listing_in_place() {
    let cache = cache_with_posts(&[post("a", "first"), post("b", "second")]);
    let like_result = json!({
        "likePost": {
            "__typename": "Post",
            "id": "b",
            "likes": [{"__typename": "Like", "id": "l1", "username": "amy"}],
            "likeCount": 1,
        }
    });
    let cache = cache.apply_mutation(&like_result, None);

    let listing = cache.read_root(POSTS_ROOT).unwrap();
    assert_eq!(listing[1]["likeCount"], 1);
    assert_eq!(listing[1]["likes"][0]["username"], "amy");
    assert_eq!(listing[1]["body"], "second");
    assert_eq!(listing[0]["likeCount"], 0);
    assert_eq!(cache.raw_root("likePost"), None);
}

#[test]
fn merge_keeps_fields_missing_from_update() {
    let mut cache = cache_with_posts(&[post("a", "first")]);
    cache.merge_entities(&json!({"__typename": "Post", "id": "a", "likeCount": 4}));
    let entity = cache.entity("Post:a").unwrap();
    assert_eq!(entity["likeCount"], 4);
    assert_eq!(entity["username"], "bob");
}

#[test]
fn cyclic_reference_is_left_as_reference() {
    let mut cache = NormalizedCache::new();
    cache.write_query(&json!({
        "node": {"__typename": "Node", "id": "n", "next": {"__typename": "Node", "id": "n"}}
    }));
    let node = cache.read_root("node").unwrap();
    assert_eq!(node["next"], json!({"__ref": "Node:n"}));
}

// =============================================================
// prepend_created_post
// =============================================================

#[test]
fn created_post_is_prepended_to_listing() {
    let cache = cache_with_posts(&[post("a", "first"), post("b", "second")]);
    let result = json!({ "createPost": post("1", "hello") });
    let cache = cache.apply_mutation(&result, Some(prepend_created_post));
    assert_eq!(listed_ids(&cache), ["1", "a", "b"]);
    assert_eq!(cache.read_root(POSTS_ROOT).unwrap()[0]["body"], "hello");
}

#[test]
fn created_post_is_not_deduplicated() {
    let cache = cache_with_posts(&[post("1", "hello"), post("b", "second")]);
    let result = json!({ "createPost": post("1", "hello") });
    let cache = prepend_created_post(cache, &result);
    assert_eq!(listed_ids(&cache), ["1", "1", "b"]);
}

#[test]
fn created_post_without_cached_listing_leaves_cache() {
    let cache = NormalizedCache::new();
    let result = json!({ "createPost": post("1", "hello") });
    let next = prepend_created_post(cache.clone(), &result);
    assert_eq!(next, cache);
}

#[test]
fn prepend_ignores_result_without_created_post() {
    let cache = cache_with_posts(&[post("a", "first")]);
    let next = prepend_created_post(cache.clone(), &json!({"createPost": null}));
    assert_eq!(next, cache);
}
