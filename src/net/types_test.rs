use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_login_payload() {
    let user: User = serde_json::from_value(serde_json::json!({
        "__typename": "User",
        "id": "u-1",
        "email": "bob@example.com",
        "username": "bob",
        "createdAt": "2024-01-01T00:00:00Z",
        "token": "a.b.c",
    }))
    .unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.username, "bob");
    assert_eq!(user.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    assert_eq!(user.token, "a.b.c");
}

#[test]
fn user_from_claims_copies_identity_and_token() {
    let claims = Claims {
        id: "u-1".to_owned(),
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        exp: 10,
        iat: None,
    };
    let user = User::from_claims(claims, "a.b.c");
    assert_eq!(user.id, "u-1");
    assert_eq!(user.username, "bob");
    assert_eq!(user.email, "bob@example.com");
    assert_eq!(user.created_at, None);
    assert_eq!(user.token, "a.b.c");
}

#[test]
fn user_serializes_camel_case() {
    let user = User {
        id: "u-1".to_owned(),
        username: "bob".to_owned(),
        email: String::new(),
        created_at: Some("now".to_owned()),
        token: String::new(),
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["createdAt"], "now");
}

// =============================================================
// Post
// =============================================================

#[test]
fn post_deserializes_full_selection() {
    let post: Post = serde_json::from_value(serde_json::json!({
        "__typename": "Post",
        "id": "p-1",
        "body": "hello",
        "createdAt": "2024-01-01T00:00:00Z",
        "username": "bob",
        "likes": [{"__typename": "Like", "id": "l-1", "username": "amy", "createdAt": "t"}],
        "likeCount": 1,
        "comments": [{"id": "c-1", "body": "hi", "username": "amy", "createdAt": "t"}],
        "commentCount": 1,
    }))
    .unwrap();
    assert_eq!(post.likes.len(), 1);
    assert_eq!(post.likes[0].username, "amy");
    assert_eq!(post.like_count, 1);
    assert_eq!(post.comments[0].body, "hi");
    assert_eq!(post.comment_count, 1);
}

#[test]
fn post_defaults_missing_collections() {
    let post: Post = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "body": "hello",
        "createdAt": "t",
        "username": "bob",
    }))
    .unwrap();
    assert!(post.likes.is_empty());
    assert_eq!(post.like_count, 0);
    assert!(post.comments.is_empty());
}

#[test]
fn like_without_created_at_deserializes() {
    let like: Like = serde_json::from_value(serde_json::json!({"id": "l-1", "username": "amy"})).unwrap();
    assert_eq!(like.created_at, None);
}
