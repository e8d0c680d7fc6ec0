//! GraphQL documents consumed by the client.
//!
//! Every selection includes `__typename` so results can be normalized in the
//! cache.

/// A named GraphQL document and the root field its result lives under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub root_field: &'static str,
    pub document: &'static str,
}

pub const FETCH_POSTS: Operation = Operation {
    name: "getPosts",
    root_field: "getPosts",
    document: r"
query getPosts {
    getPosts {
        __typename
        id
        body
        createdAt
        username
        likeCount
        likes { __typename id username }
        commentCount
        comments { __typename id username createdAt body }
    }
}",
};

pub const LOGIN_USER: Operation = Operation {
    name: "login",
    root_field: "login",
    document: r"
mutation login($username: String!, $password: String!) {
    login(username: $username, password: $password) {
        __typename
        id
        email
        username
        createdAt
        token
    }
}",
};

pub const REGISTER_USER: Operation = Operation {
    name: "register",
    root_field: "register",
    document: r"
mutation register(
    $username: String!
    $email: String!
    $password: String!
    $confirmPassword: String!
) {
    register(
        registerInput: {
            username: $username
            email: $email
            password: $password
            confirmPassword: $confirmPassword
        }
    ) {
        __typename
        id
        email
        username
        createdAt
        token
    }
}",
};

pub const CREATE_POST: Operation = Operation {
    name: "createPost",
    root_field: "createPost",
    document: r"
mutation createPost($body: String!) {
    createPost(body: $body) {
        __typename
        id
        body
        createdAt
        username
        likes { __typename id username createdAt }
        likeCount
        comments { __typename id body username createdAt }
        commentCount
    }
}",
};

pub const LIKE_POST: Operation = Operation {
    name: "likePost",
    root_field: "likePost",
    document: r"
mutation likePost($postId: ID!) {
    likePost(postId: $postId) {
        __typename
        id
        likes { __typename id username }
        likeCount
    }
}",
};
