//! Feed card for a single post.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;

use crate::components::like_button::LikeButton;
use crate::net::types::Post;

/// Calendar date part of an ISO-8601 timestamp; other strings pass through.
pub fn display_date(created_at: &str) -> &str {
    match created_at.split_once('T') {
        Some((date, _)) if date.len() == 10 => date,
        _ => created_at,
    }
}

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let date = display_date(&post.created_at).to_owned();
    let username = post.username.clone();
    let body = post.body.clone();
    let comment_count = post.comment_count;

    view! {
        <div class="ui fluid card post-card">
            <div class="content">
                <div class="header">{username}</div>
                <div class="meta">{date}</div>
                <div class="description">{body}</div>
            </div>
            <div class="extra content">
                <LikeButton post=post/>
                <div class="ui labeled button">
                    <span class="ui blue basic button">
                        <i class="comments icon"></i>
                    </span>
                    <span class="ui basic blue left pointing label">{comment_count}</span>
                </div>
            </div>
        </div>
    }
}
