//! UI Components

use guesthouse_core::ChatMessage;
use leptos::prelude::*;

/// Message bubble component
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let class = format!("message message-{}", message.sender);

    view! {
        <div class=class>
            <p class="content">{message.text}</p>
        </div>
    }
}

/// Five-star rating, filled up to `rating`
#[component]
pub fn StarRating(rating: u8) -> impl IntoView {
    let filled = usize::from(rating.min(5));
    let stars = format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled));

    view! {
        <span class="stars" title=format!("{rating} out of 5")>
            {stars}
        </span>
    }
}
