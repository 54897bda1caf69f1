//! Reviews Page

use guesthouse_core::content::{self, RatingSummary};
use leptos::prelude::*;

use crate::components::StarRating;

fn rating_bars(summary: &RatingSummary) -> impl IntoView + use<> {
    // Highest rating first
    (1..=5u8)
        .rev()
        .map(|stars| {
            let count = summary.distribution[usize::from(stars - 1)];
            let width = if summary.count == 0 { 0 } else { count * 100 / summary.count };
            view! {
                <div class="rating-bar">
                    <span>{format!("{stars}★")}</span>
                    <div class="bar"><div class="fill" style=format!("width: {width}%")></div></div>
                    <span>{count}</span>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn ReviewsPage(#[prop(into)] summary: Signal<RatingSummary>) -> impl IntoView {
    view! {
        <div class="reviews">
            <h2>"Guest Reviews"</h2>
            <section class="rating-summary">
                {move || {
                    summary
                        .with(|summary| {
                            view! {
                                <p class="average">{summary.average.to_string()}</p>
                                <p class="stars">{summary.stars()}</p>
                                <p>{format!("Based on {} ratings", summary.count)}</p>
                                {rating_bars(summary)}
                            }
                        })
                }}
            </section>

            <section class="review-list">
                {content::reviews()
                    .into_iter()
                    .map(|review| {
                        view! {
                            <blockquote class="review">
                                <StarRating rating=review.rating />
                                <p>{review.text}</p>
                                <cite>{format!("{} · {}", review.author, review.stay)}</cite>
                            </blockquote>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
