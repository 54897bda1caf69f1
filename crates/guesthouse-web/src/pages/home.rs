//! Home Page

use guesthouse_core::content;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="hero">
                <h1>{content::SITE_NAME}</h1>
                <p class="tagline">{content::TAGLINE}</p>
                <div class="cta">
                    <a href="#contact" class="btn btn-primary">"Book Your Stay"</a>
                    <a href="#rooms" class="btn">"View Rooms"</a>
                </div>
            </section>

            <section class="about">
                <h2>"About Us"</h2>
                <p>{content::ABOUT}</p>
            </section>

            <section class="features">
                {content::HIGHLIGHTS
                    .into_iter()
                    .map(|(title, text)| {
                        view! {
                            <div class="feature">
                                <h3>{title}</h3>
                                <p>{text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
