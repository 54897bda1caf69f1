//! Main App Component
//!
//! One page is shown at a time. The selection lives in a signal and is
//! mirrored into the URL hash so links like `#contact` work. `App` owns the
//! browser wiring; `Shell` is the markup and renders anywhere.

use guesthouse_core::{
    Page, RatingReport,
    content::{self, RatingSummary},
};
use leptos::prelude::*;

use crate::api;
use crate::pages::{ChatbotPage, ContactPage, GalleryPage, HomePage, ReviewsPage, RoomsPage};

fn hash_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map_or_else(Page::default, |hash| Page::from_id(&hash))
}

fn render_page(page: Page, ratings: Signal<RatingSummary>) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Rooms => view! { <RoomsPage /> }.into_any(),
        Page::Gallery => view! { <GalleryPage /> }.into_any(),
        Page::Reviews => view! { <ReviewsPage summary=ratings /> }.into_any(),
        Page::Contact => view! { <ContactPage /> }.into_any(),
        Page::Chatbot => view! { <ChatbotPage /> }.into_any(),
    }
}

/// Header, switchable main region and footer
#[component]
pub fn Shell(
    #[prop(into)] page: Signal<Page>,
    #[prop(into)] ratings: Signal<RatingSummary>,
    on_navigate: Callback<Page>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen app">
            <header class="site-header">
                <a class="brand" href="#home">{content::SITE_NAME}</a>
                <nav class="nav">
                    {Page::ALL
                        .into_iter()
                        .map(|target| {
                            view! {
                                <button
                                    class="nav-link"
                                    class:active=move || page.get() == target
                                    on:click=move |_| on_navigate.run(target)
                                >
                                    {target.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </header>

            <main class="content">{move || render_page(page.get(), ratings)}</main>

            <footer class="site-footer">
                <p>{content::SITE_NAME}" · "{content::TAGLINE}</p>
            </footer>
        </div>
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(hash_page());
    let (ratings, set_ratings) = signal(RatingReport::from_static().summary);

    // Back/forward and in-page `#...` links
    let _listener = window_event_listener(leptos::ev::hashchange, move |_| {
        set_page.set(hash_page());
    });

    // Built-in reviews until the live summary arrives
    leptos::task::spawn_local(async move {
        if let Ok(report) = api::fetch_ratings().await {
            set_ratings.set(report.summary);
        }
    });

    let navigate = Callback::new(move |target: Page| {
        set_page.set(target);
        if let Some(window) = web_sys::window() {
            window.location().set_hash(target.id()).ok();
        }
    });

    view! { <Shell page=page ratings=ratings on_navigate=navigate /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(page: Page) -> String {
        Owner::new_root(None).with(|| {
            let ratings = RatingReport::from_static().summary;
            view! {
                <Shell
                    page=Signal::stored(page)
                    ratings=Signal::stored(ratings)
                    on_navigate=Callback::new(|_: Page| {})
                />
            }
            .to_html()
        })
    }

    fn section<'a>(html: &'a str, tag: &str) -> &'a str {
        let start = html.find(&format!("<{tag}")).unwrap();
        let end = html.find(&format!("</{tag}>")).unwrap() + tag.len() + 3;
        &html[start..end]
    }

    #[test]
    fn test_header_and_footer_stay_while_main_changes() {
        let pages = [Page::Home, Page::Rooms, Page::Gallery, Page::Reviews, Page::Contact];
        let rendered: Vec<String> = pages.into_iter().map(render).collect();

        let footer = section(&rendered[0], "footer").to_string();
        let mut mains = Vec::new();
        for html in &rendered {
            let header = section(html, "header");
            for page in Page::ALL {
                assert!(header.contains(page.label()), "missing nav entry {page}");
            }
            assert_eq!(section(html, "footer"), footer);
            mains.push(section(html, "main").to_string());
        }

        mains.sort();
        mains.dedup();
        assert_eq!(mains.len(), pages.len(), "each page renders its own main");
    }

    #[test]
    fn test_contact_page_renders_labelled_form() {
        let html = render(Page::Contact);
        let main = section(&html, "main");
        assert!(main.contains("Send Booking Request"));
        assert!(main.contains(r#"for="checkIn""#));
        assert!(main.contains(r#"id="checkIn""#));
    }
}
