//! Gallery Page

use guesthouse_core::content::{self, GalleryImage};
use leptos::prelude::*;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let (selected, set_selected) = signal(None::<GalleryImage>);

    view! {
        <div class="gallery">
            <h2>"Gallery"</h2>
            <div class="gallery-grid">
                {content::gallery()
                    .into_iter()
                    .map(|image| {
                        let preview = image.clone();
                        view! {
                            <figure on:click=move |_| set_selected.set(Some(preview.clone()))>
                                <img src=image.src alt=image.alt />
                                <figcaption>{image.caption}</figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>

            // Enlarged view, closed by clicking anywhere on the overlay
            {move || {
                selected
                    .get()
                    .map(|image| {
                        view! {
                            <div class="lightbox" on:click=move |_| set_selected.set(None)>
                                <img src=image.src alt=image.alt />
                                <p>{image.caption}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
