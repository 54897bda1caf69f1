//! Rooms Page

use guesthouse_core::content::{self, Room};
use leptos::prelude::*;

#[component]
fn RoomCard(room: Room) -> impl IntoView {
    let guests = if room.max_guests == 1 {
        "Sleeps 1".to_string()
    } else {
        format!("Sleeps up to {}", room.max_guests)
    };
    let week = format!("${} for a 7-night stay", room.stay_cost(7).normalize());

    view! {
        <article class="room-card">
            <img src=room.image.clone() alt=room.name.clone() />
            <div class="room-body">
                <h3>{room.name.clone()}</h3>
                <p class="rate">{room.rate_label()}</p>
                <p class="week-rate">{week}</p>
                <p>{room.description}</p>
                <p class="capacity">{guests}</p>
                <ul class="amenities">
                    {room.amenities.into_iter().map(|a| view! { <li>{a}</li> }).collect_view()}
                </ul>
            </div>
        </article>
    }
}

#[component]
pub fn RoomsPage() -> impl IntoView {
    view! {
        <div class="rooms">
            <h2>"Our Rooms"</h2>
            <div class="room-grid">
                {content::rooms()
                    .into_iter()
                    .map(|room| view! { <RoomCard room=room /> })
                    .collect_view()}
            </div>
            <a href="#contact" class="btn btn-primary">"Request a Booking"</a>
        </div>
    }
}
