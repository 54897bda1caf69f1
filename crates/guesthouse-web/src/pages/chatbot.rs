//! Chatbot Page
//!
//! Scripted FAQ assistant. Answers come from the fixed table in
//! `guesthouse_core::chatbot`, so nothing leaves the browser.

use guesthouse_core::{Chatbot, chatbot::QUICK_QUESTIONS};
use leptos::prelude::*;

use crate::components::MessageBubble;

#[component]
pub fn ChatbotPage() -> impl IntoView {
    let (bot, set_bot) = signal(Chatbot::new());
    let (input, set_input) = signal(String::new());

    let ask = move |question: String| {
        set_bot.update(|bot| {
            bot.ask(&question);
        });
        set_input.set(String::new());
    };

    view! {
        <div class="chat">
            <h2>"Ask Us"</h2>

            <div class="messages">
                // Transcript is append-only, so the index is a stable key
                <For
                    each=move || {
                        bot.with(|bot| {
                            bot.transcript().messages().iter().cloned().enumerate().collect::<Vec<_>>()
                        })
                    }
                    key=|(index, _)| *index
                    children=|(_, message)| view! { <MessageBubble message=message /> }
                />
            </div>

            <div class="quick-questions">
                {QUICK_QUESTIONS
                    .into_iter()
                    .map(|question| {
                        view! {
                            <button class="chip" on:click=move |_| ask(question.to_string())>
                                {question}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <form
                class="input-area"
                on:submit=move |ev| {
                    ev.prevent_default();
                    ask(input.get());
                }
            >
                <input
                    type="text"
                    placeholder="Type your question..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                />
                <button type="submit">"Send"</button>
            </form>
        </div>
    }
}
