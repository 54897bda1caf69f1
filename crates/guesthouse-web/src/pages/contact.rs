//! Contact Page
//!
//! Booking request form. Required fields are enforced by the browser before
//! submit; the server validates again and does the actual work.

use guesthouse_core::{BookingForm, BookingReceipt, FormField};
use leptos::{ev::SubmitEvent, prelude::*};

use crate::api;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

const CONFIRMATION: &str =
    "Thank you! Your booking request has been sent. We will be in touch shortly.";

/// What the page shows once the server has answered
#[derive(Debug, PartialEq, Eq)]
enum Feedback {
    Confirmed(&'static str),
    Alert(String),
}

/// Clear the form on success; on failure leave it untouched for a retry
fn settle(form: &mut BookingForm, result: Result<BookingReceipt, String>) -> Feedback {
    match result {
        Ok(_receipt) => {
            form.reset();
            Feedback::Confirmed(CONFIRMATION)
        }
        Err(message) if message.to_lowercase().contains("error") => Feedback::Alert(message),
        Err(message) => Feedback::Alert(format!(
            "There was an error submitting your booking request: {message}"
        )),
    }
}

/// Labelled input bound to one form field
fn field_input(
    field: FormField,
    kind: &'static str,
    min: Option<Signal<String>>,
    form: ReadSignal<BookingForm>,
    set_form: WriteSignal<BookingForm>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=field.name()>{field.label()}</label>
            <input
                type=kind
                id=field.name()
                name=field.name()
                required=field.is_required()
                min=move || min.map(|m| m.get())
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| set_form.update(|f| f.update_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let (form, set_form) = signal(BookingForm::new());
    let (submitting, set_submitting) = signal(false);
    let (confirmation, set_confirmation) = signal(None::<String>);

    let check_in = Signal::derive(move || form.with(|f| f.check_in.clone()));
    let one = Signal::derive(|| "1".to_string());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let request = form.get();
        set_submitting.set(true);
        set_confirmation.set(None);

        leptos::task::spawn_local(async move {
            let result = api::submit_booking(&request).await;
            let mut current = form.get_untracked();
            match settle(&mut current, result) {
                Feedback::Confirmed(text) => {
                    set_form.set(current);
                    set_confirmation.set(Some(text.into()));
                }
                Feedback::Alert(message) => alert(&message),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="contact">
            <h2>"Book Your Stay"</h2>

            <form class="booking-form" on:submit=on_submit>
                {field_input(FormField::Name, "text", None, form, set_form)}
                {field_input(FormField::Email, "email", None, form, set_form)}
                {field_input(FormField::Phone, "tel", None, form, set_form)}
                {field_input(FormField::Guests, "number", Some(one), form, set_form)}
                {field_input(FormField::CheckIn, "date", None, form, set_form)}
                {field_input(FormField::CheckOut, "date", Some(check_in), form, set_form)}

                <div class="field">
                    <label for=FormField::Message.name()>{FormField::Message.label()}</label>
                    <textarea
                        id=FormField::Message.name()
                        name=FormField::Message.name()
                        rows="4"
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| {
                            set_form.update(|f| f.update_field(FormField::Message, event_target_value(&ev)))
                        }
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending..." } else { "Send Booking Request" }}
                </button>
            </form>

            <Show when=move || confirmation.get().is_some()>
                <p class="confirmation">{move || confirmation.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use guesthouse_core::BookingStatus;

    use super::*;

    fn filled() -> BookingForm {
        BookingForm {
            name: "Test User".into(),
            email: "test@example.com".into(),
            phone: "1234567890".into(),
            guests: "2".into(),
            check_in: "2025-12-01".into(),
            check_out: "2025-12-05".into(),
            message: "Test".into(),
        }
    }

    #[test]
    fn test_success_resets_form() {
        let mut form = filled();
        let receipt = BookingReceipt {
            key: "-NxYz123".into(),
            status: BookingStatus::Pending,
        };

        assert_eq!(settle(&mut form, Ok(receipt)), Feedback::Confirmed(CONFIRMATION));
        assert!(form.is_empty());
    }

    #[test]
    fn test_failure_keeps_fields_and_alerts() {
        let mut form = filled();
        let message = "There was an error submitting your booking request. Please try again.";

        let feedback = settle(&mut form, Err(message.into()));
        assert_eq!(feedback, Feedback::Alert(message.into()));
        assert_eq!(form, filled());
    }

    #[test]
    fn test_alert_always_mentions_error() {
        let mut form = filled();
        let Feedback::Alert(text) = settle(&mut form, Err("connection refused".into())) else {
            panic!("expected an alert");
        };
        assert!(text.contains("error"));
        assert!(text.contains("connection refused"));
        assert_eq!(form, filled());
    }
}
