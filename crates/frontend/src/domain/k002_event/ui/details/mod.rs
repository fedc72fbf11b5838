use crate::domain::k002_event::api::{fetch_event, upsert_event};
use chrono::{DateTime, NaiveDateTime, Utc};
use contracts::domain::k002_event::EventDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Parse a datetime-local input value ("2026-05-14T18:30") as UTC
fn parse_input_datetime(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format a UTC timestamp for a datetime-local input
fn format_input_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M").to_string()
}

#[component]
#[allow(non_snake_case)]
pub fn EventDetails(#[prop(optional_no_strip)] id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let (code, set_code) = signal(String::new());
    let (title, set_title) = signal(String::new());
    let (starts_at, set_starts_at) = signal(String::new());
    let (ends_at, set_ends_at) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (registration_url, set_registration_url) = signal(String::new());
    let (published, set_published) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let event_id = StoredValue::new(id.clone());

    if let Some(id) = id {
        spawn_local(async move {
            match fetch_event(&id).await {
                Ok(ev) => {
                    set_code.set(ev.base.code);
                    set_title.set(ev.base.description);
                    set_starts_at.set(format_input_datetime(ev.starts_at));
                    set_ends_at.set(ev.ends_at.map(format_input_datetime).unwrap_or_default());
                    set_location.set(ev.location);
                    set_registration_url.set(ev.registration_url.unwrap_or_default());
                    set_published.set(ev.published);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    }

    let save = move |_| {
        let Some(starts) = parse_input_datetime(&starts_at.get()) else {
            set_error.set(Some("Start time is required".to_string()));
            return;
        };
        let dto = EventDto {
            id: event_id.get_value(),
            code: Some(code.get()).filter(|c| !c.is_empty()),
            description: title.get(),
            starts_at: starts,
            ends_at: parse_input_datetime(&ends_at.get()),
            location: location.get(),
            registration_url: Some(registration_url.get()).filter(|u| !u.is_empty()),
            published: published.get(),
            comment: None,
        };
        spawn_local(async move {
            match upsert_event(dto).await {
                Ok(_) => on_close.run(()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="details">
            <div class="header">
                <h2>{move || if event_id.get_value().is_some() { "Edit event" } else { "New event" }}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=save>
                        {"Save"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| on_close.run(())>
                        {"Cancel"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form">
                <div class="form__row">
                    <label class="form__label">{"Code"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || code.get()
                        on:input=move |ev| set_code.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__row">
                    <label class="form__label">{"Title"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__row">
                    <label class="form__label">{"Starts at"}</label>
                    <input
                        type="datetime-local"
                        class="form__input"
                        prop:value=move || starts_at.get()
                        on:input=move |ev| set_starts_at.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__row">
                    <label class="form__label">{"Ends at"}</label>
                    <input
                        type="datetime-local"
                        class="form__input"
                        prop:value=move || ends_at.get()
                        on:input=move |ev| set_ends_at.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__row">
                    <label class="form__label">{"Location"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__row">
                    <label class="form__label">{"Registration URL"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || registration_url.get()
                        on:input=move |ev| set_registration_url.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__row">
                    <label class="form__label">
                        <input
                            type="checkbox"
                            prop:checked=move || published.get()
                            on:change=move |ev| set_published.set(event_target_checked(&ev))
                        />
                        {"Published"}
                    </label>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_datetime_round_trip() {
        let parsed = parse_input_datetime("2026-05-14T18:30").unwrap();
        assert_eq!(format_input_datetime(parsed), "2026-05-14T18:30");
        assert!(parse_input_datetime("not-a-date").is_none());
    }
}
