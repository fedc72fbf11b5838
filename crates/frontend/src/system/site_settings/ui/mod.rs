use super::api;
use super::context::use_site_settings;
use contracts::system::site_settings::{SiteSettings, SiteSettingsDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Site settings screen: site title plus the per-domain visibility
/// toggles. Saving pushes the DTO and refreshes the shared context so
/// listing blocks pick the change up immediately.
#[component]
#[allow(non_snake_case)]
pub fn SiteSettingsPage() -> impl IntoView {
    let ctx = use_site_settings();

    let (site_title, set_site_title) = signal(String::new());
    let (show_events, set_show_events) = signal(true);
    let (show_knowledge, set_show_knowledge) = signal(true);
    let (show_blog, set_show_blog) = signal(true);
    let (status, set_status) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    // Seed the form whenever a settings snapshot arrives
    Effect::new(move |_| {
        if let Some(s) = ctx.settings.get() {
            let SiteSettings {
                site_title,
                show_events,
                show_knowledge,
                show_blog,
                ..
            } = s;
            set_site_title.set(site_title);
            set_show_events.set(show_events.unwrap_or(false));
            set_show_knowledge.set(show_knowledge.unwrap_or(false));
            set_show_blog.set(show_blog.unwrap_or(false));
        }
    });

    let save = move |_| {
        let dto = SiteSettingsDto {
            site_title: site_title.get(),
            show_events: Some(show_events.get()),
            show_knowledge: Some(show_knowledge.get()),
            show_blog: Some(show_blog.get()),
        };
        set_status.set(None);
        set_error.set(None);
        spawn_local(async move {
            match api::update_site_settings(dto).await {
                Ok(()) => {
                    set_status.set(Some("Saved".to_string()));
                    ctx.refresh();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Site settings"}</h2>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || status.get().map(|s| view! { <div class="success">{s}</div> })}

            <div class="form">
                <div class="form__row">
                    <label class="form__label">{"Site title"}</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || site_title.get()
                        on:input=move |ev| set_site_title.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__row">
                    <label class="form__label">
                        <input
                            type="checkbox"
                            prop:checked=move || show_events.get()
                            on:change=move |ev| set_show_events.set(event_target_checked(&ev))
                        />
                        {"Show events"}
                    </label>
                </div>

                <div class="form__row">
                    <label class="form__label">
                        <input
                            type="checkbox"
                            prop:checked=move || show_knowledge.get()
                            on:change=move |ev| set_show_knowledge.set(event_target_checked(&ev))
                        />
                        {"Show knowledge base"}
                    </label>
                </div>

                <div class="form__row">
                    <label class="form__label">
                        <input
                            type="checkbox"
                            prop:checked=move || show_blog.get()
                            on:change=move |ev| set_show_blog.set(event_target_checked(&ev))
                        />
                        {"Show blog"}
                    </label>
                </div>

                <div class="form__actions">
                    <button class="button button--primary" on:click=save>
                        {"Save"}
                    </button>
                </div>
            </div>
        </div>
    }
}
