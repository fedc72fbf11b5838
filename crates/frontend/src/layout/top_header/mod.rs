//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle and the site title taken from the
//! site-settings context once it has loaded.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::site_settings::context::use_site_settings;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let settings = use_site_settings();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    let title = move || {
        settings
            .settings
            .get()
            .map(|s| s.site_title)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Knowledge Hub".to_string())
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{title}</span>
            </div>
        </div>
    }
}
