use contracts::system::site_settings::SiteSettings;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

/// Site-settings snapshot shared through context.
///
/// `settings` stays `None` until the first fetch resolves; `is_loading`
/// tells consumers (listing blocks in particular) to hold off instead
/// of treating "not loaded yet" as "disabled".
#[derive(Clone, Copy)]
pub struct SiteSettingsContext {
    pub settings: ReadSignal<Option<SiteSettings>>,
    pub is_loading: ReadSignal<bool>,
    set_settings: WriteSignal<Option<SiteSettings>>,
    set_loading: WriteSignal<bool>,
}

impl SiteSettingsContext {
    /// Re-fetch settings out-of-band (after a save)
    pub fn refresh(&self) {
        let set_settings = self.set_settings;
        let set_loading = self.set_loading;
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_site_settings().await {
                Ok(s) => set_settings.set(Some(s)),
                Err(e) => {
                    log::warn!("site settings fetch failed: {}", e);
                    set_settings.set(None);
                }
            }
            set_loading.set(false);
        });
    }
}

/// Site settings context provider component
#[component]
pub fn SiteSettingsProvider(children: ChildrenFn) -> impl IntoView {
    let (settings, set_settings) = signal::<Option<SiteSettings>>(None);
    let (is_loading, set_loading) = signal(true);

    let ctx = SiteSettingsContext {
        settings,
        is_loading,
        set_settings,
        set_loading,
    };

    // Initial fetch on mount
    ctx.refresh();

    provide_context(ctx);

    children()
}

/// Hook to access the site settings context
pub fn use_site_settings() -> SiteSettingsContext {
    use_context::<SiteSettingsContext>().expect("SiteSettingsProvider not found in component tree")
}
