use super::techniques::{derive_tabs, TechniqueConfig};
use crate::shared::icons::icon;
use contracts::shared::canvas::CanvasElement;
use leptos::prelude::*;

/// Tab strip over the technique artifacts of a canvas.
///
/// Tabs are re-derived from the element list on every change; the strip
/// itself owns no state beyond the selected tab key.
#[component]
pub fn TechniqueTabStrip(
    #[prop(into)] elements: Signal<Vec<CanvasElement>>,
    #[prop(optional)] on_select: Option<Callback<&'static TechniqueConfig>>,
) -> impl IntoView {
    let (selected, set_selected) = signal::<Option<&'static str>>(None);

    let tabs = move || {
        let elements = elements.get();
        derive_tabs(Some(&elements))
    };

    view! {
        <div class="technique-tabs">
            {move || {
                let current = tabs();
                if current.is_empty() {
                    return view! {
                        <span class="technique-tabs__empty">{"No technique artifacts yet"}</span>
                    }
                    .into_any();
                }
                current
                    .into_iter()
                    .map(|config| {
                        let is_selected = move || selected.get() == Some(config.tab_key);
                        view! {
                            <button
                                class="technique-tabs__tab"
                                class:technique-tabs__tab--selected=is_selected
                                title=config.description
                                on:click=move |_| {
                                    set_selected.set(Some(config.tab_key));
                                    if let Some(cb) = on_select {
                                        cb.run(config);
                                    }
                                }
                            >
                                {icon(config.icon)}
                                <span>{config.label}</span>
                            </button>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
