//! Recommendations listing - shared card list used by the listing
//! blocks and available to any screen that wants "related content".

use crate::shared::api_utils::api_base;
use crate::shared::date_utils::format_date;
use contracts::shared::recommendations::{ContentType, RecommendationItem, RecommendationsQuery};
use gloo_net::http::Request;
use leptos::prelude::*;
use uuid::Uuid;

/// Fetch recommended content from the backend
pub async fn fetch_recommendations(
    query: &RecommendationsQuery,
) -> Result<Vec<RecommendationItem>, String> {
    let response = Request::post(&format!("{}/api/recommendations", api_base()))
        .json(query)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch recommendations: {}",
            response.status()
        ));
    }

    response
        .json::<Vec<RecommendationItem>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Card list of recommended content.
///
/// Purely presentational apart from the fetch: callers decide the
/// title, the type mix and the limit; this component renders whatever
/// the backend returns for that query.
#[component]
pub fn RecommendedContentList(
    #[prop(into)] title: String,
    #[prop(optional_no_strip)] content_types: Option<Vec<ContentType>>,
    #[prop(default = 6)] limit: u32,
    #[prop(default = true)] show_view_all: bool,
    #[prop(optional)] exclude_ids: Vec<Uuid>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let (items, set_items) = signal::<Vec<RecommendationItem>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let query = RecommendationsQuery {
        content_types,
        limit: Some(limit),
        exclude_ids,
    };

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_recommendations(&query).await {
            Ok(fetched) => {
                set_items.set(fetched);
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e)),
        }
    });

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("recommended-list {}", additional_class())>
            <div class="recommended-list__header">
                <h3 class="recommended-list__title">{title}</h3>
                {show_view_all.then(|| view! {
                    <a class="recommended-list__view-all" href="#">{"View all"}</a>
                })}
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="recommended-list__cards">
                {move || items.get().into_iter().map(|item| {
                    view! {
                        <article class="recommended-card">
                            {item.image_url.clone().map(|url| view! {
                                <img class="recommended-card__image" src=url alt="" />
                            })}
                            <span class="recommended-card__kind">
                                {item.content_type.display_name()}
                            </span>
                            <h4 class="recommended-card__title">{item.title.clone()}</h4>
                            {item.summary.clone().map(|s| view! {
                                <p class="recommended-card__summary">{s}</p>
                            })}
                            <span class="recommended-card__date">
                                {format_date(&item.sorted_at.to_rfc3339())}
                            </span>
                        </article>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
