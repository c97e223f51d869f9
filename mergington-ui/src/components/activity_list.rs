//! Activities List Component

use leptos::*;
use mergington::render::{LOADING_TEXT, LOAD_FAILED_TEXT};
use mergington::ListView;

use crate::components::ActivityCard;
use crate::state::AppState;

/// The activities list area: loading text, failure text, or one card per activity
#[component]
pub fn ActivityList() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div id="activities-list">
            {move || match state.list.get() {
                ListView::Loading => view! { <p>{LOADING_TEXT}</p> }.into_view(),
                ListView::Failed => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_view(),
                ListView::Loaded(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCard card=card /> })
                    .collect_view(),
            }}
        </div>
    }
}
