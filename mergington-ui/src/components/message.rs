//! Message Component
//!
//! The transient status banner under the sign-up form.

use leptos::*;
use mergington::Notice;

use crate::state::AppState;

#[component]
pub fn Message() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div
            id="message"
            class=move || state.notice.with(|notice| message_class(notice.as_ref()))
        >
            {move || state.notice.get().map(|notice| notice.text)}
        </div>
    }
}

fn message_class(notice: Option<&Notice>) -> String {
    match notice {
        Some(notice) => format!("message {}", notice.kind.css_class()),
        None => "message hidden".to_string(),
    }
}
