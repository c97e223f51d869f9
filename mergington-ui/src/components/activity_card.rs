//! Activity Card Component
//!
//! One card per activity. Participant emails are rendered as text nodes.

use leptos::*;
use mergington::render::NO_PARTICIPANTS_TEXT;
use mergington::{ActivityCardView, ParticipantRow, ParticipantsView};

use crate::state::AppState;

#[component]
pub fn ActivityCard(card: ActivityCardView) -> impl IntoView {
    let schedule = card.schedule_line();
    let availability = card.availability_line();

    let participants = match card.participants {
        ParticipantsView::Empty => view! {
            <p class="no-participants"><em>{NO_PARTICIPANTS_TEXT}</em></p>
        }
        .into_view(),
        ParticipantsView::Listed(rows) => view! {
            <ul class="participants-list">
                {rows.into_iter().map(|row| view! { <Participant row=row /> }).collect_view()}
            </ul>
        }
        .into_view(),
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p>{schedule}</p>
            <p>{availability}</p>
            <div class="participants-container">
                <h5>"Participants"</h5>
                {participants}
            </div>
        </div>
    }
}

#[component]
fn Participant(row: ParticipantRow) -> impl IntoView {
    let state = expect_context::<AppState>();
    let title = row.remove_title();
    let email = row.email.clone();

    view! {
        <li>
            <span class="participant-email">{email}</span>
            <button
                type="button"
                class="delete-btn"
                title=title
                on:click=move |_| state.unregister(row.clone())
            >
                "✕"
            </button>
        </li>
    }
}
