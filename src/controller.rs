//! Page Controllers
//!
//! The three user-facing flows of the page, independent of any DOM:
//!
//! - [`fetch_activities`]: load the snapshot for the list and the select
//! - [`sign_up`]: submit the sign-up form
//! - [`unregister`]: remove one participant after confirmation
//!
//! Each mutation returns an [`ActionOutcome`] telling the page what to show,
//! for how long, and whether to refresh the snapshot or reset the form.
//! Gateway errors stop here; callers only ever see notices.

use crate::config::NoticeConfig;
use crate::gateway::{Gateway, GatewayError};
use crate::model::ActivitySnapshot;
use crate::notice::{Notice, TimedNotice};

/// Shown when a rejection carries no detail
pub const FALLBACK_ERROR_TEXT: &str = "An error occurred";

/// Shown when a sign-up request never completed
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";

/// Shown when an unregister request never completed
pub const UNREGISTER_FAILED_TEXT: &str = "Failed to unregister. Please try again.";

/// Result of loading the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(ActivitySnapshot),
    Failed,
}

/// What the page does after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub notice: TimedNotice,
    /// Refetch the snapshot
    pub refresh: bool,
    /// Clear the email field and the activity select
    pub reset_form: bool,
}

impl ActionOutcome {
    fn succeeded(message: String, hide_after: std::time::Duration, reset_form: bool) -> Self {
        Self {
            notice: TimedNotice {
                notice: Notice::success(message),
                hide_after,
            },
            refresh: true,
            reset_form,
        }
    }

    fn failed(text: String, hide_after: std::time::Duration) -> Self {
        Self {
            notice: TimedNotice {
                notice: Notice::error(text),
                hide_after,
            },
            refresh: false,
            reset_form: false,
        }
    }
}

/// Load the full snapshot. Any failure collapses to [`FetchOutcome::Failed`].
pub async fn fetch_activities<G: Gateway + ?Sized>(gateway: &G) -> FetchOutcome {
    match gateway.list_activities().await {
        Ok(snapshot) => {
            tracing::debug!("Fetched {} activities", snapshot.len());
            FetchOutcome::Loaded(snapshot)
        }
        Err(e) => {
            tracing::error!("Error fetching activities: {}", e);
            FetchOutcome::Failed
        }
    }
}

/// Submit a sign-up. Inputs are passed through unvalidated; the gateway
/// decides what is acceptable.
pub async fn sign_up<G: Gateway + ?Sized>(
    gateway: &G,
    activity: &str,
    email: &str,
    notices: &NoticeConfig,
) -> ActionOutcome {
    match gateway.sign_up(activity, email).await {
        Ok(response) => {
            tracing::info!("Signed up {} for {}", email, activity);
            ActionOutcome::succeeded(response.message, notices.signup(), true)
        }
        Err(e) => {
            ActionOutcome::failed(failure_text(&e, SIGNUP_FAILED_TEXT, "sign up"), notices.signup())
        }
    }
}

/// Confirmation question asked before removing a participant
pub fn confirm_prompt(activity: &str, email: &str) -> String {
    format!("Are you sure you want to unregister {} from {}?", email, activity)
}

/// Remove a participant. `confirm` is asked first with [`confirm_prompt`];
/// when it declines nothing is sent and `None` is returned.
pub async fn unregister<G, F>(
    gateway: &G,
    activity: &str,
    email: &str,
    confirm: F,
    notices: &NoticeConfig,
) -> Option<ActionOutcome>
where
    G: Gateway + ?Sized,
    F: FnOnce(&str) -> bool,
{
    if !confirm(&confirm_prompt(activity, email)) {
        tracing::debug!("Unregister of {} from {} cancelled", email, activity);
        return None;
    }

    let outcome = match gateway.unregister(activity, email).await {
        Ok(response) => {
            tracing::info!("Unregistered {} from {}", email, activity);
            ActionOutcome::succeeded(response.message, notices.unregister_success(), false)
        }
        Err(e) => ActionOutcome::failed(
            failure_text(&e, UNREGISTER_FAILED_TEXT, "unregister"),
            notices.unregister_error(),
        ),
    };
    Some(outcome)
}

fn failure_text(error: &GatewayError, transport_text: &str, action: &str) -> String {
    match error {
        GatewayError::Transport(reason) => {
            tracing::error!("Error trying to {}: {}", action, reason);
            transport_text.to_string()
        }
        GatewayError::Rejected { status, detail } => {
            tracing::warn!("Gateway rejected {} ({}): {:?}", action, status, detail);
            detail
                .clone()
                .unwrap_or_else(|| FALLBACK_ERROR_TEXT.to_string())
        }
        GatewayError::Decode(reason) => {
            tracing::warn!("Unreadable {} response: {}", action, reason);
            FALLBACK_ERROR_TEXT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{GatewayCall, MemoryGateway, Method, ScriptedResponse};
    use crate::model::Activity;
    use crate::notice::NoticeKind;
    use crate::render::{ActivityCardView, ListView, SelectOptions};
    use std::time::Duration;

    fn chess_gateway() -> MemoryGateway {
        MemoryGateway::new(
            [Activity::new("Chess Club", "Chess", "Fridays", 10)
                .with_participants(["michael@mergington.edu", "daniel@mergington.edu"])]
            .into_iter()
            .collect(),
        )
    }

    async fn card(gateway: &MemoryGateway, name: &str) -> ActivityCardView {
        let FetchOutcome::Loaded(snapshot) = fetch_activities(gateway).await else {
            panic!("fetch failed");
        };
        ActivityCardView::from_activity(snapshot.get(name).unwrap())
    }

    #[tokio::test]
    async fn test_fetch_loaded_and_failed() {
        let gateway = MemoryGateway::with_school_catalogue();
        assert!(matches!(fetch_activities(&gateway).await, FetchOutcome::Loaded(_)));

        gateway.script(ScriptedResponse::http(500, r#"{"detail":"boom"}"#));
        assert_eq!(fetch_activities(&gateway).await, FetchOutcome::Failed);

        gateway.set_offline(true);
        assert_eq!(fetch_activities(&gateway).await, FetchOutcome::Failed);
    }

    #[tokio::test]
    async fn test_fetch_twice_renders_identically() {
        let gateway = MemoryGateway::with_school_catalogue();
        let FetchOutcome::Loaded(first) = fetch_activities(&gateway).await else {
            panic!("fetch failed");
        };
        let FetchOutcome::Loaded(second) = fetch_activities(&gateway).await else {
            panic!("fetch failed");
        };
        assert_eq!(ListView::from_snapshot(&first), ListView::from_snapshot(&second));
    }

    #[tokio::test]
    async fn test_signup_happy_path() {
        let gateway = chess_gateway();
        gateway.script(ScriptedResponse::http(200, r#"{"message":"Signed up!"}"#));

        let outcome = sign_up(&gateway, "Chess Club", "a@b.com", &NoticeConfig::default()).await;

        assert_eq!(
            gateway.calls(),
            vec![GatewayCall {
                method: Method::Post,
                url: "/activities/Chess%20Club/signup?email=a%40b.com".to_string()
            }]
        );
        assert_eq!(outcome.notice.notice.text, "Signed up!");
        assert_eq!(outcome.notice.notice.kind, NoticeKind::Success);
        assert_eq!(outcome.notice.hide_after, Duration::from_secs(5));
        assert!(outcome.refresh);
        assert!(outcome.reset_form);
    }

    #[tokio::test]
    async fn test_signup_rejected_keeps_form() {
        let gateway = chess_gateway();
        gateway.script(ScriptedResponse::http(400, r#"{"detail":"Already signed up"}"#));

        let outcome = sign_up(&gateway, "Chess Club", "a@b.com", &NoticeConfig::default()).await;

        assert_eq!(outcome.notice.notice, Notice::error("Already signed up"));
        assert_eq!(outcome.notice.hide_after, Duration::from_secs(5));
        assert!(!outcome.reset_form);
        assert!(!outcome.refresh);
    }

    #[tokio::test]
    async fn test_signup_rejected_without_detail_uses_fallback() {
        let gateway = chess_gateway();
        gateway.script(ScriptedResponse::http(500, "{}"));

        let outcome = sign_up(&gateway, "Chess Club", "a@b.com", &NoticeConfig::default()).await;
        assert_eq!(outcome.notice.notice, Notice::error(FALLBACK_ERROR_TEXT));
    }

    #[tokio::test]
    async fn test_signup_transport_failure() {
        let gateway = chess_gateway();
        gateway.set_offline(true);

        let outcome = sign_up(&gateway, "Chess Club", "a@b.com", &NoticeConfig::default()).await;
        assert_eq!(outcome.notice.notice, Notice::error(SIGNUP_FAILED_TEXT));
        assert_eq!(outcome.notice.hide_after, Duration::from_secs(5));
        assert!(!outcome.reset_form);
    }

    #[tokio::test]
    async fn test_signup_blank_inputs_reach_gateway() {
        let gateway = chess_gateway();
        let outcome = sign_up(&gateway, "", "", &NoticeConfig::default()).await;

        assert_eq!(gateway.calls()[0].url, "/activities//signup?email=");
        assert_eq!(outcome.notice.notice, Notice::error("Activity not found"));
    }

    #[tokio::test]
    async fn test_signup_then_refresh_shows_participant() {
        let gateway = chess_gateway();
        let outcome = sign_up(&gateway, "Chess Club", "a@b.com", &NoticeConfig::default()).await;
        assert_eq!(outcome.notice.notice.text, "Signed up a@b.com for Chess Club");

        let card = card(&gateway, "Chess Club").await;
        assert_eq!(card.spots_left, 7);
    }

    #[tokio::test]
    async fn test_unregister_declined_sends_nothing() {
        let gateway = chess_gateway();
        let before = card(&gateway, "Chess Club").await;
        gateway.clear_calls();

        let mut asked = None;
        let outcome = unregister(
            &gateway,
            "Chess Club",
            "michael@mergington.edu",
            |prompt| {
                asked = Some(prompt.to_string());
                false
            },
            &NoticeConfig::default(),
        )
        .await;

        assert!(outcome.is_none());
        assert!(gateway.calls().is_empty());
        assert_eq!(
            asked.as_deref(),
            Some("Are you sure you want to unregister michael@mergington.edu from Chess Club?")
        );
        assert_eq!(card(&gateway, "Chess Club").await, before);
    }

    #[tokio::test]
    async fn test_unregister_happy_path() {
        let gateway = chess_gateway();
        sign_up(&gateway, "Chess Club", "a@b.com", &NoticeConfig::default()).await;
        let before = card(&gateway, "Chess Club").await;
        gateway.clear_calls();

        let outcome = unregister(
            &gateway,
            "Chess Club",
            "a@b.com",
            |_| true,
            &NoticeConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(
            gateway.calls()[0].to_string(),
            "DELETE /activities/Chess%20Club/unregister?email=a%40b.com"
        );
        assert_eq!(outcome.notice.notice.kind, NoticeKind::Success);
        assert_eq!(outcome.notice.hide_after, Duration::from_secs(3));
        assert!(outcome.refresh);

        let FetchOutcome::Loaded(snapshot) = fetch_activities(&gateway).await else {
            panic!("fetch failed");
        };
        let chess = snapshot.get("Chess Club").unwrap();
        assert!(!chess.has_participant("a@b.com"));
        assert_eq!(
            ActivityCardView::from_activity(chess).spots_left,
            before.spots_left + 1
        );
    }

    #[tokio::test]
    async fn test_unregister_failures() {
        let gateway = chess_gateway();
        let notices = NoticeConfig::default();

        let outcome = unregister(&gateway, "Chess Club", "nobody@b.com", |_| true, &notices)
            .await
            .unwrap();
        assert_eq!(
            outcome.notice.notice,
            Notice::error("Student is not registered for this activity")
        );
        assert_eq!(outcome.notice.hide_after, Duration::from_secs(5));
        assert!(!outcome.refresh);

        gateway.script(ScriptedResponse::http(404, "Not Found"));
        let outcome = unregister(&gateway, "Chess Club", "nobody@b.com", |_| true, &notices)
            .await
            .unwrap();
        assert_eq!(outcome.notice.notice, Notice::error(FALLBACK_ERROR_TEXT));

        gateway.set_offline(true);
        let outcome = unregister(&gateway, "Chess Club", "nobody@b.com", |_| true, &notices)
            .await
            .unwrap();
        assert_eq!(outcome.notice.notice, Notice::error(UNREGISTER_FAILED_TEXT));
        assert_eq!(outcome.notice.hide_after, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_selection_survives_refresh() {
        let gateway = MemoryGateway::with_school_catalogue();
        sign_up(&gateway, "Art Club", "a@b.com", &NoticeConfig::default()).await;

        let FetchOutcome::Loaded(snapshot) = fetch_activities(&gateway).await else {
            panic!("fetch failed");
        };
        let options = SelectOptions::build(&snapshot, "Art Club");
        assert_eq!(options.selected_value(), "Art Club");
        assert_eq!(options.options.len(), 9);
    }
}
