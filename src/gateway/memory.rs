//! In-memory gateway
//!
//! Behaves like the school's activities service: case-sensitive activity
//! names, duplicate sign-ups rejected, capacity not enforced. Every call is
//! recorded, and responses can be scripted or the transport taken offline,
//! so controller behavior can be checked without a browser.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{decode_response, Endpoints, Gateway, GatewayCall, GatewayError, GatewayResult};
use crate::model::{Activity, ActivitySnapshot, GatewayErrorBody, SignupResponse};

/// A canned reply for the next call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedResponse {
    /// Raw status and body, decoded like a real response
    Http { status: u16, body: String },
    /// The request never completes
    TransportFailure(String),
}

impl ScriptedResponse {
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        ScriptedResponse::Http {
            status,
            body: body.into(),
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    endpoints: Endpoints,
    activities: ActivitySnapshot,
    calls: Vec<GatewayCall>,
    scripted: VecDeque<ScriptedResponse>,
    offline: bool,
}

/// In-memory [`Gateway`] with call recording
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryGateway {
    pub fn new(activities: ActivitySnapshot) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                activities,
                ..Inner::default()
            })),
        }
    }

    /// Gateway seeded with [`MemoryGateway::school_catalogue`]
    pub fn with_school_catalogue() -> Self {
        Self::new(Self::school_catalogue())
    }

    /// Builder method to record URLs against a base other than same-origin
    pub fn with_base_url(self, base_url: &str) -> Self {
        self.lock().endpoints = Endpoints::new(base_url);
        self
    }

    /// The activities Mergington High School offers at the start of term
    pub fn school_catalogue() -> ActivitySnapshot {
        [
            Activity::new(
                "Chess Club",
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
            Activity::new(
                "Programming Class",
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
            Activity::new(
                "Gym Class",
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
            Activity::new(
                "Basketball Club",
                "Practice drills and play in inter-school basketball games",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["liam@mergington.edu"]),
            Activity::new(
                "Soccer Team",
                "Train with the school team and compete in the regional league",
                "Mondays and Wednesdays, 3:30 PM - 5:30 PM",
                22,
            )
            .with_participants(["noah@mergington.edu", "ava@mergington.edu"]),
            Activity::new(
                "Art Club",
                "Explore painting, drawing and sculpture",
                "Wednesdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["mia@mergington.edu"]),
            Activity::new(
                "Drama Society",
                "Act, direct and stage the school plays",
                "Thursdays, 4:00 PM - 6:00 PM",
                20,
            )
            .with_participants(["ella@mergington.edu", "lucas@mergington.edu"]),
            Activity::new(
                "Math Olympiad",
                "Solve challenging problems and prepare for math competitions",
                "Mondays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["isabella@mergington.edu"]),
            Activity::new(
                "Debate Club",
                "Build argumentation skills and compete in debate tournaments",
                "Fridays, 4:00 PM - 5:30 PM",
                16,
            )
            .with_participants(["james@mergington.edu", "charlotte@mergington.edu"]),
        ]
        .into_iter()
        .collect()
    }

    /// Queue a reply for the next call, ahead of the built-in behavior
    pub fn script(&self, response: ScriptedResponse) {
        self.lock().scripted.push_back(response);
    }

    /// Make every following call fail at the transport level
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Calls made so far, oldest first
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Current server-side state
    pub fn activities(&self) -> ActivitySnapshot {
        self.lock().activities.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record the call, then answer from the script or the built-in handler
    fn exchange<F>(&self, call: GatewayCall, handler: F) -> GatewayResult<(u16, String)>
    where
        F: FnOnce(&mut ActivitySnapshot) -> (u16, String),
    {
        let mut inner = self.lock();
        inner.calls.push(call);

        if inner.offline {
            return Err(GatewayError::Transport("Failed to fetch".to_string()));
        }

        match inner.scripted.pop_front() {
            Some(ScriptedResponse::Http { status, body }) => Ok((status, body)),
            Some(ScriptedResponse::TransportFailure(reason)) => Err(GatewayError::Transport(reason)),
            None => Ok(handler(&mut inner.activities)),
        }
    }
}

fn json_reply<T: Serialize>(status: u16, value: &T) -> (u16, String) {
    match serde_json::to_string(value) {
        Ok(body) => (status, body),
        Err(e) => (500, format!("{{\"detail\":\"{}\"}}", e)),
    }
}

fn rejection(status: u16, detail: &str) -> (u16, String) {
    json_reply(
        status,
        &GatewayErrorBody {
            detail: Some(detail.to_string()),
        },
    )
}

fn message(text: String) -> (u16, String) {
    json_reply(200, &SignupResponse { message: text })
}

#[async_trait(?Send)]
impl Gateway for MemoryGateway {
    async fn list_activities(&self) -> GatewayResult<ActivitySnapshot> {
        let call = self.lock().endpoints.activities();
        let (status, body) = self.exchange(call, |activities| json_reply(200, activities))?;
        decode_response(status, &body)
    }

    async fn sign_up(&self, activity: &str, email: &str) -> GatewayResult<SignupResponse> {
        let call = self.lock().endpoints.signup(activity, email);
        let (status, body) = self.exchange(call, |activities| {
            let Some(entry) = activities.get_mut(activity) else {
                return rejection(404, "Activity not found");
            };
            if entry.has_participant(email) {
                return rejection(400, "Student is already signed up");
            }
            entry.participants.push(email.to_string());
            message(format!("Signed up {} for {}", email, activity))
        })?;
        decode_response(status, &body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> GatewayResult<SignupResponse> {
        let call = self.lock().endpoints.unregister(activity, email);
        let (status, body) = self.exchange(call, |activities| {
            let Some(entry) = activities.get_mut(activity) else {
                return rejection(404, "Activity not found");
            };
            let Some(index) = entry.participants.iter().position(|p| p == email) else {
                return rejection(400, "Student is not registered for this activity");
            };
            entry.participants.remove(index);
            message(format!("Unregistered {} from {}", email, activity))
        })?;
        decode_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::Method;

    #[tokio::test]
    async fn test_list_activities() {
        let gateway = MemoryGateway::with_school_catalogue();
        let snapshot = gateway.list_activities().await.unwrap();

        assert_eq!(snapshot.len(), 9);
        assert_eq!(snapshot.names().next(), Some("Chess Club"));
        for activity in &snapshot {
            assert!(activity.max_participants > 0);
            assert!(activity.spots_left() >= 0);
        }
    }

    #[tokio::test]
    async fn test_signup_then_unregister() {
        let gateway = MemoryGateway::with_school_catalogue();
        let email = "workflow@mergington.edu";

        let response = gateway.sign_up("Drama Society", email).await.unwrap();
        assert!(response.message.contains(email));
        assert!(response.message.contains("Drama Society"));
        assert!(gateway.activities().get("Drama Society").unwrap().has_participant(email));

        let response = gateway.unregister("Drama Society", email).await.unwrap();
        assert_eq!(response.message, format!("Unregistered {} from Drama Society", email));
        assert!(!gateway.activities().get("Drama Society").unwrap().has_participant(email));
    }

    #[tokio::test]
    async fn test_signup_rejections() {
        let gateway = MemoryGateway::with_school_catalogue();

        let err = gateway.sign_up("Fake Activity", "a@b.com").await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::Rejected {
                status: 404,
                detail: Some("Activity not found".to_string())
            }
        );

        let err = gateway.sign_up("chess club", "a@b.com").await.unwrap_err();
        assert!(matches!(err, GatewayError::Rejected { status: 404, .. }));

        gateway.sign_up("Chess Club", "dup@mergington.edu").await.unwrap();
        let err = gateway.sign_up("Chess Club", "dup@mergington.edu").await.unwrap_err();
        assert!(err.detail().unwrap().contains("already signed up"));
    }

    #[tokio::test]
    async fn test_unregister_non_participant() {
        let gateway = MemoryGateway::with_school_catalogue();
        let err = gateway
            .unregister("Chess Club", "notregistered@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Rejected { status: 400, .. }));
        assert!(err.detail().unwrap().contains("not registered"));
    }

    #[tokio::test]
    async fn test_capacity_not_enforced() {
        let gateway = MemoryGateway::new(
            [Activity::new("Tiny", "", "", 1).with_participants(["a@b.com"])]
                .into_iter()
                .collect(),
        );
        gateway.sign_up("Tiny", "overflow@b.com").await.unwrap();
        assert_eq!(gateway.activities().get("Tiny").unwrap().spots_left(), -1);
    }

    #[tokio::test]
    async fn test_calls_are_recorded() {
        let gateway = MemoryGateway::with_school_catalogue().with_base_url("http://localhost:8000");
        gateway.list_activities().await.unwrap();
        let _ = gateway.sign_up("Chess Club", "a@b.com").await;

        let calls = gateway.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, Method::Get);
        assert_eq!(calls[0].url, "http://localhost:8000/activities");
        assert_eq!(
            calls[1].url,
            "http://localhost:8000/activities/Chess%20Club/signup?email=a%40b.com"
        );
    }

    #[tokio::test]
    async fn test_scripted_and_offline() {
        let gateway = MemoryGateway::with_school_catalogue();
        gateway.script(ScriptedResponse::http(200, r#"{"message":"Signed up!"}"#));
        gateway.script(ScriptedResponse::TransportFailure("DNS".to_string()));

        let response = gateway.sign_up("Nowhere", "a@b.com").await.unwrap();
        assert_eq!(response.message, "Signed up!");

        let err = gateway.sign_up("Chess Club", "a@b.com").await.unwrap_err();
        assert_eq!(err, GatewayError::Transport("DNS".to_string()));

        gateway.set_offline(true);
        assert!(gateway.list_activities().await.unwrap_err().is_transport());
        assert_eq!(gateway.calls().len(), 3);
    }
}
