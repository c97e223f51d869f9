//! Activity Data Model
//!
//! Types for the activities snapshot returned by `GET /activities` and the
//! bodies returned by the sign-up and unregister endpoints.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single extracurricular activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Unique name, used as the key in the snapshot
    pub name: String,
    pub description: String,
    /// Free-form schedule text, e.g. "Fridays, 3:30 PM - 5:00 PM"
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in the order the gateway lists them
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with no participants
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder method to add participants
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants
            .extend(participants.into_iter().map(Into::into));
        self
    }

    /// Remaining capacity. Negative when the gateway has over-filled the activity.
    pub fn spots_left(&self) -> i64 {
        self.max_participants as i64 - self.participants.len() as i64
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Wire shape of one activity inside the snapshot object (the name is the key)
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ActivityBody {
    description: String,
    schedule: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

/// Full set of activities fetched at one point in time.
///
/// Entries keep the order of the JSON object the gateway sent, so cards and
/// select options come out in the same order on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitySnapshot {
    activities: Vec<Activity>,
}

impl ActivitySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an activity, replacing an existing one with the same name in place
    pub fn insert(&mut self, activity: Activity) {
        match self.activities.iter_mut().find(|a| a.name == activity.name) {
            Some(existing) => *existing = activity,
            None => self.activities.push(activity),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    /// Activity names in snapshot order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl FromIterator<Activity> for ActivitySnapshot {
    fn from_iter<T: IntoIterator<Item = Activity>>(iter: T) -> Self {
        let mut snapshot = Self::new();
        for activity in iter {
            snapshot.insert(activity);
        }
        snapshot
    }
}

impl<'a> IntoIterator for &'a ActivitySnapshot {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}

impl<'de> Deserialize<'de> for ActivitySnapshot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = ActivitySnapshot;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut snapshot = ActivitySnapshot::new();
                while let Some((name, body)) = map.next_entry::<String, ActivityBody>()? {
                    snapshot.insert(Activity {
                        name,
                        description: body.description,
                        schedule: body.schedule,
                        max_participants: body.max_participants,
                        participants: body.participants,
                    });
                }
                Ok(snapshot)
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

impl Serialize for ActivitySnapshot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(
                &activity.name,
                &ActivityBody {
                    description: activity.description.clone(),
                    schedule: activity.schedule.clone(),
                    max_participants: activity.max_participants,
                    participants: activity.participants.clone(),
                },
            )?;
        }
        map.end()
    }
}

/// Success body of the sign-up and unregister endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignupResponse {
    pub message: String,
}

/// Error body of a rejected request; `detail` is optional on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GatewayErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
