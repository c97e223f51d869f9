//! # Mergington
//!
//! Client core for the Mergington High School activities page: list the
//! extracurricular activities, sign a student up by email, and unregister a
//! participant. The browser front end (`mergington-ui`) is a thin layer over
//! this crate; everything here also runs natively, which is how it is tested.
//!
//! ## Modules
//!
//! - [`model`]: activities snapshot and wire bodies
//! - [`gateway`]: the activities service contract, URL building, response
//!   classification, and an in-memory implementation
//! - [`controller`]: fetch, sign-up and unregister flows
//! - [`render`]: view-models for activity cards and the activity select
//! - [`notice`]: the transient message area
//! - [`sequence`]: discarding stale snapshot responses
//! - [`config`]: TOML configuration
//! - [`logging`]: tracing subscriber for browser and native
//!
//! ## Quick Start
//!
//! ```rust
//! use mergington::{controller, FetchOutcome, MemoryGateway, NoticeConfig};
//!
//! # async fn run() {
//! let gateway = MemoryGateway::with_school_catalogue();
//! let notices = NoticeConfig::default();
//!
//! let outcome = controller::sign_up(&gateway, "Chess Club", "ada@mergington.edu", &notices).await;
//! assert_eq!(outcome.notice.notice.text, "Signed up ada@mergington.edu for Chess Club");
//!
//! if let FetchOutcome::Loaded(snapshot) = controller::fetch_activities(&gateway).await {
//!     assert_eq!(snapshot.get("Chess Club").unwrap().spots_left(), 9);
//! }
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod notice;
pub mod render;
pub mod sequence;

pub use model::{Activity, ActivitySnapshot, GatewayErrorBody, SignupResponse};

pub use gateway::{
    decode_response, Endpoints, Gateway, GatewayCall, GatewayError, GatewayResult,
    MemoryGateway, Method, ScriptedResponse,
};

pub use controller::{ActionOutcome, FetchOutcome};

pub use render::{ActivityCardView, ListView, ParticipantRow, ParticipantsView, SelectOptions};

pub use notice::{Notice, NoticeBoard, NoticeKind, NoticeTicket, TimedNotice};

pub use sequence::{RequestSequencer, RequestTicket};

pub use config::{Config, ConfigError, GatewayConfig, LoggingConfig, NoticeConfig};
