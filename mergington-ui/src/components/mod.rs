//! UI Components
//!
//! Leptos components for the activities page.

pub mod activity_card;
pub mod activity_list;
pub mod message;
pub mod signup_form;

pub use activity_card::ActivityCard;
pub use activity_list::ActivityList;
pub use message::Message;
pub use signup_form::SignupForm;
