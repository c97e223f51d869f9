//! Global Application State
//!
//! Reactive page state using Leptos signals, plus the non-reactive
//! bookkeeping (notice board, fetch sequencer, pending hide timer) kept in
//! stored values.

use gloo_timers::callback::Timeout;
use leptos::*;

use mergington::controller::{self, ActionOutcome, FetchOutcome};
use mergington::{
    Config, ListView, Notice, NoticeBoard, NoticeConfig, ParticipantRow, RequestSequencer,
    SelectOptions, TimedNotice,
};

use crate::api::{api_base, FetchGateway};

/// Page state provided to all components
#[derive(Clone, Copy)]
pub struct AppState {
    /// Contents of the activities list area
    pub list: RwSignal<ListView>,
    /// Activity names offered by the select, in snapshot order
    pub options: RwSignal<Vec<String>>,
    /// Selected activity; empty for the placeholder
    pub selected: RwSignal<String>,
    /// Email field
    pub email: RwSignal<String>,
    /// Visible message, if any
    pub notice: RwSignal<Option<Notice>>,

    gateway: StoredValue<FetchGateway>,
    notices: StoredValue<NoticeConfig>,
    board: StoredValue<NoticeBoard>,
    sequencer: StoredValue<RequestSequencer>,
    hide_timer: StoredValue<Option<Timeout>>,
}

/// Provide page state to the component tree
pub fn provide_app_state(config: &Config) -> AppState {
    let base_url = api_base(&config.gateway.base_url);
    tracing::info!("Activities gateway at {:?}", base_url);

    let state = AppState {
        list: create_rw_signal(ListView::Loading),
        options: create_rw_signal(Vec::new()),
        selected: create_rw_signal(String::new()),
        email: create_rw_signal(String::new()),
        notice: create_rw_signal(None),
        gateway: store_value(FetchGateway::new(&base_url)),
        notices: store_value(config.notices.clone()),
        board: store_value(NoticeBoard::new()),
        sequencer: store_value(RequestSequencer::new()),
        hide_timer: store_value(None),
    };

    provide_context(state);
    state
}

impl AppState {
    /// Reload the snapshot. Only the latest issued fetch is applied.
    pub fn refresh(self) {
        let Some(ticket) = self.sequencer.try_update_value(|s| s.issue()) else {
            return;
        };
        let gateway = self.gateway.get_value();

        spawn_local(async move {
            let outcome = controller::fetch_activities(&gateway).await;

            if !self.sequencer.with_value(|s| s.is_current(ticket)) {
                tracing::debug!("Discarding stale activities response");
                return;
            }

            match outcome {
                FetchOutcome::Loaded(snapshot) => {
                    let options = SelectOptions::build(&snapshot, &self.selected.get_untracked());
                    self.selected.set(options.selected_value().to_string());
                    self.options.set(options.options);
                    self.list.set(ListView::from_snapshot(&snapshot));
                }
                // the select keeps its previous options
                FetchOutcome::Failed => self.list.set(ListView::Failed),
            }
        });
    }

    /// Submit the sign-up form with the current field values
    pub fn sign_up(self) {
        let activity = self.selected.get_untracked();
        let email = self.email.get_untracked();
        let gateway = self.gateway.get_value();
        let notices = self.notices.get_value();

        spawn_local(async move {
            let outcome = controller::sign_up(&gateway, &activity, &email, &notices).await;
            self.apply(outcome);
        });
    }

    /// Remove the participant a row was rendered with, after confirmation
    pub fn unregister(self, row: ParticipantRow) {
        let gateway = self.gateway.get_value();
        let notices = self.notices.get_value();

        spawn_local(async move {
            let outcome =
                controller::unregister(&gateway, &row.activity, &row.email, confirm, &notices)
                    .await;
            if let Some(outcome) = outcome {
                self.apply(outcome);
            }
        });
    }

    /// Show a message and schedule its hide. Replacing a message cancels the
    /// previous timer; a timer that still fires only hides its own message.
    pub fn show_notice(self, timed: TimedNotice) {
        let Some(ticket) = self.board.try_update_value(|b| b.show(timed.notice.clone())) else {
            return;
        };
        self.notice.set(Some(timed.notice));

        let millis = u32::try_from(timed.hide_after.as_millis()).unwrap_or(u32::MAX);
        let timer = Timeout::new(millis, move || {
            if self.board.try_update_value(|b| b.hide(ticket)) == Some(true) {
                self.notice.set(None);
            }
        });

        // dropping the old handle clears it
        self.hide_timer.set_value(Some(timer));
    }

    fn apply(self, outcome: ActionOutcome) {
        if outcome.refresh {
            self.refresh();
        }
        self.show_notice(outcome.notice);
        if outcome.reset_form {
            self.email.set(String::new());
            self.selected.set(String::new());
        }
    }
}

fn confirm(prompt: &str) -> bool {
    window().confirm_with_message(prompt).unwrap_or(false)
}
