//! Sign-up Form Component
//!
//! Email field, activity select and submit button.

use leptos::*;
use mergington::render::SELECT_PLACEHOLDER;

use crate::state::AppState;

#[component]
pub fn SignupForm() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.sign_up();
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || state.email.get()
                    on:input=move |ev| state.email.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="activity">"Select an Activity:"</label>
                <select
                    id="activity"
                    required
                    on:change=move |ev| state.selected.set(event_target_value(&ev))
                >
                    <option value="" prop:selected=move || state.selected.get().is_empty()>
                        {SELECT_PLACEHOLDER}
                    </option>
                    {move || {
                        state.options.get()
                            .into_iter()
                            .map(|name| {
                                let value = name.clone();
                                let current = name.clone();
                                view! {
                                    <option
                                        value=value
                                        prop:selected=move || state.selected.get() == current
                                    >
                                        {name}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <button type="submit">"Sign Up"</button>
        </form>
    }
}
