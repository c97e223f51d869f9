//! App Root Component
//!
//! Page layout and the shared state provider.

use leptos::*;
use mergington::Config;

use crate::components::{ActivityList, Message, SignupForm};
use crate::state::global::provide_app_state;

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    let state = provide_app_state(&config);

    // Initial load
    state.refresh();

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <Message />
            </section>
        </main>

        <footer>
            <p>"© Mergington High School"</p>
        </footer>
    }
}
