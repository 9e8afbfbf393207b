//! Page Header and Footer

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="container">
                <h1>"Sustainability Actions Tracker"</h1>
                <p>"Track your contributions to a sustainable future"</p>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="page-footer">
            <p>"Sustainability Actions Tracker"</p>
        </footer>
    }
}
