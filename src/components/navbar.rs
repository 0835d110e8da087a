//! Top navigation bar rendered on every route.
//!
//! Stateless: there is no client-side auth state, so all three links are
//! always shown and no route is guarded.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <span class="navbar__brand">"Crowdfunding"</span>
            <nav class="navbar__links">
                <A href="/">"Home"</A>
                <A href="/login">"Login"</A>
                <A href="/register">"Register"</A>
            </nav>
        </header>
    }
}
