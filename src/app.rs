//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::net::api::ApiClient;
use crate::net::config::ApiConfig;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the API client from the (optionally injected) endpoint
/// configuration, provides it to the view tree, and sets up client-side
/// routing for the three navigable paths. No route is guarded: there is no
/// client-side authentication state.
#[component]
pub fn App(#[prop(optional)] api_config: Option<ApiConfig>) -> impl IntoView {
    provide_meta_context();

    provide_context(ApiClient::new(api_config.unwrap_or_default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/crowdfund-client.css"/>
        <Title text="Crowdfunding"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
            </Routes>
        </Router>
    }
}
