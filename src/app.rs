//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::navbar::NavBar;
use crate::config::NavConfig;

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
/// Provides the navigation config and mounts the bar above the routed page.
/// Page bodies belong to the host application; every route renders a
/// placeholder here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(NavConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/nexawork.css"/>
        <Title text="NexaWork"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| view! { <RoutePlaceholder/> }>
                    <Route path=StaticSegment("") view=RoutePlaceholder/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn RoutePlaceholder() -> impl IntoView {
    let location = use_location();
    view! { <p class="page__placeholder">{move || location.pathname.get()}</p> }
}
