//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::realtime_provider::RealtimeProvider;
use crate::components::route_guard::RequireSession;
use crate::pages::{
    analysis::AnalysisPage, home::HomePage, login::LoginPage,
    observer_dashboard::ObserverDashboardPage, operator_dashboard::OperatorDashboardPage,
    settings::SettingsPage, unauthorized::UnauthorizedPage, users::UsersPage,
};
use crate::state::session::{Role, SessionState};

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
/// Provides the session context, mounts the realtime provider, and sets up
/// client-side routing. The realtime channel's lifetime is the app's, not
/// the session's; it connects with whatever cookie the browser holds.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Read the persisted session once in the browser. Guards hold off on
    // redirecting until `loading` clears, so hydration cannot bounce a
    // logged-in user through `/`.
    Effect::new(move || {
        session.update(|s| {
            s.session = crate::state::session::load();
            s.loading = false;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/sentinel-ui.css"/>
        <Title text="Sentinel"/>

        <Router>
            <Navbar/>
            <RealtimeProvider>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LoginPage/>
                    <Route
                        path=StaticSegment("home")
                        view=|| view! { <RequireSession><HomePage/></RequireSession> }
                    />
                    <Route
                        path=StaticSegment("analysis")
                        view=|| view! { <RequireSession><AnalysisPage/></RequireSession> }
                    />
                    <Route
                        path=StaticSegment("settings")
                        view=|| view! { <RequireSession><SettingsPage/></RequireSession> }
                    />
                    <Route
                        path=StaticSegment("users")
                        view=|| {
                            view! {
                                <RequireSession allowed=vec![Role::Admin]>
                                    <UsersPage/>
                                </RequireSession>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("operator-dashboard")
                        view=|| {
                            view! {
                                <RequireSession allowed=vec![Role::Operator]>
                                    <OperatorDashboardPage/>
                                </RequireSession>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("observer-dashboard")
                        view=|| {
                            view! {
                                <RequireSession allowed=vec![Role::Observer]>
                                    <ObserverDashboardPage/>
                                </RequireSession>
                            }
                        }
                    />
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                </Routes>
            </RealtimeProvider>
        </Router>
    }
}
