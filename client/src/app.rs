//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::route_guard::Guarded;
use crate::net::mock::MockBackend;
use crate::pages::{
    about::AboutPage,
    admin::AdminPage,
    auth::{AuthMode, AuthPage},
    community::CommunityPage,
    dashboard::DashboardPage,
    events::EventsPage,
    landing::LandingPage,
    learning::LearningPage,
    media::MediaPage,
    profile::ProfilePage,
    projects::ProjectsPage,
};
use crate::state::notifications::NotificationsState;
use crate::state::routes::{AppRoute, resolve_path};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::auth::install_session_restore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
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
/// Provides the session, backend, and chrome contexts, starts the session
/// restore, and declares the route table. Every protected route is wrapped
/// in `Guarded` with its `AppRoute`, which owns the access decision.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let backend = MockBackend::default();
    let session = RwSignal::new(SessionState::default());
    let notifications = RwSignal::new(NotificationsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(backend.clone());
    provide_context(session);
    provide_context(notifications);
    provide_context(ui);

    install_session_restore(session, backend);

    view! {
        <Stylesheet id="leptos" href="/pkg/cci-hub.css"/>
        <Title text="CCI Platform"/>

        <Router>
            <Routes fallback=|| {
                let target = resolve_path(&use_location().pathname.get_untracked());
                view! { <Redirect path=target.path()/> }
            }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("login") view=|| view! { <AuthPage mode=AuthMode::Login/> }/>
                <Route path=StaticSegment("register") view=|| view! { <AuthPage mode=AuthMode::Register/> }/>

                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Guarded route=AppRoute::Dashboard><DashboardLayout><DashboardPage/></DashboardLayout></Guarded> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <Guarded route=AppRoute::Profile><DashboardLayout><ProfilePage/></DashboardLayout></Guarded> }
                />
                <Route
                    path=StaticSegment("projects")
                    view=|| view! { <Guarded route=AppRoute::Projects><DashboardLayout><ProjectsPage/></DashboardLayout></Guarded> }
                />
                <Route
                    path=StaticSegment("events")
                    view=|| view! { <Guarded route=AppRoute::Events><DashboardLayout><EventsPage/></DashboardLayout></Guarded> }
                />
                <Route
                    path=StaticSegment("community")
                    view=|| view! { <Guarded route=AppRoute::Community><DashboardLayout><CommunityPage/></DashboardLayout></Guarded> }
                />
                <Route
                    path=StaticSegment("learning")
                    view=|| view! { <Guarded route=AppRoute::Learning><DashboardLayout><LearningPage/></DashboardLayout></Guarded> }
                />
                <Route
                    path=StaticSegment("media")
                    view=|| view! { <Guarded route=AppRoute::Media><DashboardLayout><MediaPage/></DashboardLayout></Guarded> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <Guarded route=AppRoute::Admin><DashboardLayout><AdminPage/></DashboardLayout></Guarded> }
                />
            </Routes>
        </Router>
    }
}
