mod not_found;
mod pages;

use dioxus::prelude::*;
use not_found::NotFound;
use pages::{Calendar, Dashboard, Notifications, Projects, Settings, Team};
use shell_ui::NavigationSidebar;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/projects")]
    Projects {},
    #[route("/calendar")]
    Calendar {},
    #[route("/team")]
    Team {},
    #[route("/notifications")]
    Notifications {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Heading shown above the page content.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard {} => "Dashboard",
            Route::Projects {} => "Projects",
            Route::Calendar {} => "Calendar",
            Route::Team {} => "Team",
            Route::Notifications {} => "Notifications",
            Route::Settings {} => "Settings",
            Route::NotFound { .. } => "Not Found",
        }
    }
}

/// Page shell: navigation sidebar on the left, routed page on the right.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let title = route.title();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            NavigationSidebar {}
            main { class: "app-main",
                h1 { class: "app-title", "{title}" }
                Outlet::<Route> {}
            }
        }
    }
}
