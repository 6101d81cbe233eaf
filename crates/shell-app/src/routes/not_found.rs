use dioxus::prelude::*;

use crate::routes::Route;

/// Fallback page for paths outside the navigation.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "not-found-page",
            h1 { "Page Not Found" }
            p {
                "The page "
                code { "{path}" }
                " could not be found."
            }
            Link { to: Route::Dashboard {}, "Back to Dashboard" }
        }
    }
}
