use dioxus::prelude::*;
use shell_types::LoadingConfig;
use shell_ui::{CssSpinner, LoadingOverlay, PulseLoader, SkeletonLoader, Spinner};

/// Overview page previewing the configured spinner.
#[component]
pub fn Dashboard() -> Element {
    let config: LoadingConfig = use_context();

    rsx! {
        section { class: "page-section",
            Spinner {
                size: config.size,
                color: config.color,
                message: config.message.clone(),
                show_message: config.show_message,
            }
        }
        section { class: "page-grid",
            PulseLoader { class: "page-card" }
            PulseLoader { class: "page-card" }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let config: LoadingConfig = use_context();

    rsx! {
        section { class: "page-grid",
            for project in 0..3 {
                div { key: "{project}", class: "page-card",
                    SkeletonLoader { line_count: config.line_count }
                }
            }
        }
    }
}

#[component]
pub fn Calendar() -> Element {
    let config: LoadingConfig = use_context();

    rsx! {
        section { class: "page-section",
            CssSpinner {
                size: config.size.as_str(),
                message: "Loading events...",
                show_message: config.show_message,
            }
        }
    }
}

#[component]
pub fn Team() -> Element {
    rsx! {
        section { class: "page-grid",
            for member in 0..6 {
                PulseLoader { key: "{member}", class: "page-card" }
            }
        }
    }
}

#[component]
pub fn Notifications() -> Element {
    rsx! {
        section { class: "page-section",
            SkeletonLoader { line_count: 5 }
        }
    }
}

/// Shows the active loading defaults and previews the full-page overlay.
#[component]
pub fn Settings() -> Element {
    let config: LoadingConfig = use_context();
    let mut overlay_open = use_signal(|| false);
    let size = config.size.as_str();
    let color = config.color.as_str();

    rsx! {
        section { class: "page-section",
            dl { class: "settings-list",
                dt { "Size" }
                dd { "{size}" }
                dt { "Color" }
                dd { "{color}" }
                dt { "Message" }
                dd { "{config.message}" }
                dt { "Skeleton lines" }
                dd { "{config.line_count}" }
            }
        }
        section { class: "page-section",
            button {
                disabled: !config.visible,
                onclick: move |_| overlay_open.set(true),
                "Preview overlay"
            }
        }
        div { onclick: move |_| overlay_open.set(false),
            LoadingOverlay {
                visible: overlay_open() && config.visible,
                message: config.message.clone(),
            }
        }
    }
}
