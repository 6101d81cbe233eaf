use dioxus::prelude::*;
use shell_types::{visible_message, ColorVariant, SpinnerSize, DEFAULT_LOADING_MESSAGE};

/// Class fragment for a spinner size.
pub fn size_class(size: SpinnerSize) -> &'static str {
    match size {
        SpinnerSize::Small => "spinner-sm",
        SpinnerSize::Medium => "spinner-md",
        SpinnerSize::Large => "spinner-lg",
        SpinnerSize::XLarge => "spinner-xl",
    }
}

/// Class fragment for a spinner color.
pub fn color_class(color: ColorVariant) -> &'static str {
    match color {
        ColorVariant::Primary => "spinner-primary",
        ColorVariant::Secondary => "spinner-secondary",
        ColorVariant::Success => "spinner-success",
        ColorVariant::Warning => "spinner-warning",
        ColorVariant::Danger => "spinner-danger",
        ColorVariant::White => "spinner-white",
    }
}

/// Resolve a size key to its class fragment. Unknown keys yield `""`.
pub fn size_class_for_key(key: &str) -> &'static str {
    match SpinnerSize::from_key(key) {
        Some(size) => size_class(size),
        None => {
            tracing::debug!(key, "unknown spinner size, rendering without size class");
            ""
        }
    }
}

/// Resolve a color key to its class fragment. Unknown keys yield `""`.
pub fn color_class_for_key(key: &str) -> &'static str {
    match ColorVariant::from_key(key) {
        Some(color) => color_class(color),
        None => {
            tracing::debug!(key, "unknown spinner color, rendering without color class");
            ""
        }
    }
}

/// A spinning ring with an optional caption.
///
/// Size and color are resolved through [`size_class`] and [`color_class`].
/// The animation lives in the stylesheet.
#[component]
pub fn Spinner(
    #[props(default)] size: SpinnerSize,
    #[props(default)] color: ColorVariant,
    #[props(into, default = DEFAULT_LOADING_MESSAGE.to_string())] message: String,
    #[props(default = true)] show_message: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "spinner-container", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let ring_class = format!("spinner {} {}", size_class(size), color_class(color));
    let caption = visible_message(show_message, &message);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "status",
            ..merged,
            div { class: ring_class }
            if let Some(caption) = caption {
                p { class: "spinner-message", "{caption}" }
            }
        }
    }
}

/// Stylesheet-driven spinner. `size` is forwarded as a class modifier
/// (`css-spinner--{size}`) without any lookup.
#[component]
pub fn CssSpinner(
    #[props(into, default = SpinnerSize::Medium.as_str().to_string())] size: String,
    #[props(into, default = DEFAULT_LOADING_MESSAGE.to_string())] message: String,
    #[props(default = true)] show_message: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "css-spinner-container", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let ring_class = format!("css-spinner css-spinner--{size}");
    let caption = visible_message(show_message, &message);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "status",
            ..merged,
            div { class: ring_class }
            if let Some(caption) = caption {
                p { class: "css-spinner-message", "{caption}" }
            }
        }
    }
}

/// Full-page overlay around a [`CssSpinner`], large unless `size` says
/// otherwise.
///
/// Renders nothing at all while `visible` is false.
#[component]
pub fn LoadingOverlay(
    #[props(default = true)] visible: bool,
    #[props(into, default = SpinnerSize::Large.as_str().to_string())] size: String,
    #[props(into, default = DEFAULT_LOADING_MESSAGE.to_string())] message: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let overlay: Option<Element> = visible.then(|| {
        let base = vec![Attribute::new("class", "loading-overlay", None, false)];
        let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
        rsx! {
            div {
                ..merged,
                CssSpinner { size, message }
            }
        }
    });

    rsx! {
        {overlay}
    }
}
