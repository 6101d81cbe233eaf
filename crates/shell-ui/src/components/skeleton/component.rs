use dioxus::prelude::*;
use shell_types::DEFAULT_LINE_COUNT;

/// One bar of a [`SkeletonLoader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonLine {
    pub index: usize,
    /// The last bar is drawn narrower to break up the block.
    pub short: bool,
}

/// Lazily yields `count` bars; only the final one is short.
pub fn skeleton_lines(count: usize) -> impl Iterator<Item = SkeletonLine> {
    (0..count).map(move |index| SkeletonLine {
        index,
        short: index + 1 == count,
    })
}

/// A single neutral placeholder block.
#[component]
pub fn Skeleton(
    #[props(default = false)] short: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "skeleton", None, false),
        Attribute::new(
            "data-variant",
            if short { "short" } else { "full" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// Stack of placeholder text bars shown while content loads.
#[component]
pub fn SkeletonLoader(
    #[props(default = DEFAULT_LINE_COUNT)] line_count: usize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "skeleton-loader", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            "aria-busy": "true",
            ..merged,
            for line in skeleton_lines(line_count) {
                Skeleton { key: "{line.index}", class: "skeleton-line", short: line.short }
            }
        }
    }
}

/// Card-shaped placeholder: avatar, title, subtitle and a text block.
#[component]
pub fn PulseLoader(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "pulse-loader", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            "aria-busy": "true",
            ..merged,
            Skeleton { class: "pulse-avatar" }
            div { class: "pulse-body",
                Skeleton { class: "pulse-title" }
                Skeleton { class: "pulse-subtitle" }
                Skeleton { class: "pulse-text" }
            }
        }
    }
}
