use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdCalendar, LdFolder, LdLayoutDashboard, LdSettings, LdUsers,
};
use dioxus_free_icons::Icon;
use shell_types::{NavIcon, NAVIGATION_ENTRIES};

const ICON_SIZE: u32 = 18;

/// Glyph for a navigation icon identifier.
fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: ICON_SIZE, height: ICON_SIZE }
        },
        NavIcon::Projects => rsx! {
            Icon::<LdFolder> { icon: LdFolder, width: ICON_SIZE, height: ICON_SIZE }
        },
        NavIcon::Calendar => rsx! {
            Icon::<LdCalendar> { icon: LdCalendar, width: ICON_SIZE, height: ICON_SIZE }
        },
        NavIcon::Team => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: ICON_SIZE, height: ICON_SIZE }
        },
        NavIcon::Notifications => rsx! {
            Icon::<LdBell> { icon: LdBell, width: ICON_SIZE, height: ICON_SIZE }
        },
        NavIcon::Settings => rsx! {
            Icon::<LdSettings> { icon: LdSettings, width: ICON_SIZE, height: ICON_SIZE }
        },
    }
}

/// Vertical list of the application's fixed navigation links.
///
/// Must be rendered inside a `Router`. Highlighting of the current page is
/// left to `Link`, which adds the `active` class to the matching entry.
#[component]
pub fn NavigationSidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "nav-sidebar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav {
            ..merged,
            ul { class: "nav-sidebar-menu",
                for entry in NAVIGATION_ENTRIES {
                    li { key: "{entry.path}", class: "nav-sidebar-item",
                        Link {
                            to: entry.path,
                            class: "nav-sidebar-link",
                            active_class: "active",
                            span {
                                class: "nav-sidebar-icon",
                                "data-icon": entry.icon.as_str(),
                                {nav_icon(entry.icon)}
                            }
                            span { class: "nav-sidebar-label", "{entry.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Routable, Clone, PartialEq)]
    enum TestRoute {
        #[route("/")]
        Home {},
    }

    #[component]
    fn Home() -> Element {
        rsx! { NavigationSidebar { id: "main-nav" } }
    }

    fn render_sidebar() -> String {
        fn app() -> Element {
            rsx! { Router::<TestRoute> {} }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_every_entry_once() {
        let html = render_sidebar();
        for entry in NAVIGATION_ENTRIES {
            let href = format!("href=\"{}\"", entry.path);
            assert_eq!(html.matches(&href).count(), 1, "{href} in {html}");

            let label = format!(">{}</span>", entry.label);
            assert_eq!(html.matches(&label).count(), 1, "{label} in {html}");

            let icon = format!("data-icon=\"{}\"", entry.icon.as_str());
            assert_eq!(html.matches(&icon).count(), 1, "{icon} in {html}");
        }
    }

    #[test]
    fn entries_keep_declared_order() {
        let html = render_sidebar();
        let positions: Vec<usize> = NAVIGATION_ENTRIES
            .iter()
            .map(|entry| {
                html.find(&format!(">{}</span>", entry.label))
                    .unwrap_or_else(|| panic!("missing {} in {html}", entry.label))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn icon_precedes_label_in_each_link() {
        let html = render_sidebar();
        for entry in NAVIGATION_ENTRIES {
            let icon = html
                .find(&format!("data-icon=\"{}\"", entry.icon.as_str()))
                .unwrap();
            let label = html.find(&format!(">{}</span>", entry.label)).unwrap();
            assert!(icon < label, "{}", entry.label);
        }
    }

    /// The opening `<a ...>` tag that contains `needle`.
    fn enclosing_anchor<'a>(html: &'a str, needle: &str) -> &'a str {
        let at = html
            .find(needle)
            .unwrap_or_else(|| panic!("missing {needle} in {html}"));
        let start = html[..at].rfind("<a").expect("anchor start");
        let end = at + html[at..].find('>').expect("anchor end");
        &html[start..=end]
    }

    #[test]
    fn router_marks_only_current_link_active() {
        let html = render_sidebar();
        assert_eq!(html.matches("nav-sidebar-link active").count(), 1, "{html}");

        let active = enclosing_anchor(&html, "nav-sidebar-link active");
        assert!(active.contains("href=\"/\""), "{active}");

        let projects = enclosing_anchor(&html, "href=\"/projects\"");
        assert!(!projects.contains("active"), "{projects}");
    }

    #[test]
    fn styling_hook_reaches_root() {
        let html = render_sidebar();
        assert!(html.contains("id=\"main-nav\""), "{html}");
        assert_eq!(html.matches("nav-sidebar-item").count(), 6, "{html}");
    }
}
