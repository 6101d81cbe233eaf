use dioxus::prelude::*;
use shell_types::{LoadingConfig, UiConfig};

mod routes;
use routes::Route;

/// Environment variable naming a `ui.toml` that replaces the bundled one.
const CONFIG_ENV: &str = "SHELL_UI_CONFIG";

const BUNDLED_CONFIG: &str = include_str!("../ui.toml");

fn main() {
    dioxus::launch(App);
}

/// Resolve the UI config: the file named by `SHELL_UI_CONFIG` if set,
/// otherwise the bundled `ui.toml`. Any failure falls back to defaults.
fn load_ui_config() -> UiConfig {
    let loaded = match std::env::var(CONFIG_ENV) {
        Ok(path) => UiConfig::load(&path),
        Err(_) => UiConfig::from_toml_str(BUNDLED_CONFIG),
    };

    match loaded {
        Ok(config) => {
            tracing::info!(
                size = config.loading.size.as_str(),
                color = config.loading.color.as_str(),
                "UI config loaded"
            );
            config
        }
        Err(e) => {
            tracing::error!("Failed to load UI config, using defaults: {e}");
            UiConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    // Loading defaults shared by every page
    use_context_provider(|| -> LoadingConfig { load_ui_config().loading });

    rsx! {
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = UiConfig::from_toml_str(BUNDLED_CONFIG).unwrap();
        assert_eq!(config.loading.line_count, 4);
        assert_eq!(config.loading.size, shell_types::SpinnerSize::Large);
    }
}
