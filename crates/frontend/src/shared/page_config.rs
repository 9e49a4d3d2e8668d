use contracts::shared::config::{default_config, load_config, LandingConfig};
use web_sys::window;

/// Id of the optional `<script type="application/toml">` block overriding defaults
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Read the page override, falling back to the embedded defaults on any error
pub fn load_page_config() -> LandingConfig {
    let override_toml = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match load_config(override_toml.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid #{} block, using defaults: {:#}", CONFIG_ELEMENT_ID, e);
            default_config().clone()
        }
    }
}
