//! Smooth-scroll targets and the fade-in reveal settings.

use crate::shared::config::ScrollConfig;

/// Id of the contact section every call-to-action leads to
pub const CONTACT_SECTION_ID: &str = "contato";

/// Class added to a card once it scrolls into view
pub const FADE_IN_CLASS: &str = "fade-in";

/// Element id an in-page anchor points to; `None` for `"#"` and
/// non-fragment links
pub fn anchor_target(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}

/// Toast shown by a solution card's button before scrolling to the contact form
pub fn redirect_message(title: &str) -> String {
    format!("Redirecionando para mais informações sobre {}", title.trim())
}

/// Window scroll position that puts a section just below the sticky header
pub fn anchor_scroll_top(target_offset_top: f64, header_height: f64, gap: f64) -> f64 {
    (target_offset_top - header_height - gap).max(0.0)
}

/// Options of the `IntersectionObserver` driving the fade-in
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl From<&ScrollConfig> for RevealOptions {
    fn from(config: &ScrollConfig) -> Self {
        Self {
            threshold: config.reveal_threshold,
            root_margin: config.reveal_root_margin.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#contato"), Some("contato"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/precos"), None);
    }

    #[test]
    fn test_redirect_message() {
        assert_eq!(
            redirect_message(" Cardápio QR "),
            "Redirecionando para mais informações sobre Cardápio QR"
        );
    }

    #[test]
    fn test_scroll_top_leaves_header_gap() {
        assert_eq!(anchor_scroll_top(1200.0, 80.0, 20.0), 1100.0);
        assert_eq!(anchor_scroll_top(50.0, 80.0, 20.0), 0.0);
    }

    #[test]
    fn test_reveal_options_from_config() {
        let options = RevealOptions::from(&default_config().scroll);
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
    }
}
