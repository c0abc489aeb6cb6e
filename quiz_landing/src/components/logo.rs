//! Brand logo linking back to the site root.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::{LOGO_ALT, LOGO_URL};
use crate::routes::Route;

/// Host-configurable branding for [`BrandLogo`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Image alt text
    pub alt: String,
    /// Drop the left inset the header layout normally gets
    pub no_margin: bool,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            alt: LOGO_ALT.to_string(),
            no_margin: false,
        }
    }
}

/// Logo image wrapped in a link to `/`.
///
/// Nothing about the output depends on session state.
#[component]
pub fn BrandLogo(
    /// Extra classes for the wrapping link
    #[prop(optional, into)]
    class: String,
    #[prop(into, default = LOGO_ALT.to_string())] alt: String,
    #[prop(optional)] no_margin: bool,
) -> impl IntoView {
    let link_class = if class.is_empty() {
        "brand-logo".to_string()
    } else {
        format!("brand-logo {class}")
    };
    let img_class = if no_margin {
        "brand-logo-img"
    } else {
        "brand-logo-img brand-logo-inset"
    };

    view! {
        <a href=Route::Root.path() class=link_class data-role="brand-logo">
            <img src=LOGO_URL alt=alt class=img_class />
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn links_to_root_with_default_alt() {
        let html = view! { <BrandLogo /> }.to_html();
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains(LOGO_URL));
        assert!(html.contains(r#"alt="Quiz Online Logo""#));
        assert!(html.contains("brand-logo-inset"));
        assert!(html.contains(r#"class="brand-logo""#));
    }

    #[test]
    fn class_and_margin_are_presentational_only() {
        let html = view! { <BrandLogo class="compact" no_margin=true /> }.to_html();
        assert!(html.contains(r#"class="brand-logo compact""#));
        assert!(!html.contains("brand-logo-inset"));
        assert!(html.contains(r#"href="/""#));
    }

    #[test]
    fn alt_text_is_configurable() {
        let config = LogoConfig {
            alt: "ACOEM Logo".into(),
            ..Default::default()
        };
        let html = view! { <BrandLogo alt=config.alt /> }.to_html();
        assert!(html.contains(r#"alt="ACOEM Logo""#));
    }

    #[test]
    fn config_deserializes_partially() {
        let config: LogoConfig = serde_json::from_str(r#"{"no_margin":true}"#).unwrap();
        assert_eq!(config.alt, LOGO_ALT);
        assert!(config.no_margin);
    }
}
