//! Root document component - the complete HTML page

use leptos::prelude::*;

use super::{LandingPage, LogoConfig};
use crate::content::{BRAND_NAME, HERO_SUBTITLE};
use crate::model::LandingModel;
use crate::styles::LANDING_CSS;

/// The complete HTML document for the landing page
#[component]
pub fn LandingDocument(
    model: LandingModel,
    logo: LogoConfig,
    #[prop(optional, into)] user_menu: ViewFn,
) -> impl IntoView {
    let title = format!("{BRAND_NAME} - {HERO_SUBTITLE}");
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=HERO_SUBTITLE />
                <title>{title}</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <LandingPage model=model logo=logo user_menu=user_menu />
            </body>
        </html>
    }
}
