use leptos::prelude::*;

use super::{BrandLogo, LogoConfig, Region};
use crate::model::Section;

/// Fixed top bar: logo on the left, host-supplied account controls on the right.
#[component]
pub fn PageHeader(logo: LogoConfig, user_menu: ViewFn) -> impl IntoView {
    view! {
        <Region section=Section::Header class="page-header">
            <BrandLogo class="page-header-logo" alt=logo.alt no_margin=logo.no_margin />
            <div class="user-menu" data-role="user-menu">
                {user_menu.run()}
            </div>
        </Region>
    }
}
