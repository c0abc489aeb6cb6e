use leptos::prelude::*;

use super::{TextBlock, TextLevel};

/// Centered heading + lead paragraph opening a content section.
#[component]
pub fn SectionIntro(title: &'static str, lead: &'static str) -> impl IntoView {
    view! {
        <div class="section-intro">
            <TextBlock level=TextLevel::SectionTitle>{title}</TextBlock>
            <TextBlock level=TextLevel::Lead>{lead}</TextBlock>
        </div>
    }
}
