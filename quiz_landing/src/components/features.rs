use leptos::prelude::*;

use super::{GlyphIcon, Region, SectionIntro, TextBlock, TextLevel};
use crate::content::{FEATURES_HEADING, FEATURES_SUBHEADING, FeatureEntry};
use crate::model::Section;

#[component]
pub fn FeatureGrid(features: Vec<FeatureEntry>) -> impl IntoView {
    view! {
        <Region section=Section::FeatureGrid class="features">
            <div class="container">
                <SectionIntro title=FEATURES_HEADING lead=FEATURES_SUBHEADING />
                <div class="features-grid">
                    {features
                        .into_iter()
                        .map(|entry| view! { <FeatureCard entry=entry /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </Region>
    }
}

#[component]
fn FeatureCard(entry: FeatureEntry) -> impl IntoView {
    view! {
        <article class="card feature-card" data-role="feature-card">
            <div class="feature-icon">
                <GlyphIcon glyph=entry.glyph />
            </div>
            <TextBlock level=TextLevel::CardTitle>{entry.title}</TextBlock>
            <TextBlock level=TextLevel::Body>{entry.description}</TextBlock>
        </article>
    }
}
