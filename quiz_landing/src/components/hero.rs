use leptos::prelude::*;

use super::{ActionLink, GlyphIcon, LinkVariant, Region, TagLabel, TextBlock, TextLevel};
use crate::content::{
    BRAND_NAME, Glyph, HERO_BADGE, HERO_DESCRIPTION, HERO_IMAGE_ALT, HERO_IMAGE_URL,
    HERO_JOIN_LABEL, HERO_PRIMARY_LABEL, HERO_SUBTITLE,
};
use crate::model::Section;
use crate::routes::CtaTargets;

#[component]
pub fn Hero(cta: CtaTargets) -> impl IntoView {
    view! {
        <Region section=Section::Hero class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <TagLabel label=HERO_BADGE class="hero-badge" />
                    <TextBlock level=TextLevel::Display>{BRAND_NAME}</TextBlock>
                    <TextBlock level=TextLevel::Subtitle>{HERO_SUBTITLE}</TextBlock>
                    <TextBlock level=TextLevel::Body class="hero-description">
                        {HERO_DESCRIPTION}
                    </TextBlock>
                    <div class="action-row">
                        <ActionLink to=cta.primary cta="hero-primary">
                            {HERO_PRIMARY_LABEL}
                            <GlyphIcon glyph=Glyph::ArrowRight size="20" class="action-arrow" />
                        </ActionLink>
                        <ActionLink to=cta.join variant=LinkVariant::Secondary cta="hero-join">
                            {HERO_JOIN_LABEL}
                        </ActionLink>
                    </div>
                </div>
                <div class="hero-media">
                    <div class="hero-glow"></div>
                    <img src=HERO_IMAGE_URL alt=HERO_IMAGE_ALT class="hero-image" />
                </div>
            </div>
        </Region>
    }
}
