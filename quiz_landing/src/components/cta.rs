use leptos::prelude::*;

use super::{ActionLink, LinkVariant, Region, TextBlock, TextLevel};
use crate::content::{CTA_DESCRIPTION, CTA_HEADING, CTA_JOIN_LABEL, CTA_PRIMARY_LABEL};
use crate::model::Section;
use crate::routes::CtaTargets;

/// Closing call-to-action panel. Shares its targets with the hero.
#[component]
pub fn CallToAction(cta: CtaTargets) -> impl IntoView {
    view! {
        <Region section=Section::CallToAction class="cta">
            <div class="container">
                <div class="cta-panel">
                    <TextBlock level=TextLevel::SectionTitle>{CTA_HEADING}</TextBlock>
                    <TextBlock level=TextLevel::Lead>{CTA_DESCRIPTION}</TextBlock>
                    <div class="action-row action-row-centered">
                        <ActionLink to=cta.primary cta="cta-primary">
                            {CTA_PRIMARY_LABEL}
                        </ActionLink>
                        <ActionLink to=cta.join variant=LinkVariant::Secondary cta="cta-join">
                            {CTA_JOIN_LABEL}
                        </ActionLink>
                    </div>
                </div>
            </div>
        </Region>
    }
}
