use leptos::prelude::*;

use super::{Region, SectionIntro, TextBlock, TextLevel};
use crate::content::{STEPS_HEADING, STEPS_SUBHEADING};
use crate::model::{Section, StepSlot};

/// "How It Works": numbered steps joined by horizontal connectors.
#[component]
pub fn HowItWorks(steps: Vec<StepSlot>) -> impl IntoView {
    view! {
        <Region section=Section::Steps class="steps">
            <div class="container">
                <SectionIntro title=STEPS_HEADING lead=STEPS_SUBHEADING />
                <ol class="steps-grid">
                    {steps
                        .into_iter()
                        .map(|entry| view! { <StepItem entry=entry /> })
                        .collect::<Vec<_>>()}
                </ol>
            </div>
        </Region>
    }
}

#[component]
fn StepItem(entry: StepSlot) -> impl IntoView {
    let StepSlot { step, connector_after } = entry;
    view! {
        <li class="step" data-role="step">
            {connector_after
                .then(|| view! { <div class="step-connector" data-role="step-connector"></div> })}
            <div class="step-body">
                <div class="step-number">
                    <span>{step.number}</span>
                </div>
                <TextBlock level=TextLevel::CardTitle>{step.title}</TextBlock>
                <TextBlock level=TextLevel::Body>{step.description}</TextBlock>
            </div>
        </li>
    }
}
