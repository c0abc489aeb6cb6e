use leptos::prelude::*;

use super::{CallToAction, FeatureGrid, Hero, HowItWorks, LogoConfig, PageHeader, QuizTypes};
use crate::model::{LandingModel, Section};

/// The whole landing page body, regions drawn in `model.sections` order.
#[component]
pub fn LandingPage(
    model: LandingModel,
    logo: LogoConfig,
    /// Account controls owned by the host (empty when not supplied)
    #[prop(optional, into)]
    user_menu: ViewFn,
) -> impl IntoView {
    let LandingModel {
        session,
        cta,
        sections,
        features,
        steps,
        quiz_types,
    } = model;

    let regions = sections
        .into_iter()
        .map(|section| match section {
            Section::Header => {
                view! { <PageHeader logo=logo.clone() user_menu=user_menu.clone() /> }.into_any()
            }
            Section::Hero => view! { <Hero cta=cta /> }.into_any(),
            Section::FeatureGrid => view! { <FeatureGrid features=features.clone() /> }.into_any(),
            Section::Steps => view! { <HowItWorks steps=steps.clone() /> }.into_any(),
            Section::QuizTypes => view! { <QuizTypes quiz_types=quiz_types.clone() /> }.into_any(),
            Section::CallToAction => view! { <CallToAction cta=cta /> }.into_any(),
        })
        .collect::<Vec<_>>();

    view! {
        <div class="landing" data-session=session.as_str()>
            {regions}
        </div>
    }
}
