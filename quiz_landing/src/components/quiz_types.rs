use leptos::prelude::*;

use super::{Region, SectionIntro, TagLabel, TextBlock, TextLevel};
use crate::content::{QUIZ_TYPES_HEADING, QUIZ_TYPES_SUBHEADING, QuizTypeEntry};
use crate::model::Section;

#[component]
pub fn QuizTypes(quiz_types: Vec<QuizTypeEntry>) -> impl IntoView {
    view! {
        <Region section=Section::QuizTypes class="quiz-types">
            <div class="container">
                <SectionIntro title=QUIZ_TYPES_HEADING lead=QUIZ_TYPES_SUBHEADING />
                <div class="quiz-types-grid">
                    {quiz_types
                        .into_iter()
                        .map(|entry| view! { <QuizTypeCard entry=entry /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </Region>
    }
}

#[component]
fn QuizTypeCard(entry: QuizTypeEntry) -> impl IntoView {
    view! {
        <article class="card quiz-type-card" data-role="quiz-type-card">
            <div class="quiz-type-emoji">{entry.emoji}</div>
            <TextBlock level=TextLevel::CardTitle>{entry.title}</TextBlock>
            <TextBlock level=TextLevel::Body>{entry.description}</TextBlock>
            <div class="tag-row">
                {entry
                    .tags
                    .into_iter()
                    .map(|tag| view! { <TagLabel label=tag /> })
                    .collect::<Vec<_>>()}
            </div>
        </article>
    }
}
