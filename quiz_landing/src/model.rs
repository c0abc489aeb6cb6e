//! Host-neutral description of one rendered landing page.
//!
//! [`LandingModel`] is what the page *is* before any markup exists: the
//! resolved link targets, the ordered content lists and the section order.
//! The Leptos components in [`crate::components`] draw it as HTML; the server
//! also exposes it as JSON.

use serde::Serialize;

use crate::content::{FEATURES, FeatureEntry, QUIZ_TYPES, QuizTypeEntry, STEPS, StepEntry};
use crate::routes::CtaTargets;
use crate::session::SessionState;

/// Page regions with stable semantic roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Section {
    Header,
    Hero,
    FeatureGrid,
    Steps,
    QuizTypes,
    CallToAction,
}

impl Section {
    /// Render order, top to bottom.
    pub const ORDER: [Section; 6] = [
        Section::Header,
        Section::Hero,
        Section::FeatureGrid,
        Section::Steps,
        Section::QuizTypes,
        Section::CallToAction,
    ];

    /// Role name emitted as `data-section` on the region.
    pub const fn role(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Hero => "hero",
            Section::FeatureGrid => "feature-grid",
            Section::Steps => "steps",
            Section::QuizTypes => "quiz-types",
            Section::CallToAction => "call-to-action",
        }
    }
}

impl From<Section> for &'static str {
    fn from(section: Section) -> Self {
        section.role()
    }
}

/// A step plus whether a connector is drawn after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StepSlot {
    #[serde(flatten)]
    pub step: StepEntry,
    pub connector_after: bool,
}

/// Everything one render pass needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LandingModel {
    pub session: SessionState,
    pub cta: CtaTargets,
    pub sections: Vec<Section>,
    pub features: Vec<FeatureEntry>,
    pub steps: Vec<StepSlot>,
    pub quiz_types: Vec<QuizTypeEntry>,
}

impl LandingModel {
    /// Build the model for a session. The flag is consulted once, here.
    pub fn build(session: SessionState) -> Self {
        let cta = CtaTargets::for_session(session);
        let last = STEPS.len().saturating_sub(1);
        let steps = STEPS
            .iter()
            .enumerate()
            .map(|(idx, step)| StepSlot {
                step: *step,
                connector_after: idx < last,
            })
            .collect();

        tracing::debug!(?session, primary = %cta.primary, "landing model built");

        Self {
            session,
            cta,
            sections: Section::ORDER.to_vec(),
            features: FEATURES.to_vec(),
            steps,
            quiz_types: QUIZ_TYPES.to_vec(),
        }
    }
}

impl Default for LandingModel {
    fn default() -> Self {
        Self::build(SessionState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;
    use pretty_assertions::assert_eq;

    #[test]
    fn authenticated_model_points_at_create() {
        let model = LandingModel::build(SessionState::Authenticated);
        assert_eq!(model.cta.primary, Route::Create);
        assert_eq!(model.cta.join, Route::Join);
    }

    #[test]
    fn anonymous_model_points_at_signup() {
        let model = LandingModel::build(SessionState::Anonymous);
        assert_eq!(model.cta.primary, Route::Signup);
        assert_eq!(model.cta.join, Route::Join);
    }

    #[test]
    fn default_model_is_anonymous() {
        assert_eq!(LandingModel::default(), LandingModel::build(SessionState::Anonymous));
    }

    #[test]
    fn connector_skips_last_step() {
        let model = LandingModel::default();
        let connectors: Vec<_> = model.steps.iter().map(|s| s.connector_after).collect();
        assert_eq!(connectors, vec![true, true, false]);
    }

    #[test]
    fn counts_are_fixed() {
        let model = LandingModel::default();
        assert_eq!(model.features.len(), 4);
        assert_eq!(model.steps.len(), 3);
        assert_eq!(model.quiz_types.len(), 3);
    }

    #[test]
    fn section_roles_in_order() {
        let roles: Vec<_> = LandingModel::default()
            .sections
            .iter()
            .map(|s| s.role())
            .collect();
        assert_eq!(
            roles,
            vec!["header", "hero", "feature-grid", "steps", "quiz-types", "call-to-action"]
        );
    }

    #[test]
    fn json_shape() {
        let value = serde_json::to_value(LandingModel::build(SessionState::Authenticated)).unwrap();
        assert_eq!(value["session"], "authenticated");
        assert_eq!(value["cta"]["primary"], "/create");
        assert_eq!(value["steps"][0]["number"], "1");
        assert_eq!(value["steps"][2]["connector_after"], false);
        assert_eq!(value["features"][3]["glyph"], "zap");
        assert_eq!(value["sections"][2], "feature-grid");
    }
}
