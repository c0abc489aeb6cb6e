//! Leptos UI components for rendering the landing page.
//!
//! Every region is a `#[component]` function drawing one slice of a
//! [`crate::model::LandingModel`]. Regions are built only from the display
//! primitives in [`primitives`].
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! └── LandingPage
//!     ├── PageHeader      (BrandLogo + host user menu)
//!     ├── Hero            (primary CTA, join link)
//!     ├── FeatureGrid     (4 x FeatureCard)
//!     ├── HowItWorks      (3 x StepItem, connectors between)
//!     ├── QuizTypes       (3 x QuizTypeCard with tag pairs)
//!     └── CallToAction    (primary CTA, join link)
//! ```

mod cta;
mod document;
mod features;
mod header;
mod hero;
mod intro;
mod logo;
mod page;
mod primitives;
mod quiz_types;
mod steps;

pub use cta::CallToAction;
pub use document::LandingDocument;
pub use features::FeatureGrid;
pub use header::PageHeader;
pub use hero::Hero;
pub use intro::SectionIntro;
pub use logo::{BrandLogo, LogoConfig};
pub use page::LandingPage;
pub use primitives::{ActionLink, GlyphIcon, LinkVariant, Region, TagLabel, TextBlock, TextLevel};
pub use quiz_types::QuizTypes;
pub use steps::HowItWorks;
