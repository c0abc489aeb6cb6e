//! Display primitives the landing page is built from.
//!
//! Sections only ever use these (plus plain layout `div`s), so swapping the
//! widget look means touching this file and the stylesheet, nothing else.

use leptos::prelude::*;

use crate::content::Glyph;
use crate::model::Section;
use crate::routes::Route;

/// Top-level page region carrying a semantic role.
///
/// The header renders as `<header>`, everything else as `<section>`.
#[component]
pub fn Region(
    section: Section,
    /// Extra CSS class names
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let role = section.role();
    match section {
        Section::Header => view! {
            <header class=class data-section=role>
                {children()}
            </header>
        }
        .into_any(),
        _ => view! {
            <section id=role class=class data-section=role>
                {children()}
            </section>
        }
        .into_any(),
    }
}

/// Typographic level of a [`TextBlock`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextLevel {
    /// Page title
    Display,
    /// Hero strapline
    Subtitle,
    /// Section heading
    SectionTitle,
    /// Card or step heading
    CardTitle,
    /// Section intro paragraph
    Lead,
    Body,
}

impl TextLevel {
    const fn class(self) -> &'static str {
        match self {
            TextLevel::Display => "text-display",
            TextLevel::Subtitle => "text-subtitle",
            TextLevel::SectionTitle => "text-section-title",
            TextLevel::CardTitle => "text-card-title",
            TextLevel::Lead => "text-lead",
            TextLevel::Body => "text-body",
        }
    }
}

#[component]
pub fn TextBlock(
    level: TextLevel,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = join_classes(level.class(), class);
    match level {
        TextLevel::Display => view! { <h1 class=class>{children()}</h1> }.into_any(),
        TextLevel::Subtitle => view! { <h2 class=class>{children()}</h2> }.into_any(),
        TextLevel::SectionTitle => view! { <h3 class=class>{children()}</h3> }.into_any(),
        TextLevel::CardTitle => view! { <h4 class=class>{children()}</h4> }.into_any(),
        TextLevel::Lead | TextLevel::Body => view! { <p class=class>{children()}</p> }.into_any(),
    }
}

/// Visual weight of an [`ActionLink`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkVariant {
    /// Filled button
    #[default]
    Primary,
    /// Outlined button
    Secondary,
}

impl LinkVariant {
    const fn class(self) -> &'static str {
        match self {
            LinkVariant::Primary => "action-link action-link-primary",
            LinkVariant::Secondary => "action-link action-link-secondary",
        }
    }
}

/// Button-styled navigation link.
///
/// `cta` names the call-site (`hero-primary`, `cta-join`, ...) and is emitted
/// as `data-cta` so hosts and tests can find a specific link.
#[component]
pub fn ActionLink(
    to: Route,
    #[prop(optional)] variant: LinkVariant,
    #[prop(optional)] cta: &'static str,
    children: Children,
) -> impl IntoView {
    let cta = (!cta.is_empty()).then_some(cta);
    view! {
        <a href=to.path() class=variant.class() data-cta=cta>
            {children()}
        </a>
    }
}

/// Small pill label.
#[component]
pub fn TagLabel(label: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <span class=join_classes("tag-label", class) data-role="tag">
            {label}
        </span>
    }
}

/// Inline SVG for a [`Glyph`].
#[component]
pub fn GlyphIcon(
    glyph: Glyph,
    /// Icon size in pixels
    #[prop(default = "32")]
    size: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=join_classes("glyph", class)
            aria-hidden="true"
        >
            <path d=glyph.svg_path()></path>
        </svg>
    }
}

fn join_classes(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn join_classes_skips_empty_extra() {
        assert_eq!(join_classes("a", ""), "a");
        assert_eq!(join_classes("a", "b c"), "a b c");
    }

    #[test]
    fn action_link_emits_route_path() {
        let html = view! { <ActionLink to=Route::Join cta="probe">"Go"</ActionLink> }.to_html();
        assert!(html.contains(r#"href="/join""#));
        assert!(html.contains(r#"data-cta="probe""#));
        assert!(html.contains("action-link-primary"));
    }

    #[test]
    fn action_link_without_cta_has_no_marker() {
        let html = view! {
            <ActionLink to=Route::Root variant=LinkVariant::Secondary>"Home"</ActionLink>
        }
        .to_html();
        assert!(!html.contains("data-cta"));
        assert!(html.contains("action-link-secondary"));
    }

    #[test]
    fn text_levels_pick_tags() {
        let h1 = view! { <TextBlock level=TextLevel::Display>"x"</TextBlock> }.to_html();
        let h2 = view! { <TextBlock level=TextLevel::Subtitle>"x"</TextBlock> }.to_html();
        let h3 = view! { <TextBlock level=TextLevel::SectionTitle>"x"</TextBlock> }.to_html();
        let h4 = view! { <TextBlock level=TextLevel::CardTitle>"x"</TextBlock> }.to_html();
        let body = view! { <TextBlock level=TextLevel::Body>"x"</TextBlock> }.to_html();
        let p = view! { <TextBlock level=TextLevel::Lead class="intro">"x"</TextBlock> }.to_html();
        assert!(h1.contains("<h1"));
        assert!(h2.contains("<h2") && h2.contains("text-subtitle"));
        assert!(h3.contains("<h3") && h3.contains("text-section-title"));
        assert!(h4.contains("<h4"));
        assert!(body.contains("<p") && body.contains("text-body"));
        assert!(p.contains("<p") && !p.contains("<h"));
        assert!(p.contains("text-lead intro"));
    }

    #[test]
    fn header_region_uses_header_tag() {
        let html = view! { <Region section=Section::Header>"x"</Region> }.to_html();
        assert!(html.contains("<header"));
        assert!(html.contains(r#"data-section="header""#));

        let html = view! { <Region section=Section::Steps>"x"</Region> }.to_html();
        assert!(html.contains("<section"));
        assert!(html.contains(r#"id="steps""#));
    }
}
