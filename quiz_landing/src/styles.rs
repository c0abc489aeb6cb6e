//! CSS styles for the landing page.
//!
//! Inlined into the document head by [`crate::components::LandingDocument`].
//! The stylesheet is written without child combinators or ampersands because
//! SSR text escaping applies inside `<style>`.

/// Complete CSS for the landing page - coral gradient theme.
pub const LANDING_CSS: &str = r#"
:root {
    --coral: #ff6f61;
    --coral-90: rgba(255, 111, 97, 0.9);
    --coral-80: rgba(255, 111, 97, 0.8);
    --white: #ffffff;
    --white-95: rgba(255, 255, 255, 0.95);
    --white-80: rgba(255, 255, 255, 0.8);
    --white-30: rgba(255, 255, 255, 0.3);
    --white-20: rgba(255, 255, 255, 0.2);
    --white-10: rgba(255, 255, 255, 0.1);
    --shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
    --radius-pill: 9999px;
    --radius-panel: 24px;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
    color: var(--white);
    background: linear-gradient(135deg, var(--coral), var(--coral-90), var(--coral-80));
    min-height: 100vh;
}

a { color: inherit; text-decoration: none; }

.container {
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 16px;
}

/* Header */
.page-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 16px 24px;
    background: var(--white-95);
    backdrop-filter: blur(4px);
    box-shadow: var(--shadow);
}

.brand-logo { display: block; }
.brand-logo-img { height: 48px; width: auto; }
.brand-logo-inset { margin-left: 64px; }
.user-menu { color: var(--coral); }

/* Typography */
.text-display {
    font-size: 4.5rem;
    font-weight: 700;
    letter-spacing: -0.02em;
    line-height: 1.1;
    margin: 0 0 24px;
}
.text-subtitle {
    font-size: 1.875rem;
    font-weight: 300;
    color: var(--white-80);
    margin: 0 0 32px;
}
.text-section-title { font-size: 2.25rem; font-weight: 700; margin: 0 0 16px; }
.text-card-title { font-size: 1.5rem; font-weight: 600; margin: 0 0 12px; }
.text-lead { font-size: 1.25rem; color: var(--white-80); max-width: 42rem; margin: 0 auto 32px; }
.text-body { color: var(--white-80); margin: 0; }

/* Primitives */
.tag-label {
    display: inline-block;
    padding: 4px 12px;
    border-radius: var(--radius-pill);
    border: 1px solid var(--white-30);
    background: var(--white-20);
    font-size: 0.875rem;
}

.action-row { display: flex; flex-wrap: wrap; gap: 16px; }
.action-row-centered { justify-content: center; }

.action-link {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 16px 32px;
    border-radius: var(--radius-pill);
    font-size: 1.125rem;
    transition: all 0.3s ease;
}
.action-link-primary {
    background: var(--white);
    color: var(--coral);
    box-shadow: var(--shadow);
}
.action-link-primary:hover { transform: translateY(-4px); }
.action-link-secondary {
    border: 2px solid var(--white);
    color: var(--white);
}
.action-link-secondary:hover { background: var(--white); color: var(--coral); }

.card {
    background: var(--white-10);
    border: 1px solid var(--white-20);
    border-radius: 16px;
    backdrop-filter: blur(4px);
    text-align: center;
    transition: all 0.3s ease;
}
.card:hover { background: var(--white-20); }

/* Hero */
.hero { padding: 96px 0 64px; }
.hero-grid {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 48px;
}
.hero-content { flex: 1 1 480px; }
.hero-badge { margin-bottom: 24px; }
.hero-description { font-size: 1.125rem; max-width: 32rem; margin-bottom: 40px; }
.hero-media { flex: 1 1 420px; position: relative; display: flex; justify-content: center; }
.hero-glow {
    position: absolute;
    inset: 0;
    background: var(--white-20);
    border-radius: var(--radius-panel);
    filter: blur(64px);
    transform: rotate(6deg);
}
.hero-image {
    position: relative;
    width: 100%;
    max-width: 32rem;
    border-radius: var(--radius-panel);
    box-shadow: var(--shadow);
}

/* Sections */
.features, .steps, .quiz-types { padding: 0 0 80px; }
.section-intro { text-align: center; margin-bottom: 64px; }

.features-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 32px;
}
.feature-card { padding: 24px; }
.feature-card:hover { transform: translateY(-8px); }
.feature-icon { display: flex; justify-content: center; margin-bottom: 16px; }

.steps-grid {
    list-style: none;
    padding: 0;
    margin: 0;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 32px;
}
.step { position: relative; text-align: center; }
.step-connector {
    position: absolute;
    top: 48px;
    left: 100%;
    width: 100%;
    height: 2px;
    background: var(--white-30);
    transform: translateX(-50%);
    z-index: 0;
}
.step-body { position: relative; z-index: 1; }
.step-number {
    width: 96px;
    height: 96px;
    margin: 0 auto 24px;
    border-radius: 50%;
    background: var(--white);
    color: var(--coral);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.875rem;
    font-weight: 700;
    box-shadow: var(--shadow);
}

.quiz-types-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 32px;
}
.quiz-type-card { padding: 32px; }
.quiz-type-emoji { font-size: 3.75rem; margin-bottom: 16px; }
.tag-row { display: flex; flex-wrap: wrap; gap: 8px; justify-content: center; margin-top: 24px; }

/* Call to action */
.cta { padding-bottom: 64px; }
.cta-panel {
    text-align: center;
    padding: 48px;
    border-radius: var(--radius-panel);
    border: 1px solid var(--white-20);
    background: var(--white-10);
    backdrop-filter: blur(4px);
}

@media (max-width: 768px) {
    .text-display { font-size: 3rem; }
    .text-subtitle { font-size: 1.25rem; }
    .brand-logo-inset { margin-left: 0; }
    .steps-grid { grid-template-columns: 1fr; }
    .step-connector { display: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_survives_text_escaping() {
        assert!(!LANDING_CSS.contains('>'));
        assert!(!LANDING_CSS.contains('<'));
        assert!(!LANDING_CSS.contains('&'));
    }
}
