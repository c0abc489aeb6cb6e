//! Static marketing content for the landing page.
//!
//! Everything here is authored copy. Order inside each array is the display
//! order; nothing sorts or filters it.

use serde::Serialize;

/// Brand name shown in the hero and section copy.
pub const BRAND_NAME: &str = "newquiz.online";

/// Logo image, used verbatim.
pub const LOGO_URL: &str = "https://i.postimg.cc/pXxdtDJz/quiz-online-logo.png";
/// Default alt text for the logo.
pub const LOGO_ALT: &str = "Quiz Online Logo";

/// Hero illustration, used verbatim.
pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=600&q=80";
pub const HERO_IMAGE_ALT: &str = "Interactive Learning";

pub const HERO_BADGE: &str = "🎉 Welcome to the Future of Quizzing";
pub const HERO_SUBTITLE: &str = "Create, Share & Play Interactive Quizzes";
pub const HERO_DESCRIPTION: &str = "Transform learning and engagement with our powerful quiz \
     platform. Perfect for educators, trainers, and anyone who loves interactive content.";
pub const HERO_PRIMARY_LABEL: &str = "Get Started Free";
pub const HERO_JOIN_LABEL: &str = "Join a Quiz";

pub const FEATURES_HEADING: &str = "Why Choose newquiz.online?";
pub const FEATURES_SUBHEADING: &str =
    "Discover the features that make our platform the perfect choice for interactive learning";

pub const STEPS_HEADING: &str = "How It Works";
pub const STEPS_SUBHEADING: &str = "Get started with newquiz.online in just three simple steps";

pub const QUIZ_TYPES_HEADING: &str = "Quiz Types";
pub const QUIZ_TYPES_SUBHEADING: &str = "Choose from different quiz formats to match your needs";

pub const CTA_HEADING: &str = "Ready to Get Started?";
pub const CTA_DESCRIPTION: &str = "Join thousands of educators, trainers, and quiz enthusiasts \
     who are already using newquiz.online";
pub const CTA_PRIMARY_LABEL: &str = "Start Creating Quizzes";
pub const CTA_JOIN_LABEL: &str = "Join a Quiz Now";

/// Symbolic icon reference. Hosts decide how to draw it; the SSR renderer
/// uses [`Glyph::svg_path`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    PlayCircle,
    Users,
    Trophy,
    Zap,
    ArrowRight,
}

impl Glyph {
    /// SVG path data on a 256x256 view box.
    pub const fn svg_path(self) -> &'static str {
        match self {
            Glyph::PlayCircle => ICON_PLAY_CIRCLE,
            Glyph::Users => ICON_USERS,
            Glyph::Trophy => ICON_TROPHY,
            Glyph::Zap => ICON_LIGHTNING,
            Glyph::ArrowRight => ICON_ARROW_RIGHT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureEntry {
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StepEntry {
    /// Display label, "1" through "3"
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuizTypeEntry {
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: [&'static str; 2],
}

pub const FEATURES: [FeatureEntry; 4] = [
    FeatureEntry {
        glyph: Glyph::PlayCircle,
        title: "Interactive Quizzes",
        description: "Create engaging quizzes with multiple question types and real-time feedback",
    },
    FeatureEntry {
        glyph: Glyph::Users,
        title: "Multiplayer Fun",
        description: "Host live quiz sessions with friends, colleagues, or students",
    },
    FeatureEntry {
        glyph: Glyph::Trophy,
        title: "Leaderboards",
        description: "Track performance with dynamic leaderboards and scoring systems",
    },
    FeatureEntry {
        glyph: Glyph::Zap,
        title: "Instant Results",
        description: "Get immediate feedback and detailed analytics for every quiz",
    },
];

pub const STEPS: [StepEntry; 3] = [
    StepEntry {
        number: "1",
        title: "Create Account",
        description: "Sign up for free and get started in seconds",
    },
    StepEntry {
        number: "2",
        title: "Build Your Quiz",
        description: "Use our intuitive editor to create engaging questions",
    },
    StepEntry {
        number: "3",
        title: "Share & Play",
        description: "Invite participants and start your interactive quiz session",
    },
];

pub const QUIZ_TYPES: [QuizTypeEntry; 3] = [
    QuizTypeEntry {
        emoji: "🎯",
        title: "Live Quiz",
        description: "Real-time multiplayer quizzes with instant feedback and live leaderboards",
        tags: ["Real-time", "Multiplayer"],
    },
    QuizTypeEntry {
        emoji: "📊",
        title: "Poll Quiz",
        description: "Quick polls and surveys to gather opinions and feedback from your audience",
        tags: ["Surveys", "Feedback"],
    },
    QuizTypeEntry {
        emoji: "⏰",
        title: "Anytime Quiz",
        description: "Self-paced quizzes that participants can take at their own convenience",
        tags: ["Self-paced", "Flexible"],
    },
];

// =============================================================================
// Phosphor Icons (Regular weight) - https://phosphoricons.com/
// =============================================================================

const ICON_PLAY_CIRCLE: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm0,192a88,88,0,1,1,88-88A88.1,88.1,0,0,1,128,216Zm48.24-94.78-64-40A8,8,0,0,0,100,88v80a8,8,0,0,0,12.24,6.78l64-40a8,8,0,0,0,0-13.56ZM116,153.57V102.43L156.91,128Z";

const ICON_USERS: &str = "M117.25,157.92a60,60,0,1,0-66.5,0A95.83,95.83,0,0,0,3.53,195.63a8,8,0,1,0,13.4,8.74,80,80,0,0,1,134.14,0,8,8,0,0,0,13.4-8.74A95.83,95.83,0,0,0,117.25,157.92ZM40,108a44,44,0,1,1,44,44A44.05,44.05,0,0,1,40,108Zm210.14,98.7a8,8,0,0,1-11.07-2.33A79.83,79.83,0,0,0,172,168a8,8,0,0,1,0-16,44,44,0,1,0-16.34-84.87,8,8,0,1,1-5.94-14.85,60,60,0,0,1,55.53,105.64,95.83,95.83,0,0,1,47.22,37.71A8,8,0,0,1,250.14,206.7Z";

const ICON_TROPHY: &str = "M232,64H208V48a8,8,0,0,0-8-8H56a8,8,0,0,0-8,8V64H24A16,16,0,0,0,8,80V96a40,40,0,0,0,40,40h3.65A80.13,80.13,0,0,0,120,191.61V216H96a8,8,0,0,0,0,16h64a8,8,0,0,0,0-16H136V191.58c31.94-3.23,58.44-25.64,68.08-55.58H208a40,40,0,0,0,40-40V80A16,16,0,0,0,232,64ZM48,120A24,24,0,0,1,24,96V80H48v32q0,4,.39,8Zm144-8.9c0,35.52-28.49,64.64-63.51,64.9H128a64,64,0,0,1-64-64V56H192ZM232,96a24,24,0,0,1-24,24h-.5a81.81,81.81,0,0,0,.5-8.9V80h24Z";

const ICON_LIGHTNING: &str = "M215.79,118.17a8,8,0,0,0-5-5.66L153.18,90.9l14.66-73.33a8,8,0,0,0-13.69-7L37.71,143.17A8,8,0,0,0,44.22,156l57.6,11.52L87.16,240.83A8,8,0,0,0,95,248a7.72,7.72,0,0,0,1.57-.16l116.67-46.67a8,8,0,0,0,2.55-14.5ZM96.82,224,116,128a8,8,0,0,0-6.51-9.54L52.22,107,159.18,32,140,128a8,8,0,0,0,6.51,9.54l57.27,11.45Z";

const ICON_ARROW_RIGHT: &str = "M221.66,133.66l-72,72a8,8,0,0,1-11.32-11.32L196.69,136H40a8,8,0,0,1,0-16H196.69L138.34,61.66a8,8,0,0,1,11.32-11.32l72,72A8,8,0,0,1,221.66,133.66Z";
