//! # Messages
//!
//! Sentences returned to the editor: summary fragments, the clarifying prompt,
//! and the fixed error texts of the HTTP surface.

pub const ANALYZED_PREFIX: &str = "I've analyzed your request. ";

pub const LAYOUT_OPTIMIZED: &str =
    "I've optimized the layout for better visual hierarchy and spacing.";
pub const NEWSLETTER_PROMINENT: &str = "I've made the newsletter signup more prominent by increasing its size and moving it to a better position.";
pub const COLORS_SUGGESTED: &str = "I've suggested a more harmonious color palette that improves readability and visual appeal.";
pub const MOBILE_OPTIMIZED: &str =
    "I've optimized the layout for mobile devices with better touch targets and spacing.";
pub const COMPONENTS_REARRANGED: &str =
    "I've rearranged the components for better user flow and engagement.";

pub const CLARIFY: &str = "I understand you'd like to make changes to your layout. Could you be more specific? For example, you could ask me to 'make the blog posts larger', 'change the color scheme', or 'optimize for mobile viewing'.";

// HTTP error pairs: (error, message)
pub const METHOD_NOT_ALLOWED: (&str, &str) =
    ("Method not allowed", "Only POST requests are supported");
pub const MISSING_PROMPT: (&str, &str) = (
    "Missing prompt",
    "Please provide a prompt for the AI to process",
);
pub const INVALID_BODY: (&str, &str) = (
    "Invalid request body",
    "The request body must be a JSON object",
);
pub const INTERNAL_ERROR: (&str, &str) = (
    "Internal server error",
    "An error occurred while processing your request",
);
