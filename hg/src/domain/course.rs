//! Built-in Oboe course curriculum
//!
//! Every course page uses the same sections and topics; only the title,
//! subtitle, description and image come from the user.

use super::data::{ActivityItem, ActivitySection, ActivityType};

pub const DEFAULT_COURSE_TITLE: &str = "Finding Your Ideal Trousers";

pub const DEFAULT_COURSE_SUBTITLE: &str = "for Every Occasion";

pub const DEFAULT_COURSE_DESCRIPTION: &str = "This course explores the principles of selecting pants that flatter your body type, suit different occasions, and reflect your personal style.";

/// Default activity sections, in display order
pub fn default_activity_sections() -> Vec<ActivitySection> {
    vec![
        ActivitySection {
            section_title: "Learn".to_string(),
            section_description: "Start picking perfect pants that fit your style and needs.".to_string(),
            activities: vec![
                ActivityItem::new(
                    "Deep Dive",
                    "Comprehensive guide to trouser selection",
                    "10 min read",
                    ActivityType::Text,
                    "🎯",
                )
                .with_sidebar("deep-dive"),
                ActivityItem::new(
                    "Podcast Episode",
                    "Audio guide to pants fitting",
                    "10 min listen",
                    ActivityType::Audio,
                    "🎧",
                ),
                ActivityItem::new(
                    "Key Takeaways",
                    "Summary of important points",
                    "2 min read",
                    ActivityType::Text,
                    "📝",
                )
                .with_sidebar("key-takeaways"),
                ActivityItem::new(
                    "Lecture Recording",
                    "Video lecture on trouser selection",
                    "15 min listen",
                    ActivityType::Video,
                    "🎥",
                ),
            ],
        },
        ActivitySection {
            section_title: "Study".to_string(),
            section_description: "Sharpen your outfit choices by rehearsing pant selection skills.".to_string(),
            activities: vec![
                ActivityItem::new(
                    "Frequently Asked Questions",
                    "Common questions about pants",
                    "3 min read",
                    ActivityType::Text,
                    "❓",
                ),
                ActivityItem::new(
                    "Flashcards",
                    "Memory cards for key concepts",
                    "5 min drill",
                    ActivityType::Text,
                    "📚",
                ),
                ActivityItem::new(
                    "Word Quest",
                    "Interactive vocabulary game",
                    "5 min play",
                    ActivityType::Text,
                    "🔤",
                ),
            ],
        },
        ActivitySection {
            section_title: "Quiz".to_string(),
            section_description: "Test your knowledge on selecting pants for any occasion.".to_string(),
            activities: vec![
                ActivityItem::new(
                    "Multiple Choice",
                    "Multiple choice quiz",
                    "7 min quiz",
                    ActivityType::Text,
                    "🔢",
                ),
                ActivityItem::new("True or False", "True/false questions", "5 min quiz", ActivityType::Text, "✅"),
            ],
        },
    ]
}

/// Default related-topic list, in display order
pub fn default_topic_list() -> Vec<String> {
    [
        "Why do trousers fit differently across brands and styles?",
        "Designing Trousers for Performance and Comfort",
        "How do fabric choices impact trouser drape and longevity?",
        "Creating Timeless Trouser Silhouettes for Any Wardrobe",
        "What historical shifts shaped modern trouser design?",
        "Mastering Trouser Alterations for a Perfect Fit",
        "How do cultural contexts influence trouser fashion?",
        "Exploring Sustainable Practices in Trouser Manufacturing",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
