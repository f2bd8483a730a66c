//! Built-in fallback content used when a baseline document is unavailable.

use crate::model::about::AboutUsContent;
use crate::model::blog_post::BlogPost;
use crate::model::category::Category;
use crate::model::fact::Fact;

const SEED_FACTS: &[(&str, &str, &str)] = &[
    (
        "1",
        "Honey never spoils. Archaeologists have found pots of honey in ancient Egyptian tombs that are over 3,000 years old and still perfectly good to eat.",
        "Food",
    ),
    (
        "2",
        "A day on Venus is longer than a year on Venus. It takes 243 Earth days to rotate once on its axis, but only 225 Earth days to complete one orbit of the Sun.",
        "Space",
    ),
    (
        "3",
        "The shortest war in history was between Britain and Zanzibar on August 27, 1896. Zanzibar surrendered after 38 minutes.",
        "History",
    ),
    (
        "4",
        "Octopuses have three hearts. Two pump blood through the gills, while the third pumps it through the body.",
        "Animals",
    ),
    (
        "5",
        "The average person will spend six months of their life waiting for red lights to turn green.",
        "Technology",
    ),
    (
        "6",
        "The Great Barrier Reef is the largest living structure on Earth, stretching over 1,400 miles.",
        "Geography",
    ),
    (
        "7",
        "A bolt of lightning is five times hotter than the surface of the sun, reaching temperatures of about 30,000 kelvins.",
        "Science",
    ),
    (
        "15",
        "The first Olympic Games were held in 776 BCE in Olympia, Greece, and featured only one event: a foot race called the 'stade'.",
        "Sports",
    ),
];

const DEFAULT_CATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("science", "Science", "#3B82F6", "blue"),
    ("history", "History", "#8B5CF6", "purple"),
    ("geography", "Geography", "#10B981", "green"),
    ("animals", "Animals", "#F59E0B", "amber"),
    ("space", "Space", "#6366F1", "indigo"),
    ("technology", "Technology", "#EF4444", "red"),
    ("food", "Food", "#F97316", "orange"),
    ("sports", "Sports", "#06B6D4", "cyan"),
];

const SAMPLE_POST_CONTENT: &str = "<p>Imagine a community where your entire world, your home, school, grocery store and even the police station, exists within a single building. Welcome to Whittier, Alaska.</p>\n<h2>The Building That Is a Town</h2>\n<p>Begich Towers, a 14-story concrete block built as military housing, is home to nearly all of Whittier's 272 residents.</p>\n<h2>The Challenges of Isolation</h2>\n<p>The town is reachable by road only through a single-lane tunnel that alternates direction every 30 minutes.</p>";

const DEFAULT_ABOUT_CONTENT: &str = "<h2>Welcome to UselessButInteresting!</h2>\n<p>We share fascinating and unusual facts that might not change your life but will definitely make it more interesting.</p>\n<h3>Join Our Community</h3>\n<p>Explore our collection, submit your own discoveries and tell us what surprised you.</p>";

/// Small hardcoded fact set served when the facts document cannot be loaded.
pub fn seed_facts() -> Vec<Fact> {
    SEED_FACTS
        .iter()
        .map(|(id, text, category)| Fact::with_id(*id, *text, *category))
        .collect()
}

/// The single sample post served when the blog document cannot be loaded.
pub fn sample_blog_post() -> BlogPost {
    BlogPost {
        id: "sample-1".to_string(),
        title: "Whittier, Alaska: The Town Under One Roof".to_string(),
        slug: "whittier-alaska".to_string(),
        content: SAMPLE_POST_CONTENT.to_string(),
        excerpt: "Imagine a community where your entire world exists within the confines of a single building.".to_string(),
        cover_image: Some(
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800&h=400&fit=crop"
                .to_string(),
        ),
        published: true,
        created_at: "2025-05-24T00:00:00.000Z".to_string(),
        updated_at: None,
        tags: None,
        author: None,
    }
}

/// The eight default categories.
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(id, name, color, tone)| Category {
            id: (*id).to_string(),
            name: (*name).to_string(),
            description: format!("{name} facts"),
            color: (*color).to_string(),
            gradient: format!("bg-gradient-to-br from-{tone}-400 to-{tone}-600"),
        })
        .collect()
}

pub fn default_about_us(updated_at: &str) -> AboutUsContent {
    AboutUsContent {
        title: "About UselessButInteresting".to_string(),
        content: DEFAULT_ABOUT_CONTENT.to_string(),
        updated_at: updated_at.to_string(),
    }
}
