//! Local lookup tables for the step 1 pick lists.
//!
//! Categories and event summaries depend on the level. There is no backend
//! for these; the lists ship with the client.

use crate::value_objects::WizardLevel;

const BEGINNER_CATEGORIES: &[&str] = &[
    "Sports",
    "Science",
    "History",
    "Art",
    "Nature",
    "Technology",
    "Animals",
    "Space",
];

const INTERMEDIATE_CATEGORIES: &[&str] = &[
    "Sports",
    "Science",
    "History",
    "Art",
    "Nature",
    "Technology",
    "Culture",
    "Environment",
];

const ADVANCED_CATEGORIES: &[&str] = &[
    "Sports",
    "Science",
    "History",
    "Art",
    "Nature",
    "Technology",
    "Politics",
    "Economics",
];

/// Categories offered for a level, in display order.
pub fn categories(level: WizardLevel) -> &'static [&'static str] {
    match level {
        WizardLevel::Beginner => BEGINNER_CATEGORIES,
        WizardLevel::Intermediate => INTERMEDIATE_CATEGORIES,
        WizardLevel::Advanced => ADVANCED_CATEGORIES,
    }
}

/// Event summaries for a level and category. Unknown categories yield an
/// empty list.
pub fn event_summaries(level: WizardLevel, category: &str) -> &'static [&'static str] {
    match level {
        WizardLevel::Beginner => beginner_summaries(category),
        WizardLevel::Intermediate => intermediate_summaries(category),
        WizardLevel::Advanced => advanced_summaries(category),
    }
}

pub fn is_known_category(level: WizardLevel, category: &str) -> bool {
    categories(level).contains(&category)
}

fn beginner_summaries(category: &str) -> &'static [&'static str] {
    match category {
        "Sports" => &["Fun Game", "Great Win", "Nice Play", "Happy Match", "Good Team"],
        "Science" => &[
            "Cool Discovery",
            "Fun Experiment",
            "New Finding",
            "Big News",
            "Amazing Fact",
        ],
        "History" => &["Old Story", "Past Event", "Long Ago", "Old Time", "History Day"],
        "Art" => &[
            "Beautiful Picture",
            "Nice Drawing",
            "Fun Art",
            "Colorful Work",
            "Creative Show",
        ],
        "Nature" => &[
            "Pretty Flower",
            "Big Tree",
            "Cute Animal",
            "Beautiful Sky",
            "Nature Walk",
        ],
        "Technology" => &["New Phone", "Cool Robot", "Fun App", "Smart Device", "Tech News"],
        "Animals" => &[
            "Cute Pet",
            "Wild Animal",
            "Baby Animal",
            "Animal Friend",
            "Pet Story",
        ],
        "Space" => &["Big Star", "Moon Trip", "Space Ship", "Planet News", "Star Story"],
        _ => &[],
    }
}

fn intermediate_summaries(category: &str) -> &'static [&'static str] {
    match category {
        "Sports" => &[
            "Exciting Match",
            "Amazing Victory",
            "Great Competition",
            "Wonderful Performance",
            "Memorable Game",
            "Outstanding Achievement",
            "Historic Moment",
        ],
        "Science" => &[
            "Exciting Discovery",
            "Amazing Breakthrough",
            "Wonderful Experiment",
            "Great Innovation",
            "Important Research",
            "Special Finding",
            "Memorable Achievement",
        ],
        "History" => &[
            "Important Event",
            "Historic Moment",
            "Memorable Day",
            "Significant Discovery",
            "Great Achievement",
            "Special Occasion",
            "Remarkable Story",
        ],
        "Art" => &[
            "Beautiful Exhibition",
            "Amazing Performance",
            "Wonderful Creation",
            "Great Show",
            "Special Event",
            "Memorable Display",
            "Outstanding Work",
        ],
        "Nature" => &[
            "Amazing Discovery",
            "Wonderful Sight",
            "Great Observation",
            "Special Moment",
            "Beautiful Scene",
            "Memorable Experience",
            "Remarkable Finding",
        ],
        "Technology" => &[
            "Exciting Innovation",
            "Amazing Development",
            "Great Invention",
            "Important Breakthrough",
            "Special Creation",
            "Memorable Achievement",
            "Outstanding Progress",
        ],
        "Culture" => &[
            "Beautiful Festival",
            "Amazing Celebration",
            "Wonderful Tradition",
            "Great Event",
            "Special Occasion",
            "Memorable Experience",
            "Remarkable Gathering",
        ],
        "Environment" => &[
            "Important Discovery",
            "Amazing Finding",
            "Wonderful Observation",
            "Great Achievement",
            "Special Moment",
            "Memorable Event",
            "Remarkable Progress",
        ],
        _ => &[],
    }
}

fn advanced_summaries(category: &str) -> &'static [&'static str] {
    match category {
        "Sports" => &[
            "Championship Victory",
            "Record-Breaking Performance",
            "International Competition",
            "Professional Achievement",
            "Elite Tournament",
            "Prestigious Award",
            "Historic Championship",
            "World-Class Event",
        ],
        "Science" => &[
            "Groundbreaking Discovery",
            "Revolutionary Breakthrough",
            "Advanced Research",
            "Innovative Technology",
            "Scientific Achievement",
            "Research Publication",
            "Academic Excellence",
            "Laboratory Success",
        ],
        "History" => &[
            "Historical Significance",
            "Cultural Heritage",
            "Archaeological Discovery",
            "Historical Documentation",
            "Preservation Effort",
            "Historical Analysis",
            "Cultural Impact",
            "Historical Research",
        ],
        "Art" => &[
            "Prestigious Exhibition",
            "Artistic Masterpiece",
            "Cultural Performance",
            "Artistic Innovation",
            "Gallery Opening",
            "Artistic Recognition",
            "Cultural Contribution",
            "Artistic Excellence",
        ],
        "Nature" => &[
            "Environmental Research",
            "Conservation Effort",
            "Ecological Discovery",
            "Wildlife Protection",
            "Natural Phenomenon",
            "Environmental Impact",
            "Conservation Success",
            "Ecological Study",
        ],
        "Technology" => &[
            "Technological Innovation",
            "Digital Transformation",
            "Advanced Development",
            "Tech Industry News",
            "Innovation Award",
            "Technology Breakthrough",
            "Digital Revolution",
            "Tech Advancement",
        ],
        "Politics" => &[
            "Policy Decision",
            "Political Development",
            "Government Initiative",
            "Legislative Action",
            "Political Reform",
            "Policy Implementation",
            "Political Analysis",
            "Government Policy",
        ],
        "Economics" => &[
            "Economic Growth",
            "Market Analysis",
            "Financial Development",
            "Economic Policy",
            "Business Expansion",
            "Economic Indicator",
            "Financial Market",
            "Economic Trend",
        ],
        _ => &[],
    }
}
