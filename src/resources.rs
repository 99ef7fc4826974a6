//! Static learning resources shown under every roadmap.
//!
//! These do not depend on the profile.

use serde::Serialize;

/// A titled group of resource suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceCategory {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

impl ResourceCategory {
    /// Comma-separated item list, as displayed after the title
    pub fn summary(&self) -> String {
        self.items.join(", ")
    }
}

/// The fixed resource listing
pub const RESOURCE_CATEGORIES: [ResourceCategory; 4] = [
    ResourceCategory {
        title: "Free Courses",
        items: &["YouTube", "NPTEL", "Coursera free courses"],
    },
    ResourceCategory {
        title: "Paid Courses",
        items: &["Udemy", "Coursera", "edX"],
    },
    ResourceCategory {
        title: "Practice & Projects",
        items: &["HackerRank", "LeetCode", "GitHub"],
    },
    ResourceCategory {
        title: "Soft Skills & Communication",
        items: &["Toastmasters", "online workshops"],
    },
];
