//! Special collection registry
//!
//! The one canonical table of curated collections and brand themes. Both the
//! configuration layer and the catalog provider read from here.

/// Metadata for a curated collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub track_count: u32,
    pub primary_theme: &'static str,
}

pub const SPECIAL_COLLECTIONS: [CollectionInfo; 5] = [
    CollectionInfo {
        id: "alley_chronicles",
        name: "Alley Chronicles",
        track_count: 151,
        primary_theme: "Urban Mythology",
    },
    CollectionInfo {
        id: "willow_variations",
        name: "Willow Variations",
        track_count: 47,
        primary_theme: "Nature Mythology",
    },
    CollectionInfo {
        id: "summer_remixes",
        name: "Summer Remixes",
        track_count: 34,
        primary_theme: "Emotional Journey",
    },
    CollectionInfo {
        id: "hero_collections",
        name: "Hero Collections",
        track_count: 30,
        primary_theme: "Hero Mythology",
    },
    CollectionInfo {
        id: "junkyard_symphonies",
        name: "Junkyard Symphonies",
        track_count: 50,
        primary_theme: "Urban Mythology",
    },
];

pub const THEMES: [&str; 5] = [
    "Urban Mythology",
    "Nature Mythology",
    "Emotional Journey",
    "Hero Mythology",
    "Classical Mythology",
];
