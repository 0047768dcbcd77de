//! Fixed enumerations consumed by the filter engine.
//!
//! These tables are static configuration. None of them is fetched from the
//! data service.

use std::ops::RangeInclusive;

/// A region of the catalog, identified by an inclusive id range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Filter key (matches the service's pokedex naming).
    pub key: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// First id in the region.
    pub min_id: u32,
    /// Last id in the region (inclusive).
    pub max_id: u32,
}

impl Region {
    const fn new(key: &'static str, name: &'static str, min_id: u32, max_id: u32) -> Self {
        Self {
            key,
            name,
            min_id,
            max_id,
        }
    }

    /// Inclusive id range covered by this region.
    #[must_use]
    pub const fn id_range(&self) -> RangeInclusive<u32> {
        self.min_id..=self.max_id
    }

    /// Whether `id` falls inside this region.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.id_range().contains(&id)
    }
}

/// Region table, in catalog order.
pub const REGIONS: &[Region] = &[
    Region::new("kanto", "Kanto", 1, 151),
    Region::new("original-johto", "Johto", 152, 251),
    Region::new("hoenn", "Hoenn", 252, 386),
    Region::new("original-sinnoh", "Sinnoh", 387, 493),
    Region::new("original-unova", "Unova", 494, 649),
    Region::new("kalos-central", "Kalos", 650, 721),
    Region::new("original-alola", "Alola", 722, 809),
    Region::new("galar", "Galar", 810, 905),
    Region::new("paldea", "Paldea", 906, 1025),
];

/// Valid type filter keys.
pub const TYPES: &[&str] = &[
    "normal", "fire", "water", "grass", "electric", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "steel", "dark", "fairy", "stellar",
];

/// Valid habitat filter keys.
pub const HABITATS: &[&str] = &[
    "cave",
    "forest",
    "grassland",
    "mountain",
    "rare",
    "rough-terrain",
    "sea",
    "urban",
    "waters-edge",
];

/// Ids flagged as legendary or mythical.
///
/// Kept sorted so membership is a binary search.
pub const LEGENDARY_IDS: &[u32] = &[
    // Gen 1
    144, 145, 146, 150, 151,
    // Gen 2
    243, 244, 245, 249, 250, 251,
    // Gen 3
    377, 378, 379, 380, 381, 382, 383, 384, 385, 386,
    // Gen 4
    480, 481, 482, 483, 484, 485, 486, 487, 488, 489, 490, 491, 492, 493, 494,
    // Gen 5
    638, 639, 640, 641, 642, 643, 644, 645, 646, 647, 648, 649,
    // Gen 6
    716, 717, 718, 719, 720, 721,
    // Gen 7
    772, 773, 785, 786, 787, 788, 789, 790, 791, 792, 793, 794, 795, 796, 797, 798, 799, 800,
    801, 802, 803, 804, 805, 806, 807, 808, 809,
    // Gen 8
    888, 889, 890, 891, 892, 893, 894, 895, 896, 897, 898, 905,
    // Gen 9
    1001, 1002, 1003, 1004, 1005, 1006, 1007, 1008, 1009, 1010, 1014, 1015, 1016, 1017, 1024,
    1025,
];

/// Whether `id` is on the legendary allowlist.
#[must_use]
pub fn is_legendary(id: u32) -> bool {
    LEGENDARY_IDS.binary_search(&id).is_ok()
}

/// Looks up a region by its filter key.
#[must_use]
pub fn find_region(key: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|region| region.key == key)
}

/// Whether `key` is a known type filter key.
#[must_use]
pub fn is_known_type(key: &str) -> bool {
    TYPES.contains(&key)
}

/// Whether `key` is a known habitat filter key.
#[must_use]
pub fn is_known_habitat(key: &str) -> bool {
    HABITATS.contains(&key)
}
