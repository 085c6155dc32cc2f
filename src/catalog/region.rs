use strum::{Display, EnumIter, EnumString};

/// Coarse geographic grouping of production countries.
///
/// Variants are declared alphabetically so the derived ordering matches the order in which
/// regions are listed to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString)]
pub enum Region {
    Asia,
    Europe,
    #[strum(serialize = "North America")]
    NorthAmerica,
    Other,
    #[strum(serialize = "South America")]
    SouthAmerica,
}

const REGION_TABLE: [(&str, Region); 10] = [
    ("United States", Region::NorthAmerica),
    ("India", Region::Asia),
    ("United Kingdom", Region::Europe),
    ("Japan", Region::Asia),
    ("Canada", Region::NorthAmerica),
    ("France", Region::Europe),
    ("Germany", Region::Europe),
    ("Spain", Region::Europe),
    ("South Korea", Region::Asia),
    ("Brazil", Region::SouthAmerica),
];

impl Region {
    /// Map a country name to its region; unmapped names resolve to [`Region::Other`].
    ///
    /// Lookup is exact and case-sensitive.
    #[must_use]
    pub fn resolve(country: &str) -> Self {
        REGION_TABLE
            .iter()
            .find_map(|&(name, region)| (name == country).then_some(region))
            .unwrap_or(Self::Other)
    }
}
