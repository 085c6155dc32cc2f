use crate::catalog::{RecordSets, Region, TitleKind};
use crate::views::FilterSpec;
use core::ops::RangeInclusive;
use std::collections::BTreeSet;

/// Year slider bounds used when no record has a year.
pub const FALLBACK_YEAR_BOUNDS: RangeInclusive<i32> = 2008..=2021;

/// Year selection used when no record has a year.
pub const FALLBACK_YEAR_SELECTION: RangeInclusive<i32> = 2015..=2021;

/// The user-adjustable filter state of a dashboard session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DashboardControls {
    pub years: RangeInclusive<i32>,
    pub kinds: BTreeSet<TitleKind>,
    pub regions: BTreeSet<Region>,
}

impl DashboardControls {
    /// Filter for titles and genre records: year range and content types.
    #[must_use]
    pub fn title_filter(&self) -> FilterSpec {
        FilterSpec::new().with_years(self.years.clone()).with_kinds(self.kinds.iter().cloned())
    }

    /// Filter for country records: year range and regions.
    #[must_use]
    pub fn country_filter(&self) -> FilterSpec {
        FilterSpec::new().with_years(self.years.clone()).with_regions(self.regions.iter().copied())
    }

    /// Apply the controls to every record set.
    #[must_use]
    pub fn filter_sets(&self, sets: &RecordSets) -> RecordSets {
        let titles = self.title_filter();
        RecordSets {
            titles: titles.apply(&sets.titles),
            genres: titles.apply(&sets.genres),
            countries: self.country_filter().apply(&sets.countries),
        }
    }
}

/// The values each control can take, derived from the loaded records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlOptions {
    pub year_bounds: RangeInclusive<i32>,
    pub default_years: RangeInclusive<i32>,
    pub kinds: BTreeSet<TitleKind>,
    pub regions: BTreeSet<Region>,
}

impl ControlOptions {
    #[must_use]
    pub fn from_sets(sets: &RecordSets) -> Self {
        let years: BTreeSet<i32> = sets.titles.iter().filter_map(|t| t.year_added()).collect();

        let (year_bounds, default_years) = match (years.first(), years.last()) {
            (Some(&min), Some(&max)) => (min..=max, min..=max),
            _ => (FALLBACK_YEAR_BOUNDS, FALLBACK_YEAR_SELECTION),
        };

        Self {
            year_bounds,
            default_years,
            kinds: sets.titles.iter().filter_map(|t| t.kind.clone()).collect(),
            regions: sets.countries.iter().map(|c| c.region).collect(),
        }
    }

    /// Controls with the default selection: full year range, every type, every region.
    #[must_use]
    pub fn defaults(&self) -> DashboardControls {
        DashboardControls {
            years: self.default_years.clone(),
            kinds: self.kinds.clone(),
            regions: self.regions.clone(),
        }
    }

    /// Clamp a year range into the bounds.
    #[must_use]
    pub fn clamp_years(&self, years: &RangeInclusive<i32>) -> RangeInclusive<i32> {
        let (min, max) = (*self.year_bounds.start(), *self.year_bounds.end());
        (*years.start()).clamp(min, max)..=(*years.end()).clamp(min, max)
    }
}
