use crate::catalog::{CountryRecord, GenreRecord, NormalizedRecord, Region, TitleKind};
use core::ops::RangeInclusive;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Attributes a record can be filtered on.
pub trait Facets {
    fn year_added(&self) -> Option<i32>;

    fn kind(&self) -> Option<&TitleKind>;

    /// Region of the record; only country records carry one.
    fn region(&self) -> Option<Region> {
        None
    }
}

impl Facets for NormalizedRecord {
    fn year_added(&self) -> Option<i32> {
        Self::year_added(self)
    }

    fn kind(&self) -> Option<&TitleKind> {
        self.kind.as_ref()
    }
}

impl<T: Facets> Facets for Arc<T> {
    fn year_added(&self) -> Option<i32> {
        T::year_added(self)
    }

    fn kind(&self) -> Option<&TitleKind> {
        T::kind(self)
    }

    fn region(&self) -> Option<Region> {
        T::region(self)
    }
}

impl Facets for GenreRecord {
    fn year_added(&self) -> Option<i32> {
        self.source.year_added()
    }

    fn kind(&self) -> Option<&TitleKind> {
        self.source.kind.as_ref()
    }
}

impl Facets for CountryRecord {
    fn year_added(&self) -> Option<i32> {
        self.source.year_added()
    }

    fn kind(&self) -> Option<&TitleKind> {
        self.source.kind.as_ref()
    }

    fn region(&self) -> Option<Region> {
        Some(self.region)
    }
}

/// A conjunction of optional predicates over record facets.
///
/// Absent components impose no constraint. A record missing a constrained facet never
/// passes: an undated record fails any year range, a record without a region fails any
/// region set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSpec {
    pub year_range: Option<RangeInclusive<i32>>,
    pub kinds: Option<BTreeSet<TitleKind>>,
    pub regions: Option<BTreeSet<Region>>,
}

impl FilterSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_years(mut self, years: RangeInclusive<i32>) -> Self {
        self.year_range = Some(years);
        self
    }

    #[must_use]
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = TitleKind>) -> Self {
        self.kinds = Some(kinds.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_regions(mut self, regions: impl IntoIterator<Item = Region>) -> Self {
        self.regions = Some(regions.into_iter().collect());
        self
    }

    pub fn matches<R: Facets>(&self, record: &R) -> bool {
        if let Some(range) = &self.year_range
            && !record.year_added().is_some_and(|year| range.contains(&year))
        {
            return false;
        }

        if let Some(kinds) = &self.kinds
            && !record.kind().is_some_and(|kind| kinds.contains(kind))
        {
            return false;
        }

        if let Some(regions) = &self.regions
            && !record.region().is_some_and(|region| regions.contains(&region))
        {
            return false;
        }

        true
    }

    /// Records that satisfy every predicate, in input order.
    pub fn apply<R: Facets + Clone>(&self, records: &[R]) -> Vec<R> {
        records.iter().filter(|record| self.matches(*record)).cloned().collect()
    }
}
