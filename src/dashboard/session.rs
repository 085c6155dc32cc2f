use super::controls::{ControlOptions, DashboardControls};
use crate::Result;
use crate::catalog::{NormalizedRecord, RecordSets, Region, TitleKind};
use crate::views::{CatalogViews, ViewOptions};
use core::ops::RangeInclusive;
use ohno::bail;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::sync::Arc;

/// Control states whose views stay cached; the least recently used state is evicted first.
pub const MAX_CACHED_STATES: usize = 16;

/// Headline metrics of the filtered catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overview {
    pub total: usize,
    pub movies: usize,
    pub tv_shows: usize,
}

impl Overview {
    #[must_use]
    pub fn from_titles(titles: &[Arc<NormalizedRecord>]) -> Self {
        Self {
            total: titles.len(),
            movies: titles.iter().filter(|t| t.kind == Some(TitleKind::Movie)).count(),
            tv_shows: titles.iter().filter(|t| t.kind == Some(TitleKind::TvShow)).count(),
        }
    }
}

/// Everything the dashboard shows for one control state.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredViews {
    pub sets: RecordSets,
    pub views: CatalogViews,
    pub overview: Overview,
}

impl FilteredViews {
    /// The first `count` filtered titles.
    #[must_use]
    pub fn sample(&self, count: usize) -> &[Arc<NormalizedRecord>] {
        &self.sets.titles[..count.min(self.sets.titles.len())]
    }
}

/// Interactive dashboard state over a loaded catalog.
///
/// Every control change is validated against the options derived from the data. Results are
/// memoized per control state, so returning to a recent selection reuses its views. At most
/// [`MAX_CACHED_STATES`] states are kept.
#[derive(Debug)]
pub struct Dashboard<'a> {
    sets: &'a RecordSets,
    view_options: ViewOptions,
    options: ControlOptions,
    controls: DashboardControls,
    cache: HashMap<DashboardControls, Arc<FilteredViews>>,
    recency: VecDeque<DashboardControls>,
}

impl<'a> Dashboard<'a> {
    #[must_use]
    pub fn new(sets: &'a RecordSets, view_options: ViewOptions) -> Self {
        let options = ControlOptions::from_sets(sets);
        let controls = options.defaults();

        Self {
            sets,
            view_options,
            options,
            controls,
            cache: HashMap::new(),
            recency: VecDeque::new(),
        }
    }

    #[must_use]
    pub const fn controls(&self) -> &DashboardControls {
        &self.controls
    }

    #[must_use]
    pub const fn options(&self) -> &ControlOptions {
        &self.options
    }

    /// Select a year range, clamped to the available years.
    ///
    /// Returns the range actually applied.
    pub fn set_years(&mut self, years: RangeInclusive<i32>) -> Result<RangeInclusive<i32>> {
        if years.start() > years.end() {
            bail!("invalid year range {}-{}: start is after end", years.start(), years.end());
        }

        let clamped = self.options.clamp_years(&years);
        if clamped != years {
            log::info!("clamped year range {years:?} to {clamped:?}");
        }

        self.controls.years = clamped.clone();
        Ok(clamped)
    }

    /// Select content types; every type must be one of the available options.
    pub fn set_kinds(&mut self, kinds: BTreeSet<TitleKind>) -> Result<()> {
        let unknown: Vec<String> = kinds.difference(&self.options.kinds).map(ToString::to_string).collect();
        if !unknown.is_empty() {
            bail!("unknown content type(s): {}", unknown.join(", "));
        }

        self.controls.kinds = kinds;
        Ok(())
    }

    /// Select regions; every region must be one of the available options.
    pub fn set_regions(&mut self, regions: BTreeSet<Region>) -> Result<()> {
        let unknown: Vec<String> = regions.difference(&self.options.regions).map(ToString::to_string).collect();
        if !unknown.is_empty() {
            bail!("region(s) not present in the catalog: {}", unknown.join(", "));
        }

        self.controls.regions = regions;
        Ok(())
    }

    /// Restore the default selection.
    pub fn reset(&mut self) {
        self.controls = self.options.defaults();
    }

    /// Views for the current controls, computed on first request and cached afterwards.
    pub fn current(&mut self) -> Arc<FilteredViews> {
        if let Some(cached) = self.cache.get(&self.controls) {
            log::debug!("reusing views for {:?}", self.controls);
            let cached = Arc::clone(cached);
            self.touch();
            return cached;
        }

        let sets = self.controls.filter_sets(self.sets);
        let views = CatalogViews::compute(&sets, &self.view_options);
        let overview = Overview::from_titles(&sets.titles);
        let computed = Arc::new(FilteredViews { sets, views, overview });

        log::debug!("computed views for {:?}: {} titles", self.controls, overview.total);
        let _ = self.cache.insert(self.controls.clone(), Arc::clone(&computed));
        self.touch();

        while self.recency.len() > MAX_CACHED_STATES {
            if let Some(evicted) = self.recency.pop_front() {
                let _ = self.cache.remove(&evicted);
                log::debug!("evicted views for {evicted:?}");
            }
        }

        computed
    }

    /// Mark the current controls as the most recently used state.
    fn touch(&mut self) {
        if let Some(position) = self.recency.iter().position(|controls| controls == &self.controls) {
            let _ = self.recency.remove(position);
        }
        self.recency.push_back(self.controls.clone());
    }

    /// Number of control states currently cached.
    #[must_use]
    pub fn cached_states(&self) -> usize {
        self.cache.len()
    }
}
