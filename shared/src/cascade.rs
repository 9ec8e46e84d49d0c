//! Cascading region/province/city/barangay selection.
//!
//! Four select widgets depend on each other: picking a value at one level
//! refills the level directly below from the [`LocationTable`] and resets
//! every level further down to its placeholder. The controller owns the
//! widget contents; the shell only mirrors them.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::locations::{LocationLevel, LocationTable};

pub const REGION_PLACEHOLDER: &str = "Select Region";
pub const PROVINCE_PLACEHOLDER: &str = "Select Province";
pub const CITY_PLACEHOLDER: &str = "Select City/Municipality";
pub const BARANGAY_PLACEHOLDER: &str = "Select Barangay";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub region: String,
    pub province: String,
    pub city: String,
    pub barangay: String,
}

impl Placeholders {
    #[must_use]
    pub fn for_level(&self, level: LocationLevel) -> &str {
        match level {
            LocationLevel::Region => &self.region,
            LocationLevel::Province => &self.province,
            LocationLevel::City => &self.city,
            LocationLevel::Barangay => &self.barangay,
        }
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            region: REGION_PLACEHOLDER.into(),
            province: PROVINCE_PLACEHOLDER.into(),
            city: CITY_PLACEHOLDER.into(),
            barangay: BARANGAY_PLACEHOLDER.into(),
        }
    }
}

/// The selected value at each level; `None` means the placeholder is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionState {
    pub region: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub barangay: Option<String>,
}

impl SelectionState {
    #[must_use]
    pub fn new(
        region: impl Into<String>,
        province: impl Into<String>,
        city: impl Into<String>,
        barangay: impl Into<String>,
    ) -> Self {
        let non_empty = |s: String| Some(s).filter(|s| !s.is_empty());
        Self {
            region: non_empty(region.into()),
            province: non_empty(province.into()),
            city: non_empty(city.into()),
            barangay: non_empty(barangay.into()),
        }
    }

    #[must_use]
    pub fn get(&self, level: LocationLevel) -> Option<&str> {
        match level {
            LocationLevel::Region => self.region.as_deref(),
            LocationLevel::Province => self.province.as_deref(),
            LocationLevel::City => self.city.as_deref(),
            LocationLevel::Barangay => self.barangay.as_deref(),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        LocationLevel::ALL.iter().all(|l| self.get(*l).is_some())
    }
}

/// Contents of one `<select>`: a placeholder entry followed by `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectWidget {
    pub placeholder: String,
    pub options: Vec<String>,
    pub selected: Option<String>,
}

impl SelectWidget {
    fn placeholder_only(placeholder: &str) -> Self {
        Self {
            placeholder: placeholder.to_string(),
            options: Vec::new(),
            selected: None,
        }
    }

    /// Replaces the options and selects `wanted` when it is one of them.
    fn fill<S: AsRef<str>>(&mut self, options: &[S], wanted: Option<&str>) {
        self.options = options.iter().map(|o| o.as_ref().to_string()).collect();
        self.selected = wanted.and_then(|w| self.option(w));
    }

    fn clear(&mut self) {
        self.options.clear();
        self.selected = None;
    }

    fn option(&self, value: &str) -> Option<String> {
        self.options.iter().find(|o| *o == value).cloned()
    }

    /// Value as a form field would submit it; empty while the placeholder shows.
    #[must_use]
    pub fn value(&self) -> &str {
        self.selected.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn is_placeholder_only(&self) -> bool {
        self.options.is_empty() && self.selected.is_none()
    }
}

/// Emitted once per selection, after every affected widget is updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeChange {
    pub level: LocationLevel,
    pub selection: SelectionState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    pub placeholders: Placeholders,
    pub prior: SelectionState,
}

type ChangeListener = Box<dyn FnMut(&CascadeChange) + Send>;

pub struct Cascade {
    table: Arc<LocationTable>,
    widgets: [SelectWidget; 4],
    on_change: Option<ChangeListener>,
}

impl Cascade {
    /// Fills the region widget and replays any prior selection down the
    /// chain, exactly as if the user had clicked through it.
    #[must_use]
    pub fn new(table: Arc<LocationTable>, config: &CascadeConfig) -> Self {
        let placeholders = &config.placeholders;
        let widgets =
            LocationLevel::ALL.map(|l| SelectWidget::placeholder_only(placeholders.for_level(l)));
        let mut cascade = Self {
            table,
            widgets,
            on_change: None,
        };

        for level in LocationLevel::ALL {
            let wanted = config.prior.get(level);
            let options = cascade.options_for(level);
            let widget = &mut cascade.widgets[level.index()];
            widget.fill(&options, wanted);
            if let (Some(wanted), None) = (wanted, &widget.selected) {
                debug!(%level, value = wanted, "stored selection no longer in table");
            }
        }

        cascade
    }

    /// Registers the notification fired after every selection.
    #[must_use]
    pub fn with_on_change(
        mut self,
        listener: impl FnMut(&CascadeChange) + Send + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    /// Applies a user selection at `level`.
    ///
    /// An empty or unknown `value` leaves the level unset. Levels below are
    /// always rebuilt: the direct child is refilled from the table and the
    /// rest fall back to their placeholder, even when an old value would
    /// still be valid.
    pub fn select(&mut self, level: LocationLevel, value: Option<&str>) -> CascadeChange {
        let value = value.filter(|v| !v.is_empty());
        let widget = &mut self.widgets[level.index()];
        widget.selected = value.and_then(|v| widget.option(v));
        if let (Some(value), None) = (value, &widget.selected) {
            warn!(%level, value, "selected value is not an option; treating as unset");
        }

        let mut below = level.descendants().iter().copied();
        if let Some(child) = below.next() {
            let options = self.options_for(child);
            self.widgets[child.index()].fill(&options, None);
        }
        for level in below {
            self.widgets[level.index()].clear();
        }

        let change = CascadeChange {
            level,
            selection: self.selection(),
        };
        if let Some(listener) = self.on_change.as_mut() {
            listener(&change);
        }
        change
    }

    pub fn select_region(&mut self, region: &str) -> CascadeChange {
        self.select(LocationLevel::Region, Some(region))
    }

    pub fn select_province(&mut self, province: &str) -> CascadeChange {
        self.select(LocationLevel::Province, Some(province))
    }

    pub fn select_city(&mut self, city: &str) -> CascadeChange {
        self.select(LocationLevel::City, Some(city))
    }

    pub fn select_barangay(&mut self, barangay: &str) -> CascadeChange {
        self.select(LocationLevel::Barangay, Some(barangay))
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        let selected = |level: LocationLevel| self.widgets[level.index()].selected.clone();
        SelectionState {
            region: selected(LocationLevel::Region),
            province: selected(LocationLevel::Province),
            city: selected(LocationLevel::City),
            barangay: selected(LocationLevel::Barangay),
        }
    }

    #[must_use]
    pub fn widget(&self, level: LocationLevel) -> &SelectWidget {
        &self.widgets[level.index()]
    }

    #[must_use]
    pub fn widgets(&self) -> &[SelectWidget; 4] {
        &self.widgets
    }

    fn value_at(&self, level: LocationLevel) -> &str {
        self.widgets[level.index()].value()
    }

    fn options_for(&self, level: LocationLevel) -> Vec<String> {
        let region = self.value_at(LocationLevel::Region);
        let province = self.value_at(LocationLevel::Province);
        let city = self.value_at(LocationLevel::City);
        let names: Vec<&str> = match level {
            LocationLevel::Region => self.table.list_regions(),
            LocationLevel::Province => self.table.list_provinces(region),
            LocationLevel::City => self.table.list_cities(region, province),
            LocationLevel::Barangay => self
                .table
                .list_barangays(region, province, city)
                .iter()
                .map(String::as_str)
                .collect(),
        };
        names.into_iter().map(str::to_string).collect()
    }
}

impl fmt::Debug for Cascade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cascade")
            .field("widgets", &self.widgets)
            .field("has_listener", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}
