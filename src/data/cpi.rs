use chrono::NaiveDate;

use crate::core::month::parse_month_label;
use crate::core::scale::extent;
use crate::error::{StoryError, StoryResult};

use super::DataTable;

/// Consumer-price-index expense category tracked by the recent-year
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CpiCategory {
    Food,
    Shelter,
    Household,
    Clothing,
    Transportation,
    Health,
    Recreation,
}

impl CpiCategory {
    pub const ALL: [Self; 7] = [
        Self::Food,
        Self::Shelter,
        Self::Household,
        Self::Clothing,
        Self::Transportation,
        Self::Health,
        Self::Recreation,
    ];

    /// Column name in the recent-year table.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Food => "FoodMonthCPI",
            Self::Shelter => "ShelterMonthCPI",
            Self::Household => "HouseholdMonthCPI",
            Self::Clothing => "ClothingMonthCPI",
            Self::Transportation => "TransportationMonthCPI",
            Self::Health => "HealthMonthCPI",
            Self::Recreation => "RecreationMonthCPI",
        }
    }

    /// Short reader-facing label used on legends and highlight rules.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Shelter => "housing",
            Self::Household => "utilities",
            Self::Clothing => "clothing",
            Self::Transportation => "transport",
            Self::Health => "health",
            Self::Recreation => "recreation",
        }
    }

    /// Stable position in `ALL`, used for palette assignment.
    #[must_use]
    pub fn palette_index(self) -> usize {
        match self {
            Self::Food => 0,
            Self::Shelter => 1,
            Self::Household => 2,
            Self::Clothing => 3,
            Self::Transportation => 4,
            Self::Health => 5,
            Self::Recreation => 6,
        }
    }
}

/// One month of the multi-year all-items table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpiRecord {
    pub month: NaiveDate,
    pub all_items: f64,
    pub year_group: f64,
    pub month_cpi: f64,
}

/// Multi-year CPI history (dataset 1).
#[derive(Debug, Clone, PartialEq)]
pub struct MultiYearCpi {
    records: Vec<CpiRecord>,
}

impl MultiYearCpi {
    pub fn from_table(table: &DataTable) -> StoryResult<Self> {
        let mut records = Vec::with_capacity(table.len());
        for row in 0..table.len() {
            records.push(CpiRecord {
                month: parse_month_label(table.text(row, "Time")?)?,
                all_items: table.number(row, "allItems")?,
                year_group: table.number(row, "YearGroup")?,
                month_cpi: table.number(row, "MonthCPI")?,
            });
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[CpiRecord] {
        &self.records
    }

    /// First and last month in file order.
    pub fn month_span(&self) -> StoryResult<(NaiveDate, NaiveDate)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) if first.month < last.month => {
                Ok((first.month, last.month))
            }
            _ => Err(StoryError::InvalidData(
                "multi-year cpi table needs an increasing month span".to_owned(),
            )),
        }
    }

    pub fn all_items_extent(&self) -> StoryResult<(f64, f64)> {
        extent(self.records.iter().map(|record| record.all_items))
    }
}

/// One month of the recent-year table, including per-category changes.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentCpiRecord {
    pub month: NaiveDate,
    pub all_items: f64,
    pub month_cpi: f64,
    by_category: [f64; CpiCategory::ALL.len()],
}

impl RecentCpiRecord {
    #[must_use]
    pub fn category(&self, category: CpiCategory) -> f64 {
        self.by_category[category.palette_index()]
    }
}

/// Per-category series derived once from the recent-year table.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeries {
    pub category: CpiCategory,
    pub values: Vec<(NaiveDate, f64)>,
}

/// Recent-year CPI breakdown (dataset 2).
#[derive(Debug, Clone, PartialEq)]
pub struct RecentCpi {
    records: Vec<RecentCpiRecord>,
    series: Vec<CategorySeries>,
}

impl RecentCpi {
    pub fn from_table(table: &DataTable) -> StoryResult<Self> {
        let mut records = Vec::with_capacity(table.len());
        for row in 0..table.len() {
            let mut by_category = [f64::NAN; CpiCategory::ALL.len()];
            for category in CpiCategory::ALL {
                by_category[category.palette_index()] = table.number(row, category.column())?;
            }
            records.push(RecentCpiRecord {
                month: parse_month_label(table.text(row, "Time")?)?,
                all_items: table.number(row, "allItems")?,
                month_cpi: table.number(row, "MonthCPI")?,
                by_category,
            });
        }

        let series = CpiCategory::ALL
            .into_iter()
            .map(|category| CategorySeries {
                category,
                values: records
                    .iter()
                    .map(|record| (record.month, record.category(category)))
                    .collect(),
            })
            .collect();

        Ok(Self { records, series })
    }

    #[must_use]
    pub fn records(&self) -> &[RecentCpiRecord] {
        &self.records
    }

    #[must_use]
    pub fn category_series(&self) -> &[CategorySeries] {
        &self.series
    }

    pub fn month_span(&self) -> StoryResult<(NaiveDate, NaiveDate)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) if first.month < last.month => {
                Ok((first.month, last.month))
            }
            _ => Err(StoryError::InvalidData(
                "recent cpi table needs an increasing month span".to_owned(),
            )),
        }
    }

    /// Most recent finite value for one category. Drives the highlight
    /// rule position and its percentage label.
    pub fn latest(&self, category: CpiCategory) -> StoryResult<f64> {
        self.records
            .iter()
            .rev()
            .map(|record| record.category(category))
            .find(|value| value.is_finite())
            .ok_or_else(|| {
                StoryError::InvalidData(format!(
                    "category `{}` has no finite values",
                    category.label()
                ))
            })
    }
}
