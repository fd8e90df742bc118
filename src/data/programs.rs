use indexmap::IndexSet;

use crate::error::StoryResult;

use super::DataTable;

/// Whether a program's stipend covers basic living costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinancialStatus {
    AlwaysEnough,
    EnoughAfterSupport,
    StillNotEnough,
}

impl FinancialStatus {
    /// Strict comparisons; any NaN falls through to `StillNotEnough`.
    #[must_use]
    pub fn classify(basic_expenses: f64, basic_income: f64, supported_income: f64) -> Self {
        if basic_income > basic_expenses {
            Self::AlwaysEnough
        } else if supported_income > basic_expenses {
            Self::EnoughAfterSupport
        } else {
            Self::StillNotEnough
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AlwaysEnough => "always enough",
            Self::EnoughAfterSupport => "enough after support",
            Self::StillNotEnough => "still not enough",
        }
    }

    pub const ALL: [Self; 3] = [
        Self::AlwaysEnough,
        Self::EnoughAfterSupport,
        Self::StillNotEnough,
    ];
}

/// One row of the cost-of-living survey (monthly CAD figures).
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramRecord {
    pub program: String,
    pub basic_expenses: f64,
    pub basic_income: f64,
    pub supported_income: f64,
    pub status: FinancialStatus,
}

/// Program cost-of-living table (dataset 4).
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramTable {
    records: Vec<ProgramRecord>,
    programs: Vec<String>,
}

impl ProgramTable {
    pub fn from_table(table: &DataTable) -> StoryResult<Self> {
        let mut records = Vec::with_capacity(table.len());
        let mut programs = IndexSet::new();
        for row in 0..table.len() {
            let program = table.text(row, "Program")?.to_owned();
            let basic_expenses = table.number(row, "Basic_Expenses")?;
            let basic_income = table.number(row, "Basic_Income")?;
            let supported_income = table.number(row, "Supported_Income")?;
            programs.insert(program.clone());
            records.push(ProgramRecord {
                program,
                basic_expenses,
                basic_income,
                supported_income,
                status: FinancialStatus::classify(basic_expenses, basic_income, supported_income),
            });
        }
        Ok(Self {
            records,
            programs: programs.into_iter().collect(),
        })
    }

    #[must_use]
    pub fn records(&self) -> &[ProgramRecord] {
        &self.records
    }

    /// Distinct program names in first-seen order. Drives the shape
    /// legend and per-program marker assignment.
    #[must_use]
    pub fn programs(&self) -> &[String] {
        &self.programs
    }

    /// Share of records that end up short even with support, as a
    /// percentage in [0, 100].
    #[must_use]
    pub fn still_short_percentage(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let short = self
            .records
            .iter()
            .filter(|record| record.status == FinancialStatus::StillNotEnough)
            .count();
        short as f64 / self.records.len() as f64 * 100.0
    }
}
