use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{StoryError, StoryResult};

use super::{DataTable, FundingTable, MultiYearCpi, ProgramTable, RecentCpi};

/// Conventional dataset file names, in binding order.
pub const DATASET_FILE_NAMES: [&str; 4] =
    ["bcCPI.csv", "year22.csv", "phdFunding.csv", "CoL_programs.csv"];

/// All four datasets, parsed and preprocessed. The story is only
/// presentable once every table loaded; partial bundles do not exist.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBundle {
    pub multi_year: MultiYearCpi,
    pub recent: RecentCpi,
    pub funding: FundingTable,
    pub programs: ProgramTable,
}

impl DatasetBundle {
    /// Binds the four tables positionally: multi-year CPI, recent-year
    /// CPI, institution funding, program cost of living.
    pub fn from_csv_strs(
        multi_year: &str,
        recent: &str,
        funding: &str,
        programs: &str,
    ) -> StoryResult<Self> {
        let multi_year =
            MultiYearCpi::from_table(&DataTable::from_delimited("bcCPI", multi_year)?)?;
        let recent = RecentCpi::from_table(&DataTable::from_delimited("year22", recent)?)?;
        let funding =
            FundingTable::from_table(&DataTable::from_delimited("phdFunding", funding)?)?;
        let programs =
            ProgramTable::from_table(&DataTable::from_delimited("CoL_programs", programs)?)?;

        debug!(
            multi_year_rows = multi_year.records().len(),
            recent_rows = recent.records().len(),
            institutions = funding.records().len(),
            program_rows = programs.records().len(),
            "dataset bundle ready"
        );
        Ok(Self {
            multi_year,
            recent,
            funding,
            programs,
        })
    }

    /// Reads the four conventional file names from one directory.
    pub fn load_dir(dir: impl AsRef<Path>) -> StoryResult<Self> {
        let dir = dir.as_ref();
        let mut contents = Vec::with_capacity(DATASET_FILE_NAMES.len());
        for file_name in DATASET_FILE_NAMES {
            let path = dir.join(file_name);
            let text = fs::read_to_string(&path).map_err(|source| StoryError::DatasetIo {
                path: path.display().to_string(),
                source,
            })?;
            contents.push(text);
        }
        Self::from_csv_strs(&contents[0], &contents[1], &contents[2], &contents[3])
    }
}
