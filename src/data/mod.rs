mod bundle;
mod cpi;
mod funding;
mod programs;
mod table;

pub use bundle::{DATASET_FILE_NAMES, DatasetBundle};
pub use cpi::{CategorySeries, CpiCategory, CpiRecord, MultiYearCpi, RecentCpi, RecentCpiRecord};
pub use funding::{FundingRecord, FundingTable};
pub use programs::{FinancialStatus, ProgramRecord, ProgramTable};
pub use table::DataTable;
