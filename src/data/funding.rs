use ordered_float::OrderedFloat;

use crate::core::scale::extent;
use crate::error::StoryResult;

use super::DataTable;

/// One institution's yearly stipend picture, in thousands of CAD.
#[derive(Debug, Clone, PartialEq)]
pub struct FundingRecord {
    pub university: String,
    pub funding: f64,
    pub cost_of_living: f64,
    pub remaining: f64,
}

/// Institution funding table (dataset 3), kept in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct FundingTable {
    records: Vec<FundingRecord>,
}

impl FundingTable {
    pub fn from_table(table: &DataTable) -> StoryResult<Self> {
        let mut records = Vec::with_capacity(table.len());
        for row in 0..table.len() {
            records.push(FundingRecord {
                university: table.text(row, "University")?.to_owned(),
                funding: table.number(row, "Yearly_funding_kCAD")?,
                cost_of_living: table.number(row, "Yearly_col_kCAD")?,
                remaining: table.number(row, "Yearly_left_kCAD")?,
            });
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[FundingRecord] {
        &self.records
    }

    pub fn universities(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.university.as_str())
    }

    /// Copy ordered by ascending money left after living costs.
    /// Institutions with an unknown remainder sort last.
    #[must_use]
    pub fn sorted_by_remaining(&self) -> Vec<FundingRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by_key(|record| OrderedFloat(record.remaining));
        sorted
    }

    /// Largest funding figure, for the shared value axis.
    pub fn max_funding(&self) -> StoryResult<f64> {
        extent(self.records.iter().map(|record| record.funding)).map(|(_, max)| max)
    }
}

#[cfg(test)]
mod tests {
    use super::FundingTable;
    use crate::data::DataTable;

    const FUNDING: &str = "\
University,Yearly_funding_kCAD,Yearly_col_kCAD,Yearly_left_kCAD
UBC,22.0,28.4,-6.4
McGill,19.0,23.0,-4.0
Alberta,25.0,24.5,0.5
";

    #[test]
    fn records_keep_file_order() {
        let table = DataTable::from_delimited("phdFunding", FUNDING).expect("table");
        let funding = FundingTable::from_table(&table).expect("funding");
        let names: Vec<&str> = funding.universities().collect();
        assert_eq!(names, vec!["UBC", "McGill", "Alberta"]);
        assert!((funding.max_funding().expect("max") - 25.0).abs() <= 1e-12);
    }

    #[test]
    fn sorting_orders_by_ascending_remainder() {
        let table = DataTable::from_delimited("phdFunding", FUNDING).expect("table");
        let funding = FundingTable::from_table(&table).expect("funding");
        let sorted = funding.sorted_by_remaining();
        let names: Vec<&str> = sorted.iter().map(|r| r.university.as_str()).collect();
        assert_eq!(names, vec!["UBC", "McGill", "Alberta"]);

        // already ascending; reorder a scrambled copy
        let scrambled = "\
University,Yearly_funding_kCAD,Yearly_col_kCAD,Yearly_left_kCAD
A,1,1,3.0
B,1,1,-2.0
C,1,1,bogus
D,1,1,0.0
";
        let table = DataTable::from_delimited("phdFunding", scrambled).expect("table");
        let funding = FundingTable::from_table(&table).expect("funding");
        let sorted = funding.sorted_by_remaining();
        let names: Vec<&str> = sorted.iter().map(|r| r.university.as_str()).collect();
        assert_eq!(names, vec!["B", "D", "A", "C"]);
    }
}
