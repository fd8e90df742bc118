use serde::{Deserialize, Serialize};

/// One node of the authored expense hierarchy.
///
/// Leaves carry a monthly dollar amount; branches carry children. The
/// layout weighs every non-zero leaf as one unit, so amounts label the
/// cells without distorting their areas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<ExpenseItem>,
}

impl ExpenseItem {
    #[must_use]
    pub fn leaf(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount: Some(amount),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn branch(name: impl Into<String>, children: Vec<ExpenseItem>) -> Self {
        Self {
            name: name.into(),
            amount: None,
            children,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    #[must_use]
    pub fn children(&self) -> &[ExpenseItem] {
        &self.children
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Weight of this node alone, before descendant weights are added.
    pub(crate) fn own_weight(&self) -> f64 {
        match self.amount {
            Some(amount) if amount != 0.0 && !amount.is_nan() => 1.0,
            _ => 0.0,
        }
    }
}

/// The monthly expense breakdown shown by the embedded widget: three
/// branches over fourteen spending leaves.
#[must_use]
pub fn default_expenses() -> ExpenseItem {
    ExpenseItem::branch(
        "all expenses",
        vec![
            ExpenseItem::branch(
                "basic expenses",
                vec![
                    ExpenseItem::leaf("food", 350.0),
                    ExpenseItem::leaf("social", 200.0),
                    ExpenseItem::leaf("health", 115.0),
                    ExpenseItem::leaf("utilities", 90.0),
                    ExpenseItem::leaf("housing", 1400.0),
                    ExpenseItem::leaf("commute", 90.0),
                ],
            ),
            ExpenseItem::branch(
                "quality expenses",
                vec![
                    ExpenseItem::leaf("travel", 350.0),
                    ExpenseItem::leaf("savings", 200.0),
                ],
            ),
            ExpenseItem::branch(
                "other expenses",
                vec![
                    ExpenseItem::leaf("pet", 350.0),
                    ExpenseItem::leaf("childcare", 200.0),
                    ExpenseItem::leaf("hobbies", 200.0),
                    ExpenseItem::leaf("car loan", 200.0),
                    ExpenseItem::leaf("extended insurance", 200.0),
                    ExpenseItem::leaf("other", 200.0),
                ],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::default_expenses;

    #[test]
    fn default_hierarchy_has_three_branches_and_fourteen_leaves() {
        let root = default_expenses();
        assert_eq!(root.children().len(), 3);

        let leaves: usize = root
            .children()
            .iter()
            .map(|branch| branch.children().len())
            .sum();
        assert_eq!(leaves, 14);
        assert!(root
            .children()
            .iter()
            .flat_map(|branch| branch.children())
            .all(super::ExpenseItem::is_leaf));
    }

    #[test]
    fn zero_and_missing_amounts_carry_no_weight() {
        assert!((super::ExpenseItem::leaf("rent", 900.0).own_weight() - 1.0).abs() <= 1e-12);
        assert!(super::ExpenseItem::leaf("unused", 0.0).own_weight().abs() <= 1e-12);
        assert!(super::ExpenseItem::branch("group", Vec::new())
            .own_weight()
            .abs()
            <= 1e-12);
    }
}
