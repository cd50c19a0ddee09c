use serde::{Deserialize, Serialize};

/// Store department a shopping-list item is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Produce,
    Meat,
    Dairy,
    Pantry,
    Other,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Produce => "produce",
            Department::Meat => "meat",
            Department::Dairy => "dairy",
            Department::Pantry => "pantry",
            Department::Other => "other",
        }
    }

    /// All departments in display order.
    pub const ALL: [Department; 5] = [
        Department::Produce,
        Department::Meat,
        Department::Dairy,
        Department::Pantry,
        Department::Other,
    ];
}

/// Derived record for one distinct normalized ingredient in a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientAnalysis {
    /// Normalized ingredient name (lowercase, descriptor-stripped).
    pub name: String,

    /// Number of meals in the plan that list this ingredient.
    pub usage: u32,

    /// Estimated unit price in dollars.
    pub unit_price: f64,

    /// Bulk discount multiplier applied to the baseline cost (<= 1.0).
    pub multiplier: f64,

    /// Estimated total cost after the bulk discount.
    pub total_cost: f64,

    /// Savings versus the no-discount baseline (>= 0.0).
    pub savings: f64,
}

impl IngredientAnalysis {
    /// Cost before any bulk discount.
    #[inline]
    pub fn baseline_cost(&self) -> f64 {
        self.unit_price * self.usage as f64
    }
}

/// Shopping list grouped by store department, with savings aggregates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizedList {
    pub produce: Vec<String>,
    pub meat: Vec<String>,
    pub dairy: Vec<String>,
    pub pantry: Vec<String>,
    pub other: Vec<String>,

    /// Sum of savings across every ingredient in the plan.
    pub total_savings: f64,

    /// Names of ingredients whose individual savings exceed the high-value
    /// threshold, in flat-list order.
    pub high_value_items: Vec<String>,
}

impl OrganizedList {
    pub fn bucket(&self, department: Department) -> &[String] {
        match department {
            Department::Produce => &self.produce,
            Department::Meat => &self.meat,
            Department::Dairy => &self.dairy,
            Department::Pantry => &self.pantry,
            Department::Other => &self.other,
        }
    }

    pub fn bucket_mut(&mut self, department: Department) -> &mut Vec<String> {
        match department {
            Department::Produce => &mut self.produce,
            Department::Meat => &mut self.meat,
            Department::Dairy => &mut self.dairy,
            Department::Pantry => &mut self.pantry,
            Department::Other => &mut self.other,
        }
    }

    /// Total number of lines across all buckets.
    pub fn item_count(&self) -> usize {
        Department::ALL.iter().map(|d| self.bucket(*d).len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_cost() {
        let record = IngredientAnalysis {
            name: "onion".to_string(),
            usage: 3,
            unit_price: 1.0,
            multiplier: 0.75,
            total_cost: 2.25,
            savings: 0.75,
        };
        assert!((record.baseline_cost() - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_bucket_roundtrip() {
        let mut list = OrganizedList::default();
        list.bucket_mut(Department::Dairy).push("milk".to_string());

        assert_eq!(list.bucket(Department::Dairy), ["milk".to_string()]);
        assert_eq!(list.item_count(), 1);
        assert!(list.bucket(Department::Produce).is_empty());
    }
}
