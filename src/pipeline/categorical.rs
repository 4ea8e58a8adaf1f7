//! Salary groupings by categorical feature value

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

use super::error::StatsError;
use super::stats::{summarize, DistributionSummary};

/// Categorical attributes whose salary distribution is tracked per value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    JobType,
    Degree,
    Major,
    Industry,
    CompanyId,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::JobType,
        Category::Degree,
        Category::Major,
        Category::Industry,
        Category::CompanyId,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::JobType => "jobType",
            Category::Degree => "degree",
            Category::Major => "major",
            Category::Industry => "industry",
            Category::CompanyId => "companyId",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Salaries observed for each value of each category.
///
/// Groups only grow during a run; nothing is ever removed.
#[derive(Debug, Default)]
pub struct CategoricalAggregator {
    groups: HashMap<Category, BTreeMap<String, Vec<f64>>>,
}

impl CategoricalAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `salary` to the sequence for `value` under `category`
    pub fn remember(&mut self, category: Category, value: &str, salary: f64) {
        self.groups
            .entry(category)
            .or_default()
            .entry(value.to_string())
            .or_default()
            .push(salary);
    }

    /// Summarize the salary distribution of every value of `category`.
    ///
    /// Values are ordered lexicographically. A category never seen yields an
    /// empty map.
    pub fn summarize(
        &self,
        category: Category,
    ) -> Result<BTreeMap<String, DistributionSummary>, StatsError> {
        let Some(group) = self.groups.get(&category) else {
            return Ok(BTreeMap::new());
        };

        group
            .iter()
            .map(|(value, salaries)| -> Result<_, StatsError> {
                Ok((value.clone(), summarize(salaries)?))
            })
            .collect()
    }
}

#[cfg(test)]
impl CategoricalAggregator {
    fn salaries(&self, category: Category, value: &str) -> Option<&[f64]> {
        self.groups
            .get(&category)
            .and_then(|group| group.get(value))
            .map(Vec::as_slice)
    }

    fn distinct_values(&self, category: Category) -> usize {
        self.groups.get(&category).map_or(0, BTreeMap::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remember_creates_groups_lazily() {
        let mut agg = CategoricalAggregator::new();
        assert_eq!(agg.distinct_values(Category::Degree), 0);

        agg.remember(Category::Degree, "MASTERS", 120.0);
        agg.remember(Category::Degree, "MASTERS", 140.0);
        agg.remember(Category::Degree, "NONE", 80.0);

        assert_eq!(agg.distinct_values(Category::Degree), 2);
        assert_eq!(
            agg.salaries(Category::Degree, "MASTERS"),
            Some(&[120.0, 140.0][..])
        );
        assert_eq!(agg.salaries(Category::Major, "MASTERS"), None);
    }

    #[test]
    fn test_summarize_per_value() {
        let mut agg = CategoricalAggregator::new();
        agg.remember(Category::JobType, "CEO", 200.0);
        agg.remember(Category::JobType, "CEO", 100.0);
        agg.remember(Category::JobType, "JANITOR", 50.0);

        let stats = agg.summarize(Category::JobType).unwrap();
        let keys: Vec<&str> = stats.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["CEO", "JANITOR"]);
        assert_eq!(stats["CEO"].mean, 150.0);
        assert_eq!(stats["CEO"].std_dev, 50.0);
        assert_eq!(stats["JANITOR"].count, 1);
    }

    #[test]
    fn test_summarize_unknown_category_is_empty() {
        let agg = CategoricalAggregator::new();
        assert!(agg.summarize(Category::Industry).unwrap().is_empty());
    }

    #[test]
    fn test_category_names() {
        let names: Vec<&str> = Category::ALL.iter().map(Category::name).collect();
        assert_eq!(
            names,
            vec!["jobType", "degree", "major", "industry", "companyId"]
        );
    }
}
