use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Revision counts keyed by period label (month), kept in the order the
/// server supplied them. That order is also the chart's x-axis order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivitySeries(IndexMap<String, u64>);

impl ActivitySeries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Period labels in supplied order.
    pub fn labels(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Revision counts in supplied order.
    pub fn counts(&self) -> Vec<u64> {
        self.0.values().copied().collect()
    }

    pub fn max_count(&self) -> u64 {
        self.0.values().copied().max().unwrap_or(0)
    }
}

impl FromIterator<(String, u64)> for ActivitySeries {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn series() -> ActivitySeries {
        [("2021-01", 3), ("2021-02", 5), ("2020-12", 1)]
            .into_iter()
            .map(|(label, count)| (label.to_owned(), count))
            .collect()
    }

    #[test]
    fn test_supplied_order_preserved() {
        let series = series();

        // Not sorted; the server's order wins.
        assert_eq!(series.labels(), vec!["2021-01", "2021-02", "2020-12"]);
        assert_eq!(series.counts(), vec![3, 5, 1]);
    }

    #[test]
    fn test_wire_order_preserved() {
        let series: ActivitySeries =
            serde_json::from_str(r#"{"2021-01": 3, "2021-02": 5}"#).unwrap();

        assert_eq!(series.counts(), vec![3, 5]);
        assert_eq!(series.labels(), vec!["2021-01", "2021-02"]);
    }

    #[test]
    fn test_max_count() {
        assert_eq!(series().max_count(), 5);
        assert_eq!(ActivitySeries::default().max_count(), 0);
    }
}
