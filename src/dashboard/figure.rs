use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureKind {
    Bar,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub name: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A chart suggested by the assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FigureKind,
    pub data: Vec<DataPoint>,
    pub title: String,
}

impl Figure {
    pub fn new(kind: FigureKind, title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            data,
            title: title.into(),
        }
    }

    pub fn total(&self) -> f64 {
        self.data.iter().map(|p| p.value).sum()
    }

    /// Share of each data point in percent, in data order
    pub fn shares(&self) -> Vec<(&str, f64)> {
        let total = self.total();
        self.data
            .iter()
            .map(|p| {
                let pct = if total > 0.0 { p.value / total * 100.0 } else { 0.0 };
                (p.name.as_str(), pct)
            })
            .collect()
    }
}

/// One stacked bar of the response distribution chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionRow {
    pub label: String,
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl DistributionRow {
    pub fn new(label: impl Into<String>, positive: u32, neutral: u32, negative: u32) -> Self {
        Self {
            label: label.into(),
            positive,
            neutral,
            negative,
        }
    }

    pub fn total(&self) -> u32 {
        self.positive + self.neutral + self.negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_shares() {
        let figure = Figure::new(
            FigureKind::Pie,
            "Split",
            vec![DataPoint::new("A", 300.0), DataPoint::new("B", 100.0)],
        );
        let shares = figure.shares();
        assert_eq!(shares[0], ("A", 75.0));
        assert_eq!(shares[1], ("B", 25.0));
    }

    #[test]
    fn test_empty_figure_shares_are_zero() {
        let figure = Figure::new(FigureKind::Bar, "Empty", vec![DataPoint::new("A", 0.0)]);
        assert_eq!(figure.shares(), vec![("A", 0.0)]);
    }

    #[test]
    fn test_figure_ids_are_unique() {
        let a = Figure::new(FigureKind::Bar, "a", vec![]);
        let b = Figure::new(FigureKind::Bar, "a", vec![]);
        assert_ne!(a.id, b.id);
    }
}
