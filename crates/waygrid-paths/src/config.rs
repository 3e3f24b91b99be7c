//! Tuning knobs for [`GridMap`](crate::GridMap) searches.

/// How equal-cost candidates are told apart by the heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Scale the distance up by 1%, favouring nodes closer to the goal.
    #[default]
    Scale,
    /// Add a small penalty proportional to how far the cell strays from the
    /// straight line between the search start and the goal.
    CrossProduct,
    /// Use the raw distance.
    None,
}

impl TieBreak {
    pub(crate) const SCALE: f32 = 1.01;
    pub(crate) const CROSS_WEIGHT: f32 = 0.001;
}

/// Base distance estimate used by the heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// |dx| + |dy|. Overestimates diagonal travel, so searches are faster
    /// but not guaranteed optimal.
    #[default]
    Manhattan,
    /// Exact open-grid cost with 1.0 straight and 1.5 diagonal steps.
    /// Admissible.
    Octile,
}

/// How the cost of moving between two successor cells is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostModel {
    /// Octile distance between the two cells, so a multi-cell jump costs
    /// the sum of its steps.
    #[default]
    Distance,
    /// A fixed 1.0 or 1.5 per successor, whatever the number of cells
    /// crossed. Under-counts long jumps.
    PerStep,
}

/// Search configuration of a [`GridMap`](crate::GridMap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridMapConfig {
    pub tie_break: TieBreak,
    pub metric: Metric,
    pub cost_model: CostModel,
}

impl GridMapConfig {
    /// Configuration with admissible costs and no tie-breaking: the paths
    /// found are always optimal.
    pub fn exact() -> Self {
        Self {
            tie_break: TieBreak::None,
            metric: Metric::Octile,
            cost_model: CostModel::Distance,
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = GridMapConfig::default();
        assert_eq!(c.tie_break, TieBreak::Scale);
        assert_eq!(c.metric, Metric::Manhattan);
        assert_eq!(c.cost_model, CostModel::Distance);
    }

    #[test]
    fn builders() {
        let c = GridMapConfig::default()
            .with_tie_break(TieBreak::CrossProduct)
            .with_metric(Metric::Octile)
            .with_cost_model(CostModel::PerStep);
        assert_eq!(c.tie_break, TieBreak::CrossProduct);
        assert_eq!(c.metric, Metric::Octile);
        assert_eq!(c.cost_model, CostModel::PerStep);
        assert_eq!(
            GridMapConfig::exact(),
            GridMapConfig::default()
                .with_tie_break(TieBreak::None)
                .with_metric(Metric::Octile)
        );
    }
}
