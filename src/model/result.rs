use crate::model::category::Category;
use crate::model::tier::Tier;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricClassification {
    pub metric: String,
    pub value: f64,
    pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDetail {
    pub category: Category,
    pub classifications: Vec<MetricClassification>,
    pub accuracy_fraction: f64,
    /// Raw speed-up ratio; `None` for Physics.
    pub speed_up: Option<f64>,
    pub speed_up_fraction: Option<f64>,
    pub subscore: f64,
}

impl CategoryDetail {
    pub fn tiers(&self) -> Vec<Tier> {
        self.classifications.iter().map(|c| c.tier).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subscores {
    pub ml: f64,
    pub physics: f64,
    pub ood: f64,
}

impl Subscores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Ml => self.ml,
            Category::Physics => self.physics,
            Category::Ood => self.ood,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub global_score: f64,
    pub subscores: Subscores,
    /// One entry per category in ML, Physics, OOD order.
    pub details: Vec<CategoryDetail>,
}

impl ScoreResult {
    pub fn detail(&self, category: Category) -> Option<&CategoryDetail> {
        self.details.iter().find(|d| d.category == category)
    }
}
