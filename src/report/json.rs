use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::model::result::{CategoryDetail, ScoreResult};
use crate::model::tier::Tier;

#[derive(Debug, Serialize)]
struct DetailDoc {
    accuracy: Vec<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speedup: Option<f64>,
}

impl From<&CategoryDetail> for DetailDoc {
    fn from(detail: &CategoryDetail) -> Self {
        Self {
            accuracy: detail.tiers(),
            speedup: detail.speed_up,
        }
    }
}

pub fn global_document(result: &ScoreResult) -> Value {
    json!({ "global_score": result.global_score })
}

pub fn subscores_document(result: &ScoreResult) -> Value {
    let mut map = Map::new();
    for detail in &result.details {
        map.insert(detail.category.label().to_string(), json!(detail.subscore));
    }
    Value::Object(map)
}

pub fn details_document(result: &ScoreResult) -> Value {
    let mut map = Map::new();
    for detail in &result.details {
        map.insert(
            detail.category.label().to_string(),
            json!(DetailDoc::from(detail)),
        );
    }
    Value::Object(map)
}

/// The three evaluation documents, in the order they are persisted.
pub fn evaluation_documents(result: &ScoreResult) -> [Value; 3] {
    [
        global_document(result),
        subscores_document(result),
        details_document(result),
    ]
}

pub fn render_evaluation_json(result: &ScoreResult) -> String {
    evaluation_documents(result)
        .iter()
        .map(Value::to_string)
        .collect()
}
