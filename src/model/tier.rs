use serde::Serialize;

/// Three-level quality grade for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Tier {
    #[serde(rename = "r")]
    Red,
    #[serde(rename = "o")]
    Orange,
    #[serde(rename = "g")]
    Green,
}

impl Tier {
    pub fn code(self) -> &'static str {
        match self {
            Tier::Green => "g",
            Tier::Orange => "o",
            Tier::Red => "r",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Green => "green",
            Tier::Orange => "orange",
            Tier::Red => "red",
        }
    }
}
