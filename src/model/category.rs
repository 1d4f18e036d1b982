use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[serde(rename = "ML")]
    Ml,
    Physics,
    #[serde(rename = "OOD")]
    Ood,
}

pub fn category_order() -> &'static [Category] {
    &[Category::Ml, Category::Physics, Category::Ood]
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Ml => "ML",
            Category::Physics => "Physics",
            Category::Ood => "OOD",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flat, ordered metric-name to value mapping for one category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryMetrics {
    entries: Vec<(String, f64)>,
}

impl CategoryMetrics {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns a copy with `name` set to `value`, replacing an existing entry in place
    /// or appending a new one.
    pub fn with(&self, name: &str, value: f64) -> Self {
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => entries.push((name.to_string(), value)),
        }
        Self { entries }
    }

    /// Returns a copy with the entries of `other` appended (or overwritten in place).
    pub fn merged(&self, other: &CategoryMetrics) -> Self {
        other
            .iter()
            .fold(self.clone(), |acc, (name, value)| acc.with(name, value))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/category.rs"]
mod tests;
