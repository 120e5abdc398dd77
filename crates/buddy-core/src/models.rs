//! Domain models for Finance Buddy

use std::fmt;
use std::ops::Index;

use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Name of the mascot shown on every report
pub const MASCOT_NAME: &str = "Mochi the Fox";

/// A single financial transaction from the fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    /// Raw polarity as loaded ("debit" or "credit"). Kept verbatim so listings
    /// echo unknown values; use [`Transaction::kind`] for the parsed form.
    #[serde(rename = "type")]
    pub txn_type: String,
    pub category: String,
    pub payment_method: String,
}

impl Transaction {
    /// Parsed polarity, or `None` when the raw type is not recognized
    pub fn kind(&self) -> Option<TransactionType> {
        self.txn_type.parse().ok()
    }

    pub fn is_debit(&self) -> bool {
        self.kind() == Some(TransactionType::Debit)
    }

    pub fn is_credit(&self) -> bool {
        self.kind() == Some(TransactionType::Credit)
    }
}

/// Transaction polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money going out
    Debit,
    /// Money coming in
    Credit,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "debit" => Ok(Self::Debit),
            "credit" => Ok(Self::Credit),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Debit spend per category, kept in the order each category was first seen.
///
/// Serializes as a JSON object whose keys follow that order. Ranking ties are
/// broken by it as well, so the earliest category wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySpend {
    entries: Vec<(String, f64)>,
}

impl CategorySpend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add to a category's total, appending the category on first sight
    pub fn add(&mut self, category: &str, amount: f64) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category.to_string(), amount)),
        }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    pub fn contains_key(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    /// Categories and totals in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, total)| *total)
    }

    /// Apply `f` to every total, keeping the order
    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(name, total)| (name.clone(), f(*total)))
                .collect(),
        }
    }

    /// Categories by descending spend. The sort is stable, so equal totals
    /// keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CategorySpend {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut spend = Self::new();
        for (category, amount) in iter {
            let category: String = category.into();
            spend.add(&category, amount);
        }
        spend
    }
}

impl Index<&str> for CategorySpend {
    type Output = f64;

    fn index(&self, category: &str) -> &f64 {
        match self.entries.iter().find(|(name, _)| name == category) {
            Some((_, total)) => total,
            None => panic!("no spend recorded for category {:?}", category),
        }
    }
}

impl Serialize for CategorySpend {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, total) in &self.entries {
            map.serialize_entry(name, total)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategorySpend {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CategorySpendVisitor;

        impl<'de> Visitor<'de> for CategorySpendVisitor {
            type Value = CategorySpend;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category names to amounts")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut spend = CategorySpend::new();
                while let Some((category, amount)) = access.next_entry::<String, f64>()? {
                    spend.add(&category, amount);
                }
                Ok(spend)
            }
        }

        deserializer.deserialize_map(CategorySpendVisitor)
    }
}

/// Financial summary for the analytics dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub mascot_name: String,
    pub total_spend: f64,
    pub total_income: f64,
    pub net_flow: f64,
    pub spend_by_category: CategorySpend,
    pub monthly_burn_rate_projection: f64,
    pub money_left_from_income: f64,
    /// `None` when no spending was observed
    pub days_until_broke_projection: Option<i64>,
    pub period_days: i64,
}

/// A single actionable savings tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub title: String,
    pub suggestion: String,
    pub emoji: String,
}

impl Tip {
    pub fn new(
        title: impl Into<String>,
        suggestion: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            suggestion: suggestion.into(),
            emoji: emoji.into(),
        }
    }
}

/// Tips plus the daily encouragement message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipsReport {
    pub mascot_name: String,
    pub daily_dopamine_boost: String,
    pub personalized_tips: Vec<Tip>,
}
