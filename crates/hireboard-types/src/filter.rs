//! Filter specification and the predicate tree it renders to.
//!
//! A `FilterSpec` is the structured form of the two optional user inputs
//! (free-text query and price bucket). Every spec carries the availability
//! exclusion; there is no way to construct one without it.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::provider::{AvailabilityStatus, ServiceProvider};

/// Lower edge of the medium bucket (inclusive).
pub const MEDIUM_RATE_FLOOR: f64 = 0.3;

/// Lower edge of the high bucket (inclusive).
pub const HIGH_RATE_FLOOR: f64 = 0.6;

/// Coarse hourly-rate range used for filtering.
///
/// Ranges are half-open: low `[0, 0.3)`, medium `[0.3, 0.6)`, high `[0.6, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBucket {
    Low,
    Medium,
    High,
}

impl PriceBucket {
    pub fn label(&self) -> &'static str {
        match self {
            PriceBucket::Low => "Under 0.3 ETH/hour",
            PriceBucket::Medium => "0.3 - 0.6 ETH/hour",
            PriceBucket::High => "Over 0.6 ETH/hour",
        }
    }

    pub fn variants() -> &'static [PriceBucket] {
        &[PriceBucket::Low, PriceBucket::Medium, PriceBucket::High]
    }

    /// `(inclusive floor, exclusive ceiling)` of the bucket.
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            PriceBucket::Low => (None, Some(MEDIUM_RATE_FLOOR)),
            PriceBucket::Medium => (Some(MEDIUM_RATE_FLOOR), Some(HIGH_RATE_FLOOR)),
            PriceBucket::High => (Some(HIGH_RATE_FLOOR), None),
        }
    }

    /// The bucket a given rate falls into.
    pub fn classify(rate: f64) -> PriceBucket {
        if rate < MEDIUM_RATE_FLOOR {
            PriceBucket::Low
        } else if rate < HIGH_RATE_FLOOR {
            PriceBucket::Medium
        } else {
            PriceBucket::High
        }
    }

    fn predicates(&self) -> Vec<Predicate> {
        let (floor, ceiling) = self.bounds();
        floor
            .map(Predicate::RateAtLeast)
            .into_iter()
            .chain(ceiling.map(Predicate::RateBelow))
            .collect()
    }
}

impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceBucket::Low => write!(f, "low"),
            PriceBucket::Medium => write!(f, "medium"),
            PriceBucket::High => write!(f, "high"),
        }
    }
}

impl FromStr for PriceBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(PriceBucket::Low),
            "medium" => Ok(PriceBucket::Medium),
            "high" => Ok(PriceBucket::High),
            other => Err(format!(
                "invalid price bucket: '{other}' (expected low, medium or high)"
            )),
        }
    }
}

/// A single condition (or boolean group of conditions) over a provider.
///
/// Text comparisons fold ASCII case only, which is what SQLite's `LIKE`
/// and `lower()` do, so in-memory and SQL evaluation agree.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    /// Case-insensitive substring match on `name`.
    NameContains(String),
    /// Case-insensitive membership test on `skills`.
    SkillsContain(String),
    StatusNotIn(Vec<AvailabilityStatus>),
    RateAtLeast(f64),
    RateBelow(f64),
}

impl Predicate {
    /// Evaluate this predicate against a provider.
    pub fn matches(&self, provider: &ServiceProvider) -> bool {
        match self {
            Predicate::And(all) => all.iter().all(|p| p.matches(provider)),
            Predicate::Or(any) => any.iter().any(|p| p.matches(provider)),
            Predicate::NameContains(needle) => provider
                .name
                .to_ascii_lowercase()
                .contains(&needle.to_ascii_lowercase()),
            Predicate::SkillsContain(skill) => provider
                .skills
                .iter()
                .any(|s| s.eq_ignore_ascii_case(skill)),
            Predicate::StatusNotIn(excluded) => !excluded.contains(&provider.availability),
            Predicate::RateAtLeast(floor) => provider.hourly_rate >= *floor,
            Predicate::RateBelow(ceiling) => provider.hourly_rate < *ceiling,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::And(all) => {
                for (i, p) in all.iter().enumerate() {
                    if i > 0 {
                        write!(f, " AND ")?;
                    }
                    match p {
                        Predicate::Or(_) | Predicate::And(_) => write!(f, "({p})")?,
                        _ => write!(f, "{p}")?,
                    }
                }
                Ok(())
            }
            Predicate::Or(any) => {
                for (i, p) in any.iter().enumerate() {
                    if i > 0 {
                        write!(f, " OR ")?;
                    }
                    match p {
                        Predicate::Or(_) | Predicate::And(_) => write!(f, "({p})")?,
                        _ => write!(f, "{p}")?,
                    }
                }
                Ok(())
            }
            Predicate::NameContains(q) => write!(f, "name ilike \"%{q}%\""),
            Predicate::SkillsContain(q) => write!(f, "skills contains \"{q}\""),
            Predicate::StatusNotIn(statuses) => {
                let list: Vec<String> = statuses.iter().map(|s| s.to_string()).collect();
                write!(f, "status not in {{{}}}", list.join(","))
            }
            Predicate::RateAtLeast(v) => write!(f, "hourly_rate >= {v}"),
            Predicate::RateBelow(v) => write!(f, "hourly_rate < {v}"),
        }
    }
}

/// Structured search criteria for one listing query.
///
/// Value object: rebuilt per query, compared by value. The availability
/// exclusion is installed by the constructor and cannot be removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    text_query: Option<String>,
    price_bucket: Option<PriceBucket>,
    excluded_statuses: Vec<AvailabilityStatus>,
}

impl FilterSpec {
    /// Create a spec from already-normalized inputs.
    ///
    /// An empty `text_query` is treated as absent.
    pub fn new(text_query: Option<String>, price_bucket: Option<PriceBucket>) -> Self {
        Self {
            text_query: text_query.filter(|q| !q.is_empty()),
            price_bucket,
            excluded_statuses: AvailabilityStatus::UNLISTED.to_vec(),
        }
    }

    pub fn text_query(&self) -> Option<&str> {
        self.text_query.as_deref()
    }

    pub fn price_bucket(&self) -> Option<PriceBucket> {
        self.price_bucket
    }

    pub fn excluded_statuses(&self) -> &[AvailabilityStatus] {
        &self.excluded_statuses
    }

    /// Render the whole filter as one conjunction.
    ///
    /// Order: text group, rate bounds, availability exclusion.
    pub fn predicate(&self) -> Predicate {
        let mut all = Vec::new();

        if let Some(q) = &self.text_query {
            all.push(Predicate::Or(vec![
                Predicate::NameContains(q.clone()),
                Predicate::SkillsContain(q.clone()),
            ]));
        }

        if let Some(bucket) = self.price_bucket {
            all.extend(bucket.predicates());
        }

        all.push(Predicate::StatusNotIn(self.excluded_statuses.clone()));

        Predicate::And(all)
    }

    /// Evaluate the filter against a provider in memory.
    pub fn matches(&self, provider: &ServiceProvider) -> bool {
        self.predicate().matches(provider)
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.predicate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderId;

    fn provider(name: &str, rate: f64, skills: &[&str], availability: AvailabilityStatus) -> ServiceProvider {
        ServiceProvider {
            id: ProviderId::new(),
            name: name.to_string(),
            hourly_rate: rate,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            availability,
            image_url: String::new(),
        }
    }

    #[test]
    fn test_bucket_boundaries_are_half_open() {
        assert_eq!(PriceBucket::classify(0.0), PriceBucket::Low);
        assert_eq!(PriceBucket::classify(0.2999), PriceBucket::Low);
        assert_eq!(PriceBucket::classify(0.3), PriceBucket::Medium);
        assert_eq!(PriceBucket::classify(0.5999), PriceBucket::Medium);
        assert_eq!(PriceBucket::classify(0.6), PriceBucket::High);
        assert_eq!(PriceBucket::classify(4.0), PriceBucket::High);
    }

    #[test]
    fn test_bucket_predicates_agree_with_classify() {
        for rate in [0.0, 0.1, 0.3, 0.45, 0.6, 0.61, 2.0] {
            for bucket in PriceBucket::variants() {
                let spec = FilterSpec::new(None, Some(*bucket));
                let p = provider("x", rate, &[], AvailabilityStatus::Available);
                assert_eq!(
                    spec.matches(&p),
                    PriceBucket::classify(rate) == *bucket,
                    "rate {rate} bucket {bucket}"
                );
            }
        }
    }

    #[test]
    fn test_bucket_parse_and_labels() {
        assert_eq!("Medium".parse::<PriceBucket>().unwrap(), PriceBucket::Medium);
        assert!("cheap".parse::<PriceBucket>().is_err());
        assert_eq!(PriceBucket::Low.label(), "Under 0.3 ETH/hour");
        assert_eq!(PriceBucket::Medium.label(), "0.3 - 0.6 ETH/hour");
        assert_eq!(PriceBucket::High.label(), "Over 0.6 ETH/hour");
    }

    #[test]
    fn test_empty_spec_only_excludes_unlisted() {
        let spec = FilterSpec::default();
        assert_eq!(
            spec.predicate(),
            Predicate::And(vec![Predicate::StatusNotIn(vec![
                AvailabilityStatus::Busy,
                AvailabilityStatus::Offline,
            ])])
        );
        assert_eq!(spec.to_string(), "status not in {busy,offline}");
    }

    #[test]
    fn test_empty_text_is_absent() {
        let spec = FilterSpec::new(Some(String::new()), None);
        assert_eq!(spec.text_query(), None);
    }

    #[test]
    fn test_display_full_spec() {
        let spec = FilterSpec::new(Some("react".to_string()), Some(PriceBucket::Medium));
        assert_eq!(
            spec.to_string(),
            "(name ilike \"%react%\" OR skills contains \"react\") AND hourly_rate >= 0.3 AND hourly_rate < 0.6 AND status not in {busy,offline}"
        );
    }

    #[test]
    fn test_text_matches_name_substring_or_exact_skill() {
        let spec = FilterSpec::new(Some("REACT".to_string()), None);

        let by_name = provider("Reactive Rita", 0.2, &["vue"], AvailabilityStatus::Available);
        let by_skill = provider("Bob", 0.2, &["React"], AvailabilityStatus::Available);
        let partial_skill = provider("Carol", 0.2, &["react-native"], AvailabilityStatus::Available);

        assert!(spec.matches(&by_name));
        assert!(spec.matches(&by_skill));
        assert!(!spec.matches(&partial_skill));
    }

    #[test]
    fn test_unlisted_never_match() {
        let spec = FilterSpec::new(Some("ada".to_string()), Some(PriceBucket::Low));
        let busy = provider("Ada", 0.1, &[], AvailabilityStatus::Busy);
        let offline = provider("Ada", 0.1, &[], AvailabilityStatus::Offline);
        let available = provider("Ada", 0.1, &[], AvailabilityStatus::Available);

        assert!(!spec.matches(&busy));
        assert!(!spec.matches(&offline));
        assert!(spec.matches(&available));
    }

    #[test]
    fn test_high_bucket_has_no_ceiling() {
        assert_eq!(PriceBucket::High.bounds(), (Some(HIGH_RATE_FLOOR), None));
        assert_eq!(PriceBucket::Low.bounds(), (None, Some(MEDIUM_RATE_FLOOR)));
    }
}
