use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Unique identifier for a listed provider.
///
/// Listing services hand out opaque string ids; locally created providers
/// get a UUID v7 rendered as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(pub String);

impl ProviderId {
    /// Create a new time-sortable ProviderId.
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProviderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A service professional listed in the directory.
///
/// Immutable snapshot as returned by the listing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceProvider {
    pub id: ProviderId,
    pub name: String,
    /// Hourly rate in ETH. Never negative.
    pub hourly_rate: f64,
    /// Skill tags; matching treats them as a set.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Current availability. Stored as `status` by listing backends.
    #[serde(alias = "status")]
    pub availability: AvailabilityStatus,
    #[serde(default)]
    pub image_url: String,
}

/// Provider availability.
///
/// - Available: listed in search results
/// - Busy: engaged elsewhere, never listed
/// - Offline: not reachable, never listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Busy,
    Offline,
}

impl AvailabilityStatus {
    /// Statuses that are unconditionally excluded from every listing query.
    pub const UNLISTED: [AvailabilityStatus; 2] =
        [AvailabilityStatus::Busy, AvailabilityStatus::Offline];

    /// Whether a provider in this state may be shown to clients.
    pub fn is_listable(&self) -> bool {
        !Self::UNLISTED.contains(self)
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityStatus::Available => write!(f, "available"),
            AvailabilityStatus::Busy => write!(f, "busy"),
            AvailabilityStatus::Offline => write!(f, "offline"),
        }
    }
}

impl FromStr for AvailabilityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(AvailabilityStatus::Available),
            "busy" => Ok(AvailabilityStatus::Busy),
            "offline" => Ok(AvailabilityStatus::Offline),
            other => Err(format!("invalid availability status: '{other}'")),
        }
    }
}

impl Default for AvailabilityStatus {
    fn default() -> Self {
        AvailabilityStatus::Available
    }
}

/// Request to list a new provider. Only `name` and `hourly_rate` are
/// required -- everything else gets sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProviderRequest {
    /// Keep an externally assigned id; a fresh one is generated otherwise.
    pub id: Option<String>,
    pub name: String,
    pub hourly_rate: f64,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(alias = "status")]
    pub availability: Option<AvailabilityStatus>,
    pub image_url: Option<String>,
}

/// Check an hourly rate read from a listing backend or user input.
///
/// Rates must be finite and non-negative.
pub fn validate_hourly_rate(rate: f64) -> Result<f64, String> {
    if !rate.is_finite() {
        return Err(format!("hourly rate must be a finite number, got {rate}"));
    }
    if rate < 0.0 {
        return Err(format!("hourly rate cannot be negative, got {rate}"));
    }
    Ok(rate)
}
