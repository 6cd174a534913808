use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Relaxed,
    Balanced,
    Active,
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TravelStyle::Relaxed => "relaxed",
            TravelStyle::Balanced => "balanced",
            TravelStyle::Active => "active",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Budget,
    Mid,
    Luxury,
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetLevel::Budget => "budget",
            BudgetLevel::Mid => "mid",
            BudgetLevel::Luxury => "luxury",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn validate(&self) -> Result<(), ApiError> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if end < start => Err(ApiError::validation(
                "End date must not be before start date",
            )),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPreferences {
    pub destination: Option<String>,
    /// Free-text description used when no concrete destination is given.
    pub ideal_destination: Option<String>,
    pub duration: u32,
    #[serde(default)]
    pub interests: Vec<String>,
    pub travel_style: Option<TravelStyle>,
    pub budget: Option<BudgetLevel>,
    pub budget_amount: Option<f64>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub accommodation: Vec<String>,
    #[serde(default)]
    pub transportation: Vec<String>,
    #[serde(default)]
    pub dietary: Vec<String>,
    pub dates: Option<DateRange>,
    pub special_requests: Option<String>,
}

impl TripPreferences {
    /// The concrete destination if present, otherwise `None` even when a
    /// description was supplied.
    pub fn destination_name(&self) -> Option<&str> {
        non_blank(self.destination.as_deref())
    }

    pub fn destination_description(&self) -> Option<&str> {
        non_blank(self.ideal_destination.as_deref())
    }

    /// Whatever the trip will be persisted and titled under.
    pub fn destination_label(&self) -> &str {
        self.destination_name()
            .or_else(|| self.destination_description())
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.destination_name().is_none() && self.destination_description().is_none() {
            return Err(ApiError::validation(
                "A destination or a description of the ideal destination is required",
            ));
        }
        if self.duration == 0 {
            return Err(ApiError::validation("Duration must be at least one day"));
        }
        if let Some(amount) = self.budget_amount {
            if !amount.is_finite() || amount <= 0.0 {
                return Err(ApiError::validation("Budget amount must be a positive number"));
            }
        }
        if let Some(dates) = &self.dates {
            dates.validate()?;
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    #[serde(flatten)]
    pub preferences: TripPreferences,
    #[serde(default)]
    pub save_trip: bool,
}
