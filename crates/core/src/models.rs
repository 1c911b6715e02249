//! Shared data models used across all platforms

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;

// ============================================================================
// Identity
// ============================================================================

/// Account role. Decides which dashboard a signed-in user lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Owner,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Owner, Role::Admin];

    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "Player",
            Role::Owner => "Box Owner",
            Role::Admin => "Administrator",
        }
    }

    pub fn dashboard_title(&self) -> &'static str {
        match self {
            Role::User => "My Dashboard",
            Role::Owner => "Owner Dashboard",
            Role::Admin => "Admin Dashboard",
        }
    }
}

/// Profile of the signed-in user.
///
/// Serialized in camelCase because this is the exact shape kept in local
/// storage under the `user` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub avatar: Option<String>,

    // Owner-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_boxes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<u64>,

    // Admin-only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
}

impl UserIdentity {
    /// Initials for the avatar placeholder ("John Player" -> "JP")
    pub fn initials(&self) -> String {
        let initials: String = self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            self.email.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()
        } else {
            initials
        }
    }
}

/// Email/password pair submitted by the login form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

/// Fields collected by the signup form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SignupProfile {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

// ============================================================================
// Facilities and bookings
// ============================================================================

/// A rentable sports facility listing, as delivered by the listings API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxDetails {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub location: String,
    /// Price per hour in rupees
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Absolute URL or a path relative to the API host
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sports: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub rules: Option<String>,
    #[serde(default)]
    pub contact_info: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl BoxDetails {
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() || self.longitude.is_some()
    }
}

/// A booking row shown in "recent bookings" lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub box_name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    pub total_amount: f64,
    #[serde(default = "default_booking_status")]
    pub booking_status: String,
}

fn default_booking_status() -> String {
    "Confirmed".to_string()
}

// ============================================================================
// Analytics payloads
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportShare {
    pub sport: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySpend {
    pub month: String,
    pub total_spent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayActivity {
    pub day_of_week: String,
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakHour {
    pub hour_range: String,
    pub percentage: f64,
}

/// Player analytics returned by the user dashboard endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserAnalytics {
    #[serde(default)]
    pub sport_distribution: Vec<SportShare>,
    #[serde(default)]
    pub monthly_spending: Vec<MonthlySpend>,
    #[serde(default)]
    pub activity_by_day: Vec<DayActivity>,
    #[serde(default)]
    pub peak_booking_hours: Vec<PeakHour>,
}

/// Owner dashboard summary
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OwnerAnalytics {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_bookings: u32,
    #[serde(default)]
    pub active_boxes_count: u32,
    #[serde(default)]
    pub pending_boxes_count: u32,
    #[serde(default)]
    pub rejected_boxes_count: u32,
    #[serde(default)]
    pub revenue_chart_labels: Vec<String>,
    #[serde(default)]
    pub revenue_chart_data: Vec<f64>,
    #[serde(default)]
    pub bookings_chart_labels: Vec<String>,
    #[serde(default)]
    pub bookings_chart_data: Vec<f64>,
    #[serde(default)]
    pub sports_distribution: BTreeMap<String, f64>,
}

/// Gamification counters for the points display
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserGameStats {
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub badges_earned: u32,
    #[serde(default)]
    pub total_achievements: u32,
    #[serde(default)]
    pub weekly_bookings: Option<u32>,
}

// ============================================================================
// Dashboard payload
// ============================================================================

/// Everything the dashboards render, delivered as one document. Badges and
/// points are derived from it rather than stored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub boxes: Vec<BoxDetails>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub user_analytics: UserAnalytics,
    #[serde(default)]
    pub owner_analytics: OwnerAnalytics,
}

impl DashboardData {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn find_box(&self, id: i64) -> Option<&BoxDetails> {
        self.boxes.iter().find(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_round_trips_in_storage_shape() {
        let json = r#"{"id":2,"email":"owner@demo.com","name":"Sarah Owner","role":"owner",
            "phone":"+91 98765 43211","location":"Delhi, NCR","avatar":null,
            "businessName":"Elite Sports Complex","totalBoxes":3,"totalRevenue":125000}"#;
        let user: UserIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Owner);
        assert_eq!(user.business_name.as_deref(), Some("Elite Sports Complex"));
        assert_eq!(user.total_revenue, Some(125_000));
        assert!(user.permissions.is_empty());

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["businessName"], "Elite Sports Complex");
        assert!(value.get("permissions").is_none());
    }

    #[test]
    fn identity_missing_role_defaults_to_user() {
        let json = r#"{"id":7,"email":"a@b.c","name":"A"}"#;
        let user: UserIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.phone, "");
    }

    #[test]
    fn initials_fall_back_to_email() {
        let mut user: UserIdentity = serde_json::from_str(r#"{"id":1,"email":"zed@x.io","name":"John Player"}"#).unwrap();
        assert_eq!(user.initials(), "JP");
        user.name = String::new();
        assert_eq!(user.initials(), "Z");
    }

    #[test]
    fn box_details_tolerates_sparse_payloads() {
        let b: BoxDetails = serde_json::from_str(r#"{"id":4,"name":"Turf Arena"}"#).unwrap();
        assert!(b.sports.is_empty());
        assert!(!b.has_coordinates());
        assert_eq!(b.avg_rating, None);
    }

    #[test]
    fn bundled_demo_data_parses() {
        let data = DashboardData::from_json(include_str!("../../../assets/demo_data.json")).unwrap();
        assert!(!data.boxes.is_empty());
        assert!(data.find_box(data.boxes[0].id).is_some());
        assert!(!data.bookings.is_empty());
        assert!(!data.owner_analytics.sports_distribution.is_empty());
    }

    #[test]
    fn dashboard_data_rejects_garbage() {
        let err = DashboardData::from_json("not json").unwrap_err();
        assert!(matches!(err, crate::BookMyBoxError::InvalidData(_)));
    }
}
