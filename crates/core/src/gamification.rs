//! Points, levels and badges

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Booking, DashboardData, OwnerAnalytics, Role, Tone, UserGameStats};

/// Points needed to leave each level, indexed by `level - 1`
const NEXT_LEVEL_POINTS: [u32; 5] = [50, 200, 500, 1000, 2000];
const FALLBACK_NEXT_LEVEL_POINTS: u32 = 2000;

/// Bookings per week needed for the Weekly Warrior badge
pub const WEEKLY_BOOKING_GOAL: u32 = 3;

// ============================================================================
// Levels
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub number: u8,
    pub name: &'static str,
    pub tone: Tone,
}

pub fn level_for_points(points: u32) -> Level {
    let (number, name, tone) = match points {
        1000.. => (5, "Sports Legend", Tone::Accent),
        500.. => (4, "Sports Master", Tone::Warning),
        200.. => (3, "Sports Expert", Tone::Info),
        50.. => (2, "Sports Enthusiast", Tone::Success),
        _ => (1, "Beginner", Tone::Neutral),
    };
    Level { number, name, tone }
}

pub fn next_level_points(level: u8) -> u32 {
    usize::from(level)
        .checked_sub(1)
        .and_then(|i| NEXT_LEVEL_POINTS.get(i))
        .copied()
        .unwrap_or(FALLBACK_NEXT_LEVEL_POINTS)
}

/// Share of the next threshold already reached, capped at 100
pub fn progress_percent(points: u32) -> f32 {
    let next = next_level_points(level_for_points(points).number);
    (points as f32 / next as f32 * 100.0).min(100.0)
}

/// Negative once the top threshold is passed
pub fn points_to_next_level(points: u32) -> i64 {
    let next = next_level_points(level_for_points(points).number);
    i64::from(next) - i64::from(points)
}

pub fn weekly_progress_percent(weekly_bookings: u32) -> f32 {
    (weekly_bookings as f32 / WEEKLY_BOOKING_GOAL as f32 * 100.0).min(100.0)
}

// ============================================================================
// Badges
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl BadgeTier {
    pub fn tone(&self) -> Tone {
        match self {
            BadgeTier::Bronze => Tone::Bronze,
            BadgeTier::Silver => Tone::Neutral,
            BadgeTier::Gold => Tone::Warning,
            BadgeTier::Platinum => Tone::Accent,
            // no dedicated styling for diamond
            BadgeTier::Diamond => Tone::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    User,
    Owner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: BadgeKind,
    pub tier: BadgeTier,
    pub points: u32,
}

pub const BADGES: &[BadgeDefinition] = &[
    BadgeDefinition { name: "First Timer", description: "Completed your first booking!", kind: BadgeKind::User, tier: BadgeTier::Bronze, points: 50 },
    BadgeDefinition { name: "Weekly Warrior", description: "Made 3 or more bookings in a week!", kind: BadgeKind::User, tier: BadgeTier::Silver, points: 100 },
    BadgeDefinition { name: "Regular Player", description: "Completed 10 bookings!", kind: BadgeKind::User, tier: BadgeTier::Silver, points: 150 },
    BadgeDefinition { name: "Sports Enthusiast", description: "Completed 25 bookings!", kind: BadgeKind::User, tier: BadgeTier::Gold, points: 250 },
    BadgeDefinition { name: "Big Spender", description: "Spent ₹5000+ on bookings!", kind: BadgeKind::User, tier: BadgeTier::Gold, points: 200 },
    BadgeDefinition { name: "Monthly Champion", description: "Made 10+ bookings in a month!", kind: BadgeKind::User, tier: BadgeTier::Diamond, points: 300 },
    BadgeDefinition { name: "New Business", description: "Got your first box approved!", kind: BadgeKind::Owner, tier: BadgeTier::Bronze, points: 100 },
    BadgeDefinition { name: "Entrepreneur", description: "Have 3 or more approved boxes!", kind: BadgeKind::Owner, tier: BadgeTier::Silver, points: 200 },
    BadgeDefinition { name: "Popular Venue", description: "Received 50+ bookings!", kind: BadgeKind::Owner, tier: BadgeTier::Gold, points: 300 },
    BadgeDefinition { name: "Revenue Milestone", description: "Earned ₹25,000+ in total revenue!", kind: BadgeKind::Owner, tier: BadgeTier::Gold, points: 400 },
    BadgeDefinition { name: "Monthly Success", description: "Received 20+ bookings in a month!", kind: BadgeKind::Owner, tier: BadgeTier::Diamond, points: 500 },
];

pub fn badges_for(kind: BadgeKind) -> impl Iterator<Item = &'static BadgeDefinition> {
    BADGES.iter().filter(move |b| b.kind == kind)
}

pub fn badge(name: &str) -> Option<&'static BadgeDefinition> {
    BADGES.iter().find(|b| b.name == name)
}

/// Confirmed-booking counters for a player
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UserActivity {
    pub total_bookings: u32,
    pub weekly_bookings: u32,
    pub monthly_bookings: u32,
    pub total_spent: f64,
}

/// Approved-box and booking counters for an owner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OwnerActivity {
    pub approved_boxes: u32,
    pub bookings_received: u32,
    pub monthly_bookings: u32,
    pub total_revenue: f64,
}

impl UserActivity {
    /// Names of every user badge these counters qualify for
    pub fn eligible_badges(&self) -> Vec<&'static str> {
        let checks = [
            ("First Timer", self.total_bookings >= 1),
            ("Weekly Warrior", self.weekly_bookings >= WEEKLY_BOOKING_GOAL),
            ("Regular Player", self.total_bookings >= 10),
            ("Sports Enthusiast", self.total_bookings >= 25),
            ("Big Spender", self.total_spent >= 5000.0),
            ("Monthly Champion", self.monthly_bookings >= 10),
        ];
        checks.into_iter().filter(|(_, ok)| *ok).map(|(name, _)| name).collect()
    }

    pub fn points(&self, badges_held: u32) -> u32 {
        self.total_bookings
            .saturating_mul(10)
            .saturating_add(badges_held.saturating_mul(50))
    }
}

impl OwnerActivity {
    pub fn eligible_badges(&self) -> Vec<&'static str> {
        let checks = [
            ("New Business", self.approved_boxes >= 1),
            ("Entrepreneur", self.approved_boxes >= 3),
            ("Popular Venue", self.bookings_received >= 50),
            ("Revenue Milestone", self.total_revenue >= 25_000.0),
            ("Monthly Success", self.monthly_bookings >= 20),
        ];
        checks.into_iter().filter(|(_, ok)| *ok).map(|(name, _)| name).collect()
    }

    pub fn points(&self, badges_held: u32) -> u32 {
        // float-to-int `as` saturates, negatives become 0
        let revenue_points = (self.total_revenue / 100.0) as u32;
        self.approved_boxes
            .saturating_mul(100)
            .saturating_add(self.bookings_received.saturating_mul(5))
            .saturating_add(revenue_points)
            .saturating_add(badges_held.saturating_mul(100))
    }
}

// ============================================================================
// Activity from dashboard payloads
// ============================================================================

/// Days counted as "this week" / "this month", inclusive of today
const WEEK_DAYS: i64 = 7;
const MONTH_DAYS: i64 = 30;

fn is_confirmed(booking: &Booking) -> bool {
    booking.booking_status.eq_ignore_ascii_case("confirmed")
}

impl UserActivity {
    /// Counters over confirmed bookings only; the weekly and monthly windows
    /// start 7 and 30 days before `today`
    pub fn from_bookings(bookings: &[Booking], today: NaiveDate) -> Self {
        let week_start = today - Duration::days(WEEK_DAYS);
        let month_start = today - Duration::days(MONTH_DAYS);
        bookings.iter().filter(|b| is_confirmed(b)).fold(Self::default(), |mut acc, b| {
            acc.total_bookings = acc.total_bookings.saturating_add(1);
            acc.total_spent += b.total_amount;
            if b.date >= week_start {
                acc.weekly_bookings = acc.weekly_bookings.saturating_add(1);
            }
            if b.date >= month_start {
                acc.monthly_bookings = acc.monthly_bookings.saturating_add(1);
            }
            acc
        })
    }
}

impl OwnerActivity {
    /// Approved boxes, bookings and revenue come from the summary; the latest
    /// point of the bookings chart is the current month
    pub fn from_analytics(analytics: &OwnerAnalytics) -> Self {
        let monthly = analytics.bookings_chart_data.last().copied().unwrap_or(0.0);
        Self {
            approved_boxes: analytics.active_boxes_count,
            bookings_received: analytics.total_bookings,
            monthly_bookings: monthly.max(0.0) as u32,
            total_revenue: analytics.total_revenue,
        }
    }
}

/// Badges and points an account has earned
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Standing {
    pub earned_badges: Vec<&'static str>,
    pub stats: UserGameStats,
}

impl Standing {
    pub fn has_badge(&self, name: &str) -> bool {
        self.earned_badges.iter().any(|b| *b == name)
    }

    fn new(kind: BadgeKind, earned_badges: Vec<&'static str>, points: u32, weekly_bookings: Option<u32>) -> Self {
        let badges_earned = earned_badges.len() as u32;
        Self {
            stats: UserGameStats {
                points,
                badges_earned,
                total_achievements: badges_for(kind).count() as u32,
                weekly_bookings,
            },
            earned_badges,
        }
    }

    pub fn for_user(activity: &UserActivity) -> Self {
        let earned = activity.eligible_badges();
        let points = activity.points(earned.len() as u32);
        Self::new(BadgeKind::User, earned, points, Some(activity.weekly_bookings))
    }

    pub fn for_owner(activity: &OwnerActivity) -> Self {
        let earned = activity.eligible_badges();
        let points = activity.points(earned.len() as u32);
        Self::new(BadgeKind::Owner, earned, points, None)
    }
}

impl DashboardData {
    /// Gamification standing for `role`; admins take no part
    pub fn standing(&self, role: Role, today: NaiveDate) -> Option<Standing> {
        match role {
            Role::User => Some(Standing::for_user(&UserActivity::from_bookings(&self.bookings, today))),
            Role::Owner => Some(Standing::for_owner(&OwnerActivity::from_analytics(&self.owner_analytics))),
            Role::Admin => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_thresholds_are_inclusive() {
        assert_eq!(level_for_points(0).number, 1);
        assert_eq!(level_for_points(0).name, "Beginner");
        assert_eq!(level_for_points(49).number, 1);
        assert_eq!(level_for_points(50).number, 2);
        assert_eq!(level_for_points(199).number, 2);
        assert_eq!(level_for_points(200).number, 3);
        assert_eq!(level_for_points(500).number, 4);
        assert_eq!(level_for_points(999).number, 4);
        assert_eq!(level_for_points(1000).number, 5);
        assert_eq!(level_for_points(1000).name, "Sports Legend");
        assert_eq!(level_for_points(u32::MAX).number, 5);
    }

    #[test]
    fn progress_towards_next_level() {
        assert_eq!(next_level_points(1), 50);
        assert_eq!(next_level_points(5), 2000);
        assert_eq!(next_level_points(0), 2000);
        assert_eq!(points_to_next_level(30), 20);
        assert_eq!(points_to_next_level(2500), -500);
        assert!((progress_percent(25) - 50.0).abs() < f32::EPSILON);
        assert!((progress_percent(5000) - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn weekly_progress_caps() {
        assert!((weekly_progress_percent(0)).abs() < f32::EPSILON);
        assert!((weekly_progress_percent(6) - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn catalogue_splits_by_kind() {
        assert_eq!(badges_for(BadgeKind::User).count(), 6);
        assert_eq!(badges_for(BadgeKind::Owner).count(), 5);
        assert_eq!(badge("Big Spender").map(|b| b.tier), Some(BadgeTier::Gold));
        assert!(badge("Nope").is_none());
    }

    #[test]
    fn user_badges_and_points() {
        let fresh = UserActivity::default();
        assert!(fresh.eligible_badges().is_empty());

        let busy = UserActivity { total_bookings: 12, weekly_bookings: 3, monthly_bookings: 9, total_spent: 6000.0 };
        assert_eq!(
            busy.eligible_badges(),
            vec!["First Timer", "Weekly Warrior", "Regular Player", "Big Spender"]
        );
        assert_eq!(busy.points(4), 12 * 10 + 4 * 50);
    }

    #[test]
    fn owner_badges_and_points() {
        let owner = OwnerActivity { approved_boxes: 3, bookings_received: 60, monthly_bookings: 5, total_revenue: 30_050.0 };
        assert_eq!(
            owner.eligible_badges(),
            vec!["New Business", "Entrepreneur", "Popular Venue", "Revenue Milestone"]
        );
        assert_eq!(owner.points(2), 300 + 300 + 300 + 200);
    }

    fn booking(id: i64, date: NaiveDate, amount: f64, status: &str) -> Booking {
        Booking {
            id,
            box_name: "Turf Arena".into(),
            date,
            start_time: "18:00".into(),
            end_time: "19:00".into(),
            total_amount: amount,
            booking_status: status.into(),
        }
    }

    #[test]
    fn user_activity_counts_confirmed_bookings_in_windows() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let bookings = vec![
            booking(1, today, 1200.0, "Confirmed"),
            booking(2, today - Duration::days(7), 800.0, "confirmed"),
            booking(3, today - Duration::days(8), 3000.0, "Confirmed"),
            booking(4, today - Duration::days(31), 500.0, "Confirmed"),
            booking(5, today, 9000.0, "Cancelled"),
            booking(6, today, 9000.0, "Pending"),
        ];
        let activity = UserActivity::from_bookings(&bookings, today);
        assert_eq!(activity.total_bookings, 4);
        assert_eq!(activity.weekly_bookings, 2);
        assert_eq!(activity.monthly_bookings, 3);
        assert!((activity.total_spent - 5500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dashboard_data_drives_user_standing() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let data = DashboardData {
            bookings: (0..3).map(|i| booking(i, today - Duration::days(i), 2000.0, "Confirmed")).collect(),
            ..Default::default()
        };

        let standing = data.standing(Role::User, today).unwrap();
        assert_eq!(standing.earned_badges, vec!["First Timer", "Weekly Warrior", "Big Spender"]);
        assert!(standing.has_badge("Weekly Warrior"));
        assert!(!standing.has_badge("Regular Player"));
        assert_eq!(standing.stats.points, 3 * 10 + 3 * 50);
        assert_eq!(standing.stats.badges_earned, 3);
        assert_eq!(standing.stats.total_achievements, 6);
        assert_eq!(standing.stats.weekly_bookings, Some(3));
    }

    #[test]
    fn dashboard_data_drives_owner_standing() {
        let data = DashboardData {
            owner_analytics: OwnerAnalytics {
                total_revenue: 125_000.0,
                total_bookings: 87,
                active_boxes_count: 1,
                bookings_chart_data: vec![10.0, 16.0],
                ..Default::default()
            },
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();

        let standing = data.standing(Role::Owner, today).unwrap();
        assert_eq!(standing.earned_badges, vec!["New Business", "Popular Venue", "Revenue Milestone"]);
        assert_eq!(standing.stats.points, 100 + 87 * 5 + 1250 + 3 * 100);
        assert_eq!(standing.stats.weekly_bookings, None);
        assert!(data.standing(Role::Admin, today).is_none());
    }

    #[test]
    fn points_saturate_instead_of_overflowing() {
        let user = UserActivity { total_bookings: u32::MAX, ..Default::default() };
        assert_eq!(user.points(u32::MAX), u32::MAX);

        let owner = OwnerActivity {
            approved_boxes: u32::MAX,
            bookings_received: u32::MAX,
            monthly_bookings: 0,
            total_revenue: f64::MAX,
        };
        assert_eq!(owner.points(u32::MAX), u32::MAX);
    }
}
