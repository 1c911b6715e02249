//! Status → colour tone mapping for boxes, bookings and badges

/// Semantic colour family. The `ui` module turns these into egui colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Accent,
    Bronze,
    Neutral,
}

impl Tone {
    /// Foreground RGB (the "-700/-800" shade)
    pub fn foreground(&self) -> [u8; 3] {
        match self {
            Tone::Success => [22, 101, 52],
            Tone::Warning => [133, 77, 14],
            Tone::Danger => [153, 27, 27],
            Tone::Info => [29, 78, 216],
            Tone::Accent => [126, 34, 206],
            Tone::Bronze => [194, 65, 12],
            Tone::Neutral => [55, 65, 81],
        }
    }

    /// Background RGB (the "-100" shade)
    pub fn background(&self) -> [u8; 3] {
        match self {
            Tone::Success => [220, 252, 231],
            Tone::Warning => [254, 249, 195],
            Tone::Danger => [254, 226, 226],
            Tone::Info => [219, 234, 254],
            Tone::Accent => [243, 232, 255],
            Tone::Bronze => [255, 237, 213],
            Tone::Neutral => [243, 244, 246],
        }
    }
}

// ============================================================================
// Box approval status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxStatus {
    Approved,
    Pending,
    Rejected,
    Other,
}

impl BoxStatus {
    /// Case-insensitive; anything unrecognised (including empty) is `Other`
    pub fn parse(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "approved" => BoxStatus::Approved,
            "pending" => BoxStatus::Pending,
            "rejected" => BoxStatus::Rejected,
            _ => BoxStatus::Other,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            BoxStatus::Approved => Tone::Success,
            BoxStatus::Pending => Tone::Warning,
            BoxStatus::Rejected => Tone::Danger,
            BoxStatus::Other => Tone::Neutral,
        }
    }

    pub fn icon(&self) -> StatusIcon {
        match self {
            BoxStatus::Approved => StatusIcon::Check,
            BoxStatus::Rejected => StatusIcon::Cross,
            BoxStatus::Pending | BoxStatus::Other => StatusIcon::Clock,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Check,
    Clock,
    Cross,
}

/// Capitalise the first letter of a raw status for display
pub fn status_label(status: &str) -> String {
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Booking status
// ============================================================================

pub fn booking_status_tone(status: &str) -> Tone {
    if status.eq_ignore_ascii_case("cancelled") {
        Tone::Danger
    } else {
        Tone::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_status_parse_ignores_case() {
        assert_eq!(BoxStatus::parse("Approved"), BoxStatus::Approved);
        assert_eq!(BoxStatus::parse("PENDING"), BoxStatus::Pending);
        assert_eq!(BoxStatus::parse("rejected"), BoxStatus::Rejected);
        assert_eq!(BoxStatus::parse(""), BoxStatus::Other);
        assert_eq!(BoxStatus::parse("archived"), BoxStatus::Other);
    }

    #[test]
    fn box_status_tones_and_icons() {
        assert_eq!(BoxStatus::Approved.tone(), Tone::Success);
        assert_eq!(BoxStatus::Pending.tone(), Tone::Warning);
        assert_eq!(BoxStatus::Rejected.tone(), Tone::Danger);
        assert_eq!(BoxStatus::Other.tone(), Tone::Neutral);
        assert_eq!(BoxStatus::Other.icon(), StatusIcon::Clock);
        assert_eq!(BoxStatus::Rejected.icon(), StatusIcon::Cross);
    }

    #[test]
    fn booking_status_only_cancelled_is_red() {
        assert_eq!(booking_status_tone("Cancelled"), Tone::Danger);
        assert_eq!(booking_status_tone("Confirmed"), Tone::Success);
        assert_eq!(booking_status_tone("Pending"), Tone::Success);
    }

    #[test]
    fn labels_are_capitalised() {
        assert_eq!(status_label("pending"), "Pending");
        assert_eq!(status_label(""), "");
    }
}
