//! Portal Models
//!
//! Roles, view enumerations, and the display data backing the dashboards.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// User category picked on the auth screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Patient,
    Doctor,
}

impl Role {
    /// Lowercase route segment ("patient" / "doctor")
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
        }
    }

    /// Parse a route segment back into a role
    pub fn from_segment(segment: &str) -> Option<Role> {
        match segment {
            "patient" => Some(Role::Patient),
            "doctor" => Some(Role::Doctor),
            _ => None,
        }
    }

    /// Capitalized display name for headings
    pub fn title(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
        }
    }

    /// Dashboard route for this role
    pub fn dashboard_path(&self) -> String {
        format!("/dashboard/{}", self.as_str())
    }
}

/// Login vs. signup form mode, independent of the selected role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    /// The other mode
    pub fn toggled(&self) -> AuthMode {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    /// Submit button / heading caption
    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }
    }

    /// Caption for the link that switches to the other mode
    pub fn toggle_prompt(&self) -> &'static str {
        match self {
            AuthMode::Login => "Need an account? Sign up",
            AuthMode::Signup => "Already have an account? Login",
        }
    }
}

/// Dashboard sections; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Appointments,
    Video,
    Records,
    Prescriptions,
    Earnings,
    Community,
    Profile,
}

impl DashboardTab {
    /// Sidebar tabs in display order. Profile is reached through the
    /// profile menu only, so it is not listed here.
    pub const SIDEBAR: &'static [DashboardTab] = &[
        DashboardTab::Overview,
        DashboardTab::Appointments,
        DashboardTab::Video,
        DashboardTab::Records,
        DashboardTab::Prescriptions,
        DashboardTab::Earnings,
        DashboardTab::Community,
    ];

    /// Sidebar caption
    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Appointments => "Appointments",
            DashboardTab::Video => "Video Consult",
            DashboardTab::Records => "Medical Records",
            DashboardTab::Prescriptions => "Prescriptions",
            DashboardTab::Earnings => "Earnings",
            DashboardTab::Community => "Community",
            DashboardTab::Profile => "Profile Settings",
        }
    }

    /// Sidebar icon
    pub fn icon(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "👤",
            DashboardTab::Appointments => "📅",
            DashboardTab::Video => "🎥",
            DashboardTab::Records => "📄",
            DashboardTab::Prescriptions => "🩺",
            DashboardTab::Earnings => "💳",
            DashboardTab::Community => "👥",
            DashboardTab::Profile => "⚙️",
        }
    }
}

/// Appointment entry shown on the doctor dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub patient_name: String,
    pub date: NaiveDateTime,
    pub kind: String,
}

/// Upcoming consultation shown on the patient dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingVisit {
    pub id: u32,
    pub doctor_name: String,
    pub date: NaiveDateTime,
    pub kind: String,
}

/// Notification panel entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub age: String,
    pub unread: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_role_segment_round_trip() {
        for role in [Role::Patient, Role::Doctor] {
            assert_eq!(Role::from_segment(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_segment("admin"), None);
        assert_eq!(Role::from_segment(""), None);
        assert_eq!(Role::from_segment("Doctor"), None);
    }

    #[test]
    fn test_dashboard_paths() {
        assert_eq!(Role::Patient.dashboard_path(), "/dashboard/patient");
        assert_eq!(Role::Doctor.dashboard_path(), "/dashboard/doctor");
    }

    #[test]
    fn test_auth_mode_toggle() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Signup);
        assert_eq!(AuthMode::Signup.toggled(), AuthMode::Login);
        assert_eq!(AuthMode::Login.toggled().toggled(), AuthMode::Login);
    }

    #[test]
    fn test_sidebar_tabs() {
        // Seven sidebar entries; Profile only opens from the profile menu
        assert_eq!(DashboardTab::SIDEBAR.len(), 7);
        assert!(!DashboardTab::SIDEBAR.contains(&DashboardTab::Profile));
        assert_eq!(DashboardTab::SIDEBAR[0], DashboardTab::Overview);

        let labels: HashSet<&str> = DashboardTab::SIDEBAR.iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), DashboardTab::SIDEBAR.len());
    }
}
