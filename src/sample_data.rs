//! Sample Data
//!
//! Fixed in-memory fixtures backing the dashboard views. Nothing here is
//! persisted; the portal has no backend.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{Appointment, Notification, UpcomingVisit};

fn timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, mi, 0))
        .expect("fixture timestamp should be valid")
}

/// Appointments shown on the doctor dashboard
pub fn doctor_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            patient_name: "John Smith".to_string(),
            date: timestamp(2024, 3, 25, 14, 30),
            kind: "Video Consultation".to_string(),
        },
        Appointment {
            id: 2,
            patient_name: "Mary Johnson".to_string(),
            date: timestamp(2024, 3, 25, 16, 0),
            kind: "In-Person".to_string(),
        },
    ]
}

/// Upcoming consultations shown on the patient dashboard
pub fn patient_visits() -> Vec<UpcomingVisit> {
    vec![
        UpcomingVisit {
            id: 1,
            doctor_name: "Dr. Anita Rao".to_string(),
            date: timestamp(2024, 3, 26, 10, 0),
            kind: "Video Consultation".to_string(),
        },
        UpcomingVisit {
            id: 2,
            doctor_name: "Dr. Vikram Mehta".to_string(),
            date: timestamp(2024, 3, 28, 15, 30),
            kind: "In-Person".to_string(),
        },
    ]
}

/// Entries for the notifications panel
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            message: "New appointment scheduled at 2:30 PM".to_string(),
            age: "1 hour ago".to_string(),
            unread: true,
        },
        Notification {
            message: "Patient message received".to_string(),
            age: "2 hours ago".to_string(),
            unread: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctor_appointments_fixture() {
        let appointments = doctor_appointments();
        assert_eq!(appointments.len(), 2);
        assert_eq!(appointments[0].patient_name, "John Smith");
        assert_eq!(appointments[1].kind, "In-Person");
        // Listed in chronological order
        assert!(appointments[0].date < appointments[1].date);
    }

    #[test]
    fn test_notifications_fixture() {
        let entries = notifications();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].unread);
        assert!(!entries[1].unread);
    }
}
