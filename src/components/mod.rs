//! UI Components
//!
//! Leptos components for the portal screens.

mod appointments_tab;
mod auth_forms;
mod auth_page;
mod community_tab;
mod dashboard_card;
mod doctor_dashboard;
mod earnings_tab;
mod overview_tab;
mod patient_dashboard;
mod prescriptions_tab;
mod profile_tab;
mod records_tab;
mod video_consult;

pub use appointments_tab::AppointmentsTab;
pub use auth_page::AuthPage;
pub use community_tab::CommunityTab;
pub use dashboard_card::{DashboardCard, StatRow};
pub use doctor_dashboard::DoctorDashboard;
pub use earnings_tab::EarningsTab;
pub use overview_tab::OverviewTab;
pub use patient_dashboard::PatientDashboard;
pub use prescriptions_tab::PrescriptionsTab;
pub use profile_tab::ProfileTab;
pub use records_tab::RecordsTab;
pub use video_consult::VideoConsult;
