pub mod dashboard;
pub mod settings_summary;

pub use dashboard::CommissionReportDashboard;
