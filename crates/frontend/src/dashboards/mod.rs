pub mod d001_commission_report;

pub use d001_commission_report::ui::CommissionReportDashboard;
