mod flood_report;

pub use flood_report::{CreateFloodReport, FloodHeight, FloodReport, ReportStatus, ReportWindow};
