mod views;

pub use views::{AnalysisReport, BestDistrictView, DistrictRowView};
