pub mod export;
mod insights;
mod summary;

pub use export::ExportError;
pub use insights::{InsightGenerator, InsightReport};
pub use summary::BatchStatistics;
