pub mod aggregator;
pub mod error;
pub mod executor;
pub mod normalizer;
pub mod renderer;

pub use aggregator::{aggregate, AggregatedReport, SELLER_ARTICLE_COLUMN};
pub use error::ReportError;
pub use executor::BuildReportExecutor;
pub use normalizer::{normalize, ExclusionSet, ParsedLine};
pub use renderer::render;
