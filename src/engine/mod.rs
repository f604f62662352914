//! High-level operations — algorithm selection and the analysis engine.

pub mod algorithm;
pub mod analysis;

pub use algorithm::Algorithm;
pub use analysis::{
    AnalysisEngine, AnalysisParams, AnalysisReport, DistanceTable, PathReport, TreeReport,
};
