//! Orchestration seam between the data loader and the core computations.

pub mod engine;
pub mod input;
pub mod loader;

pub use engine::TechnicalAnalyzer;
pub use input::AnalysisInput;
pub use loader::load_analysis_input;
