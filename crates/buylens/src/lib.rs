pub mod analysis;
pub mod config;
pub mod context;
pub mod decision;
pub mod error;
pub mod pipeline;
pub mod sanitize;
pub mod surface;

pub use analysis::{AnalysisClient, AnalysisResult, Confidence, ProductAnalysis, ReviewSignals};
pub use config::{load_settings, load_settings_from_str, Settings};
pub use context::{ContextValidator, Eligibility, TabQuery};
pub use decision::{
    render, BadgeCategory, BarState, Bars, Decision, PresentationState, ProductView,
};
pub use error::{BuylensError, ClientError, ConfigError, Result};
pub use pipeline::{Analyzer, InvocationTracker};
pub use surface::{apply, PopupDocument, Surface};
