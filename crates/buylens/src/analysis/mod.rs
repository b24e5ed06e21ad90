//! Analysis client: the single remote request and normalization of the raw
//! service payload into a fully-defaulted, strongly-typed result.

pub mod client;
pub mod response;

pub use client::AnalysisClient;
pub use response::{
    classify_payload, AnalysisResponse, AnalysisResult, Confidence, ExplainSection,
    ProductAnalysis, ReviewSignals,
};
