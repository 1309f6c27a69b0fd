pub mod client;

pub use client::AnalysisClientImpl;
