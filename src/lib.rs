//! 송전선로 성능 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 재사용한다.

pub mod analyzer;
pub mod app;
pub mod config;
pub mod line;
pub mod ui_cli;
pub mod units;
pub mod validation;

pub use analyzer::{AnalysisReport, PerformanceAnalyzer, Section};
