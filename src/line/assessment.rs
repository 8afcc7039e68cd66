use serde::{Deserialize, Serialize};
use std::fmt;

/// 전압변동률 평가 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegulationQuality {
    /// 3 % 미만
    Excellent,
    /// 3~5 %
    Acceptable,
    /// 5 % 이상
    Poor,
}

impl RegulationQuality {
    pub fn from_regulation(regulation_pct: f64) -> Self {
        if regulation_pct < 3.0 {
            RegulationQuality::Excellent
        } else if regulation_pct < 5.0 {
            RegulationQuality::Acceptable
        } else {
            RegulationQuality::Poor
        }
    }
}

impl fmt::Display for RegulationQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegulationQuality::Excellent => write!(f, "우수 (< 3%)"),
            RegulationQuality::Acceptable => write!(f, "양호 (3-5%)"),
            RegulationQuality::Poor => write!(f, "미흡 (> 5%)"),
        }
    }
}

/// 송전 효율 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EfficiencyBand {
    High,
    Moderate,
    Low,
}

impl EfficiencyBand {
    /// 95 % 이상 High, 90 % 이상 Moderate.
    pub fn from_efficiency(efficiency_pct: f64) -> Self {
        if efficiency_pct >= 95.0 {
            EfficiencyBand::High
        } else if efficiency_pct >= 90.0 {
            EfficiencyBand::Moderate
        } else {
            EfficiencyBand::Low
        }
    }
}

impl fmt::Display for EfficiencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EfficiencyBand::High => write!(f, "높음 (≥ 95%)"),
            EfficiencyBand::Moderate => write!(f, "보통 (90-95%)"),
            EfficiencyBand::Low => write!(f, "낮음 (< 90%)"),
        }
    }
}
