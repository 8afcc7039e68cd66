//! 세 모델을 한 번에 실행해 하나의 보고서로 묶고, 분석 이력을 관리한다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt::Display;
use tracing::{debug, warn};

use crate::line::{
    compute_corona, compute_power_loss, compute_regulation, CoronaInput, CoronaResult,
    EfficiencyBand, EnvironmentalConditions, LineParameters, LossResult, OperatingConditions,
    PowerLossInput, RegulationInput, RegulationQuality, RegulationResult,
};

/// 이력 보관 개수 기본값.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// 보고서 한 섹션의 결과. 실패 시 원인 메시지만 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Section<T> {
    Success(T),
    Failure { reason: String },
}

impl<T> Section<T> {
    pub fn success(&self) -> Option<&T> {
        match self {
            Section::Success(v) => Some(v),
            Section::Failure { .. } => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Section::Success(_) => None,
            Section::Failure { reason } => Some(reason),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Section::Success(_))
    }
}

impl<T, E: Display> From<Result<T, E>> for Section<T> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(v) => Section::Success(v),
            Err(e) => Section::Failure {
                reason: e.to_string(),
            },
        }
    }
}

/// 1회 분석 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub losses: Section<LossResult>,
    pub regulation: Section<RegulationResult>,
    pub corona: Section<CoronaResult>,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisReport {
    /// 세 섹션이 모두 성공했는지.
    pub fn is_complete(&self) -> bool {
        self.losses.is_success() && self.regulation.is_success() && self.corona.is_success()
    }

    pub fn regulation_quality(&self) -> Option<RegulationQuality> {
        self.regulation
            .success()
            .map(|r| RegulationQuality::from_regulation(r.regulation_pct))
    }

    pub fn efficiency_band(&self) -> Option<EfficiencyBand> {
        self.losses
            .success()
            .map(|l| EfficiencyBand::from_efficiency(l.efficiency_pct))
    }

    /// 수전 전력 중 손실을 뺀 전달 비율 [%].
    pub fn transmitted_power_pct(&self) -> Option<f64> {
        self.losses.success().map(|l| 100.0 - l.losses_pct)
    }
}

/// 선로 성능 분석기. 분석 이력을 최근 `history_limit`개까지 보관한다.
#[derive(Debug, Clone)]
pub struct PerformanceAnalyzer {
    history: VecDeque<AnalysisReport>,
    history_limit: usize,
}

impl Default for PerformanceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceAnalyzer {
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// 이력 상한을 지정해 만든다. 0이면 이력을 남기지 않는다.
    pub fn with_history_limit(history_limit: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(history_limit.min(DEFAULT_HISTORY_LIMIT)),
            history_limit,
        }
    }

    /// 손실, 전압변동률, 코로나를 각각 독립적으로 계산해 보고서를 만들고 이력에 추가한다.
    pub fn analyze(
        &mut self,
        line: &LineParameters,
        operating: &OperatingConditions,
        environmental: &EnvironmentalConditions,
    ) -> AnalysisReport {
        let losses = Section::Success(compute_power_loss(&PowerLossInput {
            voltage_kv: operating.reception_voltage_kv,
            power_mva: operating.reception_power_mva,
            resistance_ohm: line.resistance_ohm,
        }));

        let regulation: Section<RegulationResult> = compute_regulation(&RegulationInput {
            resistance_ohm: line.resistance_ohm,
            inductance_h: line.inductance_h,
            capacitance_f: line.capacitance_f,
            length_km: line.length_km,
            receiving_voltage_kv: operating.reception_voltage_kv,
            receiving_power_mva: operating.reception_power_mva,
            power_factor: operating.power_factor,
            lagging: operating.lagging,
        })
        .into();

        let corona: Section<CoronaResult> = compute_corona(
            &CoronaInput::new(
                operating.reception_voltage_kv,
                line.conductor_radius_cm,
                line.gmd_cm,
            )
            .with_environment(
                environmental.roughness_factor,
                environmental.temperature_c,
                environmental.pressure_atm,
            ),
        )
        .into();

        if let Some(reason) = regulation.failure() {
            warn!(%reason, "전압변동률 섹션 실패");
        }
        if let Some(reason) = corona.failure() {
            warn!(%reason, "코로나 섹션 실패");
        }

        let report = AnalysisReport {
            losses,
            regulation,
            corona,
            timestamp: Utc::now(),
        };
        debug!(
            voltage_kv = operating.reception_voltage_kv,
            power_mva = operating.reception_power_mva,
            complete = report.is_complete(),
            "선로 분석 완료"
        );
        self.record(report.clone());
        report
    }

    fn record(&mut self, report: AnalysisReport) {
        if self.history_limit == 0 {
            return;
        }
        while self.history.len() >= self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(report);
    }

    /// 오래된 것부터 최근 순으로 이력을 돌려준다.
    pub fn history(&self) -> impl Iterator<Item = &AnalysisReport> {
        self.history.iter()
    }

    pub fn latest(&self) -> Option<&AnalysisReport> {
        self.history.back()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }
}
