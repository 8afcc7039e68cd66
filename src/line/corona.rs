use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{ensure_finite, ComputationError};

/// Peek 식 경험 상수 [kV/cm] (실효값 기준 21.1)
const PEEK_GRADIENT_KV_PER_CM: f64 = 21.1;
/// 표준 대기압 [cmHg]
const STANDARD_PRESSURE_CMHG: f64 = 76.0;

/// 코로나 판정 입력.
#[derive(Debug, Clone, Copy)]
pub struct CoronaInput {
    /// 공칭 선간 전압 [kV]
    pub nominal_voltage_kv: f64,
    /// 도체 반경 [cm]
    pub conductor_radius_cm: f64,
    /// 기하평균거리 [cm]. 도체 반경보다 커야 한다.
    pub gmd_cm: f64,
    /// 표면 거칠기 계수
    pub roughness_factor: f64,
    /// 기온 [°C]
    pub temperature_c: f64,
    /// 기압 [atm]
    pub pressure_atm: f64,
}

impl CoronaInput {
    /// 거칠기 0.85, 25 °C, 1 atm 기본 대기 조건으로 입력을 만든다.
    pub fn new(nominal_voltage_kv: f64, conductor_radius_cm: f64, gmd_cm: f64) -> Self {
        Self {
            nominal_voltage_kv,
            conductor_radius_cm,
            gmd_cm,
            roughness_factor: 0.85,
            temperature_c: 25.0,
            pressure_atm: 1.0,
        }
    }

    pub fn with_environment(
        mut self,
        roughness_factor: f64,
        temperature_c: f64,
        pressure_atm: f64,
    ) -> Self {
        self.roughness_factor = roughness_factor;
        self.temperature_c = temperature_c;
        self.pressure_atm = pressure_atm;
        self
    }
}

/// 코로나 위험 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// 안전 여유율 [%]로 등급을 정한다. 20 초과 Low, 10 초과 Medium, 나머지 High.
    pub fn from_margin(safety_margin_pct: f64) -> Self {
        if safety_margin_pct > 20.0 {
            RiskLevel::Low
        } else if safety_margin_pct > 10.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskLevel::Low => "코로나 방전 가능성 낮음. 현 설계 유지 가능.",
            RiskLevel::Medium => "기상 조건(기압·습도·온도) 변화를 모니터링할 것.",
            RiskLevel::High => "코로나 방전 가능성 높음. 도체 반경 확대나 복도체 적용을 검토할 것.",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "위험 낮음",
            RiskLevel::Medium => "위험 보통",
            RiskLevel::High => "위험 높음",
        };
        write!(f, "{label}")
    }
}

/// 코로나 판정 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoronaResult {
    /// 운전 상전압 [kV]
    pub operating_voltage_phase_kv: f64,
    /// 임계 파괴 전압(상) [kV]
    pub critical_disruptive_voltage_kv: f64,
    /// 상대 공기밀도 δ
    pub air_density_factor: f64,
    pub corona_probable: bool,
    /// (Vd - V_op) / V_op [%]
    pub safety_margin_pct: f64,
    pub risk_level: RiskLevel,
    pub recommendation: String,
}

/// 상대 공기밀도 δ = 3.92·b / (273 + t), b는 cmHg.
pub fn air_density_factor(temperature_c: f64, pressure_atm: f64) -> f64 {
    3.92 * (STANDARD_PRESSURE_CMHG * pressure_atm) / (273.0 + temperature_c)
}

/// Peek 식 임계 파괴 전압(상, kV).
pub fn critical_disruptive_voltage_kv(
    roughness_factor: f64,
    air_density: f64,
    conductor_radius_cm: f64,
    gmd_cm: f64,
) -> f64 {
    PEEK_GRADIENT_KV_PER_CM
        * roughness_factor
        * air_density
        * conductor_radius_cm
        * (gmd_cm / conductor_radius_cm).ln()
}

/// 코로나 발생 가능성과 위험 등급을 판정한다.
pub fn compute_corona(input: &CoronaInput) -> Result<CoronaResult, ComputationError> {
    let delta = air_density_factor(input.temperature_c, input.pressure_atm);
    let vd = critical_disruptive_voltage_kv(
        input.roughness_factor,
        delta,
        input.conductor_radius_cm,
        input.gmd_cm,
    );
    let v_op = input.nominal_voltage_kv / 3f64.sqrt();
    let safety_margin_pct = (vd - v_op) / v_op * 100.0;

    ensure_finite(
        "코로나",
        &[
            ("air_density_factor", delta),
            ("critical_disruptive_voltage_kv", vd),
            ("safety_margin_pct", safety_margin_pct),
        ],
    )?;

    let risk_level = RiskLevel::from_margin(safety_margin_pct);
    Ok(CoronaResult {
        operating_voltage_phase_kv: v_op,
        critical_disruptive_voltage_kv: vd,
        air_density_factor: delta,
        corona_probable: v_op > vd,
        safety_margin_pct,
        risk_level,
        recommendation: risk_level.recommendation().to_string(),
    })
}
