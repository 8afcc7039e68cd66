// 부정 비교는 NaN 입력도 위반으로 잡기 위한 것이다.
#![allow(clippy::neg_cmp_op_on_partial_ord)]

use serde::{Deserialize, Serialize};

use super::error::ParameterError;

/// 선로 전체(상당) 정수와 도체 기하 정보.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineParameters {
    /// 상당 총 저항 [Ω]
    pub resistance_ohm: f64,
    /// 상당 총 인덕턴스 [H]
    pub inductance_h: f64,
    /// 상-중성선 간 총 정전용량 [F]
    pub capacitance_f: f64,
    /// 선로 길이 [km]
    pub length_km: f64,
    /// 도체 반경 [cm]
    pub conductor_radius_cm: f64,
    /// 상간 기하평균거리(GMD) [cm]
    pub gmd_cm: f64,
}

impl LineParameters {
    /// 불변 조건을 검사한 뒤 선로 정수를 만든다.
    pub fn new(
        resistance_ohm: f64,
        inductance_h: f64,
        capacitance_f: f64,
        length_km: f64,
        conductor_radius_cm: f64,
        gmd_cm: f64,
    ) -> Result<Self, ParameterError> {
        let line = Self {
            resistance_ohm,
            inductance_h,
            capacitance_f,
            length_km,
            conductor_radius_cm,
            gmd_cm,
        };
        first_violation(line.violations()).map_or(Ok(line), Err)
    }

    /// 어긋난 불변 조건을 모두 나열한다.
    pub fn violations(&self) -> Vec<ParameterError> {
        let mut out = Vec::new();
        if !(self.length_km > 0.0) {
            out.push(ParameterError::NonPositiveLength(self.length_km));
        }
        if !(self.resistance_ohm >= 0.0) {
            out.push(ParameterError::NegativeResistance(self.resistance_ohm));
        }
        if !(self.inductance_h >= 0.0) {
            out.push(ParameterError::NegativeInductance(self.inductance_h));
        }
        if !(self.capacitance_f > 0.0) {
            out.push(ParameterError::NonPositiveCapacitance(self.capacitance_f));
        }
        if !(self.conductor_radius_cm > 0.0) {
            out.push(ParameterError::NonPositiveRadius(self.conductor_radius_cm));
        } else if !(self.gmd_cm > self.conductor_radius_cm) {
            out.push(ParameterError::SpacingNotAboveRadius {
                radius_cm: self.conductor_radius_cm,
                gmd_cm: self.gmd_cm,
            });
        }
        out
    }
}

/// 수전단 운전 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingConditions {
    /// 수전단 선간 전압 [kV]
    pub reception_voltage_kv: f64,
    /// 수전단 3상 피상전력 [MVA]
    pub reception_power_mva: f64,
    /// 역률 (0~1)
    pub power_factor: f64,
    /// 지상(true) / 진상(false)
    #[serde(default = "default_lagging")]
    pub lagging: bool,
}

fn default_lagging() -> bool {
    true
}

impl OperatingConditions {
    pub fn new(
        reception_voltage_kv: f64,
        reception_power_mva: f64,
        power_factor: f64,
        lagging: bool,
    ) -> Result<Self, ParameterError> {
        let op = Self {
            reception_voltage_kv,
            reception_power_mva,
            power_factor,
            lagging,
        };
        first_violation(op.violations()).map_or(Ok(op), Err)
    }

    pub fn violations(&self) -> Vec<ParameterError> {
        let mut out = Vec::new();
        if !(self.reception_voltage_kv > 0.0) {
            out.push(ParameterError::NonPositiveVoltage(self.reception_voltage_kv));
        }
        if !(self.reception_power_mva >= 0.0) {
            out.push(ParameterError::NegativePower(self.reception_power_mva));
        }
        if !(0.0..=1.0).contains(&self.power_factor) {
            out.push(ParameterError::PowerFactorOutOfRange(self.power_factor));
        }
        out
    }
}

/// 코로나 판정에 쓰는 대기/도체 표면 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalConditions {
    /// 도체 표면 거칠기 계수 m (0~1]
    pub roughness_factor: f64,
    /// 기온 [°C]
    pub temperature_c: f64,
    /// 기압 [atm]
    pub pressure_atm: f64,
}

impl EnvironmentalConditions {
    pub fn new(
        roughness_factor: f64,
        temperature_c: f64,
        pressure_atm: f64,
    ) -> Result<Self, ParameterError> {
        let env = Self {
            roughness_factor,
            temperature_c,
            pressure_atm,
        };
        first_violation(env.violations()).map_or(Ok(env), Err)
    }

    pub fn violations(&self) -> Vec<ParameterError> {
        let mut out = Vec::new();
        if !(self.roughness_factor > 0.0 && self.roughness_factor <= 1.0) {
            out.push(ParameterError::RoughnessOutOfRange(self.roughness_factor));
        }
        if !(self.temperature_c > -273.0) {
            out.push(ParameterError::TemperatureBelowAbsoluteZero(
                self.temperature_c,
            ));
        }
        if !(self.pressure_atm > 0.0) {
            out.push(ParameterError::NonPositivePressure(self.pressure_atm));
        }
        out
    }
}

fn first_violation(violations: Vec<ParameterError>) -> Option<ParameterError> {
    violations.into_iter().next()
}

// 기본 사례: 200 km, 230 kV 단회선 선로.
impl Default for LineParameters {
    fn default() -> Self {
        Self {
            resistance_ohm: 15.0,
            inductance_h: 0.35,
            capacitance_f: 2.5e-6,
            length_km: 200.0,
            conductor_radius_cm: 1.77,
            gmd_cm: 750.0,
        }
    }
}

impl Default for OperatingConditions {
    fn default() -> Self {
        Self {
            reception_voltage_kv: 230.0,
            reception_power_mva: 300.0,
            power_factor: 0.95,
            lagging: true,
        }
    }
}

impl Default for EnvironmentalConditions {
    fn default() -> Self {
        Self {
            roughness_factor: 0.82,
            temperature_c: 20.0,
            pressure_atm: 0.85,
        }
    }
}
