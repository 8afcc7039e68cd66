//! 분석 전에 입력을 점검한다. 불변 조건 위반은 오류로, 통상 범위 밖 값은 경고로 모은다.

use crate::line::{EnvironmentalConditions, LineParameters, OperatingConditions, ParameterError};

/// 표준 공칭 전압 [kV]
pub const STANDARD_VOLTAGES_KV: [f64; 3] = [115.0, 230.0, 500.0];

/// 입력 점검 결과.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// 계산을 막아야 하는 위반 사항
    pub errors: Vec<ParameterError>,
    /// 계산은 가능하지만 확인이 필요한 사항
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// 세 파라미터 묶음을 한꺼번에 점검한다. 첫 오류에서 멈추지 않고 모두 모은다.
pub fn validate_case(
    line: &LineParameters,
    operating: &OperatingConditions,
    environmental: &EnvironmentalConditions,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.errors.extend(line.violations());
    report.errors.extend(operating.violations());
    report.errors.extend(environmental.violations());

    // 불변 조건을 어긴 값은 이미 오류로 잡혔으므로 경고하지 않는다.
    let w = &mut report.warnings;
    if line.length_km > 0.0 {
        below(w, "선로 길이", line.length_km, 1.0, "km");
    }
    if line.conductor_radius_cm > 0.0 {
        below(w, "도체 반경", line.conductor_radius_cm, 0.5, "cm");
        if line.gmd_cm > line.conductor_radius_cm {
            below(w, "기하평균거리", line.gmd_cm, 100.0, "cm");
        }
    }
    if line.resistance_ohm >= 0.0 {
        below(w, "선로 저항", line.resistance_ohm, 0.1, "Ω");
    }
    if line.inductance_h >= 0.0 {
        below(w, "선로 인덕턴스", line.inductance_h, 0.01, "H");
    }
    if line.capacitance_f > 0.0 {
        below(w, "선로 정전용량", line.capacitance_f * 1e6, 0.1, "µF");
    }

    if operating.reception_voltage_kv > 0.0
        && !STANDARD_VOLTAGES_KV
            .iter()
            .any(|v| (v - operating.reception_voltage_kv).abs() < 1e-9)
    {
        w.push(format!(
            "공칭 전압 {} kV는 표준 전압(115/230/500 kV)이 아닙니다.",
            operating.reception_voltage_kv
        ));
    }
    if operating.reception_power_mva >= 0.0 {
        outside(w, "수전 전력", operating.reception_power_mva, 50.0, 1000.0, "MVA");
    }
    if (0.0..=1.0).contains(&operating.power_factor) {
        below(w, "역률", operating.power_factor, 0.80, "");
    }
    if environmental.temperature_c > -273.0 {
        outside(w, "기온", environmental.temperature_c, -10.0, 50.0, "°C");
    }
    if environmental.pressure_atm > 0.0 {
        outside(w, "기압", environmental.pressure_atm, 0.70, 1.05, "atm");
    }
    if environmental.roughness_factor > 0.0 && environmental.roughness_factor <= 1.0 {
        below(w, "표면 거칠기 계수", environmental.roughness_factor, 0.70, "");
    }

    report
}

fn below(warnings: &mut Vec<String>, label: &str, value: f64, min: f64, unit: &str) {
    if value < min {
        warnings.push(format!("{label} {value} {unit}이(가) 통상 하한 {min} {unit}보다 작습니다."));
    }
}

fn outside(warnings: &mut Vec<String>, label: &str, value: f64, min: f64, max: f64, unit: &str) {
    if value < min || value > max {
        warnings.push(format!(
            "{label} {value} {unit}이(가) 통상 범위({min}~{max} {unit})를 벗어났습니다."
        ));
    }
}
