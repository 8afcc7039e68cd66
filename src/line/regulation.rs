use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::error::{ensure_finite, ComputationError};

/// 계통 주파수 [Hz]
pub const SYSTEM_FREQUENCY_HZ: f64 = 60.0;

/// 장거리 선로 전압변동률 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct RegulationInput {
    /// 상당 총 저항 [Ω]
    pub resistance_ohm: f64,
    /// 상당 총 인덕턴스 [H]
    pub inductance_h: f64,
    /// 총 정전용량 [F]
    pub capacitance_f: f64,
    /// 선로 길이 [km]. 0보다 커야 한다.
    pub length_km: f64,
    /// 수전단 선간 전압 [kV]
    pub receiving_voltage_kv: f64,
    /// 수전단 3상 피상전력 [MVA]
    pub receiving_power_mva: f64,
    /// 수전단 역률
    pub power_factor: f64,
    /// 지상 부하 여부
    pub lagging: bool,
}

/// 전압변동률 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegulationResult {
    /// 전압변동률 [%]. 수전단 전압이 0이면 +∞.
    pub regulation_pct: f64,
    /// 무부하-전부하 수전단 전압차 [kV, 선간]
    pub voltage_drop_kv: f64,
    /// 송전단 전압 [kV, 선간]
    pub sending_voltage_kv: f64,
    /// 무부하 수전단 전압 [kV, 선간]
    pub no_load_voltage_kv: f64,
    /// |Zc| [Ω]
    pub characteristic_impedance_ohm: f64,
    /// |γ| [1/km]
    pub propagation_constant_per_km: f64,
}

/// 분포정수 선로의 A, B 정수와 진단값.
#[derive(Debug, Clone, Copy)]
pub struct AbcdParameters {
    pub a: Complex64,
    pub b: Complex64,
    pub characteristic_impedance: Complex64,
    pub propagation_constant: Complex64,
}

/// 단위 길이당 z, y로부터 장거리 선로 A, B 정수를 구한다.
///
/// 복소 제곱근은 주치(실수부 ≥ 0)를 쓴다.
pub fn abcd_parameters(
    resistance_ohm: f64,
    inductance_h: f64,
    capacitance_f: f64,
    length_km: f64,
) -> AbcdParameters {
    let omega = 2.0 * PI * SYSTEM_FREQUENCY_HZ;
    let z = Complex64::new(resistance_ohm / length_km, omega * inductance_h / length_km);
    let y = Complex64::new(0.0, omega * capacitance_f / length_km);

    let gamma = (z * y).sqrt();
    let zc = (z / y).sqrt();
    let gamma_l = gamma * length_km;

    AbcdParameters {
        a: gamma_l.cosh(),
        b: zc * gamma_l.sinh(),
        characteristic_impedance: zc,
        propagation_constant: gamma,
    }
}

/// 송전단 전압과 전압변동률을 계산한다.
///
/// V_S = A·V_R + B·I_R, 무부하 수전단 전압은 |V_S| / |A| 로 본다.
pub fn compute_regulation(input: &RegulationInput) -> Result<RegulationResult, ComputationError> {
    let abcd = abcd_parameters(
        input.resistance_ohm,
        input.inductance_h,
        input.capacitance_f,
        input.length_km,
    );
    let zc_mag = abcd.characteristic_impedance.norm();
    let gamma_mag = abcd.propagation_constant.norm();

    let sqrt3 = 3f64.sqrt();
    let v_r_phase = input.receiving_voltage_kv * 1000.0 / sqrt3;
    let v_r_full_load = v_r_phase.abs();

    if v_r_full_load == 0.0 {
        return Ok(RegulationResult {
            regulation_pct: f64::INFINITY,
            voltage_drop_kv: 0.0,
            sending_voltage_kv: 0.0,
            no_load_voltage_kv: 0.0,
            characteristic_impedance_ohm: zc_mag,
            propagation_constant_per_km: gamma_mag,
        });
    }

    let pf_angle = if input.lagging {
        -input.power_factor.acos()
    } else {
        input.power_factor.acos()
    };
    let i_r = (input.receiving_power_mva * 1e6) / (sqrt3 * input.receiving_voltage_kv * 1000.0);
    let i_r_phasor = Complex64::from_polar(i_r, pf_angle);

    let v_s = abcd.a * v_r_phase + abcd.b * i_r_phasor;
    let v_r_no_load = v_s.norm() / abcd.a.norm();

    let result = RegulationResult {
        regulation_pct: (v_r_no_load - v_r_full_load) / v_r_full_load * 100.0,
        voltage_drop_kv: (v_r_no_load - v_r_full_load) * sqrt3 / 1000.0,
        sending_voltage_kv: v_s.norm() * sqrt3 / 1000.0,
        no_load_voltage_kv: v_r_no_load * sqrt3 / 1000.0,
        characteristic_impedance_ohm: zc_mag,
        propagation_constant_per_km: gamma_mag,
    };
    ensure_finite(
        "전압변동률",
        &[
            ("regulation_pct", result.regulation_pct),
            ("sending_voltage_kv", result.sending_voltage_kv),
            ("no_load_voltage_kv", result.no_load_voltage_kv),
            ("characteristic_impedance_ohm", zc_mag),
            ("propagation_constant_per_km", gamma_mag),
        ],
    )?;
    Ok(result)
}
