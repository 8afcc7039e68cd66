use serde::{Deserialize, Serialize};

/// 송전 손실 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct PowerLossInput {
    /// 선간 전압 [kV]
    pub voltage_kv: f64,
    /// 3상 피상전력 [MVA]
    pub power_mva: f64,
    /// 상당 총 저항 [Ω]
    pub resistance_ohm: f64,
}

/// 송전 손실 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossResult {
    /// 선로 전류 [A]
    pub current_a: f64,
    /// 3상 저항 손실 [MW]
    pub losses_mw: f64,
    /// 3상 저항 손실 [W]
    pub losses_w: f64,
    /// 송전 효율 [%]
    pub efficiency_pct: f64,
    /// 전송 전력 대비 손실 [%]
    pub losses_pct: f64,
}

impl LossResult {
    fn zeroed() -> Self {
        Self {
            current_a: 0.0,
            losses_mw: 0.0,
            losses_w: 0.0,
            efficiency_pct: 0.0,
            losses_pct: 0.0,
        }
    }
}

/// 평형 3상 전류와 I²R 손실, 효율을 계산한다.
///
/// 전압이 0 이하이면 모든 값을 0으로 돌려준다. 전력이 0 이하일 때 효율과 손실률은 0이다.
pub fn compute_power_loss(input: &PowerLossInput) -> LossResult {
    if input.voltage_kv <= 0.0 {
        return LossResult::zeroed();
    }

    // I = S / (√3 · V_LL)
    let current_a = (input.power_mva * 1e6) / (3f64.sqrt() * input.voltage_kv * 1e3);
    let losses_w = 3.0 * current_a * current_a * input.resistance_ohm;
    let losses_mw = losses_w / 1e6;

    let (efficiency_pct, losses_pct) = if input.power_mva > 0.0 {
        (
            (input.power_mva - losses_mw) / input.power_mva * 100.0,
            losses_mw / input.power_mva * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    LossResult {
        current_a,
        losses_mw,
        losses_w,
        efficiency_pct,
        losses_pct,
    }
}
