use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 대기압 단위. 모두 절대압이며 내부 기준은 atm이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PressureUnit {
    #[value(name = "atm")]
    Atm,
    #[value(name = "cmhg")]
    CmHg,
    #[value(name = "mmhg")]
    MmHg,
    #[value(name = "kpa")]
    KiloPascal,
    #[value(name = "bar")]
    Bar,
    #[value(name = "psi")]
    Psi,
}

const KPA_PER_ATM: f64 = 101.325;

/// 1 atm에 해당하는 값
fn per_atm(unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Atm => 1.0,
        PressureUnit::CmHg => 76.0,
        PressureUnit::MmHg => 760.0,
        PressureUnit::KiloPascal => KPA_PER_ATM,
        PressureUnit::Bar => KPA_PER_ATM / 100.0,
        PressureUnit::Psi => 14.695_95,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    value / per_atm(from) * per_atm(to)
}
