use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum LengthUnit {
    #[value(name = "km")]
    Kilometer,
    #[value(name = "m")]
    Meter,
    #[value(name = "cm")]
    Centimeter,
    #[value(name = "mm")]
    Millimeter,
    #[value(name = "mi")]
    Mile,
    #[value(name = "ft")]
    Foot,
    #[value(name = "in")]
    Inch,
}

impl LengthUnit {
    /// 1 단위당 미터
    fn meters(self) -> f64 {
        match self {
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Mile => 1609.344,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Inch => 0.0254,
        }
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * from.meters() / to.meters()
}
