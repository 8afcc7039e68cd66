//! 단위 정의 및 변환 모듈 모음. CLI 입력을 계산 기준 단위(km, cm, °C, atm)로 바꿀 때 쓴다.

pub mod length;
pub mod pressure;
pub mod temperature;

pub use length::{convert_length, LengthUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
