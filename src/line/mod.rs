//! 송전선로 성능 계산 모듈 모음.
//! 송전 손실, 장거리 선로 전압변동률, 코로나 판정과 평가 등급으로 구성한다.

pub mod assessment;
pub mod corona;
pub mod error;
pub mod params;
pub mod power_loss;
pub mod regulation;

pub use assessment::{EfficiencyBand, RegulationQuality};
pub use corona::{compute_corona, CoronaInput, CoronaResult, RiskLevel};
pub use error::{ComputationError, ParameterError};
pub use params::{EnvironmentalConditions, LineParameters, OperatingConditions};
pub use power_loss::{compute_power_loss, LossResult, PowerLossInput};
pub use regulation::{compute_regulation, RegulationInput, RegulationResult, SYSTEM_FREQUENCY_HZ};
