use thiserror::Error;

/// 선로/운전/환경 파라미터가 불변 조건을 어길 때의 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("선로 길이는 0보다 커야 합니다. (입력: {0} km)")]
    NonPositiveLength(f64),
    #[error("선로 저항은 음수일 수 없습니다. (입력: {0} Ω)")]
    NegativeResistance(f64),
    #[error("선로 인덕턴스는 음수일 수 없습니다. (입력: {0} H)")]
    NegativeInductance(f64),
    #[error("선로 정전용량은 0보다 커야 합니다. (입력: {0} F)")]
    NonPositiveCapacitance(f64),
    #[error("도체 반경은 0보다 커야 합니다. (입력: {0} cm)")]
    NonPositiveRadius(f64),
    #[error("기하평균거리({gmd_cm} cm)는 도체 반경({radius_cm} cm)보다 커야 합니다.")]
    SpacingNotAboveRadius { radius_cm: f64, gmd_cm: f64 },
    #[error("수전단 전압은 0보다 커야 합니다. (입력: {0} kV)")]
    NonPositiveVoltage(f64),
    #[error("수전 전력은 음수일 수 없습니다. (입력: {0} MVA)")]
    NegativePower(f64),
    #[error("역률은 0~1 범위여야 합니다. (입력: {0})")]
    PowerFactorOutOfRange(f64),
    #[error("표면 거칠기 계수는 0 초과 1 이하여야 합니다. (입력: {0})")]
    RoughnessOutOfRange(f64),
    #[error("기압은 0보다 커야 합니다. (입력: {0} atm)")]
    NonPositivePressure(f64),
    #[error("기온이 절대영도 이하입니다. (입력: {0} °C)")]
    TemperatureBelowAbsoluteZero(f64),
}

/// 모델 계산 도중 유한하지 않은 값이 나온 경우.
///
/// 전압 0 같은 정의된 퇴화 입력은 여기에 해당하지 않고 결과의 센티널 값으로 표현된다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    #[error("{model} 계산 실패: {quantity} 값이 유한하지 않습니다 ({value})")]
    NonFinite {
        model: &'static str,
        quantity: &'static str,
        value: f64,
    },
}

/// 계산 결과 필드가 유한한지 확인한다.
pub(crate) fn ensure_finite(
    model: &'static str,
    fields: &[(&'static str, f64)],
) -> Result<(), ComputationError> {
    match fields.iter().find(|(_, v)| !v.is_finite()) {
        Some(&(quantity, value)) => Err(ComputationError::NonFinite {
            model,
            quantity,
            value,
        }),
        None => Ok(()),
    }
}
