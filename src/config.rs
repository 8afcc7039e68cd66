use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::analyzer::DEFAULT_HISTORY_LIMIT;
use crate::line::{EnvironmentalConditions, LineParameters, OperatingConditions, ParameterError};

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정. 기본 분석 사례와 이력/로그 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 분석 이력 보관 개수
    pub history_limit: usize,
    /// RUST_LOG가 없을 때 쓰는 tracing 필터
    pub log_filter: String,
    pub line: LineParameters,
    pub operating: OperatingConditions,
    pub environmental: EnvironmentalConditions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            log_filter: "info".to_string(),
            line: LineParameters::default(),
            operating: OperatingConditions::default(),
            environmental: EnvironmentalConditions::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("설정 파일의 기본 사례가 잘못되었습니다: {0}")]
    InvalidCase(#[from] ParameterError),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 기본 사례가 불변 조건을 만족하는지 확인한다.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let first = self
            .line
            .violations()
            .into_iter()
            .chain(self.operating.violations())
            .chain(self.environmental.violations())
            .next();
        match first {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
