use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::analyzer::{AnalysisReport, PerformanceAnalyzer};
use crate::config::{self, Config, ConfigError};
use crate::line::{
    compute_corona, compute_power_loss, compute_regulation, ComputationError, CoronaInput,
    ParameterError, PowerLossInput, RegulationInput,
};
use crate::ui_cli::{self, Case, CaseArgs, Cli, Command};
use crate::validation::validate_case;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("입력 오류: {}", join_errors(.0))]
    InvalidInput(Vec<ParameterError>),
    #[error("계산 오류: {0}")]
    Computation(#[from] ComputationError),
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_errors(errors: &[ParameterError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// 명령에 필요한 설정을 준비한다. init-config는 기존 파일을 읽지 않는다.
pub fn load_config(cli: &Cli) -> Result<Config, AppError> {
    match cli.command {
        Command::InitConfig => Ok(Config::default()),
        _ => Ok(config::load_or_default(&cli.config)?),
    }
}

/// 명령 하나를 실행한다.
pub fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    match &cli.command {
        Command::Analyze(args) => run_analyze(args, config, cli.json),
        Command::Losses(args) => run_model(
            args,
            config,
            cli.json,
            |case| {
                Ok(compute_power_loss(&PowerLossInput {
                    voltage_kv: case.operating.reception_voltage_kv,
                    power_mva: case.operating.reception_power_mva,
                    resistance_ohm: case.line.resistance_ohm,
                }))
            },
            ui_cli::print_losses,
        ),
        Command::Regulation(args) => run_model(
            args,
            config,
            cli.json,
            |case| Ok(compute_regulation(&regulation_input(case))?),
            ui_cli::print_regulation,
        ),
        Command::Corona(args) => run_model(
            args,
            config,
            cli.json,
            |case| Ok(compute_corona(&corona_input(case))?),
            ui_cli::print_corona,
        ),
        Command::InitConfig => {
            Config::default().save(&cli.config)?;
            println!("기본 설정을 {}에 저장했습니다.", cli.config.display());
            Ok(())
        }
    }
}

/// 점검을 통과한 사례를 차례로 분석한다. 사례별 보고서와 이력을 담은 분석기를 돌려준다.
pub fn analyze_cases(
    args: &CaseArgs,
    config: &Config,
) -> Result<(Vec<(Case, AnalysisReport)>, PerformanceAnalyzer), AppError> {
    let mut analyzer = PerformanceAnalyzer::with_history_limit(config.history_limit);
    let analyzed = checked_cases(args, config)?
        .into_iter()
        .map(|case| {
            let report = analyzer.analyze(&case.line, &case.operating, &case.environmental);
            (case, report)
        })
        .collect();
    Ok((analyzed, analyzer))
}

/// 사례별 결과를 하나의 JSON 배열 문서로 만든다.
pub fn json_document<T: Serialize>(values: &[T]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(values)?)
}

fn run_analyze(args: &CaseArgs, config: &Config, json: bool) -> Result<(), AppError> {
    let (analyzed, analyzer) = analyze_cases(args, config)?;
    if json {
        let reports: Vec<_> = analyzed.into_iter().map(|(_, report)| report).collect();
        println!("{}", json_document(&reports)?);
        return Ok(());
    }
    for (case, report) in &analyzed {
        ui_cli::print_case(case);
        ui_cli::print_report(report);
    }
    if analyzer.len() > 1 {
        ui_cli::print_history(analyzer.history());
    }
    Ok(())
}

/// 단일 모델을 사례마다 계산한다. 모두 성공한 뒤에만 출력한다.
fn run_model<T, F>(
    args: &CaseArgs,
    config: &Config,
    json: bool,
    compute: F,
    print: fn(&T),
) -> Result<(), AppError>
where
    T: Serialize,
    F: Fn(&Case) -> Result<T, AppError>,
{
    let results = checked_cases(args, config)?
        .iter()
        .map(compute)
        .collect::<Result<Vec<_>, _>>()?;
    if json {
        println!("{}", json_document(&results)?);
    } else {
        results.iter().for_each(print);
    }
    Ok(())
}

/// 사례를 만들고 점검한다. 위반이 하나라도 있으면 계산하지 않는다.
fn checked_cases(args: &CaseArgs, config: &Config) -> Result<Vec<Case>, AppError> {
    let cases = args.resolve(config);
    let mut errors = Vec::new();
    for case in &cases {
        let report = validate_case(&case.line, &case.operating, &case.environmental);
        for w in &report.warnings {
            warn!("{w}");
        }
        errors.extend(report.errors);
    }
    if errors.is_empty() {
        Ok(cases)
    } else {
        Err(AppError::InvalidInput(errors))
    }
}

fn regulation_input(case: &Case) -> RegulationInput {
    RegulationInput {
        resistance_ohm: case.line.resistance_ohm,
        inductance_h: case.line.inductance_h,
        capacitance_f: case.line.capacitance_f,
        length_km: case.line.length_km,
        receiving_voltage_kv: case.operating.reception_voltage_kv,
        receiving_power_mva: case.operating.reception_power_mva,
        power_factor: case.operating.power_factor,
        lagging: case.operating.lagging,
    }
}

fn corona_input(case: &Case) -> CoronaInput {
    CoronaInput::new(
        case.operating.reception_voltage_kv,
        case.line.conductor_radius_cm,
        case.line.gmd_cm,
    )
    .with_environment(
        case.environmental.roughness_factor,
        case.environmental.temperature_c,
        case.environmental.pressure_atm,
    )
}
