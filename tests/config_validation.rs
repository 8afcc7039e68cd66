//! 설정 파일, 입력 점검, CLI 사례 구성 테스트.
use clap::Parser;
use std::fs;
use transmission_line_toolbox::app::{self, AppError};
use transmission_line_toolbox::config::{self, Config, ConfigError};
use transmission_line_toolbox::line::{
    EnvironmentalConditions, LineParameters, OperatingConditions, ParameterError,
};
use transmission_line_toolbox::ui_cli::{Cli, Command};
use transmission_line_toolbox::units::{
    convert_length, convert_pressure, convert_temperature, LengthUnit, PressureUnit,
    TemperatureUnit,
};
use transmission_line_toolbox::validation::validate_case;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual}, expected={expected}, tol={tol}"
    );
}

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let reloaded = config::load_or_default(&path).expect("reload");
    assert_eq!(reloaded, cfg);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "history_limit = 8\n").expect("write");
    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg.history_limit, 8);
    assert_eq!(cfg.line, LineParameters::default());
}

#[test]
fn invalid_case_in_config_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.line.gmd_cm = 1.0;
    cfg.save(&path).expect("save");
    match config::load_or_default(&path) {
        Err(ConfigError::InvalidCase(ParameterError::SpacingNotAboveRadius { .. })) => {}
        other => panic!("expected InvalidCase, got {other:?}"),
    }
}

#[test]
fn constructors_enforce_invariants() {
    assert_eq!(
        LineParameters::new(15.0, 0.35, 2.5e-6, 0.0, 1.77, 750.0),
        Err(ParameterError::NonPositiveLength(0.0))
    );
    assert!(matches!(
        LineParameters::new(15.0, 0.35, 2.5e-6, 200.0, 1.77, 1.5),
        Err(ParameterError::SpacingNotAboveRadius { .. })
    ));
    assert!(OperatingConditions::new(230.0, 300.0, 1.2, true).is_err());
    assert!(OperatingConditions::new(230.0, 300.0, 0.0, true).is_ok());
    assert!(EnvironmentalConditions::new(0.0, 25.0, 1.0).is_err());
    assert!(EnvironmentalConditions::new(1.0, 25.0, f64::NAN).is_err());
}

#[test]
fn default_case_passes_without_warnings() {
    let report = validate_case(
        &LineParameters::default(),
        &OperatingConditions::default(),
        &EnvironmentalConditions::default(),
    );
    assert!(report.is_ok());
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
}

#[test]
fn validation_collects_every_violation() {
    let line = LineParameters {
        length_km: 0.0,
        gmd_cm: 1.0,
        ..LineParameters::default()
    };
    let op = OperatingConditions {
        power_factor: 1.2,
        ..OperatingConditions::default()
    };
    let report = validate_case(&line, &op, &EnvironmentalConditions::default());
    assert!(!report.is_ok());
    assert_eq!(report.errors.len(), 3, "{:?}", report.errors);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
}

#[test]
fn invalid_value_is_an_error_not_a_warning() {
    let zero = LineParameters {
        length_km: 0.0,
        ..LineParameters::default()
    };
    let report = validate_case(
        &zero,
        &OperatingConditions::default(),
        &EnvironmentalConditions::default(),
    );
    assert_eq!(report.errors, vec![ParameterError::NonPositiveLength(0.0)]);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);

    let short = LineParameters {
        length_km: 0.5,
        ..LineParameters::default()
    };
    let report = validate_case(
        &short,
        &OperatingConditions::default(),
        &EnvironmentalConditions::default(),
    );
    assert!(report.is_ok());
    assert_eq!(report.warnings.len(), 1, "{:?}", report.warnings);
}

#[test]
fn unusual_values_only_warn() {
    let op = OperatingConditions {
        reception_voltage_kv: 138.0,
        power_factor: 0.7,
        ..OperatingConditions::default()
    };
    let env = EnvironmentalConditions {
        temperature_c: 60.0,
        ..EnvironmentalConditions::default()
    };
    let report = validate_case(&LineParameters::default(), &op, &env);
    assert!(report.is_ok());
    assert_eq!(report.warnings.len(), 3, "{:?}", report.warnings);
}

#[test]
fn unit_conversions() {
    assert_close(
        convert_length(1.0, LengthUnit::Mile, LengthUnit::Kilometer),
        1.609_344,
        1e-12,
    );
    assert_close(
        convert_length(17.7, LengthUnit::Millimeter, LengthUnit::Centimeter),
        1.77,
        1e-12,
    );
    assert_close(
        convert_temperature(68.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius),
        20.0,
        1e-12,
    );
    assert_close(
        convert_temperature(298.15, TemperatureUnit::Kelvin, TemperatureUnit::Celsius),
        25.0,
        1e-9,
    );
    assert_close(
        convert_pressure(76.0, PressureUnit::CmHg, PressureUnit::Atm),
        1.0,
        1e-12,
    );
    assert_close(
        convert_pressure(101.325, PressureUnit::KiloPascal, PressureUnit::MmHg),
        760.0,
        1e-9,
    );
}

#[test]
fn cli_arguments_override_configured_case() {
    let cli = Cli::parse_from([
        "transmission_line_toolbox",
        "analyze",
        "--voltage",
        "115",
        "--voltage",
        "500",
        "--length",
        "100",
        "--length-unit",
        "mi",
        "--capacitance-uf",
        "1.5",
        "--pressure",
        "76",
        "--pressure-unit",
        "cmhg",
        "--temperature",
        "68",
        "--temperature-unit",
        "f",
        "--leading",
    ]);
    let Command::Analyze(args) = &cli.command else {
        panic!("expected analyze");
    };
    let cases = args.resolve(&Config::default());
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].operating.reception_voltage_kv, 115.0);
    assert_eq!(cases[1].operating.reception_voltage_kv, 500.0);
    for case in &cases {
        assert!((case.line.length_km - 160.9344).abs() < 1e-9);
        assert!((case.line.capacitance_f - 1.5e-6).abs() < 1e-15);
        assert!((case.environmental.pressure_atm - 1.0).abs() < 1e-12);
        assert!((case.environmental.temperature_c - 20.0).abs() < 1e-9);
        assert!(!case.operating.lagging);
        assert_eq!(case.line.gmd_cm, 750.0);
    }
}

#[test]
fn cli_without_overrides_uses_configured_voltage() {
    let cli = Cli::parse_from(["transmission_line_toolbox", "--json", "corona"]);
    assert!(cli.json);
    let Command::Corona(args) = &cli.command else {
        panic!("expected corona");
    };
    let cases = args.resolve(&Config::default());
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].operating, OperatingConditions::default());
}

#[test]
fn lagging_flag_overrides_leading_config() {
    let mut cfg = Config::default();
    cfg.operating.lagging = false;

    let cli = Cli::parse_from(["transmission_line_toolbox", "regulation", "--lagging"]);
    let Command::Regulation(args) = &cli.command else {
        panic!("expected regulation");
    };
    assert!(args.resolve(&cfg)[0].operating.lagging);

    let cli = Cli::parse_from(["transmission_line_toolbox", "regulation"]);
    let Command::Regulation(args) = &cli.command else {
        panic!("expected regulation");
    };
    assert!(!args.resolve(&cfg)[0].operating.lagging);

    let both = Cli::try_parse_from([
        "transmission_line_toolbox",
        "regulation",
        "--leading",
        "--lagging",
    ]);
    assert!(both.is_err());
}

#[test]
fn invalid_arguments_stop_before_computation() {
    let cli = Cli::parse_from([
        "transmission_line_toolbox",
        "analyze",
        "--length",
        "0",
        "--gmd",
        "1",
        "--power-factor",
        "1.2",
    ]);
    match app::run(&cli, &Config::default()) {
        Err(AppError::InvalidInput(errors)) => {
            assert_eq!(errors.len(), 3, "{errors:?}");
            assert!(errors.contains(&ParameterError::NonPositiveLength(0.0)));
            assert!(errors.contains(&ParameterError::PowerFactorOutOfRange(1.2)));
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn init_config_replaces_broken_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "history_limit = \"oops\"\n").expect("write");
    let path_arg = path.to_str().expect("utf-8 path");

    let analyze = Cli::parse_from(["transmission_line_toolbox", "--config", path_arg, "analyze"]);
    assert!(matches!(
        app::load_config(&analyze),
        Err(AppError::Config(ConfigError::Serde(_)))
    ));

    let init = Cli::parse_from([
        "transmission_line_toolbox",
        "--config",
        path_arg,
        "init-config",
    ]);
    let cfg = app::load_config(&init).expect("init-config skips loading");
    app::run(&init, &cfg).expect("init-config");

    assert_eq!(config::load_or_default(&path).expect("reload"), Config::default());
}

#[test]
fn json_output_is_a_single_array() {
    let cli = Cli::parse_from([
        "transmission_line_toolbox",
        "--json",
        "analyze",
        "--voltage",
        "115",
        "--voltage",
        "230",
    ]);
    let Command::Analyze(args) = &cli.command else {
        panic!("expected analyze");
    };
    let (analyzed, analyzer) = app::analyze_cases(args, &Config::default()).expect("analyze");
    assert_eq!(analyzer.len(), 2);
    let reports: Vec<_> = analyzed.into_iter().map(|(_, report)| report).collect();

    let text = app::json_document(&reports).expect("json");
    let value: serde_json::Value = serde_json::from_str(&text).expect("one JSON document");
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 2);
    for item in items {
        assert_eq!(item["losses"]["status"], "success");
    }

    app::run(&cli, &Config::default()).expect("analyze --json");
}
