use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::analyzer::{AnalysisReport, Section};
use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::line::{
    CoronaResult, EfficiencyBand, EnvironmentalConditions, LineParameters, LossResult,
    OperatingConditions, RegulationQuality, RegulationResult,
};
use crate::units::{
    convert_length, convert_pressure, convert_temperature, LengthUnit, PressureUnit,
    TemperatureUnit,
};

/// 송전선로 성능 분석기 (손실, 전압변동률, 코로나)
#[derive(Debug, Parser)]
#[command(name = "transmission_line_toolbox", version)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 결과를 JSON으로 출력
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

/// 하위 명령.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 손실·전압변동률·코로나 종합 분석. --voltage를 여러 번 주면 전압별로 반복한다.
    Analyze(CaseArgs),
    /// 송전 손실과 효율
    Losses(CaseArgs),
    /// 장거리 선로 전압변동률
    Regulation(CaseArgs),
    /// 코로나 임계 전압과 위험 등급
    Corona(CaseArgs),
    /// 기본 설정 파일을 새로 쓴다
    InitConfig,
}

/// 분석 사례 입력. 지정하지 않은 값은 설정 파일의 기본 사례를 쓴다.
#[derive(Debug, Clone, Args)]
pub struct CaseArgs {
    /// 선로 길이
    #[arg(long)]
    pub length: Option<f64>,
    #[arg(long, value_enum, default_value = "km")]
    pub length_unit: LengthUnit,
    /// 도체 반경
    #[arg(long)]
    pub radius: Option<f64>,
    /// 상간 기하평균거리(GMD)
    #[arg(long)]
    pub gmd: Option<f64>,
    /// 도체 반경과 GMD의 단위
    #[arg(long, value_enum, default_value = "cm")]
    pub geometry_unit: LengthUnit,
    /// 상당 총 저항 [Ω]
    #[arg(long)]
    pub resistance: Option<f64>,
    /// 상당 총 인덕턴스 [H]
    #[arg(long)]
    pub inductance: Option<f64>,
    /// 총 정전용량 [µF]
    #[arg(long)]
    pub capacitance_uf: Option<f64>,
    /// 수전단 선간 전압 [kV]. 반복 지정 가능.
    #[arg(long)]
    pub voltage: Vec<f64>,
    /// 수전 피상전력 [MVA]
    #[arg(long)]
    pub power: Option<f64>,
    #[arg(long)]
    pub power_factor: Option<f64>,
    /// 진상 역률로 계산
    #[arg(long)]
    pub leading: bool,
    /// 지상 역률로 계산 (설정이 진상이어도)
    #[arg(long, conflicts_with = "leading")]
    pub lagging: bool,
    /// 도체 표면 거칠기 계수
    #[arg(long)]
    pub roughness: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub temperature: Option<f64>,
    #[arg(long, value_enum, default_value = "c")]
    pub temperature_unit: TemperatureUnit,
    #[arg(long)]
    pub pressure: Option<f64>,
    #[arg(long, value_enum, default_value = "atm")]
    pub pressure_unit: PressureUnit,
}

/// 단위 환산을 마친 한 건의 분석 사례.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Case {
    pub line: LineParameters,
    pub operating: OperatingConditions,
    pub environmental: EnvironmentalConditions,
}

impl CaseArgs {
    /// 설정의 기본 사례 위에 입력을 덮어써 전압별 사례 목록을 만든다.
    pub fn resolve(&self, cfg: &Config) -> Vec<Case> {
        let mut line = cfg.line;
        if let Some(v) = self.length {
            line.length_km = convert_length(v, self.length_unit, LengthUnit::Kilometer);
        }
        if let Some(v) = self.radius {
            line.conductor_radius_cm =
                convert_length(v, self.geometry_unit, LengthUnit::Centimeter);
        }
        if let Some(v) = self.gmd {
            line.gmd_cm = convert_length(v, self.geometry_unit, LengthUnit::Centimeter);
        }
        if let Some(v) = self.resistance {
            line.resistance_ohm = v;
        }
        if let Some(v) = self.inductance {
            line.inductance_h = v;
        }
        if let Some(v) = self.capacitance_uf {
            line.capacitance_f = v * 1e-6;
        }

        let mut operating = cfg.operating;
        if let Some(v) = self.power {
            operating.reception_power_mva = v;
        }
        if let Some(v) = self.power_factor {
            operating.power_factor = v;
        }
        if self.leading {
            operating.lagging = false;
        } else if self.lagging {
            operating.lagging = true;
        }

        let mut environmental = cfg.environmental;
        if let Some(v) = self.roughness {
            environmental.roughness_factor = v;
        }
        if let Some(v) = self.temperature {
            environmental.temperature_c =
                convert_temperature(v, self.temperature_unit, TemperatureUnit::Celsius);
        }
        if let Some(v) = self.pressure {
            environmental.pressure_atm =
                convert_pressure(v, self.pressure_unit, PressureUnit::Atm);
        }

        let voltages = if self.voltage.is_empty() {
            vec![operating.reception_voltage_kv]
        } else {
            self.voltage.clone()
        };
        voltages
            .into_iter()
            .map(|kv| Case {
                line,
                operating: OperatingConditions {
                    reception_voltage_kv: kv,
                    ..operating
                },
                environmental,
            })
            .collect()
    }
}

pub fn print_case(case: &Case) {
    let l = &case.line;
    let o = &case.operating;
    let e = &case.environmental;
    println!(
        "\n=== {:.0} kV / {:.0} MVA / 역률 {:.2} ({}) ===",
        o.reception_voltage_kv,
        o.reception_power_mva,
        o.power_factor,
        if o.lagging { "지상" } else { "진상" }
    );
    println!(
        "선로: {:.1} km, R={:.2} Ω, L={:.3} H, C={:.2} µF, r={:.2} cm, GMD={:.1} cm",
        l.length_km,
        l.resistance_ohm,
        l.inductance_h,
        l.capacitance_f * 1e6,
        l.conductor_radius_cm,
        l.gmd_cm
    );
    println!(
        "환경: {:.1} °C, {:.3} atm, 거칠기 {:.2}",
        e.temperature_c, e.pressure_atm, e.roughness_factor
    );
}

pub fn print_losses(losses: &LossResult) {
    println!("\n-- 송전 손실 --");
    println!("선로 전류: {:.2} A", losses.current_a);
    println!("전력 손실: {:.3} MW", losses.losses_mw);
    println!("손실률: {:.2} %", losses.losses_pct);
    println!(
        "송전 효율: {:.2} % ({})",
        losses.efficiency_pct,
        EfficiencyBand::from_efficiency(losses.efficiency_pct)
    );
}

pub fn print_regulation(reg: &RegulationResult) {
    println!("\n-- 전압변동률 --");
    println!("전압변동률: {:.2} %", reg.regulation_pct);
    println!("전압 강하: {:.2} kV", reg.voltage_drop_kv);
    println!("송전단 전압: {:.2} kV", reg.sending_voltage_kv);
    println!("무부하 수전단 전압: {:.2} kV", reg.no_load_voltage_kv);
    println!(
        "|Zc| = {:.2} Ω, |γ| = {:.3e} /km",
        reg.characteristic_impedance_ohm, reg.propagation_constant_per_km
    );
    if reg.regulation_pct.is_finite() {
        println!("평가: {}", RegulationQuality::from_regulation(reg.regulation_pct));
    }
}

pub fn print_corona(corona: &CoronaResult) {
    println!("\n-- 코로나 --");
    println!("운전 상전압: {:.2} kV", corona.operating_voltage_phase_kv);
    println!("임계 파괴 전압: {:.2} kV", corona.critical_disruptive_voltage_kv);
    println!("상대 공기밀도 δ: {:.4}", corona.air_density_factor);
    println!("안전 여유: {:.2} %", corona.safety_margin_pct);
    println!(
        "{} - {}{}",
        corona.risk_level,
        corona.recommendation,
        if corona.corona_probable {
            " (코로나 발생 예상)"
        } else {
            ""
        }
    );
}

pub fn print_section<T>(title: &str, section: &Section<T>, print: fn(&T)) {
    match section {
        Section::Success(v) => print(v),
        Section::Failure { reason } => println!("\n-- {title} --\n계산 실패: {reason}"),
    }
}

pub fn print_report(report: &AnalysisReport) {
    print_section("송전 손실", &report.losses, print_losses);
    print_section("전압변동률", &report.regulation, print_regulation);
    print_section("코로나", &report.corona, print_corona);
}

/// 이력 요약을 표로 출력한다.
pub fn print_history<'a>(reports: impl Iterator<Item = &'a AnalysisReport>) {
    println!("\n=== 분석 이력 ===");
    println!(
        "{:<27} {:>10} {:>12} {:>12}",
        "시각(UTC)", "효율[%]", "변동률[%]", "코로나"
    );
    for r in reports {
        let eff = r
            .losses
            .success()
            .map_or("-".to_string(), |l| format!("{:.2}", l.efficiency_pct));
        let reg = r
            .regulation
            .success()
            .map_or("-".to_string(), |g| format!("{:.2}", g.regulation_pct));
        let risk = r
            .corona
            .success()
            .map_or("-".to_string(), |c| c.risk_level.to_string());
        println!(
            "{:<27} {:>10} {:>12} {:>12}",
            r.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            eff,
            reg,
            risk
        );
    }
}
