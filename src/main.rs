use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use transmission_line_toolbox::app;
use transmission_line_toolbox::ui_cli::{Cli, Command};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let created = !cli.config.exists() && !matches!(cli.command, Command::InitConfig);
    let cfg = app::load_config(cli);
    // 설정 로드가 실패해도 오류 로그는 남도록 기본 필터로 초기화한다.
    init_tracing(cfg.as_ref().map_or("info", |c| c.log_filter.as_str()));
    let cfg = cfg?;
    if created {
        info!(path = %cli.config.display(), "기본 설정 파일을 생성했습니다");
    }
    app::run(cli, &cfg)
}

/// RUST_LOG가 있으면 그것을, 없으면 설정의 필터를 쓴다.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
