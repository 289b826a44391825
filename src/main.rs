use dotenv::dotenv;
use human_panic::setup_panic;
use std::io::Read;
use std::process::ExitCode;
use tracing::{debug, error, info};

// 从 lib.rs 导入模块
use student_model::config::AppConfig;
use student_model::errors::{Result, StudentModelError};
use student_model::models::AppStartTime;
use student_model::services::StudentService;

fn main() -> ExitCode {
    dotenv().ok();

    // 记录程序启动时间
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    // 初始化配置
    setup_panic!();
    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to initialize configuration: {e}");
        return ExitCode::FAILURE;
    }
    let config = AppConfig::get();

    // 初始化日志（输出到 stderr，stdout 留给结果）
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let path = std::env::args().nth(1);
    let result = run(path.as_deref(), config.output.pretty);

    debug!(
        "Finished in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time.start_datetime)
            .num_milliseconds()
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{} ({})", e, e.code());
            eprintln!("{}", format_error(&e, config));
            ExitCode::FAILURE
        }
    }
}

// 生产环境只输出简洁格式，开发构建输出彩色格式
fn format_error(err: &StudentModelError, config: &AppConfig) -> String {
    if config.is_production() {
        return err.format_simple();
    }
    #[cfg(debug_assertions)]
    {
        err.format_colored()
    }
    #[cfg(not(debug_assertions))]
    {
        err.format_simple()
    }
}

fn run(path: Option<&str>, pretty: bool) -> Result<()> {
    let input = match path {
        Some(path) => {
            info!("Reading student payload from {}", path);
            std::fs::read_to_string(path)?
        }
        None => {
            info!("Reading student payload from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let report = StudentService::new(pretty).inspect_payload(&input)?;
    for entry in &report.students {
        println!("{}", entry.student);
        println!("  fields: [{}]", entry.present_fields.join(", "));
        println!("{}", entry.normalized);
    }
    info!("Inspected {} student(s)", report.students.len());

    Ok(())
}
