use std::process::ExitCode;

use exam_grader::utils::logging;
use exam_grader::{App, Config};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 加载配置
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            logging::init(false);
            error!("配置加载失败: {}", e);
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    match App::initialize(config).run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("处理失败: {:#}", e);
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
