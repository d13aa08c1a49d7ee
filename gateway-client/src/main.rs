//! 数据库网关示例客户端
//!
//! 演示其他应用如何通过 API 网关访问数据库：
//! - 不安装 VPN，不直连数据库
//! - 只调用网关的 HTTP 接口

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::config::GatewayConfig;
use gateway_client::demo;

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化日志追踪
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    // 加载配置
    let config = GatewayConfig::from_env();

    println!("Example Client - Database Gateway\n");
    println!("Gateway URL: {}", config.gateway_url);
    println!("{}", "=".repeat(60));

    let result = demo::run_demo(&config).await;
    match &result {
        Ok(()) => {
            println!("\n{}", "=".repeat(60));
            println!("SUCCESS! All requests completed.");
        }
        Err(err) => demo::report_error(err),
    }

    ExitCode::from(demo::exit_code(&result))
}
