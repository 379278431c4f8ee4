use color_eyre::Result;
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app_config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&app_config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("📴 收到关闭信号"),
            Err(err) => error!("❌ 无法监听关闭信号: {}", err),
        }
        let _ = shutdown_tx.send(true);
    });

    web_service::start_web_service(app_config, shutdown_rx).await?;

    info!("✅ 服务已停止");

    Ok(())
}
