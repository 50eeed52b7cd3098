use bistro_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 日志)
    setup_environment();

    tracing::info!("🍽  Bistro Boss server starting...");

    // 2. 加载配置
    let config = Config::from_env().inspect_err(|e| {
        tracing::error!("Configuration error: {}", e);
    })?;
    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "Configuration loaded"
    );

    // 3. 初始化服务器状态
    let state = ServerState::initialize(&config).await?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
