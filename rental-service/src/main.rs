mod config;
mod error;
mod handlers;
mod models;
mod routes;

#[cfg(test)]
mod tests;

use log::info;

use crate::config::Config;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize env_logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Logging initialized with env_logger");

    let config = Config::from_env()?;
    info!("Data path is set to: {}", config.data_path);

    let app = routes::create_router(&config).await?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Car Rental API listening on {}", addr);

    axum::serve(listener, app.into_make_service()).await?;

    info!("Service finished");
    Ok(())
}
