mod server;

use crate::server::{
    bot,
    config::Config,
    error::AppError,
    service::{dispatch::CommandDispatcher, giveaway_timer::GiveawayTimerService},
    startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let listener = startup::bind_listener(&config).await?;

    let dispatcher = CommandDispatcher::new(GiveawayTimerService::new());
    let client = bot::start::init_bot(&config, dispatcher).await?;

    // Either task ending takes the process down; pending giveaway timers are dropped
    tokio::select! {
        result = bot::start::start_bot(client) => {
            if let Err(e) = &result {
                tracing::error!("Discord bot error: {}", e);
            }
            result
        }
        result = startup::serve(listener) => {
            if let Err(e) = &result {
                tracing::error!("Web server error: {}", e);
            }
            result
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received Ctrl+C, shutting down");
            Ok(())
        }
    }
}
