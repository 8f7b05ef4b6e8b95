use anyhow::Result;
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;

use ws_gateway_functions::config::Settings;
use ws_gateway_functions::handlers::MessageHandler;
use ws_gateway_functions::state::HandlerState;
use ws_gateway_functions::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    telemetry::init_tracing(&settings.log)?;

    let state = HandlerState::new(settings).await;
    let handler = MessageHandler::new(state.connection_pusher()?, state.connection_store()?)
        .with_stale_pruning(state.settings.prune_stale_connections);
    tracing::info!(
        prune_stale_connections = state.settings.prune_stale_connections,
        "Message handler initialized"
    );

    let handler = &handler;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler
            .handle(event.payload)
            .await
            .map_err(|e| -> lambda_runtime::Error {
                tracing::error!(error = %e, "Message handling failed");
                e.into()
            })
    }))
    .await
    .map_err(|e| anyhow::anyhow!("Lambda runtime failed: {}", e))
}
