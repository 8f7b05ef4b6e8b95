use anyhow::Result;
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;

use ws_gateway_functions::config::Settings;
use ws_gateway_functions::handlers::{DisconnectHandler, GatewayResponse};
use ws_gateway_functions::state::HandlerState;
use ws_gateway_functions::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    telemetry::init_tracing(&settings.log)?;

    let state = HandlerState::new(settings).await;
    let handler = DisconnectHandler::new(state.connection_store()?);
    let table_name = state.settings.table_name()?;
    tracing::info!(table = %table_name, "Disconnect handler initialized");

    let handler = &handler;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        Ok::<GatewayResponse, lambda_runtime::Error>(handler.handle(event.payload).await)
    }))
    .await
    .map_err(|e| anyhow::anyhow!("Lambda runtime failed: {}", e))
}
