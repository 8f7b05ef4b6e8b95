use anyhow::Result;
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;

use ws_gateway_functions::auth::JwtValidator;
use ws_gateway_functions::config::Settings;
use ws_gateway_functions::handlers::{AuthorizerResponse, ConnectAuthorizer};
use ws_gateway_functions::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    telemetry::init_tracing(&settings.log)?;

    let authorizer = ConnectAuthorizer::new(JwtValidator::new(settings.authorizer()?));
    tracing::info!("Connect authorizer initialized");

    let authorizer = &authorizer;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        Ok::<AuthorizerResponse, lambda_runtime::Error>(authorizer.authorize(&event.payload))
    }))
    .await
    .map_err(|e| anyhow::anyhow!("Lambda runtime failed: {}", e))
}
