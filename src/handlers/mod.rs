//! Lambda entry logic, one handler per gateway route.

mod authorizer;
mod disconnect;
mod message;
mod types;

pub use authorizer::{
    AuthorizerResponse, ConnectAuthorizer, Effect, PolicyDocument, PolicyStatement,
};
pub use disconnect::DisconnectHandler;
pub use message::{echo_payload, MessageHandler};
pub use types::{BestEffort, GatewayResponse};
