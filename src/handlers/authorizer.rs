//! Request authorizer for the `$connect` route.
//!
//! Reads a bearer token from the `token` query parameter and answers with an
//! IAM policy allowing or denying `execute-api:Invoke`. Never fails: any
//! problem with the token becomes a `Deny`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::JwtValidator;
use crate::event::query_param;

const TOKEN_PARAM: &str = "token";
const PRINCIPAL_ID: &str = "user";
const POLICY_VERSION: &str = "2012-10-17";
const INVOKE_ACTION: &str = "execute-api:Invoke";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub action: String,
    pub effect: Effect,
    pub resource: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<PolicyStatement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerResponse {
    pub principal_id: String,
    pub policy_document: PolicyDocument,
}

impl AuthorizerResponse {
    pub fn new(effect: Effect) -> Self {
        Self {
            principal_id: PRINCIPAL_ID.to_string(),
            policy_document: PolicyDocument {
                version: POLICY_VERSION.to_string(),
                statement: vec![PolicyStatement {
                    action: INVOKE_ACTION.to_string(),
                    effect,
                    resource: "*".to_string(),
                }],
            },
        }
    }

    pub fn effect(&self) -> Option<Effect> {
        self.policy_document.statement.first().map(|s| s.effect)
    }
}

pub struct ConnectAuthorizer {
    validator: JwtValidator,
}

impl ConnectAuthorizer {
    pub fn new(validator: JwtValidator) -> Self {
        Self { validator }
    }

    #[tracing::instrument(name = "ws.authorize", skip(self, event))]
    pub fn authorize(&self, event: &Value) -> AuthorizerResponse {
        let Some(token) = query_param(event, TOKEN_PARAM) else {
            tracing::warn!("Connect request without token");
            return AuthorizerResponse::new(Effect::Deny);
        };

        match self.validator.validate(token) {
            Ok(claims) => {
                tracing::info!(user_id = %claims.user_id(), "Valid token for request");
                AuthorizerResponse::new(Effect::Allow)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Token rejected");
                AuthorizerResponse::new(Effect::Deny)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthorizerConfig;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    const SECRET: &str = "authorizer-test-secret";

    fn authorizer() -> ConnectAuthorizer {
        ConnectAuthorizer::new(JwtValidator::new(&AuthorizerConfig {
            secret: SECRET.to_string(),
            issuer: None,
            audience: None,
        }))
    }

    fn token(secret: &str, exp_offset: i64) -> String {
        let exp = chrono::Utc::now().timestamp() + exp_offset;
        encode(
            &Header::default(),
            &json!({ "sub": "user-1", "exp": exp }),
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn request(token: &str) -> Value {
        json!({
            "type": "REQUEST",
            "methodArn": "arn:aws:execute-api:us-east-1:123456789012:abc/dev/$connect",
            "queryStringParameters": { "token": token }
        })
    }

    #[test]
    fn test_policy_shape() {
        let value = serde_json::to_value(AuthorizerResponse::new(Effect::Allow)).unwrap();
        assert_eq!(
            value,
            json!({
                "principalId": "user",
                "policyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Action": "execute-api:Invoke",
                        "Effect": "Allow",
                        "Resource": "*"
                    }]
                }
            })
        );
    }

    #[test]
    fn test_valid_token_allows() {
        let response = authorizer().authorize(&request(&token(SECRET, 3600)));
        assert_eq!(response.effect(), Some(Effect::Allow));
    }

    #[test]
    fn test_bad_tokens_deny() {
        let authorizer = authorizer();
        let no_subject = encode(
            &Header::default(),
            &json!({ "exp": chrono::Utc::now().timestamp() + 3600 }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        let cases = [
            request("not-a-jwt"),
            request(&no_subject),
            request(&token("other-secret", 3600)),
            request(&token(SECRET, -3600)),
            json!({ "queryStringParameters": null }),
            json!({}),
        ];
        for event in cases {
            assert_eq!(authorizer.authorize(&event).effect(), Some(Effect::Deny));
        }
    }
}
