use crate::error::ServerError;
use crate::state::ServerState;
use axum::extract::{FromRequest, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Chat request body, as JSON or as a URL-encoded form.
#[derive(Debug, Default, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Chat response body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub reply: String,
}

/// The `message` field of a chat request.
///
/// JSON bodies are read when the content type says JSON, anything else is
/// read as a form. A body that fails to parse, lacks `message` or carries an
/// empty one is rejected with `400 {"error": "no message provided"}`.
/// Whitespace-only messages are accepted and answered by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageInput(pub String);

impl<S> FromRequest<S> for MessageInput
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = if is_json(&req) {
            match Json::<MessageRequest>::from_request(req, state).await {
                Ok(Json(body)) => Some(body),
                Err(rejection) => {
                    tracing::debug!(error = %rejection, "message_json_rejected");
                    None
                }
            }
        } else {
            match Form::<MessageRequest>::from_request(req, state).await {
                Ok(Form(body)) => Some(body),
                Err(rejection) => {
                    tracing::debug!(error = %rejection, "message_form_rejected");
                    None
                }
            }
        };

        match body.and_then(|body| body.message) {
            Some(message) if !message.is_empty() => Ok(Self(message)),
            _ => Err(ServerError::no_message()),
        }
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// `POST /api/message`
pub async fn post_message(
    State(state): State<Arc<ServerState>>,
    MessageInput(message): MessageInput,
) -> Json<MessageResponse> {
    let reply = state.responder.respond(&message);
    Json(MessageResponse { reply })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::error::ErrorResponse;
    use crate::server::build_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use knowledge::parse_knowledge;
    use matcher::{Matcher, Responder};
    use tower::ServiceExt;

    fn app() -> axum::Router {
        let kb = parse_knowledge("what is your name|I am highxbot.\n42|the answer to everything\n");
        let responder = Responder::new(Matcher::new(kb));
        build_router(Arc::new(ServerState::new(
            ServerConfig::default(),
            "highxbot",
            responder,
        )))
    }

    fn post(content_type: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri("/api/message");
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    async fn expect_reply(request: Request<Body>) -> String {
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: MessageResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        body.reply
    }

    async fn expect_no_message(request: Request<Body>) {
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body.error, "no message provided");
    }

    #[tokio::test]
    async fn json_message_gets_reply() {
        let reply = expect_reply(post(
            Some("application/json"),
            r#"{"message": "What is your name?"}"#,
        ))
        .await;
        assert_eq!(reply, "I am highxbot.");
    }

    #[tokio::test]
    async fn json_with_charset_is_json() {
        let reply = expect_reply(post(
            Some("application/json; charset=utf-8"),
            r#"{"message": "42"}"#,
        ))
        .await;
        assert_eq!(reply, "the answer to everything");
    }

    #[tokio::test]
    async fn form_message_gets_reply() {
        let reply = expect_reply(post(
            Some("application/x-www-form-urlencoded"),
            "message=What+is+your+name%3F",
        ))
        .await;
        assert_eq!(reply, "I am highxbot.");
    }

    #[tokio::test]
    async fn whitespace_message_is_answered() {
        let reply = expect_reply(post(Some("application/json"), r#"{"message": "   "}"#)).await;
        assert_eq!(reply, "Please say something.");
    }

    #[tokio::test]
    async fn missing_or_empty_message_is_rejected() {
        expect_no_message(post(Some("application/json"), "{}")).await;
        expect_no_message(post(Some("application/json"), r#"{"message": ""}"#)).await;
        expect_no_message(post(Some("application/json"), r#"{"message": null}"#)).await;
        expect_no_message(post(Some("application/x-www-form-urlencoded"), "other=1")).await;
    }

    #[tokio::test]
    async fn unparseable_body_is_rejected() {
        expect_no_message(post(Some("application/json"), "{not json")).await;
        expect_no_message(post(Some("application/json"), r#"{"message": 42}"#)).await;
        expect_no_message(post(None, "message=hi")).await;
        expect_no_message(post(Some("text/plain"), "hello")).await;
    }
}
