//! Chat Panel - Model (API functions)

use crate::shared::api_utils::{form_urlencode, send_json};
use async_trait::async_trait;
use contracts::domain::a001_chat::aggregate::{ChatRequest, ChatResponse, FORM_URLENCODED};
use gloo_net::http::Request;

/// Backend side of the chat flow
#[async_trait(?Send)]
pub trait ChatApi {
    async fn send_message(&self, message: &str) -> Result<ChatResponse, String>;
}

/// Headers sent with every chat request
pub const CHAT_HEADERS: [(&str, &str); 1] = [("Content-Type", FORM_URLENCODED)];

/// Body of POST /chat: `message=<text>`
pub fn form_body(request: &ChatRequest) -> String {
    form_urlencode(&[("message", &request.message)])
}

/// `ChatApi` over `fetch`
#[derive(Debug, Clone)]
pub struct HttpChatApi {
    url: String,
}

impl HttpChatApi {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl ChatApi for HttpChatApi {
    async fn send_message(&self, message: &str) -> Result<ChatResponse, String> {
        let body = form_body(&ChatRequest::new(message));
        let request = CHAT_HEADERS
            .iter()
            .fold(Request::post(&self.url), |builder, (name, value)| {
                builder.header(name, value)
            })
            .body(body)
            .map_err(|e| e.to_string())?;
        send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_body() {
        assert_eq!(form_body(&ChatRequest::new("Hola")), "message=Hola");
        assert_eq!(
            form_body(&ChatRequest::new("¿Qué tal?")),
            "message=%C2%BFQu%C3%A9%20tal%3F"
        );
    }

    #[test]
    fn test_chat_request_is_form_urlencoded() {
        assert_eq!(
            CHAT_HEADERS,
            [("Content-Type", "application/x-www-form-urlencoded")]
        );
    }
}
