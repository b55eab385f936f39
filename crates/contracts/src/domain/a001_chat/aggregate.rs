use serde::{Deserialize, Serialize};
use std::fmt;

/// Путь эндпоинта чата
pub const CHAT_PATH: &str = "/chat";

/// Content-Type тела запроса чата
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Автор сообщения в журнале чата
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Bot => "bot",
        }
    }

    /// Префикс перед текстом сообщения
    pub fn label(&self) -> &'static str {
        match self {
            ChatRole::User => "Tú",
            ChatRole::Bot => "Bot",
        }
    }
}

/// Одна запись журнала чата.
///
/// Записи только добавляются в журнал; идентичность записи: её позиция в нём.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            text: text.into(),
        }
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.role.label(), self.text)
    }
}

/// Тело запроса POST /chat (form-urlencoded)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Ответ POST /chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
