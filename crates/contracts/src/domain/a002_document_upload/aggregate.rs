use serde::{Deserialize, Serialize};
use std::fmt;

/// Путь эндпоинта загрузки документа
pub const UPLOAD_PATH: &str = "/upload";

/// Имя multipart-поля с файлом
pub const UPLOAD_FIELD: &str = "file";

/// Символ перед каждым сообщением сервера в статусе
pub const STATUS_MARKER: &str = "📌";

/// Статус при отправке формы без выбранного файла
pub const NO_FILE_SELECTED: &str = "❌ Selecciona un archivo.";

/// Ответ POST /upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
}

/// Текущая строка статуса загрузки. Каждая попытка перезаписывает предыдущую.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadStatus(pub String);

impl UploadStatus {
    pub fn no_file_selected() -> Self {
        Self(NO_FILE_SELECTED.to_string())
    }

    pub fn from_response(resp: &UploadResponse) -> Self {
        Self(format!("{} {}", STATUS_MARKER, resp.message))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
