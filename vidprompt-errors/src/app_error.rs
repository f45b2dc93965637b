use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const VALIDATION_MESSAGE: &str = "Por favor, preencha o nome, características e o ambiente.";
pub const GENERATION_MESSAGE: &str = "Falha ao gerar os prompts. Tente novamente.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Dados inválidos: {0}")]
    Validation(String),

    #[error("Falha na geração: {0}")]
    GenerationFailed(String),

    #[error("Falha no armazenamento: {0}")]
    Storage(String),

    #[error("Configuração inválida: {0}")]
    Configuration(String),

    #[error("Erro interno: {0}")]
    Internal(String),
}

impl FromStr for AppError {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("Dados inválidos") || s == VALIDATION_MESSAGE {
            Ok(AppError::Validation(s.to_string()))
        } else if s.starts_with("Falha na geração") || s == GENERATION_MESSAGE {
            Ok(AppError::GenerationFailed(s.to_string()))
        } else if s.starts_with("Falha no armazenamento") {
            Ok(AppError::Storage(s.to_string()))
        } else if s.starts_with("Configuração inválida") {
            Ok(AppError::Configuration(s.to_string()))
        } else {
            Ok(AppError::Internal(s.to_string()))
        }
    }
}

impl AppError {
    /// Text that is safe to show in the form. Internal details stay in the logs.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Validation(_) => VALIDATION_MESSAGE,
            Self::GenerationFailed(_) => GENERATION_MESSAGE,
            Self::Storage(_) => "Não foi possível salvar o rascunho.",
            Self::Configuration(_) => "O servidor não está configurado corretamente.",
            Self::Internal(_) => "Ocorreu um erro inesperado.",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
    }

    impl AppError {
        pub fn status_code(&self) -> StatusCode {
            match self {
                AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                AppError::GenerationFailed(_) => StatusCode::BAD_GATEWAY,
                AppError::Storage(_) | AppError::Configuration(_) | AppError::Internal(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = self.status_code();
            let message = self.user_message().to_string();
            (status, Json(ErrorResponse { message })).into_response()
        }
    }
}
