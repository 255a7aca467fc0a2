use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // caller mistakes
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found")]
    NotFound,
    #[error("unauthorized")]
    Unauthorized,

    // infra things
    #[error("invalid stored state: {0}")]
    InvalidState(String),
    #[error(transparent)]
    Db(sea_orm::DbErr),
}

impl From<DbErr> for Error {
    fn from(e: DbErr) -> Self {
        Error::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a, 'b> {
    error: &'a str,
    message: &'b str,
}

impl Error {
    fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Conflict(_) => "CONFLICT",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidState(_) => "INTERNAL_ERROR",
            Self::Db(_) => "DB_ERROR",
        }
    }

    fn from_db(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(_) => Error::NotFound,
            _ => Error::Db(err),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            // stored-data integrity violations are internal, never a 4xx
            Self::InvalidState(_) | Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorBody { error: self.kind(), message: self.kind() })
    }
}
