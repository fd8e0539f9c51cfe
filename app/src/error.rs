use std::{fmt::Display, marker::PhantomData};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct AppError<K, T> {
    pub status: StatusCode,
    pub detail: T,
    kind: PhantomData<K>,
}
impl<K, T> AppError<K, T> {
    pub fn new(status: StatusCode, detail: T) -> Self {
        Self { status, detail, kind: PhantomData }
    }
}
impl<K: kind::Kind, T: Display> Display for AppError<K, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", K::msg(), self.detail)
    }
}
impl<K: kind::Kind, T: Display + Serialize> IntoResponse for AppError<K, T> {
    fn into_response(self) -> Response {
        tracing::warn!("{} {}", self.status, self);
        let body = ErrorResponse { msg: K::msg().to_string(), detail: self.detail };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse<T> {
    pub msg: String,
    pub detail: T,
}

pub mod kind {
    pub trait Kind {
        fn msg() -> &'static str;
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NotFound {}
    impl Kind for NotFound {
        fn msg() -> &'static str {
            "not found"
        }
    }
}
