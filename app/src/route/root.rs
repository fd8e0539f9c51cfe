#[tracing::instrument]
pub async fn root() -> String {
    "ExerciseDB API".to_string()
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };

    use crate::route::{app, tests::call_bytes};

    use super::*;

    #[tokio::test]
    async fn test_root_function() {
        let res = root().await;
        assert_eq!(res, "ExerciseDB API");
    }

    #[tokio::test]
    async fn test_root() {
        let mut app = app();

        let (status, body) = call_bytes(&mut app, Request::builder().uri("/").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"ExerciseDB API");
    }
}
