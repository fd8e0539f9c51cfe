pub mod logging {
    use std::{
        future::Future,
        pin::Pin,
        task::{Context, Poll},
    };

    use axum::{body::HttpBody, extract::Request, response::Response};
    use tower::{Layer, Service};

    /// Records `status method uri bytes` for every response, passing the request and response through untouched.
    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
    pub struct LoggingLayer;
    impl<S> Layer<S> for LoggingLayer {
        type Service = LoggingService<S>;

        fn layer(&self, service: S) -> Self::Service {
            LoggingService { inner: service }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
    pub struct LoggingService<S> {
        inner: S,
    }
    impl<S> Service<Request> for LoggingService<S>
    where
        S: Service<Request, Response = Response> + Send + 'static,
        S::Future: Send + 'static,
    {
        type Response = S::Response;
        type Error = S::Error;
        type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

        fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            self.inner.poll_ready(cx)
        }

        fn call(&mut self, req: Request) -> Self::Future {
            let (method, uri) = (req.method().clone(), req.uri().clone());
            let fut = self.inner.call(req);
            Box::pin(async move {
                let res = fut.await?;
                let (status, bytes) = (res.status(), res.size_hint().lower());
                tracing::info!("{} {} {} {}", status, method, uri, bytes);
                Ok(res)
            })
        }
    }

}
