pub mod banner;
pub mod env;
pub mod error;
pub mod middleware;

use std::{convert::Infallible, future::Future, io::Write, net::SocketAddr};

use axum::{extract::Request, response::Response};
use tokio::net::TcpListener;
use tower::{Layer, Service};

use crate::{
    banner::Banner,
    env::{Env, Port},
    error::{LaunchError, LaunchResult},
    middleware::logging::LoggingLayer,
};

/// Print the banner, listen on the configured port and hand every request to `app` until shutdown.
pub async fn serve<S>(env: Env, app: S) -> LaunchResult<()>
where
    S: Service<Request, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    let launcher = Launcher::new(env)?;
    launcher.announce(&mut std::io::stdout())?;
    launcher.listen().await?.serve(app).await
}

/// Starting state, the port is already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    env: Env,
    port: Port,
}
impl Launcher {
    pub fn new(env: Env) -> LaunchResult<Self> {
        let port = env.port()?;
        Ok(Self { env, port })
    }

    pub fn port(&self) -> Port {
        self.port
    }

    pub fn banner(&self) -> Banner {
        Banner::new(self.port)
    }

    pub fn announce<W: Write>(&self, out: &mut W) -> LaunchResult<()> {
        writeln!(out, "{}", self.banner())?;
        Ok(out.flush()?)
    }

    pub async fn listen(self) -> LaunchResult<Listening> {
        let Self { env, port } = self;
        match TcpListener::bind((env.listen.as_str(), port.get())).await {
            Ok(listener) => Ok(Listening::from_listener(listener)),
            Err(source) => Err(LaunchError::Bind { addr: format!("{}:{}", env.listen, port), source }),
        }
    }
}

/// Listening state, owns the bound socket.
#[derive(Debug)]
pub struct Listening {
    listener: TcpListener,
}
impl Listening {
    pub fn from_listener(listener: TcpListener) -> Self {
        Self { listener }
    }

    pub fn local_addr(&self) -> LaunchResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn serve<S>(self, app: S) -> LaunchResult<()>
    where
        S: Service<Request, Response = Response, Error = Infallible> + Clone + Send + 'static,
        S::Future: Send + 'static,
    {
        self.serve_with_shutdown(app, shutdown_signal()).await
    }

    pub async fn serve_with_shutdown<S, F>(self, app: S, signal: F) -> LaunchResult<()>
    where
        S: Service<Request, Response = Response, Error = Infallible> + Clone + Send + 'static,
        S::Future: Send + 'static,
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("start app on {}", self.local_addr()?);
        let app = axum::ServiceExt::<Request>::into_make_service(LoggingLayer.layer(app));
        axum::serve(self.listener, app).with_graceful_shutdown(signal).await?;
        tracing::info!("stop app");
        Ok(())
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use axum::{routing::get, Router};

    use super::*;

    fn local(port: u16) -> Env {
        Env { listen: "127.0.0.1".to_string(), port: port.to_string() }
    }

    #[test]
    fn test_launcher_resolves_port() {
        let launcher = Launcher::new(Env { port: "8080".to_string(), ..Default::default() }).unwrap();
        assert_eq!(launcher.port(), Port::new(8080));
        assert_eq!(launcher.banner(), Banner::new(Port::new(8080)));

        let launcher = Launcher::new(Default::default()).unwrap();
        assert_eq!(launcher.port().get(), 3000);
    }

    #[test]
    fn test_launcher_announce() {
        let launcher = Launcher::new(Env { port: "8080".to_string(), ..Default::default() }).unwrap();
        let mut out = Vec::new();
        launcher.announce(&mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.ends_with('\n'));
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.contains("8080")));
        assert_eq!(lines[1], "📖 API docs available at: http://localhost:8080/docs");
    }

    #[test]
    fn test_launcher_invalid_port() {
        let err = Launcher::new(Env { port: "70000".to_string(), ..Default::default() }).unwrap_err();
        assert!(matches!(err, LaunchError::InvalidPort { .. }));
    }

    #[tokio::test]
    async fn test_listen_on_exact_port() {
        let port = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap().port();
        let listening = Launcher::new(local(port)).unwrap().listen().await.unwrap();
        assert_eq!(listening.local_addr().unwrap().port(), port);
    }

    #[tokio::test]
    async fn test_listen_on_occupied_port() {
        let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = occupied.local_addr().unwrap().port();

        match Launcher::new(local(port)).unwrap().listen().await {
            Err(LaunchError::Bind { addr, source }) => {
                assert_eq!(addr, format!("127.0.0.1:{port}"));
                assert_eq!(source.kind(), io::ErrorKind::AddrInUse);
            }
            other => panic!("port {port} is occupied, but {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_serve_with_shutdown() {
        let listening = Listening::from_listener(TcpListener::bind("127.0.0.1:0").await.unwrap());
        let app = Router::new().route("/", get(|| async { "ok" }));
        let result = listening.serve_with_shutdown(app, async {}).await;
        assert!(result.is_ok());
    }
}
