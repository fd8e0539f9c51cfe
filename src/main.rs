use exercisedb_dev_server::{env::Env, serve};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt::init();
    let env = Env::environment(Default::default());
    serve(env, exercisedb_app::app()).await?;
    Ok(())
}
