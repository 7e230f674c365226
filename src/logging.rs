use anyhow::{Error, Result};
use tracing_subscriber::{fmt, EnvFilter};

pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(Error::msg)?;
    Ok(())
}
