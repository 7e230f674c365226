use anyhow::{bail, Context, Result};
use instrumentald_defaults::{logging, platform, render, resolve, AttributeOverrides, OutputFormat};

#[derive(Debug)]
struct Cli {
    platform_family: String,
    overrides_path: Option<String>,
    format: OutputFormat,
    log_level: String,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = std::env::args().skip(1);
        let mut platform_family: Option<String> = None;
        let mut overrides_path: Option<String> = None;
        let mut format = OutputFormat::default();
        let mut log_level = "warn".to_string();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--platform" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--platform requires a family"))?;
                    platform_family = Some(value);
                }
                "--overrides" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--overrides requires a path"))?;
                    overrides_path = Some(value);
                }
                "--format" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--format requires toml or json"))?;
                    format = value.parse()?;
                }
                "--log-level" => {
                    log_level = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--log-level requires a level"))?;
                }
                "--help" | "-h" => {
                    println!(
                        "Usage: instrumentald-defaults [--platform <family>] [--overrides <path>] [--format toml|json] [--log-level <level>]\n\
                         --platform <family>  Platform family to resolve for (default: this host)\n\
                         --overrides <path>   TOML file of attributes layered over the defaults\n\
                         --format <fmt>       Output format, toml or json (default: toml)\n\
                         --log-level <level>  Log filter when RUST_LOG is unset (default: warn)"
                    );
                    std::process::exit(0);
                }
                other => bail!("unknown argument '{other}'"),
            }
        }

        Ok(Self {
            platform_family: platform_family
                .unwrap_or_else(|| platform::host_family().to_string()),
            overrides_path,
            format,
            log_level,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse()?;
    logging::init(&cli.log_level)?;

    let mut defaults = resolve(&cli.platform_family);
    if let Some(path) = &cli.overrides_path {
        let overrides = AttributeOverrides::load(path)
            .context("unable to load overrides")?;
        defaults = defaults.with_overrides(overrides);
    }

    tracing::info!(
        family = %cli.platform_family,
        config_file = %defaults.config_file,
        "resolved instrumentald attributes"
    );
    print!("{}", render(&defaults, cli.format)?);
    Ok(())
}
