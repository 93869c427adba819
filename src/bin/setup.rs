use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use faqdesk::config::{config_file_path, load_or_default, save};
use faqdesk::profile::read_profile;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("faqdesk=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse()?;
    let config_path = config_file_path()?;
    let mut config = load_or_default()?;
    let mut changed = false;

    if let Some(path) = args.profile {
        let path = path
            .canonicalize()
            .with_context(|| format!("Business profile {:?} does not exist", path))?;
        let profile = read_profile(&path)?;
        tracing::info!(
            business = profile.name(),
            services = profile.services.len(),
            products = profile.products.len(),
            "Validated business profile"
        );
        if config.profile.path.as_ref() != Some(&path) {
            config.profile.path = Some(path);
            changed = true;
        }
    }
    if let Some(show) = args.show_overview {
        if config.chat.show_overview != show {
            config.chat.show_overview = show;
            changed = true;
        }
    }

    if changed {
        save(&config)?;
        println!("FaqDesk settings recorded at {}", config_path.display());
    } else {
        println!("FaqDesk settings already configured.");
    }

    Ok(())
}

struct CliArgs {
    profile: Option<PathBuf>,
    show_overview: Option<bool>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut profile = None;
        let mut show_overview = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--profile" => {
                    let value = args
                        .next()
                        .context("Expected a file path after --profile")?;
                    profile = Some(PathBuf::from(value));
                }
                "--overview" => {
                    let value = args
                        .next()
                        .context("Expected `on` or `off` after --overview")?;
                    show_overview = Some(match value.as_str() {
                        "on" => true,
                        "off" => false,
                        other => bail!("Invalid --overview value '{other}', expected on/off"),
                    });
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(Self {
            profile,
            show_overview,
        })
    }
}

fn print_usage() {
    println!("FaqDesk setup");
    println!("Records the business profile and chat preferences in config.toml.");
    println!("Usage: cargo run --bin setup -- [options]");
    println!("Options:");
    println!("  --profile <path>      Business profile (.json/.yaml) to answer from");
    println!("  --overview <on|off>   Show overview panels when the chat starts (default: on)");
}
