use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Utc};
use faqdesk::chat::{overview, ChatSession, QuickAction, Role};
use faqdesk::config::{load_or_default, resolve_profile_path, workspace_root};
use faqdesk::profile::load_or_default as load_profile_or_default;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("faqdesk=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = CliArgs::parse()?;
    let config = load_or_default()?;
    let workspace = workspace_root()?;
    let profile_path = resolve_profile_path(&config, args.profile.as_deref(), &workspace);
    let profile = load_profile_or_default(profile_path.as_deref());

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut chat = ChatSession::with_rng(profile, rng);
    tracing::info!(session = %chat.session_id(), "Chat session started");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{} AI Assistant", chat.profile().name())?;
    writeln!(
        out,
        "Your 24/7 {} Assistant | Secure • Fast • Reliable\n",
        chat.profile().kind()
    )?;
    if config.chat.show_overview && !args.no_overview {
        writeln!(out, "{}\n", overview::render_overview(chat.profile()))?;
    }
    writeln!(out, "assistant> {}\n", chat.messages()[0].content)?;
    print_commands(&mut out)?;

    let stdin = io::stdin();
    loop {
        write!(out, "{} ", overview::input_hint(chat.profile()))?;
        out.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let prompt = line.trim();
        if prompt.is_empty() {
            continue;
        }
        let reply = match prompt {
            "/quit" | "/exit" => break,
            "/history" => {
                print_history(&mut out, &chat)?;
                continue;
            }
            "/help" => {
                print_commands(&mut out)?;
                continue;
            }
            other => match QuickAction::from_command(other) {
                Some(action) => chat.quick_action(action),
                None if other.starts_with('/') => {
                    writeln!(out, "Unknown command `{other}`.")?;
                    print_commands(&mut out)?;
                    continue;
                }
                None => chat.send(other),
            },
        };
        writeln!(out, "assistant> {}\n", reply.content.trim_end())?;
    }

    writeln!(out, "\n{}", overview::footer(chat.profile(), Utc::now().year()))?;
    if let Some(path) = args.transcript {
        write_transcript(&path, &chat)?;
        writeln!(out, "Transcript written to {}", path.display())?;
    }
    Ok(())
}

struct CliArgs {
    profile: Option<PathBuf>,
    seed: Option<u64>,
    no_overview: bool,
    transcript: Option<PathBuf>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut profile = None;
        let mut seed = None;
        let mut no_overview = false;
        let mut transcript = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--profile" => {
                    let value = args
                        .next()
                        .context("Expected a file path after --profile")?;
                    profile = Some(PathBuf::from(value));
                }
                "--seed" => {
                    let value = args.next().context("Expected a number after --seed")?;
                    seed = Some(
                        value
                            .parse()
                            .with_context(|| format!("Invalid --seed value '{value}'"))?,
                    );
                }
                "--transcript" => {
                    let value = args
                        .next()
                        .context("Expected a file path after --transcript")?;
                    transcript = Some(PathBuf::from(value));
                }
                "--no-overview" => no_overview = true,
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
            seed,
            no_overview,
            transcript,
        })
    }
}

fn print_usage() {
    println!("FaqDesk terminal assistant");
    println!("Answers customer questions from a business profile.");
    println!("Usage: cargo run --bin faqdesk -- [options]");
    println!("Options:");
    println!("  --profile <path>      Business profile (.json/.yaml) to answer from");
    println!("  --seed <n>            Seed template choices for reproducible replies");
    println!("  --no-overview         Skip the business overview panels");
    println!("  --transcript <path>   Write the conversation as JSON on exit");
}

fn print_commands(out: &mut impl Write) -> Result<()> {
    let actions = QuickAction::ALL
        .iter()
        .map(|action| format!("{} ({})", action.command(), action.prompt()))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "Quick actions: {actions}")?;
    writeln!(out, "Commands: /history, /help, /quit\n")?;
    Ok(())
}

fn print_history(out: &mut impl Write, chat: &ChatSession<StdRng>) -> Result<()> {
    for message in chat.messages() {
        let speaker = match message.role {
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        writeln!(
            out,
            "[{}] {speaker}> {}",
            message.sent_at.format("%H:%M:%S"),
            message.content.trim_end()
        )?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_transcript(path: &Path, chat: &ChatSession<StdRng>) -> Result<()> {
    let payload = serde_json::to_vec_pretty(chat.messages())
        .context("Failed serializing conversation transcript")?;
    fs::write(path, payload)
        .with_context(|| format!("Failed writing transcript {:?}", path))?;
    Ok(())
}
