//! Application wiring: CLI arguments → fetch → engine → catalog → stdout.
//!
//! Mirrors the three user-visible commands: fetch activity for a username,
//! switch the persisted display language, and show help. Everything that
//! prints resolves its text through the catalog in the active language.

use clap::Parser;
use gha_api::{Client, FetchError};
use gha_core::config::Config;
use gha_core::EventFilter;
use gha_render::{message, render_event, Language};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "gha",
    about = "GitHub user activity in your terminal",
    disable_help_flag = true
)]
pub struct Cli {
    /// GitHub username to fetch activity for.
    pub username: Option<String>,

    /// Only show events of one type (e.g. "push" or "PushEvent").
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Switch the display language and persist the choice.
    #[arg(short, long, value_name = "en|vi")]
    pub language: Option<String>,

    /// Show the localized help text.
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Write debug logs to /tmp/gha-debug.log (tail -f to inspect).
    #[arg(long)]
    pub debug: bool,
}

/// Dispatch a parsed command line. Prints directly; the returned code is the
/// process exit status.
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load().unwrap_or_else(|_| Config::defaults());
    let lang = Language::from_config(&config.display.language);

    if cli.help {
        println!("{}", message("help.text", &[], lang));
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(code) = cli.language.as_deref() {
        return switch_language(config, code);
    }

    let Some(username) = cli.username.as_deref() else {
        eprintln!("{}", message("error.default.missing_username", &[], lang));
        return Ok(ExitCode::FAILURE);
    };

    let client = Client::new(&config.api)?;
    match fetch_lines(&client, username, cli.filter.as_deref(), lang).await {
        Ok(lines) if lines.is_empty() => {
            println!("{}", message("info.no_activity", &[username], lang));
            Ok(ExitCode::SUCCESS)
        }
        Ok(lines) => {
            for line in lines {
                println!("- {line}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", fetch_error_message(&err, username, lang));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Persist a new display language. The confirmation prints in the language
/// just switched to; an invalid code reports in the current one.
fn switch_language(mut config: Config, code: &str) -> anyhow::Result<ExitCode> {
    let current = Language::from_config(&config.display.language);

    match code.parse::<Language>() {
        Ok(lang) => {
            config.display.language = lang.as_str().to_string();
            config.save()?;
            println!("{}", message("language.switched", &[], lang));
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => {
            eprintln!("{}", message("error.language.invalid", &[code], current));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Fetch a user's events and render each retained one as a display line.
pub async fn fetch_lines(
    client: &Client,
    username: &str,
    filter: Option<&str>,
    lang: Language,
) -> Result<Vec<String>, FetchError> {
    let body = client.user_events(username).await?;
    Ok(activity_lines(&body, filter, lang))
}

/// Run the engine over a response body and render each retained event.
pub fn activity_lines(body: &str, filter: Option<&str>, lang: Language) -> Vec<String> {
    let filter = filter.map(EventFilter::new);
    gha_core::summarize(body, filter.as_ref())
        .iter()
        .map(|event| render_event(event, lang))
        .collect()
}

/// Localized message for a fetch failure.
pub fn fetch_error_message(err: &FetchError, username: &str, lang: Language) -> String {
    match err {
        FetchError::NotFound => message("error.http.not_found", &[username], lang),
        FetchError::RateLimited => message("error.http.rate_limit", &[], lang),
        FetchError::Status(code) => message("error.http.generic", &[&code.to_string()], lang),
        FetchError::Connection(_) => message("error.http.connection", &[], lang),
    }
}
