//! Newsdesk - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use clap::{Parser, ValueEnum};
#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newsdesk_player::infrastructure::backend::{build_client, BackendConfig};
use newsdesk_player::infrastructure::platform::create_platform;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(version)]
#[command(about = "Write a kids' newspaper article, step by step")]
#[command(long_about = None)]
struct Cli {
    /// Run the wizard in the terminal instead of a window
    #[arg(long)]
    terminal: bool,

    /// Skip the level menu for the first article
    #[arg(long, short, value_enum, requires = "terminal")]
    level: Option<LevelArg>,

    /// Where the terminal run writes the finished newspaper page
    #[arg(long, short, default_value = newsdesk_player::ui::terminal::DEFAULT_OUTPUT_PATH)]
    output: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LevelArg {
    Beginner,
    Intermediate,
    Advanced,
}

#[cfg(not(target_arch = "wasm32"))]
impl From<LevelArg> for newsdesk_domain::WizardLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Beginner => Self::Beginner,
            LevelArg::Intermediate => Self::Intermediate,
            LevelArg::Advanced => Self::Advanced,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use dioxus_desktop::{Config, WindowBuilder};

    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout belongs to the terminal dialogue
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "newsdesk_player=info,newsdesk_engine=info,dioxus=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    tracing::info!("Starting Newsdesk");

    // Platform
    let platform = create_platform();

    // Generation backend
    let config = BackendConfig::from_host(platform.host().as_ref())?;
    let client = build_client(&config);

    if cli.terminal {
        return run_terminal(cli, platform, client);
    }

    // Launch Dioxus
    let cfg = Config::new().with_window(WindowBuilder::new().with_title("News Creator"));
    dioxus::LaunchBuilder::new()
        .with_cfg(cfg)
        .with_context(platform)
        .with_context(client)
        .launch(newsdesk_player::ui::app);

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn run_terminal(
    cli: Cli,
    platform: newsdesk_player::Platform,
    client: newsdesk_engine::GenerationClient,
) -> anyhow::Result<()> {
    use newsdesk_player::ui::terminal::{TerminalApp, TerminalOptions};

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        if !client.check_health().await {
            tracing::warn!("Generation backend not reachable, articles may fall back to templates");
        }

        let options = TerminalOptions {
            level: cli.level.map(Into::into),
            output_path: cli.output,
        };

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        TerminalApp::new(stdin.lock(), stdout.lock(), &platform, client, options)
            .run()
            .await
    })?;

    tracing::info!("Newsdesk finished");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting Newsdesk");

    // Platform
    let platform = create_platform();

    // Generation backend; a bad URL must not leave a blank page
    let config = BackendConfig::from_host_or_default(platform.host().as_ref());
    let client = build_client(&config);

    // Launch Dioxus; the stage layout binds the viewport scaler once mounted
    dioxus::LaunchBuilder::new()
        .with_context(platform)
        .with_context(client)
        .launch(newsdesk_player::ui::app);
}
