use anyhow::Result;
use clap::{Parser, Subcommand};

use mtlhud::hud::{HudController, Launchctl};
use mtlhud::login::LaunchAgent;
use mtlhud::settings::SettingsStore;

#[derive(Parser)]
#[command(name = "mtlhud")]
#[command(about = "Menu-style controller for the macOS Metal performance HUD")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the control panel (default)
    Gui,

    /// Apply the stored HUD settings to the user session
    Apply,

    /// Remove the HUD enable flag from the user session
    Disable,

    /// Print the stored HUD settings
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Apply) => {
            let mut store = SettingsStore::load(Box::new(LaunchAgent));
            let controller = HudController::new(Box::new(Launchctl));
            controller.apply(&mut store);
            println!("{}", store.settings().status_message);
        }
        Some(Commands::Disable) => {
            let mut store = SettingsStore::load(Box::new(LaunchAgent));
            let controller = HudController::new(Box::new(Launchctl));
            controller.disable(&mut store);
            println!("{}", store.settings().status_message);
        }
        Some(Commands::Status) => {
            let store = SettingsStore::load(Box::new(LaunchAgent));
            let settings = store.settings();
            let elements = settings
                .selected_elements
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(",");
            println!("enabled:         {}", settings.enabled);
            println!("elements:        {}", elements);
            println!("scale:           {:.3}", settings.scale);
            println!("opacity:         {:.3}", settings.opacity);
            println!("alignment:       {}", settings.alignment);
            println!("open at login:   {}", settings.launch_at_login);
            println!("enable on boot:  {}", settings.enable_on_boot);
        }
        Some(Commands::Gui) | None => {
            mtlhud::gui::run_gui()?;
        }
    }

    Ok(())
}
