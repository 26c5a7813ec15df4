mod command;

use anyhow::{Context, Result};
use board_clock_core::{formatting::FormattedTime, ClockEngine, Player, Settings, Snapshot, Ticker};
use clap::Parser;
use command::{Command, HELP};
use std::{
    fs::File,
    io::{self, BufRead},
    path::PathBuf,
};

#[derive(Parser)]
#[command(name = "clockctl", about = "A two-player board game clock in the terminal")]
struct Cli {
    /// Path to a JSON file with the clock settings.
    #[arg(long)]
    settings: Option<PathBuf>,
    /// The level to log at ("debug", "info", "warn", "error").
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn render(state: &Snapshot) -> String {
    let side = |player: Player| {
        let marker = match state.active_player {
            Some(p) if p == player && state.is_timed_out(p) => "!",
            Some(p) if p == player => "*",
            _ => " ",
        };
        format!("{}{}", FormattedTime(state.remaining(player)), marker)
    };
    format!(
        "top {}  bottom {}{}",
        side(Player::Top),
        side(Player::Bottom),
        if state.is_paused { "  (paused)" } else { "" }
    )
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    let path = match path {
        Some(path) => path,
        None => return Ok(Settings::default()),
    };
    let file = File::open(path).with_context(|| format!("Couldn't open {}", path.display()))?;
    Settings::from_reader(io::BufReader::new(file))
        .with_context(|| format!("Couldn't load settings from {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    simple_log::console(cli.log_level.as_str()).map_err(anyhow::Error::msg)?;

    let settings = load_settings(cli.settings.as_ref())?;
    let clock = ClockEngine::with_settings(&settings).into_shared();

    let mut last_rendered = None;
    let ticker = Ticker::with_observer(clock.clone(), settings.tick_interval(), move |state| {
        if last_rendered.as_ref() != Some(state) {
            println!("{}", render(state));
            last_rendered = Some(*state);
        }
    })?;

    println!("{}", render(&clock.read().snapshot()));

    for line in io::stdin().lock().lines() {
        let command = match Command::parse(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("{}", e);
                continue;
            }
        };

        let state = {
            let mut clock = clock.write();
            match command {
                Command::Pad(player) => clock.press_pad(player),
                Command::TogglePause => clock.toggle_pause(),
                Command::Reset => clock.reset(),
                Command::Configure(duration) => {
                    clock.configure_duration(duration);
                    log::info!("Next reset hands out {}", FormattedTime(duration));
                }
                Command::Show => {}
                Command::Json => {
                    println!("{}", serde_json::to_string(&clock.snapshot())?);
                    continue;
                }
                Command::Help => {
                    println!("{}", HELP);
                    continue;
                }
                Command::Quit => break,
            }
            clock.snapshot()
        };
        println!("{}", render(&state));
    }

    ticker.stop()?;
    Ok(())
}
