use anyhow::Result;
use cellsim_core::{init_file_logging, init_logging, AppConfig, SpawnRequest};
use cellsim_lib::app::App;
use cellsim_lib::headless;
use cellsim_tui::Tui;
use clap::Parser;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Ticks to run in headless mode
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// RNG seed, overriding the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Seed cells before starting, as kind:x:y (repeatable)
    #[arg(long = "spawn", value_name = "KIND:X:Y")]
    spawn: Vec<SpawnRequest>,

    /// Print the headless summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = if Path::new(&args.config).exists() {
        AppConfig::load_strict(&args.config)?
    } else {
        AppConfig::load(&args.config)
    };
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    config.validate()?;

    match args.mode {
        Mode::Headless => {
            init_logging();
            let summary = headless::run(config, &args.spawn, args.ticks);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
            }
        }
        Mode::Standard => {
            // The TUI owns stdout, so logs go to a file.
            init_file_logging("logs/cellsim.log")?;

            let mut tui = Tui::new()?;
            tui.init()?;

            let mut app = App::new(config, &args.spawn);
            let res = app.run(&mut tui).await;

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            } else {
                println!("Exited clean.");
            }
        }
    }

    Ok(())
}
