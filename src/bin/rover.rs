// Session interactive du rover martien
// Lit les commandes sur stdin (ou un fichier script) et affiche la grille après chacune

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use mars_rover::{
    ConfigOverrides, JsonRenderer, Orientation, Position, Renderer, Session, SimulationConfig,
    TerminalRenderer,
};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive a rover across a grid of obstacles")]
struct Args {
    /// JSON configuration file; command-line options override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the square grid
    #[arg(long)]
    grid_size: Option<i32>,

    /// Start cell as `x,y`
    #[arg(long)]
    start: Option<Position>,

    /// Start orientation (north, east, south, west)
    #[arg(long)]
    facing: Option<Orientation>,

    /// Obstacle cell as `x,y`; repeat for several. Replaces the configured list
    #[arg(long = "obstacle")]
    obstacles: Vec<Position>,

    /// Scatter obstacles with Perlin noise instead of using a fixed list
    #[arg(long)]
    generate: bool,

    /// Seed for --generate
    #[arg(long, requires = "generate")]
    seed: Option<u32>,

    /// Noise level above which a cell is blocked, for --generate
    #[arg(long, requires = "generate")]
    threshold: Option<f64>,

    /// Print one JSON snapshot per command instead of the grid
    #[arg(long)]
    json: bool,

    /// Disable colours in the grid
    #[arg(long)]
    no_color: bool,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // NOTE - logs go to stderr, the grid owns stdout
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(args: &Args) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_path(path)?,
        None => SimulationConfig::default(),
    };

    config.apply_overrides(ConfigOverrides {
        grid_size: args.grid_size,
        start_position: args.start,
        start_orientation: args.facing,
        obstacles: args.obstacles.clone(),
        generate: args.generate,
        seed: args.seed,
        threshold: args.threshold,
    });

    Ok(config)
}

fn run<R: Renderer>(
    session: Session<R>,
    input: Box<dyn BufRead>,
    quiet: bool,
) -> io::Result<()> {
    let mut session = if quiet { session.quiet() } else { session };
    let mut stdout = io::stdout();
    session.run(input, &mut stdout)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let config = load_config(&args)?;
    let rover = match config.build_rover() {
        Ok(rover) => rover,
        Err(e) => {
            error!(%e, "invalid configuration");
            return Err(e.into());
        }
    };

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    if args.json {
        run(Session::new(rover, JsonRenderer), input, true)?;
    } else {
        let color = !args.no_color && io::stdout().is_terminal();
        let renderer = TerminalRenderer::new(color);
        run(Session::new(rover, renderer), input, false)?;
    }

    Ok(())
}
