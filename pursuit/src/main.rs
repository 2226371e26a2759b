mod render;
mod simulation;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pursuit_agents::{MoveSelector, DEFAULT_DEPTH};
use pursuit_core::{BoardExtent, Coord, GridState, Role};
use simulation::{Phase, PolicyKind, Simulation, SimulationConfig};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Evader and pursuer on a grid, moving by depth-limited minimax.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play one game (the default)
    Run(RunArgs),
    /// Show the move a policy picks in one position
    Select(SelectArgs),
    /// Pit the greedy and minimax pursuers against the same evader
    Compare(CompareArgs),
}

#[derive(Args, Debug, Clone)]
struct BoardArgs {
    #[arg(long, default_value_t = 5)]
    rows: u16,

    #[arg(long, default_value_t = 10)]
    cols: u16,

    /// Minimax search depth in plies
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,
}

impl BoardArgs {
    fn extent(&self) -> Result<BoardExtent> {
        BoardExtent::new(self.rows, self.cols).context("invalid board size")
    }
}

#[derive(Args, Debug, Clone)]
struct GameArgs {
    #[command(flatten)]
    board: BoardArgs,

    /// Rounds before the evader counts as escaped
    #[arg(long, default_value_t = 81)]
    max_turns: u32,

    /// Opening rounds in which the evader wanders randomly and the pursuer waits
    #[arg(long, default_value_t = 31)]
    wander_turns: u32,

    #[arg(long, value_enum, default_value_t = PolicyKind::Minimax)]
    evader: PolicyKind,
}

impl GameArgs {
    fn config(&self, pursuer: PolicyKind, seed: Option<u64>) -> Result<SimulationConfig> {
        let mut config = SimulationConfig::with_extent(self.board.extent()?);
        config.depth = self.board.depth;
        config.max_turns = self.max_turns;
        config.wander_turns = self.wander_turns;
        config.evader_policy = self.evader;
        config.pursuer_policy = pursuer;
        config.seed = seed;
        Ok(config)
    }
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    #[command(flatten)]
    game: GameArgs,

    #[arg(long, value_enum, default_value_t = PolicyKind::Minimax)]
    pursuer: PolicyKind,

    /// Seed every random choice for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Wait for Enter before each pursuit move
    #[arg(long)]
    step: bool,

    /// Print only the result
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Args, Debug)]
struct SelectArgs {
    #[command(flatten)]
    board: BoardArgs,

    /// Agent to move: evader or pursuer
    #[arg(long)]
    role: Role,

    /// Evader position as row,col
    #[arg(long)]
    evader: Coord,

    /// Pursuer position as row,col
    #[arg(long)]
    pursuer: Coord,

    #[arg(long, value_enum, default_value_t = PolicyKind::Minimax)]
    policy: PolicyKind,

    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct CompareArgs {
    #[command(flatten)]
    game: GameArgs,

    /// Games per pursuer policy
    #[arg(short, long, default_value_t = 20)]
    games: u32,

    /// Seed of the first game; later games count up from it
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn wait_for_enter(role: Role) -> Result<()> {
    print!("Press Enter to move the {}...", role);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    Ok(())
}

fn run_game(args: &RunArgs) -> Result<()> {
    let config = args.game.config(args.pursuer, args.seed)?;
    let mut sim = Simulation::new(config).context("invalid starting position")?;
    let mut stdout = io::stdout();

    if !args.quiet {
        println!("Board {}", sim.state().extent());
        render::draw_board(&mut stdout, sim.state())?;
    }

    while let Some(role) = sim.next_mover() {
        if args.step && sim.phase() == Phase::Pursuit {
            wait_for_enter(role)?;
        }

        let Some(record) = sim.step()? else {
            break;
        };

        if !args.quiet {
            println!("\n{}", render::header(&record));
            render::draw_board(&mut stdout, sim.state())?;
        }
    }

    if let Some(outcome) = sim.outcome() {
        println!("\n{}", outcome);
    }
    Ok(())
}

fn select(args: &SelectArgs) -> Result<()> {
    let extent = args.board.extent()?;
    let state = GridState::new(extent, args.evader, args.pursuer).context("invalid position")?;

    render::draw_board(&mut io::stdout(), &state)?;

    if args.policy == PolicyKind::Minimax {
        let mut selector = match args.seed {
            Some(seed) => MoveSelector::with_seed(args.board.depth, seed),
            None => MoveSelector::new(args.board.depth),
        };
        let result = selector.search(args.role, &state);
        match (result.best_move, result.score) {
            (Some(best_move), Some(score)) => {
                println!("Best move: {}", best_move);
                println!("Score: {}", score);
                println!("Depth: {}", result.depth);
                println!("Nodes: {}", result.nodes);
            }
            _ => println!("No legal moves available, {} stays at {}", args.role, args.role.position_of(&state)),
        }
    } else {
        let mut policy = args.policy.build(args.board.depth, args.seed);
        let to = policy.choose_move(args.role, &state);
        println!("{} moves {} -> {}", policy.name(), args.role.position_of(&state), to);
    }

    Ok(())
}

fn compare(args: &CompareArgs) -> Result<()> {
    println!(
        "{} games per pursuer on a {}x{} board, evader {:?}, depth {}",
        args.games, args.game.board.rows, args.game.board.cols, args.game.evader, args.game.board.depth
    );

    for pursuer in [PolicyKind::Greedy, PolicyKind::Minimax] {
        let mut captures = 0;
        let mut total_rounds = 0u64;

        for game in 0..args.games {
            let seed = args.seed.wrapping_add(u64::from(game));
            let config = args.game.config(pursuer, Some(seed))?;
            let outcome = Simulation::new(config)
                .context("invalid starting position")?
                .run()?;

            info!(?pursuer, game, %outcome, "game finished");
            if outcome.is_capture() {
                captures += 1;
            }
            total_rounds += u64::from(outcome.rounds());
        }

        let average = if args.games == 0 {
            0.0
        } else {
            total_rounds as f64 / f64::from(args.games)
        };
        println!(
            "pursuer {:<8} captures {:>3}/{:<3} average rounds {:.1}",
            format!("{:?}", pursuer),
            captures,
            args.games,
            average
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(Command::Run(args)) => run_game(args),
        Some(Command::Select(args)) => select(args),
        Some(Command::Compare(args)) => compare(args),
        None => run_game(&cli.run),
    }
}
