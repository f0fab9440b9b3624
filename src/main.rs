//! Cube Orientation Resolver
//!
//! Command-line front end: resolves six face readings into a valid cube
//! state, checks a 54-sticker state, or prints scrambled readings to feed
//! back into `resolve`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

use cube_orient::cube::validate_color_counts;
use cube_orient::moves::{format_sequence, parse_sequence, scramble, Move};
use cube_orient::{
    is_orientation_valid, CubeReading, Multiplicity, ResolutionError, ResolvedOrientation,
    Resolver, ResolverConfig, SearchStats, SearchStrategy,
};

/// Per-face quarter turns applied by `scramble --misrotate`, in U, R, F, D, L, B order.
const MISROTATION: [u8; 6] = [1, 2, 3, 0, 3, 1];

/// Finds the face rotations that turn six camera readings into a valid cube.
#[derive(Parser)]
#[command(name = "cube-orient")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve six face readings, given in U R F D L B order.
    Resolve {
        up: String,
        right: String,
        front: String,
        down: String,
        left: String,
        back: String,
        /// Spread the search over all cores.
        #[arg(long)]
        parallel: bool,
        /// Fail if more than one distinct cube state is valid.
        #[arg(long)]
        require_unique: bool,
        /// Also print the unfolded net.
        #[arg(long)]
        net: bool,
    },
    /// Check a 54-sticker state as-is, without rotating any face.
    Check { state: String },
    /// Print six face readings of a scrambled cube.
    Scramble {
        /// Move sequence to apply, e.g. "R U R' U'".
        #[arg(long, conflicts_with_all = ["length", "seed"])]
        moves: Option<String>,
        /// Number of random moves.
        #[arg(long, default_value_t = 25)]
        length: usize,
        /// Seed for the random moves.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Turn each printed face by a fixed amount so `resolve` has work to do.
        #[arg(long)]
        misrotate: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    match cli.command {
        Command::Resolve {
            up,
            right,
            front,
            down,
            left,
            back,
            parallel,
            require_unique,
            net,
        } => {
            let config = ResolverConfig {
                strategy: if parallel {
                    SearchStrategy::Parallel
                } else {
                    SearchStrategy::Sequential
                },
                multiplicity: if require_unique {
                    Multiplicity::RequireUnique
                } else {
                    Multiplicity::FirstMatch
                },
            };
            run_resolve([&up, &right, &front, &down, &left, &back], config, net)
        }
        Command::Check { state } => run_check(&state),
        Command::Scramble {
            moves,
            length,
            seed,
            misrotate,
        } => run_scramble(moves.as_deref(), length, seed, misrotate),
    }
}

/// Resolves the readings and prints the result.
fn run_resolve(faces: [&str; 6], config: ResolverConfig, net: bool) -> ExitCode {
    let reading = match CubeReading::parse(faces) {
        Ok(reading) => reading,
        Err(e) => {
            eprintln!("Invalid input: {}", e);
            return ExitCode::from(2);
        }
    };

    let mut stats = SearchStats::default();
    match Resolver::new(config).resolve_with_stats(&reading, &mut stats) {
        Ok(resolved) => {
            info!("evaluated {} candidates", stats.candidates_evaluated);
            print!("{}", format_resolution(&resolved, net));
            ExitCode::SUCCESS
        }
        Err(e @ ResolutionError::Input(_)) => {
            eprintln!("Invalid input: {}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Failed to resolve: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Checks a state without trying any rotations.
fn run_check(state: &str) -> ExitCode {
    let reading = match CubeReading::from_state_str(state) {
        Ok(reading) => reading,
        Err(e) => {
            eprintln!("Invalid input: {}", e);
            return ExitCode::from(2);
        }
    };

    let verdict = validate_color_counts(reading.faces())
        .map_err(|e| e.to_string())
        .and_then(|()| is_orientation_valid(reading.faces()).map_err(|e| e.to_string()));
    match verdict {
        Ok(()) => {
            println!("valid");
            ExitCode::SUCCESS
        }
        Err(message) => {
            println!("invalid: {}", message);
            ExitCode::FAILURE
        }
    }
}

/// Prints a scrambled cube as six readings ready for `resolve`.
fn run_scramble(sequence: Option<&str>, length: usize, seed: u64, misrotate: bool) -> ExitCode {
    let moves = match sequence {
        Some(text) => match parse_sequence(text) {
            Ok(moves) => moves,
            Err(e) => {
                eprintln!("Invalid moves: {}", e);
                return ExitCode::from(2);
            }
        },
        None => scramble(length, seed),
    };

    print!("{}", format_scramble(&moves, misrotate));
    ExitCode::SUCCESS
}

/// Formats a resolution for the terminal.
fn format_resolution(resolved: &ResolvedOrientation, net: bool) -> String {
    let mut output = format!(
        "state:     {}\nfacelets:  {}\nrotations: {}\ncandidate: {}\n",
        resolved.state_string(),
        resolved.facelet_string(),
        resolved.candidate(),
        resolved.candidate_index()
    );
    if net {
        output.push('\n');
        output.push_str(&resolved.faces().format_net());
    }
    output
}

/// Formats the readings of a solved cube after `moves`.
fn format_scramble(moves: &[Move], misrotate: bool) -> String {
    let mut reading = CubeReading::solved().apply_moves(moves);
    if misrotate {
        reading = reading.rotated(MISROTATION);
    }
    let faces: Vec<String> = reading.faces().iter().map(|face| face.to_string()).collect();
    format!("moves: {}\nfaces: {}\n", format_sequence(moves), faces.join(" "))
}
