//! Self-play match between two Isolation agents.
//!
//! ```shell
//! RUST_LOG=debug cargo run --release -- \
//!   --p1-method alphabeta --p1-eval drilldown \
//!   --p2-method minimax --p2-eval open_move_ratio --p2-fixed-depth 3 \
//!   --time-limit 150
//! ```
//!
//! A TOML file given with `--config` supplies the defaults; flags override it.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser as _;
use log::info;

use isolation::config::{AgentConfig, MatchConfig};
use isolation::eval::EvaluatorKind;
use isolation::game::play_match;
use isolation::search::SearchMethod;
use isolation::{AIEngine, Board};

#[derive(clap::Parser, Debug)]
#[command(about = "play one Isolation match between two search agents")]
struct Cli {
    /// Match configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width
    #[arg(long)]
    width: Option<usize>,

    /// Board height
    #[arg(long)]
    height: Option<usize>,

    /// Time budget per move in milliseconds
    #[arg(long)]
    time_limit: Option<u64>,

    /// Player one search method (minimax, alphabeta)
    #[arg(long)]
    p1_method: Option<SearchMethod>,

    /// Player one evaluator name
    #[arg(long)]
    p1_eval: Option<EvaluatorKind>,

    /// Player one: fixed-depth search to this depth instead of iterative deepening
    #[arg(long)]
    p1_fixed_depth: Option<u32>,

    /// Player two search method (minimax, alphabeta)
    #[arg(long)]
    p2_method: Option<SearchMethod>,

    /// Player two evaluator name
    #[arg(long)]
    p2_eval: Option<EvaluatorKind>,

    /// Player two: fixed-depth search to this depth instead of iterative deepening
    #[arg(long)]
    p2_fixed_depth: Option<u32>,
}

fn apply_overrides(
    agent: &mut AgentConfig,
    method: Option<SearchMethod>,
    eval: Option<EvaluatorKind>,
    fixed_depth: Option<u32>,
) {
    if let Some(method) = method {
        agent.method = method;
    }
    if let Some(eval) = eval {
        agent.evaluator = eval;
    }
    if let Some(depth) = fixed_depth {
        agent.search_depth = depth;
        agent.iterative = false;
    }
}

fn match_config(cli: &Cli) -> Result<MatchConfig> {
    let mut config = match &cli.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => MatchConfig::default(),
    };

    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(limit) = cli.time_limit {
        config.time_limit_ms = limit;
    }
    apply_overrides(
        &mut config.player_one,
        cli.p1_method,
        cli.p1_eval,
        cli.p1_fixed_depth,
    );
    apply_overrides(
        &mut config.player_two,
        cli.p2_method,
        cli.p2_eval,
        cli.p2_fixed_depth,
    );

    config.validate().context("invalid match configuration")?;
    if config.time_limit_ms == 0 {
        bail!("--time-limit must be positive");
    }
    Ok(config)
}

fn describe(agent: &AgentConfig) -> String {
    if agent.iterative {
        format!("{} / {} / iterative", agent.method, agent.evaluator)
    } else {
        format!(
            "{} / {} / depth {}",
            agent.method, agent.evaluator, agent.search_depth
        )
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = match_config(&cli)?;

    let board = Board::try_new(config.width, config.height).context("failed to create board")?;
    let first = AIEngine::from_config(&config.player_one).context("invalid player one")?;
    let second = AIEngine::from_config(&config.player_two).context("invalid player two")?;

    info!(
        "{}x{} board, {}ms per move: [{}] vs [{}]",
        config.width,
        config.height,
        config.time_limit_ms,
        describe(&config.player_one),
        describe(&config.player_two)
    );

    let outcome = play_match(&first, &second, board, config.time_limit_ms);

    println!("{}", outcome.board);
    let moves: Vec<String> = outcome.history.iter().map(|mv| mv.to_string()).collect();
    println!("moves: {}", moves.join(" "));
    println!(
        "{} wins ({:?}, {} moves)",
        outcome.winner,
        outcome.reason,
        outcome.history.len()
    );
    Ok(())
}
