use clap::{Parser, ValueEnum};
use log::{debug, info, LevelFilter};
use mcrl::{
    algo::{
        tabular::{MonteCarloQConfig, MonteCarloVConfig, UpdateRule},
        EpisodeSummary, MonteCarloQAgent, MonteCarloVAgent,
    },
    env::DiscreteActionSpace,
    grid::{Grid, GridAction, Pos},
    gym::GridWorld,
};
use strum::IntoEnumIterator;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Variant {
    /// State-value agent with a fixed epsilon
    V,
    /// State-action agent with a decaying epsilon
    Q,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Rule {
    FirstVisit,
    EveryVisit,
    Incremental,
}

impl From<Rule> for UpdateRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::FirstVisit => UpdateRule::FirstVisit,
            Rule::EveryVisit => UpdateRule::EveryVisit,
            Rule::Incremental => UpdateRule::Incremental,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Monte Carlo control on the 5x5 grid world", long_about = None)]
struct Args {
    /// Number of episodes to run
    #[arg(short, long, default_value_t = 1000)]
    episodes: u32,

    /// Log progress after every episode
    #[arg(short, long)]
    verbose: bool,

    /// Which value function to learn
    #[arg(long, value_enum, default_value_t = Variant::V)]
    variant: Variant,

    /// How returns are folded into the table, defaults to first-visit for V and incremental for Q
    #[arg(long, value_enum)]
    update_rule: Option<Rule>,

    /// Seed for the agent's random source
    #[arg(long)]
    seed: Option<u64>,
}

fn report(summary: &EpisodeSummary) {
    debug!(
        "episode: {}\tsteps: {}\treward: {}\tepsilon: {:.4}",
        summary.episode, summary.steps, summary.total_reward, summary.epsilon
    );
}

fn render(grid: Grid, value: impl Fn(Pos) -> f64) -> String {
    (0..grid.height())
        .map(|row| {
            (0..grid.width())
                .map(|col| format!("{:>8.3}", value(Pos::new(col, row))))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let mut env = GridWorld::new();
    let grid = env.grid();
    let mut wins = 0u32;

    match args.variant {
        Variant::V => {
            let mut agent: MonteCarloVAgent = MonteCarloVAgent::new(MonteCarloVConfig {
                actions: env.actions(),
                update_rule: args.update_rule.map_or(UpdateRule::FirstVisit, Into::into),
                seed: args.seed,
                grid,
                ..Default::default()
            });
            for _ in 0..args.episodes {
                let summary = agent.go(&mut env);
                wins += u32::from(summary.total_reward > 0.0);
                report(&summary);
            }
            info!("state values:\n{}", render(grid, |pos| agent.value(pos)));
        }
        Variant::Q => {
            let mut agent: MonteCarloQAgent = MonteCarloQAgent::new(MonteCarloQConfig {
                actions: env.actions(),
                update_rule: args.update_rule.map_or(UpdateRule::Incremental, Into::into),
                seed: args.seed,
                ..Default::default()
            });
            for _ in 0..args.episodes {
                let summary = agent.go(&mut env);
                wins += u32::from(summary.total_reward > 0.0);
                report(&summary);
            }
            info!(
                "greedy action values:\n{}",
                render(grid, |pos| GridAction::iter()
                    .map(|a| agent.q_value(pos, a))
                    .fold(f64::NEG_INFINITY, f64::max))
            );
        }
    }

    info!("reached the goal in {wins}/{} episodes", args.episodes);
}
