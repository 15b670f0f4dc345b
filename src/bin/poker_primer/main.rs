mod tracing_args;

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use poker_primer::core::PrimerError;
use poker_primer::equity::{EquityEstimator, EstimateMethod, OutsQuery, OutsQuiz};
use poker_primer::format::{
    bankroll_summary, bluff_ratio_line, equity_explanation, format_percent, outs_tip,
};
use poker_primer::holdem::{
    bluff_ratio, narrow_range, narrowing_stages, strategy_hint, HandTable, InfoMode, Position,
    PositionMetrics, RangeAction, RangeComposition, RangePreset, Scenario, Street,
};
use poker_primer::variance::{simulate_bankroll, BankrollSimRequest};
use rand::{rngs::StdRng, SeedableRng};
use tracing::error;

use crate::tracing_args::TracingArgs;

#[derive(Parser, Debug)]
#[command(
    name = "poker-primer",
    about = "Odds, variance and strategy numbers from the poker primer",
    version
)]
struct Cli {
    #[command(flatten)]
    tracing: TracingArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate the chance of hitting a draw
    Equity {
        /// Cards that improve the hand
        #[arg(short, long, default_value_t = 8)]
        outs: u8,

        /// Community cards still to come (1 or 2)
        #[arg(short, long, default_value_t = 2)]
        cards: u8,

        /// rule, exact or monte
        #[arg(short, long, default_value = "rule")]
        method: EstimateMethod,

        /// Run-outs dealt by the monte carlo method
        #[arg(short = 'n', long, default_value_t = poker_primer::equity::DEFAULT_MONTE_CARLO_TRIALS)]
        trials: usize,

        #[arg(long)]
        seed: Option<u64>,

        /// Print the estimate as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate bankroll swings for a win rate and standard deviation
    Bankroll {
        /// Big blinds won per 100 hands
        #[arg(short, long, default_value_t = 2.0, allow_negative_numbers = true)]
        win_rate: f64,

        /// Standard deviation in big blinds per 100 hands
        #[arg(short, long, default_value_t = 90.0)]
        std_dev: f64,

        #[arg(long, default_value_t = 5_000)]
        hands: u32,

        /// Number of trajectories
        #[arg(short = 'n', long, default_value_t = 50)]
        trials: u32,

        /// Histogram bins for the final results
        #[arg(long, default_value_t = poker_primer::variance::DEFAULT_HISTOGRAM_BINS)]
        bins: usize,

        #[arg(long)]
        seed: Option<u64>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Balanced bluff frequency for a bet size
    Bluff {
        /// Bet size as a fraction of the pot
        #[arg(short, long, default_value_t = 0.75)]
        bet: f64,
    },

    /// Narrow an opponent's top 15% range by their actions
    Range {
        /// pfr, cbet or turn. Repeat for several actions.
        #[arg(short, long = "action")]
        actions: Vec<RangeAction>,

        /// Use a canned profile instead of listing actions
        #[arg(short, long, conflicts_with = "actions")]
        preset: Option<PresetArg>,
    },

    /// Metrics and advice for a table position
    Position {
        /// UTG, UTG+1, UTG+2, MP, HJ, CO, BTN, SB or BB. All when omitted.
        position: Option<Position>,
    },

    /// Print the 13x13 starting hand grid from a hand table CSV
    Grid {
        /// CSV produced by the offline equity run
        #[arg(short, long)]
        table: PathBuf,

        /// Players at the table, 2 to 10
        #[arg(short, long, default_value_t = 6)]
        players: usize,

        /// all, win, ev or rec
        #[arg(short, long, default_value = "ev")]
        info: InfoMode,
    },

    /// Step through a preset flop scenario
    Flop {
        /// Scenario number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        scenario: usize,

        /// flop, turn or river
        #[arg(long, default_value = "flop")]
        street: Street,

        /// Your answer to this street's question, e.g. A
        #[arg(short, long)]
        answer: Option<String>,
    },

    /// Deal a flop and count the outs
    Quiz {
        /// Your count; without it the answer is revealed
        #[arg(short, long)]
        answer: Option<u8>,

        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PresetArg {
    Tight,
    Loose,
}

impl From<PresetArg> for RangePreset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Tight => RangePreset::TightAggressive,
            PresetArg::Loose => RangePreset::LoosePassive,
        }
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn print_position(position: Position, metrics: PositionMetrics) {
    println!("{position}: {}", position.advice());
    let deltas = position.compare_to_button();
    for ((label, value), delta) in PositionMetrics::LABELS
        .iter()
        .zip(metrics.values())
        .zip(deltas)
    {
        println!("  {label:<11} {value:.2}  ({delta:+.2} vs BTN)");
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Equity {
            outs,
            cards,
            method,
            trials,
            seed,
            json,
        } => {
            let query = OutsQuery::new(outs, cards, method)?;
            let estimator = EquityEstimator::new(trials)?;
            let estimate = estimator.estimate(&query, &mut rng_from(seed));
            if json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                println!("{}", format_percent(estimate.probability_percent));
                println!("{}", equity_explanation(outs, query.cards_to_come, &estimate));
                println!("{}", outs_tip(outs, query.cards_to_come));
            }
        }
        Command::Bankroll {
            win_rate,
            std_dev,
            hands,
            trials,
            bins,
            seed,
            json,
        } => {
            let request = BankrollSimRequest::new()
                .win_rate_per_100(win_rate)
                .std_dev_per_100(std_dev)
                .total_hands(hands)
                .trial_count(trials);
            let result = simulate_bankroll(&request, &mut rng_from(seed))?;
            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("{}", bankroll_summary(&result));
                println!();
                for bin in result.final_value_histogram(bins) {
                    println!(
                        "{:>9.1} .. {:>9.1} | {}",
                        bin.lower,
                        bin.upper,
                        "#".repeat(bin.count)
                    );
                }
            }
        }
        Command::Bluff { bet } => {
            let ratio = bluff_ratio(bet);
            println!("{}", bluff_ratio_line(&ratio));
            println!("{}", ratio.example());
            if let Some(warning) = ratio.warning() {
                println!("{warning}");
            }
        }
        Command::Range { actions, preset } => {
            let actions = match preset {
                Some(preset) => RangePreset::from(preset).actions(),
                None => actions,
            };
            let range = narrow_range(&actions);
            let flow: Vec<String> = narrowing_stages(&actions)
                .iter()
                .map(|stage| format!("{} ({})", stage.label, stage.count))
                .collect();
            println!("{}", flow.join(" -> "));
            let hands: Vec<String> = range.iter().map(ToString::to_string).collect();
            println!("{}", hands.join(" "));
            print!("{}", RangeComposition::of(&range));
        }
        Command::Position { position } => match position {
            Some(position) => print_position(position, position.metrics()),
            None => {
                for position in Position::all() {
                    print_position(position, position.metrics());
                }
            }
        },
        Command::Grid {
            table,
            players,
            info,
        } => {
            let table = HandTable::from_csv_path(&table)?;
            for row in table.grid(players)? {
                let cells: Vec<String> = row
                    .iter()
                    .map(|cell| format!("{:<4}{:<22}", cell.hand, cell.describe(info).join(" ")))
                    .collect();
                println!("{}", cells.join("").trim_end());
            }
        }
        Command::Flop {
            scenario,
            street,
            answer,
        } => {
            let scenario = scenario
                .checked_sub(1)
                .map_or(Err(PrimerError::UnknownScenario(scenario)), Scenario::get)?;
            println!("{}", scenario.label);
            println!("{}", scenario.players_display());
            println!("Board: {}", scenario.board_display(street));
            println!("{}", scenario.texture_tip());
            println!("{}", strategy_hint(street, scenario));
            if let Some(quiz) = scenario.quiz_for(street) {
                println!();
                println!("Quiz: {}", quiz.question);
                for option in quiz.options {
                    println!("  {option}");
                }
                if let Some(answer) = answer {
                    println!("{}", quiz.feedback(&answer));
                }
            }
        }
        Command::Quiz { answer, seed } => {
            let quiz = OutsQuiz::deal(&mut rng_from(seed));
            println!("{}", quiz.question());
            match answer {
                Some(answer) => println!("{}", quiz.check(answer)),
                None => {
                    let outs = quiz.outs();
                    println!("Outs: {}. {}", outs.total, outs.explanation());
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.tracing.init_tracing();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_and_json_logs() {
        let cli = Cli::try_parse_from(["poker-primer", "-vv", "bluff"]).unwrap();
        assert_eq!("debug", cli.tracing.level());
        assert!(!cli.tracing.json_logs);

        let cli = Cli::try_parse_from(["poker-primer", "bluff", "--json-logs"]).unwrap();
        assert_eq!("warn", cli.tracing.level());
        assert!(cli.tracing.json_logs);
    }

    #[test]
    fn test_flop_arguments() {
        let cli =
            Cli::try_parse_from(["poker-primer", "flop", "-s", "2", "--street", "turn"]).unwrap();
        match cli.command {
            Command::Flop {
                scenario,
                street,
                answer,
            } => {
                assert_eq!(2, scenario);
                assert_eq!(Street::Turn, street);
                assert_eq!(None, answer);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(Cli::try_parse_from(["poker-primer", "flop", "--street", "preflop"]).is_err());
    }
}
