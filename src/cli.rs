use clap::Parser;

use crate::config::GameConfig;
use crate::min_max::DEFAULT_DEPTH_LIMIT;
use crate::players::OpponentKind;

/// Play tic-tac-toe against a human or a computer
#[derive(Parser, Debug)]
#[command(name = "rusty-tictactoe")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Opponent to play against, asked for interactively when omitted
    #[arg(long, value_enum)]
    pub opponent: Option<OpponentKind>,

    /// How many plies the impossible computer searches before calling a position a draw
    #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    pub depth_limit: u8,

    /// Seed for the dumb computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log: String,
}

impl From<&Cli> for GameConfig {
    fn from(cli: &Cli) -> Self {
        Self { opponent: cli.opponent, depth_limit: cli.depth_limit, seed: cli.seed }
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::config::GameConfig;
    use crate::players::OpponentKind;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["rusty-tictactoe"]).unwrap();
        assert_eq!(GameConfig::from(&cli), GameConfig::default());
        assert_eq!(cli.log, "warn");
    }

    #[test]
    fn all_options() {
        let cli = Cli::try_parse_from([
            "rusty-tictactoe", "--opponent", "impossible-computer", "--depth-limit", "3", "--seed", "9",
        ]).unwrap();
        let config = GameConfig::from(&cli);
        assert_eq!(config.opponent, Some(OpponentKind::ImpossibleComputer));
        assert_eq!(config.depth_limit, 3);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn unknown_opponent_is_rejected() {
        assert!(Cli::try_parse_from(["rusty-tictactoe", "--opponent", "grandmaster"]).is_err());
    }
}
