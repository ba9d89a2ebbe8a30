use anyhow::Result;
use clap::{Parser, ValueEnum};
use torus_snake::app::App;
use torus_snake::game::{CollisionRule, GameConfig};

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// Board side length in cells
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..=100))]
    size: u16,

    /// Milliseconds between game ticks
    #[arg(long, default_value_t = 150, value_parser = clap::value_parser!(u64).range(10..=2000))]
    tick_ms: u64,

    /// How running into the snake's own body is judged
    #[arg(long, value_enum, default_value = "strict")]
    collision: RuleArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleArg {
    /// Any overlap with a body cell ends the game
    Strict,
    /// Overlap ends the game only when the head cell appears twice in the body
    Lenient,
}

impl From<RuleArg> for CollisionRule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Strict => CollisionRule::Strict,
            RuleArg::Lenient => CollisionRule::Lenient,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        tick_interval_ms: cli.tick_ms,
        collision_rule: cli.collision.into(),
        ..GameConfig::new(cli.size)
    };

    App::new(config).run().await
}
