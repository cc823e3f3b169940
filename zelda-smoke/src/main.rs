use anyhow::Result;
use clap::Parser;
use log::info;
use zelda_core::RenderMode;
use zelda_env::{make_with_seed, ZeldaEnv};
use zelda_smoke::{probe::DEFAULT_STEPS, run};

/// Smoke test of the ZeldaCC-v0 environment
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Id of the environment
    #[arg(long, default_value = "ZeldaCC-v0")]
    env_id: String,

    /// Random seed of the environment and the action sampler
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of random steps in the basic probe
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    steps: usize,

    /// Exit with code 1 if a probe fails
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn make_env(args: &Args) -> Result<ZeldaEnv> {
    let seed = args.seed.unwrap_or(0);
    let mut env = make_with_seed(&args.env_id, Some(RenderMode::RgbArray), seed as i64)?;
    if let Some(seed) = args.seed {
        env.seed_action_space(seed);
    }
    Ok(env)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    info!("{:?}", args);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = run(|| make_env(&args), args.steps, &mut out)?;

    if args.strict && !summary.passed() {
        std::process::exit(1);
    }
    Ok(())
}
