use anyhow::Result;
use zelda_core::{space::Space, Env as _, RenderMode};
use zelda_env::{make, ZeldaAct};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut env = make("ZeldaCC-v0", Some(RenderMode::Human))?;
    env.reset()?;

    for _ in 0..1000 {
        let act = ZeldaAct::new(env.action_space().sample());
        let (step, _) = env.step(&act)?;
        if step.is_done() {
            env.reset()?;
        }
    }

    env.close()?;
    Ok(())
}
