//! Probes of an environment.
//!
//! Each probe is a failure boundary: errors of the environment are written to the
//! output and turned into `false`. The environment is closed on every path once it
//! has been created.
use crate::EnvGuard;
use anyhow::Result;
use log::{error, info};
use std::io::{self, Write};
use zelda_core::{space::Space, Env, Obs};

/// Number of steps taken by [`test_basic_functionality`] by default.
pub const DEFAULT_STEPS: usize = 10;

/// Actions applied by [`test_with_manual_actions`], in order.
pub const MANUAL_ACTIONS: [(usize, &str); 7] = [
    (1, "up"),
    (2, "down"),
    (3, "left"),
    (4, "right"),
    (5, "attack"),
    (6, "magic"),
    (0, "no action"),
];

/// Formats a shape as a tuple, e.g., `(84, 84, 3)`.
pub fn shape_tuple(shape: &[usize]) -> String {
    match shape {
        [n] => format!("({},)", n),
        _ => format!(
            "({})",
            shape
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Creates an environment, resets it, takes up to `n_steps` random actions, renders and closes it.
///
/// Stepping stops at the first end of an episode, after which the environment is
/// reset once. Rendering errors are reported but do not fail the probe.
pub fn test_basic_functionality<E, F, W>(make_env: F, n_steps: usize, out: &mut W) -> bool
where
    E: Env,
    E::Act: From<usize>,
    E::ActSpace: Space<Element = usize>,
    F: FnOnce() -> Result<E>,
    W: Write,
{
    match basic_functionality(make_env, n_steps, out) {
        Ok(passed) => passed,
        Err(e) => {
            error!("Failed to write the report: {}", e);
            false
        }
    }
}

fn basic_functionality<E, F, W>(make_env: F, n_steps: usize, out: &mut W) -> io::Result<bool>
where
    E: Env,
    E::Act: From<usize>,
    E::ActSpace: Space<Element = usize>,
    F: FnOnce() -> Result<E>,
    W: Write,
{
    writeln!(out, "Testing gym-zelda-pygame environment...")?;

    let mut env = match make_env() {
        Ok(env) => EnvGuard::new(env),
        Err(e) => {
            writeln!(out, "Failed to create environment: {}", e)?;
            return Ok(false);
        }
    };
    writeln!(out, "Environment created successfully")?;

    match env.reset() {
        Ok((obs, info)) => {
            writeln!(
                out,
                "Environment reset. Observation shape: {}",
                shape_tuple(&obs.shape())
            )?;
            writeln!(out, "  Info: {:?}", info)?;
        }
        Err(e) => {
            writeln!(out, "✗ Failed to reset environment: {}", e)?;
            return Ok(false);
        }
    }

    writeln!(out, "✓ Action space: {}", env.action_space())?;
    writeln!(out, "✓ Observation space: {}", env.observation_space())?;

    if let Err(e) = random_steps(&mut *env, n_steps, out) {
        writeln!(out, "Failed during step execution: {}", e)?;
        return Ok(false);
    }
    writeln!(out, "Steps executed successfully")?;

    match env.render() {
        Ok(Some(frame)) => writeln!(
            out,
            "Render successful. Frame shape: {}",
            shape_tuple(&frame.shape())
        )?,
        Ok(None) => writeln!(out, "Render successful (no return value)")?,
        Err(e) => writeln!(out, "Failed to render: {}", e)?,
    }

    if let Err(e) = env.close() {
        writeln!(out, "Failed to close environment: {}", e)?;
        return Ok(false);
    }
    writeln!(out, "Environment closed successfully")?;
    Ok(true)
}

fn random_steps<E, W>(env: &mut E, n_steps: usize, out: &mut W) -> Result<()>
where
    E: Env,
    E::Act: From<usize>,
    E::ActSpace: Space<Element = usize>,
    W: Write,
{
    for i in 0..n_steps {
        let a = env.action_space().sample();
        let (step, _) = env.step(&a.into())?;
        writeln!(
            out,
            "  Step {}: action={}, reward={:.4}, done={}, truncated={}",
            i + 1,
            a,
            step.reward,
            step.is_terminated,
            step.is_truncated
        )?;

        if step.is_done() {
            writeln!(out, "  Episode ended, resetting...")?;
            env.reset()?;
            break;
        }
    }
    Ok(())
}

/// Creates an environment and applies [`MANUAL_ACTIONS`] in order.
///
/// The environment is reset whenever an episode ends, and the remaining actions
/// are applied to the new episode.
pub fn test_with_manual_actions<E, F, W>(make_env: F, out: &mut W) -> bool
where
    E: Env,
    E::Act: From<usize>,
    F: FnOnce() -> Result<E>,
    W: Write,
{
    match manual_actions(make_env, out) {
        Ok(()) => match writeln!(out, "✓ Manual actions test completed") {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to write the report: {}", e);
                false
            }
        },
        Err(e) => {
            if let Err(e) = writeln!(out, "✗ Manual actions test failed: {}", e) {
                error!("Failed to write the report: {}", e);
            }
            false
        }
    }
}

fn manual_actions<E, F, W>(make_env: F, out: &mut W) -> Result<()>
where
    E: Env,
    E::Act: From<usize>,
    F: FnOnce() -> Result<E>,
    W: Write,
{
    writeln!(out, "\nTesting with manual actions...")?;
    let mut env = EnvGuard::new(make_env()?);
    env.reset()?;

    writeln!(out, "Testing specific actions:")?;
    for (id, label) in MANUAL_ACTIONS {
        let (step, _) = env.step(&id.into())?;
        writeln!(
            out,
            "  {}: reward={:.4}, done={}",
            label, step.reward, step.is_terminated
        )?;

        if step.is_done() {
            info!("Episode ended at action {}, resetting", label);
            env.reset()?;
        }
    }

    env.close()
}
