use crate::probe::{test_basic_functionality, test_with_manual_actions};
use anyhow::Result;
use std::io::{self, Write};
use zelda_core::{space::Space, Env};

/// How to use the environment, printed when all probes pass.
pub const USAGE: &str = r#"```rust
use zelda_core::{space::Space, Env as _, RenderMode};
use zelda_env::{make, ZeldaAct};

let mut env = make("ZeldaCC-v0", Some(RenderMode::Human))?;
let (obs, info) = env.reset()?;

for _ in 0..1000 {
    let act = ZeldaAct::new(env.action_space().sample());
    let (step, _) = env.step(&act)?;
    if step.is_done() {
        env.reset()?;
    }
}
```"#;

/// Results of the probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Result of [`test_basic_functionality`].
    pub basic: bool,

    /// Result of [`test_with_manual_actions`], `false` if it was not run.
    pub manual: bool,
}

fn pass_or_fail(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

impl Summary {
    /// `true` if all probes passed.
    pub fn passed(&self) -> bool {
        self.basic && self.manual
    }

    /// Writes the summary.
    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n=== Test Summary ===")?;
        writeln!(out, "Basic functionality: {}", pass_or_fail(self.basic))?;
        writeln!(out, "Manual actions: {}", pass_or_fail(self.manual))?;

        if self.passed() {
            writeln!(out, "\nAll tests passed! The environment is working correctly.")?;
            writeln!(
                out,
                "\nYou can now use the environment in your RL training code:"
            )?;
            writeln!(out, "{}", USAGE)?;
        } else {
            writeln!(
                out,
                "\nSome tests failed. Please check the error messages above."
            )?;
        }
        Ok(())
    }
}

/// Runs the probes and writes a summary.
///
/// `make_env` is called once per probe. The manual-action probe runs only if the
/// basic probe passed.
pub fn run<E, F, W>(mut make_env: F, n_steps: usize, out: &mut W) -> Result<Summary>
where
    E: Env,
    E::Act: From<usize>,
    E::ActSpace: Space<Element = usize>,
    F: FnMut() -> Result<E>,
    W: Write,
{
    writeln!(out, "=== gym-zelda-pygame Environment Test ===\n")?;

    let basic = test_basic_functionality(&mut make_env, n_steps, out);
    let manual = if basic {
        test_with_manual_actions(&mut make_env, out)
    } else {
        false
    };

    let summary = Summary { basic, manual };
    summary.write(out)?;
    Ok(summary)
}
