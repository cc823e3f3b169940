use anyhow::Result;
use serde::Deserialize;
use std::io::Write;
use tempdir::TempDir;
use test_log::test;
use zelda_core::{
    record::{BufferedRecorder, NullRecorder, Record},
    space::{BoxSpace, Discrete, Space},
    util, Act, Configurable, DefaultEvaluator, Env, Evaluator, Obs, Policy, RgbFrame, Step,
};

#[derive(Clone, Debug)]
struct CounterObs(u8);

impl Obs for CounterObs {
    fn shape(&self) -> Vec<usize> {
        vec![1]
    }
}

#[derive(Clone, Debug)]
struct CounterAct(usize);

impl Act for CounterAct {}

/// Terminates after `length` steps; the reward equals the action.
struct CounterEnv {
    length: usize,
    t: usize,
    resets: usize,
    closed: bool,
    action_space: Discrete,
    observation_space: BoxSpace,
}

impl Env for CounterEnv {
    type Config = usize;
    type Obs = CounterObs;
    type Act = CounterAct;
    type Info = ();
    type ActSpace = Discrete;
    type ObsSpace = BoxSpace;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let mut action_space = Discrete::new(3);
        action_space.seed(seed as u64);
        Ok(Self {
            length: *config,
            t: 0,
            resets: 0,
            closed: false,
            action_space,
            observation_space: BoxSpace::new(0, 255, &[1]),
        })
    }

    fn reset(&mut self) -> Result<(CounterObs, ())> {
        self.t = 0;
        self.resets += 1;
        Ok((CounterObs(0), ()))
    }

    fn reset_with_index(&mut self, _ix: usize) -> Result<(CounterObs, ())> {
        self.reset()
    }

    fn step(&mut self, a: &CounterAct) -> Result<(Step<Self>, Record)> {
        self.t += 1;
        let step = Step::new(
            CounterObs(self.t as u8),
            a.clone(),
            a.0 as f32,
            self.t >= self.length,
            false,
            (),
        );
        Ok((step, Record::empty()))
    }

    fn render(&mut self) -> Result<Option<RgbFrame>> {
        Ok(RgbFrame::new(1, 1, vec![self.t as u8; 3]))
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }

    fn action_space(&self) -> &Discrete {
        &self.action_space
    }

    fn observation_space(&self) -> &BoxSpace {
        &self.observation_space
    }
}

#[derive(Clone, Deserialize)]
struct ConstantPolicyConfig {
    act: usize,
}

struct ConstantPolicy {
    act: usize,
}

impl Policy<CounterEnv> for ConstantPolicy {
    fn sample(&mut self, _: &CounterObs) -> CounterAct {
        CounterAct(self.act)
    }
}

impl Configurable<CounterEnv> for ConstantPolicy {
    type Config = ConstantPolicyConfig;

    fn build(config: Self::Config) -> Self {
        Self { act: config.act }
    }
}

#[test]
fn step_with_reset_stores_initial_observation() -> Result<()> {
    let mut env = CounterEnv::build(&2, 0)?;
    env.reset()?;

    let (step, _) = env.step_with_reset(&CounterAct(1))?;
    assert!(!step.is_done());
    assert!(step.init_obs.is_none());

    let (step, _) = env.step_with_reset(&CounterAct(1))?;
    assert!(step.is_done());
    assert!(step.is_terminated && !step.is_truncated);
    assert_eq!(step.init_obs.map(|o| o.0), Some(0));
    assert_eq!(env.resets, 2);

    let frame = env.render()?.unwrap();
    assert_eq!(frame.shape(), [1, 1, 3]);
    env.close()?;
    assert!(env.closed);
    Ok(())
}

#[test]
fn eval_with_recorder_writes_every_step() -> Result<()> {
    let mut env = CounterEnv::build(&3, 0)?;
    let mut policy = ConstantPolicy { act: 2 };
    let mut recorder = BufferedRecorder::new();

    let returns = util::eval_with_recorder(&mut env, &mut policy, 2, &mut recorder)?;
    assert_eq!(returns, vec![6.0, 6.0]);
    assert_eq!(recorder.len(), 6);

    let last = recorder.iter().last().unwrap();
    assert_eq!(last.get_scalar("episode")?, 1.0);
    assert_eq!(last.get_scalar("step")?, 2.0);
    assert_eq!(last.get_scalar("reward")?, 2.0);

    let returns = util::eval_with_recorder(&mut env, &mut policy, 1, &mut NullRecorder {})?;
    assert_eq!(returns, vec![6.0]);
    Ok(())
}

#[test]
fn default_evaluator_averages_returns() -> Result<()> {
    let dir = TempDir::new("zelda_core")?;
    let path = dir.path().join("policy.yaml");
    let mut file = std::fs::File::create(&path)?;
    writeln!(file, "act: 1")?;

    let mut policy = ConstantPolicy::build_from_path(&path)?;
    let mut evaluator = DefaultEvaluator::<CounterEnv>::new(&4, 0, 3)?;
    let record = evaluator.evaluate(&mut policy)?;
    assert_eq!(record.get_scalar("Episode return")?, 4.0);
    evaluator.close()?;
    Ok(())
}

#[test]
fn policy_config_errors_name_the_file() -> Result<()> {
    let dir = TempDir::new("zelda_core")?;
    let path = dir.path().join("policy.yaml");
    std::fs::write(&path, "act: [1, 2]\n")?;

    let err = ConstantPolicy::build_from_path(&path).err().unwrap();
    assert!(format!("{:#}", err).contains("policy.yaml"));

    let missing = dir.path().join("missing.yaml");
    let err = ConstantPolicy::build_from_path(&missing).err().unwrap();
    assert!(err.to_string().contains("missing.yaml"));
    Ok(())
}

#[test]
fn action_space_is_seeded_by_build() -> Result<()> {
    let e1 = CounterEnv::build(&1, 7)?;
    let e2 = CounterEnv::build(&1, 7)?;
    let s1 = (0..10).map(|_| e1.action_space().sample()).collect::<Vec<_>>();
    let s2 = (0..10).map(|_| e2.action_space().sample()).collect::<Vec<_>>();
    assert_eq!(s1, s2);
    assert_eq!(e1.observation_space().to_string(), "Box(0, 255, (1,), uint8)");
    Ok(())
}
