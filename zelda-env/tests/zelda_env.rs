use anyhow::Result;
use tempdir::TempDir;
use test_log::test;
use zelda_core::{
    error::ZeldaError, space::Space, Configurable, DefaultEvaluator, Env, Evaluator, Obs,
    RenderMode,
};
use zelda_env::{
    make, make_with_seed, RandomPolicy, ZeldaAct, ZeldaAction, ZeldaEnv, ZeldaEnvConfig,
};

fn is_error(e: &anyhow::Error, f: impl Fn(&ZeldaError) -> bool) -> bool {
    e.downcast_ref::<ZeldaError>().map(f).unwrap_or(false)
}

#[test]
fn unknown_id_is_rejected() {
    let err = make("ZeldaCC-v1", None).err().unwrap();
    assert!(is_error(&err, |e| matches!(e, ZeldaError::UnknownEnvId(_))));
    assert_eq!(err.to_string(), "Environment ZeldaCC-v1 doesn't exist");
}

#[test]
fn spaces_and_initial_observation() -> Result<()> {
    let mut env = make("ZeldaCC-v0", Some(RenderMode::RgbArray))?;
    assert_eq!(env.action_space().to_string(), "Discrete(7)");
    assert_eq!(
        env.observation_space().to_string(),
        "Box(0, 255, (84, 84, 3), uint8)"
    );

    let (obs, info) = env.reset()?;
    assert_eq!(obs.shape(), vec![84, 84, 3]);
    assert!(env.observation_space().contains(&obs.clone().into_vec()));
    assert_eq!(info.health, 100.0);
    assert_eq!(info.energy, 60.0);
    assert_eq!(info.steps, 0);
    assert_eq!(info.enemies_remaining, 6);
    assert!(format!("{:?}", info).starts_with("{\"health\": 100.0, \"energy\": 60.0"));
    env.close()
}

#[test]
fn step_before_reset_fails() -> Result<()> {
    let mut env = make("ZeldaCC-v0", None)?;
    let err = env.step(&ZeldaAct::new(0)).err().unwrap();
    assert!(is_error(&err, |e| matches!(e, ZeldaError::NotReset)));
    Ok(())
}

#[test]
fn invalid_action_leaves_state_unchanged() -> Result<()> {
    let mut env = make("ZeldaCC-v0", None)?;
    env.reset()?;
    let frame = env.world().unwrap().frame;

    let err = env.step(&ZeldaAct::new(ZeldaAction::N)).err().unwrap();
    assert!(is_error(&err, |e| matches!(e, ZeldaError::InvalidAction { .. })));
    assert_eq!(
        err.to_string(),
        "Invalid action 7; expected an element of Discrete(7)"
    );
    assert_eq!(env.world().unwrap().frame, frame);
    Ok(())
}

#[test]
fn attack_returns_reward_and_flags() -> Result<()> {
    let mut env = make("ZeldaCC-v0", Some(RenderMode::RgbArray))?;
    env.reset()?;
    let (step, record) = env.step(&ZeldaAction::Attack.into())?;
    assert!(step.reward.is_finite());
    assert!(!step.is_terminated);
    assert!(!step.is_truncated);
    assert_eq!(step.info.steps, 1);
    assert_eq!(record.get_string("action")?, "attack");
    assert_eq!(record.get_array1("pos")?.len(), 2);
    Ok(())
}

#[test]
fn idle_step_costs_a_little() -> Result<()> {
    let mut env = make("ZeldaCC-v0", None)?;
    env.reset()?;
    // Enemies spawn far from the player and cannot reach them in one step.
    let (step, _) = env.step(&ZeldaAct::new(0))?;
    assert_eq!(step.reward, -0.001);
    Ok(())
}

#[test]
fn truncated_at_max_episode_steps() -> Result<()> {
    let config = ZeldaEnvConfig::default().max_episode_steps(3);
    let mut env = ZeldaEnv::build(&config, 0)?;
    env.reset()?;
    for i in 1..=3 {
        let (step, _) = env.step(&ZeldaAct::new(0))?;
        assert!(!step.is_terminated);
        assert_eq!(step.is_truncated, i == 3);
    }
    Ok(())
}

#[test]
fn zero_frame_skip_is_rejected() -> Result<()> {
    let dir = TempDir::new("zelda_env_config")?;
    let path = dir.path().join("env.yaml");
    std::fs::write(&path, "frame_skip: 0\n")?;
    let config = ZeldaEnvConfig::load(&path)?;

    let err = ZeldaEnv::build(&config, 0).err().unwrap();
    assert!(is_error(&err, |e| matches!(e, ZeldaError::InvalidConfig(_))));
    assert_eq!(
        err.to_string(),
        "Invalid configuration: frame_skip must be at least 1"
    );
    Ok(())
}

#[test]
fn no_enemies_terminates_at_once() -> Result<()> {
    let config = ZeldaEnvConfig::default().n_enemies(0);
    let mut env = ZeldaEnv::build(&config, 0)?;
    env.reset()?;
    let (step, _) = env.step_with_reset(&ZeldaAct::new(0))?;
    assert!(step.is_terminated);
    assert!(step.init_obs.is_some());
    Ok(())
}

#[test]
fn render_modes() -> Result<()> {
    let mut env = make("ZeldaCC-v0", Some(RenderMode::RgbArray))?;
    env.reset()?;
    let frame = env.render()?.unwrap();
    assert_eq!(frame.shape(), [240, 320, 3]);

    let mut env = make("ZeldaCC-v0", None)?;
    env.reset()?;
    assert!(env.render()?.is_none());
    Ok(())
}

#[test]
fn closed_env_rejects_calls() -> Result<()> {
    let mut env = make("ZeldaCC-v0", Some(RenderMode::RgbArray))?;
    env.reset()?;
    env.close()?;
    env.close()?;

    let err = env.step(&ZeldaAct::new(0)).err().unwrap();
    assert!(is_error(&err, |e| matches!(e, ZeldaError::Closed)));
    assert!(env.reset().is_err());
    assert!(env.render().is_err());
    Ok(())
}

#[test]
fn same_seed_same_trajectory() -> Result<()> {
    let mut env1 = make_with_seed("ZeldaCC-v0", None, 7)?;
    let mut env2 = make_with_seed("ZeldaCC-v0", None, 7)?;
    let (obs1, _) = env1.reset()?;
    let (obs2, _) = env2.reset()?;
    assert_eq!(obs1, obs2);

    for a in [4, 4, 1, 5, 6, 2, 3] {
        let (s1, _) = env1.step(&ZeldaAct::new(a))?;
        let (s2, _) = env2.step(&ZeldaAct::new(a))?;
        assert_eq!(s1.obs, s2.obs);
        assert_eq!(s1.reward, s2.reward);
    }

    let (obs1, _) = env1.reset_with_index(3)?;
    let (obs2, _) = env2.reset_with_index(3)?;
    assert_eq!(obs1, obs2);
    Ok(())
}

#[test]
fn seeded_action_space_is_reproducible() -> Result<()> {
    let mut env1 = make("ZeldaCC-v0", None)?;
    let mut env2 = make("ZeldaCC-v0", None)?;
    env1.seed_action_space(11);
    env2.seed_action_space(11);
    for _ in 0..20 {
        let a = env1.action_space().sample();
        assert!(a < ZeldaAction::N);
        assert_eq!(a, env2.action_space().sample());
    }
    Ok(())
}

#[test]
fn evaluate_random_policy() -> Result<()> {
    let dir = TempDir::new("zelda_env_policy")?;
    let path = dir.path().join("policy.yaml");
    std::fs::write(&path, "seed: 3\n")?;
    let mut policy = RandomPolicy::build_from_path(&path)?;

    let config = ZeldaEnvConfig::default().max_episode_steps(20);
    let mut evaluator = DefaultEvaluator::<ZeldaEnv>::new(&config, 0, 2)?;
    let record = evaluator.evaluate(&mut policy)?;
    assert!(record.get_scalar("Episode return")?.is_finite());
    evaluator.close()
}
