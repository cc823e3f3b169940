mod config;
mod terminal;
use crate::{
    game::{draw, FrameEvents, World},
    ZeldaAct, ZeldaAction, ZeldaObs,
};
use anyhow::Result;
pub use config::ZeldaEnvConfig;
use image::{
    imageops::{resize, FilterType::Triangle},
    RgbImage,
};
use log::{info, trace, warn};
use std::fmt;
use terminal::TerminalDisplay;
use zelda_core::{
    error::ZeldaError,
    record::{Record, RecordValue},
    space::{BoxSpace, Discrete, Space},
    Env, Info, RenderMode, RgbFrame, Step,
};

/// Additional information of a step.
#[derive(Clone, PartialEq)]
pub struct ZeldaInfo {
    pub health: f32,
    pub energy: f32,
    pub exp: u32,
    pub enemies_remaining: usize,
    pub steps: usize,
    pub kills: u32,
}

impl ZeldaInfo {
    fn new(world: &World, steps: usize, kills: u32) -> Self {
        Self {
            health: world.player.health,
            energy: world.player.energy,
            exp: world.player.exp,
            enemies_remaining: world.enemies_remaining(),
            steps,
            kills,
        }
    }
}

impl Info for ZeldaInfo {}

// Printed as a mapping from names to values.
impl fmt::Debug for ZeldaInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entry(&"health", &self.health)
            .entry(&"energy", &self.energy)
            .entry(&"exp", &self.exp)
            .entry(&"enemies_remaining", &self.enemies_remaining)
            .entry(&"steps", &self.steps)
            .entry(&"kills", &self.kills)
            .finish()
    }
}

/// A top-down action-adventure game as a reinforcement learning environment.
///
/// The player fights monsters with a sword and flame magic. An episode ends when
/// the player dies or all monsters are defeated, and is truncated after
/// `max_episode_steps` steps. Each step repeats the action for `frame_skip` frames.
///
/// Rewards:
/// * `+0.01` per point of damage dealt and `-0.01` per point of damage taken,
/// * `+exp / 100` for each defeated monster,
/// * `-0.001` per step,
/// * `+1` when the last monster is defeated and `-1` when the player dies.
pub struct ZeldaEnv {
    config: ZeldaEnvConfig,

    // `None` until the first reset
    world: Option<World>,

    // Generator of worlds
    rng: fastrand::Rng,

    act_space: Discrete,
    obs_space: BoxSpace,

    // Steps and kills in the current episode
    steps: usize,
    kills: u32,

    display: Option<TerminalDisplay>,
    closed: bool,
}

impl ZeldaEnv {
    /// Seeds the sampler of the action space.
    pub fn seed_action_space(&mut self, seed: u64) {
        self.act_space.seed(seed);
    }

    /// The configuration used to build the environment.
    pub fn config(&self) -> &ZeldaEnvConfig {
        &self.config
    }

    /// The current state of the game, `None` before the first reset.
    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    fn check_open(&self) -> Result<()> {
        if self.closed {
            return Err(ZeldaError::Closed.into());
        }
        Ok(())
    }

    fn observe(&self, frame: &RgbImage) -> ZeldaObs {
        let (w, h) = (self.config.obs_width, self.config.obs_height);
        resize(frame, w, h, Triangle).into()
    }

    fn show(&self, frame: &RgbImage) {
        if let Some(display) = self.display.as_ref() {
            // Failing to display does not break the episode.
            if let Err(e) = display.show(frame) {
                warn!("Failed to display a frame: {}", e);
            }
        }
    }
}

impl Env for ZeldaEnv {
    type Config = ZeldaEnvConfig;
    type Obs = ZeldaObs;
    type Act = ZeldaAct;
    type Info = ZeldaInfo;
    type ActSpace = Discrete;
    type ObsSpace = BoxSpace;

    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized,
    {
        info!(
            "Build {} (render_mode = {:?}, seed = {})",
            config.name, config.render_mode, seed
        );
        if config.frame_skip == 0 {
            return Err(
                ZeldaError::InvalidConfig("frame_skip must be at least 1".to_string()).into(),
            );
        }
        let display = match config.render_mode {
            Some(RenderMode::Human) => Some(TerminalDisplay::new()),
            _ => None,
        };
        let obs_shape = [
            config.obs_height as usize,
            config.obs_width as usize,
            3,
        ];

        Ok(Self {
            config: config.clone(),
            world: None,
            rng: fastrand::Rng::with_seed(seed as u64),
            act_space: Discrete::new(ZeldaAction::N),
            obs_space: BoxSpace::new(0, 255, &obs_shape),
            steps: 0,
            kills: 0,
            display,
            closed: false,
        })
    }

    fn reset(&mut self) -> Result<(Self::Obs, Self::Info)> {
        trace!("ZeldaEnv::reset()");
        self.check_open()?;

        let world = World::generate(&self.rng, self.config.n_enemies);
        self.steps = 0;
        self.kills = 0;

        let frame = draw(&world);
        let obs = self.observe(&frame);
        let info = ZeldaInfo::new(&world, 0, 0);
        self.show(&frame);
        self.world = Some(world);

        Ok((obs, info))
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<(Self::Obs, Self::Info)> {
        self.check_open()?;
        self.rng.seed(ix as u64);
        self.reset()
    }

    fn step(&mut self, act: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        trace!("ZeldaEnv::step()");
        self.check_open()?;

        let action = act.action().ok_or_else(|| ZeldaError::InvalidAction {
            action: act.act.to_string(),
            space: self.act_space.to_string(),
        })?;
        let frame_skip = self.config.frame_skip;
        let world = self.world.as_mut().ok_or(ZeldaError::NotReset)?;

        let mut events = FrameEvents::default();
        for i in 0..frame_skip {
            events.accumulate(world.step_frame(action, i == 0));
            if world.is_player_dead() || world.enemies_remaining() == 0 {
                break;
            }
        }

        let dead = world.is_player_dead();
        let cleared = world.enemies_remaining() == 0;
        let mut reward = 0.01 * events.damage_dealt + events.exp_gained as f32 / 100.0
            - 0.01 * events.damage_taken
            - 0.001;
        if cleared && events.kills > 0 && !dead {
            reward += 1.0;
        }
        if dead && events.damage_taken > 0.0 {
            reward -= 1.0;
        }

        self.steps += 1;
        self.kills += events.kills;
        let is_terminated = dead || cleared;
        let is_truncated = self.steps >= self.config.max_episode_steps;

        let info = ZeldaInfo::new(world, self.steps, self.kills);
        let frame = draw(world);
        let record = Record::from_slice(&[
            ("health", RecordValue::Scalar(world.player.health)),
            ("energy", RecordValue::Scalar(world.player.energy)),
            ("exp", RecordValue::Scalar(world.player.exp as f32)),
            (
                "pos",
                RecordValue::Array1(vec![world.player.rect.x, world.player.rect.y]),
            ),
            ("action", RecordValue::String(action.to_string())),
        ]);

        let obs = self.observe(&frame);
        self.show(&frame);

        if is_terminated {
            info!(
                "Episode ended at step {} ({})",
                self.steps,
                if dead { "player died" } else { "all enemies defeated" }
            );
        }

        let step = Step::new(obs, act.clone(), reward, is_terminated, is_truncated, info);
        Ok((step, record))
    }

    fn render(&mut self) -> Result<Option<RgbFrame>> {
        self.check_open()?;
        let world = self.world.as_ref().ok_or(ZeldaError::NotReset)?;

        match self.config.render_mode {
            Some(RenderMode::RgbArray) => {
                let frame = draw(world);
                let (w, h) = frame.dimensions();
                Ok(RgbFrame::new(w as usize, h as usize, frame.into_raw()))
            }
            // The frame has been displayed at the last step.
            Some(RenderMode::Human) => Ok(None),
            None => {
                warn!(
                    "render() is called without a render mode; build the environment with render_mode rgb_array or human"
                );
                Ok(None)
            }
        }
    }

    fn close(&mut self) -> Result<()> {
        if !self.closed {
            info!("Close {}", self.config.name);
            self.closed = true;
            self.display = None;
            self.world = None;
        }
        Ok(())
    }

    fn action_space(&self) -> &Self::ActSpace {
        &self.act_space
    }

    fn observation_space(&self) -> &Self::ObsSpace {
        &self.obs_space
    }
}
