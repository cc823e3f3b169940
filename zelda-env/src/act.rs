//! Action for [`ZeldaEnv`](crate::ZeldaEnv).
use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use strum::{Display, EnumCount, EnumIter};
use zelda_core::Act;

/// Commands of the player.
///
/// The discriminant is the action id accepted by the environment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    FromPrimitive,
    Display,
    EnumCount,
    EnumIter,
)]
#[repr(u8)]
pub enum ZeldaAction {
    #[strum(serialize = "no action")]
    NoOp = 0,
    #[strum(serialize = "up")]
    Up = 1,
    #[strum(serialize = "down")]
    Down = 2,
    #[strum(serialize = "left")]
    Left = 3,
    #[strum(serialize = "right")]
    Right = 4,
    #[strum(serialize = "attack")]
    Attack = 5,
    #[strum(serialize = "magic")]
    Magic = 6,
}

impl ZeldaAction {
    /// The number of actions, i.e., the size of the action space.
    pub const N: usize = <Self as EnumCount>::COUNT;

    /// Returns the action with the given id.
    pub fn from_id(id: usize) -> Option<Self> {
        Self::from_usize(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Action for [`ZeldaEnv`](crate::ZeldaEnv).
///
/// This is a raw action id. Ids out of the action space are rejected by
/// [`ZeldaEnv::step`](zelda_core::Env::step), as Gymnasium environments do.
pub struct ZeldaAct {
    pub act: usize,
}

impl ZeldaAct {
    pub fn new(act: usize) -> Self {
        Self { act }
    }

    /// Interprets the id, `None` if it is out of range.
    pub fn action(&self) -> Option<ZeldaAction> {
        ZeldaAction::from_id(self.act)
    }
}

impl Act for ZeldaAct {}

impl From<usize> for ZeldaAct {
    fn from(act: usize) -> Self {
        Self { act }
    }
}

impl From<u8> for ZeldaAct {
    fn from(act: u8) -> Self {
        Self { act: act as _ }
    }
}

impl From<ZeldaAction> for ZeldaAct {
    fn from(action: ZeldaAction) -> Self {
        Self {
            act: action as usize,
        }
    }
}
