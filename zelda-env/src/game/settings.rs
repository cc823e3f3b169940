//! Game constants. Time is measured in frames, distances in pixels.

pub const TILE: usize = 16;
pub const MAP_WIDTH: usize = 20;
pub const MAP_HEIGHT: usize = 15;
pub const SCREEN_WIDTH: usize = TILE * MAP_WIDTH;
pub const SCREEN_HEIGHT: usize = TILE * MAP_HEIGHT;

pub const PLAYER_SIZE: f32 = 12.0;
pub const PLAYER_SPEED: f32 = 2.0;
pub const PLAYER_HEALTH: f32 = 100.0;
pub const PLAYER_ENERGY: f32 = 60.0;
pub const PLAYER_ATTACK: f32 = 10.0;
pub const PLAYER_MAGIC: f32 = 4.0;
pub const INVULNERABILITY_FRAMES: u32 = 30;

pub const SWORD_DAMAGE: f32 = 15.0;
pub const ATTACK_COOLDOWN: u32 = 20;
pub const ATTACK_FRAMES: u32 = 10;

pub const FLAME_STRENGTH: f32 = 5.0;
pub const FLAME_COST: f32 = 20.0;
pub const FLAME_TILES: usize = 3;
pub const MAGIC_COOLDOWN: u32 = 20;
pub const MAGIC_FRAMES: u32 = 12;

/// Energy regained per frame is `ENERGY_RECOVERY * magic`.
pub const ENERGY_RECOVERY: f32 = 0.01;

pub const ENEMY_SIZE: f32 = 12.0;
pub const ENEMY_ATTACK_COOLDOWN: u32 = 40;
pub const ENEMY_HIT_FRAMES: u32 = 15;
pub const ENEMY_RESISTANCE: f32 = 3.0;

/// Minimum distance in tiles between the player spawn and an enemy spawn.
pub const SPAWN_CLEARANCE: usize = 5;

/// Stats of an enemy kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub health: f32,
    pub exp: u32,
    pub damage: f32,
    pub speed: f32,
    pub attack_radius: f32,
    pub notice_radius: f32,
    pub color: [u8; 3],
}
