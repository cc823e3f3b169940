use super::{settings::*, Direction, Rect};

/// The player character.
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub facing: Direction,
    pub health: f32,
    pub energy: f32,
    pub exp: u32,
    attack_cooldown: u32,
    attack_timer: u32,
    magic_cooldown: u32,
    magic_timer: u32,
    invulnerable: u32,
}

impl Player {
    /// Creates a player standing at the center of tile `(x, y)`.
    pub fn new(tile: (usize, usize)) -> Self {
        let cx = (tile.0 * TILE + TILE / 2) as f32;
        let cy = (tile.1 * TILE + TILE / 2) as f32;
        Self {
            rect: Rect::centered(cx, cy, PLAYER_SIZE, PLAYER_SIZE),
            facing: Direction::Down,
            health: PLAYER_HEALTH,
            energy: PLAYER_ENERGY,
            exp: 0,
            attack_cooldown: 0,
            attack_timer: 0,
            magic_cooldown: 0,
            magic_timer: 0,
            invulnerable: 0,
        }
    }

    /// Counts down timers and recovers energy.
    pub fn tick(&mut self) {
        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
        self.attack_timer = self.attack_timer.saturating_sub(1);
        self.magic_cooldown = self.magic_cooldown.saturating_sub(1);
        self.magic_timer = self.magic_timer.saturating_sub(1);
        self.invulnerable = self.invulnerable.saturating_sub(1);
        self.energy = (self.energy + ENERGY_RECOVERY * PLAYER_MAGIC).min(PLAYER_ENERGY);
    }

    /// Swings the sword if it is not cooling down.
    pub fn start_attack(&mut self) -> bool {
        if self.attack_cooldown > 0 || self.is_busy() {
            return false;
        }
        self.attack_cooldown = ATTACK_COOLDOWN;
        self.attack_timer = ATTACK_FRAMES;
        true
    }

    /// Casts a flame if there is enough energy.
    pub fn start_magic(&mut self) -> bool {
        if self.magic_cooldown > 0 || self.is_busy() || self.energy < FLAME_COST {
            return false;
        }
        self.energy -= FLAME_COST;
        self.magic_cooldown = MAGIC_COOLDOWN;
        self.magic_timer = MAGIC_FRAMES;
        true
    }

    /// The player cannot move while attacking or casting.
    pub fn is_busy(&self) -> bool {
        self.attack_timer > 0 || self.magic_timer > 0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable > 0
    }

    /// Area hit by the sword, one tile in front of the player.
    pub fn sword_rect(&self) -> Option<Rect> {
        if self.attack_timer == 0 {
            return None;
        }
        Some(self.front_rect(TILE as f32))
    }

    /// Area hit by the flame, `FLAME_TILES` tiles in front of the player.
    pub fn flame_rect(&self) -> Option<Rect> {
        if self.magic_timer == 0 {
            return None;
        }
        Some(self.front_rect((FLAME_TILES * TILE) as f32))
    }

    fn front_rect(&self, length: f32) -> Rect {
        let t = TILE as f32;
        let r = &self.rect;
        let (cx, cy) = r.center();
        match self.facing {
            Direction::Up => Rect::new(cx - t / 2.0, r.y - length, t, length),
            Direction::Down => Rect::new(cx - t / 2.0, r.y + r.h, t, length),
            Direction::Left => Rect::new(r.x - length, cy - t / 2.0, length, t),
            Direction::Right => Rect::new(r.x + r.w, cy - t / 2.0, length, t),
        }
    }

    pub fn weapon_damage(&self) -> f32 {
        PLAYER_ATTACK + SWORD_DAMAGE
    }

    pub fn magic_damage(&self) -> f32 {
        PLAYER_MAGIC + FLAME_STRENGTH
    }

    /// Applies damage unless invulnerable and returns the damage actually taken.
    pub fn take_damage(&mut self, damage: f32) -> f32 {
        if self.is_invulnerable() || self.health <= 0.0 {
            return 0.0;
        }
        let taken = damage.min(self.health);
        self.health -= taken;
        self.invulnerable = INVULNERABILITY_FRAMES;
        taken
    }
}
