use super::{move_with_collision, settings::*, Rect, TileMap};

/// Kinds of monsters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Squid,
    Raccoon,
    Spirit,
    Bamboo,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [Self::Squid, Self::Raccoon, Self::Spirit, Self::Bamboo];

    pub fn stats(&self) -> EnemyStats {
        match self {
            Self::Squid => EnemyStats {
                health: 100.0,
                exp: 100,
                damage: 20.0,
                speed: 1.5,
                attack_radius: 20.0,
                notice_radius: 90.0,
                color: [120, 60, 160],
            },
            Self::Raccoon => EnemyStats {
                health: 300.0,
                exp: 250,
                damage: 40.0,
                speed: 1.0,
                attack_radius: 30.0,
                notice_radius: 100.0,
                color: [150, 90, 50],
            },
            Self::Spirit => EnemyStats {
                health: 100.0,
                exp: 110,
                damage: 8.0,
                speed: 2.0,
                attack_radius: 15.0,
                notice_radius: 88.0,
                color: [200, 220, 255],
            },
            Self::Bamboo => EnemyStats {
                health: 70.0,
                exp: 120,
                damage: 6.0,
                speed: 1.5,
                attack_radius: 12.0,
                notice_radius: 75.0,
                color: [190, 200, 60],
            },
        }
    }

    pub fn sample(rng: &fastrand::Rng) -> Self {
        Self::ALL[rng.usize(..Self::ALL.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyStatus {
    Idle,
    Move,
    Attack,
}

/// A monster chasing the player.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub rect: Rect,
    pub health: f32,
    pub status: EnemyStatus,
    attack_cooldown: u32,
    hit_timer: u32,
    knockback: (f32, f32),
}

impl Enemy {
    /// Creates an enemy at the center of tile `(x, y)`.
    pub fn new(kind: EnemyKind, tile: (usize, usize)) -> Self {
        let cx = (tile.0 * TILE + TILE / 2) as f32;
        let cy = (tile.1 * TILE + TILE / 2) as f32;
        Self {
            kind,
            rect: Rect::centered(cx, cy, ENEMY_SIZE, ENEMY_SIZE),
            health: kind.stats().health,
            status: EnemyStatus::Idle,
            attack_cooldown: 0,
            hit_timer: 0,
            knockback: (0.0, 0.0),
        }
    }

    /// `true` while recovering from a hit.
    pub fn is_hit(&self) -> bool {
        self.hit_timer > 0
    }

    /// Applies damage from the player standing at `from`.
    ///
    /// Returns the damage dealt, or `None` if the enemy is still recovering from
    /// the previous hit.
    pub fn receive_damage(&mut self, damage: f32, from: (f32, f32)) -> Option<f32> {
        if self.is_hit() || self.health <= 0.0 {
            return None;
        }
        let dealt = damage.min(self.health);
        self.health -= dealt;
        self.hit_timer = ENEMY_HIT_FRAMES;

        let (ux, uy) = unit(from, self.rect.center());
        let power = ENEMY_RESISTANCE * 0.5;
        self.knockback = (ux * power, uy * power);
        Some(dealt)
    }

    /// Moves toward or attacks the player at `target`. Returns the damage of an attack.
    pub fn update(&mut self, target: (f32, f32), map: &TileMap) -> Option<f32> {
        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);

        if self.hit_timer > 0 {
            self.hit_timer -= 1;
            let (dx, dy) = self.knockback;
            self.rect = move_with_collision(map, self.rect, dx, dy);
            return None;
        }

        let stats = self.kind.stats();
        let (cx, cy) = self.rect.center();
        let distance = ((target.0 - cx).powi(2) + (target.1 - cy).powi(2)).sqrt();

        if distance <= stats.attack_radius {
            self.status = EnemyStatus::Attack;
            if self.attack_cooldown == 0 {
                self.attack_cooldown = ENEMY_ATTACK_COOLDOWN;
                return Some(stats.damage);
            }
        } else if distance <= stats.notice_radius {
            self.status = EnemyStatus::Move;
            let (ux, uy) = unit((cx, cy), target);
            self.rect = move_with_collision(map, self.rect, ux * stats.speed, uy * stats.speed);
        } else {
            self.status = EnemyStatus::Idle;
        }
        None
    }
}

/// Unit vector from `a` to `b`, zero if they coincide.
fn unit(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let norm = (dx * dx + dy * dy).sqrt();
    if norm == 0.0 {
        (0.0, 0.0)
    } else {
        (dx / norm, dy / norm)
    }
}
