//! Simulation of the top-down action-adventure game behind [`ZeldaEnv`](crate::ZeldaEnv).
//!
//! The world is a tile map with a player and a few enemies. The simulation advances
//! one frame at a time with [`World::step_frame`]; the environment repeats an action
//! for several frames and turns [`FrameEvents`] into rewards.
mod draw;
mod enemy;
mod map;
mod player;
pub mod settings;
pub use draw::draw;
pub use enemy::{Enemy, EnemyKind, EnemyStatus};
pub use map::{Tile, TileMap};
pub use player::Player;

use crate::ZeldaAction;
use settings::*;

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle of the given size centered at `(cx, cy)`.
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Facing direction of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn vector(&self) -> (f32, f32) {
        match self {
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }

    pub fn from_action(action: ZeldaAction) -> Option<Self> {
        match action {
            ZeldaAction::Up => Some(Self::Up),
            ZeldaAction::Down => Some(Self::Down),
            ZeldaAction::Left => Some(Self::Left),
            ZeldaAction::Right => Some(Self::Right),
            _ => None,
        }
    }
}

/// Moves `rect` by `(dx, dy)`, resolving each axis separately against blocking tiles.
pub(crate) fn move_with_collision(map: &TileMap, rect: Rect, dx: f32, dy: f32) -> Rect {
    let mut rect = rect;
    if dx != 0.0 {
        let moved = rect.translate(dx, 0.0);
        if !map.collides(&moved) {
            rect = moved;
        }
    }
    if dy != 0.0 {
        let moved = rect.translate(0.0, dy);
        if !map.collides(&moved) {
            rect = moved;
        }
    }
    rect
}

/// What happened in a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameEvents {
    pub damage_dealt: f32,
    pub damage_taken: f32,
    pub kills: u32,
    pub exp_gained: u32,
}

impl FrameEvents {
    pub fn accumulate(&mut self, other: FrameEvents) {
        self.damage_dealt += other.damage_dealt;
        self.damage_taken += other.damage_taken;
        self.kills += other.kills;
        self.exp_gained += other.exp_gained;
    }
}

/// State of the game.
#[derive(Debug, Clone)]
pub struct World {
    pub map: TileMap,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub frame: u64,
}

impl World {
    /// Tile on which the player spawns.
    pub const SPAWN: (usize, usize) = (MAP_WIDTH / 2, MAP_HEIGHT / 2);

    /// Generates a new world. Enemies are placed on tiles reachable from the spawn point.
    pub fn generate(rng: &fastrand::Rng, n_enemies: usize) -> Self {
        let map = TileMap::generate(rng, Self::SPAWN);
        let player = Player::new(Self::SPAWN);

        let (sx, sy) = Self::SPAWN;
        let mut candidates = map
            .reachable_from(Self::SPAWN)
            .into_iter()
            .filter(|&(x, y)| x.abs_diff(sx).max(y.abs_diff(sy)) >= SPAWN_CLEARANCE)
            .collect::<Vec<_>>();
        rng.shuffle(&mut candidates);

        let enemies = candidates
            .into_iter()
            .take(n_enemies)
            .map(|tile| Enemy::new(EnemyKind::sample(rng), tile))
            .collect();

        Self {
            map,
            player,
            enemies,
            frame: 0,
        }
    }

    /// Advances the game by one frame.
    ///
    /// `trigger` is `true` on the first frame of an environment step; attack and
    /// magic are started only on that frame.
    pub fn step_frame(&mut self, action: ZeldaAction, trigger: bool) -> FrameEvents {
        let mut events = FrameEvents::default();
        self.frame += 1;
        self.player.tick();

        match action {
            ZeldaAction::Attack if trigger => {
                self.player.start_attack();
            }
            ZeldaAction::Magic if trigger => {
                self.player.start_magic();
            }
            _ => {
                if let Some(dir) = Direction::from_action(action) {
                    self.player.facing = dir;
                    if !self.player.is_busy() {
                        let (dx, dy) = dir.vector();
                        self.player.rect = move_with_collision(
                            &self.map,
                            self.player.rect,
                            dx * PLAYER_SPEED,
                            dy * PLAYER_SPEED,
                        );
                    }
                }
            }
        }

        // Weapon and magic hits
        let player_center = self.player.rect.center();
        let mut hits = Vec::new();
        if let Some(sword) = self.player.sword_rect() {
            hits.push((sword, self.player.weapon_damage()));
        }
        if let Some(flame) = self.player.flame_rect() {
            hits.push((flame, self.player.magic_damage()));
        }
        for (area, damage) in hits {
            for enemy in self.enemies.iter_mut().filter(|e| e.rect.overlaps(&area)) {
                if let Some(dealt) = enemy.receive_damage(damage, player_center) {
                    events.damage_dealt += dealt;
                }
            }
        }

        // Defeated enemies
        let n_before = self.enemies.len();
        let mut exp = 0;
        self.enemies.retain(|e| {
            let alive = e.health > 0.0;
            if !alive {
                exp += e.kind.stats().exp;
            }
            alive
        });
        events.kills = (n_before - self.enemies.len()) as u32;
        events.exp_gained = exp;
        self.player.exp += exp;

        // Enemy behaviour
        for enemy in self.enemies.iter_mut() {
            if let Some(damage) = enemy.update(player_center, &self.map) {
                events.damage_taken += self.player.take_damage(damage);
            }
        }

        events
    }

    pub fn is_player_dead(&self) -> bool {
        self.player.health <= 0.0
    }

    pub fn enemies_remaining(&self) -> usize {
        self.enemies.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn open_world() -> World {
        let rng = fastrand::Rng::with_seed(0);
        let mut world = World::generate(&rng, 0);
        world.map = TileMap::bordered();
        world
    }

    #[test]
    fn rects_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert_eq!(Rect::centered(5.0, 5.0, 4.0, 2.0), Rect::new(3.0, 4.0, 4.0, 2.0));
    }

    #[test]
    fn generated_enemies_keep_clearance() {
        let rng = fastrand::Rng::with_seed(42);
        let world = World::generate(&rng, 6);
        assert!(world.enemies_remaining() <= 6);
        let (sx, sy) = World::SPAWN;
        for e in world.enemies.iter() {
            let (cx, cy) = e.rect.center();
            let (tx, ty) = ((cx as usize) / TILE, (cy as usize) / TILE);
            assert!(tx.abs_diff(sx).max(ty.abs_diff(sy)) >= SPAWN_CLEARANCE);
            assert!(!world.map.get(tx, ty).is_blocking());
        }
    }

    #[test]
    fn same_seed_same_world() {
        let w1 = World::generate(&fastrand::Rng::with_seed(5), 4);
        let w2 = World::generate(&fastrand::Rng::with_seed(5), 4);
        assert_eq!(w1.map, w2.map);
        assert_eq!(
            w1.enemies.iter().map(|e| e.rect).collect::<Vec<_>>(),
            w2.enemies.iter().map(|e| e.rect).collect::<Vec<_>>()
        );
    }

    #[test]
    fn player_moves_and_faces() {
        let mut world = open_world();
        let (x0, y0) = world.player.rect.center();
        world.step_frame(ZeldaAction::Right, true);
        world.step_frame(ZeldaAction::Right, false);
        let (x1, y1) = world.player.rect.center();
        assert_eq!(x1 - x0, 2.0 * PLAYER_SPEED);
        assert_eq!(y1, y0);
        assert_eq!(world.player.facing, Direction::Right);
    }

    #[test]
    fn walls_block_movement() {
        let mut world = open_world();
        for _ in 0..200 {
            world.step_frame(ZeldaAction::Up, false);
        }
        // The top row is a wall.
        assert!(world.player.rect.y >= TILE as f32);
    }

    #[test]
    fn sword_kills_adjacent_enemy() {
        let mut world = open_world();
        let (sx, sy) = World::SPAWN;
        world.player.facing = Direction::Right;
        world.enemies = vec![Enemy::new(EnemyKind::Bamboo, (sx + 1, sy))];

        let mut total = FrameEvents::default();
        for i in 0..600 {
            let trigger = i % 4 == 0;
            total.accumulate(world.step_frame(ZeldaAction::Attack, trigger));
            if world.enemies_remaining() == 0 {
                break;
            }
        }
        assert_eq!(world.enemies_remaining(), 0);
        assert_eq!(total.kills, 1);
        assert_eq!(total.exp_gained, EnemyKind::Bamboo.stats().exp);
        assert_eq!(world.player.exp, EnemyKind::Bamboo.stats().exp);
        assert!(total.damage_dealt >= EnemyKind::Bamboo.stats().health);
    }

    #[test]
    fn enemy_in_range_hurts_player() {
        let mut world = open_world();
        let (sx, sy) = World::SPAWN;
        world.enemies = vec![Enemy::new(EnemyKind::Raccoon, (sx + 1, sy))];

        let events = world.step_frame(ZeldaAction::NoOp, true);
        assert_eq!(events.damage_taken, EnemyKind::Raccoon.stats().damage);
        assert_eq!(
            world.player.health,
            PLAYER_HEALTH - EnemyKind::Raccoon.stats().damage
        );

        // No second hit right away.
        let events = world.step_frame(ZeldaAction::NoOp, true);
        assert_eq!(events.damage_taken, 0.0);
    }
}
