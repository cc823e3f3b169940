use super::{settings::*, Rect};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Floor,
    Grass,
    Rock,
    Tree,
    Wall,
}

impl Tile {
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Rock | Self::Tree | Self::Wall)
    }

    pub fn color(&self) -> [u8; 3] {
        match self {
            Self::Floor => [113, 166, 94],
            Self::Grass => [72, 130, 64],
            Self::Rock => [128, 128, 120],
            Self::Tree => [34, 80, 40],
            Self::Wall => [60, 56, 52],
        }
    }
}

/// A grid of `MAP_WIDTH x MAP_HEIGHT` tiles surrounded by walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Generates a map. Tiles within two tiles of `spawn` are kept walkable.
    pub fn generate(rng: &fastrand::Rng, spawn: (usize, usize)) -> Self {
        let mut tiles = Vec::with_capacity(MAP_WIDTH * MAP_HEIGHT);
        for y in 0..MAP_HEIGHT {
            for x in 0..MAP_WIDTH {
                let border = x == 0 || y == 0 || x == MAP_WIDTH - 1 || y == MAP_HEIGHT - 1;
                let near_spawn = x.abs_diff(spawn.0) <= 2 && y.abs_diff(spawn.1) <= 2;
                let tile = if border {
                    Tile::Wall
                } else if near_spawn {
                    Tile::Floor
                } else {
                    match rng.f32() {
                        r if r < 0.08 => Tile::Rock,
                        r if r < 0.14 => Tile::Tree,
                        r if r < 0.30 => Tile::Grass,
                        _ => Tile::Floor,
                    }
                };
                tiles.push(tile);
            }
        }
        Self { tiles }
    }

    /// A map with walls on the border only.
    #[cfg(test)]
    pub fn bordered() -> Self {
        let tiles = (0..MAP_WIDTH * MAP_HEIGHT)
            .map(|i| {
                let (x, y) = (i % MAP_WIDTH, i / MAP_WIDTH);
                if x == 0 || y == 0 || x == MAP_WIDTH - 1 || y == MAP_HEIGHT - 1 {
                    Tile::Wall
                } else {
                    Tile::Floor
                }
            })
            .collect();
        Self { tiles }
    }

    /// Tile at `(x, y)`; out of the map is a wall.
    pub fn get(&self, x: usize, y: usize) -> Tile {
        if x >= MAP_WIDTH || y >= MAP_HEIGHT {
            Tile::Wall
        } else {
            self.tiles[y * MAP_WIDTH + x]
        }
    }

    /// Returns `true` if `rect` overlaps a blocking tile or leaves the map.
    pub fn collides(&self, rect: &Rect) -> bool {
        if rect.x < 0.0 || rect.y < 0.0 {
            return true;
        }
        let x0 = (rect.x / TILE as f32) as usize;
        let y0 = (rect.y / TILE as f32) as usize;
        // The right and bottom edges are exclusive.
        let x1 = ((rect.x + rect.w - 0.001) / TILE as f32) as usize;
        let y1 = ((rect.y + rect.h - 0.001) / TILE as f32) as usize;
        (y0..=y1).any(|y| (x0..=x1).any(|x| self.get(x, y).is_blocking()))
    }

    /// Walkable tiles connected to `start`, in breadth-first order.
    pub fn reachable_from(&self, start: (usize, usize)) -> Vec<(usize, usize)> {
        let mut visited = vec![false; MAP_WIDTH * MAP_HEIGHT];
        let mut queue = VecDeque::new();
        let mut reachable = Vec::new();

        if self.get(start.0, start.1).is_blocking() {
            return reachable;
        }
        visited[start.1 * MAP_WIDTH + start.0] = true;
        queue.push_back(start);

        while let Some((x, y)) = queue.pop_front() {
            reachable.push((x, y));
            let neighbors = [
                (x.wrapping_sub(1), y),
                (x + 1, y),
                (x, y.wrapping_sub(1)),
                (x, y + 1),
            ];
            for (nx, ny) in neighbors {
                if nx >= MAP_WIDTH || ny >= MAP_HEIGHT {
                    continue;
                }
                let i = ny * MAP_WIDTH + nx;
                if !visited[i] && !self.tiles[i].is_blocking() {
                    visited[i] = true;
                    queue.push_back((nx, ny));
                }
            }
        }
        reachable
    }
}
