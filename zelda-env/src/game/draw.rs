use super::{settings::*, Rect, World};
use image::{Rgb, RgbImage};

const PLAYER_COLOR: [u8; 3] = [40, 90, 200];
const SWORD_COLOR: [u8; 3] = [230, 230, 240];
const FLAME_COLOR: [u8; 3] = [250, 130, 30];
const HEALTH_COLOR: [u8; 3] = [210, 40, 40];
const ENERGY_COLOR: [u8; 3] = [50, 110, 230];
const BAR_BACKGROUND: [u8; 3] = [30, 30, 30];

/// Renders the world to a `SCREEN_WIDTH x SCREEN_HEIGHT` image.
pub fn draw(world: &World) -> RgbImage {
    let mut img = RgbImage::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
    let t = TILE as f32;

    for ty in 0..MAP_HEIGHT {
        for tx in 0..MAP_WIDTH {
            let tile = world.map.get(tx, ty);
            let rect = Rect::new(tx as f32 * t, ty as f32 * t, t, t);
            fill(&mut img, &rect, tile.color());
        }
    }

    // Flame below the characters, sword above.
    if let Some(flame) = world.player.flame_rect() {
        fill(&mut img, &flame, FLAME_COLOR);
    }

    for enemy in world.enemies.iter() {
        // Enemies flash white while recovering from a hit.
        let color = if enemy.is_hit() && world.frame % 4 < 2 {
            [255, 255, 255]
        } else {
            enemy.kind.stats().color
        };
        fill(&mut img, &enemy.rect, color);
    }

    let player = &world.player;
    if !(player.is_invulnerable() && world.frame % 4 < 2) {
        fill(&mut img, &player.rect, PLAYER_COLOR);
        let (cx, cy) = player.rect.center();
        let (dx, dy) = player.facing.vector();
        let eye = Rect::centered(cx + dx * 4.0, cy + dy * 4.0, 2.0, 2.0);
        fill(&mut img, &eye, [255, 255, 255]);
    }

    if let Some(sword) = player.sword_rect() {
        fill(&mut img, &sword, SWORD_COLOR);
    }

    bar(&mut img, 4.0, player.health / PLAYER_HEALTH, HEALTH_COLOR);
    bar(&mut img, 10.0, player.energy / PLAYER_ENERGY, ENERGY_COLOR);

    img
}

fn bar(img: &mut RgbImage, y: f32, ratio: f32, color: [u8; 3]) {
    let width = 64.0;
    fill(img, &Rect::new(4.0, y, width, 4.0), BAR_BACKGROUND);
    fill(img, &Rect::new(4.0, y, width * ratio.clamp(0.0, 1.0), 4.0), color);
}

/// Fills `rect`, clipped to the image.
fn fill(img: &mut RgbImage, rect: &Rect, color: [u8; 3]) {
    let (w, h) = (img.width() as f32, img.height() as f32);
    let x0 = rect.x.max(0.0).round() as u32;
    let y0 = rect.y.max(0.0).round() as u32;
    let x1 = (rect.x + rect.w).min(w).round() as u32;
    let y1 = (rect.y + rect.h).min(h).round() as u32;
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, Rgb(color));
        }
    }
}
