//! Maze scene builder

use super::scene::Scene;
use crate::maze::{Enemy, MazeState, Player, Tile, TileGrid};

const EMPTY: &str = "#23203b";
const WALL: &str = "#0a0a2a";
const BUG: &str = "#ffe24a";
const BUG_RIM: &str = "#fff";
const GLITCH_WALL: &str = "#8ff";
const GLITCH_SHIMMER: &str = "#7ff";
const GOAL: &str = "#7cf";
const ENEMY_FROZEN: &str = "#ccc";
const PLAYER_NORMAL: &str = "#3fa";
const PLAYER_EYE: &str = "#fff";
const PLAYER_DEAD: &str = "#444";

/// Base color of a tile
pub fn tile_color(tile: Tile) -> &'static str {
    match tile {
        Tile::Empty => EMPTY,
        Tile::Wall => WALL,
        Tile::Collectible => BUG,
        Tile::GlitchWall => GLITCH_WALL,
        Tile::Goal => GOAL,
    }
}

/// Draw the grid, then the enemy, then the player on top.
/// Insets below are in 16px-tile units and scale with `tile`.
pub fn maze_scene(state: &MazeState, tile: f32) -> Scene {
    let mut scene = Scene::new(
        TileGrid::WIDTH as f32 * tile,
        TileGrid::HEIGHT as f32 * tile,
    );
    let px = tile / 16.0;

    for (pos, kind) in state.grid.iter() {
        let x = pos.x as f32 * tile;
        let y = pos.y as f32 * tile;
        scene.fill_rect(x, y, tile, tile, tile_color(kind));
        match kind {
            Tile::Collectible => {
                scene.fill_rect(x + 4.0 * px, y + 4.0 * px, 8.0 * px, 8.0 * px, BUG_RIM);
                scene.fill_rect(x + 5.0 * px, y + 5.0 * px, 6.0 * px, 6.0 * px, BUG);
            }
            Tile::GlitchWall => {
                scene.fill_rect(x + 2.0 * px, y + 2.0 * px, 12.0 * px, 12.0 * px, GLITCH_SHIMMER);
            }
            _ => {}
        }
    }

    let enemy = &state.enemy;
    let enemy_color = if enemy.frozen { ENEMY_FROZEN } else { Enemy::COLOR };
    let (ex, ey) = (enemy.pos.x as f32 * tile, enemy.pos.y as f32 * tile);
    scene.fill_rect(ex + 2.0 * px, ey + 2.0 * px, tile - 4.0 * px, tile - 4.0 * px, enemy_color);

    let player = &state.player;
    let (x, y) = (player.pos.x as f32 * tile, player.pos.y as f32 * tile);
    if player.alive {
        let body = if state.flags.glitch_power {
            Player::COLOR
        } else {
            PLAYER_NORMAL
        };
        scene.fill_rect(x + 3.0 * px, y + 3.0 * px, tile - 6.0 * px, tile - 6.0 * px, body);
        scene.fill_rect(x + 6.0 * px, y + 6.0 * px, 4.0 * px, 4.0 * px, PLAYER_EYE);
    } else {
        scene.fill_rect(x + 3.0 * px, y + 3.0 * px, tile - 6.0 * px, tile - 6.0 * px, PLAYER_DEAD);
    }

    scene
}
