//! Per-frame maze update

use super::state::{MazeState, Status};

/// One-shot commands, applied in the order they were pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeCommand {
    ToggleGlitch,
    ToggleFreeze,
    Reset,
}

/// Input snapshot for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MazeInput {
    /// Held arrow keys
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Key presses since the previous frame
    pub commands: Vec<MazeCommand>,
}

/// Advance the maze by one frame
pub fn tick(state: &mut MazeState, input: &MazeInput) {
    for command in &input.commands {
        match command {
            MazeCommand::ToggleGlitch => state.toggle_glitch(),
            MazeCommand::ToggleFreeze => state.toggle_freeze(),
            MazeCommand::Reset => state.reset(),
        }
    }

    update_player(state, input);
    update_enemy(state);
}

fn update_player(state: &mut MazeState, input: &MazeInput) {
    if !state.player.alive {
        return;
    }

    // Axes are independent: holding two perpendicular keys moves diagonally
    // through two separate wall checks.
    let steps = [
        (input.up, 0, -1),
        (input.down, 0, 1),
        (input.left, -1, 0),
        (input.right, 1, 0),
    ];
    for (held, dx, dy) in steps {
        if held {
            try_step(state, dx, dy);
        }
    }

    state.collect_bug();

    if state.player.pos == state.enemy.pos {
        state.player.alive = false;
        state.status = Status::Caught;
        log::debug!("Player caught at {:?}", state.player.pos);
    }
}

fn try_step(state: &mut MazeState, dx: i32, dy: i32) {
    let next = state.player.pos.offset(dx, dy);
    if !state.is_wall(next.x, next.y) {
        state.player.pos = next;
    }
}

/// Fixed patrol: walk along x, turn around at hard walls and map edges
fn update_enemy(state: &mut MazeState) {
    let enemy = &mut state.enemy;
    if enemy.frozen || !state.player.alive {
        return;
    }

    let next = enemy.pos.offset(enemy.dir, 0);
    let blocked = state.grid.get(next).is_none_or(|tile| tile.blocks_enemy());
    if blocked {
        enemy.dir = -enemy.dir;
    } else {
        enemy.pos = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::tile::{GridPos, LEVELS, Tile};

    fn held_right() -> MazeInput {
        MazeInput {
            right: true,
            ..Default::default()
        }
    }

    fn commands(commands: &[MazeCommand]) -> MazeInput {
        MazeInput {
            commands: commands.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn test_step_right_from_start() {
        let mut state = MazeState::new();
        tick(&mut state, &held_right());
        assert_eq!(state.player.pos, GridPos::new(2, 1));
    }

    #[test]
    fn test_blocked_step_is_ignored() {
        let mut state = MazeState::new();
        // (1,0) is the border wall
        tick(
            &mut state,
            &MazeInput {
                up: true,
                ..Default::default()
            },
        );
        assert_eq!(state.player.pos, GridPos::new(1, 1));
    }

    #[test]
    fn test_perpendicular_keys_both_apply() {
        let mut state = MazeState::new();
        state.player.pos = GridPos::new(3, 3);
        tick(
            &mut state,
            &MazeInput {
                down: true,
                right: true,
                ..Default::default()
            },
        );
        // Down to (3,4) is open, then right to (4,4) is a wall
        assert_eq!(state.player.pos, GridPos::new(3, 4));

        state.player.pos = GridPos::new(1, 1);
        tick(
            &mut state,
            &MazeInput {
                down: true,
                right: true,
                ..Default::default()
            },
        );
        // Down to (1,2), then right to (2,2) is a wall
        assert_eq!(state.player.pos, GridPos::new(1, 2));

        state.player.pos = GridPos::new(3, 3);
        tick(
            &mut state,
            &MazeInput {
                up: true,
                right: true,
                ..Default::default()
            },
        );
        // Up blocked, right to (4,3) open
        assert_eq!(state.player.pos, GridPos::new(4, 3));
    }

    #[test]
    fn test_glitch_mode_passes_glitch_walls() {
        let mut state = MazeState::new();
        state.enemy.frozen = true;
        state.player.pos = GridPos::new(9, 4);
        assert_eq!(state.grid.get(GridPos::new(10, 4)), Some(Tile::GlitchWall));

        tick(&mut state, &held_right());
        assert_eq!(state.player.pos, GridPos::new(9, 4));

        tick(&mut state, &commands(&[MazeCommand::ToggleGlitch]));
        assert_eq!(state.status, Status::GlitchOn);
        tick(&mut state, &held_right());
        assert_eq!(state.player.pos, GridPos::new(10, 4));
    }

    #[test]
    fn test_pickup_during_tick() {
        let mut state = MazeState::new();
        state.player.pos = GridPos::new(17, 1);
        tick(&mut state, &held_right());
        assert_eq!(state.player.pos, GridPos::new(18, 1));
        assert!(state.flags.bug_fixed);
        assert_eq!(state.grid.count(Tile::GlitchWall), 0);
        assert_eq!(state.status, Status::BugFixed);
    }

    #[test]
    fn test_caught_by_enemy() {
        let mut state = MazeState::new();
        state.player.pos = GridPos::new(13, 9);
        state.enemy.pos = GridPos::new(14, 9);
        tick(&mut state, &held_right());
        assert!(!state.player.alive);
        assert_eq!(state.status, Status::Caught);

        // Dead players and the enemy stay put
        let frozen_scene = state.clone();
        tick(&mut state, &held_right());
        assert_eq!(state, frozen_scene);
    }

    #[test]
    fn test_shared_cell_kills_without_input() {
        let mut state = MazeState::new();
        state.player.pos = state.enemy.pos;
        tick(&mut state, &MazeInput::default());
        assert!(!state.player.alive);
    }

    #[test]
    fn test_enemy_patrol_turns_at_walls() {
        let mut state = MazeState::new();
        state.player.pos = GridPos::new(1, 1);

        tick(&mut state, &MazeInput::default());
        assert_eq!(state.enemy.pos, GridPos::new(14, 9));

        // Row 9 runs open from x=10 to x=18; x=9 is a wall
        state.enemy.pos = GridPos::new(10, 9);
        tick(&mut state, &MazeInput::default());
        assert_eq!(state.enemy.pos, GridPos::new(10, 9));
        assert_eq!(state.enemy.dir, 1);
        tick(&mut state, &MazeInput::default());
        assert_eq!(state.enemy.pos, GridPos::new(11, 9));
    }

    #[test]
    fn test_enemy_ignores_glitch_walls() {
        let mut state = MazeState::new();
        // (10,4) is a glitch wall
        state.enemy.pos = GridPos::new(9, 4);
        state.enemy.dir = 1;
        tick(&mut state, &MazeInput::default());
        assert_eq!(state.enemy.pos, GridPos::new(10, 4));
    }

    #[test]
    fn test_frozen_enemy_holds() {
        let mut state = MazeState::new();
        tick(&mut state, &commands(&[MazeCommand::ToggleFreeze]));
        assert_eq!(state.enemy.pos, GridPos::new(15, 9));
        assert_eq!(state.status, Status::EnemyFrozen);
        tick(&mut state, &MazeInput::default());
        assert_eq!(state.enemy.pos, GridPos::new(15, 9));
    }

    #[test]
    fn test_reset_after_death() {
        let mut state = MazeState::new();
        state.player.pos = state.enemy.pos;
        tick(&mut state, &MazeInput::default());
        assert!(!state.player.alive);

        tick(&mut state, &commands(&[MazeCommand::Reset]));
        assert!(state.player.alive);
        assert_eq!(state.grid, LEVELS[0].grid());
        assert_eq!(state.player.pos, GridPos::new(1, 1));
        // Enemy already took its first patrol step after the reset
        assert_eq!(state.enemy.pos, GridPos::new(14, 9));
        assert_eq!(state.enemy.dir, -1);
        assert_eq!(state.status, Status::CollectBug);
    }

    #[test]
    fn test_commands_apply_in_order() {
        let mut state = MazeState::new();
        tick(
            &mut state,
            &commands(&[MazeCommand::ToggleGlitch, MazeCommand::Reset]),
        );
        assert!(!state.flags.glitch_power);

        tick(
            &mut state,
            &commands(&[MazeCommand::Reset, MazeCommand::ToggleGlitch]),
        );
        assert!(state.flags.glitch_power);
    }
}
