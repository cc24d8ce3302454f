//! Player/obstacle overlap and what it means.

use crate::{
    Obstacle,
    ObstacleKind,
    Player,
};

/// Outcome of a tick's collision check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Collision {
    /// The run is over.
    Fatal(ObstacleKind),
    /// An arrow hit a raised shield and should be removed.
    Deflected,
}

/// Half-open interval overlap on the x axis.
pub const fn overlaps(a_left: i32, a_right: i32, b_left: i32, b_right: i32) -> bool {
    a_left < b_right && a_right > b_left
}

/// Whether the obstacle's columns intersect the player's hitbox.
///
/// Only x is compared. Each kind sits at a fixed height that the player's
/// sprite always spans, so the vertical rules live in [`resolve`].
pub const fn in_range(player: &Player, obstacle: &Obstacle) -> bool {
    overlaps(obstacle.x, obstacle.right(), player.left(), player.right())
}

/// Decide what a touch between `player` and `obstacle` does this tick.
///
/// - a log is fatal unless the player is jumping
/// - an arrow is fatal unless the player is blocking on the ground
/// - an arrow against a grounded block is deflected
pub fn resolve(player: &Player, obstacle: &Obstacle) -> Option<Collision> {
    if !in_range(player, obstacle) {
        return None;
    }
    match obstacle.kind {
        ObstacleKind::Log if !player.jumping => Some(Collision::Fatal(ObstacleKind::Log)),
        ObstacleKind::Log => None,
        ObstacleKind::Arrow if player.blocking && player.is_grounded() => {
            Some(Collision::Deflected)
        }
        ObstacleKind::Arrow => Some(Collision::Fatal(ObstacleKind::Arrow)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        GameConfig,
        PLAYER_W,
        PLAYER_X,
    };

    fn at(x: i32, kind: ObstacleKind) -> Obstacle {
        Obstacle { x, kind, speed: 6 }
    }

    fn airborne() -> Player {
        let config = GameConfig::default();
        let mut player = Player::new();
        player.try_jump(&config);
        player.step_jump(&config);
        player
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        assert!(!overlaps(0, 10, 10, 20));
        assert!(overlaps(0, 11, 10, 20));
        assert!(!overlaps(20, 30, 10, 20));
    }

    #[test]
    fn range_is_player_columns() {
        let player = Player::new();
        assert!(!in_range(&player, &at(PLAYER_X + PLAYER_W, ObstacleKind::Log)));
        assert!(in_range(&player, &at(PLAYER_X + PLAYER_W - 1, ObstacleKind::Log)));
        assert!(in_range(&player, &at(PLAYER_X - 39, ObstacleKind::Log)));
        assert!(!in_range(&player, &at(PLAYER_X - 40, ObstacleKind::Log)));
    }

    #[test]
    fn arrow_range_is_narrower_than_a_log() {
        let player = Player::new();
        assert!(in_range(&player, &at(PLAYER_X + PLAYER_W - 1, ObstacleKind::Arrow)));
        assert!(in_range(&player, &at(PLAYER_X - 31, ObstacleKind::Arrow)));
        assert!(!in_range(&player, &at(PLAYER_X - 32, ObstacleKind::Arrow)));
    }

    #[test]
    fn arrow_at_five_has_already_passed() {
        let mut player = Player::new();
        player.blocking = true;
        let arrow = at(5, ObstacleKind::Arrow);
        assert!(!in_range(&player, &arrow));
        assert_eq!(resolve(&player, &arrow), None);
        assert_eq!(resolve(&Player::new(), &arrow), None);
    }

    #[test]
    fn grounded_log_is_fatal() {
        assert_eq!(
            resolve(&Player::new(), &at(5, ObstacleKind::Log)),
            Some(Collision::Fatal(ObstacleKind::Log))
        );
    }

    #[test]
    fn jumping_clears_a_log() {
        assert_eq!(resolve(&airborne(), &at(5, ObstacleKind::Log)), None);
    }

    #[test]
    fn blocking_does_not_stop_a_log() {
        let mut player = Player::new();
        player.blocking = true;
        assert!(matches!(
            resolve(&player, &at(40, ObstacleKind::Log)),
            Some(Collision::Fatal(_))
        ));
    }

    #[test]
    fn grounded_block_deflects_arrow() {
        let mut player = Player::new();
        player.blocking = true;
        assert_eq!(
            resolve(&player, &at(20, ObstacleKind::Arrow)),
            Some(Collision::Deflected)
        );
    }

    #[test]
    fn unblocked_arrow_is_fatal() {
        assert_eq!(
            resolve(&Player::new(), &at(20, ObstacleKind::Arrow)),
            Some(Collision::Fatal(ObstacleKind::Arrow))
        );
    }

    #[test]
    fn blocking_in_the_air_does_not_save_you() {
        let mut player = airborne();
        player.blocking = true;
        assert_eq!(
            resolve(&player, &at(20, ObstacleKind::Arrow)),
            Some(Collision::Fatal(ObstacleKind::Arrow))
        );
    }

    #[test]
    fn out_of_range_is_ignored() {
        assert_eq!(resolve(&Player::new(), &at(200, ObstacleKind::Arrow)), None);
    }
}
