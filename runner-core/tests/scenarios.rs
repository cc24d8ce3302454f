use runner_core::{
    Collision,
    GROUND_Y,
    Game,
    GameConfig,
    Input,
    ObstacleKind,
    Phase,
    SCREEN_WIDTH,
};

const IDLE: Input = Input {
    jump: false,
    block: false,
};
const JUMP: Input = Input {
    jump: true,
    block: false,
};
const BLOCK: Input = Input {
    jump: false,
    block: true,
};

/// Put the obstacle where it will be at x = `x` when this tick's collision
/// check runs.
fn place(game: &mut Game, kind: ObstacleKind, x: i32) {
    let speed = game.config().obstacle_speed;
    let obstacle = game.obstacle_mut();
    obstacle.kind = kind;
    obstacle.x = x + speed;
}

fn started(seed: u32) -> Game {
    let mut game = Game::new(GameConfig::default());
    game.start(seed);
    game
}

#[test]
fn pressing_jump_at_the_prompt_starts_a_fresh_run() {
    let mut game = Game::new(GameConfig::default());
    assert_eq!(game.phase(), Phase::AwaitingStart);

    game.start(0x1234);

    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.session().score, 0);
    assert!(!game.session().over);
    assert!(game.player().is_grounded());
    assert_eq!(game.obstacle().x, SCREEN_WIDTH);
}

#[test]
fn log_hits_a_grounded_player() {
    let mut game = started(1);
    game.advance(IDLE, 0);
    place(&mut game, ObstacleKind::Log, 5);

    let report = game.advance(IDLE, 30);

    assert_eq!(game.obstacle().x, 5);
    assert_eq!(report.collision, Some(Collision::Fatal(ObstacleKind::Log)));
    assert!(game.session().over);
    assert_eq!(game.phase(), Phase::GameOver);
}

#[test]
fn raised_shield_deflects_an_arrow() {
    let mut game = started(2);
    game.advance(IDLE, 0);
    place(&mut game, ObstacleKind::Arrow, 20);

    let report = game.advance(BLOCK, 30);

    assert_eq!(report.collision, Some(Collision::Deflected));
    assert_eq!(game.obstacle().x, SCREEN_WIDTH);
    assert!(!game.session().over);
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn unblocked_arrow_ends_the_run() {
    let mut game = started(3);
    game.advance(IDLE, 0);
    place(&mut game, ObstacleKind::Arrow, 20);

    game.advance(IDLE, 30);

    assert!(game.session().over);
}

#[test]
fn arrow_past_the_player_is_harmless() {
    let mut game = started(10);
    game.advance(IDLE, 0);
    place(&mut game, ObstacleKind::Arrow, 5);

    let report = game.advance(BLOCK, 30);

    assert_eq!(game.obstacle().x, 5);
    assert_eq!(report.collision, None);
    assert!(!game.session().over);
}

#[test]
fn arrow_catches_a_jumping_player() {
    let mut game = started(4);
    game.advance(IDLE, 0);
    game.advance(JUMP, 30);
    place(&mut game, ObstacleKind::Arrow, 40);

    game.advance(
        Input {
            jump: false,
            block: true,
        },
        60,
    );

    assert!(!game.player().is_grounded());
    assert!(game.session().over);
}

#[test]
fn jump_clears_a_log() {
    let mut game = started(5);
    game.advance(IDLE, 0);
    game.advance(JUMP, 30);
    place(&mut game, ObstacleKind::Log, 40);

    let report = game.advance(IDLE, 60);

    assert_eq!(report.collision, None);
    assert!(!game.session().over);
}

#[test]
fn jump_profile_is_two_level() {
    let mut game = started(6);
    game.advance(IDLE, 0);
    let apex = game.config().apex_y();

    game.advance(JUMP, 30);
    let mut heights = vec![game.player().y];
    for t in 0..40 {
        game.advance(IDLE, 60 + t * 30);
        // keep the lane clear so the run doesn't end mid-jump
        game.obstacle_mut().x = SCREEN_WIDTH;
        heights.push(game.player().y);
        let player = game.player();
        assert_eq!(player.jumping, player.jump_counter > 0);
    }

    assert!(heights.iter().all(|&y| y == apex || y == GROUND_Y));
    assert_eq!(heights.iter().filter(|&&y| y == apex).count(), 14);
    assert!(heights[..14].iter().all(|&y| y == apex));
    // the 30th tick of the jump lands it
    assert!(!game.player().jumping);
}

#[test]
fn score_counts_ticks_until_the_end() {
    let mut game = started(7);
    for t in 0..25 {
        game.advance(IDLE, t * 30);
        assert_eq!(game.session().score, t as u32 + 1);
        assert_eq!(game.session().elapsed_ticks, t as u32 + 1);
    }

    place(&mut game, ObstacleKind::Log, 10);
    game.advance(IDLE, 25 * 30);
    let final_score = game.session().score;
    assert_eq!(final_score, 26);

    for t in 26..40 {
        game.advance(IDLE, t * 30);
    }
    assert_eq!(game.session().score, final_score);
}

#[test]
fn full_cycle_back_to_the_prompt() {
    let mut game = started(8);
    game.advance(IDLE, 0);
    place(&mut game, ObstacleKind::Log, 5);
    assert!(game.advance(IDLE, 30).game_over);
    assert_eq!(game.phase(), Phase::GameOver);

    game.finish();
    assert_eq!(game.phase(), Phase::AwaitingStart);

    game.start(9);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.session().score, 0);
}

#[test]
fn obstacles_keep_coming_with_both_kinds() {
    let mut game = started(0xC0FFEE);
    let (mut logs, mut arrows) = (0, 0);
    for t in 0..2000u64 {
        // a perfect player: stand still and shield everything, hop logs
        let obstacle = game.obstacle();
        let close = obstacle.x < 120;
        let input = match obstacle.kind {
            ObstacleKind::Arrow => Input {
                jump: false,
                block: close,
            },
            ObstacleKind::Log => Input {
                jump: close && t % 2 == 0,
                block: false,
            },
        };
        let report = game.advance(input, t * 30);
        if report.respawned || report.collision == Some(Collision::Deflected) {
            match game.obstacle().kind {
                ObstacleKind::Log => logs += 1,
                ObstacleKind::Arrow => arrows += 1,
            }
        }
        if report.game_over {
            game.start(t as u32);
        }
    }
    assert!(logs > 5 && arrows > 5, "logs = {logs}, arrows = {arrows}");
}
