//! Tests for power activation, extension and expiry through the tick loop.

use super::support::*;

fn short_power(duration: u32) -> SimConfig {
    SimConfig { power_duration: duration, ..SimConfig::headless() }
}

#[test]
fn power_pellet_turns_hostiles_eatable_until_it_expires() {
    let mut game = game_with("########\n#Po..#G#\n########", short_power(3), Direction::Stay);
    let id = first_hostile(game.state());

    assert_eq!(game.step(Some(Direction::Right)), None);
    assert_eq!(game.state().score(), 50);
    assert_eq!(game.state().power_ticks(), 2);
    assert!(game.state().hostile(id).expect("hostile").is_eatable());

    assert_eq!(game.step(None), None);
    assert_eq!(game.state().power_ticks(), 1);

    assert_eq!(game.step(None), Some(RunOutcome::Cleared));
    assert_eq!(game.state().power_ticks(), 0);
    assert!(!game.state().hostile(id).expect("hostile").is_eatable());
    assert_eq!(
        game.log(),
        &[
            LogEvent::PowerPelletEaten { pos: Pos::new(2, 1), power_ticks: 3 },
            LogEvent::PelletEaten { pos: Pos::new(3, 1) },
            LogEvent::PelletEaten { pos: Pos::new(4, 1) },
            LogEvent::PowerExpired,
            LogEvent::Finished { outcome: RunOutcome::Cleared, tick: 3 },
        ]
    );
}

#[test]
fn second_power_pellet_extends_but_never_shortens() {
    let mut game = game_with("######\n#Poo.#\n######", short_power(5), Direction::Stay);
    game.step(Some(Direction::Right));
    assert_eq!(game.state().power_ticks(), 4);
    game.step(None);
    assert_eq!(game.state().power_ticks(), 4, "refreshed to 5, then one tick elapsed");
    assert_eq!(game.state().score(), 100);
}
