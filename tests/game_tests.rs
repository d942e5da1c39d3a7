use battlegrid::{
    Battleship, BoardError, Coord, GameConfig, GameError, GameStatus, GuessResult, Orientation,
    PlayerId, ShipSpec,
};

fn single_ship_game() -> Battleship {
    let config = GameConfig::new(5, 5, vec![ShipSpec::new("Dinghy", 1)]).unwrap();
    let mut game = Battleship::new(config).unwrap();
    game.start().unwrap();
    game
}

#[test]
fn test_operations_before_start() {
    let mut game = Battleship::default();
    assert_eq!(game.status(), GameStatus::NotStarted);
    assert_eq!(game.player(PlayerId::One).unwrap_err(), GameError::NotStarted);
    assert_eq!(
        game.place_ship(PlayerId::One, 0, Coord::new(0, 0))
            .unwrap_err(),
        GameError::NotStarted
    );
    assert_eq!(
        game.attack_player(PlayerId::One, PlayerId::Two, Coord::new(0, 0))
            .unwrap_err(),
        GameError::NotStarted
    );
    assert_eq!(game.check_winner(), None);
}

#[test]
fn test_start_builds_players_from_config() {
    let mut game = Battleship::new(GameConfig::standard(4)).unwrap();
    game.start().unwrap();
    let p1 = game.player(PlayerId::One).unwrap();
    let p2 = game.player(PlayerId::Two).unwrap();
    assert_eq!(p1.name(), "Player 1");
    assert_eq!(p2.name(), "Player 2");
    assert_eq!(p1.board().rows(), 10);
    assert_eq!(p1.board().cols(), 10);
    let lengths: Vec<_> = p2.ships().iter().map(|s| s.length()).collect();
    assert_eq!(lengths, vec![5, 4, 3, 2]);
    assert_eq!(game.status(), GameStatus::Placing);
}

#[test]
fn test_invalid_config_rejected() {
    let config = GameConfig {
        rows: 0,
        cols: 10,
        fleet: vec![],
    };
    assert_eq!(
        Battleship::new(config).unwrap_err(),
        GameError::Board(BoardError::InvalidSize { rows: 0, cols: 10 })
    );
}

#[test]
fn test_single_hit_wins() {
    let mut game = single_ship_game();
    game.place_ship(PlayerId::One, 0, Coord::new(0, 0)).unwrap();
    game.place_ship(PlayerId::Two, 0, Coord::new(2, 2)).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.check_winner(), None);

    assert!(game
        .attack_player(PlayerId::One, PlayerId::Two, Coord::new(2, 2))
        .unwrap());
    let defender = game.player(PlayerId::Two).unwrap();
    assert!(defender.is_ship_destroyed(0).unwrap());
    assert!(!defender.has_remaining_ships());
    assert_eq!(game.winner(), Some(PlayerId::One));
    assert_eq!(game.check_winner(), Some(PlayerId::One));
    assert_eq!(game.check_winner(), Some(PlayerId::One));
    assert!(game.is_game_over());
    assert_eq!(game.status(), GameStatus::Finished(PlayerId::One));
}

#[test]
fn test_second_player_can_win() {
    let mut game = single_ship_game();
    game.place_ship(PlayerId::One, 0, Coord::new(4, 4)).unwrap();
    game.place_ship(PlayerId::Two, 0, Coord::new(0, 0)).unwrap();

    assert!(!game
        .attack_player(PlayerId::One, PlayerId::Two, Coord::new(1, 1))
        .unwrap());
    assert_eq!(game.winner(), None);
    assert_eq!(
        game.fire(PlayerId::Two, PlayerId::One, Coord::new(4, 4))
            .unwrap(),
        GuessResult::Sink("Dinghy".to_string())
    );
    assert_eq!(game.winner(), Some(PlayerId::Two));
}

#[test]
fn test_attack_after_game_over_rejected() {
    let mut game = single_ship_game();
    game.place_ship(PlayerId::One, 0, Coord::new(0, 0)).unwrap();
    game.place_ship(PlayerId::Two, 0, Coord::new(0, 0)).unwrap();
    game.attack_player(PlayerId::One, PlayerId::Two, Coord::new(0, 0))
        .unwrap();
    assert_eq!(
        game.attack_player(PlayerId::Two, PlayerId::One, Coord::new(0, 0))
            .unwrap_err(),
        GameError::GameOver
    );
    assert_eq!(game.winner(), Some(PlayerId::One));
}

#[test]
fn test_self_attack_rejected() {
    let mut game = single_ship_game();
    assert_eq!(
        game.attack_player(PlayerId::Two, PlayerId::Two, Coord::new(0, 0))
            .unwrap_err(),
        GameError::SelfAttack
    );
}

#[test]
fn test_board_errors_surface_through_game() {
    let mut game = single_ship_game();
    game.place_ship(PlayerId::Two, 0, Coord::new(1, 1)).unwrap();
    game.attack_player(PlayerId::One, PlayerId::Two, Coord::new(0, 0))
        .unwrap();
    assert_eq!(
        game.attack_player(PlayerId::One, PlayerId::Two, Coord::new(0, 0))
            .unwrap_err(),
        GameError::Board(BoardError::AlreadyAttacked { row: 0, col: 0 })
    );
    assert_eq!(
        game.place_ship(PlayerId::Two, 0, Coord::new(3, 3))
            .unwrap_err(),
        GameError::Board(BoardError::ShipAlreadyPlaced)
    );
}

#[test]
fn test_restart_resets_state() {
    let mut game = single_ship_game();
    game.place_ship(PlayerId::One, 0, Coord::new(0, 0)).unwrap();
    game.place_ship(PlayerId::Two, 0, Coord::new(0, 0)).unwrap();
    game.attack_player(PlayerId::One, PlayerId::Two, Coord::new(0, 0))
        .unwrap();
    assert!(game.is_game_over());

    game.start().unwrap();
    assert_eq!(game.winner(), None);
    assert_eq!(game.status(), GameStatus::Placing);
    assert!(game.player(PlayerId::One).unwrap().shots().is_empty());
}

#[test]
fn test_place_ship_as_through_game() {
    let mut game = Battleship::new(GameConfig::default()).unwrap();
    game.start().unwrap();
    game.place_ship_as(PlayerId::One, 0, Coord::new(5, 9), Orientation::Vertical)
        .unwrap();
    let ship = &game.player(PlayerId::One).unwrap().ships()[0];
    assert_eq!(ship.orientation(), Orientation::Vertical);
    assert_eq!(ship.position().last(), Some(&Coord::new(9, 9)));
}
