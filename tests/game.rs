//! Game integration tests.

use artswipe::{
    Artwork, Catalog, CatalogError, CatalogSource, Direction, Feedback, Game, GameOptions,
    GameOutcome, GamePhase, IgnoredReason, MAX_LIVES, catalog::FALLBACK_NOTICE,
    catalog::parse_artworks,
};

fn art(id: &str, year: i32) -> Artwork {
    Artwork::with_placeholder(id, id.to_uppercase(), "Anon", year)
}

fn scenario_game() -> Game {
    Game::with_deck(
        GameOptions::default(),
        vec![art("a", 1900), art("b", 1950), art("c", 1800)],
        1,
    )
}

#[test]
fn new_game_starts_at_second_card() {
    let game = scenario_game();
    assert_eq!(game.position(), 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.attempts(), 0);
    assert_eq!(game.lives(), 3);
    assert!(!game.is_finished());
    assert!(!game.is_out_of_lives());
    assert_eq!(game.phase(), GamePhase::AwaitingDecision);
    assert_eq!(game.previous().map(|a| a.id.as_str()), Some("a"));
    assert_eq!(game.current().map(|a| a.id.as_str()), Some("b"));
    assert_eq!(game.upcoming().map(|a| a.id.as_str()), Some("c"));
    assert_eq!(game.rounds(), 2);
}

#[test]
fn perfect_run_through_deck() {
    let mut game = scenario_game();

    let first = game.decide_now(Direction::After).unwrap();
    assert_eq!(first.feedback, Feedback::Correct);
    assert_eq!(first.outcome, None);
    assert_eq!(game.score(), 1);
    assert_eq!(game.lives(), 3);
    assert_eq!(game.position(), 2);
    assert!(!game.is_revealed());

    let second = game.decide_now(Direction::Before).unwrap();
    assert_eq!(second.feedback, Feedback::Correct);
    assert_eq!(second.outcome, Some(GameOutcome::DeckCompleted));
    assert!(game.is_finished());
    assert!(!game.is_out_of_lives());
    assert_eq!(game.position(), 2);
    assert!(game.is_perfect());

    let summary = game.summary().unwrap();
    assert_eq!(summary.score, 2);
    assert_eq!(summary.rounds, 2);
    assert_eq!(summary.outcome, GameOutcome::DeckCompleted);
    assert!(summary.perfect);
}

#[test]
fn wrong_answers_cost_lives() {
    let mut game = Game::with_deck(
        GameOptions::default(),
        vec![
            art("a", 1900),
            art("b", 1950),
            art("c", 1800),
            art("d", 1700),
            art("e", 2000),
        ],
        1,
    );

    game.decide_now(Direction::Before).unwrap();
    assert_eq!(game.lives(), 2);
    game.decide_now(Direction::After).unwrap();
    assert_eq!(game.lives(), 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.attempts(), 2);
    assert!(!game.is_finished());
    assert_eq!(game.position(), 3);

    let last = game.decide_now(Direction::After).unwrap();
    assert_eq!(last.outcome, Some(GameOutcome::OutOfLives));
    assert_eq!(game.lives(), 0);
    assert!(game.is_out_of_lives());
    assert!(!game.is_perfect());
    assert_eq!(game.position(), 3);
    assert_eq!(game.phase(), GamePhase::Finished(GameOutcome::OutOfLives));
}

#[test]
fn deck_end_with_lives_left_is_not_out_of_lives() {
    let mut game = scenario_game();
    game.decide_now(Direction::Before).unwrap();
    game.decide_now(Direction::Before).unwrap();

    assert!(game.is_finished());
    assert!(!game.is_out_of_lives());
    assert_eq!(game.lives(), 2);
    assert_eq!(game.score(), 1);
    assert_eq!(game.outcome(), Some(GameOutcome::DeckCompleted));
    assert!(!game.is_perfect());
}

#[test]
fn last_life_lost_on_last_card_is_out_of_lives() {
    let mut game = Game::with_deck(
        GameOptions::default().with_lives(1),
        vec![art("a", 1900), art("b", 1950)],
        1,
    );
    game.decide_now(Direction::Before).unwrap();
    assert_eq!(game.outcome(), Some(GameOutcome::OutOfLives));
}

#[test]
fn finished_game_ignores_decisions() {
    let mut game = scenario_game();
    game.decide_now(Direction::After).unwrap();
    game.decide_now(Direction::Before).unwrap();

    let snapshot = (game.score(), game.lives(), game.attempts(), game.position());
    assert!(game.decide(Direction::After).is_none());
    assert!(game.decide(Direction::Before).is_none());
    assert_eq!(game.can_decide(), Err(IgnoredReason::Finished));
    assert_eq!(
        snapshot,
        (game.score(), game.lives(), game.attempts(), game.position())
    );
}

#[test]
fn equal_years_resolve_as_before() {
    let mut game = Game::with_deck(
        GameOptions::default(),
        vec![art("a", 1889), art("b", 1889), art("c", 1889)],
        1,
    );
    assert_eq!(
        game.decide_now(Direction::Before).unwrap().feedback,
        Feedback::Correct
    );
    assert_eq!(
        game.decide_now(Direction::After).unwrap().feedback,
        Feedback::Incorrect
    );
}

#[test]
fn reveal_label_shows_years_while_settling() {
    let mut game = scenario_game();
    assert_eq!(game.reveal_label(), None);

    let ticket = game.decide(Direction::After).unwrap();
    assert_eq!(game.phase(), GamePhase::Settling);
    assert_eq!(game.reveal_label().as_deref(), Some("1900 → 1950"));

    game.commit(ticket).unwrap();
    assert_eq!(game.reveal_label(), None);
}

#[test]
fn restart_resets_everything_and_reshuffles() {
    let mut game = Game::from_catalog(GameOptions::default(), &Catalog::builtin(), 77);
    let first_deck = game.deck().clone();
    let epoch = game.epoch();

    while !game.is_finished() {
        game.decide_now(Direction::Before).unwrap();
    }

    let pending = {
        game.restart();
        game.decide(Direction::After).unwrap()
    };
    game.restart();

    assert_eq!(game.position(), 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.attempts(), 0);
    assert_eq!(game.lives(), 3);
    assert!(!game.is_finished());
    assert!(!game.is_out_of_lives());
    assert_eq!(game.feedback(), None);
    assert!(!game.is_revealed());
    assert_eq!(game.epoch(), epoch + 2);
    assert!(game.commit(pending).is_none());

    let mut restarted: Vec<_> = game.deck().cards().iter().map(|a| a.id.clone()).collect();
    let mut original: Vec<_> = first_deck.cards().iter().map(|a| a.id.clone()).collect();
    restarted.sort();
    original.sort();
    assert_eq!(restarted, original);
}

#[test]
fn restart_changes_deck_order() {
    let mut game = Game::from_catalog(GameOptions::default(), &Catalog::builtin(), 77);
    let mut orders = vec![game.deck().clone()];
    for _ in 0..3 {
        game.restart();
        orders.push(game.deck().clone());
    }

    assert!(orders[1..].iter().any(|deck| deck != &orders[0]));
}

#[test]
fn failed_catalog_load_keeps_game_in_progress() {
    let mut game = Game::from_catalog(GameOptions::default(), &Catalog::builtin(), 12);
    game.decide_now(Direction::Before).unwrap();

    let before = (game.attempts(), game.position(), game.epoch());
    let deck = game.deck().clone();

    assert!(!game.load_catalog(Catalog::fallback(CatalogError::Unavailable)));
    assert!(!game.load_catalog(Catalog::from_payload("not json")));

    assert_eq!(before, (game.attempts(), game.position(), game.epoch()));
    assert_eq!(game.deck(), &deck);
}

#[test]
fn starting_lives_are_clamped() {
    let many = Game::from_catalog(GameOptions::default().with_lives(9), &Catalog::builtin(), 1);
    assert_eq!(many.lives(), MAX_LIVES);
    assert_eq!(many.starting_lives(), MAX_LIVES);

    let none = Game::from_catalog(GameOptions::default().with_lives(0), &Catalog::builtin(), 1);
    assert_eq!(none.lives(), 1);
}

#[test]
fn restart_draws_from_loaded_remote_list() {
    let payload = r#"[
        {"id": "p", "title": "P", "author": "A", "year": 1500, "img": "p.jpg"},
        {"id": "q", "title": "Q", "author": "B", "year": 1600},
        {"id": "r", "title": "R", "author": "C", "year": 1700}
    ]"#;
    let mut game = Game::from_catalog(GameOptions::default(), &Catalog::builtin(), 3);
    assert!(game.load_catalog(Catalog::from_payload(payload)));
    game.restart();

    assert_eq!(game.deck().len(), 3);
    assert!(
        game.deck()
            .cards()
            .iter()
            .all(|a| ["p", "q", "r"].contains(&a.id.as_str()))
    );
}

#[test]
fn too_few_artworks_is_not_ready() {
    let mut game = Game::new(GameOptions::default(), vec![art("only", 1)], 0);
    assert_eq!(game.phase(), GamePhase::NotReady);
    assert!(!game.is_ready());
    assert!(game.decide(Direction::After).is_none());
    assert_eq!(game.current(), None);

    game.reset(vec![art("a", 1), art("b", 2)]);
    assert_eq!(game.phase(), GamePhase::AwaitingDecision);
}

#[test]
fn catalog_filters_and_normalizes_entries() {
    let payload = r#"[
        {"id": "ok", "title": "Fine", "author": "Someone", "year": "1650", "img": ""},
        {"id": "", "title": "No id", "author": "X", "year": 1},
        {"id": "notitle", "author": "X", "year": 1},
        {"id": "badyear", "title": "T", "author": "X", "year": "soon"},
        {"id": "noyear", "title": "T", "author": "X"},
        null,
        42,
        {"id": 7, "title": "Numbered", "author": "Y", "year": 1700.9, "img": "7.png"},
        {"id": "ok", "title": "Duplicate", "author": "Z", "year": 1}
    ]"#;

    let artworks = parse_artworks(payload).unwrap();
    assert_eq!(artworks.len(), 2);

    assert_eq!(artworks[0].id, "ok");
    assert_eq!(artworks[0].year, 1650);
    assert_eq!(
        artworks[0].image_ref,
        "https://picsum.photos/seed/ok/1200/900"
    );
    assert_eq!(artworks[1].id, "7");
    assert_eq!(artworks[1].year, 1700);
    assert_eq!(artworks[1].image_ref, "7.png");
}

#[test]
fn catalog_rejections_fall_back_to_builtin() {
    assert_eq!(parse_artworks("not json"), Err(CatalogError::Malformed));
    assert_eq!(parse_artworks(r#"{"id": "x"}"#), Err(CatalogError::NotAnArray));
    assert_eq!(
        parse_artworks(r#"[{"id": "x", "title": "T", "author": "A", "year": 1}]"#),
        Err(CatalogError::InsufficientArtworks { valid: 1 })
    );

    for payload in ["", "[]", "{}", "[1, 2, 3]"] {
        let catalog = Catalog::from_payload(payload);
        assert_eq!(catalog.source(), CatalogSource::BuiltIn);
        assert_eq!(catalog.artworks().len(), 10);
        assert_eq!(catalog.notice(), Some(FALLBACK_NOTICE));
    }
}

#[test]
fn commit_counts_attempt_before_termination() {
    let mut game = scenario_game();
    let ticket = game.decide(Direction::Before).unwrap();
    assert_eq!(ticket.position(), 1);
    assert_eq!(ticket.direction(), Direction::Before);
    assert_eq!(ticket.epoch(), game.epoch());

    let result = game.commit(ticket).unwrap();
    assert_eq!(result.attempts, 1);
    assert_eq!(result.score, 0);
    assert_eq!(result.lives, 2);
}
