use plandl_game::constants::STORAGE_KEY;
use plandl_game::{
    Advance, Aircraft, Catalog, Correctness, DaySeed, GameEngine, GamePhase, GameStorage, Guess,
    GuessInput, MemoryStorage, Round, RoundState, select_daily,
};

fn skyhawk_only() -> Catalog {
    Catalog::from_aircraft(vec![Aircraft::with_default_image(
        "Cessna", "172", "Skyhawk",
    )])
}

fn play(engine: &GameEngine<MemoryStorage>, seed: DaySeed, guesses: &[(&str, &str, &str)]) {
    let mut session = engine.start_day(seed).unwrap();
    for (manufacturer, model, version) in guesses {
        engine
            .submit_guess(
                &mut session,
                GuessInput::new(manufacturer, model, version),
            )
            .unwrap();
        engine.advance(&mut session).unwrap();
    }
}

#[test]
fn third_round_win_completes_with_three_hundred() {
    let engine = GameEngine::new(skyhawk_only(), MemoryStorage::new());
    let seed = DaySeed::from_ymd(2024, 6, 15);
    let mut session = engine.start_day(seed).unwrap();
    assert_eq!(session.answer().aircraft.model, "172");

    let rounds = [
        (("Piper", "Cherokee", "Six"), 0),
        (("Cessna", "150", "Standard"), 0),
        (("Cessna", "172", "Skyhawk"), 300),
    ];
    let mut last = None;
    for ((manufacturer, model, version), points) in rounds {
        let outcome = engine
            .submit_guess(&mut session, GuessInput::new(manufacturer, model, version))
            .unwrap();
        assert_eq!(outcome.points, points);
        last = Some(engine.advance(&mut session).unwrap());
    }

    assert_eq!(last, Some(Advance::Completed { final_score: 300 }));
    let state = session.state();
    assert_eq!(state.phase(), GamePhase::Completed);
    assert_eq!(state.final_score, Some(300));
    assert_eq!(state.guesses.len(), 3);
    assert_eq!(state.round.get(), 3);
}

#[test]
fn five_misses_complete_with_zero() {
    let engine = GameEngine::new(skyhawk_only(), MemoryStorage::new());
    let seed = DaySeed::from_ymd(2024, 6, 16);
    let wrong = ("Piper", "J-3", "Cub");
    play(&engine, seed, &[wrong; 5]);

    let session = engine.start_day(seed).unwrap();
    let state = session.state();
    assert!(state.completed);
    assert_eq!(state.final_score, Some(0));
    assert_eq!(state.guesses.len(), 5);
    assert_eq!(state.round, Round::LAST);
}

#[test]
fn completed_day_stays_completed_on_reload() {
    let engine = GameEngine::new(skyhawk_only(), MemoryStorage::new());
    let seed = DaySeed::from_ymd(2024, 6, 17);
    play(&engine, seed, &[("Cessna", "172", "Skyhawk")]);

    let mut session = engine.start_day(seed).unwrap();
    assert_eq!(session.phase(), GamePhase::Completed);
    assert_eq!(session.state().display_score(), 500);
    assert!(
        engine
            .submit_guess(&mut session, GuessInput::new("Cessna", "172", "Skyhawk"))
            .is_err()
    );
}

fn miss(round: u8) -> Guess {
    Guess {
        round: Round::new(round).unwrap(),
        manufacturer: "Piper".into(),
        model: "J-3".into(),
        version: "Cub".into(),
        correct: Correctness::default(),
    }
}

#[test]
fn reload_mid_game_resumes_same_day_only() {
    let storage = MemoryStorage::new();
    let today = DaySeed::from_ymd(2024, 6, 18);
    let saved = RoundState {
        seed: today,
        round: Round::new(3).unwrap(),
        score: 400,
        guesses: vec![miss(1), miss(2)],
        completed: false,
        final_score: None,
    };
    storage
        .write_slot(STORAGE_KEY, &serde_json::to_string(&saved).unwrap())
        .unwrap();
    let engine = GameEngine::new(skyhawk_only(), storage);

    let resumed = engine.start_day(today).unwrap();
    assert_eq!(resumed.phase(), GamePhase::Playing(Round::new(3).unwrap()));
    assert_eq!(resumed.state().score, 400);
    assert_eq!(resumed.state().guesses.len(), 2);

    let tomorrow = DaySeed::from_ymd(2024, 6, 19);
    let fresh = engine.start_day(tomorrow).unwrap();
    assert_eq!(fresh.phase(), GamePhase::Playing(Round::FIRST));
    assert_eq!(fresh.state().score, 0);
    assert!(fresh.state().guesses.is_empty());
}

#[test]
fn never_exceeds_round_five() {
    let engine = GameEngine::new(skyhawk_only(), MemoryStorage::new());
    let mut session = engine.start_day(DaySeed::from_ymd(2024, 6, 20)).unwrap();
    for _ in 0..5 {
        engine
            .submit_guess(&mut session, GuessInput::new("A", "B", "C"))
            .unwrap();
        engine.advance(&mut session).unwrap();
        assert!(session.state().round.get() <= 5);
    }
    assert!(session.state().completed);
    assert!(engine.advance(&mut session).is_err());
}

#[test]
fn independent_runs_agree_for_every_day_of_a_year() {
    let catalog = Catalog::from_aircraft(
        (0..120)
            .map(|i| Aircraft::with_default_image("Maker", &format!("Model {i}"), "Base"))
            .collect(),
    );
    for month in 1..=12 {
        for day in 1..=28 {
            let seed = DaySeed::from_ymd(2025, month, day);
            let first = select_daily(&catalog, seed).unwrap();
            let second = select_daily(&catalog.clone(), seed).unwrap();
            assert_eq!(first.index, second.index);
            assert_eq!(first.offset_x.to_bits(), second.offset_x.to_bits());
            assert_eq!(first.offset_y.to_bits(), second.offset_y.to_bits());
            assert!(first.index < catalog.len());
        }
    }
}
