use guess_frame_engine::{
    Deck, Frame, FrameOutcome, GameConfig, GameEngineError, GameMode, GameSession, Genre, Grade,
    MatchType, Movie, Progress,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn test_deck() -> Deck {
    Deck::new(vec![
        Frame::new(
            "f1",
            "frames/f1.jpg",
            Movie::new("m1", "Inception").with_year(2010).with_genre(Genre::Hollywood),
        ),
        Frame::new(
            "f2",
            "frames/f2.jpg",
            Movie::new("m2", "The Dark Knight").with_year(2008).with_genre(Genre::Hollywood),
        ),
        Frame::new(
            "f3",
            "frames/f3.jpg",
            Movie::new("m3", "Lagaan").with_year(2001).with_genre(Genre::Bollywood),
        ),
    ])
}

fn start(mode: GameMode, config: &GameConfig) -> GameSession {
    let mut rng = StdRng::seed_from_u64(7);
    GameSession::start(&test_deck(), mode, config, &mut rng).unwrap()
}

fn current_title(session: &GameSession) -> String {
    session.current_frame().unwrap().movie.title.clone()
}

#[test]
fn test_full_game_all_correct() {
    let mut session = start(GameMode::Mixed, &GameConfig::default());
    assert_eq!(session.total_frames(), 3);

    let mut finished = None;
    for n in 1..=3 {
        assert_eq!(session.frame_number(), n);
        let title = current_title(&session);

        session.reveal().unwrap();
        let record = session.submit(&title, 2.0).unwrap();
        assert_eq!(record.outcome, FrameOutcome::Answered);
        assert_eq!(record.verdict.match_type(), MatchType::Exact);
        assert_eq!(record.points, 15);
        assert_eq!(record.frame_number, n);

        match session.next_frame().unwrap() {
            Progress::Next { frame_number } => assert_eq!(frame_number, n + 1),
            Progress::Complete(summary) => finished = Some(summary),
        }
    }

    let summary = finished.expect("game should complete after the last frame");
    assert_eq!(summary.score, 45);
    assert_eq!(summary.correct, 3);
    assert_eq!(summary.accuracy, 100);
    assert_eq!(summary.max_possible, 45);
    assert_eq!(summary.score_percentage, 100);
    assert_eq!(summary.grade, Grade::S);

    assert!(session.is_complete());
    assert!(session.current_frame().is_none());
    assert!(session.completed_at().is_some());
    assert_eq!(session.records().len(), 3);
}

#[test]
fn test_mode_filter_and_frame_limit() {
    let session = start(GameMode::Bollywood, &GameConfig::default());
    assert_eq!(session.total_frames(), 1);
    assert_eq!(current_title(&session), "Lagaan");

    let config = GameConfig {
        frames_per_game: 2,
        ..GameConfig::default()
    };
    let session = start(GameMode::Hollywood, &config);
    assert_eq!(session.total_frames(), 2);
    assert_eq!(session.mode(), GameMode::Hollywood);
}

#[test]
fn test_same_seed_same_order() {
    let config = GameConfig::default();
    let a = start(GameMode::Mixed, &config);
    let b = start(GameMode::Mixed, &config);
    assert_eq!(current_title(&a), current_title(&b));
}

#[test]
fn test_no_frames_for_mode() {
    let deck = Deck::new(vec![Frame::new(
        "f1",
        "f1.jpg",
        Movie::new("m1", "Heat").with_genre(Genre::Hollywood),
    )]);
    let mut rng = StdRng::seed_from_u64(1);

    let config = GameConfig::default();

    let err = GameSession::start(&deck, GameMode::Bollywood, &config, &mut rng).unwrap_err();
    assert!(matches!(err, GameEngineError::NoFrames(GameMode::Bollywood)));

    let err = GameSession::start(&Deck::default(), GameMode::Mixed, &config, &mut rng).unwrap_err();
    assert!(matches!(err, GameEngineError::NoFrames(GameMode::Mixed)));
}

#[test]
fn test_start_rejects_invalid_config() {
    let mut rng = StdRng::seed_from_u64(1);

    let no_frames = GameConfig {
        frames_per_game: 0,
        ..GameConfig::default()
    };
    let err = GameSession::start(&test_deck(), GameMode::Mixed, &no_frames, &mut rng).unwrap_err();
    assert!(matches!(err, GameEngineError::Config(_)));

    let no_timer = GameConfig {
        timer_seconds: 0,
        ..GameConfig::default()
    };
    let err = GameSession::start(&test_deck(), GameMode::Mixed, &no_timer, &mut rng).unwrap_err();
    assert!(matches!(err, GameEngineError::Config(_)));
}

#[test]
fn test_submit_requires_reveal() {
    let mut session = start(GameMode::Mixed, &GameConfig::default());
    let err = session.submit("Inception", 1.0).unwrap_err();
    assert!(matches!(err, GameEngineError::InvalidState { phase: "hidden", .. }));
}

#[test]
fn test_blank_answer_keeps_frame_open() {
    let mut session = start(GameMode::Mixed, &GameConfig::default());
    session.reveal().unwrap();

    assert!(matches!(session.submit("   ", 1.0), Err(GameEngineError::EmptyAnswer)));
    assert!(session.is_revealed());

    let title = current_title(&session);
    assert!(session.submit(&title, 1.5).unwrap().is_correct());
}

#[test]
fn test_wrong_answer_scores_nothing() {
    let mut session = start(GameMode::Mixed, &GameConfig::default());
    session.reveal().unwrap();

    let record = session.submit("Titanic", 3.0).unwrap();
    assert!(!record.is_correct());
    assert_eq!(record.points, 0);
    assert_eq!(record.user_answer.as_deref(), Some("Titanic"));
    assert_eq!(record.praise(), None);
    assert_eq!(session.score(), 0);
    assert_eq!(session.correct_answers(), 0);
}

#[test]
fn test_time_bonus_applied() {
    let mut session = start(GameMode::Mixed, &GameConfig::default());
    session.reveal().unwrap();
    let title = current_title(&session);

    let record = session.submit(&title, 8.0).unwrap();
    assert_eq!(record.points, 12);
    assert_eq!(session.score(), 12);
}

#[test]
fn test_time_up() {
    let mut session = start(GameMode::Mixed, &GameConfig::default());
    session.reveal().unwrap();

    let record = session.time_up().unwrap();
    assert_eq!(record.outcome, FrameOutcome::TimedOut);
    assert_eq!(record.user_answer, None);
    assert_eq!(record.time_taken, 20.0);
    assert_eq!(record.points, 0);

    // frame is resolved, a late answer is refused
    assert!(matches!(
        session.submit("Inception", 21.0),
        Err(GameEngineError::InvalidState { phase: "resolved", .. })
    ));
}

#[test]
fn test_late_answer_counts_as_time_up() {
    let mut session = start(GameMode::Mixed, &GameConfig::default());
    session.reveal().unwrap();
    let title = current_title(&session);

    let record = session.submit(&title, 20.0).unwrap();
    assert_eq!(record.outcome, FrameOutcome::TimedOut);
    assert_eq!(record.points, 0);
    assert_eq!(session.correct_answers(), 0);
}

#[test]
fn test_show_answer_forfeits_running_frame() {
    let mut session = start(GameMode::Mixed, &GameConfig::default());
    let title = current_title(&session);

    assert!(matches!(
        session.show_answer(),
        Err(GameEngineError::InvalidState { phase: "hidden", .. })
    ));

    session.reveal().unwrap();
    assert_eq!(session.show_answer().unwrap(), title);
    assert_eq!(session.records()[0].outcome, FrameOutcome::Forfeited);
    assert_eq!(session.records()[0].points, 0);

    // asking again after resolution just repeats the title
    assert_eq!(session.show_answer().unwrap(), title);
    assert_eq!(session.records().len(), 1);
}

#[test]
fn test_next_frame_rules() {
    let mut session = start(GameMode::Mixed, &GameConfig::default());

    session.reveal().unwrap();
    assert!(matches!(
        session.next_frame(),
        Err(GameEngineError::InvalidState { phase: "revealed", .. })
    ));
    assert!(matches!(
        session.reveal(),
        Err(GameEngineError::InvalidState { phase: "revealed", .. })
    ));

    session.time_up().unwrap();
    assert!(matches!(session.next_frame().unwrap(), Progress::Next { frame_number: 2 }));

    // hidden frames can be skipped
    assert!(matches!(session.next_frame().unwrap(), Progress::Next { frame_number: 3 }));

    let summary = match session.next_frame().unwrap() {
        Progress::Complete(summary) => summary,
        other => panic!("expected completion, got {:?}", other),
    };
    assert_eq!(summary.total, 3);
    assert_eq!(summary.correct, 0);
    assert_eq!(summary.grade, Grade::D);

    assert!(matches!(session.reveal(), Err(GameEngineError::SessionComplete)));
    assert!(matches!(session.next_frame(), Err(GameEngineError::SessionComplete)));
    assert!(matches!(session.submit("x", 1.0), Err(GameEngineError::SessionComplete)));
}

#[test]
fn test_custom_config_flows_through() {
    let yaml = "timer_seconds: 10\n\
                scoring:\n  base_points: 100\n  bonus_tiers: []\n\
                matching:\n  fuzzy_threshold: 0.99\n";
    let config = GameConfig::from_yaml(yaml).unwrap();
    let mut session = start(GameMode::Mixed, &config);
    assert_eq!(session.countdown().duration_secs(), 10);

    session.reveal().unwrap();
    let title = current_title(&session);
    let record = session.submit(&title, 9.0).unwrap();
    assert_eq!(record.points, 100);

    session.next_frame().unwrap();
    session.reveal().unwrap();
    let record = session.submit("x", 10.0).unwrap();
    assert_eq!(record.outcome, FrameOutcome::TimedOut);
    assert_eq!(record.time_taken, 10.0);
}

#[test]
fn test_record_serializes() {
    let mut session = start(GameMode::Mixed, &GameConfig::default());
    session.reveal().unwrap();
    let title = current_title(&session);
    let record = session.submit(&title, 4.0).unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["outcome"], "answered");
    assert_eq!(json["verdict"]["match_type"], "exact");
    assert_eq!(json["points"], 15);
}

#[test]
fn test_demo_files_load() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");

    let deck = Deck::load(root.join("deck.json")).unwrap();
    assert_eq!(deck.len(), 6);
    assert_eq!(deck.for_mode(GameMode::Bollywood).len(), 3);

    let config = GameConfig::load(root.join("guess-frame.yaml")).unwrap();
    assert_eq!(config.frames_per_game, 5);
    assert!(config.matching.fold_diacritics);

    let mut rng = StdRng::seed_from_u64(42);
    let session = GameSession::start(&deck, GameMode::Mixed, &config, &mut rng).unwrap();
    assert_eq!(session.total_frames(), 5);
}
