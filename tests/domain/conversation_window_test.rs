use talvik::domain::{ConversationWindow, DialogueTurn, TurnRole, MAX_WINDOW_TURNS};

#[test]
fn given_many_appends_when_window_fills_then_length_never_exceeds_cap() {
    let mut window = ConversationWindow::new();

    for i in 0..100 {
        window.append(DialogueTurn::user(format!("msg-{}", i)));
        assert!(window.len() <= MAX_WINDOW_TURNS);
    }

    assert_eq!(window.len(), MAX_WINDOW_TURNS);
}

#[test]
fn given_overflow_when_evicting_then_oldest_turns_drop_first() {
    let mut window = ConversationWindow::new();

    for i in 0..25 {
        window.append(DialogueTurn::user(format!("msg-{}", i)));
    }

    let texts: Vec<&str> = window.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts.first(), Some(&"msg-5"));
    assert_eq!(texts.last(), Some(&"msg-24"));
    assert_eq!(texts.len(), MAX_WINDOW_TURNS);
}

#[test]
fn given_pinned_system_turn_when_window_overflows_then_system_turn_survives() {
    let mut window = ConversationWindow::new();
    window.append(DialogueTurn::system("persona"));

    for i in 0..50 {
        window.append(DialogueTurn::user(format!("msg-{}", i)));
    }

    assert_eq!(window.len(), MAX_WINDOW_TURNS);
    let system = window.system_turn().expect("system turn must survive");
    assert_eq!(system.text, "persona");
    // The cap holds with the pinned turn counted, so 19 slots remain.
    let newest: Vec<&str> = window
        .iter()
        .filter(|t| t.role == TurnRole::User)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(newest.len(), MAX_WINDOW_TURNS - 1);
    assert_eq!(newest.last(), Some(&"msg-49"));
}

#[test]
fn given_second_system_turn_when_appending_then_pinned_turn_is_replaced() {
    let mut window = ConversationWindow::new();
    window.append(DialogueTurn::system("first persona"));
    window.append(DialogueTurn::user("hello"));
    window.append(DialogueTurn::system("second persona"));

    assert_eq!(window.len(), 2);
    assert_eq!(
        window.system_turn().map(|t| t.text.as_str()),
        Some("second persona")
    );
}

#[test]
fn given_recent_query_when_window_has_system_turn_then_only_unpinned_turns_are_returned() {
    let mut window = ConversationWindow::new();
    window.append(DialogueTurn::system("persona"));
    for i in 0..5 {
        window.append(DialogueTurn::user(format!("msg-{}", i)));
    }

    let recent: Vec<&str> = window.recent(3).map(|t| t.text.as_str()).collect();
    assert_eq!(recent, vec!["msg-2", "msg-3", "msg-4"]);
}
