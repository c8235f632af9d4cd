use talvik::application::services::{ConversationContext, DEFAULT_PREAMBLE, PROMPT_RECENT_TURNS};
use talvik::domain::DialogueTurn;

#[test]
fn given_history_when_building_prompt_then_sections_appear_in_fixed_order() {
    let mut context = ConversationContext::new();
    context.append(DialogueTurn::user("what is the weather"));
    context.append(DialogueTurn::assistant("it is sunny"));

    let prompt = context.build_prompt("and tomorrow?");

    let preamble_pos = prompt.find(DEFAULT_PREAMBLE).expect("preamble present");
    let history_pos = prompt.find("Recent conversation:").expect("history header");
    let first_turn_pos = prompt.find("User: what is the weather").expect("user turn");
    let reply_pos = prompt.find("Assistant: it is sunny").expect("assistant turn");
    let new_text_pos = prompt.find("User: and tomorrow?").expect("new user text");

    assert!(preamble_pos < history_pos);
    assert!(history_pos < first_turn_pos);
    assert!(first_turn_pos < reply_pos);
    assert!(reply_pos < new_text_pos);
    assert!(prompt.ends_with("Assistant:"));
}

#[test]
fn given_prompt_build_when_called_then_window_is_not_mutated() {
    let mut context = ConversationContext::new();
    context.append(DialogueTurn::user("hello"));
    let len_before = context.window().len();

    let _ = context.build_prompt("are you there?");

    assert_eq!(context.window().len(), len_before);
}

#[test]
fn given_long_history_when_building_prompt_then_only_recent_turns_are_rendered() {
    let mut context = ConversationContext::new();
    for i in 0..2 * PROMPT_RECENT_TURNS {
        context.append(DialogueTurn::user(format!("msg-{}", i)));
    }

    let prompt = context.build_prompt("latest");

    assert!(!prompt.contains("msg-9\n"));
    assert!(prompt.contains(&format!("msg-{}", 2 * PROMPT_RECENT_TURNS - 1)));
}

#[test]
fn given_pinned_system_turn_when_building_prompt_then_it_leads_the_history() {
    let mut context = ConversationContext::new();
    context.set_system("answer in rhymes");
    context.append(DialogueTurn::user("hello"));

    let prompt = context.build_prompt("again");

    let system_pos = prompt.find("System: answer in rhymes").expect("system line");
    let user_pos = prompt.find("User: hello").expect("user line");
    assert!(system_pos < user_pos);
}
