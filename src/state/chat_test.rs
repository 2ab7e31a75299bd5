use super::*;

#[test]
fn greeting_is_from_the_assistant() {
    let msg = greeting();
    assert_eq!(msg.sender, Sender::Assistant);
    assert!(msg.content.starts_with("Dobrý den."));
}

#[test]
fn senders_map_to_wire_roles() {
    assert_eq!(Sender::User.role(), "user");
    assert_eq!(Sender::Assistant.role(), "assistant");
}

#[test]
fn conversation_maps_to_agent_messages_in_order() {
    let history = vec![
        greeting(),
        ChatMessage::user("Jak dlouho vařit vejce?"),
        ChatMessage::assistant("Asi deset minut natvrdo."),
    ];
    let wire = to_agent_messages(&history);
    assert_eq!(wire.len(), 3);
    assert_eq!(wire[0].role, "assistant");
    assert_eq!(wire[1].role, "user");
    assert_eq!(wire[1].content, "Jak dlouho vařit vejce?");
    assert_eq!(wire[2].role, "assistant");
}

#[test]
fn message_constructors_assign_distinct_ids() {
    let a = ChatMessage::user("a");
    let b = ChatMessage::user("b");
    assert_ne!(a.id, b.id);
}
