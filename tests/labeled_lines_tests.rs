use chat2prompt::models::transcript::{Message, Role};
use chat2prompt::to_labeled_lines;

#[test]
fn formats_each_role_on_its_own_line() {
    let out = to_labeled_lines(vec![
        Message::system("You are helpful."),
        Message::user("hi"),
        Message::assistant("hello"),
    ]);
    assert_eq!(
        out,
        "System: You are helpful.\nuser: hi\nassistant: hello\nassistant:"
    );
}

#[test]
fn system_name_overrides_the_system_label() {
    let out = to_labeled_lines(vec![
        Message::system("in-universe narration").with_name("Narrator"),
        Message::user("go north"),
    ]);
    assert_eq!(out, "Narrator: in-universe narration\nuser: go north\nassistant:");
}

#[test]
fn non_system_names_do_not_change_the_label() {
    // Only system messages use the name as a speaker label here; other roles
    // keep their role string.
    let out = to_labeled_lines(vec![Message::user("hi").with_name("Alice")]);
    assert_eq!(out, "user: hi\nassistant:");
}

#[test]
fn unknown_roles_are_labeled_verbatim() {
    let out = to_labeled_lines(vec![Message::new(Role::Other("narrator".into()), "dawn")]);
    assert_eq!(out, "narrator: dawn\nassistant:");
}

#[test]
fn pre_rendered_string_is_passed_through_unchanged() {
    let pre = "System: canned\nuser: hi\nassistant:";
    assert_eq!(to_labeled_lines(pre), pre);
    assert_eq!(to_labeled_lines(String::from("raw")), "raw");
}

#[test]
fn output_ends_with_the_open_assistant_cue() {
    let out = to_labeled_lines(vec![Message::user("anything")]);
    assert!(out.ends_with("\nassistant:"));
}
