use super::*;

fn parse(input: &str) -> ParsedCommand {
    ParsedCommand::parse(input).unwrap()
}

#[test]
fn it_ignores_blank_input() {
    assert_eq!(ParsedCommand::parse(""), None);
    assert_eq!(ParsedCommand::parse("   \t "), None);
}

#[test]
fn it_lowercases_the_name_and_splits_args() {
    let parsed = parse("  SCAN   DuMbhu7mvQ  extra ");
    assert_eq!(parsed.name, "scan");
    assert_eq!(parsed.args, vec!["DuMbhu7mvQ", "extra"]);
    assert_eq!(parsed.raw_question, None);
}

#[test]
fn it_splits_a_quoted_question_from_the_address() {
    let parsed = parse(r#"ask "is this safe?" ABC123"#);
    assert_eq!(parsed.raw_question.as_deref(), Some("is this safe?"));
    assert_eq!(parsed.raw_address.as_deref(), Some("ABC123"));

    let parsed = parse("ask 'what is defi'");
    assert_eq!(parsed.raw_question.as_deref(), Some("what is defi"));
    assert_eq!(parsed.raw_address.as_deref(), Some(""));
}

#[test]
fn it_uses_the_whole_remainder_when_unquoted() {
    let parsed = parse("ask is this safe");
    assert_eq!(parsed.raw_question.as_deref(), Some("is this safe"));
    assert_eq!(parsed.raw_address.as_deref(), Some(""));

    let parsed = parse("ASK");
    assert_eq!(parsed.raw_question.as_deref(), Some(""));
}

#[test]
fn it_takes_the_shortest_quoted_phrase() {
    let parsed = parse(r#"ask "a" "b" MINT"#);
    assert_eq!(parsed.raw_question.as_deref(), Some("a"));
    assert_eq!(parsed.raw_address.as_deref(), Some(r#""b" MINT"#));
}

#[test]
fn it_resolves_commands() {
    assert_eq!(Command::from(&parse("analyze MINT")), Command::Scan {
        address: Some("MINT".to_string())
    });
    assert_eq!(Command::from(&parse("scan")), Command::Scan { address: None });
    assert_eq!(
        Command::from(&parse(r#"ask "gm""#)),
        Command::Ask {
            question: "gm".to_string(),
            address: None
        }
    );
    assert_eq!(Command::from(&parse("NewPairs")), Command::NewPairs);
    assert_eq!(
        Command::from(&parse("foobar baz")),
        Command::Unknown("foobar".to_string())
    );
}
