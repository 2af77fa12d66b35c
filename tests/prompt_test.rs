use theme_builder::answer::{Answer, Decision, Rule};
use theme_builder::error::Error;
use theme_builder::interrupt::Interrupt;
use theme_builder::prompt::{Asker, Question, ScriptedPrompter};

fn ask(answers: &[&str], question: &Question) -> (Answer, usize) {
    let interrupt = Interrupt::new();
    let mut prompter = ScriptedPrompter::new(answers.iter().copied());
    let answer = Asker::new(&mut prompter, &interrupt).ask(question).unwrap();
    (answer, prompter.asked().len())
}

#[test]
fn test_yes_no_spellings() {
    let question = Question::yes_no("Will this theme need language support?");
    for (input, expected) in [
        ("yes", Decision::Affirmative),
        ("Y", Decision::Affirmative),
        ("YES", Decision::Affirmative),
        (" y ", Decision::Affirmative),
        ("no", Decision::Negative),
        ("N", Decision::Negative),
        ("No", Decision::Negative),
        ("n", Decision::Negative),
    ] {
        let (answer, asked) = ask(&[input], &question);
        assert_eq!(answer, Answer::Boolean(expected), "input {input:?}");
        assert_eq!(asked, 1);
    }
}

#[test]
fn test_invalid_yes_no_is_asked_again() {
    let question = Question::yes_no("Would you like to use Gulp with this theme?");
    let (answer, asked) = ask(&["maybe", "no"], &question);

    assert_eq!(answer, Answer::Boolean(Decision::Negative));
    assert_eq!(asked, 2);
}

#[test]
fn test_retries_are_unbounded() {
    let question = Question::yes_no("Will this theme need WordPress VIP theme support?");
    let mut answers = vec!["?"; 25];
    answers.push("yes");
    let (answer, asked) = ask(&answers, &question);

    assert_eq!(answer.decision(), Some(Decision::Affirmative));
    assert_eq!(asked, 26);
}

#[test]
fn test_url_answers() {
    let question = Question::new("What is the theme URL?", Rule::Url);

    let (answer, asked) = ask(&["example", "https://example.com/theme"], &question);
    assert_eq!(answer, Answer::Text("https://example.com/theme".into()));
    assert_eq!(asked, 2);

    let (answer, asked) = ask(&["www.example.com"], &question);
    assert_eq!(answer.text(), "www.example.com");
    assert_eq!(asked, 1);
}

#[test]
fn test_identifier_answers() {
    let question = Question::new("What should the prefix for your theme be?", Rule::Identifier);

    let (answer, asked) = ask(&["ab", "_acme", "acme_", "my theme", " My_Theme "], &question);
    assert_eq!(answer.identifier().map(|i| i.as_str()), Some("my_theme"));
    assert_eq!(answer.identifier().unwrap().capitalized(), "My_theme");
    assert_eq!(asked, 5);
}

#[test]
fn test_text_answers_cannot_close_comments() {
    let question = Question::text("What is the theme author's name?");
    let (answer, _) = ask(&["Jane */Doe"], &question);
    assert_eq!(answer, Answer::Text("Jane Doe".into()));
}

#[test]
fn test_any_rule_normalizes() {
    let (answer, _) = ask(&["  HELP "], &Question::new("Welcome", Rule::Any));
    assert_eq!(answer.text(), "help");
}

#[test]
fn test_interrupt_stops_before_reading() {
    let interrupt = Interrupt::new();
    interrupt.raise();
    let mut prompter = ScriptedPrompter::new(["yes"]);

    let result = Asker::new(&mut prompter, &interrupt).ask(&Question::yes_no("Continue?"));

    assert!(matches!(result, Err(Error::Interrupted)));
    assert!(prompter.asked().is_empty());
    assert_eq!(prompter.remaining(), 1);
}

#[test]
fn test_ask_decision_rejects_other_rules() {
    let interrupt = Interrupt::new();
    let mut prompter = ScriptedPrompter::new(["anything"]);

    let result = Asker::new(&mut prompter, &interrupt).ask_decision(&Question::text("Name?"));
    assert!(matches!(result, Err(Error::PromptError(_))));
}
