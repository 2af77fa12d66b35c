//! The question sequence that drives the template transformation.
//!
//! Each step asks one question, records the answer into [`Answers`] and
//! applies its effects to the project tree. The last step either resets the
//! workspace and starts over, or finalizes the builder.

use indexmap::IndexMap;
use log::{debug, info};
use serde::Serialize;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use crate::answer::{capitalize, Answer, Decision, Identifier, Rule};
use crate::constants::{paths, tags, tokens};
use crate::error::{Error, Result};
use crate::instances::{generate_instances, PostTypeSpec};
use crate::interrupt::Interrupt;
use crate::matcher::Tag;
use crate::project::Project;
use crate::prompt::{Asker, Prompter, Question};
use crate::prune::prune_or_keep;
use crate::replace::{apply_replacement, ReplacementRule};
use crate::style::{paint, Style};
use crate::tags::{resolve_tag, Polarity};
use crate::workspace::WorkspaceReset;

/// One question of the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Welcome,
    Vip,
    Languages,
    CustomPostTypes,
    Sass,
    /// Only asked after SASS was accepted
    Compass,
    Gulp,
    ThemeName,
    ThemeUri,
    Author,
    AuthorUri,
    Prefix,
    Description,
    ChangeAnswers,
}

impl Step {
    /// Steps asked on every pass, in order.
    pub const SEQUENCE: [Step; 13] = [
        Step::Welcome,
        Step::Vip,
        Step::Languages,
        Step::CustomPostTypes,
        Step::Sass,
        Step::Gulp,
        Step::ThemeName,
        Step::ThemeUri,
        Step::Author,
        Step::AuthorUri,
        Step::Prefix,
        Step::Description,
        Step::ChangeAnswers,
    ];

    pub fn question(&self) -> Question {
        match self {
            Step::Welcome => Question::new(
                "To view the theme's readme type help or h. To continue building the theme hit enter",
                Rule::Any,
            ),
            Step::Vip => Question::yes_no("Will this theme need WordPress VIP theme support?"),
            Step::Languages => Question::yes_no("Will this theme need language support?"),
            Step::CustomPostTypes => {
                Question::yes_no("Will this theme need custom post type support?")
            }
            Step::Sass => Question::yes_no("Would you like to use SASS with this theme?"),
            Step::Compass => Question::yes_no("Would you like to use Compass with this theme?"),
            Step::Gulp => Question::yes_no("Would you like to use Gulp with this theme?")
                .with_note("(Gulp allows automating tasks like autoprefixing, concatenation, etc..)"),
            Step::ThemeName => Question::text("What is the name of your new theme?"),
            Step::ThemeUri => Question::new("What is the theme URL?", Rule::Url),
            Step::Author => Question::text("What is the theme author's name?"),
            Step::AuthorUri => Question::new("What is the theme author's URL?", Rule::Url),
            Step::Prefix => {
                Question::new("What should the prefix for your theme be?", Rule::Identifier)
            }
            Step::Description => Question::text("Please list your theme's description"),
            Step::ChangeAnswers => Question::yes_no("Do you need to change any information?"),
        }
    }
}

/// Answers collected during one pass of the builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Answers {
    /// Yes/no decisions, in the order they were given
    pub decisions: IndexMap<Step, Decision>,
    /// Placeholder token values, in the order they were substituted
    pub tokens: IndexMap<String, String>,
    pub prefix: Option<Identifier>,
    pub post_types: Vec<PostTypeSpec>,
}

impl Answers {
    /// Records `answer` as the answer to `step`.
    pub fn record(mut self, step: Step, answer: &Answer) -> Self {
        if let Some(decision) = answer.decision() {
            self.decisions.insert(step, decision);
        }
        match step {
            Step::ThemeName => {
                let title = answer.text();
                self.tokens.insert(tokens::TITLE_CAPITALIZE.into(), capitalize(&title));
                self.tokens.insert(tokens::TITLE.into(), title);
            }
            Step::ThemeUri => {
                self.tokens.insert(tokens::THEME_URI.into(), answer.text());
            }
            Step::Author => {
                self.tokens.insert(tokens::AUTHOR.into(), answer.text());
            }
            Step::AuthorUri => {
                self.tokens.insert(tokens::AUTHOR_URI.into(), answer.text());
            }
            Step::Prefix => {
                if let Some(prefix) = answer.identifier() {
                    self.tokens.insert(tokens::PREFIX.into(), prefix.to_string());
                    self.tokens.insert(tokens::PREFIX_CAPITALIZE.into(), prefix.capitalized());
                    self.prefix = Some(prefix.clone());
                }
            }
            Step::Description => {
                self.tokens.insert(tokens::DESCRIPTION.into(), answer.text());
            }
            _ => {}
        }
        self
    }

    pub fn decision(&self, step: Step) -> Option<Decision> {
        self.decisions.get(&step).copied()
    }

    /// Human readable summary of the answers.
    pub fn summary(&self) -> String {
        let mut lines: Vec<String> = self
            .decisions
            .iter()
            .filter(|(step, _)| **step != Step::ChangeAnswers)
            .map(|(step, decision)| format!("{step:?}: {decision}"))
            .collect();
        lines.extend(self.post_types.iter().map(|spec| format!("Post type: {}", spec.name)));
        lines.extend(self.tokens.iter().map(|(token, value)| format!("{token}: {value}")));
        lines.join("\n")
    }
}

/// Where the builder stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Ready,
    Running,
    /// No further step can run
    Finalized,
}

enum Transition {
    Continue,
    /// Ask these steps before the rest of the sequence
    Insert(Vec<Step>),
    Restart,
    Finalize,
}

/// Runs the builder questions against a project.
pub struct Flow<'a> {
    project: &'a Project,
    workspace: &'a dyn WorkspaceReset,
    prompter: &'a mut dyn Prompter,
    interrupt: &'a Interrupt,
    state: FlowState,
    passes: usize,
}

impl<'a> Flow<'a> {
    pub fn new(
        project: &'a Project,
        workspace: &'a dyn WorkspaceReset,
        prompter: &'a mut dyn Prompter,
        interrupt: &'a Interrupt,
    ) -> Self {
        Self { project, workspace, prompter, interrupt, state: FlowState::Ready, passes: 0 }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Number of passes started, restarts included.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Asks every question until the operator accepts the result.
    ///
    /// # Returns
    /// * The answers of the accepted pass
    ///
    /// # Errors
    /// * `Error::Finalized` if the flow already finished
    /// * `Error::Interrupted` if the run was cancelled
    /// * Any filesystem or workspace error raised by a step
    pub fn run(&mut self) -> Result<Answers> {
        if self.state == FlowState::Finalized {
            return Err(Error::Finalized);
        }
        self.state = FlowState::Running;

        'pass: loop {
            self.passes += 1;
            debug!("Starting pass {}", self.passes);
            let mut answers = Answers::default();
            let mut pending: VecDeque<Step> = Step::SEQUENCE.into_iter().collect();

            while let Some(step) = pending.pop_front() {
                self.interrupt.check()?;
                if step == Step::ChangeAnswers {
                    println!("\n{}", paint(answers.summary(), Style::Info));
                }

                let answer = Asker::new(&mut *self.prompter, self.interrupt).ask(&step.question())?;
                answers = answers.record(step, &answer);

                match self.dispatch(step, &answer, &mut answers)? {
                    Transition::Continue => {}
                    Transition::Insert(steps) => {
                        for next in steps.into_iter().rev() {
                            pending.push_front(next);
                        }
                    }
                    Transition::Restart => {
                        info!("Resetting workspace to change answers");
                        self.workspace.reset()?;
                        continue 'pass;
                    }
                    Transition::Finalize => {
                        self.finalize()?;
                        return Ok(answers);
                    }
                }
            }

            return Err(Error::PromptError(
                "builder pass ended without a decision on changing answers".into(),
            ));
        }
    }

    fn dispatch(&mut self, step: Step, answer: &Answer, answers: &mut Answers) -> Result<Transition> {
        match step {
            Step::Welcome => self.welcome(answer),
            Step::Vip => {
                self.resolve(tags::VIP, expect_decision(answer)?, Polarity::Normal)?;
                Ok(Transition::Continue)
            }
            Step::Languages => {
                let decision = expect_decision(answer)?;
                self.prune(paths::LANGUAGES, decision)?;
                self.resolve(tags::LANG, decision, Polarity::Normal)?;
                Ok(Transition::Continue)
            }
            Step::CustomPostTypes => {
                answers.post_types = self.custom_post_types(expect_decision(answer)?)?;
                Ok(Transition::Continue)
            }
            Step::Sass => self.sass(expect_decision(answer)?),
            Step::Compass => {
                let decision = expect_decision(answer)?;
                self.resolve(tags::COMPASS, decision, Polarity::Normal)?;
                self.resolve(tags::GULPCOMPASS, decision, Polarity::Inverse)?;
                self.resolve(tags::GULPNONCOMPASS, decision, Polarity::Normal)?;
                self.prune(paths::COMPASS_CONFIG, decision)?;
                Ok(Transition::Continue)
            }
            Step::Gulp => self.gulp(expect_decision(answer)?),
            Step::ThemeName => {
                self.substitute(answers, &[tokens::TITLE, tokens::TITLE_CAPITALIZE])
            }
            Step::ThemeUri => self.substitute(answers, &[tokens::THEME_URI]),
            Step::Author => self.substitute(answers, &[tokens::AUTHOR]),
            Step::AuthorUri => self.substitute(answers, &[tokens::AUTHOR_URI]),
            Step::Prefix => self.substitute(answers, &[tokens::PREFIX, tokens::PREFIX_CAPITALIZE]),
            Step::Description => self.substitute(answers, &[tokens::DESCRIPTION]),
            Step::ChangeAnswers => Ok(match expect_decision(answer)? {
                Decision::Affirmative => Transition::Restart,
                Decision::Negative => Transition::Finalize,
            }),
        }
    }

    fn welcome(&mut self, answer: &Answer) -> Result<Transition> {
        if !matches!(answer.text().as_str(), "help" | "h") {
            return Ok(Transition::Continue);
        }
        let readme = self.project.path(&self.project.config().readme);
        let content = fs::read_to_string(&readme).map_err(Error::file(&readme))?;
        println!("\n\n");
        for line in content.lines() {
            println!("{}", paint(line, Style::Info));
        }
        Asker::new(&mut *self.prompter, self.interrupt)
            .read_raw(&Question::new("Press enter to continue", Rule::Any))?;
        Ok(Transition::Continue)
    }

    fn custom_post_types(&mut self, decision: Decision) -> Result<Vec<PostTypeSpec>> {
        let post_types = &self.project.config().post_types;
        match decision {
            Decision::Affirmative => {
                self.resolve(tags::CUSTOM_POSTS, decision, Polarity::Inverse)?;
                let mut asker = Asker::new(&mut *self.prompter, self.interrupt);
                generate_instances(
                    self.project,
                    &mut asker,
                    &post_types.prototype,
                    &post_types.include_marker,
                )
            }
            Decision::Negative => {
                let dir = post_types.prototype.parent().unwrap_or_else(|| Path::new(""));
                if dir.as_os_str().is_empty() {
                    self.prune(&post_types.prototype, decision)?;
                } else {
                    self.prune(dir, decision)?;
                }
                self.resolve(tags::CUSTOM_POSTS, decision, Polarity::Normal)?;
                Ok(Vec::new())
            }
        }
    }

    fn sass(&mut self, decision: Decision) -> Result<Transition> {
        self.prune(paths::SASS, decision)?;
        self.resolve(tags::SASSGULP, decision, Polarity::Inverse)?;

        match decision {
            Decision::Affirmative => Ok(Transition::Insert(vec![Step::Compass])),
            Decision::Negative => {
                let stylesheet = self.project.path(&self.project.config().stylesheet);
                fs::write(&stylesheet, "").map_err(Error::file(&stylesheet))?;
                debug!("Emptied {}", stylesheet.display());
                Ok(Transition::Continue)
            }
        }
    }

    fn gulp(&mut self, decision: Decision) -> Result<Transition> {
        self.prune(paths::GULPFILE, decision)?;
        self.prune(paths::PACKAGE_JSON, decision)?;
        self.resolve(tags::GULP, decision, Polarity::Inverse)?;
        self.resolve(tags::NONGULP, decision, Polarity::Normal)?;

        if decision.is_affirmative() {
            for line in [
                "\n\nIn order to run Gulp you have to have npm installed.",
                "Please refer to the gulpfile.js file for more information.",
                "To run Gulp open a new Terminal window and cd into the theme's root directory.",
                "Run npm install and then type gulp.",
            ] {
                println!("{}", paint(line, Style::Hint));
            }
        }
        Ok(Transition::Continue)
    }

    fn substitute(&self, answers: &Answers, names: &[&str]) -> Result<Transition> {
        for name in names {
            let value = answers.tokens.get(*name).cloned().unwrap_or_default();
            apply_replacement(self.project.files(), &ReplacementRule::literal(*name, value), None)?;
        }
        Ok(Transition::Continue)
    }

    fn resolve(&self, tag: &str, decision: Decision, polarity: Polarity) -> Result<()> {
        resolve_tag(self.project.files(), &Tag::new(tag), decision, polarity).map(|_| ())
    }

    fn prune<P: AsRef<Path>>(&self, path: P, decision: Decision) -> Result<()> {
        prune_or_keep(self.project.root(), path, decision)
    }

    fn finalize(&mut self) -> Result<()> {
        if let Some(manifest) = self.project.manifest() {
            fs::remove_file(manifest).map_err(Error::file(manifest))?;
            debug!("Removed builder manifest {}", manifest.display());
        }
        self.state = FlowState::Finalized;
        println!("\n\n\nThe builder has finished and removed itself");
        println!("\n{}", paint("Enjoy your theme!", Style::Info));
        Ok(())
    }
}

fn expect_decision(answer: &Answer) -> Result<Decision> {
    answer
        .decision()
        .ok_or_else(|| Error::PromptError(format!("expected a yes/no answer, got {answer:?}")))
}
