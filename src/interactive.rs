use std::io::{self, BufRead, Write};

use dialoguer::Input;

use crate::error::GenerateError;
use crate::project_properties::Answers;

/// One question of the interview and the answer it fills in.
#[derive(Clone, Copy)]
pub struct Question {
    pub prompt: &'static str,
    pub default: &'static str,
    pub answer: fn(&mut Answers) -> &mut String,
}

/// Asked in this order, one at a time.
pub const QUESTIONS: [Question; 5] = [
    Question {
        prompt: "Version",
        default: "1.0.0",
        answer: |a| &mut a.version,
    },
    Question {
        prompt: "Description",
        default: "",
        answer: |a| &mut a.description,
    },
    Question {
        prompt: "Author",
        default: "",
        answer: |a| &mut a.author,
    },
    Question {
        prompt: "Email",
        default: "",
        answer: |a| &mut a.email,
    },
    Question {
        prompt: "License",
        default: "MIT",
        answer: |a| &mut a.license,
    },
];

pub trait Prompter {
    /// Blocks until one line is answered; an empty answer means `default`.
    fn ask(&mut self, question: &str, default: &str) -> Result<String, GenerateError>;
}

/// Plain line protocol: prints `Question (default): ` and reads one line.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_answer(&mut self, question: &str, default: &str) -> io::Result<String> {
        write!(self.writer, "{question} ({default}): ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }
        Ok(strip_line_terminator(line))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str, default: &str) -> Result<String, GenerateError> {
        let answer = self
            .read_answer(question, default)
            .map_err(|source| GenerateError::Prompt {
                question: question.to_string(),
                source,
            })?;
        Ok(or_default(answer, default))
    }
}

/// Interactive terminal input through dialoguer.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str, default: &str) -> Result<String, GenerateError> {
        let answer = Input::<String>::new()
            .with_prompt(format!("{question} ({default})"))
            .default(default.to_string())
            .show_default(false)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| GenerateError::Prompt {
                question: question.to_string(),
                source: io::Error::other(e.to_string()),
            })?;
        Ok(or_default(answer, default))
    }
}

fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

fn or_default(answer: String, default: &str) -> String {
    if answer.is_empty() {
        default.to_string()
    } else {
        answer
    }
}

/// Walk the questions in order, every one goes to the prompter.
pub fn collect_answers(prompter: &mut dyn Prompter) -> Result<Answers, GenerateError> {
    let mut answers = Answers::default();
    for question in QUESTIONS.iter() {
        *(question.answer)(&mut answers) = prompter.ask(question.prompt, question.default)?;
    }
    Ok(answers)
}
