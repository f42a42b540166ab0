// LogTally - app/contacts.rs
//
// In-memory contact book driven by a line-oriented command loop.
// Command failures are values (`ContactError`) rendered as replies; the
// loop itself only fails on terminal I/O.

use std::fmt;
use std::io::{self, BufRead, Write};

/// One stored contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

/// Why a command could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// The command needs arguments and got none.
    MissingArguments,
    /// Expected exactly a name and a phone.
    NameAndPhone,
    /// No contact with this name.
    NotFound { name: String },
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArguments => f.write_str("Enter the argument for the command"),
            Self::NameAndPhone => f.write_str("Give me name and phone please."),
            Self::NotFound { .. } => f.write_str("This contact does not exist."),
        }
    }
}

impl std::error::Error for ContactError {}

/// Contacts in insertion order.
#[derive(Debug, Default)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.name == name)
    }

    /// Add a contact, replacing the phone if the name already exists.
    pub fn add(&mut self, args: &[&str]) -> Result<&'static str, ContactError> {
        let (name, phone) = name_and_phone(args)?;
        match self.find_mut(name) {
            Some(existing) => existing.phone = phone.to_string(),
            None => self.contacts.push(Contact {
                name: name.to_string(),
                phone: phone.to_string(),
            }),
        }
        Ok("Contact added.")
    }

    /// Replace the phone of an existing contact.
    pub fn change(&mut self, args: &[&str]) -> Result<&'static str, ContactError> {
        let (name, phone) = name_and_phone(args)?;
        let contact = self.find_mut(name).ok_or_else(|| ContactError::NotFound {
            name: name.to_string(),
        })?;
        contact.phone = phone.to_string();
        Ok("Contact updated.")
    }

    /// Look up the phone for `args[0]`.
    pub fn phone(&self, args: &[&str]) -> Result<&str, ContactError> {
        let name = args.first().ok_or(ContactError::MissingArguments)?;
        self.contacts
            .iter()
            .find(|c| c.name == *name)
            .map(|c| c.phone.as_str())
            .ok_or_else(|| ContactError::NotFound {
                name: name.to_string(),
            })
    }

    /// All contacts as `name: phone` lines.
    pub fn show_all(&self) -> String {
        if self.contacts.is_empty() {
            return "Contact list is empty.".to_string();
        }
        self.contacts
            .iter()
            .map(|c| format!("{}: {}", c.name, c.phone))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn name_and_phone<'a>(args: &[&'a str]) -> Result<(&'a str, &'a str), ContactError> {
    match args {
        [] => Err(ContactError::MissingArguments),
        [name, phone] => Ok((*name, *phone)),
        _ => Err(ContactError::NameAndPhone),
    }
}

/// Split raw input into a lower-cased command word and its arguments.
pub fn parse_input(input: &str) -> (String, Vec<&str>) {
    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or_default().to_lowercase();
    (command, parts.collect())
}

/// Outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep going.
    Continue(String),
    /// Print the text and stop the loop.
    Exit(String),
}

/// Execute one line of input against the book.
pub fn handle(book: &mut ContactBook, input: &str) -> Reply {
    let (command, args) = parse_input(input);
    let text = match command.as_str() {
        "close" | "exit" => return Reply::Exit("Good bye!".to_string()),
        "hello" => "How can I help you?".to_string(),
        "add" => render(book.add(&args)),
        "change" => render(book.change(&args)),
        "phone" => render(book.phone(&args)),
        "all" => book.show_all(),
        _ => "Invalid command.".to_string(),
    };
    tracing::debug!(command = %command, args = args.len(), contacts = book.len(), "Command handled");
    Reply::Continue(text)
}

fn render<T: fmt::Display>(result: Result<T, ContactError>) -> String {
    match result {
        Ok(text) => text.to_string(),
        Err(e) => e.to_string(),
    }
}

/// Run the interactive loop until `close`/`exit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    let mut book = ContactBook::new();
    writeln!(out, "Welcome to the assistant bot!")?;

    let mut lines = input.lines();
    loop {
        write!(out, "Enter a command: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            writeln!(out, "Good bye!")?;
            return Ok(());
        };

        match handle(&mut book, line?.trim()) {
            Reply::Continue(text) => writeln!(out, "{text}")?,
            Reply::Exit(text) => {
                writeln!(out, "{text}")?;
                return Ok(());
            }
        }
    }
}
