// src/ports/terminal.rs
use crate::domain::Note;
use crate::state::Page;
use crate::util::text::{first_line, truncate};
use tracing::instrument;

const PREVIEW_CHARS: usize = 60;

#[derive(Debug, Clone, Copy)]
struct Palette {
    heading: &'static str,
    muted: &'static str,
    error: &'static str,
}

const DARK: Palette = Palette {
    heading: "\x1b[1;97m",
    muted: "\x1b[90m",
    error: "\x1b[1;91m",
};

const LIGHT: Palette = Palette {
    heading: "\x1b[1;30m",
    muted: "\x1b[37m",
    error: "\x1b[1;31m",
};

const RESET: &str = "\x1b[0m";

/// Renders client state as text for the terminal
#[derive(Debug)]
pub struct TerminalPresenter {
    palette: Option<Palette>,
}

impl TerminalPresenter {
    /// Colored output with the palette picked by the dark-mode flag
    pub fn new(dark: bool) -> Self {
        Self {
            palette: Some(if dark { DARK } else { LIGHT }),
        }
    }

    /// Output without escape sequences
    pub fn plain() -> Self {
        Self { palette: None }
    }

    fn paint(&self, pick: fn(&Palette) -> &'static str, text: &str) -> String {
        match &self.palette {
            Some(palette) => format!("{}{}{}", pick(palette), text, RESET),
            None => text.to_string(),
        }
    }

    pub fn render_page(&self, page: Page) -> String {
        match page {
            Page::Intro => format!(
                "{}\n\nKeep short notes in a remote notes API.\n\
                 Run `notepad list` to see your notes or `notepad create` to add one.",
                self.paint(|p| p.heading, "notepad")
            ),
            Page::Notes => self.paint(|p| p.heading, "Notes"),
        }
    }

    #[instrument(level = "trace", skip(self, notes), fields(count = notes.len()))]
    pub fn render_list(&self, notes: &[Note]) -> String {
        if notes.is_empty() {
            return self.paint(|p| p.muted, "No notes found");
        }
        notes
            .iter()
            .map(|note| {
                format!(
                    "{:>6}  {}  {}",
                    note.id,
                    self.paint(|p| p.heading, &note.title),
                    self.paint(|p| p.muted, &truncate(first_line(&note.content), PREVIEW_CHARS)),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_note(&self, note: &Note) -> String {
        format!(
            "{} {}\n{}\n\n{}",
            self.paint(|p| p.heading, &note.title),
            self.paint(|p| p.muted, &format!("#{}", note.id)),
            self.paint(|p| p.muted, &note.created_at),
            note.content
        )
    }

    pub fn render_error(&self, message: &str) -> String {
        self.paint(|p| p.error, &format!("Error: {message}"))
    }
}
