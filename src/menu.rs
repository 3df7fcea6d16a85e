use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::config::Settings;
use crate::errors::{CatalogError, Result};
use crate::storage::VideoStore;
use crate::storage::models::NewVideo;

/// One of the five main-menu selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Add,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim() {
            "1" => Some(MenuChoice::List),
            "2" => Some(MenuChoice::Add),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MenuOptions {
    pub rule_width: usize,
    pub pause: Duration,
    pub clear_screen: bool,
}

impl From<&Settings> for MenuOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            rule_width: settings.rule_width,
            pause: Duration::from_secs(settings.pause_secs),
            clear_screen: settings.clear_screen,
        }
    }
}

/// Runs the interactive menu until the user picks Exit or input ends.
/// Duplicate-title and unknown-id failures are reported and the loop
/// continues; storage and I/O failures propagate out.
pub fn run<S, R, W>(store: &S, input: R, out: W, opts: MenuOptions) -> Result<()>
where
    S: VideoStore,
    R: BufRead,
    W: Write,
{
    Menu { store, input, out, opts }.run()
}

struct Menu<'a, S, R, W> {
    store: &'a S,
    input: R,
    out: W,
    opts: MenuOptions,
}

impl<S, R, W> Menu<'_, S, R, W>
where
    S: VideoStore,
    R: BufRead,
    W: Write,
{
    fn run(mut self) -> Result<()> {
        loop {
            self.pace();
            self.clear()?;
            self.print_main_menu()?;
            let Some(line) = self.prompt("Enter option: ")? else {
                break;
            };
            match MenuChoice::parse(&line) {
                Some(MenuChoice::List) => {
                    self.show_catalog()?;
                    if !self.wait_for_enter()? {
                        break;
                    }
                }
                Some(MenuChoice::Add) => {
                    if !self.add_video()? {
                        break;
                    }
                }
                Some(MenuChoice::Update) => {
                    if !self.update_video()? {
                        break;
                    }
                }
                Some(MenuChoice::Delete) => {
                    if !self.delete_video()? {
                        break;
                    }
                }
                Some(MenuChoice::Exit) => {
                    writeln!(self.out, "Closing the catalog. Bye.")?;
                    break;
                }
                None => {
                    writeln!(self.out, "Unrecognized option \"{}\".", line)?;
                }
            }
        }
        Ok(())
    }

    // --- Handlers ---
    // Each returns Ok(false) when input ran out mid-dialog, which ends
    // the session cleanly.

    fn add_video(&mut self) -> Result<bool> {
        self.header("ADD VIDEO")?;
        let Some(title) = self.prompt_title("Enter video title: ")? else {
            return Ok(false);
        };
        let Some(duration) = self.prompt_i64("Enter duration (minutes): ", "Duration")? else {
            return Ok(false);
        };
        match self.store.insert(NewVideo::new(title, duration)) {
            Ok(v) => writeln!(self.out, "Added video #{} \"{}\".", v.id, v.title)?,
            Err(e @ CatalogError::DuplicateTitle(_)) => {
                writeln!(self.out, "{}. Nothing added.", e)?;
            }
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    fn update_video(&mut self) -> Result<bool> {
        self.show_catalog()?;
        self.header("UPDATE VIDEO")?;
        let Some(id) = self.prompt_i64("Enter video id: ", "Id")? else {
            return Ok(false);
        };
        // Report a bad id before asking for the new values.
        match self.store.get_by_id(id) {
            Ok(_) => {}
            Err(e @ CatalogError::NotFound(_)) => {
                writeln!(self.out, "{}. Nothing updated.", e)?;
                return Ok(true);
            }
            Err(e) => return Err(e),
        }
        let Some(title) = self.prompt_title("Enter new title: ")? else {
            return Ok(false);
        };
        let Some(duration) = self.prompt_i64("Enter new duration (minutes): ", "Duration")? else {
            return Ok(false);
        };
        match self.store.update(id, NewVideo::new(title, duration)) {
            Ok(v) => writeln!(self.out, "Updated video #{}.", v.id)?,
            Err(e @ (CatalogError::DuplicateTitle(_) | CatalogError::NotFound(_))) => {
                writeln!(self.out, "{}. Nothing updated.", e)?;
            }
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    fn delete_video(&mut self) -> Result<bool> {
        self.show_catalog()?;
        self.header("DELETE VIDEO")?;
        let Some(id) = self.prompt_i64("Enter video id: ", "Id")? else {
            return Ok(false);
        };
        match self.store.delete(id) {
            Ok(()) => writeln!(self.out, "Deleted video #{}.", id)?,
            Err(e @ CatalogError::NotFound(_)) => {
                writeln!(self.out, "{}. Nothing deleted.", e)?;
            }
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    // --- Rendering ---

    fn print_main_menu(&mut self) -> Result<()> {
        self.header("Video Catalog Manager")?;
        writeln!(self.out, "[1] List all videos")?;
        writeln!(self.out, "[2] Add a video")?;
        writeln!(self.out, "[3] Update a video")?;
        writeln!(self.out, "[4] Delete a video")?;
        writeln!(self.out, "[5] Exit")?;
        self.rule()?;
        Ok(())
    }

    fn show_catalog(&mut self) -> Result<()> {
        self.header("VIDEO CATALOG")?;
        let videos = self.store.list_all()?;
        if videos.is_empty() {
            writeln!(self.out, "No videos in the catalog yet.")?;
        } else {
            writeln!(
                self.out,
                "{:<6} {:<32} {:>13}",
                "ID", "Title", "Duration(min)"
            )?;
            self.rule()?;
            for v in &videos {
                writeln!(self.out, "{:<6} {:<32} {:>13}", v.id, v.title, v.duration)?;
            }
        }
        self.rule()?;
        Ok(())
    }

    fn header(&mut self, title: &str) -> Result<()> {
        self.rule()?;
        writeln!(self.out, "\t{}", title)?;
        self.rule()?;
        Ok(())
    }

    fn rule(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "-".repeat(self.opts.rule_width))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.opts.clear_screen {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn pace(&self) {
        if !self.opts.pause.is_zero() {
            thread::sleep(self.opts.pause);
        }
    }

    // --- Input ---

    /// Reads one trimmed line. None means stdin is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        self.read_line()
    }

    fn prompt_title(&mut self, label: &str) -> Result<Option<String>> {
        loop {
            match self.prompt(label)? {
                None => return Ok(None),
                Some(s) if s.is_empty() => {
                    writeln!(self.out, "Title cannot be empty.")?;
                }
                Some(s) => return Ok(Some(s)),
            }
        }
    }

    fn prompt_i64(&mut self, label: &str, what: &str) -> Result<Option<i64>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match line.parse::<i64>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.out, "{} must be a whole number.", what)?,
            }
        }
    }

    fn wait_for_enter(&mut self) -> Result<bool> {
        Ok(self.prompt("Press Enter to continue ")?.is_some())
    }
}
