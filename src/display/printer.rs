//! Thread printer
//!
//! Writes a message list oldest-first with a colored role header per message,
//! the rendered body, and a numbered citation list when the body had any.

use std::io::{self, Write};

use termimad::crossterm::style::{Color, Stylize};

use crate::config::Display;
use crate::display::formatter::{renderer_for, BodyRenderer};
use crate::error::{Result, ThreadPrintError};
use crate::footnotes::{footnote, Citation};
use crate::models::{Message, MessageList, Role};

const BANNER_TITLE: &str = "Thread Messages";

/// Header color and icon for a message author
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RoleStyle {
    color: Color,
    icon: &'static str,
}

const USER_STYLE: RoleStyle = RoleStyle {
    color: Color::Blue,
    icon: "👤",
};

const ASSISTANT_STYLE: RoleStyle = RoleStyle {
    color: Color::Green,
    icon: "🤖",
};

impl RoleStyle {
    /// Users get their own style, every other role shares the assistant's
    fn for_role(role: &Role) -> Self {
        match role {
            Role::User => USER_STYLE,
            Role::Assistant | Role::Other(_) => ASSISTANT_STYLE,
        }
    }
}

/// Prints chat threads to a terminal
pub struct ThreadPrinter {
    renderer: Box<dyn BodyRenderer>,
    colors: bool,
    separator_width: usize,
    show_banner: bool,
}

impl ThreadPrinter {
    pub fn new(display: &Display, colors: bool) -> Self {
        Self {
            renderer: renderer_for(display.mode, display.width, colors),
            colors,
            separator_width: display.separator_width,
            show_banner: display.show_banner,
        }
    }

    /// Use a custom body renderer
    #[cfg(test)]
    pub fn with_renderer(mut self, renderer: Box<dyn BodyRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Print a thread to stdout
    pub fn print_thread(&self, messages: &MessageList) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_thread(messages, &mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write a thread, oldest message first
    ///
    /// Stops at the first message without text content. Everything
    /// written before that message stays written.
    pub fn write_thread<W: Write>(&self, messages: &MessageList, out: &mut W) -> Result<()> {
        if self.show_banner {
            self.write_banner(out)?;
        }

        for (index, message) in messages.chronological() {
            self.write_message(index, message, out)?;
        }

        Ok(())
    }

    fn write_banner<W: Write>(&self, out: &mut W) -> Result<()> {
        let rule = "=".repeat(self.separator_width);
        let title = format!("{:^width$}", BANNER_TITLE, width = self.separator_width);

        writeln!(out, "{}", self.paint(&rule, Color::Green))?;
        writeln!(out, "{}", self.paint(&title, Color::Green))?;
        writeln!(out, "{}", self.paint(&rule, Color::Green))?;
        Ok(())
    }

    fn write_message<W: Write>(&self, index: usize, message: &Message, out: &mut W) -> Result<()> {
        let style = RoleStyle::for_role(&message.role);

        writeln!(out)?;
        writeln!(
            out,
            "{}",
            self.paint(
                &format!("{} {}", style.icon, message.role.as_str().to_uppercase()),
                style.color
            )
        )?;
        writeln!(
            out,
            "{}",
            self.paint(&"-".repeat(self.separator_width), style.color)
        )?;

        let text = message
            .text()
            .ok_or_else(|| ThreadPrintError::MissingContent {
                index,
                id: message.id.clone(),
            })?;

        let footnoted = footnote(text);
        tracing::debug!(
            index,
            role = message.role.as_str(),
            annotations = text.annotations.len(),
            citations = footnoted.citations.len(),
            "printing message"
        );
        if footnoted.skipped > 0 {
            tracing::warn!(
                index,
                skipped = footnoted.skipped,
                "annotations without start/end offsets left in place"
            );
        }

        let mut body = self.renderer.render(&footnoted.text);
        if !body.ends_with('\n') {
            body.push('\n');
        }
        out.write_all(body.as_bytes())?;

        if !footnoted.citations.is_empty() {
            self.write_citations(&footnoted.citations, out)?;
        }

        writeln!(out)?;
        Ok(())
    }

    fn write_citations<W: Write>(&self, citations: &[Citation], out: &mut W) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.paint("Citations:", Color::Yellow))?;
        for citation in citations {
            writeln!(out, "{}. {}", citation.index, citation.label)?;
        }
        Ok(())
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.colors {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}
