//! Message body renderers: plain wrapping or markdown via termimad

use termimad::{gray, MadSkin};

use crate::config::RenderMode;
use crate::display::wrap::wrap_text;

/// Turns a message body into the text written to the terminal
pub trait BodyRenderer {
    fn render(&self, text: &str) -> String;
}

/// Word-wrapped plain text
pub struct PlainRenderer {
    width: usize,
}

impl PlainRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl BodyRenderer for PlainRenderer {
    fn render(&self, text: &str) -> String {
        wrap_text(text, self.width)
    }
}

/// Markdown formatted with a termimad skin
pub struct MarkdownRenderer {
    skin: MadSkin,
    width: usize,
}

impl MarkdownRenderer {
    pub fn new(width: usize, colors: bool) -> Self {
        let skin = if colors {
            let mut skin = MadSkin::default();
            customize_skin(&mut skin);
            skin
        } else {
            MadSkin::no_style()
        };
        Self { skin, width }
    }
}

impl BodyRenderer for MarkdownRenderer {
    fn render(&self, text: &str) -> String {
        self.skin.text(text, Some(self.width)).to_string()
    }
}

/// Build the renderer for a display mode
pub fn renderer_for(mode: RenderMode, width: usize, colors: bool) -> Box<dyn BodyRenderer> {
    match mode {
        RenderMode::Plain => Box::new(PlainRenderer::new(width)),
        RenderMode::Markdown => Box::new(MarkdownRenderer::new(width, colors)),
    }
}

/// Customize termimad skin for chat bodies
fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    // Headers: Bold cyan/blue
    skin.headers[0].set_fg(Cyan);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Blue);
    skin.headers[1].add_attr(Attribute::Bold);
    skin.headers[2].set_fg(Blue);

    // Code blocks: Green with gray background
    skin.code_block.set_bg(gray(2));
    skin.code_block.set_fg(Green);

    skin.inline_code.set_fg(Yellow);

    skin.bold.add_attr(Attribute::Bold);
    skin.italic.add_attr(Attribute::Italic);

    // Lists: Cyan bullets
    skin.bullet.set_fg(Cyan);
}
