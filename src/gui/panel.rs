use kiss3d::text::Font;
use kiss3d::window::Window;
use nalgebra::{Point2, Point3};

use crate::model::InfoPanel;

const TEXT_SIZE: f32 = 60.0;
const TEXT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const HOVER_COLOR: [f32; 3] = [1.0, 0.85, 0.3];
// Longest line before the description wraps, in characters
const WRAP_WIDTH: usize = 48;

/// The on-screen description of whatever is focused. Hidden when empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextPanel {
    content: Option<(String, String)>,
}

impl TextPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The panel's text, title first, wrapped to a readable width.
    pub fn text(&self) -> Option<String> {
        let (name, description) = self.content.as_ref()?;
        let mut text = name.clone();
        for line in wrap(description, WRAP_WIDTH) {
            text.push('\n');
            text.push_str(&line);
        }
        Some(text)
    }

    pub fn draw(&self, window: &mut Window) {
        if let Some(text) = self.text() {
            window.draw_text(
                &text,
                &Point2::origin(),
                TEXT_SIZE,
                &Font::default(),
                &Point3::from(TEXT_COLOR),
            );
        }
    }
}

impl InfoPanel for TextPanel {
    fn show(&mut self, name: &str, text: &str) {
        self.content = Some((name.to_owned(), text.to_owned()));
    }

    fn clear(&mut self) {
        self.content = None;
    }
}

/// A label next to the pointer naming what's under it. This is the only
/// "clickable" cue we can give, since kiss3d doesn't let us change the cursor.
pub fn draw_hover_label(window: &mut Window, name: &str, cursor: Point2<f32>) {
    // Text coordinates are in physical pixels, cursor ones aren't
    let scale = window.scale_factor() as f32;
    let offset = Point2::new(cursor.x * scale + 30.0, cursor.y * scale);
    window.draw_text(
        name,
        &offset,
        TEXT_SIZE,
        &Font::default(),
        &Point3::from(HOVER_COLOR),
    );
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = vec![];
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
