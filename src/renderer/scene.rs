//! Backend-neutral draw commands

/// A single draw call; coordinates in canvas pixels, colors as CSS strings
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: &'static str,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        /// Font size in pixels
        size: f32,
        color: &'static str,
    },
}

/// One frame's worth of draw commands, in paint order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCmd>,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &'static str) {
        self.commands.push(DrawCmd::FillRect { x, y, w, h, color });
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        size: f32,
        color: &'static str,
    ) {
        self.commands.push(DrawCmd::Text {
            text: text.into(),
            x,
            y,
            size,
            color,
        });
    }
}

#[cfg(test)]
impl Scene {
    /// Rectangles painted with `color`
    pub fn rects_with_color(&self, color: &str) -> impl Iterator<Item = &DrawCmd> {
        self.commands
            .iter()
            .filter(move |cmd| matches!(cmd, DrawCmd::FillRect { color: c, .. } if *c == color))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            DrawCmd::FillRect { .. } => None,
        })
    }
}
