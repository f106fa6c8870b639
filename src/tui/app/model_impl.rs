//! `Model` trait implementation for the board TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `BoardApp`, handling initialisation, update dispatch, and view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::BoardApp;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for BoardApp {
    fn init() -> (Self, Option<Cmd>) {
        let (width, height) = crate::tui::get_initial_terminal_size();
        let mut model = Self::new(crate::tui::get_nickname(), crate::tui::get_max_length())
            .with_dimensions(width, height);

        if let Some(gateway) = crate::tui::get_gateway() {
            model = model.with_gateway(gateway);
        }

        // The first fetch starts when `AppMsg::Initialized` is handled.
        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            if let Some(mapped) = map_key_to_message(key_msg, self.focus) {
                return self.handle_message(&mapped);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&Self::render_help_overlay());
        }

        self.normalise_viewport(&self.render_main_view())
    }
}

impl BoardApp {
    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap and padded with spaces so shorter rows clear stale cells
    /// left by the previous frame.
    fn normalise_viewport(&self, output: &str) -> String {
        let safe_width = self.content_width();
        let height = self.height.max(1) as usize;

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0usize;

    for ch in line.chars().filter(|ch| !ch.is_control()) {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if char_width == 0 {
            output.push(ch);
            continue;
        }

        if visible_width.saturating_add(char_width) > width {
            break;
        }

        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    if visible_width < width {
        output.push_str(&" ".repeat(width - visible_width));
    }

    output
}
