//! Terminal output utilities.
//!
//! Box drawing, the strength meter, and level colors.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use safepass::{StrengthLevel, StrengthResult};

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let display_len = console_width(content);
    let padding = INNER_WIDTH.saturating_sub(display_len);
    println!("│ {}{} │", content, " ".repeat(padding));
}

/// Print content across as many box lines as it needs.
pub fn box_wrapped(content: &str) {
    for line in wrap(content, INNER_WIDTH) {
        box_line(&line);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Split into chunks of at most `width` characters.
fn wrap(s: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength
// ============================================================================

pub fn level_color(level: StrengthLevel) -> Color {
    match level {
        StrengthLevel::Weak => Color::Red,
        StrengthLevel::Medium => Color::Yellow,
        StrengthLevel::Strong => Color::Green,
        StrengthLevel::VeryStrong => Color::Cyan,
    }
}

/// Cells of a `width`-wide meter covered by `score` percent.
fn meter_fill(score: u8, width: usize) -> usize {
    (usize::from(score.min(100)) * width) / 100
}

/// Render a strength meter inside a box with centered text (3 lines).
///
/// The bar fills `score` percent of the box and takes the level's color.
pub fn strength_meter(result: &StrengthResult) {
    let inner_width = BOX_WIDTH - 2;
    let filled = meter_fill(result.score, inner_width);
    let color = level_color(result.level);

    let text = format!("Strength: {} ({}/100)", result.label, result.score);
    let text_chars: Vec<char> = text.chars().collect();
    let padding = inner_width.saturating_sub(text_chars.len()) / 2;

    let mut content: Vec<char> = vec![' '; inner_width];
    for (i, ch) in text_chars.iter().enumerate() {
        if padding + i < inner_width {
            content[padding + i] = *ch;
        }
    }

    let filled_str: String = content[..filled].iter().collect();
    let unfilled_str: String = content[filled..].iter().collect();

    println!("┌{}┐", "─".repeat(inner_width));
    println!(
        "│{}{}│",
        filled_str.as_str().with(color).reverse(),
        unfilled_str
    );
    println!("└{}┘", "─".repeat(inner_width));
    flush();
}

/// One-line strength summary, colored by level.
pub fn strength_line(result: &StrengthResult) -> String {
    format!(
        "Strength: {} ({}/100)",
        result.label.with(level_color(result.level)),
        result.score
    )
}
