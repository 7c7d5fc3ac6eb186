//! Log formatting and output with ANSI colors and text wrapping
//!
//! Handles:
//! - Colorized tag and level rendering
//! - Text wrapping at word boundaries
//! - Output on stderr (stdout carries the JSON report)

use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stderr, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 10;
const LOG_TYPE_WIDTH: usize = 8;

/// Maximum line length before wrapping
const MAX_LINE_LENGTH: usize = 145;

/// Format and output a log message
pub fn format_and_log(tag: &LogTag, level: LogLevel, message: &str, use_colors: bool) {
    let time = Local::now().format("%H:%M:%S").to_string();

    let plain_prefix = format!(
        "{} [{:<tag_w$}] [{:<lvl_w$}] ",
        time,
        tag.to_plain_string(),
        level.as_str(),
        tag_w = TAG_WIDTH,
        lvl_w = LOG_TYPE_WIDTH
    );

    let prefix = if use_colors {
        format!(
            "{} [{}] [{}] ",
            time.dimmed(),
            format_tag(tag),
            format_log_type(level)
        )
    } else {
        plain_prefix.clone()
    };

    let available_space = MAX_LINE_LENGTH.saturating_sub(plain_prefix.len()).max(50);
    let chunks = wrap_text(message, available_space);
    let continuation = " ".repeat(plain_prefix.len());

    let mut err = stderr().lock();
    for (i, chunk) in chunks.iter().enumerate() {
        let line = if i == 0 {
            format!("{}{}", prefix, chunk)
        } else {
            format!("{}{}", continuation, chunk)
        };
        // Nothing sensible to do when stderr is gone
        let _ = writeln!(err, "{}", line);
    }
    let _ = err.flush();
}

/// Format a tag with appropriate color
fn format_tag(tag: &LogTag) -> ColoredString {
    let label = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => label.bright_yellow().bold(),
        LogTag::Config => label.bright_white().bold(),
        LogTag::Scanner => label.bright_cyan().bold(),
        LogTag::GoPlus => label.bright_green().bold(),
        LogTag::Honeypot => label.bright_magenta().bold(),
        LogTag::QuickIntel => label.bright_blue().bold(),
        LogTag::Merge => label.bright_red().bold(),
    }
}

/// Format log level with appropriate color
fn format_log_type(level: LogLevel) -> ColoredString {
    let label = format!("{:<width$}", level.as_str(), width = LOG_TYPE_WIDTH);
    match level {
        LogLevel::Error => label.bright_red().bold(),
        LogLevel::Warning => label.bright_yellow().bold(),
        LogLevel::Debug | LogLevel::Verbose => label.dimmed(),
        LogLevel::Info => label.white().bold(),
    }
}

/// Wrap text at word boundaries, respecting existing newlines
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut result = Vec::new();

    for line in text.split('\n') {
        if line.chars().count() <= max_width {
            result.push(line.to_string());
            continue;
        }

        let mut current_line = String::new();
        for word in line.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current_line.chars().count();

            if word_len > max_width {
                if !current_line.is_empty() {
                    result.push(std::mem::take(&mut current_line));
                }
                result.extend(break_long_word(word, max_width));
            } else if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_len + word_len + 1 <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                result.push(std::mem::replace(&mut current_line, word.to_string()));
            }
        }

        if !current_line.is_empty() {
            result.push(current_line);
        }
    }

    if result.is_empty() {
        result.push(String::new());
    }

    result
}

/// Break a very long word (URLs, raw bodies) into fixed-width chunks
fn break_long_word(word: &str, max_width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(max_width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_untouched() {
        assert_eq!(wrap_text("scan finished", 50), vec!["scan finished"]);
    }

    #[test]
    fn test_wraps_at_word_boundary() {
        let wrapped = wrap_text("alpha beta gamma delta", 11);
        assert_eq!(wrapped, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn test_long_word_is_split() {
        let wrapped = wrap_text("0x1234567890abcdef", 8);
        assert_eq!(wrapped, vec!["0x123456", "7890abcd", "ef"]);
    }

    #[test]
    fn test_keeps_explicit_newlines() {
        let wrapped = wrap_text("first\nsecond", 50);
        assert_eq!(wrapped, vec!["first", "second"]);
    }
}
