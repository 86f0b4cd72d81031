//! UI utilities for the CLI

use colored::*;
use crossterm::{
    event::{self, Event, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode, size},
};
use std::io::{self, IsTerminal, Write};

use orator_coach::{CoachReport, Sentiment};
use orator_core::Result;

const BAR_WIDTH: usize = 20;

/// Display startup banner
pub fn display_banner() {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(67, terminal_width.saturating_sub(4));

    let top_border = format!("┌{}┐", "─".repeat(banner_width - 2));
    let bottom_border = format!("└{}┘", "─".repeat(banner_width - 2));
    let empty_line = format!("│{}│", " ".repeat(banner_width - 2));

    println!();
    println!("{}", top_border.blue());
    println!("{}", empty_line.blue());

    let title_line = format!(
        "│  {}{}│",
        "Orator - AI Speech Studio".blue().bold(),
        " ".repeat(banner_width.saturating_sub(29))
    );
    println!("{}", title_line);

    println!("{}", empty_line.blue());

    let feature_lines = vec![
        "🎤 AI-Powered Speechwriting & Coaching",
        "",
        "Features:",
        "• 📝 Speeches tailored to topic, style, and audience",
        "• 🎯 Instant coaching feedback on your drafts",
        "• 🎵 Text-to-speech audio for rehearsal",
        "• ⬆️  Command history navigation (↑/↓ arrows)",
        "",
        "v0.1.0 • Powered by Groq",
    ];

    for line in feature_lines {
        if line.is_empty() {
            println!("{}", empty_line.blue());
        } else {
            let content = if line.starts_with("v0.1.0") {
                format!(
                    "│  {}{}│",
                    line.dimmed(),
                    " ".repeat(banner_width.saturating_sub(line.len() + 4))
                )
            } else {
                format!(
                    "│  {}{}│",
                    line,
                    " ".repeat(banner_width.saturating_sub(line.len() + 4))
                )
            };
            println!("{}", content.blue());
        }
    }

    println!("{}", empty_line.blue());
    println!("{}", bottom_border.blue());
    println!();
    println!(
        "{}",
        "💡 Tip: Type a topic to generate a speech, 'coach' to analyze one, or 'help'".dimmed()
    );
    println!();
}

/// Handle input with command history navigation
pub async fn handle_input_with_history(history: &mut Vec<String>) -> Result<String> {
    // Check if stdin is a terminal (interactive) or piped
    if !io::stdin().is_terminal() {
        // Handle piped input - read from stdin directly
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim().to_string();
        if !input.is_empty() {
            history.push(input.clone());
        }
        return Ok(input);
    }

    enable_raw_mode()?;
    let mut input = String::new();
    let mut history_index: Option<usize> = None;
    let mut cursor_pos = 0;

    print!("{} ", "orator>".green().bold());
    io::stdout().flush()?;

    loop {
        if let Event::Key(key_event) = event::read()? {
            match key_event.code {
                KeyCode::Enter => {
                    disable_raw_mode()?;
                    println!();
                    if !input.is_empty() {
                        history.push(input.clone());
                    }
                    return Ok(input);
                }
                KeyCode::Char(c) => {
                    input.insert(cursor_pos, c);
                    cursor_pos += 1;
                    print!("\r{} {}", "orator>".green().bold(), input);
                    io::stdout().flush()?;
                }
                KeyCode::Backspace => {
                    if cursor_pos > 0 {
                        input.remove(cursor_pos - 1);
                        cursor_pos -= 1;
                        print!(
                            "\r{} {}  \r{} {}",
                            "orator>".green().bold(),
                            input,
                            "orator>".green().bold(),
                            input
                        );
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Up => {
                    if !history.is_empty() {
                        let new_index = match history_index {
                            None => history.len() - 1,
                            Some(idx) if idx > 0 => idx - 1,
                            Some(idx) => idx,
                        };
                        history_index = Some(new_index);
                        input = history[new_index].clone();
                        cursor_pos = input.len();
                        print!(
                            "\r{} {}  \r{} {}",
                            "orator>".green().bold(),
                            " ".repeat(50),
                            "orator>".green().bold(),
                            input
                        );
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Down => {
                    if let Some(idx) = history_index {
                        if idx < history.len() - 1 {
                            let new_index = idx + 1;
                            history_index = Some(new_index);
                            input = history[new_index].clone();
                        } else {
                            history_index = None;
                            input.clear();
                        }
                        cursor_pos = input.len();
                        print!(
                            "\r{} {}  \r{} {}",
                            "orator>".green().bold(),
                            " ".repeat(50),
                            "orator>".green().bold(),
                            input
                        );
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Esc => {
                    disable_raw_mode()?;
                    println!();
                    return Ok(String::new());
                }
                _ => {}
            }
        }
    }
}

/// Read multi-line text terminated by an empty line
pub fn read_multiline_input(prompt: &str) -> Result<String> {
    println!("{}", prompt.dimmed());

    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        if trimmed.is_empty() {
            break;
        }
        lines.push(trimmed.to_string());
    }

    Ok(lines.join("\n"))
}

/// Display help message
pub fn print_help() {
    println!("{}", "Available commands:".bold());
    println!(
        "  {} - Type a topic (or 'generate <topic>') to write a speech",
        "topic".green()
    );
    println!(
        "  {} - Paste a speech and get coaching feedback",
        "coach".green()
    );
    println!("  {} - Show this help message", "help".green());
    println!("  {} - Exit the application", "exit/quit".green());
    println!();
    println!("{}", "Examples:".bold());
    println!("  the future of renewable energy");
    println!("  generate why local news matters");
    println!("  coach");
}

/// Confirm a follow-up action with the user
pub async fn confirm(question: &str) -> Result<bool> {
    print!("{} {} [y/N]: ", "❓".cyan(), question);
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    let response = response.trim().to_lowercase();

    Ok(response == "y" || response == "yes")
}

/// Render a coach report with colored score bars
pub fn display_report(report: &CoachReport) {
    println!();
    println!("{}", "Sentiment".bold());
    let label = report.sentiment.label.to_string();
    let label = match report.sentiment.label {
        Sentiment::Positive => label.green().bold(),
        Sentiment::Negative => label.red().bold(),
        Sentiment::Neutral => label.blue().bold(),
    };
    println!(
        "  {} ({:.1}% confidence)",
        label, report.sentiment.confidence
    );

    println!("{}", "Structure".bold());
    println!(
        "  {} {}/100 (based on {} sentences)",
        render_bar(report.structure.score),
        report.structure.score,
        report.structure.sentence_count
    );

    println!("{}", "Complexity".bold());
    println!(
        "  {} {}/100 (language complexity: {})",
        render_bar(report.complexity_score),
        report.complexity_score,
        report.complexity_level
    );

    println!();
    println!("{}", "Improvement Suggestions".bold());
    for suggestion in &report.suggestions {
        println!("  {} {}", "•".yellow(), suggestion);
    }

    println!();
    println!("{}", "Speech Statistics".bold());
    println!("  Word count: {}", report.word_count);
    println!(
        "  Estimated delivery time: {} minutes",
        report.estimated_minutes
    );
    println!();
}

fn render_bar(score: u32) -> ColoredString {
    let filled = (score as usize * BAR_WIDTH / 100).min(BAR_WIDTH);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));

    if score >= 70 {
        bar.green()
    } else if score >= 40 {
        bar.yellow()
    } else {
        bar.red()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bar_fills_proportionally() {
        let full = render_bar(100);
        assert_eq!(full.chars().filter(|&c| c == '█').count(), BAR_WIDTH);

        let empty = render_bar(0);
        assert_eq!(empty.chars().filter(|&c| c == '░').count(), BAR_WIDTH);

        let half = render_bar(50);
        assert_eq!(half.chars().filter(|&c| c == '█').count(), BAR_WIDTH / 2);
    }
}
