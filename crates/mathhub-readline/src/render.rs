//! Colored terminal rendering of dashboard state.

use colored::{ColoredString, Colorize};
use mathhub_application::FetchState;
use mathhub_core::explanation::Explanation;
use mathhub_core::history::RecentTopics;
use mathhub_core::settings::Settings;
use mathhub_core::syllabus::Syllabus;
use mathhub_core::theme::ThemePalette;

/// Parses a `#rrggbb` token into its channels; white when malformed.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    fn channels(hex: &str) -> Option<(u8, u8, u8)> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some((r, g, b))
    }
    channels(hex).unwrap_or((255, 255, 255))
}

fn paint(text: &str, hex: &str) -> ColoredString {
    let (r, g, b) = hex_to_rgb(hex);
    text.truecolor(r, g, b)
}

pub fn banner(name: &str, palette: &ThemePalette) {
    println!();
    println!("{}", paint("=== Math Formula Hub ===", palette.start).bold());
    println!(
        "{}",
        paint(&format!("Welcome, {name}! Ask about any formula."), palette.mid)
    );
    println!(
        "{}",
        "Type a topic to get an explanation, or /help for commands.".bright_black()
    );
    println!();
}

pub fn settings(settings: &Settings, palette: &ThemePalette) {
    println!("{}", "Current settings:".bold());
    println!("  grade:    {}", settings.grade_level);
    println!("  depth:    {}", settings.explanation_depth);
    println!(
        "  theme:    {} ({} {} {})",
        settings.theme,
        paint(palette.start, palette.start),
        paint(palette.mid, palette.mid),
        paint(palette.end, palette.end),
    );
    println!("  thinking: {}", on_off(settings.enable_thinking));
    println!("  voice:    {}", on_off(settings.enable_voice));
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// The full formula card.
pub fn explanation(explanation: &Explanation, settings: &Settings) {
    let palette = settings.theme.palette();

    println!();
    println!(
        "{}",
        paint(&format!("== {} ==", explanation.formula_name), palette.start).bold()
    );
    println!("{}", paint(&explanation.exact_formula, palette.mid).bold());
    println!();
    println!("{} {}", "Intuition:".bold(), explanation.intuitive_meaning);
    println!("{} {}", "When to use:".bold(), explanation.when_to_use);
    println!(
        "{} {}",
        "When not to use:".bold(),
        explanation.when_not_to_use
    );
    println!();
    println!("{}", "Solved example:".bold());
    for (index, step) in explanation.solved_example.steps.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }
    println!(
        "  {} {}",
        paint("=>", palette.end).bold(),
        explanation.solved_example.result
    );
    println!();
    println!(
        "{} {}",
        "Trap question:".bold(),
        explanation.trap_question.question
    );
    println!("  {}", explanation.trap_question.explanation.bright_black());
    println!(
        "{} {}",
        "Common mistake:".bold(),
        explanation.common_mistake.yellow()
    );
    println!(
        "{} {}",
        "Memory trick:".bold(),
        explanation.memory_trick
    );
    if !explanation.related_formulas.is_empty() {
        println!(
            "{} {}",
            "Related:".bold(),
            explanation.related_formulas.join(", ")
        );
    }
    if settings.enable_voice {
        println!(
            "{}",
            "(voice mode: read the intuition aloud for better recall)".bright_black()
        );
    }
    println!();
}

pub fn syllabus_state(state: &FetchState<Syllabus>) {
    match state {
        FetchState::Idle => println!("{}", "Syllabus not loaded yet.".bright_black()),
        FetchState::Loading => println!("{}", "Loading syllabus...".bright_black()),
        FetchState::Ready(syllabus) => self::syllabus(syllabus),
        FetchState::Failed(message) => println!("{}", message.red()),
    }
}

pub fn syllabus(syllabus: &Syllabus) {
    println!("{}", "Syllabus:".bold());
    for category in &syllabus.categories {
        println!("  {}", category.name.bright_cyan().bold());
        for formula in &category.formulas {
            println!("    - {formula}");
        }
    }
}

pub fn history(history: &RecentTopics) {
    if history.is_empty() {
        println!("{}", "No topics asked yet.".bright_black());
        return;
    }
    println!("{}", "Recent topics (newest first):".bold());
    for (index, topic) in history.iter().enumerate() {
        println!("  {}. {topic}", index + 1);
    }
}

pub fn help() {
    println!("{}", "Commands:".bold());
    println!("  <topic>                        explain a formula or concept");
    println!("  /settings                      show the current settings");
    println!("  /grade <7..12>                 switch grade (re-fetches the syllabus)");
    println!("  /depth <simple|comprehensive>  explanation depth");
    println!("  /theme <indigo|emerald|amber|cyan>");
    println!("  /thinking <on|off>             deep reasoning for explanations");
    println!("  /voice <on|off>                voice hint on formula cards");
    println!("  /syllabus                      show the syllabus for the current grade");
    println!("  /history                       recent topics");
    println!("  quit | exit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_parses_palette_tokens() {
        assert_eq!(hex_to_rgb("#6366f1"), (0x63, 0x66, 0xf1));
        assert_eq!(hex_to_rgb("#10b981"), (0x10, 0xb9, 0x81));
        assert_eq!(hex_to_rgb("#000000"), (0, 0, 0));
    }

    #[test]
    fn test_hex_to_rgb_malformed_falls_back_to_white() {
        assert_eq!(hex_to_rgb("6366f1"), (255, 255, 255));
        assert_eq!(hex_to_rgb("#xyzxyz"), (255, 255, 255));
        assert_eq!(hex_to_rgb("#fff"), (255, 255, 255));
    }
}
