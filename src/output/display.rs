//! Display functions for command replies

use crate::commands::{Reply, Tone};
use colored::{ColoredString, Colorize};

/// Format a reply for the terminal
///
/// The title gets a rule underneath and the body is tinted by tone.
#[must_use]
pub fn format_reply(reply: &Reply) -> String {
    let mut out = String::new();
    if let Some(title) = &reply.title {
        out.push_str(&format!("{}\n", title.bright_cyan().bold()));
        out.push_str(&format!("{}\n", "─".repeat(40).cyan()));
    }
    out.push_str(&tint(&reply.text, reply.tone).to_string());
    out
}

/// Print a reply to stdout
pub fn print_reply(reply: &Reply) {
    println!("{}\n", format_reply(reply));
}

fn tint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Info => text.normal(),
        Tone::Success => text.green().bold(),
        Tone::Failure => text.yellow(),
        Tone::Error => text.red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_reply_keeps_text() {
        colored::control::set_override(false);
        let reply = Reply::info("hello");
        assert_eq!(format_reply(&reply), "hello");
    }

    #[test]
    fn title_gets_a_rule() {
        colored::control::set_override(false);
        let reply = Reply::error("oops").titled("Wordy");
        let text = format_reply(&reply);
        assert!(text.starts_with("Wordy\n─"));
        assert!(text.ends_with("\noops"));
    }
}
