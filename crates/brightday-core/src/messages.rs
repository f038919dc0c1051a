//! Static encouragement content and random selection.
//!
//! Four immutable tables: cheer messages for the "make me feel better"
//! button, daily quotes, and the affirmation/consolation lines shown
//! after logging a day. Selection is a uniform draw over the table.

use rand::seq::SliceRandom;

use crate::entry::Status;

pub const CHEER_MESSAGES: &[&str] = &[
    "✨ Main character energy.",
    "💪 You survived 100% of bad days.",
    "🌟 You're stronger than this moment.",
    "🎯 You're doing amazing, sweetie.",
    "🌈 Plot twist: you're the hero.",
    "💫 Your vibe attracts your tribe.",
    "🦋 Growth looks good on you.",
    "🌸 You're blooming beautifully.",
    "⚡ Energy check: legendary.",
    "🎨 You're a masterpiece in progress.",
    "🌙 Even the moon has phases.",
    "🔥 You're on fire (in a good way).",
    "🎪 Life's a circus, you're the star.",
    "🌻 Sunflowers grow through dirt too.",
    "🎭 Your comeback will be epic.",
];

pub const QUOTES: &[&str] = &[
    "💜 You're doing better than you think.",
    "🌱 Healing isn't linear.",
    "✨ You matter.",
    "🌅 Better days are coming.",
    "🌟 One day at a time.",
    "💪 You're stronger than you know.",
    "🌈 This too shall pass.",
    "🦋 Progress, not perfection.",
    "🌸 Be gentle with yourself.",
    "🌙 Rest is part of the journey.",
    "🎯 Small steps count.",
    "🌻 You're growing every day.",
    "⭐ Believe in your journey.",
    "🌺 You're exactly where you need to be.",
    "🎨 Your story is still being written.",
    "🔥 You've got this.",
    "🌊 Ride the wave, don't fight it.",
    "🎭 Every day is a fresh start.",
    "💝 You deserve kindness, especially from yourself.",
];

pub const SUCCESS_MESSAGES: &[&str] = &[
    "🎉 Proud of you.",
    "💪 You're building momentum.",
    "✨ Tiny win. Big impact.",
    "🌟 That's the spirit!",
    "🔥 You're on a roll!",
    "💫 Keep shining!",
    "🎯 Nailed it!",
    "🌈 Beautiful choice!",
    "⭐ You're amazing!",
    "🦋 Growth in action!",
];

pub const SLIP_MESSAGES: &[&str] = &[
    "🌅 It's okay. Tomorrow is fresh.",
    "💜 One moment doesn't define you.",
    "🌸 Be gentle with yourself.",
    "🌱 Every day is a new chance.",
    "💫 You're still worthy.",
    "🌈 Progress isn't always linear.",
    "🦋 Setbacks are part of growth.",
    "💝 Treat yourself with compassion.",
    "🌻 You're learning and growing.",
    "✨ Tomorrow is a blank page.",
];

fn pick(table: &'static [&'static str]) -> &'static str {
    table
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
}

/// Random cheer for the "make me feel better" action.
pub fn random_cheer() -> &'static str {
    pick(CHEER_MESSAGES)
}

/// Random quote for the daily header.
pub fn random_quote() -> &'static str {
    pick(QUOTES)
}

/// Random affirmation or consolation matching the logged status.
pub fn status_message(status: Status) -> &'static str {
    match status {
        Status::Success => pick(SUCCESS_MESSAGES),
        Status::Slip => pick(SLIP_MESSAGES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_populated() {
        assert_eq!(CHEER_MESSAGES.len(), 15);
        assert_eq!(QUOTES.len(), 19);
        assert_eq!(SUCCESS_MESSAGES.len(), 10);
        assert_eq!(SLIP_MESSAGES.len(), 10);
    }

    #[test]
    fn draws_come_from_the_right_table() {
        for _ in 0..50 {
            assert!(CHEER_MESSAGES.contains(&random_cheer()));
            assert!(QUOTES.contains(&random_quote()));
            assert!(SUCCESS_MESSAGES.contains(&status_message(Status::Success)));
            assert!(SLIP_MESSAGES.contains(&status_message(Status::Slip)));
        }
    }
}
