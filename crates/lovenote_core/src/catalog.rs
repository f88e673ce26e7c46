//! Built-in app content.
//!
//! Static tables shipped with the app: quotes for the home card, the photo
//! memories, and the messages seeded when the thread mounts.

use crate::model::memory::Memory;
use crate::model::message::Direction;

/// Quotes cycled by the home screen's love-note card.
pub const LOVE_QUOTES: [&str; 5] = [
    "Every moment with you feels like a beautiful dream come true.",
    "You are my sunshine on the cloudiest days.",
    "In your eyes, I found my home.",
    "Love is not just a feeling, it's you.",
    "You make my heart skip a beat every single day.",
];

/// One message seeded at thread mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedMessage {
    pub direction: Direction,
    pub text: &'static str,
    /// How long before mount the message was written.
    pub age_ms: u64,
}

pub const SEED_MESSAGES: [SeedMessage; 3] = [
    SeedMessage {
        direction: Direction::Received,
        text: "Good morning, my love! Hope your day is as beautiful as you are 💕",
        age_ms: 3_600_000,
    },
    SeedMessage {
        direction: Direction::Sent,
        text: "You always know how to make me smile! I love you so much ❤️",
        age_ms: 3_000_000,
    },
    SeedMessage {
        direction: Direction::Received,
        text: "Can't wait to see you tonight! I have a surprise for you 🎁",
        age_ms: 1_800_000,
    },
];

const PHOTO_BASE: &str = "https://images.pexels.com/photos";
const PHOTO_QUERY: &str = "auto=compress&cs=tinysrgb&w=400";

fn photo_url(photo_id: u32) -> String {
    format!("{PHOTO_BASE}/{photo_id}/pexels-photo-{photo_id}.jpeg?{PHOTO_QUERY}")
}

/// Photo memories shown in the gallery grid.
pub fn builtin_memories() -> Vec<Memory> {
    vec![
        Memory::new(
            "1",
            "Our First Date",
            "2024-01-14",
            photo_url(1024993),
            "The day everything changed ❤️",
        ),
        Memory::new(
            "2",
            "Beach Sunset",
            "2024-02-20",
            photo_url(1024960),
            "Watching the sunset together",
        ),
        Memory::new(
            "3",
            "Cozy Evening",
            "2024-03-15",
            photo_url(1024967),
            "Movie night at home 🍿",
        ),
        Memory::new(
            "4",
            "Adventure Day",
            "2024-04-10",
            photo_url(1024975),
            "Exploring new places together",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::{builtin_memories, LOVE_QUOTES, SEED_MESSAGES};

    #[test]
    fn builtin_content_is_well_formed() {
        assert!(LOVE_QUOTES.iter().all(|quote| !quote.trim().is_empty()));
        assert!(SEED_MESSAGES.windows(2).all(|w| w[0].age_ms > w[1].age_ms));

        let memories = builtin_memories();
        assert_eq!(memories.len(), 4);
        assert!(memories[0]
            .image
            .starts_with("https://images.pexels.com/photos/1024993/"));
    }
}
