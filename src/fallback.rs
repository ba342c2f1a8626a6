//! Template-based story synthesis used when no provider answers.
//!
//! Templates contain `{placeholder}` tokens. Substitution is a single left to
//! right scan over the template, so a filler value is never itself scanned
//! for tokens.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::Genre;

/// Provider label reported for template output.
pub const FALLBACK_LABEL: &str = "Template Fallback";

/// Placeholder kinds a template may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Protagonist,
    Dialogue,
    Mentor,
    LoveInterest,
    Class,
}

impl Placeholder {
    pub const ALL: [Placeholder; 5] = [
        Placeholder::Protagonist,
        Placeholder::Dialogue,
        Placeholder::Mentor,
        Placeholder::LoveInterest,
        Placeholder::Class,
    ];

    /// Name between the braces.
    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::Protagonist => "protagonist",
            Placeholder::Dialogue => "dialogue",
            Placeholder::Mentor => "mentor",
            Placeholder::LoveInterest => "love_interest",
            Placeholder::Class => "class",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.token() == token)
    }

    /// Filler values drawn for this placeholder.
    pub fn pool(&self) -> &'static [&'static str] {
        match self {
            Placeholder::Protagonist => PROTAGONISTS,
            Placeholder::Dialogue => DIALOGUE,
            Placeholder::Mentor => MENTORS,
            Placeholder::LoveInterest => LOVE_INTERESTS,
            Placeholder::Class => CLASSES,
        }
    }
}

const PROTAGONISTS: &[&str] = &[
    "Kenji", "Akira", "Yuki", "Hana", "Takeshi", "Misaki", "Ryu", "Sakura",
];

const DIALOGUE: &[&str] = &[
    "I won't give up, no matter what!",
    "This is just the beginning of our story!",
    "I'll protect everyone I care about!",
    "My dreams are worth fighting for!",
    "Today, everything changes!",
    "I believe in the power of friendship!",
];

const MENTORS: &[&str] = &["Genryu", "Kaede", "Tetsuya", "Hoshino", "Ishida"];

const LOVE_INTERESTS: &[&str] = &["Haruto", "Aoi", "Ren", "Mei", "Sora", "Yui"];

const CLASSES: &[&str] = &["Sword Master", "Mage", "Paladin", "Assassin"];

const SHONEN_TEMPLATES: &[&str] = &[
    "The sun rose over Tokyo as {protagonist} prepared for their greatest challenge. '{dialogue}' they shouted, gripping their weapon tightly. With unwavering determination, they faced the trials ahead, knowing that true strength comes from protecting those you care about.",
    "In the hidden village, {protagonist} trained relentlessly under the moonlight. Master {mentor} watched from the shadows, knowing that the final test approached. '{dialogue}' the master whispered. The legendary technique would soon be needed.",
    "The tournament arena erupted in cheers as {protagonist} stepped forward. Their rival stood across the battlefield, eyes blazing with competitive fire. '{dialogue}' they declared, raising their weapon high.",
];

const ISEKAI_TEMPLATES: &[&str] = &[
    "The summoning circle pulsed with otherworldly light beneath {protagonist}'s feet. When the glow faded, they stood in a vast meadow under twin moons. '{dialogue}' they whispered, realizing their ordinary life had ended.",
    "After the accident, {protagonist} expected darkness. Instead, they awakened in a fantasy world as the legendary {class}. '{dialogue}' they said, examining their new abilities.",
    "The goddess smiled as she explained the situation to {protagonist}. '{dialogue}' she said, offering them incredible cheat abilities.",
];

const MECHA_TEMPLATES: &[&str] = &[
    "The massive hangar doors opened, revealing {protagonist}'s giant robot against the starlit sky. '{dialogue}' they declared through the communication system. Earth's last line of defense stood ready.",
    "Neural synchronization at 95% and climbing. {protagonist} felt their consciousness merge with their mecha's AI. '{dialogue}' they said, as enemy signatures appeared on radar.",
    "In the cockpit of their inherited mecha, {protagonist} discovered their mysterious past. '{dialogue}' the AI companion explained.",
];

const ROMANCE_TEMPLATES: &[&str] = &[
    "Cherry blossoms danced in the spring breeze as {protagonist} nervously approached their crush. '{dialogue}' they stammered, their heart pounding.",
    "The rain started falling as {protagonist} waited under the school gate. When {love_interest} appeared with an umbrella, they shared a moment of perfect silence.",
    "The rivalry between {protagonist} and {love_interest} had defined their entire school career. But during the cultural festival, something shifted.",
];

const SLICE_OF_LIFE_TEMPLATES: &[&str] = &[
    "The morning sun filtered through the classroom windows as {protagonist} settled into their routine. '{dialogue}' their friend said, offering to share lunch.",
    "After school, the literature club gathered in their usual spot. {protagonist} watched their friends discuss the latest novel, feeling grateful.",
    "The small town had its own gentle rhythm, and {protagonist} was finally learning to appreciate it. '{dialogue}' the elderly shopkeeper said with a knowing smile.",
];

const ACTION_TEMPLATES: &[&str] = &[
    "Under the blood-red moon, {protagonist} gripped their cursed blade tighter. The demon's eyes glowed crimson in the darkness ahead. '{dialogue}' they breathed.",
    "The ancient curse mark pulsed on {protagonist}'s arm as supernatural power coursed through their veins. '{dialogue}' they growled, facing the horde of cursed spirits.",
    "The school bell chimed midnight as {protagonist} leaped across rooftops, pursuing their target. '{dialogue}' they muttered, preparing their special attack.",
];

/// Template pool for a genre.
pub fn templates(genre: Genre) -> &'static [&'static str] {
    match genre {
        Genre::Shonen => SHONEN_TEMPLATES,
        Genre::Isekai => ISEKAI_TEMPLATES,
        Genre::Mecha => MECHA_TEMPLATES,
        Genre::Romance => ROMANCE_TEMPLATES,
        Genre::SliceOfLife => SLICE_OF_LIFE_TEMPLATES,
        Genre::Action => ACTION_TEMPLATES,
    }
}

/// One independently drawn filler per placeholder kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fillers {
    pub protagonist: &'static str,
    pub dialogue: &'static str,
    pub mentor: &'static str,
    pub love_interest: &'static str,
    pub class: &'static str,
}

impl Fillers {
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pick = |placeholder: Placeholder| {
            placeholder
                .pool()
                .choose(&mut *rng)
                .copied()
                .unwrap_or_default()
        };
        Self {
            protagonist: pick(Placeholder::Protagonist),
            dialogue: pick(Placeholder::Dialogue),
            mentor: pick(Placeholder::Mentor),
            love_interest: pick(Placeholder::LoveInterest),
            class: pick(Placeholder::Class),
        }
    }

    fn value(&self, placeholder: Placeholder) -> &'static str {
        match placeholder {
            Placeholder::Protagonist => self.protagonist,
            Placeholder::Dialogue => self.dialogue,
            Placeholder::Mentor => self.mentor,
            Placeholder::LoveInterest => self.love_interest,
            Placeholder::Class => self.class,
        }
    }
}

/// Replace every known `{token}` in `template` in one pass.
///
/// Braces that do not enclose a known token are copied through unchanged.
pub fn fill_template(template: &str, fillers: &Fillers) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match after_open
            .find('}')
            .and_then(|close| Placeholder::from_token(&after_open[..close]).map(|p| (p, close)))
        {
            Some((placeholder, close)) => {
                out.push_str(fillers.value(placeholder));
                rest = &after_open[close + 1..];
            }
            None => {
                out.push('{');
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Preamble echoing the user's idea verbatim.
pub fn preamble(prompt: &str) -> String {
    format!("Based on your idea: \"{prompt}\"")
}

/// Synthesize a story from the genre's template pool.
///
/// Deterministic for a given `rng` state. Never fails and never performs I/O.
pub fn fallback_story<R: Rng + ?Sized>(prompt: &str, genre: Genre, rng: &mut R) -> String {
    let template = templates(genre).choose(rng).copied().unwrap_or_default();
    let fillers = Fillers::draw(rng);
    format!("{}\n\n{}", preamble(prompt), fill_template(template, &fillers))
}
