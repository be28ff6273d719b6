//! `:name:` emoji shortcodes.
//!
//! Only text nodes rendered to ANSI go through [substitute]. Unknown shortcodes are left as
//! they are, so a stray `:foo:` in ordinary prose survives.

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SHORTCODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([a-zA-Z0-9_+\-]+):").expect("shortcode pattern is valid"));

static EMOJI: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        // faces
        ("grin", "😁"),
        ("grinning", "😀"),
        ("smile", "😄"),
        ("smiley", "😃"),
        ("laughing", "😆"),
        ("joy", "😂"),
        ("rofl", "🤣"),
        ("wink", "😉"),
        ("blush", "😊"),
        ("innocent", "😇"),
        ("heart_eyes", "😍"),
        ("kissing_heart", "😘"),
        ("yum", "😋"),
        ("stuck_out_tongue", "😛"),
        ("sunglasses", "😎"),
        ("nerd_face", "🤓"),
        ("thinking", "🤔"),
        ("neutral_face", "😐"),
        ("expressionless", "😑"),
        ("unamused", "😒"),
        ("roll_eyes", "🙄"),
        ("grimacing", "😬"),
        ("relieved", "😌"),
        ("pensive", "😔"),
        ("sleepy", "😪"),
        ("sleeping", "😴"),
        ("mask", "😷"),
        ("dizzy_face", "😵"),
        ("exploding_head", "🤯"),
        ("cowboy_hat_face", "🤠"),
        ("partying_face", "🥳"),
        ("confused", "😕"),
        ("worried", "😟"),
        ("slightly_frowning_face", "🙁"),
        ("open_mouth", "😮"),
        ("astonished", "😲"),
        ("flushed", "😳"),
        ("fearful", "😨"),
        ("cold_sweat", "😰"),
        ("cry", "😢"),
        ("sob", "😭"),
        ("scream", "😱"),
        ("tired_face", "😫"),
        ("rage", "😡"),
        ("angry", "😠"),
        ("skull", "💀"),
        ("poop", "💩"),
        ("clown_face", "🤡"),
        ("ghost", "👻"),
        ("alien", "👽"),
        ("robot", "🤖"),
        // gestures
        ("wave", "👋"),
        ("ok_hand", "👌"),
        ("+1", "👍"),
        ("thumbsup", "👍"),
        ("-1", "👎"),
        ("thumbsdown", "👎"),
        ("clap", "👏"),
        ("raised_hands", "🙌"),
        ("pray", "🙏"),
        ("muscle", "💪"),
        ("point_right", "👉"),
        ("point_left", "👈"),
        ("point_up", "☝️"),
        ("point_down", "👇"),
        ("v", "✌️"),
        ("crossed_fingers", "🤞"),
        ("eyes", "👀"),
        // symbols
        ("heart", "❤️"),
        ("broken_heart", "💔"),
        ("sparkles", "✨"),
        ("star", "⭐"),
        ("star2", "🌟"),
        ("zap", "⚡"),
        ("fire", "🔥"),
        ("boom", "💥"),
        ("100", "💯"),
        ("check", "✔️"),
        ("heavy_check_mark", "✔️"),
        ("white_check_mark", "✅"),
        ("x", "❌"),
        ("warning", "⚠️"),
        ("no_entry", "⛔"),
        ("question", "❓"),
        ("exclamation", "❗"),
        ("information_source", "ℹ️"),
        ("bulb", "💡"),
        ("bell", "🔔"),
        ("lock", "🔒"),
        ("unlock", "🔓"),
        ("key", "🔑"),
        ("link", "🔗"),
        ("hourglass", "⌛"),
        ("stopwatch", "⏱️"),
        ("arrow_right", "➡️"),
        ("arrow_left", "⬅️"),
        ("arrow_up", "⬆️"),
        ("arrow_down", "⬇️"),
        ("recycle", "♻️"),
        // objects
        ("rocket", "🚀"),
        ("tada", "🎉"),
        ("gift", "🎁"),
        ("trophy", "🏆"),
        ("medal", "🏅"),
        ("bug", "🐛"),
        ("wrench", "🔧"),
        ("hammer", "🔨"),
        ("gear", "⚙️"),
        ("package", "📦"),
        ("memo", "📝"),
        ("pencil2", "✏️"),
        ("book", "📖"),
        ("books", "📚"),
        ("clipboard", "📋"),
        ("calendar", "📅"),
        ("chart_with_upwards_trend", "📈"),
        ("chart_with_downwards_trend", "📉"),
        ("mag", "🔍"),
        ("computer", "💻"),
        ("keyboard", "⌨️"),
        ("floppy_disk", "💾"),
        ("file_folder", "📁"),
        ("open_file_folder", "📂"),
        ("email", "📧"),
        ("mailbox", "📫"),
        ("construction", "🚧"),
        ("rotating_light", "🚨"),
        ("coffee", "☕"),
        ("beer", "🍺"),
        ("pizza", "🍕"),
        ("cake", "🍰"),
        ("apple", "🍎"),
        // nature
        ("sunny", "☀️"),
        ("cloud", "☁️"),
        ("umbrella", "☔"),
        ("snowflake", "❄️"),
        ("rainbow", "🌈"),
        ("earth_americas", "🌎"),
        ("seedling", "🌱"),
        ("evergreen_tree", "🌲"),
        ("cactus", "🌵"),
        ("rose", "🌹"),
        ("dog", "🐶"),
        ("cat", "🐱"),
        ("crab", "🦀"),
        ("snake", "🐍"),
        ("turtle", "🐢"),
        ("unicorn", "🦄"),
    ]
    .into_iter()
    .collect()
});

/// The emoji for `name`, without the surrounding colons.
pub fn lookup(name: &str) -> Option<&'static str> {
    EMOJI.get(name).copied()
}

/// Replace every known `:name:` shortcode in `text`.
pub fn substitute(text: &str) -> Cow<'_, str> {
    if !text.contains(':') {
        return Cow::Borrowed(text);
    }
    SHORTCODE.replace_all(text, |caps: &Captures| match lookup(&caps[1]) {
        Some(emoji) => emoji.to_string(),
        None => caps[0].to_string(),
    })
}
