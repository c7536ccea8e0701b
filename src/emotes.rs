//! Emoticon table and picker layout.

/// An emoticon: the text shortcut typed in messages, its name and the glyph
/// used to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emote {
    pub shortcut: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
}

const fn emote(shortcut: &'static str, name: &'static str, glyph: &'static str) -> Emote {
    Emote { shortcut, name, glyph }
}

/// Shortcut table. Several shortcuts may share one name; the picker shows
/// each name once using its first shortcut.
pub static EMOTES: &[Emote] = &[
    emote(":)", "Smile", "🙂"),
    emote(":-)", "Smile", "🙂"),
    emote(":D", "Big smile", "😃"),
    emote(":-D", "Big smile", "😃"),
    emote(";)", "Wink", "😉"),
    emote(";-)", "Wink", "😉"),
    emote(":P", "Tongue out", "😛"),
    emote(":-P", "Tongue out", "😛"),
    emote(":(", "Sad", "🙁"),
    emote(":-(", "Sad", "🙁"),
    emote(":'(", "Crying", "😢"),
    emote(":O", "Surprised", "😮"),
    emote(":-O", "Surprised", "😮"),
    emote(":@", "Angry", "😠"),
    emote(":$", "Embarrassed", "😳"),
    emote(":S", "Confused", "😕"),
    emote(":|", "Disappointed", "😐"),
    emote("(H)", "Hot", "😎"),
    emote("8-|", "Nerd", "🤓"),
    emote("|-)", "Sleepy", "😴"),
    emote("+o(", "Sick", "🤢"),
    emote("(A)", "Angel", "😇"),
    emote("(6)", "Devil", "😈"),
    emote("(L)", "Heart", "❤"),
    emote("(U)", "Broken heart", "💔"),
    emote("(K)", "Kiss", "💋"),
    emote("(F)", "Flower", "🌹"),
    emote("(Y)", "Thumbs up", "👍"),
    emote("(N)", "Thumbs down", "👎"),
    emote("(C)", "Coffee", "☕"),
    emote("(B)", "Beer", "🍺"),
    emote("(^)", "Cake", "🎂"),
    emote("(G)", "Gift", "🎁"),
    emote("(*)", "Star", "⭐"),
    emote("(#)", "Sun", "☀"),
    emote("(R)", "Rainbow", "🌈"),
    emote("(8)", "Note", "🎵"),
    emote("(E)", "Email", "📧"),
    emote("(mp)", "Phone", "📱"),
    emote("(co)", "Computer", "💻"),
];

/// Distinct emoticons in table order, first shortcut per name.
pub fn distinct_emotes() -> Vec<&'static Emote> {
    let mut seen: Vec<&str> = Vec::new();
    EMOTES
        .iter()
        .filter(|e| {
            if seen.contains(&e.name) {
                false
            } else {
                seen.push(e.name);
                true
            }
        })
        .collect()
}

/// Lay the distinct emoticons out in rows of at most `columns` cells.
/// A column count of zero is treated as one.
pub fn emote_rows(columns: usize) -> Vec<Vec<&'static Emote>> {
    distinct_emotes()
        .chunks(columns.max(1))
        .map(|row| row.to_vec())
        .collect()
}

pub fn find_by_shortcut(shortcut: &str) -> Option<&'static Emote> {
    EMOTES.iter().find(|e| e.shortcut == shortcut)
}
