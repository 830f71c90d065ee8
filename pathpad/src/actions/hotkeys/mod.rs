//! Keyboard chords and the tables binding them to actions.
//!
//! Actions can have many chords bound to them, and a chord triggers at most
//! one action. The one-to-many direction is what the user edits and what gets
//! persisted; the reverse many-to-one map is derived from it at load.

mod defaults;

use super::Action;
use hashbrown::HashMap;
use smallvec::SmallVec;

/// Keys the editor binds, named the way key codes are usually spelled.
/// Names are case-sensitive in the chord syntax.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug, strum::AsRefStr, strum::EnumString)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Backspace,
    Comma,
    Delete,
    Period,
    KeyC,
    KeyL,
    KeyN,
    KeyQ,
    KeyS,
    KeyT,
    KeyZ,
}

/// The held digit that steers a control point, the `1+` / `2+` of the
/// movement chords.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub enum ControlDigit {
    One,
    Two,
}

#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub struct KeyChord {
    pub digit: Option<ControlDigit>,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub key: Key,
}
/// Formats correctly for [`std::str::FromStr`].
impl std::fmt::Display for KeyChord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut components = SmallVec::<[&str; 5]>::new();
        match self.digit {
            Some(ControlDigit::One) => components.push("1"),
            Some(ControlDigit::Two) => components.push("2"),
            None => {}
        }
        if self.ctrl {
            components.push("ctrl");
        }
        if self.alt {
            components.push("alt");
        }
        if self.shift {
            components.push("shift");
        }
        components.push(self.key.as_ref());
        write!(f, "{}", components.join("+"))
    }
}
impl serde::Serialize for KeyChord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize through the human-readable chord syntax, so the on-disk
        // form is the same one the documentation teaches.
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> serde::Deserialize<'de> for KeyChord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let str =
            <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        str.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChordParseError {
    #[error("unrecognized key name")]
    InvalidKeyName,
}
/// Parse from syntax `[1+|2+][ctrl+][alt+][shift+]<key name>`, case-sensitive.
impl std::str::FromStr for KeyChord {
    type Err = ChordParseError;
    fn from_str(mut str: &str) -> Result<Self, Self::Err> {
        let mut take_if_has = |prefix: &str| -> bool {
            if let Some(new_str) = str.strip_prefix(prefix) {
                str = new_str;
                true
            } else {
                false
            }
        };
        let digit = if take_if_has("1+") {
            Some(ControlDigit::One)
        } else if take_if_has("2+") {
            Some(ControlDigit::Two)
        } else {
            None
        };
        let ctrl = take_if_has("ctrl+");
        let alt = take_if_has("alt+");
        let shift = take_if_has("shift+");
        // str now contains only the key name.
        let key = str.parse().map_err(|_| ChordParseError::InvalidKeyName)?;

        Ok(Self {
            digit,
            ctrl,
            alt,
            shift,
            key,
        })
    }
}

/// The on-disk direction: each action, its chords.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct ActionsToKeys(pub HashMap<Action, SmallVec<[KeyChord; 2]>>);
impl Default for ActionsToKeys {
    fn default() -> Self {
        let mut map = HashMap::with_capacity(defaults::KEYBOARD.len());
        for (action, chords) in defaults::KEYBOARD {
            map.insert(*action, SmallVec::from_slice(chords));
        }
        let new = Self(map);
        // The default table is checked reversable when debugging.
        debug_assert!(KeysToActions::try_from(&new).is_ok());
        new
    }
}

/// The derived direction: a chord and the single action it triggers.
#[derive(Clone, Debug, Default)]
pub struct KeysToActions(HashMap<KeyChord, Action>);
impl KeysToActions {
    #[must_use]
    pub fn action_of(&self, chord: &KeyChord) -> Option<Action> {
        self.0.get(chord).copied()
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
#[derive(Debug, thiserror::Error)]
pub enum InvertError {
    #[error("chord `{0}` is bound to more than one action")]
    DuplicateBinding(KeyChord),
}
impl TryFrom<&ActionsToKeys> for KeysToActions {
    type Error = InvertError;
    fn try_from(value: &ActionsToKeys) -> Result<Self, Self::Error> {
        let mut map = HashMap::new();
        for (action, chords) in &value.0 {
            for chord in chords {
                if map.insert(*chord, *action).is_some() {
                    return Err(InvertError::DuplicateBinding(*chord));
                }
            }
        }
        Ok(Self(map))
    }
}
