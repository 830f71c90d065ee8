use super::super::Action;
use super::{ControlDigit, Key, KeyChord};

const fn plain(key: Key) -> KeyChord {
    KeyChord {
        digit: None,
        ctrl: false,
        alt: false,
        shift: false,
        key,
    }
}
const fn shift(key: Key) -> KeyChord {
    KeyChord {
        digit: None,
        ctrl: false,
        alt: false,
        shift: true,
        key,
    }
}
const fn alt(key: Key) -> KeyChord {
    KeyChord {
        digit: None,
        ctrl: false,
        alt: true,
        shift: false,
        key,
    }
}
const fn alt_shift(key: Key) -> KeyChord {
    KeyChord {
        digit: None,
        ctrl: false,
        alt: true,
        shift: true,
        key,
    }
}
const fn digit(digit: ControlDigit, key: Key) -> KeyChord {
    KeyChord {
        digit: Some(digit),
        ctrl: false,
        alt: false,
        shift: false,
        key,
    }
}
const fn digit_shift(digit: ControlDigit, key: Key) -> KeyChord {
    KeyChord {
        digit: Some(digit),
        ctrl: false,
        alt: false,
        shift: true,
        key,
    }
}

/// The stock bindings. Arrows nudge the current anchor, alt moves the whole
/// path, a held 1 or 2 steers that control point, and shift on any movement
/// selects the large step. The shifted chord maps to the *same* action, the
/// step is read off the matched chord's modifier.
pub const KEYBOARD: &[(Action, &[KeyChord])] = &[
    (Action::AddNewUnitPath, &[plain(Key::KeyN)]),
    (Action::SelectPrevUnitPath, &[shift(Key::Comma)]),
    (Action::SelectNextUnitPath, &[shift(Key::Period)]),
    (Action::AddLine, &[plain(Key::KeyL)]),
    (Action::AddCubic, &[plain(Key::KeyC)]),
    (Action::AddSmoothCubic, &[plain(Key::KeyS)]),
    (Action::AddQuadratic, &[plain(Key::KeyQ)]),
    (Action::AddSmoothQuadratic, &[plain(Key::KeyT)]),
    (Action::ToggleEnclosure, &[plain(Key::KeyZ)]),
    (Action::Delete, &[plain(Key::Delete), plain(Key::Backspace)]),
    (
        Action::MoveElementUp,
        &[plain(Key::ArrowUp), shift(Key::ArrowUp)],
    ),
    (
        Action::MoveElementDown,
        &[plain(Key::ArrowDown), shift(Key::ArrowDown)],
    ),
    (
        Action::MoveElementLeft,
        &[plain(Key::ArrowLeft), shift(Key::ArrowLeft)],
    ),
    (
        Action::MoveElementRight,
        &[plain(Key::ArrowRight), shift(Key::ArrowRight)],
    ),
    (
        Action::MoveUnitPathUp,
        &[alt(Key::ArrowUp), alt_shift(Key::ArrowUp)],
    ),
    (
        Action::MoveUnitPathDown,
        &[alt(Key::ArrowDown), alt_shift(Key::ArrowDown)],
    ),
    (
        Action::MoveUnitPathLeft,
        &[alt(Key::ArrowLeft), alt_shift(Key::ArrowLeft)],
    ),
    (
        Action::MoveUnitPathRight,
        &[alt(Key::ArrowRight), alt_shift(Key::ArrowRight)],
    ),
    (
        Action::MoveFirstControlUp,
        &[
            digit(ControlDigit::One, Key::ArrowUp),
            digit_shift(ControlDigit::One, Key::ArrowUp),
        ],
    ),
    (
        Action::MoveFirstControlDown,
        &[
            digit(ControlDigit::One, Key::ArrowDown),
            digit_shift(ControlDigit::One, Key::ArrowDown),
        ],
    ),
    (
        Action::MoveFirstControlLeft,
        &[
            digit(ControlDigit::One, Key::ArrowLeft),
            digit_shift(ControlDigit::One, Key::ArrowLeft),
        ],
    ),
    (
        Action::MoveFirstControlRight,
        &[
            digit(ControlDigit::One, Key::ArrowRight),
            digit_shift(ControlDigit::One, Key::ArrowRight),
        ],
    ),
    (
        Action::MoveSecondControlUp,
        &[
            digit(ControlDigit::Two, Key::ArrowUp),
            digit_shift(ControlDigit::Two, Key::ArrowUp),
        ],
    ),
    (
        Action::MoveSecondControlDown,
        &[
            digit(ControlDigit::Two, Key::ArrowDown),
            digit_shift(ControlDigit::Two, Key::ArrowDown),
        ],
    ),
    (
        Action::MoveSecondControlLeft,
        &[
            digit(ControlDigit::Two, Key::ArrowLeft),
            digit_shift(ControlDigit::Two, Key::ArrowLeft),
        ],
    ),
    (
        Action::MoveSecondControlRight,
        &[
            digit(ControlDigit::Two, Key::ArrowRight),
            digit_shift(ControlDigit::Two, Key::ArrowRight),
        ],
    ),
];
