//! pathpad, a keyboard-driven outline editor.
//!
//! Drawing happens with discrete, repeatable chords instead of pointer drags.
//! This front end reads one chord per line (`KeyL`, `shift+ArrowUp`,
//! `2+ArrowRight`, ...), resolves it through the hotkey table, and feeds the
//! resulting command to the core session. A few meta words (`svg`, `path`,
//! `guide`, `status`, `edit`, `preview`, `opacity <v>`, `size <w> <h>`,
//! `quit`) read state back out.

mod actions;
mod prefs;

use pathpad_core::commands::CanvasCommand;
use pathpad_core::state::Extent;
use pathpad_core::util::Opacity;
use pathpad_core::{Session, SessionOptions};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let hotkeys = prefs::Hotkeys::get();
    if hotkeys.is_defaulted() {
        // First run (or a mangled file): write the stock table out so there
        // is something to edit.
        if let Err(error) = hotkeys.save() {
            log::warn!("couldn't save default hotkeys: {error:?}");
        }
    }

    // An optional reference image source as the only argument.
    let reference_source = std::env::args().nth(1).unwrap_or_default();
    let mut session = Session::new(SessionOptions {
        reference_source,
        ..SessionOptions::default()
    });

    eprintln!("pathpad: one chord per line. `status`, `path`, `guide`, `svg`, `quit`.");
    for line in std::io::stdin().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match input {
            "quit" | "exit" => break,
            "svg" => println!("{}", session.svg()),
            "path" => println!("{}", session.layers().active().path_code()),
            "guide" => println!("{}", session.layers().active().guide_code()),
            "status" => println!("{}", session.status_line().unwrap_or_default()),
            "edit" | "preview" => {
                // Unwrap OK - the arm matched one of the mode names.
                let mode = input.parse().unwrap();
                session.dispatch(&CanvasCommand::SetMode { mode }.into())?;
            }
            _ => {
                if let Some(rest) = input.strip_prefix("opacity ") {
                    let opacity = Opacity::coerce(rest);
                    session.dispatch(&CanvasCommand::SetReferenceOpacity { opacity }.into())?;
                    continue;
                }
                if let Some(rest) = input.strip_prefix("size ") {
                    dispatch_size(&mut session, rest);
                    continue;
                }
                dispatch_chord(&mut session, hotkeys, input);
            }
        }
    }
    Ok(())
}

/// `size <width> <height>`, the reference-image load event.
fn dispatch_size(session: &mut Session, arguments: &str) {
    let mut split = arguments.split_whitespace();
    let extent = match (
        split.next().and_then(|w| w.parse::<f32>().ok()),
        split.next().and_then(|h| h.parse::<f32>().ok()),
    ) {
        (Some(width), Some(height)) => Extent { width, height },
        _ => {
            eprintln!("size wants two numbers");
            return;
        }
    };
    match session.dispatch(&CanvasCommand::SetDimensions { extent }.into()) {
        Ok(_) => {}
        Err(error) => eprintln!("rejected: {error}"),
    }
}

fn dispatch_chord(session: &mut Session, hotkeys: &prefs::Hotkeys, input: &str) {
    let chord: actions::hotkeys::KeyChord = match input.parse() {
        Ok(chord) => chord,
        Err(error) => {
            eprintln!("unreadable chord `{input}`: {error}");
            return;
        }
    };
    let Some(action) = hotkeys.keys_to_actions.action_of(&chord) else {
        eprintln!("`{chord}` is not bound");
        return;
    };
    // The matched chord's shift modifier is what selects the large step.
    match session.dispatch(&action.command(chord.shift)) {
        Ok(true) => {
            if let Some(status) = session.status_line() {
                println!("{status}");
            }
        }
        Ok(false) => println!("(nothing selected)"),
        Err(error) => eprintln!("rejected: {error}"),
    }
}
