use crate::bodies::BodyId;
use crate::engine::Command;
use crate::view::Frame;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub fn collect_input_nonblocking(max_frame_time: Duration) -> anyhow::Result<Vec<KeyEvent>> {
    let mut out = Vec::new();

    // poll with a tiny timeout so we stay responsive
    let timeout = std::cmp::min(Duration::from_millis(1), max_frame_time);
    while event::poll(timeout)? {
        if let Event::Key(k) = event::read()? {
            if accepts(&k) {
                out.push(k);
                if out.len() >= 32 {
                    break;
                }
            }
        }
    }
    Ok(out)
}

/// Presses and auto-repeats count; holding `+` keeps stepping the speed.
fn accepts(k: &KeyEvent) -> bool {
    k.kind == KeyEventKind::Press || k.kind == KeyEventKind::Repeat
}

fn body(i: u32) -> Option<BodyId> {
    BodyId::new(i as usize).ok()
}

/// Keys `0`, `5`, `6`, `7` toggle body pause directly since `1`-`4` pick
/// frames; Alt+digit reaches every body.
pub fn map_key(k: KeyEvent) -> Option<Command> {
    if k.modifiers.contains(KeyModifiers::ALT) {
        return match k.code {
            KeyCode::Char(c) => c.to_digit(10).and_then(body).map(Command::ToggleBodyPause),
            _ => None,
        };
    }
    match k.code {
        KeyCode::Esc => Some(Command::Exit),
        KeyCode::F(n @ 1..=8) => body(u32::from(n) - 1).map(Command::SelectZoomTarget),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            '1'..='4' => c
                .to_digit(10)
                .and_then(|d| Frame::try_from(d as u8).ok())
                .map(Command::SelectFrame),
            '0' | '5' | '6' | '7' => c.to_digit(10).and_then(body).map(Command::ToggleBodyPause),
            'p' => Some(Command::TogglePause),
            'h' => Some(Command::ToggleHelp),
            '+' | '=' => Some(Command::SpeedUp),
            '-' | '_' => Some(Command::SpeedDown),
            'e' => Some(Command::ToggleEclipse),
            'z' => Some(Command::ClearZoom),
            'q' => Some(Command::Exit),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_one_to_four_select_frames() {
        assert_eq!(map_key(key(KeyCode::Char('1'))), Some(Command::SelectFrame(Frame::Overview)));
        assert_eq!(map_key(key(KeyCode::Char('4'))), Some(Command::SelectFrame(Frame::NightSky)));
    }

    #[test]
    fn remaining_digits_pause_bodies() {
        assert_eq!(
            map_key(key(KeyCode::Char('0'))),
            Some(Command::ToggleBodyPause(BodyId::MERCURY))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('7'))),
            Some(Command::ToggleBodyPause(BodyId::NEPTUNE))
        );
        assert_eq!(map_key(key(KeyCode::Char('8'))), None);
        assert_eq!(map_key(key(KeyCode::Char('9'))), None);
    }

    #[test]
    fn alt_digits_reach_every_body() {
        let k = KeyEvent::new(KeyCode::Char('4'), KeyModifiers::ALT);
        assert_eq!(map_key(k), Some(Command::ToggleBodyPause(BodyId::JUPITER)));
        let k = KeyEvent::new(KeyCode::Char('8'), KeyModifiers::ALT);
        assert_eq!(map_key(k), None);
    }

    #[test]
    fn function_keys_pick_zoom_targets() {
        assert_eq!(map_key(key(KeyCode::F(1))), Some(Command::SelectZoomTarget(BodyId::MERCURY)));
        assert_eq!(map_key(key(KeyCode::F(8))), Some(Command::SelectZoomTarget(BodyId::NEPTUNE)));
        assert_eq!(map_key(key(KeyCode::F(9))), None);
    }

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(map_key(key(KeyCode::Char('P'))), Some(Command::TogglePause));
        assert_eq!(map_key(key(KeyCode::Char('h'))), Some(Command::ToggleHelp));
        assert_eq!(map_key(key(KeyCode::Char('E'))), Some(Command::ToggleEclipse));
        assert_eq!(map_key(key(KeyCode::Char('Z'))), Some(Command::ClearZoom));
    }

    #[test]
    fn speed_and_exit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('+'))), Some(Command::SpeedUp));
        assert_eq!(map_key(key(KeyCode::Char('='))), Some(Command::SpeedUp));
        assert_eq!(map_key(key(KeyCode::Char('-'))), Some(Command::SpeedDown));
        assert_eq!(map_key(key(KeyCode::Char('_'))), Some(Command::SpeedDown));
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Command::Exit));
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Command::Exit));
    }

    #[test]
    fn held_key_repeats_map_like_presses() {
        let held =
            KeyEvent::new_with_kind(KeyCode::Char('+'), KeyModifiers::NONE, KeyEventKind::Repeat);
        assert!(accepts(&held));
        assert_eq!(map_key(held), Some(Command::SpeedUp));
        let up =
            KeyEvent::new_with_kind(KeyCode::Char('+'), KeyModifiers::NONE, KeyEventKind::Release);
        assert!(!accepts(&up));
    }

    #[test]
    fn unmapped_keys_produce_nothing() {
        assert_eq!(map_key(key(KeyCode::Char('x'))), None);
        assert_eq!(map_key(key(KeyCode::Left)), None);
        assert_eq!(map_key(key(KeyCode::Enter)), None);
    }
}
