// Copyright 2025 the Burrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted button presses: `FRAME:ACTION` entries replayed by the host loop.
//!
//! Actions are `focus=<region>`, `follow`, `stop` and `cancel`, mirroring the
//! demo's buttons.

use burrow_camera::CameraCommand;

/// A command scheduled for a frame.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ScriptedCommand {
    pub(crate) frame: u32,
    pub(crate) command: CameraCommand,
}

/// Parses `FRAME:ACTION`; used as a clap value parser.
pub(crate) fn parse_scripted(s: &str) -> Result<ScriptedCommand, String> {
    let (frame, action) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FRAME:ACTION, got '{s}'"))?;
    let frame = frame
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid frame '{frame}': {err}"))?;
    let command = match action.trim() {
        "follow" => CameraCommand::Follow,
        "stop" => CameraCommand::StopFollow,
        "cancel" => CameraCommand::CancelSnap,
        other => match other.strip_prefix("focus=") {
            Some(name) if !name.is_empty() => CameraCommand::Focus(name.to_owned()),
            _ => return Err(format!("unknown action '{other}'")),
        },
    };
    Ok(ScriptedCommand { frame, command })
}

/// The button sequence used when no script is given: fit, corners, follow,
/// then back to the center.
pub(crate) fn default_script() -> Vec<ScriptedCommand> {
    [
        (0, CameraCommand::Focus("world".into())),
        (90, CameraCommand::Focus("tl".into())),
        (180, CameraCommand::Focus("br".into())),
        (270, CameraCommand::Follow),
        (480, CameraCommand::StopFollow),
        (490, CameraCommand::Focus("center".into())),
    ]
    .into_iter()
    .map(|(frame, command)| ScriptedCommand { frame, command })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_action() {
        assert_eq!(
            parse_scripted("10:focus=tl").unwrap(),
            ScriptedCommand {
                frame: 10,
                command: CameraCommand::Focus("tl".into())
            }
        );
        assert_eq!(
            parse_scripted(" 3 : follow ").unwrap().command,
            CameraCommand::Follow
        );
        assert_eq!(
            parse_scripted("0:stop").unwrap().command,
            CameraCommand::StopFollow
        );
        assert_eq!(
            parse_scripted("0:cancel").unwrap().command,
            CameraCommand::CancelSnap
        );
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(parse_scripted("follow").is_err());
        assert!(parse_scripted("x:follow").is_err());
        assert!(parse_scripted("1:focus=").is_err());
        assert!(parse_scripted("1:jump").is_err());
    }

    #[test]
    fn default_script_is_ordered() {
        let script = default_script();
        assert!(script.windows(2).all(|w| w[0].frame <= w[1].frame));
    }
}
