use crate::commands::{CmdMessage, CmdResult, LibraryPaths};
use crate::config::LibrisConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &LibraryPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = LibrisConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = LibrisConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => {
                    result.add_message(CmdMessage::info(val));
                    Ok(result)
                }
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                    Ok(result)
                }
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = LibrisConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let mut result = CmdResult::default().with_config(config.clone());
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    fn paths() -> (TempDir, LibraryPaths) {
        let dir = TempDir::new().unwrap();
        let paths = LibraryPaths::new(dir.path().to_path_buf());
        (dir, paths)
    }

    #[test]
    fn show_all_returns_defaults_when_nothing_is_saved() {
        let (_dir, paths) = paths();
        let result = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(LibrisConfig::default()));
    }

    #[test]
    fn set_persists_across_loads() {
        let (_dir, paths) = paths();
        run(
            &paths,
            ConfigAction::Set("issues-file".into(), "loans.csv".into()),
        )
        .unwrap();

        let result = run(&paths, ConfigAction::ShowKey("issues-file".into())).unwrap();
        assert_eq!(result.messages[0].content, "loans.csv");
    }

    #[test]
    fn unknown_key_is_reported_not_fatal() {
        let (_dir, paths) = paths();
        let result = run(&paths, ConfigAction::ShowKey("nope".into())).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
    }
}
