use crate::commands::{CmdMessage, CmdResult, MugmarkPaths};
use crate::config::{MugmarkConfig, CONFIG_KEYS};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Template,
}

pub fn run(config: &MugmarkConfig, paths: &MugmarkPaths, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let mut result = CmdResult::default().with_config(config.clone());
            for file in paths.config_files.iter().filter(|f| f.exists()) {
                result.add_message(CmdMessage::info(format!("Read {}", file.display())));
            }
            Ok(result)
        }
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => result.add_message(CmdMessage::error(format!(
                    "Unknown config key: {} (known: {})",
                    key,
                    CONFIG_KEYS.join(", ")
                ))),
            }
            Ok(result)
        }
        ConfigAction::Template => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(MugmarkConfig::template()));
            Ok(result)
        }
    }
}
