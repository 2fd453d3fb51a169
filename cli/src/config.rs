use serde::{Deserialize, Serialize};

use engine::Difficulty;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub state_file: String,
    pub svg_file: String,
    /// Applied only when no saved game exists yet.
    pub default_difficulty: Difficulty,
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if self.state_file.is_empty() {
            return Err("state_file must not be empty".to_string());
        }
        if self.svg_file.is_empty() {
            return Err("svg_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: "tictactoe.json".to_string(),
            svg_file: "tic_tac_toe.svg".to_string(),
            default_difficulty: Difficulty::Easy,
        }
    }
}

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn load_config() -> Result<Config, String> {
    load_config_from(&get_config_path())
}

fn load_config_from(path: &str) -> Result<Config, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(format!("Failed to read config {}: {}", path, e)),
    };

    let config: Config = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}
