use crate::error::{TuiError, TuiResult};
use crate::utils::paths;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub keys: Vec<String>,
    pub screen: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub leader: String,
    pub actions: HashMap<String, Action>,
}

impl Default for Config {
    fn default() -> Self {
        let mut actions = HashMap::new();
        actions.insert(
            "Quit".to_string(),
            Action {
                keys: vec!["q".to_string()],
                screen: "any".to_string(),
            },
        );
        actions.insert(
            "Back".to_string(),
            Action {
                keys: vec!["<Esc>".to_string()],
                screen: "any".to_string(),
            },
        );
        actions.insert(
            "Open Externally".to_string(),
            Action {
                keys: vec!["o".to_string()],
                screen: "any".to_string(),
            },
        );
        actions.insert(
            "Play/Pause".to_string(),
            Action {
                keys: vec!["p".to_string()],
                screen: "player".to_string(),
            },
        );
        actions.insert(
            "Rewind".to_string(),
            Action {
                keys: vec!["[".to_string()],
                screen: "player".to_string(),
            },
        );
        actions.insert(
            "Fast Forward".to_string(),
            Action {
                keys: vec!["]".to_string()],
                screen: "player".to_string(),
            },
        );
        actions.insert(
            "Previous Video".to_string(),
            Action {
                keys: vec!["b".to_string()],
                screen: "player".to_string(),
            },
        );
        actions.insert(
            "Next Video".to_string(),
            Action {
                keys: vec!["n".to_string()],
                screen: "player".to_string(),
            },
        );

        // Vim-style navigation keys
        actions.insert(
            "Navigate Left".to_string(),
            Action {
                keys: vec!["h".to_string()],
                screen: "any".to_string(),
            },
        );
        actions.insert(
            "Navigate Down".to_string(),
            Action {
                keys: vec!["j".to_string()],
                screen: "any".to_string(),
            },
        );
        actions.insert(
            "Navigate Up".to_string(),
            Action {
                keys: vec!["k".to_string()],
                screen: "any".to_string(),
            },
        );
        actions.insert(
            "Navigate Right".to_string(),
            Action {
                keys: vec!["l".to_string()],
                screen: "any".to_string(),
            },
        );

        // Debug toggle
        actions.insert(
            "Toggle Debug".to_string(),
            Action {
                keys: vec!["<leader>d".to_string()],
                screen: "any".to_string(),
            },
        );

        Self {
            leader: " ".to_string(),
            actions,
        }
    }
}

impl Config {
    pub fn load() -> TuiResult<Self> {
        let config_path = paths::get_config_path();

        match std::fs::read_to_string(&config_path) {
            Ok(config_str) => match toml::from_str::<Config>(&config_str) {
                Ok(config) => Ok(config),
                Err(e) => Err(TuiError::configuration(format!(
                    "Failed to parse config: {}",
                    e
                ))),
            },
            Err(_) => Err(TuiError::configuration(format!(
                "Could not find config at: {:?}",
                config_path
            ))),
        }
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_e| {
            let default_config = Self::default();
            // Try to save the default config for future use
            let _ = default_config.save_to_file();
            default_config
        })
    }

    pub fn save_to_file(&self) -> TuiResult<()> {
        let config_path = paths::get_config_path();

        // Ensure the config directory exists
        paths::ensure_config_dir().map_err(|e| {
            TuiError::configuration(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = toml::to_string_pretty(self)
            .map_err(|e| TuiError::configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, config_str)
            .map_err(|e| TuiError::configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    pub fn get_action_for_key(&self, key: &str) -> Option<String> {
        for (action_name, action) in &self.actions {
            if action.keys.contains(&key.to_string()) {
                return Some(action_name.clone());
            }
        }
        None
    }

    pub fn get_action(&self, action_name: &str) -> Option<&Action> {
        self.actions.get(action_name)
    }

    pub fn is_key_valid_for_screen(&self, key: &str, current_screen: &str) -> bool {
        for action in self.actions.values() {
            if action.keys.contains(&key.to_string()) {
                return action.screen == "any" || action.screen == current_screen;
            }
        }
        false
    }

    pub fn get_keys_for_action(&self, action: &str) -> Vec<String> {
        self.actions
            .get(action)
            .map(|action| action.keys.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binds_the_core_actions() {
        let config = Config::default();
        assert_eq!(config.leader, " ");
        assert_eq!(config.get_keys_for_action("Quit"), vec!["q".to_string()]);
        assert_eq!(
            config.get_keys_for_action("Toggle Debug"),
            vec!["<leader>d".to_string()]
        );
        assert!(config.get_action("Play/Pause").is_some());
    }

    #[test]
    fn test_key_lookup_finds_the_action() {
        let config = Config::default();
        assert_eq!(config.get_action_for_key("q"), Some("Quit".to_string()));
        assert_eq!(
            config.get_action_for_key("]"),
            Some("Fast Forward".to_string())
        );
        assert_eq!(config.get_action_for_key("z"), None);
    }

    #[test]
    fn test_screen_scoping() {
        let config = Config::default();
        assert!(config.is_key_valid_for_screen("q", "browse"));
        assert!(config.is_key_valid_for_screen("q", "player"));
        assert!(config.is_key_valid_for_screen("p", "player"));
        assert!(!config.is_key_valid_for_screen("p", "browse"));
        assert!(!config.is_key_valid_for_screen("z", "browse"));
    }

    #[test]
    fn test_parses_user_config() {
        let toml_str = r#"
            leader = ","

            [actions."Quit"]
            keys = ["q", "<Ctrl>c"]
            screen = "any"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.leader, ",");
        assert_eq!(
            config.get_keys_for_action("Quit"),
            vec!["q".to_string(), "<Ctrl>c".to_string()]
        );
    }
}
