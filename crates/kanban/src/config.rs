//! User configuration: snapshot location and keybindings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

const CONFIG_DIR: &str = "kanban";
const CONFIG_FILE: &str = "config.toml";
const SNAPSHOT_FILE: &str = "board.json";

macro_rules! vec_of_strings {
    ($($s:expr),* $(,)?) => {
        vec![$($s.to_string()),*]
    };
}

/// Top-level configuration loaded from the platform config dir.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Snapshot storage settings.
    pub storage: StorageConfig,
    /// Board keybindings.
    pub keybindings: KeyBindingsConfig,
}

/// Snapshot storage settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Explicit snapshot path; defaults to the platform data dir.
    pub path: Option<PathBuf>,
}

/// An action the board reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Open the new-task form.
    NewTask,
    /// Open the edit form for the selected card.
    EditTask,
    /// Delete the selected card.
    DeleteTask,
    /// Move the selected card one column to the right.
    MoveCard,
    /// Select the card above.
    Up,
    /// Select the card below.
    Down,
    /// Select the column to the left.
    Left,
    /// Select the column to the right.
    Right,
}

/// Keybindings for the board view. Each action accepts a list of key specs
/// such as `"n"`, `"Enter"`, `"Up"`, or `"ctrl+d"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindingsConfig {
    /// Leave the application.
    pub quit: Vec<String>,
    /// Open the new-task form.
    pub new_task: Vec<String>,
    /// Open the edit form for the selected card.
    pub edit_task: Vec<String>,
    /// Delete the selected card.
    pub delete_task: Vec<String>,
    /// Move the selected card one column to the right.
    pub move_card: Vec<String>,
    /// Select the card above.
    pub up: Vec<String>,
    /// Select the card below.
    pub down: Vec<String>,
    /// Select the column to the left.
    pub left: Vec<String>,
    /// Select the column to the right.
    pub right: Vec<String>,
}

impl Default for KeyBindingsConfig {
    fn default() -> Self {
        Self {
            quit: vec_of_strings!["q", "Q"],
            new_task: vec_of_strings!["n", "N"],
            edit_task: vec_of_strings!["e", "E"],
            delete_task: vec_of_strings!["d", "D", "Delete"],
            move_card: vec_of_strings!["Enter"],
            up: vec_of_strings!["k", "Up"],
            down: vec_of_strings!["j", "Down"],
            left: vec_of_strings!["h", "Left"],
            right: vec_of_strings!["l", "Right"],
        }
    }
}

impl KeyBindingsConfig {
    fn specs(&self, action: Action) -> &[String] {
        match action {
            Action::Quit => &self.quit,
            Action::NewTask => &self.new_task,
            Action::EditTask => &self.edit_task,
            Action::DeleteTask => &self.delete_task,
            Action::MoveCard => &self.move_card,
            Action::Up => &self.up,
            Action::Down => &self.down,
            Action::Left => &self.left,
            Action::Right => &self.right,
        }
    }

    /// True when `key` is bound to `action`. Specs that fail to parse were
    /// rejected at load time, so they are skipped here.
    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.specs(action)
            .iter()
            .filter_map(|spec| parse_key_spec(spec).ok())
            .any(|(code, modifiers)| key.code == code && key.modifiers == modifiers)
    }

    /// Reject configurations containing unparseable key specs.
    ///
    /// # Errors
    /// Returns the first offending spec.
    pub fn validate(&self) -> Result<()> {
        const ACTIONS: [Action; 9] = [
            Action::Quit,
            Action::NewTask,
            Action::EditTask,
            Action::DeleteTask,
            Action::MoveCard,
            Action::Up,
            Action::Down,
            Action::Left,
            Action::Right,
        ];
        for action in ACTIONS {
            for spec in self.specs(action) {
                parse_key_spec(spec)
                    .with_context(|| format!("invalid key spec '{spec}' for {action:?}"))?;
            }
        }
        Ok(())
    }
}

/// Parse a key spec: a named key, a single character, or `ctrl+<char>`.
fn parse_key_spec(spec: &str) -> Result<(KeyCode, KeyModifiers)> {
    if let Some(rest) = spec.strip_prefix("ctrl+") {
        let mut chars = rest.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok((KeyCode::Char(c), KeyModifiers::CONTROL));
        }
        bail!("expected a single character after 'ctrl+' in '{spec}'");
    }

    let code = match spec {
        "Esc" => KeyCode::Esc,
        "Enter" => KeyCode::Enter,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        "Delete" => KeyCode::Delete,
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        single => {
            let mut chars = single.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => bail!("unknown key spec '{spec}'"),
            }
        }
    };
    // Shifted characters arrive with the SHIFT modifier set; uppercase specs
    // must still match them.
    let modifiers = match code {
        KeyCode::Char(c) if c.is_uppercase() => KeyModifiers::SHIFT,
        _ => KeyModifiers::NONE,
    };
    Ok((code, modifiers))
}

impl Config {
    /// Load configuration from `override_path`, or from the platform config
    /// dir. A missing file yields the defaults; an unparseable file or an
    /// invalid keybinding is an error.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(path) => path.to_path_buf(),
            None => match dirs::config_dir() {
                Some(dir) => dir.join(CONFIG_DIR).join(CONFIG_FILE),
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.keybindings.validate()?;
        Ok(config)
    }

    /// Where the snapshot lives: the configured path, or the platform data
    /// dir, or a dotfile next to the working directory as a last resort.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        if let Some(path) = &self.storage.path {
            return path.clone();
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".kanban").join(SNAPSHOT_FILE),
            |dir| dir.join(CONFIG_DIR).join(SNAPSHOT_FILE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn expect_ok<T, E: std::fmt::Display>(result: Result<T, E>, ctx: &str) -> T {
        match result {
            Ok(value) => value,
            Err(err) => panic!("{ctx}: {err}"),
        }
    }

    #[test]
    fn missing_config_yields_defaults() {
        let dir = expect_ok(tempdir(), "must create tempdir");
        let config = expect_ok(
            Config::load(Some(&dir.path().join("nope.toml"))),
            "must load defaults",
        );
        assert!(config.storage.path.is_none());
        assert!(!config.keybindings.quit.is_empty());
    }

    #[test]
    fn config_overrides_storage_path_and_keys() {
        let dir = expect_ok(tempdir(), "must create tempdir");
        let path = dir.path().join(CONFIG_FILE);
        expect_ok(
            fs::write(
                &path,
                "[storage]\npath = \"/tmp/elsewhere.json\"\n\n[keybindings]\nquit = [\"ctrl+c\"]\n",
            ),
            "must write config",
        );

        let config = expect_ok(Config::load(Some(&path)), "must load config");
        assert_eq!(config.storage_path(), PathBuf::from("/tmp/elsewhere.json"));
        assert_eq!(config.keybindings.quit, ["ctrl+c"]);
        // Unspecified actions keep their defaults.
        assert_eq!(config.keybindings.new_task, ["n", "N"]);
    }

    #[test]
    fn invalid_key_spec_is_a_load_error() {
        let dir = expect_ok(tempdir(), "must create tempdir");
        let path = dir.path().join(CONFIG_FILE);
        expect_ok(
            fs::write(&path, "[keybindings]\nquit = [\"hyper+q\"]\n"),
            "must write config",
        );
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn key_specs_parse_to_codes_and_modifiers() {
        assert_eq!(
            expect_ok(parse_key_spec("Esc"), "Esc"),
            (KeyCode::Esc, KeyModifiers::NONE)
        );
        assert_eq!(
            expect_ok(parse_key_spec("n"), "n"),
            (KeyCode::Char('n'), KeyModifiers::NONE)
        );
        assert_eq!(
            expect_ok(parse_key_spec("N"), "N"),
            (KeyCode::Char('N'), KeyModifiers::SHIFT)
        );
        assert_eq!(
            expect_ok(parse_key_spec("ctrl+d"), "ctrl+d"),
            (KeyCode::Char('d'), KeyModifiers::CONTROL)
        );
        assert!(parse_key_spec("Hyper").is_err());
        assert!(parse_key_spec("").is_err());
    }

    #[test]
    fn default_bindings_match_expected_keys() {
        let keys = KeyBindingsConfig::default();
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert!(keys.matches(Action::Quit, &press(KeyCode::Char('q'))));
        assert!(keys.matches(Action::NewTask, &press(KeyCode::Char('n'))));
        assert!(keys.matches(Action::MoveCard, &press(KeyCode::Enter)));
        assert!(keys.matches(Action::DeleteTask, &press(KeyCode::Delete)));
        assert!(!keys.matches(Action::Quit, &press(KeyCode::Char('x'))));
    }
}
