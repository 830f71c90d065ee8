//! Persisted user preferences, which for this front end means the hotkey
//! table.

use crate::actions::hotkeys::{ActionsToKeys, KeysToActions};

const DOCUMENTATION: &str = r#"# pathpad hotkeys. You may edit this file, but be aware that formatting and
# comments will not be preserved, and all keys and values are case sensitive.

# Each action may have many chords bound to it, but each chord should be used
# at most once. Chords are written `[1+|2+][ctrl+][alt+][shift+]<key name>`.
# The held 1 or 2 chooses which control point the arrows steer; shift selects
# the large step.

# Examples:
# AddLine = ["KeyL"]
# MoveElementUp = ["ArrowUp", "shift+ArrowUp"]

"#;

#[must_use]
pub fn preferences_dir() -> Option<std::path::PathBuf> {
    let mut base_dir = dirs::preference_dir()?;
    base_dir.push(env!("CARGO_PKG_NAME"));
    Some(base_dir)
}

pub struct Hotkeys {
    defaulted: bool,
    pub actions_to_keys: ActionsToKeys,
    pub keys_to_actions: KeysToActions,
}
impl Hotkeys {
    const FILENAME: &'static str = "hotkeys.toml";
    /// Shared global hotkeys, loaded from user preferences, or the stock
    /// table if that fails for any reason.
    #[must_use]
    pub fn get() -> &'static Self {
        static GLOBAL_HOTKEYS: std::sync::OnceLock<Hotkeys> = std::sync::OnceLock::new();

        GLOBAL_HOTKEYS.get_or_init(|| {
            let Some(mut path) = preferences_dir() else {
                log::warn!("no preference dir, using stock hotkeys");
                return Self::stock();
            };
            path.push(Self::FILENAME);
            match Self::load(&path) {
                Ok(loaded) => loaded,
                Err(error) => {
                    log::warn!(
                        "hotkeys at {} unusable ({error}), using stock table",
                        path.display()
                    );
                    Self::stock()
                }
            }
        })
    }
    #[must_use]
    fn stock() -> Self {
        let actions_to_keys = ActionsToKeys::default();
        // Unwrap OK - the stock table is checked reversable by the Default impl.
        let keys_to_actions = (&actions_to_keys).try_into().unwrap();
        Self {
            defaulted: true,
            actions_to_keys,
            keys_to_actions,
        }
    }
    fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let actions_to_keys: ActionsToKeys = toml::from_str(&text)?;
        let keys_to_actions: KeysToActions = (&actions_to_keys).try_into()?;
        Ok(Self {
            defaulted: false,
            actions_to_keys,
            keys_to_actions,
        })
    }
    /// True when the user's own table couldn't be read and the stock one is
    /// in use. A good moment to write the stock table out for editing.
    #[must_use]
    pub fn is_defaulted(&self) -> bool {
        self.defaulted
    }
    pub fn save(&self) -> anyhow::Result<()> {
        let mut path = preferences_dir()
            .ok_or_else(|| anyhow::anyhow!("no preference dir to save hotkeys into"))?;
        // Not recursive on purpose; a missing parent means the platform gave
        // us somewhere strange. Already-exists falls through to the write.
        let _ = std::fs::DirBuilder::new().create(&path);

        path.push(Self::FILENAME);
        let table = toml::ser::to_string_pretty(&self.actions_to_keys)?;
        std::fs::write(path, format!("{DOCUMENTATION}{table}"))?;
        Ok(())
    }
}
