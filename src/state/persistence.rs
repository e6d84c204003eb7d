use serde::{Deserialize, Serialize};

use super::Items;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedState {
    pub items: Items,
}

#[derive(Debug, Clone)]
pub enum LoadError {
    File,
    Format,
}

#[derive(Debug, Clone)]
pub enum SaveError {
    Write,
    Format,
}

#[cfg(not(target_arch = "wasm32"))]
impl SavedState {
    pub fn path() -> std::path::PathBuf {
        let mut path = if let Some(project_dirs) =
            directories::ProjectDirs::from("rs", "ShoppingList", "ShoppingList")
        {
            project_dirs.data_dir().into()
        } else {
            std::env::current_dir().unwrap_or_default()
        };

        path.push("items.json");
        path
    }

    pub async fn load() -> Result<SavedState, LoadError> {
        Self::load_from(&Self::path()).await
    }

    pub async fn save(self) -> Result<(), SaveError> {
        self.save_to(&Self::path()).await?;

        tokio::time::sleep(std::time::Duration::from_secs(2)).await;

        Ok(())
    }

    pub async fn wipe() -> Result<(), SaveError> {
        Self::wipe_at(&Self::path()).await
    }

    async fn load_from(path: &std::path::Path) -> Result<SavedState, LoadError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|_| LoadError::File)?;

        serde_json::from_str(&contents).map_err(|_| LoadError::Format)
    }

    async fn save_to(&self, path: &std::path::Path) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(self).map_err(|_| SaveError::Format)?;

        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|_| SaveError::Write)?;
        }

        tokio::fs::write(path, json.as_bytes())
            .await
            .map_err(|_| SaveError::Write)?;

        Ok(())
    }

    async fn wipe_at(path: &std::path::Path) -> Result<(), SaveError> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(_) => Err(SaveError::Write),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl SavedState {
    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        window.local_storage().ok()?
    }

    pub async fn load() -> Result<SavedState, LoadError> {
        let storage = Self::storage().ok_or(LoadError::File)?;

        let contents = storage
            .get_item("items")
            .map_err(|_| LoadError::File)?
            .ok_or(LoadError::File)?;

        serde_json::from_str(&contents).map_err(|_| LoadError::Format)
    }

    pub async fn save(self) -> Result<(), SaveError> {
        let storage = Self::storage().ok_or(SaveError::Write)?;

        let json = serde_json::to_string_pretty(&self).map_err(|_| SaveError::Format)?;

        storage
            .set_item("items", &json)
            .map_err(|_| SaveError::Write)?;

        wasmtimer::tokio::sleep(std::time::Duration::from_secs(2)).await;

        Ok(())
    }

    pub async fn wipe() -> Result<(), SaveError> {
        let storage = Self::storage().ok_or(SaveError::Write)?;

        storage.remove_item("items").map_err(|_| SaveError::Write)?;

        Ok(())
    }
}
