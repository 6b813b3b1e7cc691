use std::path::Path;

use serde::de::DeserializeOwned;

use super::Catalog;
use crate::error::{AppError, AppResult};

const USERS_FILE: &str = "users.json";
const OFFERS_FILE: &str = "offers.json";
const BOOKINGS_FILE: &str = "bookings.json";

/// Loads the static catalog from the JSON fixtures in `data_dir`
///
/// Any unreadable or malformed file fails the whole load; the service has
/// no partially loaded mode.
pub fn load_catalog(data_dir: impl AsRef<Path>) -> AppResult<Catalog> {
    let data_dir = data_dir.as_ref();

    let users = read_records(&data_dir.join(USERS_FILE))?;
    let offers = read_records(&data_dir.join(OFFERS_FILE))?;
    let bookings = read_records(&data_dir.join(BOOKINGS_FILE))?;

    let catalog = Catalog::from_parts(users, offers, bookings)?;

    tracing::info!(
        data_dir = %data_dir.display(),
        users = catalog.users().len(),
        offers = catalog.offers().len(),
        "Loaded static catalog"
    );

    Ok(catalog)
}

fn read_records<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AppError::DataLoad(format!("Failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&contents)
        .map_err(|e| AppError::DataLoad(format!("Failed to parse {}: {}", path.display(), e)))
}
