mod events;

use std::sync::Arc;

use explorer_core::{
    Country, FileSlot, Itinerary, ItineraryDraft, ItineraryPatch, ItineraryStore,
    RestCountriesClient, StoreError, RESTCOUNTRIES_BASE_URL,
};
use tauri::{AppHandle, Emitter, State};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct AppState {
    itineraries: tokio::sync::Mutex<ItineraryStore>,
    lookup: RestCountriesClient,
}

#[tauri::command]
async fn search_country(state: State<'_, AppState>, name: String) -> Result<Country, String> {
    let query = name.trim();
    if query.is_empty() {
        return Err("search query cannot be empty".to_string());
    }

    state.lookup.find(query).await.map_err(|error| {
        tracing::debug!(error = %error, query = %query, "Country lookup failed");
        to_string_error(error)
    })
}

#[tauri::command]
async fn list_itineraries(state: State<'_, AppState>) -> Result<Vec<Itinerary>, String> {
    let store = state.itineraries.lock().await;
    Ok(store.get_all().to_vec())
}

#[tauri::command]
async fn get_itinerary(
    state: State<'_, AppState>,
    id: String,
) -> Result<Option<Itinerary>, String> {
    let store = state.itineraries.lock().await;
    Ok(store.get_by_id(&id).cloned())
}

#[tauri::command]
async fn save_itinerary(
    app: AppHandle,
    state: State<'_, AppState>,
    input: ItineraryDraft,
) -> Result<Itinerary, String> {
    if input.country.trim().is_empty() {
        return Err("country name is required".to_string());
    }

    let mut store = state.itineraries.lock().await;

    if let Some(id) = input.id.clone() {
        let patch = ItineraryPatch {
            country: Some(input.country.clone()),
            date: Some(input.date.clone()),
            notes: Some(input.notes.clone()),
        };

        let (updated, persisted) = store.update(&id, patch);
        log_write_failure(persisted);

        if let Some(record) = updated {
            emit_itineraries_changed(&app, store.get_all());
            return Ok(record);
        }
        // The edit targeted an id that is gone; re-insert under the same id.
    }

    let (record, persisted) = store.add(input);
    log_write_failure(persisted);

    emit_itineraries_changed(&app, store.get_all());
    Ok(record)
}

#[tauri::command]
async fn delete_itinerary(
    app: AppHandle,
    state: State<'_, AppState>,
    id: String,
) -> Result<(), String> {
    let mut store = state.itineraries.lock().await;

    let (removed, persisted) = store.delete(&id);
    log_write_failure(persisted);
    if !removed {
        tracing::debug!(id = %id, "Delete targeted an unknown itinerary id");
    }

    emit_itineraries_changed(&app, store.get_all());
    Ok(())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_tracing();

    let slot = Arc::new(FileSlot::new(resolve_data_dir()));
    let base_url = std::env::var("WORLD_EXPLORER_API_BASE")
        .unwrap_or_else(|_| RESTCOUNTRIES_BASE_URL.to_string());

    let app_state = AppState {
        itineraries: tokio::sync::Mutex::new(ItineraryStore::open(slot)),
        lookup: RestCountriesClient::with_config(reqwest::Client::new(), base_url),
    };

    tauri::Builder::default()
        .manage(app_state)
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            search_country,
            list_itineraries,
            get_itinerary,
            save_itinerary,
            delete_itinerary
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "world_explorer_lib=info,explorer_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn emit_itineraries_changed(app: &AppHandle, itineraries: &[Itinerary]) {
    let _ = app.emit(events::EVENT_ITINERARIES_CHANGED, itineraries);
}

fn log_write_failure(persisted: Result<(), StoreError>) {
    if let Err(error) = persisted {
        tracing::warn!(error = %error, "Itinerary change was kept in memory only");
    }
}

fn resolve_data_dir() -> std::path::PathBuf {
    if let Some(dir) = dirs::data_local_dir() {
        return dir.join("world-explorer");
    }

    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join(".world-explorer")
}

fn to_string_error(error: impl std::fmt::Display) -> String {
    error.to_string()
}
