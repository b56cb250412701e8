//! Commands for address-proof documents and location links

use std::path::Path;

use crate::domain::FileRef;
use crate::AppState;

/// Pick an address-proof file for the form; `None` when cancelled
pub async fn pick_file(state: &AppState) -> Result<Option<FileRef>, String> {
    let mut form = state.form.lock().await;
    state
        .attachments
        .pick_file(&mut form)
        .await
        .map_err(|e| e.to_string())
}

/// Attach a file by local path, for hosts that run their own file dialog
pub async fn attach_file(state: &AppState, path: String) -> Result<FileRef, String> {
    let mut form = state.form.lock().await;
    state
        .attachments
        .attach_path(&mut form, Path::new(&path))
        .map_err(|e| e.to_string())
}

/// Open the stored address proof of a cart
pub async fn preview_file(state: &AppState, cart_id: String) -> Result<bool, String> {
    let file = {
        let store = state.store.lock().await;
        store
            .get(&cart_id)
            .ok_or_else(|| format!("Cart {} not found", cart_id))?
            .address_proof_file
            .clone()
    };
    match file {
        Some(file) => state.attachments.open_file(&file).await.map_err(|e| e.to_string()),
        None => Ok(false),
    }
}

/// Open the cart's location link
pub async fn view_location(state: &AppState, cart_id: String) -> Result<bool, String> {
    let record = {
        let store = state.store.lock().await;
        store
            .get(&cart_id)
            .cloned()
            .ok_or_else(|| format!("Cart {} not found", cart_id))?
    };
    state
        .attachments
        .open_location(&record)
        .await
        .map_err(|e| e.to_string())
}
