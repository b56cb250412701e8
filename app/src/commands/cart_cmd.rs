//! Commands for the add/edit form and record mutations

use crate::domain::{FormField, RentalForm, RentalRecord};
use crate::AppState;

/// Update one form input
pub async fn set_form_field(state: &AppState, field: String, value: String) -> Result<(), String> {
    let field = FormField::parse(&field).map_err(|e| e.to_string())?;
    state.form.lock().await.set(field, &value);
    Ok(())
}

/// Current form contents
pub async fn get_form(state: &AppState) -> Result<RentalForm, String> {
    Ok(state.form.lock().await.clone())
}

/// "Add / Save Cart": add a new cart, or replace the one being edited,
/// then clear the form. On failure the form keeps what the user typed.
pub async fn submit_form(state: &AppState) -> Result<RentalRecord, String> {
    let mut form = state.form.lock().await;
    let record = form.to_record();
    let mut store = state.store.lock().await;
    let saved = match form.editing.clone() {
        Some(original_id) => store.update(&original_id, record).await,
        None => store.add(record).await,
    }
    .map_err(|e| e.to_string())?;
    form.reset();
    Ok(saved)
}

/// Load an existing record into the form for editing
pub async fn edit_cart(state: &AppState, cart_id: String) -> Result<RentalForm, String> {
    let form = {
        let store = state.store.lock().await;
        let record = store
            .get(&cart_id)
            .ok_or_else(|| format!("Cart {} not found", cart_id))?;
        RentalForm::from_record(record)
    };
    *state.form.lock().await = form.clone();
    Ok(form)
}

pub async fn delete_cart(state: &AppState, cart_id: String) -> Result<usize, String> {
    let mut store = state.store.lock().await;
    store.remove(&cart_id).await.map_err(|e| e.to_string())
}

pub async fn mark_paid(state: &AppState, cart_id: String) -> Result<usize, String> {
    let mut store = state.store.lock().await;
    store.mark_paid(&cart_id).await.map_err(|e| e.to_string())
}

/// All records in store order
pub async fn list_carts(state: &AppState) -> Result<Vec<RentalRecord>, String> {
    Ok(state.store.lock().await.list())
}

/// Discard the form, leaving edit mode
pub async fn clear_form(state: &AppState) -> Result<(), String> {
    state.form.lock().await.reset();
    Ok(())
}
