//! Commands for the search / filter / sort view and the monthly summary

use crate::domain::RentalRecord;
use crate::query::{self, parse_status_filter, SortOption, ViewOptions};
use crate::summary::Summary;
use crate::AppState;

pub async fn set_search_term(state: &AppState, term: String) -> Result<(), String> {
    state.view.lock().await.search_term = term;
    Ok(())
}

/// "Pending", "Paid", or "" to clear
pub async fn set_filter_status(state: &AppState, status: String) -> Result<(), String> {
    let status = parse_status_filter(&status).map_err(|e| e.to_string())?;
    state.view.lock().await.filter_status = status;
    Ok(())
}

/// "dueDate", "rentAmount", or "" to clear
pub async fn set_sort_option(state: &AppState, sort: String) -> Result<(), String> {
    let sort = SortOption::parse(&sort).map_err(|e| e.to_string())?;
    state.view.lock().await.sort = sort;
    Ok(())
}

pub async fn get_view_options(state: &AppState) -> Result<ViewOptions, String> {
    Ok(state.view.lock().await.clone())
}

/// Records to display under the current view options
pub async fn list_view(state: &AppState) -> Result<Vec<RentalRecord>, String> {
    let options = state.view.lock().await.clone();
    let store = state.store.lock().await;
    Ok(query::apply(store.records(), &options))
}

/// Totals over the whole store, independent of the view
pub async fn summary(state: &AppState) -> Result<Summary, String> {
    let store = state.store.lock().await;
    Ok(Summary::from_records(store.records()))
}
