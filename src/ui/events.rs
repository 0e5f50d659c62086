//! Event handling and key bindings

use super::app::App;
use crate::item::ItemType;
use crate::sync::SyncService;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Handle all user input events
pub async fn handle_events(event: Event, app: &mut App, sync_service: &SyncService) -> Result<bool, anyhow::Error> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // Ctrl+C always quits
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
                return Ok(true);
            }

            if app.form.is_some() {
                return handle_form_mode(key, app, sync_service).await;
            }

            if app.cloud_info.is_some() {
                return Ok(handle_cloud_info(key, app));
            }

            if app.show_logs {
                return Ok(handle_logs_dialog(key, app));
            }

            // Help panel blocks all other shortcuts while open
            if app.show_help {
                return Ok(handle_help_panel(key, app));
            }

            if app.search_active {
                return handle_search_mode(key, app, sync_service).await;
            }

            return handle_normal_mode(key, app, sync_service).await;
        }
    }
    Ok(false)
}

/// Handle events while the report form is open
async fn handle_form_mode(key: KeyEvent, app: &mut App, sync_service: &SyncService) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Esc => {
            app.close_form();
            Ok(true)
        }
        KeyCode::Enter => {
            app.submit_form(sync_service).await;
            Ok(true)
        }
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.form.as_mut() {
                form.next_field();
            }
            Ok(true)
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.form.as_mut() {
                form.prev_field();
            }
            Ok(true)
        }
        KeyCode::Backspace => {
            if let Some(form) = app.form.as_mut() {
                form.backspace();
            }
            Ok(true)
        }
        KeyCode::Char(c) if !c.is_control() => {
            if let Some(form) = app.form.as_mut() {
                form.push_char(c);
            }
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Handle events while the search box has focus
async fn handle_search_mode(key: KeyEvent, app: &mut App, sync_service: &SyncService) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Esc => {
            app.clear_search(sync_service).await;
            app.stop_search();
            Ok(true)
        }
        KeyCode::Enter => {
            // Keep the query, leave the box
            app.stop_search();
            Ok(true)
        }
        KeyCode::Backspace => {
            app.pop_search_char(sync_service).await;
            Ok(true)
        }
        KeyCode::Char(c) if !c.is_control() => {
            app.push_search_char(c, sync_service).await;
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn handle_cloud_info(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('i' | 'q') => {
            app.close_cloud_info();
            true
        }
        _ => false,
    }
}

fn handle_logs_dialog(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('g' | 'q') => {
            app.toggle_logs();
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_logs_down();
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_logs_up();
            true
        }
        _ => false,
    }
}

fn handle_help_panel(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?' | 'q') => {
            app.show_help = false;
            true
        }
        _ => false,
    }
}

/// Handle events in normal mode
async fn handle_normal_mode(key: KeyEvent, app: &mut App, sync_service: &SyncService) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            Ok(true)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.previous_item();
            Ok(true)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.next_item();
            Ok(true)
        }
        KeyCode::Char('l') => {
            app.open_form(ItemType::Lost);
            Ok(true)
        }
        KeyCode::Char('f') => {
            app.open_form(ItemType::Found);
            Ok(true)
        }
        KeyCode::Char('/') => {
            app.start_search();
            Ok(true)
        }
        KeyCode::Tab => {
            app.cycle_filter(sync_service).await;
            Ok(true)
        }
        KeyCode::Char('r') => {
            app.start_refresh(sync_service);
            Ok(true)
        }
        KeyCode::Char('i') => {
            app.open_cloud_info(sync_service).await;
            Ok(true)
        }
        KeyCode::Char('g') => {
            app.toggle_logs();
            Ok(true)
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            Ok(true)
        }
        KeyCode::Esc if !app.search_text.is_empty() => {
            app.clear_search(sync_service).await;
            Ok(true)
        }
        _ => Ok(false),
    }
}
