//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::commands;
use crate::controller::{Controller, Msg, Notice, Update};
use crate::repository::Storage;
use crate::state::{store_apply_update, AppStore};

pub type AppController = Controller<Box<dyn Storage>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Rendered state - read by components
    pub store: AppStore,
    /// Owns storage, filter and edit session; browser storage is not `Send`
    controller: StoredValue<AppController, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, controller: AppController) -> Self {
        Self {
            store,
            controller: StoredValue::new_local(controller),
        }
    }

    /// Run one message through the controller and apply its effects.
    ///
    /// Returns the update so callers can react to form-specific flags.
    pub fn dispatch(&self, msg: Msg) -> Option<Update> {
        log::debug!("dispatch {:?}", msg);
        let update = self.controller.try_update_value(|controller| controller.update(msg))?;

        store_apply_update(&self.store, &update);
        if let Some(file) = &update.download {
            if let Err(e) = commands::download_text(&file.file_name, &file.contents, "application/json") {
                log::error!("Download failed: {}", e);
            }
        }
        if let Some(notice) = &update.notice {
            if let Notice::Error(text) = notice {
                log::warn!("{}", text);
            }
            commands::alert(notice.text());
        }
        Some(update)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
