use crate::shared::backend;
use crate::shared::config::{REFRESH_INTERVAL_MS, UNCONFIRMED_NOTICE_DELAY_MS, VIEW_QUERY_PARAM};
use crate::shared::notify::alert;
use contracts::domain::a001_material_return::MaterialReturn;
use contracts::domain::a002_transporter_payment::TransporterPayment;
use contracts::enums::ViewId;
use contracts::shared::api::{AllData, ApiError, BackendAction, WriteOutcome};
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use web_sys::window;

/// Dialog currently open over the main layout
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveModal {
    NewEntry,
    UpdateStep(MaterialReturn),
    ForwardToKitting(MaterialReturn),
    ProcessPayment(TransporterPayment),
}

/// Application state shared by the layout and all views
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_view: RwSignal<ViewId>,
    pub data: RwSignal<AllData>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Set after the first successful fetch
    pub loaded: RwSignal<bool>,
    pub modal: RwSignal<Option<ActiveModal>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_view: RwSignal::new(view_from_url().unwrap_or(ViewId::Dashboard)),
            data: RwSignal::new(AllData::default()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            loaded: RwSignal::new(false),
            modal: RwSignal::new(None),
        }
    }

    pub fn set_view(&self, view: ViewId) {
        leptos::logging::log!("set_view: {}", view);
        self.active_view.set(view);
    }

    /// Mirrors the active view into `?view=` without adding history entries
    pub fn init_url_sync(&self) {
        let this = *self;
        Effect::new(move |_| {
            let view = this.active_view.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                VIEW_QUERY_PARAM.to_string(),
                view.code().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Fetches everything again; ignored while a fetch is in flight
    pub fn refresh(&self) {
        if self.loading.get_untracked() {
            log::debug!("refresh skipped: previous fetch still running");
            return;
        }
        self.loading.set(true);
        let this = *self;
        spawn_local(async move {
            match fetch_all_data().await {
                Ok(data) => {
                    log::debug!(
                        "data refreshed: {} returns, {} payments",
                        data.returns.len(),
                        data.payments.len()
                    );
                    this.data.set(data);
                    this.error.set(None);
                    this.loaded.set(true);
                }
                Err(e) => {
                    log::error!("data fetch failed: {}", e);
                    this.error.set(Some(format!("Failed to load data: {}", e)));
                }
            }
            this.loading.set(false);
        });
    }

    /// Starts the periodic refresh. The timer lives as long as the calling
    /// component's owner.
    pub fn start_auto_refresh(&self) {
        let this = *self;
        let interval = Interval::new(REFRESH_INTERVAL_MS, move || {
            if this.loading.get_untracked() {
                log::info!("auto-refresh tick skipped: fetch in flight");
                return;
            }
            this.refresh();
        });
        let _ = StoredValue::new_local(interval);
    }

    pub fn open_modal(&self, modal: ActiveModal) {
        self.modal.set(Some(modal));
    }

    pub fn close_modal(&self) {
        self.modal.set(None);
    }

    /// Follow-up of a successful write: refresh, and warn the user when the
    /// backend did not acknowledge it.
    pub fn after_write(&self, outcome: WriteOutcome, what: &str) {
        match outcome {
            WriteOutcome::Confirmed => self.refresh(),
            WriteOutcome::Unconfirmed => {
                let this = *self;
                let what = what.to_string();
                spawn_local(async move {
                    TimeoutFuture::new(UNCONFIRMED_NOTICE_DELAY_MS).await;
                    alert(&format!(
                        "{} was submitted, but the backend did not confirm it. Please check the records after refresh.",
                        what
                    ));
                    this.refresh();
                });
            }
        }
    }
}

async fn fetch_all_data() -> Result<AllData, ApiError> {
    let value = backend::read(BackendAction::GetAllData).await?;
    Ok(AllData::from_value(&value))
}

fn view_from_url() -> Option<ViewId> {
    let search = window()?.location().search().ok()?;
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(VIEW_QUERY_PARAM).and_then(|code| ViewId::from_code(code))
}
