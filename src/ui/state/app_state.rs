use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::session::{SessionFileList, SessionPhase};

pub struct AppState {
    pub files: Signal<SessionFileList>,
    pub phase: Signal<SessionPhase>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            files: use_signal(SessionFileList::new),
            phase: use_signal(SessionPhase::default),
            status: use_signal(|| "就緒".to_string()),
        }
    }
}
