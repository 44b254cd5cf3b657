use dioxus::prelude::*;
use tracing::warn;

use crate::common::{
    id::{DEFAULT_ID_LENGTH, generate_id},
    motion::Entrance,
};

// per-element entrance state.  the element carries data-reveal="{key}" so the
// observer script can find it, and its inline style follows the signal
#[derive(Clone, PartialEq)]
pub struct EntranceState {
    key: String,
    entrance: Entrance,
    revealed: Signal<bool>,
}

pub fn use_entrance(entrance: Entrance) -> EntranceState {
    let key = use_hook(|| generate_id(DEFAULT_ID_LENGTH));
    let revealed = use_signal(|| false);

    EntranceState {
        key,
        entrance,
        revealed,
    }
}

impl EntranceState {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn style(&self) -> String {
        self.entrance.style((self.revealed)())
    }

    // meant for onmounted.  resolves once the element has been seen, and
    // never hides it again
    pub async fn watch(self) {
        let mut revealed = self.revealed;

        if revealed() {
            return;
        }

        let mut observer = document::eval(&self.entrance.observer_script(&self.key));

        // an element stuck at opacity 0 is worse than one that skips its animation
        if let Err(err) = observer.recv::<bool>().await {
            warn!({ key = %self.key, error = ?err }, "entrance observer failed");
        }

        revealed.set(true);
    }
}
