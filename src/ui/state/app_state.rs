use dioxus::prelude::{use_signal, Signal};

use crate::usecase::services::view_controller::ViewController;

pub struct AppState {
    pub controller: Signal<ViewController>,
    pub source_label: Signal<String>,
    pub status: Signal<String>,
}

impl AppState {
    /// Must be called from a component body, like any hook. The initializers
    /// only run on the first render.
    pub fn new(
        controller: impl FnOnce() -> ViewController,
        source_label: impl FnOnce() -> String,
    ) -> Self {
        Self {
            controller: use_signal(controller),
            source_label: use_signal(source_label),
            status: use_signal(String::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use dioxus::prelude::*;

    use super::*;
    use crate::config::TableConfig;
    use crate::domain::entities::dataset::Dataset;

    static CONTROLLER_INITS: AtomicUsize = AtomicUsize::new(0);
    static RENDERS: AtomicUsize = AtomicUsize::new(0);

    #[component]
    fn Host() -> Element {
        RENDERS.fetch_add(1, Ordering::SeqCst);
        let state = AppState::new(
            || {
                CONTROLLER_INITS.fetch_add(1, Ordering::SeqCst);
                ViewController::new(&TableConfig::default(), Dataset::default())
            },
            || "people.csv".to_string(),
        );
        let label = state.source_label;

        rsx! { "{label}" }
    }

    #[test]
    fn controller_is_built_once_across_renders() {
        let mut dom = VirtualDom::new(Host);
        dom.rebuild_to_vec();
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();

        assert_eq!(RENDERS.load(Ordering::SeqCst), 2, "host should render twice");
        assert_eq!(CONTROLLER_INITS.load(Ordering::SeqCst), 1);
    }
}
