use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::config::{project_dirs, TableColors};
use crate::infra::import::open_source;
use crate::ui::components::DataTable;
use crate::ui::state::app_state::AppState;
use crate::ui::style::{root_container_style, toolbar_style};
use crate::usecase::services::load_service::LoadService;
use crate::usecase::services::view_controller::ViewController;

const TABLE_EXTENSIONS: [&str; 5] = ["csv", "xlsx", "xlsm", "xls", "ods"];

/// What the desktop window starts with.
#[derive(Debug, Clone)]
pub struct LaunchData {
    pub controller: ViewController,
    pub colors: TableColors,
    pub id_field: String,
    pub source_label: String,
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs().ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}

pub fn launch(data: LaunchData) -> Result<()> {
    let webview_data_dir = default_webview_data_dir()?;
    let title = format!("{} - Data Table", data.source_label);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title(title))
                .with_data_directory(webview_data_dir),
        )
        .with_context(data)
        .launch(App);
    Ok(())
}

#[component]
pub fn App() -> Element {
    let data = use_hook(|| Rc::new(consume_context::<LaunchData>()));
    let AppState {
        mut controller,
        mut source_label,
        mut status,
    } = AppState::new(
        || data.controller.clone(),
        || data.source_label.clone(),
    );
    let colors = data.colors.clone();
    let id_field = data.id_field.clone();

    let open_file = move |_: Event<MouseData>| {
        let Some(path) = FileDialog::new()
            .add_filter("Tables", &TABLE_EXTENSIONS)
            .pick_file()
        else {
            return;
        };

        let loaded = open_source(&path, None, &id_field)
            .and_then(|source| LoadService::new(source).load());
        match loaded {
            Ok(dataset) => {
                let row_count = dataset.len();
                controller.write().set_data(dataset);
                source_label.set(path.display().to_string());
                status.set(format!("Loaded {row_count} rows"));
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to open dataset");
                status.set(format!("Failed to open file: {err}"));
            }
        }
    };

    let label = source_label();
    let message = status();

    rsx! {
        div { style: "{root_container_style()}",
            div { style: "{toolbar_style()}",
                span { style: "font-weight: 700;", "{label}" }
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                    onclick: open_file,
                    "Open file"
                }
            }
            if !message.is_empty() {
                p { "{message}" }
            }
            DataTable { controller: controller, colors: colors }
        }
    }
}
