use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use shared_types::Project;

use crate::api::fetch_projects;
use crate::desktop::geometry::Anchor;
use crate::desktop::hooks::{use_drag, use_loaded};
use crate::desktop::layout::{folder_preset, FOLDER_ICON_URL, FOLDER_PRESETS};
use crate::desktop::state::{DesktopUi, IconId, WindowSpec};
use crate::interop::now_ms;

/// Folders shown on the desktop: the listed projects with trimmed names, or
/// the preset folders (without files) when the listing is empty.
pub fn desktop_folders(listed: &[Project]) -> Vec<Project> {
    if listed.is_empty() {
        return FOLDER_PRESETS
            .iter()
            .map(|preset| Project::new(preset.name, Vec::new()))
            .collect();
    }
    listed
        .iter()
        .map(|project| Project::new(project.name.trim(), project.files.clone()))
        .collect()
}

#[component]
pub fn ProjectFolders() -> Element {
    let listed = use_loaded(Vec::<Project>::new, || async {
        match fetch_projects().await {
            Ok(response) => response.projects,
            Err(e) => {
                warn!("Failed to load projects: {e}");
                Vec::new()
            }
        }
    });
    let folders = desktop_folders(&listed.read());

    rsx! {
        for project in folders.iter().cloned() {
            FolderIcon { key: "{project.name}", project, all: folders.clone() }
        }
    }
}

#[component]
fn FolderIcon(project: Project, all: Vec<Project>) -> Element {
    let mut ui = use_context::<Signal<DesktopUi>>();
    let drag = use_drag(Anchor::TopRight);

    let id = IconId::folder(&project.name);
    let preset = folder_preset(&project.name);
    let position = ui.read().icon_position(&id);
    let name = project.name.clone();

    let drag_for_down = drag.clone();
    let id_for_down = id.clone();
    let on_pointer_down = move |e: PointerEvent| {
        e.prevent_default();
        let from = ui.peek().icon_position(&id_for_down);
        let id = id_for_down.clone();
        drag_for_down.start(&e, from, move |next| {
            ui.write().set_icon_position(id.clone(), next);
        });
    };

    let on_click = move |_| {
        if drag.suppresses_click() {
            return;
        }
        let spec = WindowSpec::Projects {
            current: project.clone(),
            all: all.clone(),
        };
        ui.write().open(spec, now_ms());
    };

    rsx! {
        div {
            class: "folder",
            style: "right: {position.x}px; top: {position.y}px; width: {preset.width}px; height: {preset.height}px;",
            onpointerdown: on_pointer_down,
            div {
                class: "folder-item",
                role: "button",
                tabindex: "0",
                onclick: on_click,
                img { src: FOLDER_ICON_URL, alt: "Folder icon for {name}" }
                p { class: "desktop-label", style: "margin: 5px 0 0 0;", "{name}" }
            }
        }
    }
}
