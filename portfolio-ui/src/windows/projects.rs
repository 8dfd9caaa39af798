//! Finder-like browser over the project folders.

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use shared_types::{LinkDescriptor, Project, ProjectFile};

use crate::api::fetch_json;
use crate::content::{
    cache_busted, file_glyph, file_label, is_link_file, ABOUT_NOTE_PATH, RESUME_PDF_PATH,
};
use crate::desktop::components::window_chrome::FloatingWindow;
use crate::desktop::layout::PROJECTS_FRAME;
use crate::desktop::state::{DesktopUi, WindowKind, WindowSpec};
use crate::interop::{now_ms, open_external};

const SIDEBAR_PRIMARY: [&str; 4] = ["Work", "About Me", "Resume", "Trash"];

/// What a primary sidebar entry opens, if anything.
pub fn sidebar_target(entry: &str) -> Option<WindowSpec> {
    match entry {
        "About Me" => Some(WindowSpec::web_view(ABOUT_NOTE_PATH, "About Me")),
        "Resume" => Some(WindowSpec::web_view(RESUME_PDF_PATH, "Resume.pdf")),
        _ => None,
    }
}

/// Follow a `.json`/`.xyd` link file: fetched fresh, then opened either in a
/// new tab or in the web view. Unreadable files are ignored.
async fn follow_link(mut ui: Signal<DesktopUi>, file: ProjectFile) {
    let descriptor = match fetch_json::<LinkDescriptor>(&cache_busted(&file.url, now_ms())).await {
        Ok(descriptor) => descriptor,
        Err(e) => {
            debug!("Ignoring unreadable link file {}: {e}", file.name);
            return;
        }
    };
    let Some(target) = descriptor.target() else {
        return;
    };
    if descriptor.opens_externally() {
        open_external(target);
    } else {
        ui.write()
            .open(WindowSpec::web_view(target, file_label(&file.name)), now_ms());
    }
}

#[component]
pub fn ProjectsWindow() -> Element {
    let ui = use_context::<Signal<DesktopUi>>();
    let Some(WindowSpec::Projects { current, all }) = ui
        .read()
        .window(WindowKind::Projects)
        .map(|window| window.spec.clone())
    else {
        return rsx! {};
    };

    rsx! {
        FloatingWindow {
            kind: WindowKind::Projects,
            title: current.name.clone(),
            width: PROJECTS_FRAME.width,
            div {
                class: "projects-body",
                Sidebar { current: current.name.clone(), all }
                FileGrid { project: current }
            }
        }
    }
}

#[component]
fn Sidebar(current: String, all: Vec<Project>) -> Element {
    let mut ui = use_context::<Signal<DesktopUi>>();
    let current = current.to_lowercase();

    rsx! {
        aside {
            class: "projects-sidebar",
            h4 { "Section Header" }
            ul {
                for entry in SIDEBAR_PRIMARY {
                    li {
                        key: "{entry}",
                        button {
                            r#type: "button",
                            class: "sidebar-entry",
                            onclick: move |_| {
                                if let Some(spec) = sidebar_target(entry) {
                                    ui.write().open(spec, now_ms());
                                }
                            },
                            "▫ {entry}"
                        }
                    }
                }
            }
            h4 { "Section Header" }
            ul {
                for project in all {
                    li {
                        key: "{project.name}",
                        button {
                            r#type: "button",
                            class: if project.name.to_lowercase() == current { "sidebar-entry active" } else { "sidebar-entry" },
                            onclick: {
                                let name = project.name.clone();
                                move |_| {
                                    ui.write().select_project(&name);
                                }
                            },
                            "▫ {project.name}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FileGrid(project: Project) -> Element {
    let ui = use_context::<Signal<DesktopUi>>();

    rsx! {
        section {
            class: "files-grid",
            if project.files.is_empty() {
                div { class: "files-empty", "No files in this folder yet." }
            }
            for file in project.files {
                if is_link_file(&file.name) {
                    button {
                        key: "{file.url}",
                        r#type: "button",
                        class: "file-entry",
                        onclick: {
                            let file = file.clone();
                            move |_| {
                                spawn(follow_link(ui, file.clone()));
                            }
                        },
                        div { class: "glyph", {file_glyph(&file.name).emoji()} }
                        span { class: "desktop-label", {file_label(&file.name)} }
                    }
                } else {
                    a {
                        key: "{file.url}",
                        class: "file-entry",
                        href: "{file.url}",
                        target: "_blank",
                        rel: "noreferrer",
                        div { class: "glyph", {file_glyph(&file.name).emoji()} }
                        span { class: "desktop-label", {file_label(&file.name)} }
                    }
                }
            }
        }
    }
}
