use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::desktop::components::background::Background;
use crate::desktop::components::desktop_files::DesktopFiles;
use crate::desktop::components::dock::Dock;
use crate::desktop::components::menu_bar::MenuBar;
use crate::desktop::components::project_folders::ProjectFolders;
use crate::desktop::components::todo_note::ToDoNote;
use crate::desktop::components::welcome::Welcome;
use crate::desktop::geometry::Viewport;
use crate::desktop::state::DesktopUi;
use crate::desktop::styles::DESKTOP_STYLES;
use crate::interop::{self, track_viewport, KeyListener};
use crate::windows::WindowLayer;

#[component]
pub fn DesktopShell() -> Element {
    // Shared with every icon and window below.
    let viewport = use_context_provider(|| Signal::new(interop::viewport()));
    let mut ui = use_context_provider(|| Signal::new(DesktopUi::new(viewport())));

    use_hook(move || track_viewport(viewport));

    use_effect(move || {
        let current: Viewport = viewport();
        ui.write().set_viewport(current);
    });

    // Escape closes the gallery and messages windows; removed with the shell.
    use_hook(move || {
        Rc::new(KeyListener::install(move |key| {
            if key == "Escape" {
                let closed = ui.write().escape();
                if !closed.is_empty() {
                    debug!("Escape closed {closed:?}");
                }
            }
        }))
    });

    rsx! {
        style { {DESKTOP_STYLES} }
        main {
            class: "desktop",
            Background {}
            Welcome {}
            MenuBar {}
            ToDoNote {}
            DesktopFiles {}
            ProjectFolders {}
            WindowLayer {}
            Dock {}
        }
    }
}
