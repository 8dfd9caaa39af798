pub mod background;
pub mod desktop_files;
pub mod dock;
pub mod menu_bar;
pub mod project_folders;
pub mod todo_note;
pub mod welcome;
pub mod window_chrome;
