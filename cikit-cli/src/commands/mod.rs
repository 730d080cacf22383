pub mod apply_docs;
pub mod buf;
pub mod compose;
pub mod diff_docs;
pub mod dockerfile;
pub mod frontend;
pub mod frontend_dir;
pub mod plugins;
pub mod security;
pub mod target_repos;
