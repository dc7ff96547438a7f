use std::{fs::create_dir_all, path::PathBuf};

use xdg::BaseDirectories;

/// Returns the path to the Folio configuration directory. If it doesn't exist when this
/// function is called, it will be created.
pub fn config_dir() -> PathBuf {
    let path = xdg_prefix().get_config_home().expect("$HOME must exist");

    create_dir_all(&path).unwrap();

    path
}

fn xdg_prefix() -> BaseDirectories {
    xdg::BaseDirectories::with_prefix("folio")
}
