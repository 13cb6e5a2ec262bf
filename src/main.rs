use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let catalog_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("library.json"));

    shelfkeeper::interface::menu::run(catalog_path)
}
