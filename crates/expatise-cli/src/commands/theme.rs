use anyhow::Result;

use expatise_core::{
    theme::{detect_prefers_dark, FileThemeStore},
    AppConfig, ThemeMode, ThemePreference,
};

fn preference(config: &AppConfig) -> ThemePreference<FileThemeStore> {
    ThemePreference::hydrate(FileThemeStore::new(config.data_dir()), detect_prefers_dark())
}

pub fn show(config: &AppConfig) -> Result<()> {
    println!("{}", preference(config).mode());
    Ok(())
}

pub fn toggle(config: &AppConfig) -> Result<()> {
    let mode = preference(config).toggle()?;
    println!("Switched to {} mode", mode);
    Ok(())
}

pub fn set(config: &AppConfig, mode: ThemeMode) -> Result<()> {
    preference(config).set(mode)?;
    println!("Theme set to {}", mode);
    Ok(())
}
