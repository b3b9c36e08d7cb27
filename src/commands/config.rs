//! Config subcommands handler

use anyhow::Result;

use castscribe::Config;

/// Show the effective configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{}", toml_str);
    Ok(())
}

/// Write the defaults to the config file, leaving an existing file alone.
pub fn handle_init() -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }

    Config::default().save()?;
    println!("Created config: {}", path.display());
    Ok(())
}

/// Print where the config file is read from.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
