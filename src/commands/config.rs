use crate::{config::StarterConfig, display::print_success, ConfigCommands, Result};

pub fn handle(action: ConfigCommands, config: StarterConfig) -> Result<()> {
    match action {
        ConfigCommands::Show => handle_show(&config),
        ConfigCommands::Path => handle_path(&config),
        ConfigCommands::Set { key, value } => handle_set(config, &key, &value),
    }
}

fn handle_show(config: &StarterConfig) -> Result<()> {
    println!("{}", config.show()?);
    Ok(())
}

fn handle_path(config: &StarterConfig) -> Result<()> {
    println!("{}", config.config_path.display());
    Ok(())
}

fn handle_set(mut config: StarterConfig, key: &str, value: &str) -> Result<()> {
    config.set_value(key, value)?;
    print_success(&format!("Set {} = {}", key, value));
    Ok(())
}
