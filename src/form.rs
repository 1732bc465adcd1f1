//! Interactive configuration source: a terminal rendition of the original
//! command-build form.
//!
//! The field-disabling rules live here, not in the core: non-Linux hosts
//! only pass CPU through, and NCS2 cannot be combined with HDDL.

use crate::display::print_warning;
use crate::helpers::proxy_from_env;
use crate::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use workbench_core::{CommandConfig, Device, OperatingSystem, StartMode};

/// Run the prompt flow and return the resulting configuration.
pub fn run_form() -> Result<CommandConfig> {
    let theme = ColorfulTheme::default();

    let docker_installed = Confirm::with_theme(&theme)
        .with_prompt("Is Docker already installed?")
        .default(true)
        .interact()?;

    let os = prompt_operating_system(&theme)?;
    let devices = prompt_devices(&theme, os)?;

    let start_options = ["Python starter (pip package)", "Docker"];
    let start_index = Select::with_theme(&theme)
        .with_prompt("Start the DL Workbench with")
        .items(&start_options)
        .default(0)
        .interact()?;
    let start_mode = if start_index == 1 {
        StartMode::Docker
    } else {
        StartMode::Python
    };

    let http_proxy = prompt_proxy(&theme, "HTTP proxy", "http_proxy")?;
    let https_proxy = prompt_proxy(&theme, "HTTPS proxy", "https_proxy")?;
    let no_proxy = prompt_proxy(&theme, "No-proxy hosts", "no_proxy")?;

    Ok(CommandConfig {
        docker_installed,
        os,
        devices,
        start_mode,
        http_proxy,
        https_proxy,
        no_proxy,
    })
}

fn prompt_operating_system(theme: &ColorfulTheme) -> Result<OperatingSystem> {
    let options = [
        OperatingSystem::Linux,
        OperatingSystem::Windows,
        OperatingSystem::MacOs,
    ];
    let labels = ["Linux", "Windows", "macOS"];
    let detected = OperatingSystem::detect();
    let default_index = options.iter().position(|os| *os == detected).unwrap_or(0);

    let index = Select::with_theme(theme)
        .with_prompt("Operating system")
        .items(&labels)
        .default(default_index)
        .interact()?;
    Ok(options[index])
}

fn prompt_devices(theme: &ColorfulTheme, os: OperatingSystem) -> Result<Vec<Device>> {
    let mut devices = vec![Device::Cpu];

    // Only Linux hosts can pass extra devices into the container
    if os != OperatingSystem::Linux {
        return Ok(devices);
    }

    let options = [Device::Gpu, Device::Ncs2, Device::Hddl];
    let labels = ["GPU", "NCS2 (MYRIAD)", "HDDL"];
    loop {
        let selection = MultiSelect::with_theme(theme)
            .with_prompt("Additional devices (CPU is always enabled)")
            .items(&labels)
            .interact()?;
        let picked: Vec<Device> = selection.iter().map(|&index| options[index]).collect();

        if picked.contains(&Device::Ncs2) && picked.contains(&Device::Hddl) {
            print_warning("NCS2 and HDDL cannot be enabled at the same time.");
            continue;
        }

        devices.extend(picked);
        return Ok(devices);
    }
}

fn prompt_proxy(theme: &ColorfulTheme, prompt: &str, env_name: &str) -> Result<Option<String>> {
    let mut input = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(env_value) = proxy_from_env(env_name) {
        input = input.default(env_value);
    }

    let value: String = input.interact_text()?;
    Ok(if value.is_empty() { None } else { Some(value) })
}
