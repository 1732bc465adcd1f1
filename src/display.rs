use colored::Colorize;
use workbench_core::{CommandConfig, OperatingSystem, StartupGuide};

/// Status messages
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// A command the user is expected to copy and run, set apart from the
/// surrounding text.
pub fn print_command_block(command: &str) {
    println!();
    println!("{}", command.cyan());
    println!();
}

fn print_step(step: usize, title: &str) {
    println!("{} {}", format!("Step {}:", step).blue().bold(), title.bold());
}

fn docker_install_hint(os: OperatingSystem) -> &'static str {
    match os {
        OperatingSystem::Windows => {
            "Install Docker Desktop with the WSL 2 backend: \
             https://docs.docker.com/desktop/install/windows-install/"
        }
        OperatingSystem::MacOs => {
            "Install Docker Desktop for Mac: \
             https://docs.docker.com/desktop/install/mac-install/"
        }
        OperatingSystem::Linux => {
            "Install Docker Engine: https://docs.docker.com/engine/install/"
        }
    }
}

/// Print the assembled startup guide as numbered steps.
///
/// Step order mirrors the original result section: Docker installation
/// hint (when Docker is missing), the mode-specific pre-step (pip install
/// or image pull), the HDDL daemon note, then the starting command.
pub fn print_guide(config: &CommandConfig, guide: &StartupGuide) {
    let mut step = 1;

    if !config.docker_installed {
        print_step(step, "Install Docker");
        println!("{}", docker_install_hint(config.os));
        println!();
        step += 1;
    }

    if let Some(install_command) = &guide.install_command {
        print_step(step, "Install the DL Workbench starter package");
        print_command_block(install_command);
        step += 1;
    }

    if let Some(pull_command) = &guide.pull_command {
        print_step(step, "Pull the DL Workbench image");
        print_command_block(pull_command);
        step += 1;
    }

    if let Some(daemon_command) = &guide.hddl_daemon_command {
        print_step(step, "Make sure the HDDL daemon is running on the host");
        print_command_block(daemon_command);
        step += 1;
    }

    print_step(step, "Start the DL Workbench");
    print_command_block(&guide.start_command);
}
