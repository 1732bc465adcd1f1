//! Serialization of the accumulated parameters into the displayed command
//! strings, plus assembly of the full startup guide (install step, pull
//! step, start command, HDDL daemon note).

use crate::models::{CommandConfig, CommandDefaults, Device, OperatingSystem, StartMode};
use crate::params::{DockerParametersBuilder, ParametersBuilder, PythonParametersBuilder};
use serde::Serialize;

/// How rendered parameters are joined into the final string.
///
/// `SingleLine` joins with single spaces. `MultiLine` is what the original
/// form displays: each parameter on its own indented line behind an
/// OS-specific continuation symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandLayout {
    #[default]
    SingleLine,
    MultiLine,
}

fn continuation_symbol(os: OperatingSystem) -> &'static str {
    match os {
        OperatingSystem::Windows => "^",
        OperatingSystem::Linux | OperatingSystem::MacOs => "\\",
    }
}

/// Pure transform from a [`CommandConfig`] to command strings.
///
/// Stateless across calls: every invocation allocates a fresh builder, so
/// repeated calls with the same configuration yield identical output.
pub struct CommandFormatter<'a> {
    defaults: &'a CommandDefaults,
    layout: CommandLayout,
}

impl<'a> CommandFormatter<'a> {
    pub fn new(defaults: &'a CommandDefaults, layout: CommandLayout) -> Self {
        Self { defaults, layout }
    }

    /// Render the full starting command for the selected start mode.
    pub fn start_command(&self, config: &CommandConfig) -> String {
        let mut builder: Box<dyn ParametersBuilder> = match config.start_mode {
            StartMode::Docker => Box::new(DockerParametersBuilder::new(self.defaults)),
            StartMode::Python => Box::new(PythonParametersBuilder::new(self.defaults)),
        };
        builder.add_device_parameters(&config.devices);
        builder.add_proxy_parameters(
            config.http_proxy.as_deref(),
            config.https_proxy.as_deref(),
            config.no_proxy.as_deref(),
        );

        let executable = match config.start_mode {
            StartMode::Python => &self.defaults.python_wrapper_name,
            StartMode::Docker => &self.defaults.docker_run_command,
        };
        let rendered: Vec<String> = builder
            .parameters()
            .iter()
            .map(|parameter| parameter.render())
            .collect();

        match self.layout {
            CommandLayout::SingleLine => format!("{} {}", executable, rendered.join(" ")),
            CommandLayout::MultiLine => {
                let continuation = continuation_symbol(config.os);
                let separator = format!(" {}\n\t", continuation);
                format!("{}{}{}", executable, separator, rendered.join(&separator))
            }
        }
    }

    /// `docker pull` command for the containerized mode pre-step.
    pub fn pull_command(&self) -> String {
        self.defaults.pull_image_command()
    }

    /// pip install command for the direct-process mode pre-step.
    pub fn install_wrapper_command(&self) -> String {
        self.defaults.install_wrapper_command()
    }
}

/// Everything the result section displays for one configuration.
///
/// `install_command` is present in Python mode, `pull_command` in Docker
/// mode, and `hddl_daemon_command` whenever HDDL is among the selected
/// devices (the daemon must already run on the host).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartupGuide {
    pub install_command: Option<String>,
    pub pull_command: Option<String>,
    pub start_command: String,
    pub hddl_daemon_command: Option<String>,
}

impl StartupGuide {
    pub fn assemble(
        config: &CommandConfig,
        defaults: &CommandDefaults,
        layout: CommandLayout,
    ) -> Self {
        let formatter = CommandFormatter::new(defaults, layout);
        let install_command = (config.start_mode == StartMode::Python)
            .then(|| formatter.install_wrapper_command());
        let pull_command =
            (config.start_mode == StartMode::Docker).then(|| formatter.pull_command());
        let hddl_daemon_command = config
            .has_device(Device::Hddl)
            .then(|| defaults.hddl_daemon_command.clone());

        Self {
            install_command,
            pull_command,
            start_command: formatter.start_command(config),
            hddl_daemon_command,
        }
    }
}
