use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Host operating system the commands are generated for.
///
/// The variant only influences rendering (line-continuation symbol in the
/// multi-line layout) and which install instructions the CLI surfaces; the
/// parameter pipeline is OS-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Linux,
    Windows,
    MacOs,
}

impl OperatingSystem {
    /// Detect the host OS, falling back to Linux for unknown platforms.
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "windows" => OperatingSystem::Windows,
            "macos" => OperatingSystem::MacOs,
            _ => OperatingSystem::Linux,
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperatingSystem::Linux => "linux",
            OperatingSystem::Windows => "windows",
            OperatingSystem::MacOs => "macos",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for OperatingSystem {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linux" => Ok(OperatingSystem::Linux),
            "windows" => Ok(OperatingSystem::Windows),
            "macos" => Ok(OperatingSystem::MacOs),
            _ => Err(CoreError::UnknownOperatingSystem(s.to_string())),
        }
    }
}

/// Hardware accelerator target selectable for inference.
///
/// CPU is always implicitly available and never contributes command-line
/// flags; the builders only react to GPU, NCS2, and HDDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Device {
    Cpu,
    Gpu,
    Ncs2,
    Hddl,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Device::Cpu => "CPU",
            Device::Gpu => "GPU",
            Device::Ncs2 => "NCS2",
            Device::Hddl => "HDDL",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Device {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpu" => Ok(Device::Cpu),
            "gpu" => Ok(Device::Gpu),
            // The pip starter calls the NCS2 stick MYRIAD; accept both names
            "ncs2" | "myriad" => Ok(Device::Ncs2),
            "hddl" => Ok(Device::Hddl),
            _ => Err(CoreError::UnknownDevice(s.to_string())),
        }
    }
}

/// How the Workbench is launched: through the pip wrapper package or as a
/// plain `docker run` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartMode {
    #[default]
    Python,
    Docker,
}

impl fmt::Display for StartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StartMode::Python => "python",
            StartMode::Docker => "docker",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for StartMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" => Ok(StartMode::Python),
            "docker" => Ok(StartMode::Docker),
            _ => Err(CoreError::UnknownStartMode(s.to_string())),
        }
    }
}

/// Full user selection consumed by the command formatter.
///
/// The configuration sources (CLI flags, interactive form) own validation;
/// the pipeline tolerates any combination, including NCS2 and HDDL at the
/// same time or duplicated devices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandConfig {
    pub docker_installed: bool,
    pub os: OperatingSystem,
    pub devices: Vec<Device>,
    pub start_mode: StartMode,
    pub http_proxy: Option<String>,
    pub https_proxy: Option<String>,
    pub no_proxy: Option<String>,
}

impl CommandConfig {
    pub fn has_device(&self, device: Device) -> bool {
        self.devices.contains(&device)
    }
}

impl Default for CommandConfig {
    /// Initial selection of the original form: Docker present, Linux,
    /// CPU only, pip starter, no proxies.
    fn default() -> Self {
        Self {
            docker_installed: true,
            os: OperatingSystem::Linux,
            devices: vec![Device::Cpu],
            start_mode: StartMode::Python,
            http_proxy: None,
            https_proxy: None,
            no_proxy: None,
        }
    }
}

/// Constants surface shared by both builders.
///
/// Initialized once at process start (optionally overridden from the CLI
/// config file) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandDefaults {
    pub python_wrapper_name: String,
    pub docker_run_command: String,
    pub docker_pull_command: String,
    pub docker_image_with_tag: String,
    pub bind_ip: String,
    pub host_port: u16,
    pub container_port: u16,
    pub container_name: String,
    pub hddl_daemon_command: String,
}

impl Default for CommandDefaults {
    fn default() -> Self {
        Self {
            python_wrapper_name: "openvino-workbench".to_string(),
            docker_run_command: "docker run".to_string(),
            docker_pull_command: "docker pull".to_string(),
            docker_image_with_tag: "openvino/workbench:2022.3.0".to_string(),
            bind_ip: "0.0.0.0".to_string(),
            host_port: 5665,
            container_port: 5665,
            container_name: "workbench".to_string(),
            hddl_daemon_command: "$HDDL_INSTALL_DIR/bin/hddldaemon".to_string(),
        }
    }
}

impl CommandDefaults {
    /// Command that installs the pip wrapper package.
    pub fn install_wrapper_command(&self) -> String {
        format!("python3 -m pip install -U {}", self.python_wrapper_name)
    }

    /// Command that pre-pulls the Workbench image.
    pub fn pull_image_command(&self) -> String {
        format!("{} {}", self.docker_pull_command, self.docker_image_with_tag)
    }
}
