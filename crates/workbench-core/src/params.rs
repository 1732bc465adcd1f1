//! Command-line parameter values and the per-start-mode builders that
//! accumulate them.
//!
//! Parameter order is insertion order and determines the final command
//! layout: seed parameters first, then device flags (GPU, NCS2, HDDL),
//! then proxy flags (HTTP, HTTPS, NO_PROXY).

use crate::models::{CommandDefaults, Device};

/// One flag(+value) unit of a generated command line.
///
/// Immutable once constructed; construction never fails (a missing value
/// is legal and renders as the bare flag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParameter {
    Plain {
        flag: String,
        value: Option<String>,
    },
    /// Renders as `<flag> <name>=<value>`, e.g. `-e HTTP_PROXY=proxy:3128`.
    EnvVar {
        flag: String,
        name: String,
        value: String,
    },
}

impl CommandParameter {
    pub fn flag(flag: &str) -> Self {
        CommandParameter::Plain {
            flag: flag.to_string(),
            value: None,
        }
    }

    pub fn with_value(flag: &str, value: impl Into<String>) -> Self {
        CommandParameter::Plain {
            flag: flag.to_string(),
            value: Some(value.into()),
        }
    }

    pub fn env_var(flag: &str, name: &str, value: impl Into<String>) -> Self {
        CommandParameter::EnvVar {
            flag: flag.to_string(),
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            CommandParameter::Plain { flag, value: None } => flag.clone(),
            CommandParameter::Plain {
                flag,
                value: Some(value),
            } => format!("{} {}", flag, value),
            CommandParameter::EnvVar { flag, name, value } => {
                format!("{} {}={}", flag, name, value)
            }
        }
    }
}

/// Accumulator producing the ordered parameter list for one start mode.
pub trait ParametersBuilder {
    /// Append flags for the selected devices, in fixed GPU, NCS2, HDDL
    /// order. CPU and unselected devices contribute nothing.
    fn add_device_parameters(&mut self, devices: &[Device]);

    /// Append one parameter per non-empty proxy value, in fixed HTTP,
    /// HTTPS, NO_PROXY order. Empty or absent values are skipped.
    fn add_proxy_parameters(
        &mut self,
        http_proxy: Option<&str>,
        https_proxy: Option<&str>,
        no_proxy: Option<&str>,
    );

    /// The accumulated parameters in render order.
    fn parameters(&self) -> Vec<CommandParameter>;
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Builder for the pip starter invocation (`openvino-workbench ...`).
pub struct PythonParametersBuilder {
    parameters: Vec<CommandParameter>,
}

impl PythonParametersBuilder {
    pub fn new(defaults: &CommandDefaults) -> Self {
        Self {
            parameters: vec![CommandParameter::with_value(
                "--image",
                defaults.docker_image_with_tag.clone(),
            )],
        }
    }
}

impl ParametersBuilder for PythonParametersBuilder {
    fn add_device_parameters(&mut self, devices: &[Device]) {
        if devices.contains(&Device::Gpu) {
            self.parameters.push(CommandParameter::flag("--gpu"));
        }
        if devices.contains(&Device::Ncs2) {
            self.parameters.push(CommandParameter::flag("--myriad"));
        }
        if devices.contains(&Device::Hddl) {
            self.parameters.push(CommandParameter::flag("--hddl"));
        }
    }

    fn add_proxy_parameters(
        &mut self,
        http_proxy: Option<&str>,
        https_proxy: Option<&str>,
        no_proxy: Option<&str>,
    ) {
        if let Some(proxy) = non_empty(http_proxy) {
            self.parameters
                .push(CommandParameter::with_value("--http-proxy", proxy));
        }
        if let Some(proxy) = non_empty(https_proxy) {
            self.parameters
                .push(CommandParameter::with_value("--https-proxy", proxy));
        }
        if let Some(proxy) = non_empty(no_proxy) {
            self.parameters
                .push(CommandParameter::with_value("--no-proxy", proxy));
        }
    }

    fn parameters(&self) -> Vec<CommandParameter> {
        self.parameters.clone()
    }
}

/// Builder for the `docker run` invocation.
///
/// The interactive/image parameter (`-it <image>`) is kept aside and
/// appended at read time so it stays last no matter how many device or
/// proxy parameters were added before.
pub struct DockerParametersBuilder {
    parameters: Vec<CommandParameter>,
    it_parameter: CommandParameter,
}

impl DockerParametersBuilder {
    pub fn new(defaults: &CommandDefaults) -> Self {
        Self {
            parameters: vec![
                CommandParameter::with_value(
                    "-p",
                    format!(
                        "{}:{}:{}",
                        defaults.bind_ip, defaults.host_port, defaults.container_port
                    ),
                ),
                CommandParameter::with_value("--name", defaults.container_name.clone()),
            ],
            it_parameter: CommandParameter::with_value(
                "-it",
                defaults.docker_image_with_tag.clone(),
            ),
        }
    }
}

impl ParametersBuilder for DockerParametersBuilder {
    fn add_device_parameters(&mut self, devices: &[Device]) {
        if devices.contains(&Device::Gpu) {
            self.parameters
                .push(CommandParameter::with_value("--device", "/dev/dri"));
            self.parameters.push(CommandParameter::with_value(
                "--group-add",
                "$(stat -c '%g' /dev/dri/render* | head -1)",
            ));
        }
        if devices.contains(&Device::Ncs2) {
            self.parameters.push(CommandParameter::with_value(
                "--device-cgroup-rule",
                "'c 189:* rmw'",
            ));
            self.parameters.push(CommandParameter::with_value(
                "-v",
                "/dev/bus/usb:/dev/bus/usb",
            ));
        }
        if devices.contains(&Device::Hddl) {
            self.parameters
                .push(CommandParameter::with_value("--device", "/dev/ion:/dev/ion"));
            self.parameters
                .push(CommandParameter::with_value("-v", "/var/tmp:/var/tmp"));
        }
    }

    fn add_proxy_parameters(
        &mut self,
        http_proxy: Option<&str>,
        https_proxy: Option<&str>,
        no_proxy: Option<&str>,
    ) {
        if let Some(proxy) = non_empty(http_proxy) {
            self.parameters
                .push(CommandParameter::env_var("-e", "HTTP_PROXY", proxy));
        }
        if let Some(proxy) = non_empty(https_proxy) {
            self.parameters
                .push(CommandParameter::env_var("-e", "HTTPS_PROXY", proxy));
        }
        if let Some(proxy) = non_empty(no_proxy) {
            self.parameters
                .push(CommandParameter::env_var("-e", "NO_PROXY", proxy));
        }
    }

    fn parameters(&self) -> Vec<CommandParameter> {
        let mut parameters = self.parameters.clone();
        parameters.push(self.it_parameter.clone());
        parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_all(builder: &dyn ParametersBuilder) -> Vec<String> {
        builder.parameters().iter().map(|p| p.render()).collect()
    }

    #[test]
    fn test_parameter_rendering() {
        assert_eq!(CommandParameter::flag("--gpu").render(), "--gpu");
        assert_eq!(
            CommandParameter::with_value("--name", "workbench").render(),
            "--name workbench"
        );
        assert_eq!(
            CommandParameter::env_var("-e", "HTTP_PROXY", "proxy:3128").render(),
            "-e HTTP_PROXY=proxy:3128"
        );
    }

    #[test]
    fn test_python_builder_seeds_image_parameter() {
        let builder = PythonParametersBuilder::new(&CommandDefaults::default());
        assert_eq!(
            render_all(&builder),
            vec!["--image openvino/workbench:2022.3.0"]
        );
    }

    #[test]
    fn test_python_builder_device_flags_in_fixed_order() {
        let mut builder = PythonParametersBuilder::new(&CommandDefaults::default());
        // Input order must not matter
        builder.add_device_parameters(&[Device::Hddl, Device::Cpu, Device::Gpu]);
        assert_eq!(
            render_all(&builder),
            vec!["--image openvino/workbench:2022.3.0", "--gpu", "--hddl"]
        );
    }

    #[test]
    fn test_python_builder_cpu_contributes_nothing() {
        let mut builder = PythonParametersBuilder::new(&CommandDefaults::default());
        builder.add_device_parameters(&[Device::Cpu]);
        assert_eq!(builder.parameters().len(), 1);
    }

    #[test]
    fn test_python_builder_tolerates_ncs2_and_hddl_together() {
        let mut builder = PythonParametersBuilder::new(&CommandDefaults::default());
        builder.add_device_parameters(&[Device::Ncs2, Device::Hddl]);
        assert_eq!(
            render_all(&builder),
            vec![
                "--image openvino/workbench:2022.3.0",
                "--myriad",
                "--hddl"
            ]
        );
    }

    #[test]
    fn test_python_builder_skips_empty_proxies() {
        let mut builder = PythonParametersBuilder::new(&CommandDefaults::default());
        builder.add_proxy_parameters(Some(""), None, Some("localhost"));
        assert_eq!(
            render_all(&builder),
            vec![
                "--image openvino/workbench:2022.3.0",
                "--no-proxy localhost"
            ]
        );
    }

    #[test]
    fn test_docker_builder_seed_and_trailing_parameter() {
        let builder = DockerParametersBuilder::new(&CommandDefaults::default());
        assert_eq!(
            render_all(&builder),
            vec![
                "-p 0.0.0.0:5665:5665",
                "--name workbench",
                "-it openvino/workbench:2022.3.0"
            ]
        );
    }

    #[test]
    fn test_docker_builder_device_pairs() {
        let mut builder = DockerParametersBuilder::new(&CommandDefaults::default());
        builder.add_device_parameters(&[Device::Gpu, Device::Ncs2]);
        assert_eq!(
            render_all(&builder),
            vec![
                "-p 0.0.0.0:5665:5665",
                "--name workbench",
                "--device /dev/dri",
                "--group-add $(stat -c '%g' /dev/dri/render* | head -1)",
                "--device-cgroup-rule 'c 189:* rmw'",
                "-v /dev/bus/usb:/dev/bus/usb",
                "-it openvino/workbench:2022.3.0"
            ]
        );
    }

    #[test]
    fn test_docker_builder_trailing_parameter_stays_last() {
        let mut builder = DockerParametersBuilder::new(&CommandDefaults::default());
        builder.add_device_parameters(&[Device::Hddl]);
        builder.add_proxy_parameters(Some("proxy:3128"), Some("proxy:3129"), None);
        builder.add_device_parameters(&[Device::Gpu]);
        let parameters = builder.parameters();
        assert_eq!(
            parameters.last().unwrap().render(),
            "-it openvino/workbench:2022.3.0"
        );
        // Reading must not consume or duplicate the trailing parameter
        let again = builder.parameters();
        assert_eq!(parameters, again);
    }

    #[test]
    fn test_docker_builder_proxy_env_vars_in_fixed_order() {
        let mut builder = DockerParametersBuilder::new(&CommandDefaults::default());
        builder.add_proxy_parameters(Some("h:1"), Some("s:2"), Some("n"));
        let rendered = render_all(&builder);
        assert_eq!(
            &rendered[2..5],
            &[
                "-e HTTP_PROXY=h:1".to_string(),
                "-e HTTPS_PROXY=s:2".to_string(),
                "-e NO_PROXY=n".to_string()
            ]
        );
    }
}
