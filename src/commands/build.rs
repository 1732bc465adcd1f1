use crate::{config::StarterConfig, display, helpers::proxy_from_env, Result};
use clap::Args;
use workbench_core::{
    CommandConfig, CommandLayout, Device, OperatingSystem, StartMode, StartupGuide,
};

#[derive(Args)]
pub struct BuildArgs {
    /// Target operating system (linux, windows, macos); detected when omitted
    #[arg(long)]
    pub os: Option<String>,

    /// Enable GPU inference in the generated command
    #[arg(long)]
    pub enable_gpu: bool,

    /// Enable NCS2 (MYRIAD). Cannot be combined with --enable-hddl
    #[arg(long, conflicts_with = "enable_hddl")]
    pub enable_myriad: bool,

    /// Enable HDDL. Cannot be combined with --enable-myriad
    #[arg(long)]
    pub enable_hddl: bool,

    /// How the Workbench is started: python or docker
    #[arg(long, default_value = "python")]
    pub start_with: String,

    /// HTTP proxy (defaults to the http_proxy/HTTP_PROXY environment variable)
    #[arg(long)]
    pub http_proxy: Option<String>,

    /// HTTPS proxy (defaults to the https_proxy/HTTPS_PROXY environment variable)
    #[arg(long)]
    pub https_proxy: Option<String>,

    /// Hosts excluded from proxying (defaults to no_proxy/NO_PROXY)
    #[arg(long)]
    pub no_proxy: Option<String>,

    /// Mark Docker as not installed and include the install hint in the guide
    #[arg(long)]
    pub docker_missing: bool,

    /// Override the Workbench image reference for this invocation
    #[arg(long)]
    pub image: Option<String>,

    /// Override the bind IP for this invocation
    #[arg(long)]
    pub ip: Option<String>,

    /// Override the host port for this invocation
    #[arg(long)]
    pub port: Option<u16>,

    /// Override the container name for this invocation
    #[arg(long)]
    pub container_name: Option<String>,

    /// Render the start command on a single line instead of the multi-line layout
    #[arg(long)]
    pub single_line: bool,

    /// Print the guide as JSON instead of formatted steps
    #[arg(long)]
    pub json: bool,
}

pub fn handle(args: BuildArgs, config: &StarterConfig) -> Result<()> {
    let os: OperatingSystem = match &args.os {
        Some(name) => name.parse()?,
        None => OperatingSystem::detect(),
    };
    let start_mode: StartMode = args.start_with.parse()?;

    let mut devices = vec![Device::Cpu];
    if args.enable_gpu {
        devices.push(Device::Gpu);
    }
    if args.enable_myriad {
        devices.push(Device::Ncs2);
    }
    if args.enable_hddl {
        devices.push(Device::Hddl);
    }

    let command_config = CommandConfig {
        docker_installed: !args.docker_missing,
        os,
        devices,
        start_mode,
        http_proxy: args.http_proxy.or_else(|| proxy_from_env("http_proxy")),
        https_proxy: args.https_proxy.or_else(|| proxy_from_env("https_proxy")),
        no_proxy: args.no_proxy.or_else(|| proxy_from_env("no_proxy")),
    };

    let mut defaults = config.defaults().clone();
    if let Some(image) = args.image {
        defaults.docker_image_with_tag = image;
    }
    if let Some(ip) = args.ip {
        defaults.bind_ip = ip;
    }
    if let Some(port) = args.port {
        defaults.host_port = port;
    }
    if let Some(container_name) = args.container_name {
        defaults.container_name = container_name;
    }

    let layout = if args.single_line {
        CommandLayout::SingleLine
    } else {
        CommandLayout::MultiLine
    };
    let guide = StartupGuide::assemble(&command_config, &defaults, layout);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&guide)?);
        return Ok(());
    }

    display::print_guide(&command_config, &guide);
    Ok(())
}
