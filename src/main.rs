mod cli;

use cli::Args;
use component_resolver::adapters::outbound::console::StderrProgressReporter;
use component_resolver::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use component_resolver::application::dto::ResolverSettings;
use component_resolver::application::factories::{FormatterFactory, RegistryFactory};
use component_resolver::application::use_cases::ComponentResolutionService;
use component_resolver::config::{self, ConfigFile};
use component_resolver::ports::inbound::ComponentResolutionPort;
use component_resolver::ports::outbound::{OutputPresenter, ProgressReporter};
use component_resolver::shared::error::ExitCode;
use component_resolver::shared::security::validate_input_length;
use component_resolver::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let reporter = StderrProgressReporter::new();

    let config = load_config(args.config.as_deref())?;
    if let Some(ref config) = config {
        for warning in config.warnings() {
            reporter.report_error(&warning);
        }
    }

    let mut settings = ResolverSettings::default();
    if let Some(ref config) = config {
        config.apply_to(&mut settings);
    }
    if let Some(secs) = args.timeout {
        settings.timeout = Duration::from_secs(secs);
    }

    let format = match args.format {
        Some(format) => format,
        None => config
            .as_ref()
            .map(ConfigFile::output_format)
            .transpose()?
            .flatten()
            .unwrap_or_default(),
    };

    // Create adapters (Dependency Injection)
    let registry = RegistryFactory::create(&settings)?;
    let service = ComponentResolutionService::new(registry);
    let formatter = FormatterFactory::create(format);

    let output = if args.list_platforms {
        formatter.format_platforms(&service.list_supported_platforms())?
    } else if let Some(ref raw) = args.qr {
        validate_input_length(raw, "QR payload")?;
        let scan = service.scan_with_progress(raw, &reporter)?;
        formatter.format_scan(&scan)?
    } else {
        let code = args.code.as_deref().unwrap_or_default();
        validate_input_length(code, "Component code")?;
        let component = service.resolve_with_progress(code, &reporter)?;
        formatter.format_component(&component)?
    };

    present(&output, args.output.as_deref())
}

fn load_config(explicit: Option<&str>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(Path::new(path)).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

fn present(content: &str, output: Option<&str>) -> Result<()> {
    let presenter: Box<dyn OutputPresenter> = match output {
        Some(path) => Box::new(FileSystemWriter::new(PathBuf::from(path))),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(content)
}
