use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use icon_preview::config::{load_config, load_config_from, save_config};
use icon_preview::{load_icons, rasterize, Icon, PreviewConfig, PreviewError};

/// Preview SVG icons as block-character grids in the terminal
#[derive(Parser, Debug)]
#[command(name = "icon-preview", version, about)]
struct Args {
    /// Icon JSON (record, array, or search response) or SVG file; `-` or omitted reads stdin
    file: Option<PathBuf>,

    /// Grid width in characters
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Grid height in lines
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Only preview icons whose name contains this text (case-insensitive)
    #[arg(long)]
    filter: Option<String>,

    /// Preview at most this many icons
    #[arg(long)]
    limit: Option<usize>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not print icon names above previews
    #[arg(long)]
    no_names: bool,

    /// Write the effective settings to the config file (`--config` or the default location) and exit
    #[arg(long)]
    save_config: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log debug detail to stderr
    #[arg(long)]
    debug: bool,
}

fn read_input(file: Option<&PathBuf>) -> Result<(String, Option<String>), PreviewError> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            let content = fs::read_to_string(path)
                .map_err(|e| PreviewError::read_error(path, e.to_string()))?;
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned());
            Ok((content, stem))
        }
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| PreviewError::read_error("<stdin>", e.to_string()))?;
            Ok((content, None))
        }
    }
}

fn select<'a>(icons: &'a [Icon], filter: Option<&str>, limit: Option<usize>) -> Vec<&'a Icon> {
    let needle = filter.map(str::to_lowercase);
    icons
        .iter()
        .filter(|icon| {
            needle
                .as_deref()
                .map_or(true, |n| icon.display_name().to_lowercase().contains(n))
        })
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// Write each icon's optional name header and grid, separated by `config.separator`
fn write_previews<W: Write>(
    out: &mut W,
    icons: &[&Icon],
    config: &PreviewConfig,
) -> icon_preview::Result<()> {
    for (i, icon) in icons.iter().enumerate() {
        if i > 0 {
            writeln!(out, "{}", config.separator)?;
        }
        if config.show_names {
            writeln!(out, "{}", icon.display_name())?;
        }
        writeln!(out, "{}", rasterize(icon, config.width, config.height))?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Set log level based on flags
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else if args.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let mut config: PreviewConfig = match &args.config {
        // Saving to a file that does not exist yet starts from defaults
        Some(path) if args.save_config && !path.exists() => Ok(PreviewConfig::default()),
        Some(path) => load_config_from(path),
        None => load_config(),
    }
    .context("loading configuration")?;

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if args.no_names {
        config.show_names = false;
    }
    config.validate()?;

    if args.save_config {
        let path = args
            .config
            .clone()
            .or_else(PreviewConfig::config_path)
            .context("no config location available")?;
        save_config(&config, &path)?;
        tracing::info!("Saved config to {}", path.display());
        return Ok(());
    }

    let (input, stem) = read_input(args.file.as_ref())?;
    let icons = load_icons(&input, stem.as_deref())?;
    let selected = select(&icons, args.filter.as_deref(), args.limit);
    tracing::info!(
        "Previewing {} of {} icons at {}x{}",
        selected.len(),
        icons.len(),
        config.width,
        config.height
    );

    if selected.is_empty() {
        tracing::warn!("No icons to preview");
    }

    let stdout = io::stdout();
    write_previews(&mut stdout.lock(), &selected, &config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Icon {
        Icon::new("0 0 24 24", "").with_name(name)
    }

    #[test]
    fn test_select_filter_case_insensitive() {
        let icons = vec![named("Arrow-Left"), named("check"), named("arrow-right")];
        let picked = select(&icons, Some("ARROW"), None);
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn test_select_limit() {
        let icons = vec![named("a"), named("b"), named("c")];
        assert_eq!(select(&icons, None, Some(2)).len(), 2);
        assert_eq!(select(&icons, None, Some(0)).len(), 0);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_previews_layout() {
        let icons = vec![named("a"), named("b")];
        let picked: Vec<&Icon> = icons.iter().collect();
        let config = PreviewConfig {
            width: 2,
            height: 1,
            separator: "--".to_string(),
            ..Default::default()
        };
        let mut out = Vec::new();
        write_previews(&mut out, &picked, &config).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\n  \n--\nb\n  \n");
    }

    #[test]
    fn test_write_previews_reports_io_error() {
        let icons = vec![named("a")];
        let picked: Vec<&Icon> = icons.iter().collect();
        let err = write_previews(&mut ClosedPipe, &picked, &PreviewConfig::default()).unwrap_err();
        assert!(matches!(err, PreviewError::IoError(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["icon-preview", "icons.json", "-W", "32", "--no-names"]);
        assert_eq!(args.width, Some(32));
        assert!(args.no_names);
        assert_eq!(args.file, Some(PathBuf::from("icons.json")));
    }
}
