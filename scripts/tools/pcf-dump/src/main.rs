use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use pcf_codec::{
    decode, decode_message, parse_message_tree, parse_tree, Application, ByteStyle, Cursor,
    NameStyle, RenderMode, RenderOptions, RenderState,
};
use pcf_config::{ByteOrder, DumpConfig};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod input;

#[derive(Parser, Debug)]
#[command(name = "pcf-dump")]
#[command(about = "Render PCF messages as aligned text or JSON")]
#[command(version)]
struct Cli {
    /// Message files, one PCF message each; defaults to input.directory
    files: Vec<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Field tables: activity-trace, accounting, events, resource-usage
    #[arg(long, value_parser = parse_application)]
    app: Option<Application>,

    /// One summary line per operation group
    #[arg(short, long)]
    terse: bool,

    /// Print raw symbolic constant names
    #[arg(short, long)]
    unformatted: bool,

    /// Render byte strings as hex dumps instead of compact hex
    #[arg(long)]
    hex_dump: bool,

    /// Only show operation groups whose object name matches (trailing * for prefix)
    #[arg(short, long)]
    filter: Option<String>,

    /// Input is big-endian
    #[arg(long)]
    big_endian: bool,

    /// Emit the decoded element tree as JSON
    #[arg(long)]
    json: bool,

    /// Input is a bare element stream of N top-level elements, no message header
    #[arg(long, value_name = "N")]
    elements: Option<u32>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_application(name: &str) -> Result<Application, String> {
    Application::from_name(name).ok_or_else(|| {
        format!(
            "unknown application '{}' (expected activity-trace, accounting, events or resource-usage)",
            name
        )
    })
}

impl Cli {
    /// Command-line flags override configured values
    fn apply(&self, config: &mut DumpConfig) {
        let render = &mut config.render;
        if let Some(app) = self.app {
            render.application = Some(app);
        }
        if self.terse {
            render.mode = RenderMode::Terse;
        }
        if self.unformatted {
            render.name_style = NameStyle::Unformatted;
        }
        if self.hex_dump {
            render.byte_style = ByteStyle::Dump;
        }
        if let Some(filter) = &self.filter {
            render.object_filter = Some(filter.clone());
        }
        if self.big_endian {
            config.input.byte_order = ByteOrder::Big;
        }
    }

    fn log_directive(&self, config: &DumpConfig) -> String {
        match self.verbose {
            0 => config.logging.level.clone(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// One message file rendered to `out`
fn dump_file<W: Write>(
    path: &Path,
    config: &DumpConfig,
    options: &RenderOptions,
    element_count: Option<u32>,
    state: &mut RenderState,
    out: &mut W,
) -> Result<()> {
    let bytes = input::read_message(path)?;
    let encoding = config.encoding();
    debug!(file = %path.display(), bytes = bytes.len(), "read message");

    if options.is_verbose() && element_count.is_none() {
        writeln!(out, "File: {}", path.display())?;
    }

    match element_count {
        Some(count) => {
            let mut cursor = Cursor::new(&bytes, encoding);
            let summary = decode(&mut cursor, count, 0, options, state, out)
                .with_context(|| format!("Failed to decode {}", path.display()))?;
            if !cursor.is_empty() {
                warn!(
                    file = %path.display(),
                    trailing = cursor.remaining(),
                    "bytes left after element stream"
                );
            }
            info!(file = %path.display(), elements = summary.elements, "decoded element stream");
        }
        None => {
            let decoded = decode_message(&bytes, encoding, options, state, out)
                .with_context(|| format!("Failed to decode {}", path.display()))?;
            info!(
                file = %path.display(),
                elements = decoded.summary.elements,
                warnings = decoded.summary.warnings.len(),
                "decoded message"
            );
        }
    }

    if options.is_verbose() {
        writeln!(out)?;
    }
    Ok(())
}

/// One message file as a JSON document
fn dump_json<W: Write>(
    path: &Path,
    config: &DumpConfig,
    element_count: Option<u32>,
    out: &mut W,
) -> Result<()> {
    let bytes = input::read_message(path)?;
    let encoding = config.encoding();
    let max_depth = config.render.max_depth;

    let document = match element_count {
        Some(count) => {
            let mut cursor = Cursor::new(&bytes, encoding);
            let nodes = parse_tree(&mut cursor, count, max_depth)
                .with_context(|| format!("Failed to decode {}", path.display()))?;
            serde_json::json!({ "file": path, "elements": nodes })
        }
        None => {
            let tree = parse_message_tree(&bytes, encoding, max_depth)
                .with_context(|| format!("Failed to decode {}", path.display()))?;
            serde_json::json!({ "file": path, "header": tree.header, "elements": tree.elements })
        }
    };

    serde_json::to_writer_pretty(&mut *out, &document).context("Failed to write JSON")?;
    writeln!(out)?;
    Ok(())
}

fn run(cli: &Cli, config: &DumpConfig) -> Result<usize> {
    let files = input::collect_inputs(&cli.files, &config.input)?;
    let options = config.render_options();
    let mut state = RenderState::new();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut failed = 0;

    for path in &files {
        let result = if cli.json {
            dump_json(path, config, cli.elements, &mut out)
        } else {
            dump_file(path, config, &options, cli.elements, &mut state, &mut out)
        };
        if let Err(e) = result {
            // The message is abandoned; later files are unaffected
            error!(file = %path.display(), "{:#}", e);
            failed += 1;
        }
    }

    out.flush().context("Failed to flush output")?;
    info!(files = files.len(), failed, "done");
    Ok(failed)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match DumpConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pcf-dump: {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    cli.apply(&mut config);
    init_logging(&cli.log_directive(&config));

    if cli.print_config {
        return match config.to_toml() {
            Ok(text) => {
                print!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{:#}", e);
                ExitCode::FAILURE
            }
        };
    }

    match run(&cli, &config) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcf_codec::PcfBuilder;
    use pcf_types::{Encoding, MessageType, PcfHeader};

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "pcf-dump",
            "--terse",
            "--unformatted",
            "--hex-dump",
            "--big-endian",
            "--app",
            "events",
            "--filter",
            "APP.*",
            "msg.pcf",
        ]);
        let mut config = DumpConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.render.mode, RenderMode::Terse);
        assert_eq!(config.render.name_style, NameStyle::Unformatted);
        assert_eq!(config.render.byte_style, ByteStyle::Dump);
        assert_eq!(config.render.application, Some(Application::Events));
        assert_eq!(config.render.object_filter.as_deref(), Some("APP.*"));
        assert_eq!(config.encoding(), Encoding::Big);
        assert_eq!(cli.files, vec![PathBuf::from("msg.pcf")]);
    }

    #[test]
    fn test_unknown_application_rejected() {
        assert!(Cli::try_parse_from(["pcf-dump", "--app", "mystery"]).is_err());
    }

    #[test]
    fn test_verbosity_selects_directive() {
        let config = DumpConfig::default();
        let quiet = Cli::parse_from(["pcf-dump"]);
        let loud = Cli::parse_from(["pcf-dump", "-vv"]);
        assert_eq!(quiet.log_directive(&config), "warn");
        assert_eq!(loud.log_directive(&config), "debug");
    }

    #[test]
    fn test_dump_file_text_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("event.pcf");
        let bytes = PcfBuilder::new(Encoding::Little)
            .string(2015, "QM1")
            .build_message(PcfHeader::new(MessageType::Event, 44))
            .unwrap();
        std::fs::write(&path, &bytes).unwrap();

        let config = DumpConfig::default();
        let mut out = Vec::new();
        dump_file(
            &path,
            &config,
            &config.render_options(),
            None,
            &mut RenderState::new(),
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("File: "));
        assert!(text.contains("'QM1'"));

        let mut out = Vec::new();
        dump_json(&path, &config, None, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["header"]["parameter_count"], 1);
        let element = &json["elements"][0];
        assert_eq!(element["value"]["kind"], "string");
        assert_eq!(element["value"]["value"]["value"], "QM1");
    }

    #[test]
    fn test_truncated_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.pcf");
        std::fs::write(&path, [1u8, 0, 0, 0, 36, 0, 0, 0]).unwrap();

        let config = DumpConfig::default();
        let error = dump_file(
            &path,
            &config,
            &config.render_options(),
            None,
            &mut RenderState::new(),
            &mut std::io::sink(),
        )
        .unwrap_err();
        assert!(format!("{:#}", error).contains("short.pcf"));
    }
}
