//! Mode dispatch: read input, run the codec, write through the right sink.

use anyhow::Context;
use tracing::info;

use envelope_core::envelope::{decode_with_stats, encode_with_stats, inspect, pretty_json, EncodeOptions};
use envelope_core::io::{InputSource, OutputSink};
use envelope_core::telemetry::TelemetrySnapshot;

use crate::args::{Args, Mode};

pub fn run(args: &Args) -> anyhow::Result<()> {
    let input = InputSource::from_arg(&args.input);
    let mut sink = OutputSink::from_arg(args.output());

    let snapshot = run_with(args, input, &mut sink)?;

    if let (true, Some(snapshot)) = (args.stats, snapshot) {
        eprintln!("{}", snapshot.to_json()?);
    }
    Ok(())
}

/// Execute one mode against explicit endpoints.
pub fn run_with(
    args: &Args,
    input: InputSource,
    sink: &mut OutputSink,
) -> anyhow::Result<Option<TelemetrySnapshot>> {
    match args.mode {
        Mode::Encode => {
            let raw = input
                .read_all()
                .with_context(|| format!("reading {}", args.input))?;
            let opts = EncodeOptions { level: args.level };
            let (text, snapshot) = encode_with_stats(&raw, &opts).context("encoding envelope")?;
            sink.write_text(&text).context("writing envelope")?;
            info!(plain = snapshot.bytes_plain, envelope = snapshot.bytes_envelope, "encoded");
            Ok(Some(snapshot))
        }
        Mode::Decode => {
            let text = input
                .read_text()
                .with_context(|| format!("reading {}", args.input))?;
            let decoded = decode_with_stats(&text).context("decoding envelope")?;

            let json_tagged = args.pretty
                && decoded.envelope.descriptor().map(|d| d.is_json()).unwrap_or(false);
            if json_tagged {
                let pretty = pretty_json(&decoded.raw).context("rendering JSON")?;
                sink.write_text(&pretty).context("writing decoded output")?;
            } else {
                sink.write_bytes(&decoded.raw).context("writing decoded output")?;
            }
            info!(plain = decoded.snapshot.bytes_plain, "decoded");
            Ok(Some(decoded.snapshot))
        }
        Mode::Inspect => {
            let text = input
                .read_text()
                .with_context(|| format!("reading {}", args.input))?;
            let report = inspect(&text).context("inspecting envelope")?;
            sink.write_text(&report.to_string()).context("writing report")?;
            Ok(None)
        }
    }
}
