//! The `genomap` command-line shell: obtain a GenBank file, extract its genes
//! and emit them in the requested form.

pub mod args;
pub mod input;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use genomap_core::GenomeModel;
use genomap_formats::{detect, genbank, FileFormat};
use genomap_render::{plan_genome, DiagramSettings};
use log::{info, warn};

pub use args::{Args, OutputMode};

pub fn run(args: &Args) -> Result<()> {
    let (path, file) = match &args.file {
        Some(path) => {
            let file = input::open_input(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            (path.clone(), file)
        }
        None => input::prompt_for_file(io::stdin().lock(), io::stdout())?,
    };

    let model = read_model(&path, file, args)?;
    let rendered = render(&model, args)?;
    write_output(&args.output, &rendered)
}

fn read_model(path: &Path, file: File, args: &Args) -> Result<GenomeModel> {
    let mut reader = BufReader::new(file);

    let head = reader
        .fill_buf()
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if detect::detect_format(&String::from_utf8_lossy(head)) != FileFormat::GenBank {
        warn!(
            "{} does not start with a LOCUS line; parsing it as GenBank anyway",
            path.display()
        );
    } else if detect::detect_format_from_extension(&path.to_string_lossy()) != FileFormat::GenBank {
        info!("{} has no GenBank extension", path.display());
    }

    let model = genbank::parse_reader_with_options(reader, &args.parse_options())
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    for feature in model.out_of_bounds() {
        warn!(
            "gene '{}' ({}..{}) lies outside the {} bp sequence",
            feature.label,
            feature.start,
            feature.end,
            model.sequence_length()
        );
    }

    Ok(model)
}

/// Produce the text for the selected output mode.
pub fn render(model: &GenomeModel, args: &Args) -> Result<String> {
    let text = match args.mode() {
        OutputMode::Plan => {
            let plan = plan_genome(model, DiagramSettings::default(), args.style_options());
            let mut json = plan.to_json().context("Failed to serialize diagram plan")?;
            json.push('\n');
            json
        }
        OutputMode::Summary => summary(model),
        OutputMode::Normalize => genbank::serialize(model),
    };
    Ok(text)
}

/// Plain-text gene table.
pub fn summary(model: &GenomeModel) -> String {
    let mut out = format!(
        "{} ({} bp, {} genes, {} on the reverse strand)\n",
        model.organism_name(),
        model.sequence_length(),
        model.feature_count(),
        model.reverse_strand_count()
    );

    if model.feature_count() == 0 {
        return out;
    }

    let width = model
        .features()
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("label".len());

    out.push_str(&format!(
        "{:<width$}  {:>10}  {:>10}  strand\n",
        "label",
        "start",
        "end",
        width = width
    ));
    for f in model.features() {
        out.push_str(&format!(
            "{:<width$}  {:>10}  {:>10}  {}\n",
            f.label,
            f.start,
            f.end,
            f.strand,
            width = width
        ));
    }
    out
}

fn write_output(output: &str, text: &str) -> Result<()> {
    if output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.flush()?;
    } else {
        let mut file =
            File::create(output).with_context(|| format!("Failed to create {}", output))?;
        file.write_all(text.as_bytes())
            .with_context(|| format!("Failed to write {}", output))?;
        info!("wrote {} bytes to {}", text.len(), output);
    }
    Ok(())
}
