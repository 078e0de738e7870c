//! textarea-replay: drive a headless text area from a YAML script and
//! print the resulting text, cursor, selection and scroll.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use taskpanel::config::TextAreaSettings;
use taskpanel::editable::{HeadlessHost, MonospaceShaper, TextArea};
use taskpanel::replay::{self, ReplayReport};

use cli::CliArgs;

fn main() -> Result<()> {
    taskpanel::tracing::init();

    let args = CliArgs::parse();
    let config = args.load_config()?;
    let settings = TextAreaSettings::from_config(&config);

    let script = std::fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read {}", args.script.display()))?;
    let steps = replay::parse_script(&script)?;

    let shaper = MonospaceShaper::for_font_size(settings.font_size);
    let mut host = HeadlessHost::new();
    let mut area = TextArea::new(shaper, settings, args.width, args.height).with_text(&args.text);
    area.set_active(true, &mut host);

    let report = replay::run(&mut area, &mut host, &steps)?;
    area.destroy(&mut host);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &ReplayReport) {
    println!("text:      {:?}", report.text);
    println!("cursor:    {}", report.cursor);
    match report.selection {
        Some((start, end)) => println!("selection: {}..{}", start, end),
        None => println!("selection: none"),
    }
    println!("scroll:    ({}, {})", report.scroll_x, report.scroll_y);
    println!("history:   {} undo / {} redo", report.undo_depth, report.redo_depth);
}
