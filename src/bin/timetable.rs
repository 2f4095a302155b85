//! Command-line timetable solver.
//! `timetable sections.json --mode optimize --seed 7`, prints a JSON report.

use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, Command};
use log::warn;
use serde::Serialize;

use u_timetable::io::{read_sections, to_json_string, write_json};
use u_timetable::layout::{Cell, WeekLayout, DEFAULT_PERIODS};
use u_timetable::models::Slot;
use u_timetable::scheduler::{SolveMode, SolveRequest, TimetableKpi, OPTIMIZE_ITERATIONS};
use u_timetable::validation::validate_sections;

#[derive(Debug, Serialize)]
struct Placement<'a> {
    section_id: &'a str,
    name: &'a str,
    slot: Slot,
    cell: Option<Cell>,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    mode: SolveMode,
    colors_count: usize,
    exceeds_week: bool,
    kpi: TimetableKpi,
    placements: Vec<Placement<'a>>,
}

fn make_parser() -> Command {
    Command::new("timetable")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Assigns class sections to non-conflicting time slots")
        .arg(
            Arg::new("sections")
                .required(true)
                .value_name("FILE")
                .help("JSON array of sections"),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .help("generate: greedy only; optimize: greedy + local search")
                .default_value("generate")
                .value_parser(["generate", "optimize"]),
        )
        .arg(
            Arg::new("iterations")
                .short('i')
                .long("iterations")
                .help("Local search iterations in optimize mode")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Random seed for reproducible optimize runs")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("days")
                .long("days")
                .help("Comma-separated day labels of the week grid")
                .value_delimiter(','),
        )
        .arg(
            Arg::new("periods")
                .long("periods")
                .help("Periods per day of the week grid")
                .default_value("6")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the report here instead of stdout"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Abort when section validation fails")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> anyhow::Result<()> {
    if std::env::var("TIMETABLE_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("TIMETABLE_LOG")
            .write_style("TIMETABLE_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let matches = make_parser().get_matches();

    let input = matches
        .get_one::<String>("sections")
        .context("missing sections file")?;
    let sections =
        read_sections(input).with_context(|| format!("failed to load sections from {input}"))?;

    if let Err(errors) = validate_sections(&sections) {
        for e in &errors {
            warn!("{:?}: {}", e.kind, e.message);
        }
        if matches.get_flag("strict") {
            bail!("{} validation error(s) in {input}", errors.len());
        }
    }

    let mode = match matches.get_one::<String>("mode").map(String::as_str) {
        Some("optimize") => SolveMode::Optimize {
            iterations: matches
                .get_one::<usize>("iterations")
                .copied()
                .unwrap_or(OPTIMIZE_ITERATIONS),
        },
        _ => SolveMode::Generate,
    };

    let mut request = SolveRequest::new(sections.clone()).with_mode(mode);
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        request = request.with_seed(seed);
    }
    let result = request.solve()?;

    let periods = matches
        .get_one::<usize>("periods")
        .copied()
        .unwrap_or(DEFAULT_PERIODS);
    let layout = match matches.get_many::<String>("days") {
        Some(days) => WeekLayout::new(days.cloned(), periods),
        None => WeekLayout {
            periods,
            ..WeekLayout::default()
        },
    };

    let exceeds_week = layout.exceeds_capacity(result.colors_count);
    if exceeds_week {
        warn!(
            "{} slots needed but the week only has {}; slots will wrap",
            result.colors_count,
            layout.cell_count()
        );
    }

    let placements = sections
        .iter()
        .filter_map(|s| {
            let slot = result.coloring.slot_of(&s.id)?;
            Some(Placement {
                section_id: &s.id,
                name: &s.name,
                slot,
                cell: layout.cell_for(slot),
            })
        })
        .collect();

    let report = Report {
        mode,
        colors_count: result.colors_count,
        exceeds_week,
        kpi: TimetableKpi::calculate(&result),
        placements,
    };

    match matches.get_one::<String>("output") {
        Some(path) => write_json(path, &report).with_context(|| format!("failed to write {path}"))?,
        None => println!("{}", to_json_string(&report)?),
    }

    Ok(())
}
