use anyhow::{Context, Result};
use chained_hashset::{ChainedHashSet, Session, TextView};
use clap::Parser;
use std::io::{self, BufRead, Write};

/// Line-oriented front end for a fixed-size chained hash set.
///
/// Reads `<verb> [key]` lines from stdin, one command per line. Verbs:
/// add, remove, contains, size, display, show, quit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 10, help = "Number of buckets (fixed for the session)")]
    buckets: usize,

    #[arg(short, long, help = "Log every table operation")]
    verbose: bool,

    #[arg(short, long, help = "Do not print the prompt")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let table = ChainedHashSet::with_buckets(args.buckets).context("invalid --buckets")?;
    let mut session = Session::new(table, TextView::new());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut session, stdin.lock(), &mut stdout.lock(), args.quiet)
        .context("failed to process commands")?;
    Ok(())
}

/// Feed every line of `input` to the session until it runs out or a
/// `quit`/`exit` line arrives. Blank lines are skipped.
fn run(
    session: &mut Session<TextView>,
    input: impl BufRead,
    out: &mut impl Write,
    quiet: bool,
) -> io::Result<()> {
    prompt(out, quiet)?;
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }
        if trimmed.eq_ignore_ascii_case("show") {
            show(session, out)?;
        } else if !trimmed.is_empty() {
            let resp = session.execute_line(trimmed);
            writeln!(out, "{}", resp.message.trim_end())?;
        }
        prompt(out, quiet)?;
    }
    out.flush()
}

fn prompt(out: &mut impl Write, quiet: bool) -> io::Result<()> {
    if quiet {
        return Ok(());
    }
    write!(out, "> ")?;
    out.flush()
}

/// Draw the chains as the view last saw them, settling any pending insert.
fn show(session: &mut Session<TextView>, out: &mut impl Write) -> io::Result<()> {
    if session.view().updates() == 0 {
        return out.write_all(TextView::render(session.table()).as_bytes());
    }
    let view = session.view_mut();
    if let Some(p) = view.settle() {
        log::debug!("settled insert at bucket {}, position {}", p.bucket, p.position);
    }
    out.write_all(view.frame().as_bytes())
}
