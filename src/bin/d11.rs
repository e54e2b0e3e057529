use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use lib::cli::{error_context, LineCol, Opts, Output};
use lib::prelude::*;
use mitm::Analysis;

const DEFAULT_INPUT: &str = "inputs/d11.txt";

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let stdout = std::io::stdout();
    let mut o = opts.output(stdout.lock());

    if let Err(error) = solve(&opts, &mut o) {
        o.error(format_args!("{error:#}"))?;
        std::process::exit(1);
    }

    Ok(())
}

fn solve<O>(opts: &Opts, o: &mut Output<O>) -> Result<()>
where
    O: Write,
{
    let path = opts.input_or(Path::new(DEFAULT_INPUT));

    let file = File::open(path).with_context(|| anyhow!("{}", path.display()))?;

    let actors = mitm::from_reader(BufReader::new(file)).map_err(|error| {
        let pos = error
            .position()
            .map(|(line, column)| LineCol::new(line, column));

        error_context(path, pos, error)
    })?;

    log::info!("{}: {} actors", path.display(), actors.len());

    for (name, analysis) in [("part1", Analysis::PART1), ("part2", Analysis::PART2)] {
        let mut actors = actors.clone();

        let business = analysis
            .run(&mut actors)
            .with_context(|| anyhow!("{name}: {analysis}"))?;

        log::debug!("{name}: {analysis}");
        o.answer(name, business)?;
    }

    Ok(())
}
