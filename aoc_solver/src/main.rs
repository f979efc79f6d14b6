/// aoc-solver reads puzzle inputs from an input directory and prints the answers
/// of both parts of each requested day. Without any day on the command line, all
/// implemented days are solved.
use aoc_solver::{configuration::AocCli, error::AocResult, AocDataBuilder};
use clap::Parser;

fn main() {
    let options = AocCli::parse();
    if let Err(err) = run(options) {
        eprintln!("Error occurred: {:?}", err);
        std::process::exit(1);
    }
}

fn run(options: AocCli) -> AocResult<()> {
    let data = AocDataBuilder::new()
        .set_options(options)
        .load_settings()?
        .build();
    for report in data.run()? {
        for (part, answer) in [report.answer.part1, report.answer.part2]
            .into_iter()
            .enumerate()
        {
            if let Some(answer) = answer {
                println!("Day {}, part {}: {}", report.day, part + 1, answer);
            }
        }
    }
    Ok(())
}
