use slopesim::prelude::*;
use std::path::Path;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "slopesim",
    about = "Finds the critical slip circle of a slope by limit equilibrium methods"
)]
struct Options {
    /// JSON file with the input data
    input: String,

    /// Overrides the method given in the input file (swedish, bishop, or both)
    #[structopt(short, long)]
    method: Option<Method>,

    /// Output directory (default: /tmp/slopesim/results)
    #[structopt(short, long)]
    out_dir: Option<String>,

    /// Evaluates the trial circles in parallel
    #[structopt(short, long)]
    parallel: bool,

    /// Saves the cross-section figure (SVG) as well
    #[structopt(long)]
    plot: bool,
}

impl Options {
    /// Returns the output directory
    fn out_dir(&self) -> &str {
        self.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR)
    }
}

fn main() -> Result<(), StrError> {
    env_logger::init();

    // parse options
    let options = Options::from_args();

    // load data
    let mut input = AnalysisInput::read_json(&options.input)?;
    if let Some(method) = options.method {
        input.method = method;
    }
    if options.parallel {
        input.parallel = true;
    }
    let profile = input.profile()?;
    let config = input.config()?;
    log::debug!("{}", config);

    // run the analysis
    let results = analyze(&input.geometry, &profile, input.method, &config)?;

    // summary
    for res in &results {
        println!("{}", res);
    }

    // write results
    let fn_stem = Path::new(&options.input)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or("cannot get the stem of the input file")?;
    let out_dir = options.out_dir();
    let path_json = format!("{}/{}.json", out_dir, fn_stem);
    AnalysisResult::write_json(&results, &path_json)?;
    println!("results written to {}", path_json);
    if options.plot {
        let path_svg = format!("{}/{}.svg", out_dir, fn_stem);
        PlotSection::new(&input.geometry, &profile).save(&results, &path_svg)?;
        println!("figure written to {}", path_svg);
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
