extern crate env_logger;
extern crate structopt;

use std::fmt::Write;
use std::process;
use std::str::FromStr;

use itertools::Itertools;
use log::{debug, error, info};
use structopt::StructOpt;

use sortbound::{report, Error, Listing, Result, SortedSlice};

/// A comma separated list of integers, e.g. `1,2,4,5`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Values(Vec<i64>);

impl FromStr for Values {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.split(',')
            .map(|item| item.trim().parse::<i64>())
            .collect::<std::result::Result<Vec<i64>, _>>()
            .map(Values)
            .map_err(|_| Error::Parse {
                input: s.to_string(),
            })
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = "sortbound")]
struct Opt {
    /// Value to locate in each vector.
    #[structopt(short = "t", long = "target", default_value = "3")]
    target: i64,

    /// Vector to search; may be repeated. Defaults to the two demo vectors.
    #[structopt(short = "v", long = "values")]
    values: Vec<Values>,

    /// Reject vectors that are not sorted instead of searching them anyway.
    #[structopt(long = "check")]
    check: bool,
}

/// Renders the full demo output. With `check` set, every vector is validated
/// before anything is rendered.
fn run(opt: &Opt) -> Result<String> {
    let vectors: Vec<Vec<i64>> = if opt.values.is_empty() {
        vec![vec![1, 2, 3, 4, 5], vec![1, 2, 4, 5]]
    } else {
        opt.values.iter().map(|Values(v)| v.clone()).collect()
    };

    if opt.check {
        for v in &vectors {
            SortedSlice::new(v)?;
        }
    }

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out);
    let _ = writeln!(out, "-------------------------");
    let _ = writeln!(out, "Tests with `<` comparator");
    let _ = writeln!(out, "-------------------------");

    for (n, v) in vectors.iter().enumerate() {
        info!("searching {} for {}", v.iter().join(","), opt.target);

        let _ = writeln!(out, "Test vector {}", n + 1);
        let _ = writeln!(out, "{}", Listing(v));
        let _ = writeln!(out, "{}", report(v, &opt.target));
        let _ = writeln!(out);
    }

    Ok(out)
}

fn main() {
    env_logger::init();

    let opt = Opt::from_args();
    debug!("{:?}", opt);

    match run(&opt) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            error!("{:?}", e);
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
