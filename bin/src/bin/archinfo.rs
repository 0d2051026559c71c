use clap::Parser;

/// Prints architecture facts for the current host.
#[derive(Parser, Debug)]
#[command(version, about = "archinfo command line interface", long_about = None)]
struct Args {
    /// Emit the collected facts as JSON instead of the labeled report.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    if args.json {
        print_json();
    } else {
        print_report();
    }
}

fn print_report() {
    if let Err(err) = archinfo::arch::run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn print_json() {
    let info = match archinfo::arch::host() {
        Ok(info) => info,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    match serde_json::to_string_pretty(&info) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
