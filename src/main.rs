use clap::Parser;
use log::{error, info};
use std::process;

use csv2coco::config::Args;
use csv2coco::convert_csv_to_coco;

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("Starting CSV to COCO conversion...");

    match convert_csv_to_coco(&args.csv_file, &args.image_dir, &args.output_json) {
        Ok(_) => info!("COCO JSON written to {}", args.output_json.display()),
        Err(e) => {
            error!("{}", e);
            process::exit(e.exit_code());
        }
    }
}
