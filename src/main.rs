use anyhow::Result;
use bhunty::{Args, BHuntyEngine, RunOutcome};
use clap::Parser;
use log::{debug, error, LevelFilter};
use std::process;

const BANNER: &str = r#"
    ____  __  __            __
   / __ )/ / / /_  ______  / /___  __
  / __  / /_/ / / / / __ \/ __/ / / /
 / /_/ / __  / /_/ / / / / /_/ /_/ /
/_____/_/ /_/\__,_/_/ /_/\__/\__, /
                            /____/
"#;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if !args.silent {
        println!("{}", BANNER);
    }

    let json = args.json;
    let mut engine = match BHuntyEngine::new(args) {
        Ok(engine) => engine,
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    };

    let report = match engine.run().await {
        Ok(report) => report,
        Err(e) => {
            error!("❌ {}", e);
            debug!("Error details: {:?}", e);
            process::exit(1);
        }
    };

    if json {
        engine.write_report_json(&report)?;
    }

    if report.outcome == RunOutcome::Completed {
        debug!(
            "Run for {} completed in {:.2}s: {} subdomains, {} urls, {} failed fetches",
            report.domain,
            report.duration.as_secs_f64(),
            report.subdomains,
            report.urls,
            report.failed_fetches
        );
    }

    Ok(())
}
