use clap::Parser;

use dmrids_lib::cli::Cli;
use dmrids_lib::error::Result;
use dmrids_lib::export::group_thousands;
use dmrids_lib::pipeline::{run_export, ExportConfig};
use dmrids_lib::reference::{standard_tables, CodeTables};
use dmrids_lib::registry::{default_database_path, download_database, DMR_URL};
use dmrids_lib::selection::SelectionPlan;

#[tokio::main]
async fn main() {
    // Initialize logging - default to info level for our crate
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("dmrids=info,dmrids_lib=info")
    ).init();

    let cli = Cli::parse();
    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("\nerror: {}", e);
            1
        }
    };
    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let tables = standard_tables();

    if cli.is_idle() {
        println!("\nplease try dmrids -h if you need help");
    }

    if cli.list_regions || cli.list_countries {
        print_tables(tables, cli.list_countries);
        return Ok(());
    }

    let database = cli.database.clone().unwrap_or_else(default_database_path);

    if cli.download {
        println!("\ndownloading DMR database {}", database.display());
        let bytes = download_database(DMR_URL, &database).await?;
        println!(" ({} kB downloaded)", group_thousands(bytes.div_ceil(1024) as usize));
    }

    let criteria = cli.criteria();
    if criteria.is_empty() && cli.download {
        return Ok(());
    }

    let (plan, report) = SelectionPlan::build(&criteria, tables)?;
    println!("\noptions specified for production of the export file:");
    for entry in &report.entries {
        println!("{}", entry);
    }

    let config = ExportConfig {
        database,
        output_dir: cli.output_dir,
        format: cli.format.into(),
    };
    let summary = run_export(&config, &plan)?;
    println!("{}", summary.message());
    Ok(())
}

fn print_tables(tables: &CodeTables, with_countries: bool) {
    for (region, region_name) in tables.sorted_regions() {
        println!("-r {}  {}", region, region_name);
        if with_countries {
            for (code, name) in tables.sorted_countries() {
                if code / 100 == region {
                    println!("    -c {}  {}", code, name);
                }
            }
        }
    }
}
