mod error;
mod logo;
mod variant;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;

use error::LogoError;
use logo::{Logo, LogoPaths};

/// Reads `webrend/public/logo/logo.png` and writes `logo_inverted.png` and
/// `logo_black.png` next to it. Paths are relative to the working directory.
/// Arguments other than `--help` and `--version` are ignored.
#[derive(Parser)]
#[command(
    name = "logo-variants",
    about = "Derive inverted and black variants of the site logo",
    version
)]
struct Cli {}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn run(paths: &LogoPaths) -> Result<(), LogoError> {
    let logo = Logo::open(&paths.input)?;
    log::debug!("variants will be encoded as {:?}", logo.format());

    // Both variants are built before anything touches the disk.
    let inverted = variant::invert(logo.image());
    let black = variant::blacken(logo.image())?;

    logo.save(&inverted, &paths.inverted)?;
    logo.save(&black, &paths.black)?;
    Ok(())
}

fn main() {
    init_logger();

    match Cli::try_parse() {
        Ok(_) => {}
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => log::warn!("ignoring arguments: {}", e.to_string().trim()),
    }

    if let Err(e) = run(&LogoPaths::default()) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    println!("Logo inverted and black versions created successfully.");
}
