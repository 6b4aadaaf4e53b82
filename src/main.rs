//
// img2arr: convert a grayscale image into a 4 bit per pixel C header,
// for splash screens and other display data baked into firmware.
//

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use img2arr::{load_and_pack, write_header, OddPolicy, Options, DEFAULT_ARRAY_NAME};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OddArg {
    /// Pair a trailing sample with a zero nibble.
    Pad,
    /// Refuse images with an odd pixel count.
    Reject,
}

impl From<OddArg> for OddPolicy {
    fn from(arg: OddArg) -> Self {
        match arg {
            OddArg::Pad => OddPolicy::Pad,
            OddArg::Reject => OddPolicy::Reject,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "img2arr",
    version,
    about = "Convert a grayscale image into a packed 4bpp C header.",
    after_help = "Example:\n  img2arr --src miyo-splash.png --target miyo-splash.h"
)]
struct Args {
    /// Source image file name, i.e. 'miyo-splash.png'.
    #[arg(long)]
    src: PathBuf,
    /// Target header file name, i.e. 'miyo-splash.h'.
    #[arg(long)]
    target: PathBuf,
    /// Identifier of the generated array.
    #[arg(long, default_value = DEFAULT_ARRAY_NAME)]
    name: String,
    /// Handling of an odd total pixel count.
    #[arg(long, value_enum, default_value_t = OddArg::Pad)]
    odd: OddArg,
    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: Args) -> img2arr::Result<()> {
    let opts = Options {
        name: args.name,
        odd_policy: args.odd.into(),
    };

    let packed = load_and_pack(&args.src, &opts)?;

    println!("{}:", args.src.display());
    println!("  rows: {}", packed.height);
    println!("  cols: {}", packed.width);
    println!("{} pixels read.", packed.pixels);
    println!(
        "{} after compression to 4 bits per pixel.",
        packed.bytes.len()
    );
    if packed.padded {
        println!("  padded last byte with 0x0.");
    }

    write_header(&args.target, &opts.name, &packed)
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too, on stdout.
            e.print().ok();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error, {}", e);
            ExitCode::FAILURE
        }
    }
}
