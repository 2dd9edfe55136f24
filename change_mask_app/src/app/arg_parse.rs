use std::{ffi::OsString, num::NonZeroU32, path::PathBuf};

use change_mask_lib::*;
use clap::{value_parser, ArgAction::*};

use crate::app::*;

// frame specification
const FRAME_PATHS: &str = "Frames to compare";

// comparison
const TOLERANCE: &str = "Comparison tolerance";
const DIFFERENCE: &str = "Channel difference";
const BLACK_THRESHOLD: &str = "Black threshold";
const WHITE_THRESHOLD: &str = "White threshold";
const DENOISE_SIZE: &str = "Denoise size";

//output settings
const OUTPUT_PATH: &str = "Output path";
const OUTPUT_SIZE: &str = "Output size";
const OUTPUT_FORMAT: &str = "Format";

//Verbosity
const VERBOSITY_QUIET: &str = "Quiet";
const VERBOSITY_VERBOSE: &str = "Verbose";

const DISPLAY_ORDERING: [&str; 11] = [
    //
    // frame specification
    FRAME_PATHS,
    //
    //comparison
    TOLERANCE,
    DIFFERENCE,
    BLACK_THRESHOLD,
    WHITE_THRESHOLD,
    DENOISE_SIZE,
    //
    //outputs
    OUTPUT_PATH,
    OUTPUT_SIZE,
    OUTPUT_FORMAT,
    //
    //verbosity
    VERBOSITY_QUIET,
    VERBOSITY_VERBOSE,
];

fn build_app() -> clap::Command {
    let get_ordering = |arg_name: &str| -> usize {
        match DISPLAY_ORDERING.iter().position(|x| *x == arg_name) {
            Some(idx) => idx,
            None => {
                panic!("argument not assigned a display order: {arg_name:?}");
            }
        }
    };

    //args are not added through method chaining because rustfmt struggles with very long expressions.
    let mut clap_app = clap::Command::new("Change mask")
        .version(clap::crate_version!())
        .about("Find the regions of a scene that changed and stayed changed across a sequence of frames");

    clap_app = clap_app.arg(
        clap::Arg::new(FRAME_PATHS)
            .required(true)
            .num_args(MIN_FRAMES..)
            .value_parser(value_parser!(PathBuf))
            .action(Append)
            .help("Paths of the frames to compare, in order. The first frame is the reference scene. At least two frames are required.")
            .display_order(get_ordering(FRAME_PATHS)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(TOLERANCE)
            .short('t')
            .long("tolerance")
            .help("Per-channel comparison tolerance. Two samples are similar when each colour channel differs by less than this amount. Suggested values are in the range 10 to 60")
            .default_value(DEFAULT_TOLERANCE.to_string())
            .num_args(1)
            .value_parser(value_parser!(u8).range(1..=255))
            .display_order(get_ordering(TOLERANCE)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(DIFFERENCE)
            .long("difference")
            .help("How channel differences are measured. 'wrapping' treats any brightening as a change, 'absolute' treats brightening and darkening alike")
            .default_value("wrapping")
            .num_args(1)
            .value_parser(value_parser!(DifferenceArg))
            .display_order(get_ordering(DIFFERENCE)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(BLACK_THRESHOLD)
            .long("black-threshold")
            .help("A sample is black (changed) when all of its colour channels are below this value")
            .default_value(DEFAULT_BLACK_THRESHOLD.to_string())
            .num_args(1)
            .value_parser(value_parser!(u8))
            .display_order(get_ordering(BLACK_THRESHOLD)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(WHITE_THRESHOLD)
            .long("white-threshold")
            .help("A sample is white when all of its colour channels are above this value. Marked regions that fade past this value during noise suppression are discarded")
            .default_value(DEFAULT_WHITE_THRESHOLD.to_string())
            .num_args(1)
            .value_parser(value_parser!(u8))
            .display_order(get_ordering(WHITE_THRESHOLD)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(DENOISE_SIZE)
            .long("denoise-size")
            .help("Side length of the small grid used for noise suppression. Lower values discard larger speckles")
            .default_value(DEFAULT_DENOISE_SIZE.to_string())
            .num_args(1)
            .value_parser(value_parser!(NonZeroU32))
            .display_order(get_ordering(DENOISE_SIZE)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(OUTPUT_PATH)
            .short('o')
            .long("output")
            .help("Where to write the change mask. The image format is chosen from the file extension")
            .default_value(DEFAULT_OUTPUT_PATH)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .display_order(get_ordering(OUTPUT_PATH)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(OUTPUT_SIZE)
            .long("output-size")
            .help("Resample the change mask to WIDTHxHEIGHT before writing it, e.g '--output-size 640x480'")
            .num_args(1)
            .value_parser(parse_output_size)
            .display_order(get_ordering(OUTPUT_SIZE)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(OUTPUT_FORMAT)
            .long("format")
            .help("Format of the run summary printed to stdout")
            .default_value("normal")
            .num_args(1)
            .value_parser(value_parser!(OutputFormat))
            .display_order(get_ordering(OUTPUT_FORMAT)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(VERBOSITY_QUIET)
            .long("quiet")
            .help("Reduced verbosity")
            .conflicts_with(VERBOSITY_VERBOSE)
            .action(SetTrue)
            .display_order(get_ordering(VERBOSITY_QUIET)),
    );

    clap_app = clap_app.arg(
        clap::Arg::new(VERBOSITY_VERBOSE)
            .long("verbose")
            .help("Increased verbosity")
            .conflicts_with(VERBOSITY_QUIET)
            .action(SetTrue)
            .display_order(get_ordering(VERBOSITY_VERBOSE)),
    );

    clap_app
}

fn parse_output_size(arg: &str) -> Result<(NonZeroU32, NonZeroU32), String> {
    let (width, height) = arg
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {arg:?}"))?;

    let parse_dim = |dim: &str| {
        dim.trim()
            .parse::<NonZeroU32>()
            .map_err(|e| format!("invalid dimension {dim:?}: {e}"))
    };

    Ok((parse_dim(width)?, parse_dim(height)?))
}

pub fn parse_args() -> AppCfg {
    let args = build_app().get_matches();
    cfg_from_matches(&args)
}

#[cfg(test)]
fn try_parse_args_from<I, T>(itr: I) -> Result<AppCfg, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = build_app().try_get_matches_from(itr)?;
    Ok(cfg_from_matches(&args))
}

fn cfg_from_matches(args: &clap::ArgMatches) -> AppCfg {
    let frame_paths = args
        .get_many::<PathBuf>(FRAME_PATHS)
        .expect("This argument is required")
        .cloned()
        .collect();

    let detection = DetectionOptions {
        tolerance: *args
            .get_one::<u8>(TOLERANCE)
            .expect("This argument has a default value"),
        thresholds: ColorThresholds {
            black: *args
                .get_one::<u8>(BLACK_THRESHOLD)
                .expect("This argument has a default value"),
            white: *args
                .get_one::<u8>(WHITE_THRESHOLD)
                .expect("This argument has a default value"),
        },
        difference: match args.get_one::<DifferenceArg>(DIFFERENCE) {
            None | Some(DifferenceArg::Wrapping) => ChannelDifference::Wrapping,
            Some(DifferenceArg::Absolute) => ChannelDifference::Absolute,
        },
        denoise_size: *args
            .get_one::<NonZeroU32>(DENOISE_SIZE)
            .expect("This argument has a default value"),
    };

    let verbosity = if args.get_flag(VERBOSITY_QUIET) {
        ReportVerbosity::Quiet
    } else if args.get_flag(VERBOSITY_VERBOSE) {
        ReportVerbosity::Verbose
    } else {
        ReportVerbosity::Default
    };

    let output_cfg = OutputCfg {
        path: args
            .get_one::<PathBuf>(OUTPUT_PATH)
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        size: args
            .get_one::<(NonZeroU32, NonZeroU32)>(OUTPUT_SIZE)
            .copied(),
        format: *args
            .get_one::<OutputFormat>(OUTPUT_FORMAT)
            .expect("This argument has a default value"),
        verbosity,
    };

    let ret = AppCfg {
        frame_paths,
        detection,
        output_cfg,
    };

    ret
}
