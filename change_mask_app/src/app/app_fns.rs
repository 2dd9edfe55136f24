use std::error::Error;

use change_mask_lib::*;

use crate::app::*;

pub fn run_app() -> i32 {
    let cfg = arg_parse::parse_args();
    configure_logs(cfg.output_cfg.verbosity);

    let ret = match run_app_inner(&cfg) {
        Ok(()) => 0,
        Err(fatal_error) => {
            print_fatal_err(fatal_error, cfg.output_cfg.verbosity);
            1
        }
    };

    ret
}

fn run_app_inner(cfg: &AppCfg) -> eyre::Result<()> {
    let output_cfg = &cfg.output_cfg;

    debug!(
        "comparing {} frames with {:?}",
        cfg.frame_paths.len(),
        cfg.detection
    );

    let mask = ChangeMaskBuilder::from_options(cfg.detection)
        .build(&cfg.frame_paths)
        .map_err(AppError::from)?;

    mask.write(&output_cfg.path, output_cfg.size)
        .map_err(AppError::from)?;

    let summary = RunSummary::new(&mask, &cfg.detection, &output_cfg.path);
    print_summary(&summary, output_cfg.format)?;

    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_summary(summary: &RunSummary, format: OutputFormat) -> Result<(), AppError> {
    let rendered = summary.render(format)?;
    println!("{rendered}");

    Ok(())
}

fn print_fatal_err(fatal_err: eyre::Report, verbosity: ReportVerbosity) {
    error!(target: "app-errorlog", "{}", fatal_err);

    if verbosity == ReportVerbosity::Verbose {
        let mut source: Option<&(dyn Error + 'static)> = fatal_err.source();
        while let Some(e) = source {
            error!(target: "app-errorlog", "    caused by: {}", e);
            source = e.source();
        }
    }
}

pub fn configure_logs(verbosity: ReportVerbosity) {
    use simplelog::*;

    let mut cfg = simplelog::ConfigBuilder::new();

    let min_loglevel = match verbosity {
        ReportVerbosity::Quiet => LevelFilter::Warn,
        ReportVerbosity::Default => LevelFilter::Info,
        ReportVerbosity::Verbose => LevelFilter::Trace,
    };

    TermLogger::init(
        min_loglevel,
        cfg.build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("TermLogger failed to initialize");
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use change_mask_lib::{DetectionOptions, BLACK, WHITE};
    use image::RgbaImage;
    use tempfile::tempdir;

    use super::run_app_inner;
    use crate::app::{AppCfg, OutputCfg, OutputFormat, ReportVerbosity};

    fn cfg(frame_paths: Vec<PathBuf>, output: PathBuf) -> AppCfg {
        AppCfg {
            frame_paths,
            detection: DetectionOptions::default(),
            output_cfg: OutputCfg {
                path: output,
                size: None,
                format: OutputFormat::Json,
                verbosity: ReportVerbosity::Quiet,
            },
        }
    }

    #[test]
    fn test_run_writes_mask() {
        let dir = tempdir().unwrap();
        let empty = RgbaImage::from_pixel(100, 100, WHITE);
        let mut occupied = empty.clone();
        for x in 10..30 {
            for y in 60..80 {
                occupied.put_pixel(x, y, BLACK);
            }
        }

        let paths = vec![dir.path().join("0.png"), dir.path().join("1.png")];
        empty.save(&paths[0]).unwrap();
        occupied.save(&paths[1]).unwrap();

        let output = dir.path().join("nested/results.png");
        run_app_inner(&cfg(paths, output.clone())).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_failed_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let frame = RgbaImage::from_pixel(100, 100, WHITE);
        let first = dir.path().join("0.png");
        frame.save(&first).unwrap();

        let output = dir.path().join("results.jpg");
        let paths = vec![first, dir.path().join("missing.png")];
        let err = run_app_inner(&cfg(paths, output.clone())).unwrap_err();

        assert!(err.to_string().contains("missing.png"));
        assert!(!output.exists());
    }
}
