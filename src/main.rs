use std::env::args_os;
use std::process::ExitCode;

use pxl::{analyze_image_files, init_logger, CLIParser};

#[ctor::ctor]
fn init() {
    init_logger();
}

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let mut exit_code = ExitCode::SUCCESS;
    for (file_path, result) in analyze_image_files(&arguments) {
        match result {
            Ok(report) => println!(
                "{}: {}",
                file_path.display(),
                report.summary(arguments.metric())
            ),
            Err(e) => {
                eprintln!(
                    "{}: {} failed because of: {}",
                    file_path.display(),
                    e.stage(),
                    e
                );
                exit_code = ExitCode::FAILURE;
            }
        }
    }
    exit_code
}
