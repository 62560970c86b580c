use crate::grid::format::ImageFormatOption;
use crate::report::Metric;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_files_argument(command);
        let command = Self::register_threads_argument(command);
        let command = Self::register_metric_argument(command);
        Self::register_formats_argument(command)
    }

    fn register_input_files_argument(command: Command) -> Command {
        command.arg(Self::create_input_files_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_metric_argument(command: Command) -> Command {
        command.arg(Self::create_metric_argument())
    }

    fn register_formats_argument(command: Command) -> Command {
        command.arg(Self::create_formats_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_files_argument() -> Arg {
        Arg::new("input_files")
            .help("Paths to the images to analyze")
            .value_parser(value_parser!(PathBuf))
            .num_args(1..)
            .required(true)
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_metric_argument() -> Arg {
        arg!(metric: -m --metric <METRIC> "Statistics to print for every image")
            .default_value("All")
            .value_parser(value_parser!(Metric))
    }

    fn create_formats_argument() -> Arg {
        arg!(formats: -f --format <FORMAT> "Image format to accept, may be repeated")
            .action(ArgAction::Append)
            .default_values(["Jpeg", "Png"])
            .value_parser(value_parser!(ImageFormatOption))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_files: Self::extract_input_files_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            metric: Self::extract_metric_argument(matches),
            formats: Self::extract_formats_argument(matches),
        }
    }

    fn extract_input_files_argument(matches: &ArgMatches) -> Vec<PathBuf> {
        matches
            .get_many::<PathBuf>("input_files")
            .expect("Required argument input_files not provided")
            .cloned()
            .collect()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_metric_argument(matches: &ArgMatches) -> Metric {
        matches
            .get_one::<Metric>("metric")
            .expect("Metric must be provided, but was unset.")
            .to_owned()
    }

    fn extract_formats_argument(matches: &ArgMatches) -> Vec<ImageFormatOption> {
        matches
            .get_many::<ImageFormatOption>("formats")
            .expect("Image formats must be provided, but were unset.")
            .copied()
            .collect()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
