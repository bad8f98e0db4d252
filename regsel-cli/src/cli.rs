use clap::{Arg, ArgAction, Command, ValueHint};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("regsel")
        .version(clap::crate_version!())
        .about("Iterative feature selection for linear regression")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("optimize")
                .about("Shrink the feature set iteratively and keep the best-scoring subset")
                .arg(
                    Arg::new("dataset")
                        .help(
                            "Path to the CSV dataset (last column is the target). \
                             Overrides dataset_path in the configuration file.",
                        )
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("rfe_step")
                        .long("rfe-step")
                        .help("Features dropped per internal RFE round")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("remove_count")
                        .long("remove-count")
                        .help("Features removed per iteration")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("min_features")
                        .long("min-features")
                        .help("Stop once the feature count reaches this value")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("save_dir")
                        .short('o')
                        .long("save-dir")
                        .help("Directory the best feature subset (and model) is written to")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("save_model")
                        .long("save-model")
                        .help("Also save the winning model as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("evaluate")
                .about("Fit ordinary least squares on a hold-out split and report metrics")
                .arg(
                    Arg::new("dataset")
                        .help("Path to the CSV dataset (last column is the target)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("save_model")
                        .long("save-model")
                        .help("Write the trained model to this JSON file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("rfe")
                .about("Run recursive feature elimination once and export the kept columns")
                .arg(
                    Arg::new("dataset")
                        .help("Path to the CSV dataset (last column is the target)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("CSV file the selected features and target are written to")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("n_features")
                        .short('n')
                        .long("n-features")
                        .help("Number of features to keep. Defaults to half, at least one.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("step")
                        .long("step")
                        .help("Features dropped per elimination round")
                        .default_value("1")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("estimator")
                        .long("estimator")
                        .help("Model whose weights rank the features")
                        .default_value("linear")
                        .value_parser(["linear", "svr"]),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_rfe_defaults() {
        let m = build_cli()
            .try_get_matches_from(["regsel", "rfe", "data.csv", "-o", "out.csv"])
            .unwrap();
        let (name, sub) = m.subcommand().unwrap();
        assert_eq!(name, "rfe");
        assert_eq!(sub.get_one::<usize>("step"), Some(&1));
        assert_eq!(sub.get_one::<String>("estimator").map(String::as_str), Some("linear"));
        assert!(sub.get_one::<usize>("n_features").is_none());
    }

    #[test]
    fn test_unknown_estimator_rejected() {
        let res = build_cli().try_get_matches_from([
            "regsel", "rfe", "data.csv", "-o", "out.csv", "--estimator", "tree",
        ]);
        assert!(res.is_err());
    }
}
