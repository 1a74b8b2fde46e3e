#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::error::DepMoleError;
    use crate::report::{DisplayMode, Status, TypeFilter};
    use clap::Parser;
    use std::path::Path;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("dep-mole").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.path, Path::new("."));
        assert!(!args.verify);

        let selection = args.selection().unwrap();
        assert_eq!(selection.type_filter, TypeFilter::All);
        assert_eq!(selection.mode, DisplayMode::Status(Status::ALL.to_vec()));
    }

    #[test]
    fn test_positional_path_and_verify() {
        let args = parse(&["some/project", "--verify", "--dev"]);
        assert_eq!(args.path, Path::new("some/project"));
        assert!(args.verify);

        let selection = args.selection().unwrap();
        assert_eq!(selection.type_filter, TypeFilter::Dev);
    }

    #[test]
    fn test_type_filters_are_mutually_exclusive() {
        let err = parse(&["--prod", "--dev"]).selection().unwrap_err();
        match err {
            DepMoleError::InvalidOptionCombination { message } => {
                assert!(message.contains("--prod"));
                assert!(message.contains("--dev"));
            }
            other => panic!("expected InvalidOptionCombination, got {other:?}"),
        }
    }

    #[test]
    fn test_all_conflicts_with_specific_type() {
        assert!(parse(&["--all", "--peer"]).selection().is_err());
        // --all alone is just the default spelled out
        let selection = parse(&["--all"]).selection().unwrap();
        assert_eq!(selection.type_filter, TypeFilter::All);
    }

    #[test]
    fn test_flat_conflicts_with_status_flags() {
        let err = parse(&["--flat", "--healthy"]).selection().unwrap_err();
        match err {
            DepMoleError::InvalidOptionCombination { message } => {
                assert!(message.contains("--flat"));
            }
            other => panic!("expected InvalidOptionCombination, got {other:?}"),
        }
        assert!(parse(&["--flat", "--missing"]).selection().is_err());
    }

    #[test]
    fn test_flat_alone_selects_flat_mode() {
        let selection = parse(&["--flat"]).selection().unwrap();
        assert_eq!(selection.mode, DisplayMode::Flat);
    }

    #[test]
    fn test_flat_combines_with_type_filter() {
        let selection = parse(&["--flat", "--prod"]).selection().unwrap();
        assert_eq!(selection.type_filter, TypeFilter::Prod);
        assert_eq!(selection.mode, DisplayMode::Flat);
    }

    #[test]
    fn test_status_flags_union() {
        let selection = parse(&["--unused", "--missing"]).selection().unwrap();
        assert_eq!(
            selection.mode,
            DisplayMode::Status(vec![Status::Unused, Status::Missing])
        );
    }

    #[test]
    fn test_single_status_flag() {
        let selection = parse(&["--notinstalled"]).selection().unwrap();
        assert_eq!(
            selection.mode,
            DisplayMode::Status(vec![Status::NotInstalled])
        );
    }

    #[test]
    fn test_status_flags_combine_with_type_filter() {
        let selection = parse(&["--peer", "--healthy"]).selection().unwrap();
        assert_eq!(selection.type_filter, TypeFilter::Peer);
        assert_eq!(selection.mode, DisplayMode::Status(vec![Status::Healthy]));
    }
}
