//! Verbosity utilities

/// Get the log filter based on verbosity
pub fn get_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        2 => "salesboard=trace,debug",
        _ => "trace", // -vvv traces dependencies too
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Cli;
    use clap::CommandFactory;

    #[test]
    fn test_log_levels() {
        assert_eq!(get_log_level(0), "info");
        assert_eq!(get_log_level(1), "debug");
        assert_eq!(get_log_level(2), "salesboard=trace,debug");
        assert_eq!(get_log_level(5), "trace");
    }

    #[test]
    fn test_help_lists_commands() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("report"));
        assert!(help.contains("show"));
    }
}
