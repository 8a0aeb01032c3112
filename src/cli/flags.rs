use std::path::PathBuf;

use clap::{ArgAction, Parser};

use passgen::MAX_LENGTH;

/// Generate a password with at least one character from every selected
/// category.
#[derive(Debug, Default, Parser)]
#[command(name = "passgen", version, about)]
pub struct CliFlags {
    /// Password length
    #[arg(short, long, value_name = "N", value_parser = parse_length)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_special: bool,

    /// Leave out look-alike characters (I l 1 O 0 o)
    #[arg(short, long)]
    pub avoid_ambiguous: bool,

    /// Copy the password to the clipboard instead of printing it
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Append the password to a file (directory or no value: ./passwords.txt)
    #[arg(
        short,
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = "."
    )]
    pub output: Option<PathBuf>,

    /// Start from the saved settings instead of the defaults
    #[arg(short, long)]
    pub saved: bool,

    /// Save the effective settings as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Print only the password
    #[arg(short, long)]
    pub quiet: bool,

    /// Prompt for every option
    #[arg(short, long)]
    pub interactive: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a whole number up to {MAX_LENGTH}"))?;
    if length > MAX_LENGTH {
        return Err(format!("maximum length is {MAX_LENGTH}"));
    }
    Ok(length)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("passgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn definition_is_consistent() {
        CliFlags::command().debug_assert();
    }

    #[test]
    fn category_and_output_flags() {
        let flags = parse(&["-l", "24", "--no-special", "-a", "-o", "out.txt", "-vv"]);
        assert_eq!(flags.length, Some(24));
        assert!(flags.no_special);
        assert!(!flags.no_digits);
        assert!(flags.avoid_ambiguous);
        assert_eq!(flags.output, Some(PathBuf::from("out.txt")));
        assert_eq!(flags.verbose, 2);
    }

    #[test]
    fn bare_output_flag_means_current_dir() {
        let flags = parse(&["-o"]);
        assert_eq!(flags.output, Some(PathBuf::from(".")));
    }

    #[test]
    fn rejects_non_numeric_length() {
        let args = ["passgen", "--length", "twelve"];
        assert!(CliFlags::try_parse_from(args).is_err());
    }

    #[test]
    fn rejects_lengths_past_the_maximum() {
        let huge = usize::MAX.to_string();
        assert!(CliFlags::try_parse_from(["passgen", "-l", huge.as_str()]).is_err());
        let over = (MAX_LENGTH + 1).to_string();
        assert!(CliFlags::try_parse_from(["passgen", "-l", over.as_str()]).is_err());

        let max = MAX_LENGTH.to_string();
        assert_eq!(parse(&["-l", max.as_str()]).length, Some(MAX_LENGTH));
    }
}
