//! Command-line argument handling.

pub const USAGE: &str = "usage: larder-report <input-file> (exactly one input file is required)";

/// The input path, if exactly one argument was given.
pub fn input_path<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let path = args.next()?;
    match args.next() {
        Some(_) => None,
        None => Some(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn accepts_exactly_one_argument() {
        assert_eq!(input_path(args(&["inventory.txt"])), Some("inventory.txt".to_string()));
    }

    #[test]
    fn rejects_missing_or_extra_arguments() {
        assert_eq!(input_path(args(&[])), None);
        assert_eq!(input_path(args(&["a.txt", "b.txt"])), None);
    }
}
