//! The typed variable accessor.

use std::fs;
use std::path::Path;

use rand::{Rng, RngCore};
use tracing::debug;
use walkdir::WalkDir;

use super::errors::{ParseError, SpinError, ValidationError};
use super::range::RangeSpec;
use crate::spin::Spinner;

/// Separator used by [`Variable::split_multi`] when the host does not pick one.
pub const DEFAULT_SEPARATOR: char = ',';

/// A named string value supplied by the host.
///
/// Conversions never modify the variable. Validators return a reference to
/// the same variable on success, so checks compose with `?`:
///
/// ```
/// # use lvars_core::vars::Variable;
/// # fn demo(v: &Variable) -> Result<(), lvars_core::vars::ValidationError> {
/// v.require_non_empty(None)?.require_file(true)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
    value: Option<String>,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: Some(value.into()) }
    }

    /// A variable the host knows by name but holds no value for.
    pub fn absent(name: impl Into<String>) -> Self {
        Self { name: name.into(), value: None }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The value, or `""` when absent.
    #[must_use]
    pub fn raw(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Parse `true` / `false`, ignoring ASCII case and surrounding whitespace.
    pub fn parse_bool(&self) -> Result<bool, ParseError> {
        let raw = self.raw().trim();
        if raw.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(ParseError::MalformedBool { name: self.name.clone(), value: self.raw().to_string() })
        }
    }

    /// Parse a base-10 signed integer.
    pub fn parse_int(&self) -> Result<i64, ParseError> {
        parse_i64(&self.name, self.raw())
    }

    /// Split on `separator` and trim every part.
    ///
    /// Empty parts and duplicates are kept. A value without the separator
    /// yields a single trimmed element.
    #[must_use]
    pub fn split_multi(&self, separator: char) -> Vec<String> {
        let raw = self.raw();
        if raw.contains(separator) {
            raw.split(separator).map(|s| s.trim().to_string()).collect()
        } else {
            vec![raw.trim().to_string()]
        }
    }

    /// Read the file named by the value and return its lines.
    ///
    /// I/O errors are returned as-is.
    pub fn read_lines(&self) -> std::io::Result<Vec<String>> {
        let content = fs::read_to_string(self.raw())?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Parse the value as a [`RangeSpec`] without drawing from it.
    pub fn range_spec(&self) -> Result<RangeSpec, ParseError> {
        RangeSpec::parse(&self.name, self.raw())
    }

    /// Draw a random integer.
    ///
    /// `"<min>-<max>"` is inclusive on both ends; a plain `"n"` draws from
    /// `[0, n)`.
    pub fn random_in_range<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<i64, ParseError> {
        let spec = self.range_spec()?;
        let n = spec.sample(rng);
        debug!(var = %self.name, ?spec, value = n, "drew random integer");
        Ok(n)
    }

    /// Hand the raw value to `spinner` and return its expansion.
    pub fn spin_text<S: Spinner + ?Sized>(
        &self,
        spinner: &S,
        rng: &mut dyn RngCore,
    ) -> Result<String, SpinError> {
        spinner.expand(self.raw(), rng)
    }

    /// Fail when the value is absent, empty, or whitespace-only.
    ///
    /// `message` replaces the default `variable <name> has no data`.
    pub fn require_non_empty(&self, message: Option<&str>) -> Result<&Self, ValidationError> {
        if self.raw().trim().is_empty() {
            debug!(var = %self.name, "variable has no data");
            return Err(match message {
                Some(m) => ValidationError::NoData { name: self.name.clone(), message: m.to_string() },
                None => ValidationError::no_data(&self.name),
            });
        }
        Ok(self)
    }

    /// Fail unless the value names an existing regular file.
    ///
    /// With `require_non_empty`, a zero-length file fails too.
    pub fn require_file(&self, require_non_empty: bool) -> Result<&Self, ValidationError> {
        let path = Path::new(self.raw());
        if !path.is_file() {
            return Err(ValidationError::FileNotFound(path.to_path_buf()));
        }

        if require_non_empty {
            let meta = fs::metadata(path)
                .map_err(|e| ValidationError::Io { path: path.to_path_buf(), source: e })?;
            if meta.len() == 0 {
                return Err(ValidationError::FileEmpty(path.to_path_buf()));
            }
        }

        debug!(var = %self.name, path = %path.display(), "file check passed");
        Ok(self)
    }

    /// Fail unless the value names an existing directory.
    ///
    /// With `require_non_empty`, a directory without any entry fails too.
    /// Only direct children are counted.
    pub fn require_directory(&self, require_non_empty: bool) -> Result<&Self, ValidationError> {
        let path = Path::new(self.raw());
        if !path.is_dir() {
            return Err(ValidationError::DirectoryNotFound(path.to_path_buf()));
        }

        if require_non_empty {
            let mut entries = WalkDir::new(path).min_depth(1).max_depth(1).into_iter();
            match entries.next() {
                None => return Err(ValidationError::DirectoryEmpty(path.to_path_buf())),
                Some(Err(e)) => {
                    return Err(ValidationError::Io {
                        path: path.to_path_buf(),
                        source: e.into(),
                    });
                }
                Some(Ok(_)) => {}
            }
        }

        debug!(var = %self.name, path = %path.display(), "directory check passed");
        Ok(self)
    }
}

/// Integer parsing shared by [`Variable::parse_int`] and the range grammar.
pub(crate) fn parse_i64(name: &str, raw: &str) -> Result<i64, ParseError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ParseError::MalformedInt { name: name.to_string(), value: raw.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::VarRng;
    use rstest::rstest;

    fn var(value: &str) -> Variable {
        Variable::new("v", value)
    }

    #[rstest]
    #[case("true", true)]
    #[case("True", true)]
    #[case("TRUE", true)]
    #[case("false", false)]
    #[case("False", false)]
    #[case(" false ", false)]
    fn parse_bool_accepts_literals(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(var(input).parse_bool().unwrap(), expected);
    }

    #[rstest]
    #[case("yes")]
    #[case("1")]
    #[case("")]
    #[case("tru")]
    fn parse_bool_rejects_other_text(#[case] input: &str) {
        let err = Variable::new("flag", input).parse_bool().unwrap_err();
        assert!(matches!(err, ParseError::MalformedBool { ref name, .. } if name == "flag"));
        assert!(err.to_string().contains("flag"));
    }

    #[rstest]
    #[case("42", 42)]
    #[case("-17", -17)]
    #[case("+8", 8)]
    #[case(" 7 ", 7)]
    fn parse_int_accepts_decimal(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(var(input).parse_int().unwrap(), expected);
    }

    #[rstest]
    #[case("4a")]
    #[case("")]
    #[case("0x10")]
    #[case("1.5")]
    #[case("99999999999999999999")]
    fn parse_int_rejects_garbage(#[case] input: &str) {
        let err = Variable::new("threads", input).parse_int().unwrap_err();
        assert!(err.to_string().contains("threads"));
    }

    #[test]
    fn split_multi_trims_parts() {
        assert_eq!(var("a, b ,c").split_multi(','), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_multi_without_separator_is_single_item() {
        assert_eq!(var("  solo ").split_multi(','), vec!["solo"]);
    }

    #[test]
    fn split_multi_keeps_empty_and_duplicate_parts() {
        assert_eq!(var("a,,a, ").split_multi(','), vec!["a", "", "a", ""]);
    }

    #[test]
    fn split_multi_custom_separator() {
        assert_eq!(var("x; y;z").split_multi(';'), vec!["x", "y", "z"]);
        assert_eq!(var("x,y").split_multi(';'), vec!["x,y"]);
    }

    #[test]
    fn degenerate_range_always_returns_its_value() {
        let mut rng = VarRng::seeded(9);
        for _ in 0..100 {
            assert_eq!(var("5-5").random_in_range(&mut rng).unwrap(), 5);
        }
    }

    #[test]
    fn inclusive_range_covers_both_ends() {
        let mut rng = VarRng::seeded(1234);
        let mut seen = [false; 10];
        for _ in 0..2000 {
            let n = var("0-9").random_in_range(&mut rng).unwrap();
            assert!((0..=9).contains(&n), "out of range: {n}");
            seen[usize::try_from(n).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s), "not every value observed: {seen:?}");
    }

    #[test]
    fn plain_bound_is_exclusive() {
        let mut rng = VarRng::seeded(99);
        let mut seen = [false; 10];
        for _ in 0..2000 {
            let n = var("10").random_in_range(&mut rng).unwrap();
            assert!((0..10).contains(&n), "out of range: {n}");
            seen[usize::try_from(n).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn random_in_range_reports_variable_name() {
        let mut rng = VarRng::seeded(1);
        let err = Variable::new("delay", "1-x").random_in_range(&mut rng).unwrap_err();
        assert!(matches!(err, ParseError::MalformedRange { ref name, .. } if name == "delay"));
    }

    #[test]
    fn random_in_range_rejects_inverted_range() {
        let mut rng = VarRng::seeded(1);
        let err = var("9-0").random_in_range(&mut rng).unwrap_err();
        assert!(matches!(err, ParseError::InvertedRange { min: 9, max: 0, .. }));
    }

    #[rstest]
    #[case(Variable::new("v", ""))]
    #[case(Variable::new("v", "   "))]
    #[case(Variable::new("v", "\t\n"))]
    #[case(Variable::absent("v"))]
    fn require_non_empty_rejects_blank(#[case] v: Variable) {
        let err = v.require_non_empty(None).unwrap_err();
        assert_eq!(err.to_string(), "variable v has no data");
    }

    #[test]
    fn require_non_empty_uses_custom_message() {
        let err = Variable::absent("proxy").require_non_empty(Some("set a proxy first")).unwrap_err();
        assert_eq!(err.to_string(), "set a proxy first");
    }

    #[test]
    fn require_non_empty_returns_same_variable() {
        let v = var("x");
        let out = v.require_non_empty(None).unwrap();
        assert!(std::ptr::eq(out, &v));
        assert_eq!(out, &Variable::new("v", "x"));
    }

    #[test]
    fn require_file_missing_path() {
        let err = var("/definitely/not/here.txt").require_file(false).unwrap_err();
        assert_eq!(err.to_string(), "file /definitely/not/here.txt not found");
    }

    #[test]
    fn require_directory_missing_path() {
        let err = var("/definitely/not/here").require_directory(false).unwrap_err();
        assert_eq!(err.to_string(), "directory /definitely/not/here not found");
    }

    #[test]
    fn read_lines_missing_file_is_raw_io_error() {
        let err = var("/definitely/not/here.txt").read_lines().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
