//! Regex-driven spintax expansion.

use rand::{Rng, RngCore};
use regex::Regex;
use tracing::trace;

use super::Spinner;
use crate::vars::SpinError;

/// Expands brace groups innermost-first, one uniform choice per group.
///
/// ```text
/// "{Hi|Hello} {there|{dear|old} friend}"
/// ```
///
/// Every group occurrence is resolved on its own, so repeated groups may
/// produce different picks. Empty alternatives are allowed.
#[derive(Debug, Clone)]
pub struct Spintax {
    group: Regex,
}

impl Spintax {
    pub fn new() -> Self {
        Self { group: Regex::new(r"\{([^{}]*)\}").expect("valid regex") }
    }
}

impl Default for Spintax {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner for Spintax {
    fn expand(&self, text: &str, rng: &mut dyn RngCore) -> Result<String, SpinError> {
        check_balanced(text)?;

        let mut out = text.to_string();
        while let Some(m) = self.group.find(&out) {
            let range = m.range();
            let inner = &out[range.start + 1..range.end - 1];
            let options: Vec<&str> = inner.split('|').collect();
            let pick = options[rng.gen_range(0..options.len())].to_string();
            trace!(group = inner, pick = %pick, "resolved spintax group");
            out.replace_range(range, &pick);
        }

        Ok(out)
    }
}

/// Reject stray `}` and unclosed `{` before any expansion happens.
fn check_balanced(text: &str) -> Result<(), SpinError> {
    let mut open = Vec::new();
    for (i, c) in text.char_indices() {
        match c {
            '{' => open.push(i),
            '}' => {
                if open.pop().is_none() {
                    return Err(SpinError::Unbalanced { position: i });
                }
            }
            _ => {}
        }
    }
    match open.last() {
        Some(&position) => Err(SpinError::Unbalanced { position }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::VarRng;
    use std::collections::HashSet;

    #[test]
    fn plain_text_passes_through() {
        let mut rng = VarRng::seeded(1);
        let out = Spintax::new().expand("no markup here", &mut rng).unwrap();
        assert_eq!(out, "no markup here");
    }

    #[test]
    fn single_group_picks_one_option() {
        let mut rng = VarRng::seeded(3);
        let spin = Spintax::new();
        for _ in 0..50 {
            let out = spin.expand("{a|b|c}!", &mut rng).unwrap();
            assert!(["a!", "b!", "c!"].contains(&out.as_str()), "unexpected {out}");
        }
    }

    #[test]
    fn nested_groups_resolve_fully() {
        let mut rng = VarRng::seeded(11);
        let spin = Spintax::new();
        let allowed: HashSet<&str> =
            ["Hi there", "Hi dear friend", "Hi old friend", "Hello there", "Hello dear friend", "Hello old friend"]
                .into_iter()
                .collect();
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let out = spin.expand("{Hi|Hello} {there|{dear|old} friend}", &mut rng).unwrap();
            assert!(allowed.contains(out.as_str()), "unexpected {out}");
            seen.insert(out);
        }
        assert_eq!(seen.len(), allowed.len());
    }

    #[test]
    fn empty_alternative_is_allowed() {
        let mut rng = VarRng::seeded(5);
        let spin = Spintax::new();
        let mut seen = HashSet::new();
        for _ in 0..100 {
            seen.insert(spin.expand("x{y|}", &mut rng).unwrap());
        }
        assert_eq!(seen, HashSet::from(["xy".to_string(), "x".to_string()]));
    }

    #[test]
    fn same_seed_same_output() {
        let spin = Spintax::new();
        let text = "{a|b|c|d|e}{1|2|3|4|5}{x|y|z}";
        let a = spin.expand(text, &mut VarRng::seeded(42)).unwrap();
        let b = spin.expand(text, &mut VarRng::seeded(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unbalanced_braces_are_rejected() {
        let mut rng = VarRng::seeded(1);
        let spin = Spintax::new();
        assert_eq!(
            spin.expand("a}b", &mut rng).unwrap_err(),
            SpinError::Unbalanced { position: 1 }
        );
        assert_eq!(
            spin.expand("{a|{b}", &mut rng).unwrap_err(),
            SpinError::Unbalanced { position: 0 }
        );
    }
}
