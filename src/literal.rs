use regex_syntax::{hir::literal::Extractor, parse};

/// Extract prefix literals from a token alternation for use as an
/// Aho-Corasick pre-filter. Every match of `pattern` starts with one of the
/// returned literals (lowercased).
///
/// Returns an empty vec when no such guarantee can be given: the pattern
/// does not parse, the literal set is infinite, or one of the literals is
/// shorter than `min_len`. Callers then have to run the full regex.
pub(crate) fn extract_literals(pattern: &str, min_len: usize) -> Vec<String> {
    let hir = match parse(pattern) {
        Ok(h) => h,
        Err(_) => return Vec::new(),
    };

    let mut extractor = Extractor::new();
    extractor.kind(regex_syntax::hir::literal::ExtractKind::Prefix);

    let seq = extractor.extract(&hir);
    let Some(literals) = seq.literals() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(literals.len());
    for lit in literals {
        match std::str::from_utf8(lit.as_bytes()) {
            Ok(s) if s.len() >= min_len => out.push(s.to_lowercase()),
            // Dropping a literal would let real matches slip past the filter.
            _ => return Vec::new(),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_literal() {
        let lits = extract_literals("Firefox", 3);
        assert_eq!(lits, vec!["firefox"]);
    }

    #[test]
    fn alternation() {
        let lits = extract_literals("Firefox|OPR|Kindle(?: Fire)?", 3);
        assert!(lits.contains(&"firefox".to_string()));
        assert!(lits.contains(&"opr".to_string()));
        assert!(lits.iter().any(|l| l.starts_with("kindle")));
    }

    #[test]
    fn too_short_returns_empty() {
        assert!(extract_literals("Firefox|IE", 3).is_empty());
        assert!(extract_literals(r"\d+\.\d+", 3).is_empty());
    }
}
