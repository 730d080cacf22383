//! Pure text transformation for a single [`Mutation`].
//!
//! | mode      | existing | result                                            |
//! |-----------|----------|---------------------------------------------------|
//! | `append`  | absent   | `content\n`                                       |
//! | `append`  | present  | `existing.trim_end()` + `\n` + `content` + `\n`   |
//! | `replace` | any      | `content\n`                                       |
//!
//! Line endings are normalised to LF, trailing line breaks of `content` are
//! dropped, and empty pieces are not joined, so the result always ends with
//! exactly one `\n`.

use cikit_core::Mutation;

/// Compute the new contents of a target file.
pub fn apply_mutation(existing: Option<&str>, mutation: &Mutation) -> String {
    let content = normalize_line_endings(mutation.content());
    let content = content.trim_end_matches('\n');

    let prior = match mutation {
        Mutation::Append(_) => existing.map(normalize_line_endings),
        Mutation::Replace(_) => None,
    };
    let prior = prior.as_deref().map(str::trim_end).unwrap_or_default();

    let mut out = String::with_capacity(prior.len() + content.len() + 2);
    for piece in [prior, content] {
        if piece.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(piece);
    }
    out.push('\n');
    out
}

pub(crate) fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn append(s: &str) -> Mutation {
        Mutation::Append(s.to_string())
    }

    fn replace(s: &str) -> Mutation {
        Mutation::Replace(s.to_string())
    }

    #[test]
    fn append_to_absent_file() {
        assert_eq!(apply_mutation(None, &append("- fixed bug")), "- fixed bug\n");
    }

    #[test]
    fn append_strips_trailing_whitespace_of_existing() {
        assert_eq!(apply_mutation(Some("old\n\n   "), &append("new")), "old\nnew\n");
    }

    #[test]
    fn append_keeps_leading_whitespace_of_existing() {
        assert_eq!(apply_mutation(Some("  indented\n"), &append("x")), "  indented\nx\n");
    }

    #[test]
    fn append_onto_blank_file_has_no_leading_newline() {
        assert_eq!(apply_mutation(Some(" \n\n"), &append("first")), "first\n");
    }

    #[test]
    fn append_empty_content_only_normalises_tail() {
        assert_eq!(apply_mutation(Some("old  \n\n"), &append("")), "old\n");
    }

    #[test]
    fn replace_ignores_existing() {
        assert_eq!(apply_mutation(Some("1.2.3\n"), &replace("2.0.0")), "2.0.0\n");
        assert_eq!(apply_mutation(None, &replace("2.0.0")), "2.0.0\n");
    }

    #[test]
    fn replace_empty_content_leaves_single_newline() {
        assert_eq!(apply_mutation(Some("anything"), &replace("")), "\n");
    }

    #[test]
    fn replace_is_idempotent() {
        let m = replace("line one\nline two\n\n");
        let once = apply_mutation(Some("seed"), &m);
        let twice = apply_mutation(Some(&once), &m);
        assert_eq!(once, twice);
    }

    #[test]
    fn content_trailing_newlines_collapse_to_one() {
        assert_eq!(apply_mutation(None, &append("a\n\n\n")), "a\n");
        assert_eq!(apply_mutation(Some("x"), &replace("b\r\n")), "b\n");
    }

    #[test]
    fn crlf_is_normalised() {
        assert_eq!(
            apply_mutation(Some("one\r\ntwo\r\n"), &append("three\r\nfour")),
            "one\ntwo\nthree\nfour\n"
        );
    }

    #[test]
    fn result_always_ends_with_exactly_one_newline() {
        let priors = [None, Some(""), Some("x"), Some("x\n\n"), Some("\n \t\n")];
        let contents = ["", "y", "y\n", "\n\n", "multi\nline"];
        for prior in priors {
            for content in contents {
                for m in [append(content), replace(content)] {
                    let out = apply_mutation(prior, &m);
                    assert!(out.ends_with('\n'), "{prior:?} {m:?} -> {out:?}");
                    assert!(
                        !out.ends_with("\n\n") || out == "\n",
                        "{prior:?} {m:?} -> {out:?}"
                    );
                }
            }
        }
    }
}
