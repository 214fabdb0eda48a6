//! Output-directory name component sanitization.

/// Sanitizes a profile-name component for use in a directory name.
///
/// - Keeps alphanumerics and `_`
/// - Maps spaces to `_`
/// - Drops everything else
/// - Collapses consecutive underscores and trims them from both ends
pub fn sanitize_component(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let replacement = if c.is_alphanumeric() {
            Some(c)
        } else if c == ' ' || c == '_' {
            Some('_')
        } else {
            None
        };

        match replacement {
            Some(ch) if ch == '_' => {
                if !prev_underscore {
                    out.push('_');
                }
                prev_underscore = true;
            }
            Some(ch) => {
                out.push(ch);
                prev_underscore = false;
            }
            None => {}
        }
    }

    out.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_alphanumerics() {
        assert_eq!(sanitize_component("Apple"), "Apple");
        assert_eq!(sanitize_component("Zucchini2"), "Zucchini2");
    }

    #[test]
    fn maps_spaces_to_underscore() {
        assert_eq!(sanitize_component("My Island"), "My_Island");
    }

    #[test]
    fn drops_symbols() {
        assert_eq!(sanitize_component("a/b\\c:d"), "abcd");
    }

    #[test]
    fn collapses_and_trims_underscores() {
        assert_eq!(sanitize_component("__a  b__"), "a_b");
    }
}
