//! Relative-href absolutization.
//!
//! Each source site writes its internal links differently, and the two join
//! styles below deliberately reproduce the quirks the sources require
//! instead of unifying on one rule. `rooted` strips leading slashes before
//! joining against a base that ends in `/`; `bare` concatenates verbatim.

/// Absolute hrefs pass through untouched; relative ones are stripped of
/// leading slashes and joined to `base` (which must end in `/`).
pub fn absolutize_rooted(base: &str, href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{base}{}", href.trim_start_matches('/'))
    }
}

/// Absolute hrefs pass through untouched; relative ones are appended to
/// `base` with no separator handling at all.
pub fn absolutize_bare(base: &str, href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{base}{href}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooted_join_strips_leading_slashes() {
        assert_eq!(
            absolutize_rooted("https://birac.nic.in/", "/cfp/1"),
            "https://birac.nic.in/cfp/1"
        );
        assert_eq!(
            absolutize_rooted("https://birac.nic.in/", "cfp/1"),
            "https://birac.nic.in/cfp/1"
        );
    }

    #[test]
    fn bare_join_concatenates_verbatim() {
        assert_eq!(
            absolutize_bare("https://www.ccamp.res.in", "/calls/big-25"),
            "https://www.ccamp.res.in/calls/big-25"
        );
        // venture center style: base ends in '/', href may start with one
        assert_eq!(
            absolutize_bare("https://www.venturecenter.co.in/", "/fund"),
            "https://www.venturecenter.co.in//fund"
        );
    }

    #[test]
    fn absolute_hrefs_pass_through() {
        assert_eq!(
            absolutize_rooted("https://birac.nic.in/", "https://example.org/x"),
            "https://example.org/x"
        );
        assert_eq!(
            absolutize_bare("https://www.ccamp.res.in", "http://example.org/x"),
            "http://example.org/x"
        );
    }
}
