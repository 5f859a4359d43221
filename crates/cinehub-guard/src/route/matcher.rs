//! Path-template matching.
//!
//! A template like `/movie/:id/comment` is compiled once into an anchored
//! regular expression where every `:name` segment becomes a single-segment
//! wildcard. Matching is a pure boolean test with an exact segment-count
//! guarantee: a template with N segments never matches a path with a
//! different count.

use regex::Regex;

use cinehub_core::error::AppError;

/// A compiled matcher for one route path template.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    /// Anchored pattern built from the template.
    pattern: Regex,
}

impl PathMatcher {
    /// Compile a path template.
    ///
    /// Literal segments are escaped before compilation, so metacharacters
    /// in route paths cannot change the match semantics.
    pub fn compile(template: &str) -> Result<Self, AppError> {
        let mut pattern = String::with_capacity(template.len() + 8);
        pattern.push('^');
        for segment in template.split('/') {
            if segment.starts_with(':') && segment.len() > 1 {
                pattern.push_str("[^/]+");
            } else {
                pattern.push_str(&regex::escape(segment));
            }
            pattern.push('/');
        }
        // Drop the trailing separator re-added above and anchor.
        pattern.pop();
        pattern.push('$');

        let pattern = Regex::new(&pattern).map_err(|e| {
            AppError::configuration(format!("Invalid route template '{template}': {e}"))
        })?;
        Ok(Self { pattern })
    }

    /// Test a concrete navigated path against the template.
    pub fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_segment_matches() {
        let m = PathMatcher::compile("/movie/:id/comment").unwrap();
        assert!(m.matches("/movie/42/comment"));
        assert!(m.matches("/movie/abc-def/comment"));
    }

    #[test]
    fn test_segment_count_is_exact() {
        let m = PathMatcher::compile("/movie/:id/comment").unwrap();
        assert!(!m.matches("/movie/42/comment/extra"));
        assert!(!m.matches("/movie/comment"));
        assert!(!m.matches("/movie/42"));
    }

    #[test]
    fn test_literal_only_template() {
        let m = PathMatcher::compile("/category").unwrap();
        assert!(m.matches("/category"));
        assert!(!m.matches("/category/1"));
    }

    #[test]
    fn test_literal_segments_are_escaped() {
        let m = PathMatcher::compile("/report/q+a").unwrap();
        assert!(m.matches("/report/q+a"));
        assert!(!m.matches("/report/qqa"));
    }

    #[test]
    fn test_param_does_not_cross_separator() {
        let m = PathMatcher::compile("/movie/:id").unwrap();
        assert!(!m.matches("/movie/42/comment"));
    }
}
