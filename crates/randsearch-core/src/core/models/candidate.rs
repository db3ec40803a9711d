use std::fmt;

/// A fixed-length integer vector produced by random sampling.
///
/// Candidates are immutable once generated; the search never mutates one in
/// place, it only generates new ones and compares their scores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    values: Vec<i64>,
}

impl Candidate {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// The empty candidate, used when the requested vector length is zero.
    pub fn empty() -> Self {
        Self { values: Vec::new() }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<i64>> for Candidate {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod candidate_tests {
    use super::*;

    #[test]
    fn new_preserves_values_and_order() {
        let candidate = Candidate::new(vec![3, -1, 4]);
        assert_eq!(candidate.values(), &[3, -1, 4]);
        assert_eq!(candidate.len(), 3);
        assert!(!candidate.is_empty());
    }

    #[test]
    fn empty_candidate_has_zero_length() {
        let candidate = Candidate::empty();
        assert_eq!(candidate.len(), 0);
        assert!(candidate.is_empty());
    }

    #[test]
    fn display_formats_as_bracketed_list() {
        let candidate = Candidate::new(vec![1, -2, 3]);
        assert_eq!(candidate.to_string(), "[1, -2, 3]");
        assert_eq!(Candidate::empty().to_string(), "[]");
    }
}
