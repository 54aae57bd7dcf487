/// Describes on which side of an edge a point lies.
///
/// Wraps the orientation determinant of the edge's vector and the vector from the edge's
/// start to the query point. Created by [Edge::side_query](crate::Edge::side_query).
///
/// The sign is computed with an exact predicate: a point is on the line if and only if it
/// is exactly collinear with the edge.
#[derive(Debug, Clone, Copy)]
pub struct LineSideInfo {
    signed_side: f64,
}

impl PartialEq for LineSideInfo {
    fn eq(&self, other: &LineSideInfo) -> bool {
        if self.is_on_line() || other.is_on_line() {
            self.is_on_line() && other.is_on_line()
        } else {
            self.is_on_right_side() == other.is_on_right_side()
        }
    }
}

impl LineSideInfo {
    #[inline]
    pub(crate) fn from_determinant(signed_side: f64) -> Self {
        LineSideInfo { signed_side }
    }

    /// The determinant this info was created from. Its magnitude is twice the area of the
    /// triangle spanned by the edge and the query point.
    pub fn signed_side(&self) -> f64 {
        self.signed_side
    }

    /// Returns `true` if a point lies strictly on the left side of the edge.
    ///
    /// "Left" assumes a right handed coordinate system (y axis pointing upwards). For a
    /// y-down canvas, this is the right side on screen.
    pub fn is_on_left_side(&self) -> bool {
        self.signed_side > 0.0
    }

    /// Returns `true` if a point lies strictly on the right side of the edge.
    pub fn is_on_right_side(&self) -> bool {
        self.signed_side < 0.0
    }

    /// Returns `true` if a point lies on the left side of the edge or on the line itself.
    pub fn is_on_left_side_or_on_line(&self) -> bool {
        self.signed_side >= 0.0
    }

    /// Returns `true` if a point lies exactly on the line through the edge.
    #[inline]
    pub fn is_on_line(&self) -> bool {
        self.signed_side == 0.0
    }

    /// The same classification relative to the reversed edge.
    pub fn reversed(self) -> Self {
        LineSideInfo {
            signed_side: -self.signed_side,
        }
    }
}

#[cfg(test)]
mod test {
    use super::LineSideInfo;

    #[test]
    fn test_classification() {
        let left = LineSideInfo::from_determinant(2.0);
        assert!(left.is_on_left_side());
        assert!(left.is_on_left_side_or_on_line());
        assert!(!left.is_on_right_side());
        assert!(left.reversed().is_on_right_side());

        let on_line = LineSideInfo::from_determinant(-0.0);
        assert!(on_line.is_on_line());
        assert!(!on_line.is_on_left_side());
        assert!(on_line.is_on_left_side_or_on_line());
        assert_eq!(on_line, on_line.reversed());
        assert_ne!(left, on_line);
    }
}
